fn main() {
    if let Err(e) = symscope_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
