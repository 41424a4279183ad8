mod features;
mod schema;
mod symbol;
mod symbols;
mod view;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use symscope_api::{SymbolListQuery, SymbolQuery, SymbolService};
use symscope_core::ClientConfig;

pub use features::FeatureCommands;
pub use schema::SchemaTarget;

#[derive(Parser)]
#[command(
    name = "symscope",
    version,
    about = "Look up exported symbols of a repository revision",
    long_about = "Symscope asks a code search instance for the exported symbol tree of a \
                  repository at a revision and finds symbols by moniker. It shows the \
                  symbol's hover documentation, its definition and a few usage examples."
)]
pub struct Cli {
    /// Instance URL. Overrides the config file and SRC_ENDPOINT
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Access token. Overrides the config file and SRC_ACCESS_TOKEN
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Mirror logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve one symbol by moniker
    #[command(
        long_about = "Fetches the exported symbol tree of the repository at COMMIT and prints \
                      the first symbol, in depth-first order, whose moniker matches \
                      SCHEME and IDENTIFIER."
    )]
    Symbol {
        /// Opaque repository node ID
        #[arg(value_name = "REPO_ID")]
        repository_id: String,
        /// Revision to read symbols from
        #[arg(value_name = "COMMIT")]
        commit_id: String,
        /// Moniker scheme, e.g. `go`
        scheme: String,
        /// Moniker identifier, e.g. `github.com/a/b/pkg.Foo`
        identifier: String,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// List exported symbols under a path
    Symbols {
        #[arg(value_name = "REPO_ID")]
        repository_id: String,
        #[arg(value_name = "COMMIT")]
        commit_id: String,
        /// Tree path, defaults to the repository root
        #[arg(long)]
        path: Option<String>,
        /// Print the forest as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or change feature switches
    Features {
        #[command(subcommand)]
        command: Option<FeatureCommands>,
    },
    /// Print the JSON schema of an output type
    Schema {
        #[arg(value_enum, default_value_t = SchemaTarget::Symbol)]
        target: SchemaTarget,
    },
}

/// Applies command-line overrides on top of the file and environment layers,
/// then validates the merged result once.
pub fn resolve_config(
    mut config: ClientConfig,
    endpoint: Option<String>,
    token: Option<String>,
) -> symscope_core::Result<ClientConfig> {
    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint;
    }
    if let Some(token) = token {
        config.access_token = Some(token);
    }
    config.validate()?;
    Ok(config)
}

fn connect(
    endpoint: Option<String>,
    token: Option<String>,
) -> Result<(ClientConfig, Arc<dyn SymbolService>), Box<dyn std::error::Error>> {
    let config = resolve_config(symscope_runtime::load_config()?, endpoint, token)?;
    let service = symscope_runtime::build_default_client(&config)?;
    Ok((config, service))
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let _guard = symscope_runtime::init_logging("cli", cli.verbose);

    match cli.command {
        Commands::Symbol {
            repository_id,
            commit_id,
            scheme,
            identifier,
            json,
        } => {
            let (config, service) = connect(cli.endpoint, cli.token)?;
            let query = SymbolQuery::new(repository_id, commit_id, scheme, identifier);
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(symbol::run(service, &config, query, json))
        }
        Commands::Symbols {
            repository_id,
            commit_id,
            path,
            json,
        } => {
            let (_, service) = connect(cli.endpoint, cli.token)?;
            let mut query = SymbolListQuery::new(repository_id, commit_id);
            if let Some(path) = path {
                query = query.with_path(path);
            }
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(symbols::run(service, query, json))
        }
        Commands::Features { command } => features::run(command.unwrap_or_default()),
        Commands::Schema { target } => schema::run(target),
    }
}
