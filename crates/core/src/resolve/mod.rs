mod matcher;
mod search;

pub use matcher::{matches, matches_key};
pub use search::{MAX_SYMBOL_DEPTH, SymbolWalk, find_symbol, find_symbol_by_key, take_symbol, walk};
