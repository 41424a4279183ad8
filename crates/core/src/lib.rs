pub mod config;
pub mod error;
pub mod facade;
pub mod graphql;
pub mod hover;
pub mod logging;
pub mod resolve;
pub mod route;

pub use config::ClientConfig;
pub use error::{Result, SymscopeError};
pub use facade::{LatestRequest, Resolution, SymbolClient};
pub use resolve::{find_symbol, matches};
