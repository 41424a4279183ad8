pub mod error;
pub mod features;
pub mod models;
pub mod symbols;
pub mod transport;

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
pub use features::{Feature, FeatureFlags};
pub use models::*;
pub use symbols::{DEFAULT_SYMBOLS_PATH, SymbolListQuery, SymbolQuery, SymbolService};
pub use transport::{GraphQlError, GraphQlRequest, GraphQlResponse, GraphQlTransport};
