//! GraphQL plumbing for the repository symbol API: query documents, the
//! response decoder and an HTTP transport.

pub mod documents;
pub mod http;
pub mod wire;

pub use documents::{repository_symbol_request, repository_symbols_request};
pub use http::HttpTransport;
pub use wire::decode_symbol_forest;
