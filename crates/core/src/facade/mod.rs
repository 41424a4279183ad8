use std::sync::Arc;

use symscope_api::GraphQlTransport;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::graphql::HttpTransport;

mod session;
mod symbols;

pub use session::{LatestRequest, Resolution, resolve_with_cancel};

/// Client for the repository symbol API.
///
/// Holds nothing but the transport; every call fetches a fresh tree and no
/// response is cached here.
#[derive(Clone)]
pub struct SymbolClient {
    pub(crate) transport: Arc<dyn GraphQlTransport>,
}

impl SymbolClient {
    pub fn new(transport: Arc<dyn GraphQlTransport>) -> Self {
        Self { transport }
    }

    /// Client speaking HTTP to the endpoint named in `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let transport = HttpTransport::from_config(config)?;
        Ok(Self::new(Arc::new(transport)))
    }
}
