use std::sync::Arc;

use symscope_api::SymbolService;
use symscope_core::{ClientConfig, SymbolClient};

/// Builds the default symbol service for `config`: a [`SymbolClient`] over
/// the HTTP GraphQL transport.
pub fn build_default_client(config: &ClientConfig) -> symscope_core::Result<Arc<dyn SymbolService>> {
    tracing::debug!(
        endpoint = %config.endpoint,
        authenticated = config.access_token.is_some(),
        "building symbol client"
    );
    let client = SymbolClient::from_config(config)?;
    Ok(Arc::new(client))
}

/// Reads `~/.symscope/config.json` and the `SRC_*` environment overrides.
/// The result is not validated yet; callers apply their own overrides first
/// and then call [`ClientConfig::validate`].
pub fn load_config() -> symscope_core::Result<ClientConfig> {
    ClientConfig::load_unvalidated()
}

/// Starts file logging under `~/.symscope/logs` for `component` (`cli`, ...).
/// Hold the returned guard for the life of the process.
pub fn init_logging(component: &str, to_stderr: bool) -> impl Drop {
    symscope_core::logging::init_logging(component, to_stderr)
}
