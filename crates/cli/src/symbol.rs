use std::sync::Arc;

use symscope_api::{SymbolQuery, SymbolService};
use symscope_core::ClientConfig;
use tracing::info;

use crate::view::render_symbol;

pub async fn run(
    service: Arc<dyn SymbolService>,
    config: &ClientConfig,
    query: SymbolQuery,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(moniker = %query.moniker, commit = %query.commit_id, "resolving symbol");

    let Some(record) = service.fetch_and_resolve(&query).await? else {
        return Err(format!("symbol {} not found at {}", query.moniker, query.commit_id).into());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", render_symbol(&config.endpoint, &record));
    }
    Ok(())
}
