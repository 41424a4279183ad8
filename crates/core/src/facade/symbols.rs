use async_trait::async_trait;
use symscope_api::{
    ApiResult, GraphQlRequest, SymbolListQuery, SymbolQuery, SymbolRecord, SymbolService,
};
use tracing::{debug, warn};

use crate::facade::SymbolClient;
use crate::graphql::{decode_symbol_forest, repository_symbol_request, repository_symbols_request};
use crate::resolve::take_symbol;

impl SymbolClient {
    async fn fetch_forest(&self, request: &GraphQlRequest) -> ApiResult<Option<Vec<SymbolRecord>>> {
        debug!(
            operation = %request.operation_name,
            variables = %request.variables,
            "fetching symbol tree"
        );

        let response = self.transport.execute(request).await?;
        let data = response.into_data().inspect_err(|e| {
            warn!(operation = %request.operation_name, "symbol query failed: {}", e);
        })?;

        let forest = decode_symbol_forest(data)?;
        match &forest {
            Some(nodes) => debug!(roots = nodes.len(), "decoded symbol tree"),
            None => debug!("repository, commit or tree not available"),
        }
        Ok(forest)
    }
}

#[async_trait]
impl SymbolService for SymbolClient {
    async fn fetch_and_resolve(&self, query: &SymbolQuery) -> ApiResult<Option<SymbolRecord>> {
        query.validate()?;

        let request = repository_symbol_request(&query.repository_id, &query.commit_id);
        let Some(forest) = self.fetch_forest(&request).await? else {
            return Ok(None);
        };

        let found = take_symbol(forest, &query.moniker);
        if found.is_none() {
            debug!(moniker = %query.moniker, "no symbol with this moniker");
        }
        Ok(found)
    }

    async fn list_symbols(&self, query: &SymbolListQuery) -> ApiResult<Option<Vec<SymbolRecord>>> {
        query.validate()?;

        let request =
            repository_symbols_request(&query.repository_id, &query.commit_id, &query.path);
        self.fetch_forest(&request).await
    }
}
