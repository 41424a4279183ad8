use std::sync::Arc;

use symscope_api::{ApiError, ApiResult, SymbolQuery, SymbolRecord, SymbolService};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Outcome of a lookup issued through [`LatestRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(SymbolRecord),
    NotFound,
    /// A request for a different symbol arrived before this one finished.
    Superseded,
}

impl From<Option<SymbolRecord>> for Resolution {
    fn from(found: Option<SymbolRecord>) -> Self {
        match found {
            Some(record) => Resolution::Found(record),
            None => Resolution::NotFound,
        }
    }
}

/// Runs one lookup, abandoning it with [`ApiError::Cancelled`] as soon as
/// `token` is cancelled.
pub async fn resolve_with_cancel<S>(
    service: &S,
    query: &SymbolQuery,
    token: &CancellationToken,
) -> ApiResult<Option<SymbolRecord>>
where
    S: SymbolService + ?Sized,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(ApiError::Cancelled),
        result = service.fetch_and_resolve(query) => result,
    }
}

struct InFlight {
    query: SymbolQuery,
    token: CancellationToken,
}

/// Last-request-wins wrapper around a [`SymbolService`].
///
/// Issuing a query for a different (repository, revision, moniker) cancels
/// whatever is still in flight; repeating the current query does not.
pub struct LatestRequest<S: SymbolService + ?Sized> {
    service: Arc<S>,
    current: Mutex<Option<InFlight>>,
}

impl<S: SymbolService + ?Sized> LatestRequest<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self {
            service,
            current: Mutex::new(None),
        }
    }

    pub async fn resolve(&self, query: SymbolQuery) -> ApiResult<Resolution> {
        let token = {
            let mut current = self.current.lock().await;
            let same = current
                .as_ref()
                .filter(|in_flight| in_flight.query == query)
                .map(|in_flight| in_flight.token.clone());
            match same {
                Some(token) => token,
                None => {
                    if let Some(previous) = current.take() {
                        debug!(moniker = %previous.query.moniker, "superseding in-flight lookup");
                        previous.token.cancel();
                    }
                    let token = CancellationToken::new();
                    *current = Some(InFlight {
                        query: query.clone(),
                        token: token.clone(),
                    });
                    token
                }
            }
        };

        match resolve_with_cancel(self.service.as_ref(), &query, &token).await {
            Ok(found) => Ok(found.into()),
            Err(ApiError::Cancelled) => Ok(Resolution::Superseded),
            Err(e) => Err(e),
        }
    }

    /// Cancels the in-flight lookup, if any.
    pub async fn cancel(&self) {
        if let Some(in_flight) = self.current.lock().await.take() {
            in_flight.token.cancel();
        }
    }
}
