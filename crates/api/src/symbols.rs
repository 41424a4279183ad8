use crate::error::{ApiError, ApiResult};
use crate::models::{MonikerKey, SymbolRecord};
use async_trait::async_trait;

/// Tree path used by the repository symbol listing when none is given.
pub const DEFAULT_SYMBOLS_PATH: &str = ".";

/// Locate one symbol by moniker in a repository at a revision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolQuery {
    /// Opaque GraphQL node ID of the repository.
    pub repository_id: String,
    /// Revision specifier or resolved commit ID.
    pub commit_id: String,
    pub moniker: MonikerKey,
}

impl SymbolQuery {
    pub fn new(
        repository_id: impl Into<String>,
        commit_id: impl Into<String>,
        scheme: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            repository_id: repository_id.into(),
            commit_id: commit_id.into(),
            moniker: MonikerKey::new(scheme, identifier),
        }
    }

    pub fn validate(&self) -> ApiResult<()> {
        validate_revision(&self.repository_id, &self.commit_id)
    }
}

fn validate_revision(repository_id: &str, commit_id: &str) -> ApiResult<()> {
    if repository_id.is_empty() {
        return Err(ApiError::InvalidArgument("repository id is empty".into()));
    }
    if commit_id.is_empty() {
        return Err(ApiError::InvalidArgument("revision is empty".into()));
    }
    Ok(())
}

/// List the symbols defined under a tree path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolListQuery {
    pub repository_id: String,
    pub commit_id: String,
    pub path: String,
}

impl SymbolListQuery {
    pub fn new(repository_id: impl Into<String>, commit_id: impl Into<String>) -> Self {
        Self {
            repository_id: repository_id.into(),
            commit_id: commit_id.into(),
            path: DEFAULT_SYMBOLS_PATH.to_string(),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn validate(&self) -> ApiResult<()> {
        validate_revision(&self.repository_id, &self.commit_id)
    }
}

/// Symbol lookups backed by the repository symbol API.
///
/// `Ok(None)` means the symbol (or an intermediate node such as the commit
/// or tree) does not exist. It is an answer, not a failure.
#[async_trait]
pub trait SymbolService: Send + Sync {
    /// Fetch the repository symbol tree and return the record whose moniker
    /// matches the query.
    async fn fetch_and_resolve(&self, query: &SymbolQuery) -> ApiResult<Option<SymbolRecord>>;

    /// Fetch the symbol forest under `query.path`.
    async fn list_symbols(&self, query: &SymbolListQuery) -> ApiResult<Option<Vec<SymbolRecord>>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_empty_ids() {
        assert!(SymbolQuery::new("", "HEAD", "go", "x").validate().is_err());
        assert!(SymbolQuery::new("UmVwbzox", "", "go", "x").validate().is_err());
        assert!(SymbolQuery::new("UmVwbzox", "HEAD", "go", "x").validate().is_ok());
    }

    #[test]
    fn list_query_rejects_empty_ids() {
        assert!(SymbolListQuery::new("", "HEAD").validate().is_err());
        assert!(SymbolListQuery::new("UmVwbzox", "").validate().is_err());
        assert!(SymbolListQuery::new("UmVwbzox", "HEAD").validate().is_ok());
    }

    #[test]
    fn list_query_defaults_to_dot() {
        let q = SymbolListQuery::new("UmVwbzox", "HEAD");
        assert_eq!(q.path, ".");
        assert_eq!(q.with_path("src").path, "src");
    }
}
