#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network or GraphQL execution failure, surfaced unmodified.
    #[error("Transport error: {0}")]
    Transport(String),
    /// The response does not have the shape the query document asked for.
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The request was superseded by a newer one and its result dropped.
    #[error("Request cancelled")]
    Cancelled,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self, ApiError::SchemaMismatch(_))
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
