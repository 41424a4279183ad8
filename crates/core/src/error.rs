use symscope_api::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SymscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl From<SymscopeError> for ApiError {
    fn from(err: SymscopeError) -> Self {
        match err {
            SymscopeError::Api(inner) => inner,
            SymscopeError::Http(e) => ApiError::Transport(e.to_string()),
            SymscopeError::Json(e) => ApiError::SchemaMismatch(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SymscopeError>;
