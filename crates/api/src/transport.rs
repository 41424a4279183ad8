use crate::error::{ApiError, ApiResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

/// A GraphQL operation ready to be sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub query: Cow<'static, str>,
    pub variables: Value,
    pub operation_name: Cow<'static, str>,
}

impl GraphQlRequest {
    pub fn new(
        operation_name: impl Into<Cow<'static, str>>,
        query: impl Into<Cow<'static, str>>,
        variables: Value,
    ) -> Self {
        Self {
            query: query.into(),
            variables,
            operation_name: operation_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,
}

/// The `{ data, errors }` envelope every GraphQL response arrives in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

impl GraphQlResponse {
    pub fn from_data(data: Value) -> Self {
        Self {
            data: Some(data),
            errors: None,
        }
    }

    pub fn from_errors(messages: &[&str]) -> Self {
        Self {
            data: None,
            errors: Some(
                messages
                    .iter()
                    .map(|m| GraphQlError {
                        message: m.to_string(),
                        path: None,
                    })
                    .collect(),
            ),
        }
    }

    /// Returns `data`, or fails when the server reported errors.
    ///
    /// Any reported error wins over partial data. All messages are joined
    /// with newlines into a single transport error.
    pub fn into_data(self) -> ApiResult<Value> {
        if let Some(errors) = self.errors.filter(|e| !e.is_empty()) {
            let message = errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("\n");
            return Err(ApiError::Transport(message));
        }
        match self.data {
            Some(Value::Null) | None => Err(ApiError::SchemaMismatch(
                "response has neither data nor errors".to_string(),
            )),
            Some(data) => Ok(data),
        }
    }
}

/// Executes GraphQL operations against some backend.
///
/// Implementations do not retry; a failure is returned as
/// [`ApiError::Transport`] and the caller decides what to do with it.
#[async_trait]
pub trait GraphQlTransport: Send + Sync {
    async fn execute(&self, request: &GraphQlRequest) -> ApiResult<GraphQlResponse>;
}
