use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use symscope_api::{ApiError, ApiResult, GraphQlRequest, GraphQlResponse, GraphQlTransport};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{Result, SymscopeError};

const GRAPHQL_PATH: &str = "/.api/graphql";

/// Posts GraphQL operations to `<endpoint>/.api/graphql?<OperationName>`.
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: &str, access_token: Option<&str>, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("symscope/", env!("CARGO_PKG_VERSION"))),
        );
        if let Some(token) = access_token {
            let mut value = HeaderValue::from_str(&format!("token {}", token))
                .map_err(|e| SymscopeError::Config(format!("invalid access token: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(
            &config.endpoint,
            config.access_token.as_deref(),
            config.timeout(),
        )
    }

    pub fn url_for(&self, operation_name: &str) -> String {
        format!("{}{}?{}", self.endpoint, GRAPHQL_PATH, operation_name)
    }
}

#[async_trait]
impl GraphQlTransport for HttpTransport {
    async fn execute(&self, request: &GraphQlRequest) -> ApiResult<GraphQlResponse> {
        let url = self.url_for(&request.operation_name);
        debug!(operation = %request.operation_name, %url, "sending GraphQL request");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(operation = %request.operation_name, %status, "GraphQL request failed");
            return Err(ApiError::Transport(format!(
                "HTTP {} from {}: {}",
                status,
                url,
                body.trim()
            )));
        }

        response
            .json::<GraphQlResponse>()
            .await
            .map_err(|e| ApiError::Transport(format!("invalid response body: {}", e)))
    }
}
