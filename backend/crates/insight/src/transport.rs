use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;

use crate::RawPayload;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP {status}: {body}")]
    HttpError { status: StatusCode, body: String },

    #[error("request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("invalid JSON body: {0}")]
    Decode(String),
}

/// Carries insight calls to the case-management backend and hands back the
/// untouched response body.
#[async_trait]
pub trait InsightTransport: Send + Sync {
    async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<RawPayload, TransportError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<RawPayload, TransportError>;
}

#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    pub base_url: String,
    pub api_token: Option<String>,
    pub timeout_secs: u64,
}

/// `reqwest`-backed transport. One attempt per call: errors go straight
/// back to the caller.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    config: HttpTransportConfig,
}

impl HttpTransport {
    pub fn new(config: HttpTransportConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn read_json(response: Response) -> Result<RawPayload, TransportError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "insight backend returned error status");
            return Err(TransportError::HttpError { status, body });
        }

        let bytes = response.bytes().await?;
        // 204s and blank bodies reach the adapters as `null`.
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[async_trait]
impl InsightTransport for HttpTransport {
    async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<RawPayload, TransportError> {
        let request = self.client.get(self.url(path)).query(query);
        let response = self.authorize(request).send().await?;
        Self::read_json(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<RawPayload, TransportError> {
        let request = self.client.post(self.url(path)).json(body);
        let response = self.authorize(request).send().await?;
        Self::read_json(response).await
    }
}
