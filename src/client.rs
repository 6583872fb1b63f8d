//! Runtime client for Bedrock-style model invocation

pub mod credentials;


use crate::{
    error::{AppError, Result},
    models::ProbeConfig,
};
use async_trait::async_trait;
use reqwest::{Client, Url};

/// Content type used for both request and response payloads
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Model-serving client abstraction.
///
/// The probe core only needs a way to send a prepared body to a model and
/// get the raw response back; tests substitute scripted implementations.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Invoke a model with a prepared request body
    async fn invoke(
        &self,
        model_id: &str,
        body: Vec<u8>,
        content_type: &str,
        accept: &str,
    ) -> Result<RawResponse>;
}

/// Raw response payload from a model invocation.
///
/// The payload is consumed exactly once: reading the body of a live HTTP
/// response drains the connection, so the read happens in the parsing stage
/// rather than the invocation stage.
#[derive(Debug)]
pub enum RawResponse {
    /// Live HTTP response whose body has not been read yet
    Http(reqwest::Response),
    /// Pre-buffered body (scripted clients and tests)
    Buffered(Vec<u8>),
}

impl RawResponse {
    /// Consume the response and return the full body bytes
    pub async fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            Self::Http(response) => response
                .bytes()
                .await
                .map(|bytes| bytes.to_vec())
                .map_err(|e| {
                    AppError::invocation(format!("Failed to read response body: {}", e))
                }),
            Self::Buffered(bytes) => Ok(bytes),
        }
    }
}

/// Client for a Bedrock-style model runtime.
///
/// Sends `POST <endpoint>/model/<id>/invoke` with bearer-token
/// authorization. The endpoint is derived from the configured region unless
/// an explicit override is set.
#[derive(Debug)]
pub struct BedrockRuntimeClient {
    http: Client,
    endpoint: String,
    bearer_token: String,
}

impl BedrockRuntimeClient {
    /// Connect using the probe configuration: resolve credentials from the
    /// environment and build the HTTP transport.
    pub fn connect(config: &ProbeConfig) -> Result<Self> {
        let token = credentials::resolve_bearer_token(config.profile.as_deref())?;
        Self::with_bearer_token(&config.runtime_endpoint(), &token)
    }

    /// Build a client against an explicit endpoint with a known token
    pub fn with_bearer_token(endpoint: &str, token: &str) -> Result<Self> {
        let endpoint = endpoint.trim_end_matches('/').to_string();
        Url::parse(&endpoint).map_err(|e| {
            AppError::client_init(format!("Invalid runtime endpoint '{}': {}", endpoint, e))
        })?;

        // Connect timeout only; the probe itself imposes no deadline on a
        // running invocation.
        let http = Client::builder()
            .connect_timeout(crate::defaults::CONNECT_TIMEOUT)
            .user_agent(crate::defaults::USER_AGENT)
            .build()
            .map_err(|e| {
                AppError::client_init(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            endpoint,
            bearer_token: token.to_string(),
        })
    }

    /// Invoke URL for a model identifier
    fn invoke_url(&self, model_id: &str) -> String {
        format!("{}/model/{}/invoke", self.endpoint, model_id)
    }
}

#[async_trait]
impl ModelClient for BedrockRuntimeClient {
    async fn invoke(
        &self,
        model_id: &str,
        body: Vec<u8>,
        content_type: &str,
        accept: &str,
    ) -> Result<RawResponse> {
        let response = self
            .http
            .post(self.invoke_url(model_id))
            .header("Authorization", format!("Bearer {}", self.bearer_token))
            .header("Content-Type", content_type)
            .header("Accept", accept)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                AppError::invocation(format!("Failed to reach model runtime: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            let detail = detail.trim();
            return Err(if detail.is_empty() {
                AppError::invocation(format!("Model runtime returned {}", status))
            } else {
                AppError::invocation(format!(
                    "Model runtime returned {}: {}",
                    status, detail
                ))
            });
        }

        Ok(RawResponse::Http(response))
    }
}
