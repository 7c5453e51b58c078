//! HTTP client for the Generative Language API.
//!
//! Requests go to `{base_url}/models/{model}:generateContent` with the
//! credential in the `x-goog-api-key` header. Every request is bounded by the
//! configured timeout.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::types::{ApiErrorBody, GenerateContentRequest, GenerateContentResponse};
use crate::config::Config;

/// Errors at the generative service boundary.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Service returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("API key is not configured")]
    Unconfigured,
}

impl ClientError {
    /// Whether the service rejected the credential.
    ///
    /// The service reports bad keys either as 403 or as a 400 whose message
    /// mentions the API key, so both are checked.
    pub fn is_authorization_failure(&self) -> bool {
        match self {
            Self::Api { status, message } => {
                *status == StatusCode::FORBIDDEN
                    || message.contains("403")
                    || message.contains("API key")
            }
            Self::Unconfigured => true,
            Self::Http(_) => false,
        }
    }
}

/// The generative-content operations StarGazer consumes.
///
/// [`GeminiClient`] is the production implementation; tests substitute
/// doubles that count invocations or return canned responses.
#[async_trait]
pub trait GenerativeService: Send + Sync {
    /// Whether a credential is available. When `false`, callers must not
    /// invoke [`generate_content`](Self::generate_content).
    fn is_configured(&self) -> bool;

    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ClientError>;
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl GeminiClient {
    /// Create a client from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Convert a non-2xx response into [`ClientError::Api`], preferring the
    /// message from the service's error envelope.
    async fn error_from(response: reqwest::Response) -> ClientError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
            _ => body,
        };
        ClientError::Api { status, message }
    }
}

#[async_trait]
impl GenerativeService for GeminiClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ClientError> {
        let key = self.api_key.as_deref().ok_or(ClientError::Unconfigured)?;

        tracing::debug!(model, "Sending generateContent request");
        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", key)
            .json(request)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::error_from(response).await)
        }
    }
}
