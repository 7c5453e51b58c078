use std::sync::Arc;

use stargazer_core::models::DetailResponse;

use super::fallback;
use super::parse::{parse_detail, DetailError};
use super::prompt::{detail_request, image_request};
use crate::config::Config;
use crate::gemini::{ClientError, GeminiClient, GenerativeService};

/// Fetches generated details and illustrations for catalog objects.
///
/// Neither operation returns an error: every failure is logged here and
/// replaced by placeholder content, so callers only ever see well-formed
/// data. Each call makes at most one request; there are no retries and
/// nothing is cached.
#[derive(Clone)]
pub struct DetailClient {
    service: Arc<dyn GenerativeService>,
    text_model: String,
    image_model: String,
}

impl DetailClient {
    pub fn new(
        service: Arc<dyn GenerativeService>,
        text_model: impl Into<String>,
        image_model: impl Into<String>,
    ) -> Self {
        Self {
            service,
            text_model: text_model.into(),
            image_model: image_model.into(),
        }
    }

    /// Create a client backed by the real service.
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let gemini = GeminiClient::from_config(config)?;
        if !config.is_configured() {
            tracing::info!("GEMINI_API_KEY not set; serving placeholder details");
        }
        Ok(Self::new(
            Arc::new(gemini),
            config.text_model.clone(),
            config.image_model.clone(),
        ))
    }

    pub fn is_configured(&self) -> bool {
        self.service.is_configured()
    }

    /// Generated description of the object called `name`.
    pub async fn fetch_details(&self, name: &str) -> DetailResponse {
        if !self.service.is_configured() {
            return fallback::unconfigured();
        }

        match self.try_fetch_details(name).await {
            Ok(detail) => detail,
            Err(e) if e.is_authorization_failure() => {
                tracing::error!(object = name, "Detail request rejected: {}", e);
                fallback::authorization_error()
            }
            Err(e) => {
                tracing::error!(object = name, "Detail request failed: {}", e);
                fallback::service_error()
            }
        }
    }

    async fn try_fetch_details(&self, name: &str) -> Result<DetailResponse, DetailError> {
        let response = self
            .service
            .generate_content(&self.text_model, &detail_request(name))
            .await?;
        parse_detail(response.text().as_deref())
    }

    /// Generated illustration as a `data:` URI, or `None` when unavailable.
    pub async fn fetch_image(&self, name: &str) -> Option<String> {
        if !self.service.is_configured() {
            return None;
        }

        match self
            .service
            .generate_content(&self.image_model, &image_request(name))
            .await
        {
            Ok(response) => {
                let image = response.first_inline_image().map(|d| d.to_data_uri());
                if image.is_none() {
                    tracing::warn!(object = name, "Image response contained no inline image");
                }
                image
            }
            Err(e) => {
                tracing::error!(object = name, "Image request failed: {}", e);
                None
            }
        }
    }
}
