//! Runtime configuration loaded from environment variables.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Generative service configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Service credential (from GEMINI_API_KEY). `None` means unconfigured.
    pub api_key: Option<String>,
    /// Service base URL (from GEMINI_BASE_URL)
    pub base_url: String,
    /// Model for structured detail text (from STARGAZER_TEXT_MODEL)
    pub text_model: String,
    /// Model for illustrations (from STARGAZER_IMAGE_MODEL)
    pub image_model: String,
    /// Per-request deadline (from STARGAZER_TIMEOUT_SECS)
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        // A blank key is as good as no key.
        let api_key = lookup("GEMINI_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let base_url = lookup("GEMINI_BASE_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let request_timeout = lookup("STARGAZER_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            api_key,
            base_url,
            text_model: lookup("STARGAZER_TEXT_MODEL")
                .unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string()),
            image_model: lookup("STARGAZER_IMAGE_MODEL")
                .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
            request_timeout,
        }
    }

    /// Create a config with no credential (placeholder content only).
    pub fn unconfigured() -> Self {
        Self::from_lookup(|_| None)
    }

    /// Create a config pointing at a specific service with a credential (for testing).
    pub fn with_api_key(base_url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            api_key: Some(key.into()),
            base_url: base_url.into(),
            ..Self::unconfigured()
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
