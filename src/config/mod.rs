//! Configuration types for the Hugging Face API client.

use crate::errors::{HuggingFaceError, HuggingFaceResult};
use crate::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use secrecy::SecretString;
use std::time::Duration;
use url::Url;

/// Configuration for the Hugging Face API client.
#[derive(Clone)]
pub struct HuggingFaceConfig {
    /// API token for authentication
    pub api_key: SecretString,
    /// Base URL for the Inference API
    pub base_url: String,
    /// Model repository id to run inference against
    pub model: String,
    /// Request timeout
    pub timeout: Duration,
}

impl HuggingFaceConfig {
    /// Creates a new configuration builder
    pub fn builder() -> HuggingFaceConfigBuilder {
        HuggingFaceConfigBuilder::default()
    }

    /// Creates a configuration from environment variables.
    ///
    /// `HF_API_TOKEN` is required; `HF_BASE_URL`, `HF_MODEL` and
    /// `HF_TIMEOUT` (seconds) override the defaults when set.
    pub fn from_env() -> HuggingFaceResult<Self> {
        let api_key =
            std::env::var("HF_API_TOKEN").map_err(|_| HuggingFaceError::Configuration {
                message: "HF_API_TOKEN environment variable not set".to_string(),
            })?;

        let base_url =
            std::env::var("HF_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let model = std::env::var("HF_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let timeout_secs = std::env::var("HF_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_key: SecretString::new(api_key),
            base_url,
            model,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> HuggingFaceResult<()> {
        Url::parse(&self.base_url).map_err(|e| HuggingFaceError::Configuration {
            message: format!("Invalid base URL '{}': {}", self.base_url, e),
        })?;

        if self.model.is_empty() {
            return Err(HuggingFaceError::Configuration {
                message: "Model id cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for HuggingFaceConfig
#[derive(Default)]
pub struct HuggingFaceConfigBuilder {
    api_key: Option<SecretString>,
    base_url: Option<String>,
    model: Option<String>,
    timeout: Option<Duration>,
}

impl HuggingFaceConfigBuilder {
    /// Sets the API token
    pub fn api_key(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets the base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the model repository id
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the configuration
    pub fn build(self) -> HuggingFaceResult<HuggingFaceConfig> {
        let api_key = self
            .api_key
            .ok_or_else(|| HuggingFaceError::Configuration {
                message: "API token is required".to_string(),
            })?;

        Ok(HuggingFaceConfig {
            api_key,
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = HuggingFaceConfig::builder()
            .api_key(SecretString::new("hf_test-token".to_string()))
            .build()
            .unwrap();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_config_builder_custom() {
        let config = HuggingFaceConfig::builder()
            .api_key(SecretString::new("hf_test-token".to_string()))
            .base_url("https://custom.endpoint.dev")
            .model("sshleifer/distilbart-cnn-12-6")
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();

        assert_eq!(config.base_url, "https://custom.endpoint.dev");
        assert_eq!(config.model, "sshleifer/distilbart-cnn-12-6");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_config_builder_requires_api_key() {
        let result = HuggingFaceConfig::builder().build();
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let config = HuggingFaceConfig::builder()
            .api_key(SecretString::new("hf_test-token".to_string()))
            .base_url("not a url")
            .build()
            .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let config = HuggingFaceConfig::builder()
            .api_key(SecretString::new("hf_test-token".to_string()))
            .model("")
            .build()
            .unwrap();

        assert!(config.validate().is_err());
    }
}
