//! Client interface and implementation for the Hugging Face API.

use crate::auth::{AuthManager, BearerAuthManager};
use crate::config::HuggingFaceConfig;
use crate::errors::{HuggingFaceError, HuggingFaceResult};
use crate::services::summarization::{SummarizationService, SummarizationServiceImpl};
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;
use url::Url;

/// Trait defining the main Hugging Face client interface
pub trait HuggingFaceClient: Send + Sync {
    /// Get the summarization service
    fn summarization(&self) -> Arc<dyn SummarizationService>;
}

/// Implementation of the Hugging Face client
pub struct HuggingFaceClientImpl {
    config: Arc<HuggingFaceConfig>,
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
    base_url: Url,

    // Lazily initialized services
    summarization_service: once_cell::sync::OnceCell<Arc<dyn SummarizationService>>,
}

impl HuggingFaceClientImpl {
    /// Create a new client from configuration
    pub fn new(config: HuggingFaceConfig) -> HuggingFaceResult<Self> {
        config.validate()?;

        let base_url = Url::parse(&config.base_url)?;
        let config = Arc::new(config);

        let transport =
            Arc::new(ReqwestTransport::new(config.timeout)?) as Arc<dyn HttpTransport>;

        let auth_manager =
            Arc::new(BearerAuthManager::new(config.api_key.clone())) as Arc<dyn AuthManager>;

        auth_manager
            .validate_api_key()
            .map_err(|e| HuggingFaceError::Configuration {
                message: format!("Invalid API token: {}", e),
            })?;

        Ok(Self {
            config,
            transport,
            auth_manager,
            base_url,
            summarization_service: once_cell::sync::OnceCell::new(),
        })
    }

    /// Create a new client with custom transport and auth manager (for testing)
    #[cfg(test)]
    pub fn with_dependencies(
        config: HuggingFaceConfig,
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
    ) -> HuggingFaceResult<Self> {
        let base_url = Url::parse(&config.base_url)?;

        Ok(Self {
            config: Arc::new(config),
            transport,
            auth_manager,
            base_url,
            summarization_service: once_cell::sync::OnceCell::new(),
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &HuggingFaceConfig {
        &self.config
    }

    /// Get the transport
    pub fn transport(&self) -> Arc<dyn HttpTransport> {
        self.transport.clone()
    }

    /// Get the auth manager
    pub fn auth_manager(&self) -> Arc<dyn AuthManager> {
        self.auth_manager.clone()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl HuggingFaceClient for HuggingFaceClientImpl {
    fn summarization(&self) -> Arc<dyn SummarizationService> {
        self.summarization_service
            .get_or_init(|| {
                Arc::new(SummarizationServiceImpl::new(
                    self.transport.clone(),
                    self.auth_manager.clone(),
                    self.base_url.clone(),
                    self.config.model.clone(),
                )) as Arc<dyn SummarizationService>
            })
            .clone()
    }
}

/// Create a new Hugging Face client from configuration
pub fn create_client(config: HuggingFaceConfig) -> HuggingFaceResult<HuggingFaceClientImpl> {
    HuggingFaceClientImpl::new(config)
}

/// Create a new Hugging Face client from environment variables
pub fn create_client_from_env() -> HuggingFaceResult<HuggingFaceClientImpl> {
    let config = HuggingFaceConfig::from_env()?;
    create_client(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HuggingFaceConfig;
    use crate::mocks::{MockAuthManager, MockHttpTransport, MockResponse};
    use crate::services::summarization::SummarizationRequest;
    use secrecy::SecretString;

    #[test]
    fn test_create_client() {
        let config = HuggingFaceConfig::builder()
            .api_key(SecretString::new("hf_test-token-12345678".to_string()))
            .build()
            .unwrap();

        let client = create_client(config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_create_client_short_key() {
        let config = HuggingFaceConfig::builder()
            .api_key(SecretString::new("short".to_string()))
            .build()
            .unwrap();

        let client = create_client(config);
        assert!(client.is_err());
    }

    #[tokio::test]
    async fn test_client_with_mock_dependencies() {
        let config = HuggingFaceConfig::builder()
            .api_key(SecretString::new("hf_test-token-12345678".to_string()))
            .build()
            .unwrap();

        let transport = Arc::new(MockHttpTransport::new());
        transport.add_response(MockResponse::summaries(&["S"]));

        let client = HuggingFaceClientImpl::with_dependencies(
            config,
            transport.clone(),
            Arc::new(MockAuthManager::new()),
        )
        .unwrap();

        let summary = client
            .summarization()
            .summarize_first(SummarizationRequest::new("text"))
            .await
            .unwrap();

        assert_eq!(summary.summary_text, "S");
        assert_eq!(transport.get_requests().len(), 1);
    }

    #[test]
    fn test_client_service_is_cached() {
        let config = HuggingFaceConfig::builder()
            .api_key(SecretString::new("hf_test-token-12345678".to_string()))
            .build()
            .unwrap();

        let client = create_client(config).unwrap();

        let service1 = client.summarization();
        let service2 = client.summarization();

        assert!(Arc::ptr_eq(&service1, &service2));
    }
}
