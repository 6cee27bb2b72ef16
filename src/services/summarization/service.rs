//! Summarization service implementation.

use super::types::{Summary, SummarizationRequest};
use crate::auth::AuthManager;
use crate::errors::{HuggingFaceError, HuggingFaceResult, ValidationDetail};
use crate::transport::HttpTransport;
use async_trait::async_trait;
use http::{HeaderMap, Method};
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Summarization service trait for testability
#[async_trait]
pub trait SummarizationService: Send + Sync {
    /// Summarize text, returning every candidate the model produced
    async fn summarize(&self, request: SummarizationRequest) -> HuggingFaceResult<Vec<Summary>>;

    /// Summarize text and return only the first candidate.
    ///
    /// A 200 response with an empty array is an `InvalidResponse` error,
    /// never an empty summary.
    async fn summarize_first(&self, request: SummarizationRequest) -> HuggingFaceResult<Summary> {
        let mut summaries = self.summarize(request).await?;
        if summaries.is_empty() {
            return Err(HuggingFaceError::InvalidResponse {
                message: "response contained no summaries".to_string(),
            });
        }
        Ok(summaries.remove(0))
    }
}

/// Implementation of the Summarization service
pub struct SummarizationServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
    base_url: Url,
    model: String,
}

impl SummarizationServiceImpl {
    /// Create a new Summarization service
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
        base_url: Url,
        model: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            auth_manager,
            base_url,
            model: model.into(),
        }
    }

    /// Build headers for a request
    fn build_headers(&self) -> HeaderMap {
        self.auth_manager.get_headers()
    }

    /// Build the model endpoint URL
    fn summarize_url(&self) -> HuggingFaceResult<String> {
        self.base_url
            .join(&format!("/models/{}", self.model))
            .map(|u| u.to_string())
            .map_err(|e| HuggingFaceError::Configuration {
                message: format!("Invalid URL: {}", e),
            })
    }

    /// Validate a summarization request.
    ///
    /// Only the generation parameters are checked; empty input text is
    /// allowed and still produces a request.
    fn validate(&self, request: &SummarizationRequest) -> HuggingFaceResult<()> {
        let mut errors = Vec::new();

        if request.parameters.max_length == 0 {
            errors.push(ValidationDetail::new(
                "max_length",
                "max_length must be nonzero",
            ));
        }

        if request.parameters.min_length > request.parameters.max_length {
            errors.push(ValidationDetail::with_value(
                "min_length",
                "min_length cannot exceed max_length",
                request.parameters.min_length.to_string(),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(HuggingFaceError::Validation {
                message: format!(
                    "Summarization request validation failed: {} error(s)",
                    errors.len()
                ),
                details: errors,
            })
        }
    }
}

#[async_trait]
impl SummarizationService for SummarizationServiceImpl {
    async fn summarize(&self, request: SummarizationRequest) -> HuggingFaceResult<Vec<Summary>> {
        self.validate(&request)?;

        let url = self.summarize_url()?;
        let headers = self.build_headers();
        let body = serde_json::to_vec(&request)?;

        debug!(
            model = %self.model,
            input_chars = request.inputs.len(),
            min_length = request.parameters.min_length,
            max_length = request.parameters.max_length,
            "summarization request"
        );

        let response = self
            .transport
            .execute(Method::POST, url, headers, Some(body))
            .await?;

        let summaries: Vec<Summary> =
            serde_json::from_slice(&response.body).map_err(|e| {
                HuggingFaceError::InvalidResponse {
                    message: format!("failed to decode summarization response: {}", e),
                }
            })?;

        debug!(candidates = summaries.len(), "summarization response decoded");

        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockClientBuilder;

    fn create_service() -> SummarizationServiceImpl {
        let (service, _) = MockClientBuilder::new().build(|t, a, u| {
            SummarizationServiceImpl::new(t, a, u, "facebook/bart-large-cnn")
        });
        service
    }

    #[test]
    fn test_validate_default_request() {
        let service = create_service();
        let request = SummarizationRequest::new("Some text");
        assert!(service.validate(&request).is_ok());
    }

    #[test]
    fn test_validate_empty_inputs_allowed() {
        let service = create_service();
        let request = SummarizationRequest::new("");
        assert!(service.validate(&request).is_ok());
    }

    #[test]
    fn test_validate_min_exceeds_max() {
        let service = create_service();
        let request = SummarizationRequest::builder("Some text")
            .min_length(300)
            .max_length(200)
            .build();
        assert!(service.validate(&request).is_err());
    }

    #[test]
    fn test_validate_zero_max_length() {
        let service = create_service();
        let request = SummarizationRequest::builder("Some text")
            .min_length(0)
            .max_length(0)
            .build();
        assert!(service.validate(&request).is_err());
    }

    #[test]
    fn test_summarize_url_includes_model() {
        let service = create_service();
        let url = service.summarize_url().unwrap();
        assert!(url.ends_with("/models/facebook/bart-large-cnn"));
    }
}
