//! Types for the Summarization service.

use crate::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
use serde::{Deserialize, Serialize};

/// Generation parameters for a summarization request.
///
/// Serialized as the `parameters` record of the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizationParameters {
    /// Minimum summary length, in tokens
    pub min_length: u32,
    /// Maximum summary length, in tokens
    pub max_length: u32,
}

impl Default for SummarizationParameters {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

/// Summarization request.
///
/// Serializes to `{"inputs": <text>, "parameters": {"min_length": ...,
/// "max_length": ...}}`.
#[derive(Debug, Clone, Serialize)]
pub struct SummarizationRequest {
    /// Text to summarize. May be empty; the request is still issued.
    pub inputs: String,
    /// Generation parameters
    pub parameters: SummarizationParameters,
}

impl SummarizationRequest {
    /// Create a new summarization request with default parameters
    pub fn new(inputs: impl Into<String>) -> Self {
        Self {
            inputs: inputs.into(),
            parameters: SummarizationParameters::default(),
        }
    }

    /// Create a builder
    pub fn builder(inputs: impl Into<String>) -> SummarizationRequestBuilder {
        SummarizationRequestBuilder::new(inputs)
    }
}

/// Builder for SummarizationRequest
#[derive(Debug, Clone)]
pub struct SummarizationRequestBuilder {
    request: SummarizationRequest,
}

impl SummarizationRequestBuilder {
    /// Create a new builder
    pub fn new(inputs: impl Into<String>) -> Self {
        Self {
            request: SummarizationRequest::new(inputs),
        }
    }

    /// Set the minimum summary length
    pub fn min_length(mut self, min_length: u32) -> Self {
        self.request.parameters.min_length = min_length;
        self
    }

    /// Set the maximum summary length
    pub fn max_length(mut self, max_length: u32) -> Self {
        self.request.parameters.max_length = max_length;
        self
    }

    /// Build the request
    pub fn build(self) -> SummarizationRequest {
        self.request
    }
}

/// One summary candidate returned by the model.
///
/// A successful response is a JSON array of these records; only element 0
/// is normally consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The generated summary text
    pub summary_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let params = SummarizationParameters::default();
        assert_eq!(params.min_length, 30);
        assert_eq!(params.max_length, 200);
    }

    #[test]
    fn test_request_wire_shape() {
        let request = SummarizationRequest::new("Some long article text.");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "inputs": "Some long article text.",
                "parameters": {
                    "min_length": 30,
                    "max_length": 200
                }
            })
        );
    }

    #[test]
    fn test_request_allows_empty_inputs() {
        let request = SummarizationRequest::new("");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["inputs"], "");
        assert_eq!(value["parameters"]["min_length"], 30);
        assert_eq!(value["parameters"]["max_length"], 200);
    }

    #[test]
    fn test_request_builder() {
        let request = SummarizationRequest::builder("Text to condense")
            .min_length(10)
            .max_length(50)
            .build();

        assert_eq!(request.inputs, "Text to condense");
        assert_eq!(request.parameters.min_length, 10);
        assert_eq!(request.parameters.max_length, 50);
    }

    #[test]
    fn test_summary_array_deserialization() {
        let json = r#"[{"summary_text": "A condensed version."}]"#;
        let summaries: Vec<Summary> = serde_json::from_str(json).unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].summary_text, "A condensed version.");
    }
}
