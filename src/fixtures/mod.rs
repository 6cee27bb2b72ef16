//! Test fixtures for the Hugging Face client.
//!
//! This module provides pre-built test data for use in tests.

use crate::services::summarization::Summary;

/// A single-candidate summarization response, as the API returns on success
pub fn summarization_response() -> Vec<Summary> {
    vec![Summary {
        summary_text: "Scientists have discovered a new species of deep-sea fish.".to_string(),
    }]
}

/// A multi-candidate summarization response
pub fn summarization_response_multi() -> Vec<Summary> {
    vec![
        Summary {
            summary_text: "First candidate summary.".to_string(),
        },
        Summary {
            summary_text: "Second candidate summary.".to_string(),
        },
    ]
}

/// An empty summarization response; a 200 with no candidates is an error
pub fn summarization_response_empty() -> Vec<Summary> {
    Vec::new()
}

/// The error body the API sends while a cold model is loading
pub fn model_loading_body() -> serde_json::Value {
    serde_json::json!({
        "error": "Model facebook/bart-large-cnn is currently loading",
        "estimated_time": 20.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_shapes() {
        assert_eq!(summarization_response().len(), 1);
        assert_eq!(summarization_response_multi().len(), 2);
        assert!(summarization_response_empty().is_empty());
        assert!(model_loading_body()["error"].is_string());
    }
}
