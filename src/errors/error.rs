//! Error types for the Hugging Face API client.

use crate::errors::categories::ValidationDetail;
use thiserror::Error;

/// Result type alias for Hugging Face operations
pub type HuggingFaceResult<T> = Result<T, HuggingFaceError>;

/// Main error type for the Hugging Face API client.
///
/// Variants produced from an HTTP response carry the status code and the
/// raw body text so callers can report exactly what the API returned.
#[derive(Error, Debug, Clone)]
pub enum HuggingFaceError {
    /// Configuration error (invalid settings, missing required fields)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue
        message: String,
    },

    /// Authentication rejected by the API (401/403)
    #[error("Authentication error ({status}): {body}")]
    Authentication {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Request validation failed before any network call
    #[error("Validation error: {message}")]
    Validation {
        /// Error message describing the validation issue
        message: String,
        /// List of specific validation failures
        details: Vec<ValidationDetail>,
    },

    /// Network error (connection failed, timeout, DNS issues)
    #[error("Network error: {message}")]
    Network {
        /// Error message describing the network issue
        message: String,
    },

    /// Server error (5xx responses, including a model still loading)
    #[error("Server error ({status}): {body}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Model or route not found (404)
    #[error("Not found ({status}): {body}")]
    NotFound {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Any other non-success HTTP response
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// A 200 response whose body did not match the expected shape
    /// (not valid JSON, not an array, empty array, missing `summary_text`)
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Error message describing the decode failure
        message: String,
    },

    /// Internal error (unexpected conditions, library bugs)
    #[error("Internal error: {message}")]
    Internal {
        /// Error message describing the internal issue
        message: String,
    },
}

impl HuggingFaceError {
    /// Get the HTTP status code if this error came from an HTTP response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            HuggingFaceError::Authentication { status, .. }
            | HuggingFaceError::Server { status, .. }
            | HuggingFaceError::NotFound { status, .. }
            | HuggingFaceError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get the raw response body if this error came from an HTTP response
    pub fn api_body(&self) -> Option<&str> {
        match self {
            HuggingFaceError::Authentication { body, .. }
            | HuggingFaceError::Server { body, .. }
            | HuggingFaceError::NotFound { body, .. }
            | HuggingFaceError::Api { body, .. } => Some(body),
            _ => None,
        }
    }
}

// Conversions from common error types
impl From<reqwest::Error> for HuggingFaceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HuggingFaceError::Network {
                message: format!("Request timed out: {}", err),
            }
        } else if err.is_connect() {
            HuggingFaceError::Network {
                message: format!("Connection failed: {}", err),
            }
        } else {
            HuggingFaceError::Network {
                message: format!("Network error: {}", err),
            }
        }
    }
}

impl From<serde_json::Error> for HuggingFaceError {
    fn from(err: serde_json::Error) -> Self {
        HuggingFaceError::Internal {
            message: format!("JSON serialization/deserialization error: {}", err),
        }
    }
}

impl From<url::ParseError> for HuggingFaceError {
    fn from(err: url::ParseError) -> Self {
        HuggingFaceError::Configuration {
            message: format!("Invalid URL: {}", err),
        }
    }
}

impl From<std::io::Error> for HuggingFaceError {
    fn from(err: std::io::Error) -> Self {
        HuggingFaceError::Internal {
            message: format!("IO error: {}", err),
        }
    }
}
