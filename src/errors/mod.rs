//! Error types for the Hugging Face API client.
//!
//! This module provides a comprehensive error taxonomy for the client.

mod categories;
mod error;

pub use categories::{ApiErrorResponse, ValidationDetail};
pub use error::{HuggingFaceError, HuggingFaceResult};
