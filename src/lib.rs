//! # Hugging Face Inference API Client
//!
//! Production-ready Rust client for the Hugging Face Inference API
//! summarization task.
//!
//! ## Features
//!
//! - Summarization via hosted models (`facebook/bart-large-cnn` by default)
//! - Secure credential handling with `SecretString`, sourced from the
//!   environment
//! - Typed error taxonomy preserving HTTP status and raw response body
//! - Structured logging with `tracing`
//! - Type-safe request/response models
//! - London-School TDD with mock support
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_huggingface::{create_client, HuggingFaceClient, HuggingFaceConfig};
//! use integrations_huggingface::services::summarization::{
//!     SummarizationRequest, SummarizationService,
//! };
//! use secrecy::SecretString;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HuggingFaceConfig::builder()
//!         .api_key(SecretString::new("hf_your-token".to_string()))
//!         .build()?;
//!
//!     let client = create_client(config)?;
//!
//!     let request = SummarizationRequest::new("A long article to condense...");
//!     let summaries = client.summarization().summarize(request).await?;
//!     println!("{}", summaries[0].summary_text);
//!
//!     // Or create from environment variables
//!     // let client = create_client_from_env()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `client` - Main client interface and factory functions
//! - `config` - Configuration types and builder
//! - `auth` - Authentication and header management
//! - `transport` - HTTP transport layer
//! - `errors` - Error types and taxonomy
//! - `observability` - Logging setup
//! - `services` - API service implementations
//! - `mocks` / `fixtures` - Test doubles and canned responses

#![warn(missing_docs)]
#![warn(clippy::all)]

// Public modules
pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod observability;
pub mod services;
pub mod transport;

// Test-support modules, public so integration tests can drive services
// against recorded transports
pub mod fixtures;
pub mod mocks;

// Re-exports for convenience
pub use auth::{AuthManager, BearerAuthManager};
pub use client::{
    create_client, create_client_from_env, HuggingFaceClient, HuggingFaceClientImpl,
};
pub use config::{HuggingFaceConfig, HuggingFaceConfigBuilder};
pub use errors::{HuggingFaceError, HuggingFaceResult};
pub use observability::{init_logging, LogFormat, LogLevel, LoggingConfig};
pub use transport::{HttpTransport, ReqwestTransport};

// Service re-exports
pub use services::summarization::{
    Summary, SummarizationParameters, SummarizationRequest, SummarizationRequestBuilder,
    SummarizationService, SummarizationServiceImpl,
};

/// The default Hugging Face Inference API base URL
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// The default summarization model
pub const DEFAULT_MODEL: &str = "facebook/bart-large-cnn";

/// The default request timeout (2 minutes)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// The default minimum summary length, in tokens
pub const DEFAULT_MIN_LENGTH: u32 = 30;

/// The default maximum summary length, in tokens
pub const DEFAULT_MAX_LENGTH: u32 = 200;
