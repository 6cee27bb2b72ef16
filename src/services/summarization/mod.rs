//! Summarization service for condensing text through a hosted model.

mod service;
mod types;

pub use service::{SummarizationService, SummarizationServiceImpl};
pub use types::{
    Summary, SummarizationParameters, SummarizationRequest, SummarizationRequestBuilder,
};
