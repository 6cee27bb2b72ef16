//! Service implementations for the Hugging Face Inference API.
//!
//! One service per hosted task:
//!
//! - `summarization` - Text summarization via `POST /models/<model>`

pub mod summarization;
