//! Command-line summarizer over the Hugging Face Inference API.
//!
//! Reads text from standard input, issues exactly one summarization
//! request, and prints the first returned summary. Non-200 responses are
//! reported as `Error: <status> <body>` on standard output without failing
//! the process; network and decode failures propagate.
//!
//! ## Usage
//!
//! ```bash
//! export HF_API_TOKEN=hf_...
//! cat article.txt | hf-summarize
//! ```

use integrations_huggingface::{
    create_client_from_env, init_logging, HuggingFaceClient, HuggingFaceResult, LoggingConfig,
    SummarizationRequest, SummarizationService,
};
use std::io::Read;

#[tokio::main]
async fn main() -> HuggingFaceResult<()> {
    init_logging(&LoggingConfig::default());

    let client = create_client_from_env()?;

    // The whole input is read before any processing; empty input still
    // produces a request
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let request = SummarizationRequest::new(input);

    match client.summarization().summarize_first(request).await {
        Ok(summary) => println!("{}", summary.summary_text),
        Err(err) => match (err.status_code(), err.api_body()) {
            (Some(status), Some(body)) => println!("Error: {} {}", status, body),
            _ => return Err(err),
        },
    }

    Ok(())
}
