//! HTTP transport implementations.

use crate::errors::{ApiErrorResponse, HuggingFaceError, HuggingFaceResult};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Response from HTTP transport
#[derive(Debug)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body
    pub body: Bytes,
}

/// HTTP transport trait for making requests to the Inference API.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send an HTTP request
    async fn send(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Bytes>,
    ) -> HuggingFaceResult<TransportResponse>;

    /// Execute a request and return the response
    async fn execute(
        &self,
        method: Method,
        url: String,
        headers: HeaderMap,
        body: Option<Vec<u8>>,
    ) -> HuggingFaceResult<TransportResponse> {
        let parsed_url = Url::parse(&url)?;
        let body_bytes = body.map(Bytes::from);
        self.send(method, parsed_url, headers, body_bytes).await
    }
}

/// Reqwest-based HTTP transport implementation
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a new reqwest transport with the given request timeout
    pub fn new(timeout: Duration) -> HuggingFaceResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .tcp_keepalive(Duration::from_secs(60))
            .build()
            .map_err(|e| HuggingFaceError::Configuration {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }

    /// Create a new reqwest transport with a custom client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

/// Map a non-success HTTP status to a typed error.
///
/// The raw body text is preserved verbatim on every variant so callers
/// can report exactly what the API returned. Shared with the mock
/// transport so both map statuses identically.
pub(crate) fn map_status_error(status: u16, body: &[u8]) -> HuggingFaceError {
    let body_str = String::from_utf8_lossy(body).into_owned();

    if let Ok(api_error) = serde_json::from_slice::<ApiErrorResponse>(body) {
        if let Some(eta) = api_error.estimated_time {
            warn!(
                error = %api_error.error,
                estimated_time = eta,
                "model not ready"
            );
        }
    }

    match status {
        401 | 403 => HuggingFaceError::Authentication {
            status,
            body: body_str,
        },
        404 => HuggingFaceError::NotFound {
            status,
            body: body_str,
        },
        500..=599 => HuggingFaceError::Server {
            status,
            body: body_str,
        },
        _ => HuggingFaceError::Api {
            status,
            body: body_str,
        },
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Bytes>,
    ) -> HuggingFaceResult<TransportResponse> {
        debug!(method = %method, url = %url, "dispatching request");

        let mut request = self.client.request(method, url).headers(headers);
        if let Some(payload) = body {
            request = request.body(payload);
        }

        let response = request.send().await?;

        let status = response.status();
        let response_headers = response.headers().clone();
        let body_bytes = response.bytes().await?;

        debug!(
            status = status.as_u16(),
            bytes = body_bytes.len(),
            "response received"
        );

        if !status.is_success() {
            return Err(map_status_error(status.as_u16(), &body_bytes));
        }

        Ok(TransportResponse {
            status: status.as_u16(),
            headers: response_headers,
            body: body_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reqwest_transport_creation() {
        let transport = ReqwestTransport::new(Duration::from_secs(30));
        assert!(transport.is_ok());
    }

    #[test]
    fn test_map_status_error_preserves_status_and_body() {
        let error = map_status_error(503, b"overloaded");
        assert_eq!(error.status_code(), Some(503));
        assert_eq!(error.api_body(), Some("overloaded"));

        let error = map_status_error(401, b"{\"error\": \"invalid token\"}");
        assert!(matches!(
            error,
            HuggingFaceError::Authentication { status: 401, .. }
        ));

        let error = map_status_error(404, b"{\"error\": \"model not found\"}");
        assert!(matches!(error, HuggingFaceError::NotFound { status: 404, .. }));

        let error = map_status_error(429, b"{\"error\": \"rate limited\"}");
        assert!(matches!(error, HuggingFaceError::Api { status: 429, .. }));
    }

    #[test]
    fn test_map_status_error_tolerates_non_json_body() {
        let error = map_status_error(502, b"Bad Gateway");
        assert_eq!(error.status_code(), Some(502));
        assert_eq!(error.api_body(), Some("Bad Gateway"));
    }
}
