//! Mock implementations for testing.
//!
//! This module provides mock implementations of the transport and auth
//! traits for use in unit and integration tests following London-School TDD.

use crate::auth::AuthManager;
use crate::errors::HuggingFaceResult;
use crate::transport::{map_status_error, HttpTransport, TransportResponse};
use async_trait::async_trait;
use bytes::Bytes;
use http::header::HeaderValue;
use http::{HeaderMap, Method};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use url::Url;

/// A mock response to return
#[derive(Clone)]
pub struct MockResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Vec<u8>,
    /// Response headers
    pub headers: HeaderMap,
}

impl MockResponse {
    /// Create a successful JSON response
    pub fn json<T: serde::Serialize>(data: &T) -> Self {
        Self {
            status: 200,
            body: serde_json::to_vec(data).unwrap(),
            headers: HeaderMap::new(),
        }
    }

    /// A 200 response shaped like the API's summary array
    pub fn summaries(texts: &[&str]) -> Self {
        let body: Vec<serde_json::Value> = texts
            .iter()
            .map(|t| serde_json::json!({ "summary_text": t }))
            .collect();
        Self::json(&body)
    }

    /// Create an error response with the API's `{"error": ...}` body shape
    pub fn error(status: u16, message: &str) -> Self {
        Self::json_status(status, &serde_json::json!({ "error": message }))
    }

    /// Create a response with a raw body, JSON or not
    pub fn raw(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
            headers: HeaderMap::new(),
        }
    }

    fn json_status<T: serde::Serialize>(status: u16, data: &T) -> Self {
        Self {
            status,
            body: serde_json::to_vec(data).unwrap(),
            headers: HeaderMap::new(),
        }
    }
}

/// A recorded request
#[derive(Debug, Clone)]
pub struct MockRequest {
    /// HTTP method
    pub method: Method,
    /// Request URL
    pub url: String,
    /// Request body
    pub body: Option<Vec<u8>>,
}

#[derive(Default)]
struct TransportState {
    queued: VecDeque<MockResponse>,
    recorded: Vec<MockRequest>,
}

/// Mock HTTP transport that replays queued responses and records every
/// request it receives
#[derive(Default)]
pub struct MockHttpTransport {
    state: Mutex<TransportState>,
}

impl MockHttpTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a response to return
    pub fn add_response(&self, response: MockResponse) {
        self.state.lock().queued.push_back(response);
    }

    /// Get recorded requests
    pub fn get_requests(&self) -> Vec<MockRequest> {
        self.state.lock().recorded.clone()
    }

    /// Get the last request
    pub fn last_request(&self) -> Option<MockRequest> {
        self.state.lock().recorded.last().cloned()
    }

    /// Clear recorded requests
    pub fn clear_requests(&self) {
        self.state.lock().recorded.clear();
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(
        &self,
        method: Method,
        url: Url,
        _headers: HeaderMap,
        body: Option<Bytes>,
    ) -> HuggingFaceResult<TransportResponse> {
        let next = {
            let mut state = self.state.lock();
            state.recorded.push(MockRequest {
                method,
                url: url.to_string(),
                body: body.map(|b| b.to_vec()),
            });
            state.queued.pop_front()
        };

        let response = next.unwrap_or_else(|| MockResponse::raw(500, "no mock response queued"));

        // Non-success statuses map to errors exactly as the real transport
        if !(200..300).contains(&response.status) {
            return Err(map_status_error(response.status, &response.body));
        }

        Ok(TransportResponse {
            status: response.status,
            headers: response.headers,
            body: Bytes::from(response.body),
        })
    }
}

/// Mock auth manager that stamps a fixed token
#[derive(Default)]
pub struct MockAuthManager;

impl MockAuthManager {
    /// Create a new mock auth manager
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AuthManager for MockAuthManager {
    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        self.add_auth_headers(&mut headers);
        headers
    }

    fn add_auth_headers(&self, headers: &mut HeaderMap) {
        headers.insert(
            "authorization",
            HeaderValue::from_static("Bearer hf_mock-api-token"),
        );
        headers.insert(
            "content-type",
            HeaderValue::from_static("application/json"),
        );
    }

    fn validate_api_key(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Builder for creating mock services
pub struct MockClientBuilder {
    transport: Arc<MockHttpTransport>,
    auth: Arc<MockAuthManager>,
}

impl MockClientBuilder {
    /// Create a new mock client builder
    pub fn new() -> Self {
        Self {
            transport: Arc::new(MockHttpTransport::new()),
            auth: Arc::new(MockAuthManager::new()),
        }
    }

    /// Add a mock response
    pub fn with_response(self, response: MockResponse) -> Self {
        self.transport.add_response(response);
        self
    }

    /// Get the transport for adding more responses
    pub fn transport(&self) -> Arc<MockHttpTransport> {
        self.transport.clone()
    }

    /// Build a mock service
    pub fn build<S, F>(self, factory: F) -> (S, Arc<MockHttpTransport>)
    where
        F: FnOnce(Arc<dyn HttpTransport>, Arc<dyn AuthManager>, Url) -> S,
    {
        let transport = self.transport.clone();
        let service = factory(
            self.transport as Arc<dyn HttpTransport>,
            self.auth as Arc<dyn AuthManager>,
            Url::parse("https://api-inference.huggingface.co").unwrap(),
        );
        (service, transport)
    }
}

impl Default for MockClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::HuggingFaceError;

    #[tokio::test]
    async fn test_mock_transport_records_requests() {
        let transport = MockHttpTransport::new();
        transport.add_response(MockResponse::summaries(&["Hello"]));

        let response = transport
            .send(
                Method::POST,
                Url::parse("https://api-inference.huggingface.co/models/facebook/bart-large-cnn")
                    .unwrap(),
                HeaderMap::new(),
                Some(Bytes::from(r#"{"inputs": "Hi"}"#)),
            )
            .await
            .unwrap();

        assert_eq!(response.status, 200);

        let requests = transport.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::POST);
    }

    #[tokio::test]
    async fn test_mock_transport_maps_error_statuses() {
        let transport = MockHttpTransport::new();
        transport.add_response(MockResponse::raw(503, "overloaded"));

        let result = transport
            .send(
                Method::POST,
                Url::parse("https://api-inference.huggingface.co/models/m").unwrap(),
                HeaderMap::new(),
                None,
            )
            .await;

        match result.unwrap_err() {
            HuggingFaceError::Server { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "overloaded");
            }
            other => panic!("Expected server error, got {:?}", other),
        }
    }

    #[test]
    fn test_summaries_fixture_shape() {
        let response = MockResponse::summaries(&["first", "second"]);
        let value: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(value[0]["summary_text"], "first");
        assert_eq!(value[1]["summary_text"], "second");
    }

    #[test]
    fn test_mock_auth_manager() {
        let auth = MockAuthManager::new();
        let headers = auth.get_headers();

        assert!(headers.get("authorization").is_some());
        assert!(auth.validate_api_key().is_ok());
    }
}
