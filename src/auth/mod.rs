//! Bearer-token authentication for the Hugging Face Inference API.

use async_trait::async_trait;
use http::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};

/// Trait for managing authentication headers
#[async_trait]
pub trait AuthManager: Send + Sync {
    /// Get the authentication headers for a request
    fn get_headers(&self) -> HeaderMap;

    /// Add authentication headers to an existing header map
    fn add_auth_headers(&self, headers: &mut HeaderMap);

    /// Validate the API token format (basic format validation only)
    fn validate_api_key(&self) -> Result<(), String>;
}

/// Bearer token authentication manager for the Hugging Face API
pub struct BearerAuthManager {
    api_key: SecretString,
}

impl BearerAuthManager {
    /// Create a new bearer authentication manager
    pub fn new(api_key: SecretString) -> Self {
        Self { api_key }
    }

    fn user_agent() -> HeaderValue {
        HeaderValue::from_static(concat!(
            "integrations-huggingface/",
            env!("CARGO_PKG_VERSION")
        ))
    }
}

#[async_trait]
impl AuthManager for BearerAuthManager {
    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        self.add_auth_headers(&mut headers);
        headers
    }

    fn add_auth_headers(&self, headers: &mut HeaderMap) {
        let bearer = format!("Bearer {}", self.api_key.expose_secret());
        let mut auth = HeaderValue::from_str(&bearer).expect("token is not header-safe");
        // Keep the token out of Debug output of the header map
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, Self::user_agent());
    }

    fn validate_api_key(&self) -> Result<(), String> {
        let key = self.api_key.expose_secret();

        if key.is_empty() {
            return Err("API token cannot be empty".to_string());
        }

        if key.chars().any(char::is_whitespace) {
            return Err("API token contains whitespace".to_string());
        }

        // User tokens look like "hf_..." and org tokens "api_org_...", both
        // well past this floor; this only catches obvious paste errors.
        if key.len() < 8 {
            return Err("API token appears to be too short".to_string());
        }

        Ok(())
    }
}
