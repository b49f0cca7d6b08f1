//! HTTP client for the backend endpoints.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use super::error::{BackendError, Result};
use super::types::{
    ChatReply, ChatRequest, ErrorBody, GenerateReply, GenerateRequest, SignupReply, SignupRequest,
};
use crate::playground::GenerationKind;

/// Header carrying the caller's API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// HTTP client for the backend.
///
/// # Example
///
/// ```rust,no_run
/// use omnipanel::backend::BackendClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = BackendClient::new("http://localhost:8000")?;
/// let key = client.signup("guest@example.com").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: Url,
    http: reqwest::Client,
}

impl BackendClient {
    /// Create a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Origin of the backend (e.g., "http://localhost:8000")
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a new client with a custom reqwest client.
    pub fn with_client(base_url: impl AsRef<str>, http: reqwest::Client) -> Result<Self> {
        let mut base_url = Url::parse(base_url.as_ref())?;
        // Endpoint paths are joined relative to the base, keeping any prefix.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url, http })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `POST /api/chat`. Returns the synthesized `final` text, if any.
    pub async fn chat(&self, request: &ChatRequest, api_key: &str) -> Result<Option<String>> {
        let response = self.post("api/chat", request, Some(api_key)).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::api_error(response, format!("HTTP {}", status.as_u16())).await);
        }
        let reply: ChatReply = Self::decode(response).await?;
        Ok(reply.final_text)
    }

    /// `POST /api/generate/{image,video}`. Returns the generated asset URL.
    pub async fn generate(
        &self,
        kind: GenerationKind,
        prompt: &str,
        api_key: &str,
    ) -> Result<String> {
        let body = GenerateRequest {
            prompt: prompt.to_string(),
        };
        let path = format!("api/generate/{}", kind.as_str());
        let response = self.post(&path, &body, Some(api_key)).await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response, "Generation failed".into()).await);
        }
        let reply: GenerateReply = Self::decode(response).await?;
        Ok(reply.url)
    }

    /// `POST /api/auth/signup`. Returns the issued API key.
    pub async fn signup(&self, email: &str) -> Result<String> {
        let body = SignupRequest {
            email: email.to_string(),
        };
        let response = self.post("api/auth/signup", &body, None).await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response, "Signup failed".into()).await);
        }
        let reply: SignupReply = Self::decode(response).await?;
        Ok(reply.api_key)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal helpers
    // ─────────────────────────────────────────────────────────────────────────

    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        api_key: Option<&str>,
    ) -> Result<reqwest::Response> {
        let url = self.base_url.join(path)?;
        debug!(name: "backend.request", url = %url, "POST");

        let mut request = self.http.post(url.clone()).json(body);
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            request = request.header(API_KEY_HEADER, key);
        }

        request.send().await.map_err(|e| {
            warn!(name: "backend.request.failed", url = %url, error = %e, "Backend unreachable");
            BackendError::Transport(e)
        })
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| BackendError::Decode(e.to_string()))
    }

    async fn api_error(response: reqwest::Response, fallback: String) -> BackendError {
        let status = response.status().as_u16();
        let detail = match response.bytes().await {
            Ok(bytes) => serde_json::from_slice::<ErrorBody>(&bytes)
                .ok()
                .and_then(|b| b.detail)
                .filter(|d| !d.is_empty())
                .unwrap_or(fallback),
            Err(_) => fallback,
        };
        warn!(name: "backend.response.error", status, detail = %detail, "Backend returned an error");
        BackendError::Api { status, detail }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_keeps_prefix() {
        let client = BackendClient::new("https://api.example.com/v1").unwrap();
        assert_eq!(
            client.base_url().join("api/chat").unwrap().as_str(),
            "https://api.example.com/v1/api/chat"
        );
    }

    #[test]
    fn test_base_url_root() {
        let client = BackendClient::new("http://127.0.0.1:3000").unwrap();
        assert_eq!(
            client.base_url().join("api/auth/signup").unwrap().as_str(),
            "http://127.0.0.1:3000/api/auth/signup"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = BackendClient::new("not a url").unwrap_err();
        assert!(matches!(err, BackendError::InvalidUrl(_)));
    }

    #[test]
    fn test_api_error_displays_detail() {
        let err = BackendError::Api {
            status: 429,
            detail: "rate limited".into(),
        };
        assert_eq!(err.to_string(), "rate limited");
        assert_eq!(err.status(), Some(429));
    }
}
