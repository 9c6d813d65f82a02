//! Backend Client
//!
//! Talks to the two backend endpoints over same-origin HTTP. Both are
//! parameterless GETs; the bodies are deserialized as-is with no further
//! validation.
//!
//! Request URLs are absolutized against the page origin: reqwest's URL
//! parser rejects bare relative paths at request build time, before any
//! I/O, on wasm as everywhere else.

use async_trait::async_trait;
use raiser_core::{BackendApi, CheckoutError, CheckoutSession, GatewayConfig, Result};

/// `BackendApi` over fetch, against the page's own origin.
pub struct HttpBackend {
    client: reqwest::Client,
    base: String,
}

impl HttpBackend {
    pub fn new() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| "http://localhost:3000".into());
        Self::with_base(origin)
    }

    /// Build against an explicit base URL (scheme and host, no trailing slash).
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl BackendApi for HttpBackend {
    async fn fetch_config(&self) -> Result<GatewayConfig> {
        let response = self
            .client
            .get(self.endpoint("/config"))
            .send()
            .await
            .map_err(|e| CheckoutError::Config(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| CheckoutError::Malformed(e.to_string()))
    }

    async fn create_checkout_session(&self) -> Result<CheckoutSession> {
        let response = self
            .client
            .get(self.endpoint("/create-checkout-session"))
            .send()
            .await
            .map_err(|e| CheckoutError::Session(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| CheckoutError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_resolve_to_absolute_urls() {
        let backend = HttpBackend::with_base("http://localhost:3000");

        let config = backend.endpoint("/config");
        let session = backend.endpoint("/create-checkout-session");

        assert_eq!(config, "http://localhost:3000/config");
        assert_eq!(session, "http://localhost:3000/create-checkout-session");

        // A bare relative path never survives the URL parser; the
        // absolutized forms do
        assert!(reqwest::Url::parse("/config").is_err());
        assert!(reqwest::Url::parse(&config).is_ok());
        assert!(reqwest::Url::parse(&session).is_ok());
    }
}
