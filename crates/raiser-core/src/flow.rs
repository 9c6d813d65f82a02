//! Checkout Flow
//!
//! Two phases, sequenced the way the page experiences them:
//!
//! 1. [`CheckoutFlow::bootstrap`] - fetch the gateway configuration and
//!    connect the payment widget with the returned publishable key. Nothing
//!    clickable exists before this resolves.
//! 2. [`Checkout::raise`] - on a click, request a checkout session and hand
//!    its identifier to the gateway's redirect. Strictly sequential; a
//!    failed session request never reaches the gateway.
//!
//! No retries, timeouts, or cancellation: a single attempt per click, with
//! errors propagated to the caller for surfacing.

use crate::api::BackendApi;
use crate::error::Result;
use crate::gateway::{GatewayFactory, PaymentGateway};

/// Entry point for the configuration bootstrap.
pub struct CheckoutFlow<B, F> {
    backend: B,
    gateways: F,
}

impl<B, F> CheckoutFlow<B, F>
where
    B: BackendApi,
    F: GatewayFactory,
{
    pub fn new(backend: B, gateways: F) -> Self {
        Self { backend, gateways }
    }

    /// Fetch the publishable key and connect the gateway with it.
    ///
    /// Consumes the flow; the returned [`Checkout`] is the only way to
    /// trigger a redirect, so a raise before configuration has resolved is
    /// unrepresentable.
    pub async fn bootstrap(self) -> Result<Checkout<B, F::Gateway>> {
        let config = self.backend.fetch_config().await?;
        // The key is an opaque string; truncate on char boundaries
        let key_prefix: String = config.public_key.chars().take(8).collect();
        tracing::debug!(%key_prefix, "gateway config received");

        let gateway = self.gateways.connect(&config.public_key)?;

        Ok(Checkout {
            backend: self.backend,
            gateway,
        })
    }
}

/// An armed checkout: configuration resolved, gateway connected.
pub struct Checkout<B, G> {
    backend: B,
    gateway: G,
}

impl<B, G> Checkout<B, G>
where
    B: BackendApi,
    G: PaymentGateway,
{
    /// Request a checkout session and redirect the browser to it.
    ///
    /// Returns the session identifier, mostly for logging; in the happy
    /// path the browser has already navigated away by the time the caller
    /// sees it.
    pub async fn raise(&self) -> Result<String> {
        let session = self.backend.create_checkout_session().await?;
        tracing::info!(session_id = %session.session_id, "checkout session created");

        self.gateway.redirect_to_checkout(&session.session_id).await?;

        Ok(session.session_id)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use async_trait::async_trait;

    use super::*;
    use crate::api::{CheckoutSession, GatewayConfig};
    use crate::error::CheckoutError;

    struct StubBackend {
        public_key: &'static str,
        session_id: &'static str,
        fail_config: bool,
        fail_session: bool,
        session_calls: Rc<Cell<u32>>,
    }

    impl StubBackend {
        fn new() -> Self {
            Self {
                public_key: "pk_test_123",
                session_id: "cs_test_abc",
                fail_config: false,
                fail_session: false,
                session_calls: Rc::new(Cell::new(0)),
            }
        }
    }

    #[async_trait(?Send)]
    impl BackendApi for StubBackend {
        async fn fetch_config(&self) -> Result<GatewayConfig> {
            if self.fail_config {
                return Err(CheckoutError::Config("connection refused".into()));
            }
            Ok(GatewayConfig {
                public_key: self.public_key.into(),
            })
        }

        async fn create_checkout_session(&self) -> Result<CheckoutSession> {
            self.session_calls.set(self.session_calls.get() + 1);
            if self.fail_session {
                return Err(CheckoutError::Session("500 Internal Server Error".into()));
            }
            Ok(CheckoutSession {
                session_id: self.session_id.into(),
            })
        }
    }

    struct RecordingGateway {
        redirects: Rc<RefCell<Vec<String>>>,
        fail_redirect: bool,
    }

    #[async_trait(?Send)]
    impl PaymentGateway for RecordingGateway {
        async fn redirect_to_checkout(&self, session_id: &str) -> Result<()> {
            self.redirects.borrow_mut().push(session_id.to_string());
            if self.fail_redirect {
                return Err(CheckoutError::Gateway("invalid session".into()));
            }
            Ok(())
        }
    }

    struct RecordingFactory {
        connected_keys: Rc<RefCell<Vec<String>>>,
        redirects: Rc<RefCell<Vec<String>>>,
        fail_redirect: bool,
    }

    impl RecordingFactory {
        fn new() -> Self {
            Self {
                connected_keys: Rc::new(RefCell::new(Vec::new())),
                redirects: Rc::new(RefCell::new(Vec::new())),
                fail_redirect: false,
            }
        }
    }

    impl GatewayFactory for RecordingFactory {
        type Gateway = RecordingGateway;

        fn connect(&self, publishable_key: &str) -> Result<RecordingGateway> {
            self.connected_keys
                .borrow_mut()
                .push(publishable_key.to_string());
            Ok(RecordingGateway {
                redirects: self.redirects.clone(),
                fail_redirect: self.fail_redirect,
            })
        }
    }

    #[tokio::test]
    async fn test_bootstrap_connects_gateway_with_publishable_key() {
        let factory = RecordingFactory::new();
        let keys = factory.connected_keys.clone();

        CheckoutFlow::new(StubBackend::new(), factory)
            .bootstrap()
            .await
            .unwrap();

        assert_eq!(*keys.borrow(), vec!["pk_test_123".to_string()]);
    }

    #[tokio::test]
    async fn test_bootstrap_propagates_config_error() {
        let backend = StubBackend {
            fail_config: true,
            ..StubBackend::new()
        };
        let factory = RecordingFactory::new();
        let keys = factory.connected_keys.clone();

        let err = CheckoutFlow::new(backend, factory)
            .bootstrap()
            .await
            .map(|_| ())
            .unwrap_err();

        assert!(matches!(err, CheckoutError::Config(_)));
        assert!(keys.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_bootstrap_accepts_multibyte_publishable_key() {
        // Keys are opaque strings; a multibyte char inside the logged
        // prefix must not break the bootstrap
        let backend = StubBackend {
            public_key: "1234567é_rest_of_key",
            ..StubBackend::new()
        };
        let factory = RecordingFactory::new();
        let keys = factory.connected_keys.clone();

        CheckoutFlow::new(backend, factory)
            .bootstrap()
            .await
            .unwrap();

        assert_eq!(*keys.borrow(), vec!["1234567é_rest_of_key".to_string()]);
    }

    #[tokio::test]
    async fn test_raise_requests_exactly_one_session() {
        let backend = StubBackend::new();
        let calls = backend.session_calls.clone();

        let checkout = CheckoutFlow::new(backend, RecordingFactory::new())
            .bootstrap()
            .await
            .unwrap();
        checkout.raise().await.unwrap();

        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_raise_redirects_with_session_id() {
        let factory = RecordingFactory::new();
        let redirects = factory.redirects.clone();

        let checkout = CheckoutFlow::new(StubBackend::new(), factory)
            .bootstrap()
            .await
            .unwrap();
        let session_id = checkout.raise().await.unwrap();

        assert_eq!(session_id, "cs_test_abc");
        assert_eq!(*redirects.borrow(), vec!["cs_test_abc".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_session_request_never_reaches_gateway() {
        let backend = StubBackend {
            fail_session: true,
            ..StubBackend::new()
        };
        let factory = RecordingFactory::new();
        let redirects = factory.redirects.clone();

        let checkout = CheckoutFlow::new(backend, factory)
            .bootstrap()
            .await
            .unwrap();
        let err = checkout.raise().await.unwrap_err();

        assert!(matches!(err, CheckoutError::Session(_)));
        assert!(redirects.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_gateway_error_surfaces() {
        let factory = RecordingFactory {
            fail_redirect: true,
            ..RecordingFactory::new()
        };

        let checkout = CheckoutFlow::new(StubBackend::new(), factory)
            .bootstrap()
            .await
            .unwrap();
        let err = checkout.raise().await.unwrap_err();

        assert!(matches!(err, CheckoutError::Gateway(_)));
    }
}
