//! Payment Gateway Capability
//!
//! The hosted-checkout widget is injected behind these traits so the flow
//! can be exercised in tests without a browser or a provider SDK.

use async_trait::async_trait;

use crate::error::Result;

/// A payment widget handle scoped to one publishable key.
#[async_trait(?Send)]
pub trait PaymentGateway {
    /// Navigate the browser to the provider-hosted checkout page for the
    /// given session. On success the page is left entirely; the call only
    /// resolves when the provider declines to navigate.
    async fn redirect_to_checkout(&self, session_id: &str) -> Result<()>;
}

/// Constructs gateway handles from a publishable key.
pub trait GatewayFactory {
    type Gateway: PaymentGateway;

    fn connect(&self, publishable_key: &str) -> Result<Self::Gateway>;
}
