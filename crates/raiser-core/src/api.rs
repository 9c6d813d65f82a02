//! Backend Endpoint Contracts
//!
//! The backend is an external collaborator reached over HTTP. Two endpoints
//! matter to the checkout flow, both parameterless GETs returning JSON.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Body of `GET /config`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Publishable key identifying the merchant to the payment widget.
    /// Non-secret; safe to hand to browser code.
    pub public_key: String,
}

/// Body of `GET /create-checkout-session`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Server-issued identifier for the hosted checkout transaction
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

/// Client-side view of the backend collaborator.
///
/// `?Send` because the production implementation runs on the browser's
/// single-threaded event loop over futures that hold JS handles.
#[async_trait(?Send)]
pub trait BackendApi {
    /// `GET /config`
    async fn fetch_config(&self) -> Result<GatewayConfig>;

    /// `GET /create-checkout-session`
    async fn create_checkout_session(&self) -> Result<CheckoutSession>;
}
