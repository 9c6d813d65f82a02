//! # raiser-core
//!
//! Checkout flow and domain model for the elephant-raiser frontend.
//!
//! The flow mirrors what the page does: on load, fetch the gateway
//! configuration from the backend and connect the payment widget with the
//! returned publishable key; on a click of the raise button, request a
//! checkout session and redirect the browser to the provider-hosted
//! checkout page.
//!
//! ```text
//! ┌───────────┐  GET /config   ┌─────────────┐  connect(pk)  ┌──────────┐
//! │ page load │───────────────▶│ CheckoutFlow│──────────────▶│ Checkout │
//! └───────────┘                └─────────────┘               └────┬─────┘
//!                                                                 │ raise()
//!                      GET /create-checkout-session               ▼
//!                      redirectToCheckout(sessionId)      hosted checkout
//! ```
//!
//! All collaborators (backend, payment gateway) sit behind traits so the
//! flow runs against mocks in tests and against `reqwest` + Stripe.js in
//! the browser.

mod api;
mod catalog;
mod error;
mod flow;
mod gateway;

pub use api::{BackendApi, CheckoutSession, GatewayConfig};
pub use catalog::{Elephant, RaiseList, herd};
pub use error::{CheckoutError, Result};
pub use flow::{Checkout, CheckoutFlow};
pub use gateway::{GatewayFactory, PaymentGateway};
