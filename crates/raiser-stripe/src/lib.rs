//! # raiser-stripe
//!
//! Minimal Stripe.js v3 bindings for the hosted-checkout ("redirect to
//! checkout") flow. The raw externs live in [`bindings`]; [`Stripe`] is the
//! typed async wrapper the application uses.

pub mod bindings;
mod client;

pub use client::Stripe;
