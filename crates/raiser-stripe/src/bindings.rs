//! Low-level wasm-bindgen bindings to Stripe.js v3.
//!
//! Only the hosted-checkout subset is bound: the `Stripe(pk)` constructor
//! and `redirectToCheckout`. Higher-level wrappers live in `client.rs`.
//! Stripe.js itself must be loaded by the page (`https://js.stripe.com/v3/`).

use wasm_bindgen::prelude::*;
use js_sys::Promise;

#[wasm_bindgen]
extern "C" {
    /// Raw Stripe.js client handle.
    #[wasm_bindgen(js_name = Stripe, js_namespace = window)]
    #[derive(Debug, Clone)]
    pub type JsStripe;

    /// Construct a new `JsStripe` from a publishable key.
    ///
    /// ```js
    ///   const stripe = Stripe("pk_test_...");
    /// ```
    #[wasm_bindgen(js_name = Stripe, js_namespace = window)]
    pub fn new_stripe(publishable_key: &str) -> JsStripe;

    /// `stripe.redirectToCheckout({ sessionId })` -> JS `Promise`
    ///
    /// On success the browser navigates away and the promise never settles
    /// in this document; it resolves with `{ error }` when Stripe refuses
    /// to redirect (bad session id, network trouble).
    #[wasm_bindgen(method, catch, js_name = redirectToCheckout)]
    pub fn redirect_to_checkout(this: &JsStripe, options: JsValue) -> Result<Promise, JsValue>;
}
