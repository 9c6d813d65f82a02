//! Typed wrapper over the raw Stripe.js bindings.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::bindings::{JsStripe, new_stripe};

/// A Stripe.js client scoped to one publishable key.
#[derive(Debug, Clone)]
pub struct Stripe {
    inner: JsStripe,
}

impl Stripe {
    /// Construct from a publishable key (`pk_live_...` / `pk_test_...`).
    pub fn new(publishable_key: &str) -> Self {
        Self {
            inner: new_stripe(publishable_key),
        }
    }

    /// Redirect the browser to the hosted checkout page for `session_id`.
    ///
    /// Resolving at all means Stripe declined to navigate; the resolved
    /// value is its `{ error }` payload, handed back for logging.
    pub async fn redirect_to_checkout(&self, session_id: &str) -> Result<JsValue, JsValue> {
        let options = Object::new();
        Reflect::set(&options, &"sessionId".into(), &session_id.into())?;

        let promise = self.inner.redirect_to_checkout(options.into())?;
        JsFuture::from(promise).await
    }
}
