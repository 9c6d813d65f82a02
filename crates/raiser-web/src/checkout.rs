//! Stripe Gateway Adapter
//!
//! Adapts the Stripe.js wrapper to the core gateway traits.

use async_trait::async_trait;
use raiser_core::{CheckoutError, GatewayFactory, PaymentGateway, Result};
use raiser_stripe::Stripe;

/// Connects Stripe.js clients from publishable keys.
pub struct StripeGatewayFactory;

impl GatewayFactory for StripeGatewayFactory {
    type Gateway = StripeGateway;

    fn connect(&self, publishable_key: &str) -> Result<StripeGateway> {
        Ok(StripeGateway {
            stripe: Stripe::new(publishable_key),
        })
    }
}

/// A connected Stripe.js client.
pub struct StripeGateway {
    stripe: Stripe,
}

#[async_trait(?Send)]
impl PaymentGateway for StripeGateway {
    async fn redirect_to_checkout(&self, session_id: &str) -> Result<()> {
        let outcome = self
            .stripe
            .redirect_to_checkout(session_id)
            .await
            .map_err(|e| CheckoutError::Gateway(format!("{e:?}")))?;

        // Stripe only resolves in this document when it refused to navigate
        leptos::logging::log!("redirectToCheckout returned: {outcome:?}");
        Ok(())
    }
}
