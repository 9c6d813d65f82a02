//! Raise List Page
//!
//! Owns the checkout flow. The configuration bootstrap runs when the page
//! mounts; the raise button stays disabled until it resolves, so a click
//! before the publishable key has arrived is a no-op.

use std::rc::Rc;

use leptos::prelude::*;
use raiser_core::{Checkout, CheckoutFlow, RaiseList};

use crate::api::HttpBackend;
use crate::checkout::{StripeGateway, StripeGatewayFactory};
use crate::components::Alerts;

type ArmedCheckout = Rc<Checkout<HttpBackend, StripeGateway>>;

/// The click-before-ready gate: a checkout handle only exists once the
/// configuration bootstrap has resolved.
fn awaiting_bootstrap<T>(checkout: Option<&T>) -> bool {
    checkout.is_none()
}

#[component]
pub fn RaiseListPage() -> impl IntoView {
    let raise_list = expect_context::<RwSignal<RaiseList>>();
    let alerts = expect_context::<RwSignal<Alerts>>();

    // Holds JS handles, so local storage only
    let (checkout, set_checkout) = signal_local(None::<ArmedCheckout>);

    // Configuration bootstrap: fetch the publishable key and connect
    // Stripe.js before the raise button does anything.
    leptos::task::spawn_local(async move {
        let flow = CheckoutFlow::new(HttpBackend::new(), StripeGatewayFactory);
        match flow.bootstrap().await {
            Ok(armed) => set_checkout.set(Some(Rc::new(armed))),
            Err(e) => leptos::logging::error!("checkout bootstrap failed: {e}"),
        }
    });

    let raise = move |_| {
        let Some(armed) = checkout.get() else { return };
        leptos::task::spawn_local(async move {
            match armed.raise().await {
                // In the happy path the browser has already navigated away
                Ok(session_id) => leptos::logging::log!("checkout session {session_id}"),
                Err(e) => {
                    leptos::logging::error!("checkout failed: {e}");
                    alerts.update(|a| a.push(e.user_message()));
                }
            }
        });
    };

    let remove = move |name: String| {
        raise_list.update(|list| {
            list.remove(&name);
        });
    };

    view! {
        <div class="raise-list">
            <h1>"Your raise list"</h1>
            <Show
                when=move || !raise_list.get().is_empty()
                fallback=|| view! { <p>"You don't have an elephant in your raise list yet."</p> }
            >
                <ul class="picks">
                    <For
                        each=move || raise_list.get().picks().to_vec()
                        key=|e| e.name.clone()
                        children=move |e| {
                            let name = e.name.clone();
                            view! {
                                <li>
                                    <span class="name">{e.name.clone()}</span>
                                    <span class="price">{format!("${}/month", e.price)}</span>
                                    <button class="btn-link" on:click=move |_| remove(name.clone())>
                                        "Remove"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
                <p class="total">
                    {move || {
                        let list = raise_list.get();
                        format!("{} elephants, ${} per month", list.len(), list.total_amount())
                    }}
                </p>
                <button
                    id="raise-btn"
                    class="btn btn-primary"
                    on:click=raise
                    disabled=move || checkout.with(|c| awaiting_bootstrap(c.as_ref()))
                >
                    "Raise"
                </button>
            </Show>
        </div>
    }
}
