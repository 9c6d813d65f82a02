//! Elephant Raiser Web Frontend
//!
//! Leptos-based WASM frontend for browsing the herd and raising elephants
//! through Stripe's hosted checkout.

pub mod alerts;
mod api;
mod app;
mod checkout;
mod components;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    alerts::schedule_alert_fade();
    leptos::mount::mount_to_body(App);
}
