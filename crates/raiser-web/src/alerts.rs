//! Alert Auto-Dismiss
//!
//! A one-shot timer, scheduled at script start, that fades out every alert
//! banner on the page. Entirely independent of the checkout flow and races
//! freely with it.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

/// How long alert banners stay up before fading, in milliseconds.
pub const ALERT_FADE_DELAY_MS: i32 = 20_000;

const FADE_DURATION_MS: i32 = 200;

/// Schedule the one-shot dismiss timer.
pub fn schedule_alert_fade() {
    set_timeout(ALERT_FADE_DELAY_MS, || {
        fade_out_alerts();
    });
}

/// Fade out and hide every element carrying the `alert` class.
///
/// Returns how many were hidden; zero matching elements is a no-op.
pub fn fade_out_alerts() -> u32 {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return 0;
    };

    let alerts = document.get_elements_by_class_name("alert");
    let count = alerts.length();

    for i in 0..count {
        let Some(el) = alerts.item(i).and_then(|el| el.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };

        let style = el.style();
        let _ = style.set_property(
            "transition",
            &format!("opacity {FADE_DURATION_MS}ms ease-out"),
        );
        let _ = style.set_property("opacity", "0");

        // Take the banner out of flow once the fade has finished
        set_timeout(FADE_DURATION_MS, move || {
            let _ = el.style().set_property("display", "none");
        });
    }

    count
}

fn set_timeout(delay_ms: i32, callback: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let cb = Closure::once_into_js(callback);
    let _ = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms);
}
