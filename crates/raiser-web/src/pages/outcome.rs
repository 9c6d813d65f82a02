//! Checkout Outcome Pages
//!
//! The hosted checkout redirects back to these routes.

use leptos::prelude::*;
use raiser_core::RaiseList;

#[component]
pub fn SuccessPage() -> impl IntoView {
    let raise_list = expect_context::<RwSignal<RaiseList>>();
    // The picks are paid for; start fresh.
    raise_list.update(RaiseList::clear);

    view! {
        <div class="outcome success">
            <h1>"Thank you!"</h1>
            <p>"Your raise went through. The herd thanks you."</p>
            <a href="/browse" class="btn">"Back to the herd"</a>
        </div>
    }
}

#[component]
pub fn CancelPage() -> impl IntoView {
    view! {
        <div class="outcome cancel">
            <h1>"Checkout cancelled"</h1>
            <p>"Your raise list is untouched. Come back any time."</p>
            <a href="/raise-list" class="btn">"Back to your raise list"</a>
        </div>
    }
}
