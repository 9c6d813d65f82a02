//! Browse Page

use leptos::prelude::*;
use raiser_core::herd;

use crate::components::ElephantCard;

#[component]
pub fn BrowsePage() -> impl IntoView {
    view! {
        <div class="browse">
            <h1>"Meet the herd"</h1>
            <div class="cards">
                {herd()
                    .into_iter()
                    .map(|elephant| view! { <ElephantCard elephant /> })
                    .collect_view()}
            </div>
        </div>
    }
}
