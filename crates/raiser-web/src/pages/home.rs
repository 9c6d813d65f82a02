//! Home Page

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="hero">
                <h1>"Elephant Raiser"</h1>
                <p class="tagline">"Sponsor a famous elephant and help keep the herd thriving"</p>
                <div class="cta">
                    <a href="/browse" class="btn btn-primary">"Browse the herd"</a>
                    <a href="/raise-list" class="btn">"Your raise list"</a>
                </div>
            </header>

            <section class="features">
                <div class="feature">
                    <h3>"Pick an elephant"</h3>
                    <p>"Every elephant in the herd has a story. Find the one that's yours."</p>
                </div>
                <div class="feature">
                    <h3>"Raise monthly"</h3>
                    <p>"A small monthly amount goes straight to the elephant's keepers."</p>
                </div>
                <div class="feature">
                    <h3>"Pay securely"</h3>
                    <p>"Checkout is handled end to end by Stripe's hosted payment page."</p>
                </div>
            </section>
        </div>
    }
}
