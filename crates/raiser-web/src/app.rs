//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};
use raiser_core::RaiseList;

use crate::components::{AlertStack, Alerts};
use crate::pages::{BrowsePage, CancelPage, HomePage, RaiseListPage, SuccessPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_context(RwSignal::new(RaiseList::new()));
    provide_context(RwSignal::new(Alerts::default()));

    view! {
        <Router>
            <main class="app">
                <nav class="topnav">
                    <a href="/" class="brand">"Elephant Raiser"</a>
                    <a href="/browse">"Browse"</a>
                    <a href="/raise-list">"Raise list"</a>
                </nav>
                <AlertStack />
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/browse") view=BrowsePage />
                    <Route path=path!("/raise-list") view=RaiseListPage />
                    <Route path=path!("/success") view=SuccessPage />
                    <Route path=path!("/cancel") view=CancelPage />
                </Routes>
            </main>
        </Router>
    }
}
