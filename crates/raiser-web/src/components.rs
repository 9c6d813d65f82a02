//! UI Components

use leptos::prelude::*;
use raiser_core::{Elephant, RaiseList};

/// Flash messages with stable, monotonically increasing ids so keyed
/// rendering survives removal and same-text pushes.
#[derive(Clone, Debug, Default)]
pub struct Alerts {
    next_id: usize,
    messages: Vec<(usize, String)>,
}

impl Alerts {
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push((self.next_id, message.into()));
        self.next_id += 1;
    }

    pub fn dismiss(&mut self, id: usize) {
        self.messages.retain(|(alert_id, _)| *alert_id != id);
    }

    pub fn entries(&self) -> &[(usize, String)] {
        &self.messages
    }
}

/// Flash-message stack. Every banner carries the `alert` class so the
/// dismiss timer can find it.
#[component]
pub fn AlertStack() -> impl IntoView {
    let alerts = expect_context::<RwSignal<Alerts>>();

    view! {
        <div class="alerts">
            <For
                each=move || alerts.get().entries().to_vec()
                key=|(id, _)| *id
                children=move |(_, msg)| view! { <div class="alert alert-info">{msg}</div> }
            />
        </div>
    }
}

/// Catalog card with an add-to-raise-list action
#[component]
pub fn ElephantCard(elephant: Elephant) -> impl IntoView {
    let raise_list = expect_context::<RwSignal<RaiseList>>();
    let alerts = expect_context::<RwSignal<Alerts>>();

    let pick = elephant.clone();
    let add = move |_| {
        let mut added = false;
        raise_list.update(|list| added = list.add(pick.clone()));
        if added {
            alerts.update(|a| a.push(format!("{} is added to your raise list.", pick.name)));
        }
    };

    view! {
        <div class="card elephant">
            <img src=elephant.image.clone() alt=elephant.name.clone() />
            <h3>{elephant.name.clone()}</h3>
            <p class="meta">
                {format!("{}, {}, {}", elephant.species, elephant.sex, elephant.affiliation)}
            </p>
            <p class="note">{elephant.note.clone()}</p>
            <a href=elephant.wikilink.clone() target="_blank">"Learn more"</a>
            <div class="price">{format!("${}/month", elephant.price)}</div>
            <button class="btn" on:click=add>"Add to raise list"</button>
        </div>
    }
}
