//! Todo List Component
//!
//! Keyed list of projected nodes plus the empty-state message.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_view_store, ViewStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_view_store();

    view! {
        <ul class="todo-list">
            // A changed status or visibility re-creates only that row
            <For
                each=move || store.nodes().get()
                key=|node| (node.id.clone(), node.status, node.hidden)
                children=|node| view! { <TodoRow node=node /> }
            />
        </ul>
        {move || store.summary().get().empty_message.map(|message| view! {
            <p class="todo-empty">{message}</p>
        })}
    }
}
