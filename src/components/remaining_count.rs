//! Remaining Count Component

use leptos::prelude::*;

use crate::store::{use_view_store, ViewStateStoreFields};

/// "N Items Left" label; the page may show several
#[component]
pub fn RemainingCount() -> impl IntoView {
    let store = use_view_store();

    view! {
        <span class="active-todos">{move || store.summary().get().remaining_label}</span>
    }
}
