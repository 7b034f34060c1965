//! Filter Tabs Component
//!
//! All / Active / Completed, exactly one marked `aria-selected`.

use leptos::prelude::*;

use crate::store::{use_view_store, ViewStateStoreFields};

#[component]
pub fn FilterTabs() -> impl IntoView {
    let store = use_view_store();

    view! {
        <div class="todo-filters" role="tablist">
            {move || store.tabs().get().into_iter().map(|tab| {
                let tab_class = if tab.selected { "todo-filter active" } else { "todo-filter" };
                let selected = if tab.selected { "true" } else { "false" };
                view! {
                    <button
                        type="button"
                        role="tab"
                        class=tab_class
                        data-action="filter"
                        data-view=tab.filter.as_str()
                        aria-selected=selected
                    >
                        {tab.filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
