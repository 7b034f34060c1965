//! Todo Footer Component
//!
//! Remaining count, filter tabs and the clear-completed control.

use leptos::prelude::*;

use crate::components::{FilterTabs, RemainingCount};

#[component]
pub fn TodoFooter() -> impl IntoView {
    view! {
        <footer class="todo-footer">
            <RemainingCount />
            <FilterTabs />
            <button type="button" class="clear-completed" data-action="clear-completed">
                "Clear Completed"
            </button>
        </footer>
    }
}
