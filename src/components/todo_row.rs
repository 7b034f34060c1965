//! Todo Row Component
//!
//! One list entry drawn from its projected node.

use leptos::prelude::*;
use todo_core::ProjectedNode;

#[component]
pub fn TodoRow(node: ProjectedNode) -> impl IntoView {
    let id = node.id.to_string();
    let checked = node.checked();

    view! {
        <li class="todo-list__item" data-status=node.status.as_str() hidden=node.hidden>
            <input
                type="checkbox"
                id=id.clone()
                data-action="toggle"
                data-id=id.clone()
                prop:checked=checked
            />
            <label class="todo-checkbox" for=id.clone()></label>
            // Name is escaped by the projection
            <label class="todo-name" for=id.clone() inner_html=node.label_html></label>
            <button type="button" class="remove-todo-btn" data-action="remove" data-id=id aria-label="Remove todo">
                "×"
            </button>
        </li>
    }
}
