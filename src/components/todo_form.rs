//! Todo Form Component
//!
//! Text input for new todos. Submission is handled by the container's
//! delegated submit listener through `data-action="add"`.

use leptos::prelude::*;

#[component]
pub fn TodoForm() -> impl IntoView {
    view! {
        <form class="todo-form" data-action="add">
            <input
                type="text"
                id="todo-input"
                name="todo"
                class="todo-input"
                placeholder="Create a new todo..."
                autocomplete="off"
            />
            <button type="submit" class="todo-form__submit">"Add"</button>
        </form>
    }
}
