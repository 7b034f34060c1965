//! Todo Widget App
//!
//! Root component. Owns the widget context and the two delegated listeners
//! (submit and click) for everything inside the container.

use leptos::prelude::*;
use todo_core::{TodoWidget, WidgetConfig};

use crate::components::{RemainingCount, TodoFooter, TodoForm, TodoList};
use crate::context::WidgetContext;
use crate::delegation::{click_signal, submit_signal};
use crate::storage::BrowserStorage;

#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    // State
    let widget = TodoWidget::load(BrowserStorage::open(), config);
    tracing::info!(count = widget.store().len(), "todo widget loaded");
    let ctx = WidgetContext::new(widget);

    // Children read the view store; only the listeners touch the widget
    provide_context(ctx.view);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(signal) = submit_signal(&ev) {
            ctx.handle(signal);
        }
    };

    let on_click = move |ev: web_sys::MouseEvent| {
        if let Some(signal) = click_signal(&ev) {
            ctx.handle(signal);
        }
    };

    view! {
        <section id="todo-app" class="todo-app" on:submit=on_submit on:click=on_click>
            <header class="todo-header">
                <h1>"TODO"</h1>
                <RemainingCount />
            </header>

            <TodoForm />

            <TodoList />

            <TodoFooter />
        </section>
    }
}
