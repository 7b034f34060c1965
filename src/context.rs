//! Widget Context
//!
//! The widget and its view store. The view store is provided via the Leptos
//! Context API; the widget stays with the root's delegated listeners.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use todo_core::{ControlSignal, DispatchOutcome, TodoWidget};

use crate::dialog::BrowserPrompt;
use crate::storage::BrowserStorage;
use crate::store::{store_apply_snapshot, ViewState, ViewStore};

/// Owner of all widget state; handlers reach it only through `handle`
#[derive(Clone, Copy)]
pub struct WidgetContext {
    /// Store, filter and projection (not `Send`: holds the browser storage)
    widget: StoredValue<TodoWidget<BrowserStorage>, LocalStorage>,
    /// Reactive copy of the projection for the view
    pub view: ViewStore,
}

impl WidgetContext {
    pub fn new(widget: TodoWidget<BrowserStorage>) -> Self {
        let view = ViewStore::new(ViewState::from(widget.snapshot()));
        Self {
            widget: StoredValue::new_local(widget),
            view,
        }
    }

    /// Run one control signal to completion, then publish the new projection
    pub fn handle(&self, signal: ControlSignal) {
        let outcome = self
            .widget
            .try_update_value(|widget| widget.handle_signal(&signal, &mut BrowserPrompt));
        if outcome == Some(DispatchOutcome::Applied) {
            if let Some(snapshot) = self.widget.try_with_value(|widget| widget.snapshot()) {
                store_apply_snapshot(&self.view, snapshot);
            }
        }
    }
}
