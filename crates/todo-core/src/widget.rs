//! Event Dispatcher
//!
//! `TodoWidget` owns the store, the filter controller and the projection, and
//! routes decoded actions through them. One action runs to completion before
//! the next is accepted (`&mut self`).

use crate::action::{Action, ControlSignal};
use crate::config::WidgetConfig;
use crate::error::TodoError;
use crate::filter::{FilterController, FilterTab};
use crate::model::{TodoId, TodoItem, TodoStatus, ViewFilter};
use crate::projection::{ProjectedNode, Projection, StatusSummary};
use crate::storage::TodoStorage;
use crate::store::TodoStore;

/// Blocking user dialogs (browser `alert` / `confirm`)
pub trait UserPrompt {
    /// Show a warning the user must acknowledge
    fn warn(&mut self, message: &str);

    /// Ask a yes/no question
    fn confirm(&mut self, message: &str) -> bool;
}

/// What handling an action amounted to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// State (store, filter or both) changed
    Applied,
    /// Input rejected, user warned
    Rejected,
    /// User declined the confirmation
    Cancelled,
    /// Stale id or undecodable signal, nothing happened
    Ignored,
}

/// Everything the view needs to draw, detached from the widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetSnapshot {
    pub nodes: Vec<ProjectedNode>,
    pub tabs: [FilterTab; 3],
    pub summary: StatusSummary,
}

pub struct TodoWidget<S: TodoStorage> {
    config: WidgetConfig,
    store: TodoStore<S>,
    filter: FilterController,
    projection: Projection,
}

impl<S: TodoStorage> TodoWidget<S> {
    /// Load persisted items and project them under the default filter
    pub fn load(storage: S, config: WidgetConfig) -> Self {
        let store = TodoStore::load(storage, config.storage_key.clone());
        let mut widget = Self {
            config,
            store,
            filter: FilterController::new(),
            projection: Projection::new(),
        };
        widget.projection.render_all(widget.store.items(), widget.filter.current());
        widget.refresh_counters();
        widget
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn store(&self) -> &TodoStore<S> {
        &self.store
    }

    pub fn filter(&self) -> ViewFilter {
        self.filter.current()
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn snapshot(&self) -> WidgetSnapshot {
        WidgetSnapshot {
            nodes: self.projection.nodes().to_vec(),
            tabs: self.filter.tabs(),
            summary: self.projection.summary().clone(),
        }
    }

    /// Decode and handle a raw control signal. Undecodable signals are ignored.
    pub fn handle_signal(&mut self, signal: &ControlSignal, prompt: &mut dyn UserPrompt) -> DispatchOutcome {
        match Action::try_from(signal) {
            Ok(action) => self.dispatch(action, prompt),
            Err(err) => {
                tracing::debug!(error = %err, "ignoring control signal");
                DispatchOutcome::Ignored
            }
        }
    }

    pub fn dispatch(&mut self, action: Action, prompt: &mut dyn UserPrompt) -> DispatchOutcome {
        tracing::debug!(action = action.kind().as_str(), "dispatch");
        match action {
            Action::Add(text) => self.on_add(&text, prompt),
            Action::Remove(id) => self.on_remove(&id, prompt),
            Action::SetStatus(id, status) => self.on_set_status(&id, status),
            Action::ClearCompleted => self.on_clear_completed(),
            Action::SelectFilter(filter) => self.on_select_filter(filter),
        }
    }

    // ========================
    // Handlers
    // ========================

    fn on_add(&mut self, text: &str, prompt: &mut dyn UserPrompt) -> DispatchOutcome {
        let item: TodoItem = match self.store.add(text) {
            Ok(item) => item,
            Err(TodoError::Validation(reason)) => {
                tracing::debug!(reason = %reason, "add rejected");
                prompt.warn(&self.config.empty_input_warning);
                return DispatchOutcome::Rejected;
            }
            Err(err) => {
                tracing::error!(error = %err, "add failed");
                return DispatchOutcome::Ignored;
            }
        };
        self.projection.render_new(&item, self.filter.current());
        self.refresh_counters();
        DispatchOutcome::Applied
    }

    fn on_remove(&mut self, id: &TodoId, prompt: &mut dyn UserPrompt) -> DispatchOutcome {
        if !prompt.confirm(&self.config.remove_confirmation) {
            return DispatchOutcome::Cancelled;
        }
        if let Err(err) = self.store.remove(id) {
            tracing::debug!(error = %err, "remove ignored");
            return DispatchOutcome::Ignored;
        }
        self.projection.remove_node(id);
        self.refresh_counters();
        DispatchOutcome::Applied
    }

    /// Does not re-apply the filter: a toggled item stays where it is until
    /// the user picks a tab again.
    fn on_set_status(&mut self, id: &TodoId, status: TodoStatus) -> DispatchOutcome {
        if let Err(err) = self.store.set_status(id, status) {
            tracing::debug!(error = %err, "status change ignored");
            return DispatchOutcome::Ignored;
        }
        self.projection.update_status_node(id, status);
        self.refresh_counters();
        DispatchOutcome::Applied
    }

    fn on_clear_completed(&mut self) -> DispatchOutcome {
        let removed = self.store.clear_completed();
        self.projection.remove_nodes(&removed);
        self.refresh_counters();
        DispatchOutcome::Applied
    }

    fn on_select_filter(&mut self, filter: ViewFilter) -> DispatchOutcome {
        self.filter.select(filter);
        self.projection.apply_filter(filter);
        self.refresh_counters();
        DispatchOutcome::Applied
    }

    fn refresh_counters(&mut self) {
        self.projection
            .refresh_counters(self.store.counts(), self.filter.current(), &self.config);
    }
}
