//! View State Store
//!
//! Uses Leptos reactive_stores so each part of the widget only re-renders
//! when its own field changes.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{FilterTab, ProjectedNode, StatusSummary, WidgetSnapshot};

/// What the view draws, copied out of the widget after every handled signal
#[derive(Clone, Debug, Store)]
pub struct ViewState {
    /// List entries in display order
    pub nodes: Vec<ProjectedNode>,
    /// Filter tabs with their selected state
    pub tabs: [FilterTab; 3],
    /// Remaining-count label and empty-state message
    pub summary: StatusSummary,
}

impl From<WidgetSnapshot> for ViewState {
    fn from(snapshot: WidgetSnapshot) -> Self {
        Self {
            nodes: snapshot.nodes,
            tabs: snapshot.tabs,
            summary: snapshot.summary,
        }
    }
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

/// Get the view store from context
pub fn use_view_store() -> ViewStore {
    expect_context::<ViewStore>()
}

/// Write a new snapshot, field by field, touching only what changed
pub fn store_apply_snapshot(store: &ViewStore, snapshot: WidgetSnapshot) {
    if store.nodes().with_untracked(|nodes| nodes != &snapshot.nodes) {
        *store.nodes().write() = snapshot.nodes;
    }
    if store.tabs().get_untracked() != snapshot.tabs {
        *store.tabs().write() = snapshot.tabs;
    }
    if store.summary().with_untracked(|summary| summary != &snapshot.summary) {
        *store.summary().write() = snapshot.summary;
    }
}
