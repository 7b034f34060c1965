//! Renderer Projection
//!
//! Derived per-item nodes the list view draws, plus the counter labels and
//! empty-state message. Holds no authoritative data: every node mirrors an
//! item of the store.

use crate::config::WidgetConfig;
use crate::model::{TodoId, TodoItem, TodoStatus, ViewFilter};
use crate::store::TodoCounts;

/// Escape text for insertion as HTML
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Remaining-count label text
pub fn remaining_label(active: usize) -> String {
    if active == 1 {
        "1 Item Left".to_string()
    } else {
        format!("{} Items Left", active)
    }
}

/// One rendered list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedNode {
    pub id: TodoId,
    /// Escaped item name, safe for `inner_html`
    pub label_html: String,
    pub status: TodoStatus,
    pub hidden: bool,
}

impl ProjectedNode {
    fn from_item(item: &TodoItem, filter: ViewFilter) -> Self {
        Self {
            id: item.id.clone(),
            label_html: escape_html(&item.name),
            status: item.status,
            hidden: !filter.matches(item.status),
        }
    }

    pub fn checked(&self) -> bool {
        self.status.is_completed()
    }
}

/// Counter labels and empty-state message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub counts: TodoCounts,
    pub visible: usize,
    pub remaining_label: String,
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    nodes: Vec<ProjectedNode>,
    summary: StatusSummary,
}

impl Projection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[ProjectedNode] {
        &self.nodes
    }

    pub fn node(&self, id: &TodoId) -> Option<&ProjectedNode> {
        self.nodes.iter().find(|node| &node.id == id)
    }

    pub fn summary(&self) -> &StatusSummary {
        &self.summary
    }

    pub fn visible_count(&self) -> usize {
        self.nodes.iter().filter(|node| !node.hidden).count()
    }

    /// Rebuild every node from `items`, in order
    pub fn render_all(&mut self, items: &[TodoItem], filter: ViewFilter) {
        self.nodes = items.iter().map(|item| ProjectedNode::from_item(item, filter)).collect();
    }

    /// Append a node for a freshly added item
    pub fn render_new(&mut self, item: &TodoItem, filter: ViewFilter) {
        self.nodes.push(ProjectedNode::from_item(item, filter));
    }

    pub fn remove_node(&mut self, id: &TodoId) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|node| &node.id != id);
        self.nodes.len() != before
    }

    /// Drop several nodes at once
    pub fn remove_nodes(&mut self, ids: &[TodoId]) {
        self.nodes.retain(|node| !ids.contains(&node.id));
    }

    /// Change the checked state of one node. Visibility is left as it was.
    pub fn update_status_node(&mut self, id: &TodoId, status: TodoStatus) -> bool {
        match self.nodes.iter_mut().find(|node| &node.id == id) {
            Some(node) => {
                node.status = status;
                true
            }
            None => false,
        }
    }

    /// Re-apply visibility to every node; returns how many stay visible
    pub fn apply_filter(&mut self, filter: ViewFilter) -> usize {
        for node in &mut self.nodes {
            node.hidden = !filter.matches(node.status);
        }
        self.visible_count()
    }

    /// Recompute counters from the authoritative collection
    pub fn refresh_counters(&mut self, counts: TodoCounts, filter: ViewFilter, config: &WidgetConfig) -> &StatusSummary {
        let visible = self.visible_count();
        let empty_message = if counts.total == 0 {
            Some(config.empty_list_message.clone())
        } else if visible == 0 {
            config.filter_empty_message(filter).map(str::to_string)
        } else {
            None
        };
        self.summary = StatusSummary {
            counts,
            visible,
            remaining_label: remaining_label(counts.active),
            empty_message,
        };
        &self.summary
    }
}
