//! Todo Models
//!
//! Items, their status, and the view filter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TodoError;

/// Opaque unique identifier of a todo item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Fresh random id
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TodoId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TodoId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Completion status of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    #[default]
    Active,
    Completed,
}

impl TodoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Active => "active",
            TodoStatus::Completed => "completed",
        }
    }

    /// Status a checkbox in the given state stands for
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            TodoStatus::Completed
        } else {
            TodoStatus::Active
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, TodoStatus::Completed)
    }
}

/// A single user-entered task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub name: String,
    pub status: TodoStatus,
}

impl TodoItem {
    /// Create an active item. `name` must already be trimmed and non-empty.
    pub fn new(id: TodoId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            status: TodoStatus::Active,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }
}

/// Which partition of the list is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl ViewFilter {
    /// Tab order
    pub const ALL: [ViewFilter; 3] = [ViewFilter::All, ViewFilter::Active, ViewFilter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewFilter::All => "all",
            ViewFilter::Active => "active",
            ViewFilter::Completed => "completed",
        }
    }

    /// Human label for the tab control
    pub fn label(&self) -> &'static str {
        match self {
            ViewFilter::All => "All",
            ViewFilter::Active => "Active",
            ViewFilter::Completed => "Completed",
        }
    }

    /// Whether an item with `status` is visible under this filter
    pub fn matches(&self, status: TodoStatus) -> bool {
        match self {
            ViewFilter::All => true,
            ViewFilter::Active => status == TodoStatus::Active,
            ViewFilter::Completed => status == TodoStatus::Completed,
        }
    }
}

impl FromStr for ViewFilter {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ViewFilter::All),
            "active" => Ok(ViewFilter::Active),
            "completed" => Ok(ViewFilter::Completed),
            other => Err(TodoError::Action(format!("unknown view '{}'", other))),
        }
    }
}
