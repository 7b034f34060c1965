//! Widget Configuration
//!
//! User-facing messages, the storage key and the log level. Every field has a
//! default, so a partial JSON override is enough.

use serde::Deserialize;

use crate::model::ViewFilter;

/// Default key of the persisted list
pub const DEFAULT_STORAGE_KEY: &str = "todos";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Key of the persisted JSON array
    pub storage_key: String,
    /// Alert shown when the add form is submitted empty
    pub empty_input_warning: String,
    /// Confirmation asked before removing an item
    pub remove_confirmation: String,
    /// Shown when the list has no items at all
    pub empty_list_message: String,
    /// Shown when the active filter matches nothing
    pub no_active_message: String,
    pub no_completed_message: String,
    /// `tracing` level name: error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            empty_input_warning: "Please enter a todo".to_string(),
            remove_confirmation: "Are you sure?".to_string(),
            empty_list_message: "Nothing to do yet. Add a todo above.".to_string(),
            no_active_message: "No active todos.".to_string(),
            no_completed_message: "No completed todos.".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Parse a JSON override; anything unreadable falls back to defaults.
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "invalid widget config, using defaults");
                Self::default()
            }
        }
    }

    /// Message for a filter that currently shows nothing
    pub fn filter_empty_message(&self, filter: ViewFilter) -> Option<&str> {
        match filter {
            ViewFilter::All => None,
            ViewFilter::Active => Some(&self.no_active_message),
            ViewFilter::Completed => Some(&self.no_completed_message),
        }
    }
}
