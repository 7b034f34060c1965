//! Browser Dialogs
//!
//! Blocking `alert` / `confirm` behind the widget's prompt trait.

use todo_core::UserPrompt;

pub struct BrowserPrompt;

impl UserPrompt for BrowserPrompt {
    fn warn(&mut self, message: &str) {
        let Some(win) = web_sys::window() else {
            tracing::warn!("no window, warning not shown: {}", message);
            return;
        };
        if let Err(err) = win.alert_with_message(message) {
            tracing::warn!(error = ?err, "alert failed");
        }
    }

    /// A missing window or a failed dialog counts as "no"
    fn confirm(&mut self, message: &str) -> bool {
        let Some(win) = web_sys::window() else {
            return false;
        };
        win.confirm_with_message(message).unwrap_or_else(|err| {
            tracing::warn!(error = ?err, "confirm failed");
            false
        })
    }
}
