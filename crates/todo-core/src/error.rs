//! Error Types
//!
//! None of these are fatal: the widget always degrades to a usable state.

use thiserror::Error;

/// Common result type for widget operations
pub type TodoResult<T> = Result<T, TodoError>;

/// Errors raised by the todo core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// User input rejected before any mutation (shown to the user)
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Mutation targeted an id that is no longer in the list
    #[error("Not found: {0}")]
    NotFound(String),

    /// Persisted blob could not be decoded
    #[error("Deserialization failed: {0}")]
    Deserialization(String),

    /// Backing storage refused a read or write
    #[error("Storage error: {0}")]
    Storage(String),

    /// A control signal could not be decoded into an action
    #[error("Bad action: {0}")]
    Action(String),
}

impl From<serde_json::Error> for TodoError {
    fn from(err: serde_json::Error) -> Self {
        TodoError::Deserialization(err.to_string())
    }
}
