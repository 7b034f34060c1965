//! Storage Adapter
//!
//! Key-value persistence of the serialized todo list. Writes are synchronous,
//! so a handler's mutation is on disk before the next signal is processed.

use std::collections::HashMap;
use std::collections::HashSet;

use crate::error::{TodoError, TodoResult};
use crate::model::TodoItem;

/// String-keyed blob storage (browser `localStorage`, memory, ...)
pub trait TodoStorage {
    /// Read the value under `key`, `None` if absent
    fn read(&self, key: &str) -> TodoResult<Option<String>>;

    /// Replace the value under `key`
    fn write(&mut self, key: &str, value: &str) -> TodoResult<()>;
}

/// In-memory storage, used by tests and when the browser denies `localStorage`
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a raw value
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::default();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }

    /// Storage whose writes all fail, like a full quota
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Number of writes performed so far
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl TodoStorage for MemoryStorage {
    fn read(&self, key: &str) -> TodoResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> TodoResult<()> {
        self.writes += 1;
        if self.fail_writes {
            return Err(TodoError::Storage("quota exceeded".to_string()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ========================
// JSON codec
// ========================

/// Serialize the list as a JSON array of `{id, name, status}`
pub fn encode_todos(items: &[TodoItem]) -> TodoResult<String> {
    serde_json::to_string(items).map_err(|e| TodoError::Storage(e.to_string()))
}

/// Decode a persisted array.
///
/// A blob that is not an array of items fails as a whole. Records that break
/// item invariants (blank name, repeated id) are dropped individually.
pub fn decode_todos(raw: &str) -> TodoResult<Vec<TodoItem>> {
    let decoded: Vec<TodoItem> = serde_json::from_str(raw)?;
    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(decoded.len());
    for mut item in decoded {
        let name = item.name.trim();
        if name.is_empty() {
            tracing::warn!(id = %item.id, "dropping persisted todo with empty name");
            continue;
        }
        if !seen.insert(item.id.clone()) {
            tracing::warn!(id = %item.id, "dropping persisted todo with duplicate id");
            continue;
        }
        if name.len() != item.name.len() {
            item.name = name.to_string();
        }
        items.push(item);
    }
    Ok(items)
}

/// Load the list under `key`; absent or malformed data yields an empty list.
pub fn load_todos<S: TodoStorage + ?Sized>(storage: &S, key: &str) -> Vec<TodoItem> {
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            tracing::warn!(error = %err, "could not read persisted todos");
            return Vec::new();
        }
    };
    match decode_todos(&raw) {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(error = %err, "persisted todos are malformed, starting empty");
            Vec::new()
        }
    }
}

/// Rewrite the whole list under `key`
pub fn save_todos<S: TodoStorage + ?Sized>(storage: &mut S, key: &str, items: &[TodoItem]) -> TodoResult<()> {
    let encoded = encode_todos(items)?;
    storage.write(key, &encoded)
}
