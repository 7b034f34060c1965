//! Todo Store
//!
//! Owns the ordered collection and writes it through to storage after every
//! mutation.

use crate::error::{TodoError, TodoResult};
use crate::model::{TodoId, TodoItem, TodoStatus};
use crate::storage::{load_todos, save_todos, TodoStorage};

/// Active/completed tallies of the collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoCounts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl TodoCounts {
    pub fn of(items: &[TodoItem]) -> Self {
        let completed = items.iter().filter(|item| item.is_completed()).count();
        Self {
            total: items.len(),
            active: items.len() - completed,
            completed,
        }
    }
}

pub struct TodoStore<S: TodoStorage> {
    storage: S,
    key: String,
    items: Vec<TodoItem>,
}

impl<S: TodoStorage> TodoStore<S> {
    /// Load the persisted collection under `key`
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let items = load_todos(&storage, &key);
        tracing::debug!(count = items.len(), key = %key, "loaded todos");
        Self { storage, key, items }
    }

    // ========================
    // Queries
    // ========================

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn counts(&self) -> TodoCounts {
        TodoCounts::of(&self.items)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // ========================
    // Mutations
    // ========================

    /// Append a new active item named `name` (trimmed)
    pub fn add(&mut self, name: &str) -> TodoResult<TodoItem> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TodoError::Validation("todo name is empty".to_string()));
        }
        let item = TodoItem::new(self.fresh_id(), name);
        self.items.push(item.clone());
        tracing::info!(id = %item.id, "todo added");
        self.persist();
        Ok(item)
    }

    /// Remove the item with `id`. Unknown ids leave everything untouched.
    pub fn remove(&mut self, id: &TodoId) -> TodoResult<TodoItem> {
        let index = self
            .items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))?;
        let removed = self.items.remove(index);
        tracing::info!(id = %id, "todo removed");
        self.persist();
        Ok(removed)
    }

    /// Set the status of `id`. Unknown ids leave everything untouched.
    pub fn set_status(&mut self, id: &TodoId, status: TodoStatus) -> TodoResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))?;
        item.status = status;
        tracing::info!(id = %id, status = status.as_str(), "todo status changed");
        self.persist();
        Ok(())
    }

    /// Drop every completed item with a single write; returns the removed ids
    pub fn clear_completed(&mut self) -> Vec<TodoId> {
        let (completed, kept): (Vec<TodoItem>, Vec<TodoItem>) =
            std::mem::take(&mut self.items).into_iter().partition(TodoItem::is_completed);
        self.items = kept;
        tracing::info!(removed = completed.len(), "completed todos cleared");
        self.persist();
        completed.into_iter().map(|item| item.id).collect()
    }

    fn fresh_id(&self) -> TodoId {
        loop {
            let id = TodoId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Write-through; a failed write keeps the in-memory state
    fn persist(&mut self) {
        if let Err(err) = save_todos(&mut self.storage, &self.key, &self.items) {
            tracing::error!(error = %err, "failed to persist todos");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn empty_store() -> TodoStore<MemoryStorage> {
        TodoStore::load(MemoryStorage::new(), "todos")
    }

    #[test]
    fn test_add_appends_active_item() {
        let mut store = empty_store();
        let item = store.add("  Buy milk ").unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(item.name, "Buy milk");
        assert_eq!(item.status, TodoStatus::Active);
        assert_eq!(store.storage().write_count(), 1);
    }

    #[test]
    fn test_add_rejects_blank() {
        let mut store = empty_store();
        for name in ["", "   ", "\t\n"] {
            assert!(matches!(store.add(name), Err(TodoError::Validation(_))));
        }
        assert!(store.is_empty());
        assert_eq!(store.storage().write_count(), 0);
    }

    #[test]
    fn test_remove() {
        let mut store = empty_store();
        let a = store.add("a").unwrap();
        let b = store.add("b").unwrap();

        let removed = store.remove(&a.id).unwrap();
        assert_eq!(removed.id, a.id);
        assert_eq!(store.len(), 1);
        assert!(store.get(&a.id).is_none());
        assert!(store.get(&b.id).is_some());
        assert_eq!(store.storage().write_count(), 3);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut store = empty_store();
        store.add("a").unwrap();

        assert_eq!(
            store.remove(&TodoId::from("missing")),
            Err(TodoError::NotFound("missing".to_string()))
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.storage().write_count(), 1);
    }

    #[test]
    fn test_set_status_only_touches_target() {
        let mut store = empty_store();
        let a = store.add("a").unwrap();
        let b = store.add("b").unwrap();
        let c = store.add("c").unwrap();

        store.set_status(&b.id, TodoStatus::Completed).unwrap();
        assert_eq!(store.get(&a.id).unwrap().status, TodoStatus::Active);
        assert_eq!(store.get(&b.id).unwrap().status, TodoStatus::Completed);
        assert_eq!(store.get(&c.id).unwrap().status, TodoStatus::Active);

        assert_eq!(
            store.set_status(&TodoId::from("missing"), TodoStatus::Completed),
            Err(TodoError::NotFound("missing".to_string()))
        );
        assert_eq!(store.storage().write_count(), 4);
    }

    #[test]
    fn test_clear_completed_writes_once() {
        let mut store = empty_store();
        let ids: Vec<TodoId> = ["a", "b", "c", "d"].iter().map(|n| store.add(n).unwrap().id).collect();
        store.set_status(&ids[0], TodoStatus::Completed).unwrap();
        store.set_status(&ids[2], TodoStatus::Completed).unwrap();
        let writes_before = store.storage().write_count();

        let removed = store.clear_completed();

        assert_eq!(removed, vec![ids[0].clone(), ids[2].clone()]);
        let names: Vec<&str> = store.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["b", "d"]);
        assert_eq!(store.storage().write_count(), writes_before + 1);
    }

    #[test]
    fn test_counts() {
        let mut store = empty_store();
        let a = store.add("a").unwrap();
        store.add("b").unwrap();
        store.set_status(&a.id, TodoStatus::Completed).unwrap();

        assert_eq!(store.counts(), TodoCounts { total: 2, active: 1, completed: 1 });
    }

    #[test]
    fn test_reload_sees_persisted_state() {
        let mut store = empty_store();
        let a = store.add("first").unwrap();
        store.add("second").unwrap();
        store.set_status(&a.id, TodoStatus::Completed).unwrap();

        let snapshot = store.items().to_vec();
        let reloaded = TodoStore::load(store.storage().clone(), "todos");
        assert_eq!(reloaded.items(), snapshot.as_slice());
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let mut store = TodoStore::load(MemoryStorage::failing(), "todos");
        store.add("still here").unwrap();
        assert_eq!(store.len(), 1);
    }
}
