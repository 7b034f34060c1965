//! Browser Storage
//!
//! `localStorage` adapter for the todo store. Falls back to memory when the
//! browser refuses access (private mode, sandboxed iframes).

use todo_core::{MemoryStorage, TodoError, TodoResult, TodoStorage};
use wasm_bindgen::JsValue;

pub enum BrowserStorage {
    Local(web_sys::Storage),
    Memory(MemoryStorage),
}

impl BrowserStorage {
    /// `window.localStorage`, or memory if unavailable
    pub fn open() -> Self {
        match web_sys::window().and_then(|win| win.local_storage().ok().flatten()) {
            Some(storage) => BrowserStorage::Local(storage),
            None => {
                tracing::warn!("localStorage unavailable, todos will not persist");
                BrowserStorage::Memory(MemoryStorage::new())
            }
        }
    }
}

fn js_error(err: JsValue) -> TodoError {
    TodoError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl TodoStorage for BrowserStorage {
    fn read(&self, key: &str) -> TodoResult<Option<String>> {
        match self {
            BrowserStorage::Local(storage) => storage.get_item(key).map_err(js_error),
            BrowserStorage::Memory(storage) => storage.read(key),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> TodoResult<()> {
        match self {
            BrowserStorage::Local(storage) => storage.set_item(key, value).map_err(js_error),
            BrowserStorage::Memory(storage) => storage.write(key, value),
        }
    }
}
