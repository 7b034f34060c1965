//! Todo Core
//!
//! Platform-independent state of the todo widget:
//! - store: ordered collection with write-through persistence
//! - filter / projection: what the list shows and how it is counted
//! - action / widget: decoding control signals and dispatching them

mod action;
mod config;
mod error;
mod filter;
mod model;
mod projection;
mod storage;
mod store;
mod widget;

pub use action::{Action, ActionKind, ControlSignal, ACTION_ATTR, ID_ATTR, VIEW_ATTR};
pub use config::{WidgetConfig, DEFAULT_STORAGE_KEY};
pub use error::{TodoError, TodoResult};
pub use filter::{FilterController, FilterTab};
pub use model::{TodoId, TodoItem, TodoStatus, ViewFilter};
pub use projection::{escape_html, remaining_label, ProjectedNode, Projection, StatusSummary};
pub use storage::{decode_todos, encode_todos, load_todos, save_todos, MemoryStorage, TodoStorage};
pub use store::{TodoCounts, TodoStore};
pub use widget::{DispatchOutcome, TodoWidget, UserPrompt, WidgetSnapshot};
