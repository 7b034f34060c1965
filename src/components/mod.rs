//! UI Components
//!
//! Leptos components of the todo widget. None of them attach per-item
//! handlers: controls only carry `data-action` attributes.

mod filter_tabs;
mod remaining_count;
mod todo_footer;
mod todo_form;
mod todo_list;
mod todo_row;

pub use filter_tabs::FilterTabs;
pub use remaining_count::RemainingCount;
pub use todo_footer::TodoFooter;
pub use todo_form::TodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
