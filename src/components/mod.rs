//! UI Components
//!
//! Reusable Leptos components.

mod new_todo_form;
mod todo_item;
mod nav_bar;

pub use new_todo_form::NewTodoForm;
pub use todo_item::TodoItem;
pub use nav_bar::NavBar;
