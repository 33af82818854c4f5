//! UI Components
//!
//! Leptos components for the sign-in screen and the task workspace.

mod auth_panel;
mod filter_tabs;
mod new_task_form;
mod task_card;
mod task_list;
mod task_workspace;

pub use auth_panel::AuthPanel;
pub use filter_tabs::FilterTabs;
pub use new_task_form::NewTaskForm;
pub use task_card::{card_key, TaskCard};
pub use task_list::TaskList;
pub use task_workspace::TaskWorkspace;
