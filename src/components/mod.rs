//! UI Components
//!
//! Leptos components for the todo list.

mod todo_app;
mod new_task_form;
mod task_list;
mod task_row;
mod footer;
mod filter_nav;
mod error_banner;
mod user_login;
mod not_found;

pub use todo_app::TodoApp;
pub use new_task_form::NewTaskForm;
pub use task_list::TaskList;
pub use task_row::TaskRow;
pub use footer::Footer;
pub use filter_nav::FilterNav;
pub use error_banner::ErrorBanner;
pub use user_login::UserLogin;
pub use not_found::NotFound;
