//! Task Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the task list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::TODOS_KEY;
use crate::models::Task;
use crate::storage;
use crate::todos;

/// Authoritative in-memory task list
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks of the signed-in user, in insertion order
    pub tasks: Vec<Task>,
}

impl AppState {
    /// Start from the working copy saved in local storage
    pub fn load() -> Self {
        Self {
            tasks: storage::load_or(TODOS_KEY, Vec::new()),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole list (after a fetch)
pub fn store_set_tasks(store: &AppStore, tasks: Vec<Task>) {
    *store.tasks().write() = tasks;
}

/// Append a server-created task
pub fn store_add_task(store: &AppStore, task: Task) {
    todos::append(&mut store.tasks().write(), task);
}

pub fn store_rename_task(store: &AppStore, task_id: u32, title: &str) {
    todos::replace_title(&mut store.tasks().write(), task_id, title);
}

pub fn store_set_completed(store: &AppStore, task_id: u32, completed: bool) {
    todos::set_completed(&mut store.tasks().write(), task_id, completed);
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &AppStore, task_id: u32) {
    todos::remove(&mut store.tasks().write(), task_id);
}

/// Flip every task, returning the new `completed` value
pub fn store_toggle_all(store: &AppStore) -> bool {
    todos::toggle_all(&mut store.tasks().write())
}

/// Drop completed tasks, returning them
pub fn store_clear_completed(store: &AppStore) -> Vec<Task> {
    todos::clear_completed(&mut store.tasks().write())
}
