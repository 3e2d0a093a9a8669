//! Task List Component
//!
//! Renders the tasks visible under the current filter.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::routes::Filter;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::todos;

#[component]
pub fn TaskList(filter: Signal<Filter>) -> impl IntoView {
    let store = use_app_store();

    let visible = move || {
        let current = filter.get();
        store.tasks().with(|tasks| todos::apply_filter(tasks, current))
    };

    view! {
        <ul class="todo-list">
            <For
                each=visible
                // Key on every mutable field so edits re-render the row
                key=|task| (task.id, task.title.clone(), task.completed)
                children=move |task| view! { <TaskRow task=task /> }
            />
        </ul>
    }
}
