//! New Task Form Component
//!
//! Header input that creates a task for the signed-in user.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::store::{store_add_task, use_app_store};
use crate::todos;

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (new_title, set_new_title) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = todos::new_title(&new_title.get());
        set_new_title.set(String::new());
        let Some(title) = title else { return; };

        let user_id = ctx.user_id();
        spawn_local(async move {
            match api::create_todo(user_id, &title).await {
                Ok(task) => {
                    log::info!("[HEADER] Created task {}", task.id);
                    store_add_task(&store, task);
                }
                Err(e) => ctx.report("HEADER", e),
            }
        });
    };

    view! {
        <form on:submit=create_task>
            <input
                type="text"
                data-cy="createTodo"
                class="new-todo"
                placeholder="What needs to be done?"
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
        </form>
    }
}
