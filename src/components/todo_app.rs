//! Todo App Component
//!
//! Task list container: loads the signed-in user's tasks and runs the bulk
//! toggle-all / clear-completed operations.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Footer, NewTaskForm, TaskList};
use crate::context::use_app_context;
use crate::models::User;
use crate::routes::Filter;
use crate::store::{store_clear_completed, store_set_tasks, store_toggle_all, use_app_store, AppStateStoreFields};
use crate::todos;

#[component]
pub fn TodoApp(filter: Signal<Filter>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // Load tasks when the signed-in user changes
    Effect::new(move |_| {
        let user_id = ctx.user.with(|user| user.id);
        if user_id == 0 { return; }
        log::info!("[APP] Loading tasks for user {}", user_id);
        spawn_local(async move {
            match api::get_todos(user_id).await {
                Ok(loaded) => {
                    log::info!("[APP] Loaded {} tasks", loaded.len());
                    store_set_tasks(&store, loaded);
                }
                Err(e) => ctx.report("APP", e),
            }
        });
    });

    let all_done = Memo::new(move |_| store.tasks().with(|tasks| todos::all_completed(tasks)));
    let has_tasks = Memo::new(move |_| store.tasks().with(|tasks| !tasks.is_empty()));

    // Remote updates are fired without waiting; local state flips immediately
    let toggle_all = move |_| {
        let user_id = ctx.user_id();
        let target = !all_done.get_untracked();
        let ids: Vec<u32> = store.tasks().with_untracked(|tasks| tasks.iter().map(|task| task.id).collect());

        for id in ids {
            spawn_local(async move {
                if let Err(e) = api::toggle_todo(user_id, id, target).await {
                    ctx.report("APP", e);
                }
            });
        }
        store_toggle_all(&store);
    };

    let clear_completed = move |_: ()| {
        let user_id = ctx.user_id();
        let done: Vec<u32> = store.tasks().with_untracked(|tasks| {
            todos::completed(tasks).iter().map(|task| task.id).collect()
        });

        for id in done {
            spawn_local(async move {
                if let Err(e) = api::delete_todo(user_id, id).await {
                    ctx.report("APP", e);
                }
            });
        }
        let removed = store_clear_completed(&store);
        log::info!("[APP] Cleared {} completed tasks", removed.len());
    };

    let sign_out = move |_| {
        log::info!("[APP] Signing out user {}", ctx.user_id());
        store_set_tasks(&store, Vec::new());
        ctx.set_user(User::default());
    };

    view! {
        <div class="todoapp">
            <header class="header">
                <h1>"todos"</h1>
                <p class="user-info">
                    {move || ctx.user.with(|user| user.name.clone())}
                    <button type="button" class="logout" on:click=sign_out>"Log out"</button>
                </p>
                <NewTaskForm />
            </header>

            <section class="main">
                <input
                    type="checkbox"
                    id="toggle-all"
                    class="toggle-all"
                    data-cy="toggleAll"
                    prop:checked=move || all_done.get()
                    on:change=toggle_all
                />
                <label
                    for="toggle-all"
                    class=move || if all_done.get() { "toggle-all-label" } else { "" }
                >
                    "Mark all as complete"
                </label>

                <TaskList filter=filter />
            </section>

            <Show when=move || has_tasks.get()>
                <Footer filter=filter on_clear_completed=clear_completed />
            </Show>
        </div>
    }
}
