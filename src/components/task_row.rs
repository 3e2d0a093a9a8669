//! Task Row Component
//!
//! One task with its checkbox, destroy button and inline title editor.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::Task;
use crate::store::{store_remove_task, store_rename_task, store_set_completed, use_app_store, AppStateStoreFields};
use crate::todos::{self, resolve_edit, settled_draft, EditOutcome};

/// A single task row
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = task.id;
    let completed = task.completed;
    let original = StoredValue::new(task.title.clone());

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(task.title.clone());
    let edit_input = NodeRef::<html::Input>::new();
    let toggle_input = NodeRef::<html::Input>::new();

    // Focus the inline field when entering edit mode
    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = edit_input.get() {
                let _ = input.focus();
            }
        }
    });

    let on_toggle = move |_| {
        let user_id = ctx.user_id();
        spawn_local(async move {
            match api::toggle_todo(user_id, id, !completed).await {
                Ok(_) => store_set_completed(&store, id, !completed),
                Err(e) => {
                    // The browser already flipped the box; put it back to the stored state
                    let stored = store.tasks().with_untracked(|tasks| todos::completed_of(tasks, id));
                    if let Some(input) = toggle_input.get_untracked() {
                        input.set_checked(stored.unwrap_or(completed));
                    }
                    ctx.report("ROW", e);
                }
            }
        });
    };

    let remove_task = move || {
        let user_id = ctx.user_id();
        spawn_local(async move {
            match api::delete_todo(user_id, id).await {
                Ok(()) => store_remove_task(&store, id),
                Err(e) => ctx.report("ROW", e),
            }
        });
    };

    // Runs on form submit and on blur; whichever comes first wins
    let submit_edit = move || {
        if !editing.get_untracked() {
            return;
        }
        set_editing.set(false);

        let title = original.get_value();
        let outcome = resolve_edit(&title, &draft.get_untracked());
        set_draft.set(settled_draft(&title, &outcome));

        match outcome {
            EditOutcome::Unchanged => {}
            EditOutcome::Delete => remove_task(),
            EditOutcome::Rename(new_title) => {
                let user_id = ctx.user_id();
                spawn_local(async move {
                    match api::update_todo_title(user_id, id, &new_title).await {
                        Ok(_) => store_rename_task(&store, id, &new_title),
                        Err(e) => {
                            set_draft.set(title);
                            ctx.report("ROW", e);
                        }
                    }
                });
            }
        }
    };

    let cancel_edit = move || {
        set_draft.set(original.get_value());
        set_editing.set(false);
    };

    let row_class = move || {
        let mut c = String::new();
        if completed { c.push_str("completed"); }
        if editing.get() { c.push_str(" editing"); }
        c.trim_start().to_string()
    };

    view! {
        <li class=row_class>
            <div class="view">
                <input
                    type="checkbox"
                    class="toggle"
                    node_ref=toggle_input
                    checked=completed
                    on:change=on_toggle
                />
                <label on:dblclick=move |_| set_editing.set(true)>
                    {task.title}
                </label>
                <button
                    type="button"
                    class="destroy"
                    on:click=move |_| remove_task()
                />
            </div>

            <form on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                submit_edit();
            }>
                <input
                    type="text"
                    class="edit"
                    node_ref=edit_input
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            cancel_edit();
                        }
                    }
                    on:blur=move |_| submit_edit()
                />
            </form>
        </li>
    }
}
