//! Footer Component
//!
//! Remaining-items counter, filter links and the clear-completed button.

use leptos::prelude::*;

use crate::components::FilterNav;
use crate::routes::Filter;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::todos;

#[component]
pub fn Footer(
    filter: Signal<Filter>,
    #[prop(into)] on_clear_completed: Callback<()>,
) -> impl IntoView {
    let store = use_app_store();

    let active_count = Memo::new(move |_| store.tasks().with(|tasks| todos::active_count(tasks)));
    let completed_count = Memo::new(move |_| store.tasks().with(|tasks| todos::completed_count(tasks)));

    view! {
        <footer class="footer">
            <span class="todo-count" data-cy="todosCounter">
                {move || todos::items_left_label(active_count.get())}
            </span>

            <FilterNav current=filter />

            <Show when=move || { completed_count.get() > 0 }>
                <button
                    type="button"
                    class="clear-completed"
                    on:click=move |_| on_clear_completed.run(())
                >
                    "Clear completed"
                </button>
            </Show>
        </footer>
    }
}
