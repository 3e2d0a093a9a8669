//! Todos Frontend App
//!
//! Root component: wires storage-backed state, context and hash routes.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ErrorBanner, NotFound, TodoApp, UserLogin};
use crate::config::{TODOS_KEY, USER_KEY};
use crate::context::AppContext;
use crate::models::User;
use crate::routes::{use_hash_route, Filter, Route};
use crate::storage::{persist_effect, use_local_storage};
use crate::store::{AppState, AppStateStoreFields};

/// Top-level page selection
#[derive(Clone, Copy, Debug, PartialEq)]
enum Page {
    Login,
    Todos,
    NotFound,
}

#[component]
pub fn App() -> impl IntoView {
    // State
    let user = use_local_storage(USER_KEY, User::default());
    let ctx = AppContext::new(user);
    let store = Store::new(AppState::load());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // Mirror the task list into local storage
    persist_effect(TODOS_KEY, move || store.tasks().get());

    let route = use_hash_route();
    let filter = Signal::derive(move || route.get().filter().unwrap_or(Filter::All));

    // Memo so switching filters does not remount the todo app
    let page = Memo::new(move |_| match route.get() {
        Route::NotFound => Page::NotFound,
        Route::Todos(_) if !ctx.is_signed_in() => Page::Login,
        Route::Todos(_) => Page::Todos,
    });

    view! {
        <ErrorBanner />

        <div class="container">
            {move || match page.get() {
                Page::Login => view! { <UserLogin /> }.into_any(),
                Page::Todos => view! { <TodoApp filter=filter /> }.into_any(),
                Page::NotFound => view! { <NotFound /> }.into_any(),
            }}
        </div>
    }
}
