//! Error Banner Component
//!
//! Dismissible notice shown while the shared error flag is raised.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show when=move || ctx.error_visible()>
            <div class="notification is-danger" data-cy="errorNotification">
                <button
                    type="button"
                    class="delete"
                    on:click=move |_| ctx.dismiss_error()
                />
                "Something went wrong, please try again"
            </div>
        </Show>
    }
}
