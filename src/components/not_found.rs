//! Not Found Page

use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page not found"</h1>
            <a href="#/">"Back to todos"</a>
        </section>
    }
}
