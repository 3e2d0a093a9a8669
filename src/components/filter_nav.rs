//! Filter Navigation Component

use leptos::prelude::*;

use crate::routes::{Filter, FILTERS};

/// Links between the All / Active / Completed views
#[component]
pub fn FilterNav(current: Signal<Filter>) -> impl IntoView {
    view! {
        <ul class="filters">
            {FILTERS.iter().map(|(filter, label)| {
                let filter = *filter;
                view! {
                    <li>
                        <a
                            href=filter.href()
                            class=move || if current.get() == filter { "selected" } else { "" }
                        >
                            {*label}
                        </a>
                    </li>
                }
            }).collect_view()}
        </ul>
    }
}
