//! Hash Routes
//!
//! Client-side routing on `location.hash`: `#/`, `#/active`, `#/completed`,
//! anything else falls through to the not-found page.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Which subset of the task list is shown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
    All,
    Active,
    Completed,
}

/// Filter links in display order
pub const FILTERS: &[(Filter, &str)] = &[
    (Filter::All, "All"),
    (Filter::Active, "Active"),
    (Filter::Completed, "Completed"),
];

impl Filter {
    /// Link target for this filter
    pub fn href(self) -> &'static str {
        match self {
            Filter::All => "#/",
            Filter::Active => "#/active",
            Filter::Completed => "#/completed",
        }
    }
}

/// Parsed location
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Todos(Filter),
    NotFound,
}

impl Route {
    /// Parse a `location.hash` value (with or without the leading `#`)
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.strip_prefix('#').unwrap_or(hash);
        let path = path.trim_end_matches('/');
        match path {
            "" => Route::Todos(Filter::All),
            "/active" => Route::Todos(Filter::Active),
            "/completed" => Route::Todos(Filter::Completed),
            _ => Route::NotFound,
        }
    }

    /// Filter of a todos route; the not-found page has none
    pub fn filter(self) -> Option<Filter> {
        match self {
            Route::Todos(filter) => Some(filter),
            Route::NotFound => None,
        }
    }
}

fn current_hash() -> String {
    web_sys::window()
        .and_then(|win| win.location().hash().ok())
        .unwrap_or_default()
}

/// Signal tracking the current route, updated on every `hashchange`
pub fn use_hash_route() -> ReadSignal<Route> {
    let (route, set_route) = signal(Route::from_hash(&current_hash()));

    let on_hashchange = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        let next = Route::from_hash(&current_hash());
        log::debug!("[ROUTE] hash changed: {:?}", next);
        set_route.set(next);
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("hashchange", on_hashchange.as_ref().unchecked_ref());
    }
    // Listener lives as long as the page
    on_hashchange.forget();

    route
}
