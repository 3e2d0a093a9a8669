//! Application Context
//!
//! Shared state provided via Leptos Context API: the signed-in user and the
//! transient error flag.

use std::fmt::Display;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::ERROR_TIMEOUT_MS;
use crate::models::User;

/// Error banner state.
///
/// Every `raise` bumps the generation; a timer only clears the flag if no
/// newer error was raised after it was scheduled.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ErrorFlag {
    visible: bool,
    generation: u32,
}

impl ErrorFlag {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the flag, returning the ticket for its expiry timer
    pub fn raise(&mut self) -> u32 {
        self.visible = true;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Clear the flag if `ticket` is still the latest raise
    pub fn expire(&mut self, ticket: u32) -> bool {
        if self.visible && ticket == self.generation {
            self.visible = false;
            true
        } else {
            false
        }
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Signed-in user (persisted) - read
    pub user: ReadSignal<User>,
    /// Signed-in user (persisted) - write
    set_user: WriteSignal<User>,
    /// Transient error banner
    error: RwSignal<ErrorFlag>,
}

impl AppContext {
    pub fn new(user: (ReadSignal<User>, WriteSignal<User>)) -> Self {
        Self {
            user: user.0,
            set_user: user.1,
            error: RwSignal::new(ErrorFlag::default()),
        }
    }

    /// Id used to scope API calls, read without tracking
    pub fn user_id(&self) -> u32 {
        self.user.with_untracked(|user| user.id)
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.with(|user| user.is_signed_in())
    }

    pub fn set_user(&self, user: User) {
        self.set_user.set(user);
    }

    pub fn error_visible(&self) -> bool {
        self.error.with(|flag| flag.is_visible())
    }

    /// Show the error banner and clear it after `ERROR_TIMEOUT_MS`
    pub fn raise_error(&self) {
        let mut ticket = 0;
        self.error.update(|flag| ticket = flag.raise());

        let error = self.error;
        spawn_local(async move {
            TimeoutFuture::new(ERROR_TIMEOUT_MS).await;
            error.update(|flag| {
                flag.expire(ticket);
            });
        });
    }

    /// Log a failure and raise the banner
    pub fn report(&self, scope: &str, err: impl Display) {
        log::error!("[{}] {}", scope, err);
        self.raise_error();
    }

    pub fn dismiss_error(&self) {
        self.error.update(|flag| flag.dismiss());
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
