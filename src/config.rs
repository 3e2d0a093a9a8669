//! Frontend Configuration
//!
//! Compile-time settings for the API endpoint, storage keys and timings.

/// Default REST endpoint for the todos and users collections
const DEFAULT_API_URL: &str = "https://mate.academy/students-api";

/// How long the error banner stays visible before clearing itself
pub const ERROR_TIMEOUT_MS: u32 = 3_000;

/// Local storage key holding the serialized task list
pub const TODOS_KEY: &str = "todos";

/// Local storage key holding the serialized signed-in user
pub const USER_KEY: &str = "user";

/// Base URL for API calls, overridable at build time via `TODOS_API_URL`
pub fn api_base_url() -> &'static str {
    normalize_base(option_env!("TODOS_API_URL").unwrap_or(DEFAULT_API_URL))
}

fn normalize_base(url: &str) -> &str {
    url.trim_end_matches('/')
}
