//! REST API Client
//!
//! Bindings to the remote todos/users collections, organized by resource.

mod todos;
mod users;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::config;
use crate::error::ApiResult;

// Re-export all public items
pub use todos::*;
pub use users::*;

fn client() -> Client {
    Client::new()
}

/// Reject non-success statuses
fn ensure_success(response: Response) -> ApiResult<Response> {
    Ok(response.error_for_status()?)
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    Ok(ensure_success(response)?.json::<T>().await?)
}

fn base() -> &'static str {
    config::api_base_url()
}
