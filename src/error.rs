//! Error Types
//!
//! Typed failures for the HTTP and storage layers. The UI collapses all of
//! them into the transient error flag after logging.

/// Errors returned by the REST client
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport failure, a non-success status (carried by the error with
    /// its URL), or a body that could not be encoded or decoded
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors from the local storage adapter
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// `window.localStorage` is missing or blocked
    #[error("local storage unavailable")]
    Unavailable,

    /// The browser rejected a read or write (quota, privacy mode)
    #[error("storage access failed: {0}")]
    Js(String),

    #[error("invalid JSON in storage: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_storage() {
        assert_eq!(StorageError::Unavailable.to_string(), "local storage unavailable");
        assert_eq!(StorageError::Js("QuotaExceededError".into()).to_string(), "storage access failed: QuotaExceededError");
    }

    #[test]
    fn test_json_error_converts() {
        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: StorageError = parse.into();
        assert!(err.to_string().starts_with("invalid JSON in storage:"));
    }
}
