//! Local Storage Adapter
//!
//! JSON values in `window.localStorage`, plus a signal pair that mirrors
//! one key and writes every change back.

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|e| StorageError::Js(format!("{:?}", e)))?
        .ok_or(StorageError::Unavailable)
}

/// Raw string stored under `key`, `Ok(None)` when absent
pub fn read_raw(key: &str) -> Result<Option<String>, StorageError> {
    local_storage()?
        .get_item(key)
        .map_err(|e| StorageError::Js(format!("{:?}", e)))
}

/// Encode `value` and store it under `key`
pub fn write_json<T: Serialize>(key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    local_storage()?
        .set_item(key, &raw)
        .map_err(|e| StorageError::Js(format!("{:?}", e)))
}

/// Decode a raw stored string, falling back to `default` when absent or malformed
pub fn decode_or<T: DeserializeOwned>(key: &str, raw: Option<&str>, default: T) -> T {
    match raw.map(|s| serde_json::from_str::<T>(s)) {
        Some(Ok(value)) => value,
        Some(Err(e)) => {
            log::warn!("[STORAGE] Discarding malformed '{}': {}", key, e);
            default
        }
        None => default,
    }
}

/// Load `key` or `default` if it is missing, unreadable or malformed
pub fn load_or<T: DeserializeOwned>(key: &str, default: T) -> T {
    let raw = match read_raw(key) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("[STORAGE] Cannot read '{}': {}", key, e);
            None
        }
    };
    decode_or(key, raw.as_deref(), default)
}

/// Write the value produced by `source` to `key` whenever it changes
pub fn persist_effect<T, F>(key: &'static str, source: F)
where
    T: Serialize + 'static,
    F: Fn() -> T + 'static,
{
    Effect::new(move |_| {
        let value = source();
        if let Err(e) = write_json(key, &value) {
            log::error!("[STORAGE] Failed to persist '{}': {}", key, e);
        }
    });
}

/// Stateful value backed by local storage, plus its setter
pub fn use_local_storage<T>(key: &'static str, default: T) -> (ReadSignal<T>, WriteSignal<T>)
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    let (value, set_value) = signal(load_or(key, default));
    persist_effect(key, move || value.get());
    (value, set_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Task, User};

    #[test]
    fn test_decode_or_reads_stored_tasks() {
        let raw = r#"[{"id":1,"title":"A","userId":4,"completed":false},{"id":2,"title":"B","userId":4,"completed":true}]"#;
        let tasks: Vec<Task> = decode_or("todos", Some(raw), Vec::new());
        assert_eq!(tasks.len(), 2);
        assert!(tasks[1].completed);
    }

    #[test]
    fn test_decode_or_falls_back() {
        let missing: Vec<Task> = decode_or("todos", None, Vec::new());
        assert!(missing.is_empty());

        let broken: User = decode_or("user", Some("{not json"), User::default());
        assert_eq!(broken, User::default());
    }
}
