//! Best-effort persistent key-value storage.
//!
//! Values are JSON-encoded. Every failure path (storage disabled, quota
//! exceeded, malformed payload) degrades to a logged warning; callers
//! never see an error, they see an absent value.

use gloo_utils::window;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::Storage;

use crate::types::{UiError, UiResult};

/// Store `value` JSON-encoded under `key`.
pub fn set<T: Serialize + ?Sized>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => set_raw(key, &json),
        Err(e) => log::warn!("Could not serialize value for '{}': {}", key, e),
    }
}

/// Read the JSON-encoded value under `key`.
///
/// Absent keys, unreadable storage and undecodable payloads all read as
/// `None`.
pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
    let json = get_raw(key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Could not decode stored value for '{}': {}", key, e);
            None
        }
    }
}

/// Remove `key` from storage.
pub fn remove(key: &str) {
    if let Err(e) = try_remove(key) {
        log::warn!("Could not remove '{}' from local storage: {}", key, e);
    }
}

/// Store a pre-encoded JSON document under `key`.
pub(crate) fn set_raw(key: &str, json: &str) {
    if let Err(e) = try_set_raw(key, json) {
        log::warn!("Could not save '{}' to local storage: {}", key, e);
    }
}

/// Read the raw JSON document under `key`, if any.
pub(crate) fn get_raw(key: &str) -> Option<String> {
    match try_get_raw(key) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("Could not read '{}' from local storage: {}", key, e);
            None
        }
    }
}

fn local_storage() -> UiResult<Storage> {
    window()
        .local_storage()
        .map_err(storage_err)?
        .ok_or_else(|| UiError::Storage("local storage is unavailable".to_string()))
}

fn try_set_raw(key: &str, json: &str) -> UiResult<()> {
    local_storage()?.set_item(key, json).map_err(storage_err)
}

fn try_get_raw(key: &str) -> UiResult<Option<String>> {
    local_storage()?.get_item(key).map_err(storage_err)
}

fn try_remove(key: &str) -> UiResult<()> {
    local_storage()?.remove_item(key).map_err(storage_err)
}

fn storage_err(value: wasm_bindgen::JsValue) -> UiError {
    UiError::Storage(format!("{:?}", value))
}
