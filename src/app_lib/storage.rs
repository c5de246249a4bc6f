//! `localStorage` access with JSON helpers. Outside the browser every
//! operation is a no-op so callers do not need their own `cfg` gates.

use crate::app_lib::AppError;
use serde::{de::DeserializeOwned, Serialize};

/// Browser `localStorage` wrapper.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    /// Reads a raw value; missing keys and unavailable storage yield `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        platform::get(key)
    }

    /// Writes a raw value.
    pub fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        platform::set(key, value)
    }

    /// Removes a key; removing a missing key is not an error.
    pub fn remove(&self, key: &str) {
        platform::remove(key);
    }

    /// Reads and decodes a JSON value. Undecodable entries are removed so a
    /// stale format never sticks around.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        match decode_json(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, "discarding stored value: {err}");
                self.remove(key);
                None
            }
        }
    }

    /// Encodes and writes a JSON value.
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let raw = serde_json::to_string(value)
            .map_err(|err| AppError::Serialization(format!("Failed to encode {key}: {err}")))?;
        self.set(key, &raw)
    }
}

fn decode_json<T: DeserializeOwned>(raw: &str) -> Result<T, AppError> {
    serde_json::from_str(raw)
        .map_err(|err| AppError::Parse(format!("Failed to decode stored value: {err}")))
}

#[cfg(target_arch = "wasm32")]
mod platform {
    use crate::app_lib::AppError;

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub(super) fn get(key: &str) -> Option<String> {
        match local_storage()?.get_item(key) {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(key, "failed to read from local storage");
                None
            }
        }
    }

    pub(super) fn set(key: &str, value: &str) -> Result<(), AppError> {
        let storage = local_storage()
            .ok_or_else(|| AppError::Storage("Local storage is unavailable.".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|_| AppError::Storage(format!("Failed to write {key}.")))
    }

    pub(super) fn remove(key: &str) {
        if let Some(storage) = local_storage() {
            if storage.remove_item(key).is_err() {
                tracing::warn!(key, "failed to remove from local storage");
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use crate::app_lib::AppError;

    pub(super) fn get(_key: &str) -> Option<String> {
        None
    }

    pub(super) fn set(_key: &str, _value: &str) -> Result<(), AppError> {
        Ok(())
    }

    pub(super) fn remove(_key: &str) {}
}
