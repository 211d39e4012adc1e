//! Browser localStorage helpers for widget records and preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage only exists in the hydrated client; SSR builds compile these
//! helpers to no-ops so callers never need their own feature gates.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Read the raw string stored under `key`.
#[must_use]
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store a raw string under `key`. Best effort; quota or privacy-mode
/// failures are ignored.
pub fn save_string(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Read and deserialize a JSON value stored under `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    serde_json::from_str(&load_string(key)?).ok()
}

/// Serialize and store a JSON value under `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    if let Ok(raw) = serde_json::to_string(value) {
        save_string(key, &raw);
    }
}
