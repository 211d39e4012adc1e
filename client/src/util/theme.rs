//! Theme preference handling (light/dark).
//!
//! Reads the stored preference, falling back to the system color scheme,
//! and applies a `data-theme` attribute on `<html>`. SSR paths no-op so
//! server rendering stays deterministic.

use crate::util::persist;

const STORAGE_KEY: &str = "playdeck_theme_dark";

/// Read the dark-mode preference: stored value first, system scheme second.
#[must_use]
pub fn read_preference() -> bool {
    match persist::load_string(STORAGE_KEY) {
        Some(value) => value == "true",
        None => system_prefers_dark(),
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(element) = element {
            let _ = element.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Persist the preference for the next visit.
pub fn store(enabled: bool) {
    persist::save_string(STORAGE_KEY, if enabled { "true" } else { "false" });
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
