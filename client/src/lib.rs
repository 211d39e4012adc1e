//! Playdeck client: the Leptos UI for the widget deck.
//!
//! ARCHITECTURE
//! ============
//! `pages` holds one route component per widget, `components` the reusable
//! rendering pieces, `state` the context-shared records, and `util` the
//! browser glue plus the pure math each widget leans on. Game rules live in
//! the `engine` crate; nothing in here owns a rule.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for the hydrated client bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
