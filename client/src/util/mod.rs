//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser/environment concerns (storage, theme, entropy) live here so page
//! and component logic stays pure enough to unit test natively; the widget
//! math modules are plain functions with sibling tests.

pub mod convert;
pub mod hue;
pub mod persist;
pub mod seed;
pub mod theme;
