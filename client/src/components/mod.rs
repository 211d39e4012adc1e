//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render widget chrome and interaction surfaces; pages own the
//! state and hand it down as signals and callbacks.

pub mod game_hud;
pub mod pad_grid;
pub mod widget_card;
