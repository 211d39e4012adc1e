//! Client-side state shared through Leptos context.
//!
//! DESIGN
//! ======
//! Only durable, cross-page state lives here; each widget page keeps its
//! transient interaction state in local signals.

pub mod records;
