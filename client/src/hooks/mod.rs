//! Reactive hooks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hooks wire `multicol` passes to Leptos effects so components only hand
//! over a `NodeRef` and their settings.

pub mod multi_column;
