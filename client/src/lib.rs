//! # multicol-client
//!
//! Leptos + WASM bindings for the `multicol` layout library.
//!
//! The library computes per-child `col-span-*` classes from an abstract
//! element tree. This crate supplies the browser side: a `web_sys::Element`
//! adapter, the `use_multi_column_child_view` hook that runs the measure and
//! commit passes from effects, and a `MultiColumnView` wrapper component.
//! Everything that touches the DOM is gated behind the `hydrate` feature.

pub mod components;
pub mod hooks;
pub mod util;
