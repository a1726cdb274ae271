//! Browser-side helpers for the multicol hook.

#[cfg(feature = "hydrate")]
pub mod element;
pub mod logging;
