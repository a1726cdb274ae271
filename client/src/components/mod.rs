//! Reusable layout components.

pub mod multi_column_view;
