//! `use_multi_column_child_view`: split a container's children into columns.
//!
//! SYSTEM CONTEXT
//! ==============
//! A container nested somewhere inside a `multicol-column` wrapper hands its
//! `NodeRef` to this hook. The hook reads the wrapper's responsive
//! `col-span-*` classes, decides how the children should share the row, and
//! adds the resulting classes to each child element.
//!
//! ARCHITECTURE
//! ============
//! Two effects mirror the two layout passes in `multicol::dom`:
//!
//! - measure: tracks the container ref. Turns the container into a 12-column
//!   grid, reads the nearest marker ancestor and stores the per-child class
//!   list in a signal (only when it differs from the stored one).
//! - commit: tracks the stored list and the container ref. Adds each stored
//!   class string to the live child at the same position.
//!
//! Both passes only add classes, so re-running either is harmless. Outside
//! the `hydrate` feature there is no DOM and the returned signal stays empty.

#[cfg(test)]
#[path = "multi_column_test.rs"]
mod multi_column_test;

use leptos::prelude::*;
use multicol::{AspectRatio, ChildClassNames, MultiColumnConfig};

#[cfg(feature = "hydrate")]
use crate::util::element::DomElement;

/// Style the children of `container_ref` using the default marker and grid
/// classes. `aspect_ratio` gives each child's desktop width out of 12.
pub fn use_multi_column_child_view(
    container_ref: NodeRef<leptos::html::Div>,
    aspect_ratio: AspectRatio,
) -> ReadSignal<ChildClassNames> {
    use_multi_column_child_view_with_config(
        container_ref,
        MultiColumnConfig::default().with_aspect_ratio(aspect_ratio),
    )
}

/// Like [`use_multi_column_child_view`], with a custom marker class or grid
/// classes.
///
/// Returns the stored class list so callers can render from it as well.
pub fn use_multi_column_child_view_with_config(
    container_ref: NodeRef<leptos::html::Div>,
    config: MultiColumnConfig,
) -> ReadSignal<ChildClassNames> {
    let class_names = RwSignal::new(ChildClassNames::default());

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let Some(container) = container_ref.get() else {
                return;
            };
            let next = multicol::select_class_names(&DomElement::from(container), &config);
            if class_names.get_untracked() != next {
                class_names.set(next);
            }
        });

        Effect::new(move || {
            let stored = class_names.get();
            let Some(container) = container_ref.get() else {
                return;
            };
            let styled = multicol::apply_class_names(&DomElement::from(container), &stored);
            log::trace!("multicol: styled {styled} of {} children", stored.len());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (container_ref, config);
    }

    class_names.read_only()
}
