//! Wrapper that lays its children out as multicol columns.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages that only need the default behaviour wrap their column children in
//! `<MultiColumnView>` instead of wiring a `NodeRef` to the hook by hand.
//! The grid classes are rendered up front so server output already has the
//! 12-column grid before the client effects run.

#[cfg(test)]
#[path = "multi_column_view_test.rs"]
mod multi_column_view_test;

use leptos::prelude::*;
use multicol::{AspectRatio, ClassList, MultiColumnConfig};

use crate::hooks::multi_column::use_multi_column_child_view_with_config;

/// Container whose direct children share the row by `aspect_ratio`.
#[component]
pub fn MultiColumnView(
    #[prop(optional, into)] aspect_ratio: AspectRatio,
    #[prop(optional, into)] marker_class: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();

    let mut config = MultiColumnConfig::default().with_aspect_ratio(aspect_ratio);
    if let Some(marker) = marker_class {
        config = config.with_marker_class(marker);
    }
    let container_class = container_class(&config, class.as_deref());
    use_multi_column_child_view_with_config(container_ref, config);

    view! {
        <div node_ref=container_ref class=container_class>
            {children()}
        </div>
    }
}

/// Grid classes followed by any caller classes.
fn container_class(config: &MultiColumnConfig, extra: Option<&str>) -> String {
    let mut list = ClassList::default();
    for class in &config.grid_classes {
        list.add(class);
    }
    list.extend_from_attr(extra.unwrap_or_default());
    list.to_string()
}
