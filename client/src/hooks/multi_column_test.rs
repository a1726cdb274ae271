#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn stored_list_is_empty_without_a_dom() {
    let owner = Owner::new();
    owner.with(|| {
        let container_ref = NodeRef::<leptos::html::Div>::new();
        let class_names = use_multi_column_child_view(container_ref, AspectRatio::default());
        assert!(class_names.get_untracked().is_empty());
    });
}

#[test]
fn custom_config_is_accepted() {
    let owner = Owner::new();
    owner.with(|| {
        let container_ref = NodeRef::<leptos::html::Div>::new();
        let config = MultiColumnConfig::default().with_marker_class("row-section");
        let class_names = use_multi_column_child_view_with_config(container_ref, config);
        assert_eq!(class_names.get_untracked(), ChildClassNames::default());
    });
}
