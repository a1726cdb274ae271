use super::*;

#[test]
fn container_class_starts_with_grid() {
    let config = MultiColumnConfig::default();
    assert_eq!(container_class(&config, None), "grid grid-cols-12");
}

#[test]
fn container_class_appends_caller_classes() {
    let config = MultiColumnConfig::default();
    assert_eq!(container_class(&config, Some("gap-4  mt-2")), "grid grid-cols-12 gap-4 mt-2");
}

#[test]
fn container_class_skips_repeated_grid_class() {
    let config = MultiColumnConfig::default();
    assert_eq!(container_class(&config, Some("grid gap-4")), "grid grid-cols-12 gap-4");
}

#[test]
fn aspect_ratio_prop_accepts_span_arrays() {
    let ratio: AspectRatio = [multicol::ColumnSpan::Nine, multicol::ColumnSpan::Three].into();
    let config = MultiColumnConfig::default().with_aspect_ratio(ratio);
    assert_eq!(config.aspect_ratio.len(), 2);
}
