use crate::core::MenuPath;

#[test]
fn test_leaf_of_nested_path() {
    let path = MenuPath::new("File/Recent/Clear List");
    assert_eq!(path.leaf(), "Clear List");
}

#[test]
fn test_leaf_of_single_segment() {
    // No slash: the whole string is the leaf
    let path = MenuPath::new("File");
    assert_eq!(path.leaf(), "File");
}

#[test]
fn test_parent_of_nested_path() {
    let path = MenuPath::new("File/Recent/Clear List");
    let parent = path.parent().expect("nested path has a parent");
    assert_eq!(parent.as_str(), "File/Recent");
}

#[test]
fn test_parent_of_single_segment_is_none() {
    // Parent is the root bar, represented as None
    assert!(MenuPath::new("File").parent().is_none());
}

#[test]
fn test_segments_in_order() {
    let path = MenuPath::new("File/Recent/Clear List");
    let segments: Vec<&str> = path.segments().collect();
    assert_eq!(segments, vec!["File", "Recent", "Clear List"]);
}

#[test]
fn test_empty_segments_are_preserved() {
    // Doubled and trailing slashes produce empty segments; they are kept
    // and simply never match a label during resolution
    let path = MenuPath::new("File//Open/");
    let segments: Vec<&str> = path.segments().collect();
    assert_eq!(segments, vec!["File", "", "Open", ""]);
}

#[test]
fn test_display_round_trips_raw_string() {
    let path = MenuPath::new("View/Zoom/In");
    assert_eq!(path.to_string(), "View/Zoom/In");
}

#[test]
fn test_from_str() {
    let path: MenuPath = "Edit/Undo".into();
    assert_eq!(path.leaf(), "Undo");
}
