use gcodesvg_core::{ColorPolicy, SegmentKind};

#[test]
fn test_json_uses_command_names() {
    let colors = ColorPolicy::new()
        .with_linear("#000000")
        .with_circular("#ff00ff");
    let json = serde_json::to_string(&colors).unwrap();
    assert_eq!(json, r##"{"G1":"#000000","G2G3":"#ff00ff"}"##);
}

#[test]
fn test_missing_keys_hide_category() {
    let colors: ColorPolicy = serde_json::from_str(r##"{"G0":"#cccccc"}"##).unwrap();
    assert_eq!(colors.color_for(SegmentKind::Rapid), Some("#cccccc"));
    assert_eq!(colors.color_for(SegmentKind::Linear), None);
    assert_eq!(colors.color_for(SegmentKind::Circular), None);
}

#[test]
fn test_toml_round_trip() {
    let source = r##"
G0 = "#aaaaaa"
G2G3 = "#0000ff"
"##;
    let colors: ColorPolicy = toml::from_str(source).unwrap();
    assert_eq!(colors.rapid.as_deref(), Some("#aaaaaa"));
    assert_eq!(colors.linear, None);
    assert_eq!(colors.circular.as_deref(), Some("#0000ff"));
}
