use gcodesvg_core::{BoundingBox, CubicBezier, Point, Segment, SegmentKind, Toolpath};

fn quarter_arc() -> CubicBezier {
    CubicBezier::new(
        Point::new(1.0, 0.0),
        Point::new(1.0, 0.55),
        Point::new(0.55, 1.0),
        Point::new(0.0, 1.0),
    )
}

#[test]
fn test_segment_json_is_tagged() {
    let segment = Segment::linear((0.0, 0.0), (2.0, 0.0));
    let json = serde_json::to_value(&segment).unwrap();
    assert_eq!(json["type"], "linear");
    assert_eq!(json["end"]["x"], 2.0);

    let back: Segment = serde_json::from_value(json).unwrap();
    assert_eq!(back, segment);
}

#[test]
fn test_circular_segment_endpoints() {
    let segment = Segment::circular(vec![quarter_arc()]);
    assert_eq!(segment.kind(), SegmentKind::Circular);
    assert_eq!(segment.start(), Some(Point::new(1.0, 0.0)));
    assert_eq!(segment.end(), Some(Point::new(0.0, 1.0)));
}

#[test]
fn test_toolpath_keeps_explicit_bounds() {
    let bounds = BoundingBox::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
    let toolpath = Toolpath::new(vec![Segment::circular(vec![quarter_arc()])], bounds);
    assert_eq!(toolpath.bounds, bounds);
    assert_eq!(toolpath.len(), 1);
}

#[test]
fn test_toolpath_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Toolpath>();
}
