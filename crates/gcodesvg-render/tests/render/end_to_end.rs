use gcodesvg_core::{BoundingBox, ColorPolicy, CubicBezier, Point, Segment, Toolpath};
use gcodesvg_render::{calculate_scale, convert, convert_gcode, to_image_point, RenderOptions};

fn path_count(svg: &str) -> usize {
    svg.matches("<path ").count()
}

#[test]
fn test_triangle_single_path() {
    let toolpath = Toolpath::from_segments(vec![
        Segment::linear((0.0, 0.0), (10.0, 0.0)),
        Segment::linear((10.0, 0.0), (5.0, 10.0)),
        Segment::linear((5.0, 10.0), (0.0, 0.0)),
    ]);
    let colors = ColorPolicy::new().with_linear("#000000");
    let svg = convert(&toolpath, &colors, &RenderOptions::new("tri", 300.0, 300.0));

    assert_eq!(path_count(&svg), 1);
    assert!(svg.contains("<title>tri</title>"));
    assert!(svg.contains("width=\"300px\" height=\"300px\""));
    assert!(svg.contains(
        "<path style=\"fill:none;stroke:#000000;stroke-width:2px;\" d=\"M0,300 L300,300 L150,0 L0,300\" />"
    ));
    assert!(svg.ends_with("/></svg>"));
}

#[test]
fn test_mixed_categories_with_hidden_rapid() {
    let arc = CubicBezier::new(
        Point::new(10.0, 10.0),
        Point::new(12.0, 10.0),
        Point::new(14.0, 12.0),
        Point::new(14.0, 14.0),
    );
    let toolpath = Toolpath::from_segments(vec![
        Segment::rapid((0.0, 0.0), (5.0, 5.0)),
        Segment::linear((5.0, 5.0), (10.0, 10.0)),
        Segment::circular(vec![arc]),
        Segment::linear((14.0, 14.0), (20.0, 14.0)),
    ]);
    let colors = ColorPolicy::new()
        .with_linear("#000000")
        .with_circular("#ff00ff");
    let svg = convert(&toolpath, &colors, &RenderOptions::new("mixed", 200.0, 200.0));

    assert_eq!(path_count(&svg), 3);
    let linear = svg.find("stroke:#000000").unwrap();
    let circular = svg.find("stroke:#ff00ff").unwrap();
    let last_linear = svg.rfind("stroke:#000000").unwrap();
    assert!(linear < circular && circular < last_linear);
    assert_eq!(svg.matches("\n\n").count(), 2);
}

#[test]
fn test_nothing_coloured_gives_empty_document() {
    let toolpath = Toolpath::from_segments(vec![Segment::linear((0.0, 0.0), (1.0, 1.0))]);
    let svg = convert(&toolpath, &ColorPolicy::new(), &RenderOptions::new("t", 10.0, 10.0));
    assert!(svg.ends_with("<title>t</title>\n</svg>"));
}

#[test]
fn test_bbox_corners_map_to_canvas_corners() {
    let bounds = BoundingBox::new(Point::new(-5.0, -5.0), Point::new(15.0, 5.0));
    let scale = calculate_scale(bounds.width(), bounds.height(), 400.0, 200.0);
    assert_eq!(scale, 20.0);
    assert_eq!(to_image_point(bounds.min, &bounds, scale), Point::new(0.0, 200.0));
    assert_eq!(to_image_point(bounds.max, &bounds, scale), Point::new(400.0, 0.0));
}

#[test]
fn test_gcode_text_end_to_end() {
    let program = "G21 G90\nG0 X0 Y0\nG1 X10 Y0\nG1 X10 Y10\nG2 X0 Y10 I-5 J0\n";
    let colors = ColorPolicy::new()
        .with_linear("#000000")
        .with_circular("#000000");
    let svg = convert_gcode(program, &colors, &RenderOptions::new("job", 250.0, 200.0)).unwrap();
    assert_eq!(path_count(&svg), 2);
    assert!(svg.contains(" C"));
}

#[test]
fn test_gcode_text_zero_canvas_skips_parsing() {
    let colors = ColorPolicy::uniform("#000");
    let svg = convert_gcode("G2 X1", &colors, &RenderOptions::new("t", 0.0, 10.0)).unwrap();
    assert_eq!(svg, "");
}
