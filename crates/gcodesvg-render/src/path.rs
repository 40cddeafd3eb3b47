//! SVG `<path>` emission for a single run.

use crate::document::xml_escape;
use crate::mapper::ImageMapper;
use crate::runs::Run;
use gcodesvg_core::{BoundingBox, ColorPolicy, Segment, SegmentKind};
use std::fmt::Write;

/// Path data for a run of straight moves.
///
/// Moves to the start of the first segment, then draws one line to the end
/// of every segment. Returns an empty string for an empty run.
pub fn straight_path_data(segments: &[Segment], mapper: &ImageMapper) -> String {
    let Some(start) = segments.first().and_then(Segment::start) else {
        return String::new();
    };

    let mut data = String::new();
    let start = mapper.map(start);
    let _ = write!(data, "M{},{}", start.x, start.y);
    for end in segments.iter().filter_map(Segment::end) {
        let end = mapper.map(end);
        let _ = write!(data, " L{},{}", end.x, end.y);
    }
    data
}

/// Path data for a run of arcs.
///
/// Moves to the first curve's start, then appends every curve of every
/// segment as a cubic. Returns an empty string when the run has no curves.
pub fn curved_path_data(segments: &[Segment], mapper: &ImageMapper) -> String {
    let mut curves = segments
        .iter()
        .filter_map(|segment| match segment {
            Segment::Circular { curves } => Some(curves.iter()),
            _ => None,
        })
        .flatten()
        .peekable();

    let Some(first) = curves.peek() else {
        return String::new();
    };

    let mut data = String::new();
    let start = mapper.map(first.p0);
    let _ = write!(data, "M{},{}", start.x, start.y);
    for curve in curves {
        let c = mapper.map_curve(curve);
        let _ = write!(
            data,
            " C{},{} {},{} {},{}",
            c.p1.x, c.p1.y, c.p2.x, c.p2.y, c.p3.x, c.p3.y
        );
    }
    data
}

/// Render one run as a stroked, unfilled `<path>` element.
///
/// Returns an empty string when the run's category has no colour or the
/// run produces no path data; callers drop empty strings from the document.
pub fn emit_path(
    run: &Run<'_>,
    colors: &ColorPolicy,
    stroke_width: f64,
    bounds: &BoundingBox,
    scale: f64,
) -> String {
    let Some(color) = colors.color_for(run.kind) else {
        return String::new();
    };

    let mapper = ImageMapper::new(*bounds, scale);
    let data = match run.kind {
        SegmentKind::Rapid | SegmentKind::Linear => straight_path_data(run.segments, &mapper),
        SegmentKind::Circular => curved_path_data(run.segments, &mapper),
    };
    if data.is_empty() {
        return String::new();
    }

    format!(
        "<path style=\"fill:none;stroke:{};stroke-width:{}px;\" d=\"{}\" />",
        xml_escape(color),
        stroke_width,
        data
    )
}
