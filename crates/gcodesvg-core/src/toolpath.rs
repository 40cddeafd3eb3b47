//! Toolpath data model
//!
//! A toolpath is the ordered list of motion segments produced by the
//! geometry parser, together with the bounding box of everything it draws.

use crate::geometry::{BoundingBox, CubicBezier, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Command category of a motion segment.
///
/// Consecutive segments of the same kind are rendered as one SVG path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentKind {
    /// Non-cutting repositioning move (G0)
    Rapid,
    /// Straight cutting move (G1)
    Linear,
    /// Circular cutting move (G2/G3), approximated by cubic Béziers
    Circular,
}

impl SegmentKind {
    pub const ALL: [SegmentKind; 3] = [Self::Rapid, Self::Linear, Self::Circular];
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rapid => write!(f, "G0"),
            Self::Linear => write!(f, "G1"),
            Self::Circular => write!(f, "G2G3"),
        }
    }
}

/// A single motion primitive, in execution order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment {
    Rapid { start: Point, end: Point },
    Linear { start: Point, end: Point },
    Circular { curves: Vec<CubicBezier> },
}

impl Segment {
    pub fn rapid(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Self::Rapid {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn linear(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Self::Linear {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn circular(curves: Vec<CubicBezier>) -> Self {
        Self::Circular { curves }
    }

    /// The category this segment is grouped by.
    pub fn kind(&self) -> SegmentKind {
        match self {
            Self::Rapid { .. } => SegmentKind::Rapid,
            Self::Linear { .. } => SegmentKind::Linear,
            Self::Circular { .. } => SegmentKind::Circular,
        }
    }

    /// First point of the segment, if it has any geometry.
    pub fn start(&self) -> Option<Point> {
        match self {
            Self::Rapid { start, .. } | Self::Linear { start, .. } => Some(*start),
            Self::Circular { curves } => curves.first().map(|c| c.p0),
        }
    }

    /// Last point of the segment, if it has any geometry.
    pub fn end(&self) -> Option<Point> {
        match self {
            Self::Rapid { end, .. } | Self::Linear { end, .. } => Some(*end),
            Self::Circular { curves } => curves.last().map(|c| c.p3),
        }
    }
}

/// Ordered segments plus their bounding box.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Toolpath {
    pub segments: Vec<Segment>,
    pub bounds: BoundingBox,
}

impl Toolpath {
    pub fn new(segments: Vec<Segment>, bounds: BoundingBox) -> Self {
        Self { segments, bounds }
    }

    /// Build a toolpath whose bounds enclose every endpoint and control point.
    ///
    /// Control points may lie outside the drawn curve, so parsers that know
    /// the true arc extents should prefer [`Toolpath::new`].
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        let points = segments.iter().flat_map(|segment| match segment {
            Segment::Rapid { start, end } | Segment::Linear { start, end } => vec![*start, *end],
            Segment::Circular { curves } => curves
                .iter()
                .flat_map(|c| [c.p0, c.p1, c.p2, c.p3])
                .collect(),
        });
        let bounds = BoundingBox::from_points(points);
        Self { segments, bounds }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
