//! Toolpath space to image space
//!
//! Toolpath coordinates grow upwards, SVG coordinates grow downwards, so the
//! vertical axis is flipped against the top of the bounding box.

use gcodesvg_core::{BoundingBox, CubicBezier, Point};

/// Map a toolpath point into image space.
#[inline]
pub fn to_image_point(point: Point, bounds: &BoundingBox, scale: f64) -> Point {
    Point::new(
        scale * (point.x - bounds.min.x),
        scale * (bounds.max.y - point.y),
    )
}

/// Bounding box and scale bundled for repeated mapping.
#[derive(Debug, Clone, Copy)]
pub struct ImageMapper {
    bounds: BoundingBox,
    scale: f64,
}

impl ImageMapper {
    pub fn new(bounds: BoundingBox, scale: f64) -> Self {
        Self { bounds, scale }
    }

    #[inline]
    pub fn map(&self, point: Point) -> Point {
        to_image_point(point, &self.bounds, self.scale)
    }

    pub fn map_curve(&self, curve: &CubicBezier) -> CubicBezier {
        CubicBezier::new(
            self.map(curve.p0),
            self.map(curve.p1),
            self.map(curve.p2),
            self.map(curve.p3),
        )
    }
}
