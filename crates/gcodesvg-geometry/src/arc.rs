//! Circular arcs in the XY plane
//!
//! Builds an arc from G2/G3 parameters (centre offsets or radius), computes
//! its sweep, splits it into cubic Bézier pieces of at most 90° and reports
//! the axis-extreme points that lie on the drawn part of the circle.

use gcodesvg_core::{CubicBezier, Point};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Start and end closer than this are treated as the same point.
const ARC_EPSILON: f64 = 1e-9;

/// A circular arc with a signed sweep (positive = counter-clockwise).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub start: Point,
    pub end: Point,
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep: f64,
}

impl Arc {
    /// Arc from an explicit centre (I/J form).
    ///
    /// A start equal to the end describes a full circle.
    pub fn from_center(start: Point, end: Point, center: Point, clockwise: bool) -> Self {
        let radius = start.distance_to(&center);
        let start_angle = (start.y - center.y).atan2(start.x - center.x);
        let end_angle = (end.y - center.y).atan2(end.x - center.x);

        let sweep = if start.distance_to(&end) < ARC_EPSILON {
            if clockwise {
                -TAU
            } else {
                TAU
            }
        } else {
            let mut delta = end_angle - start_angle;
            if clockwise && delta >= 0.0 {
                delta -= TAU;
            } else if !clockwise && delta <= 0.0 {
                delta += TAU;
            }
            delta
        };

        Self {
            start,
            end,
            center,
            radius,
            start_angle,
            sweep,
        }
    }

    /// Arc from a radius (R form).
    ///
    /// A positive radius selects the arc of at most 180°, a negative one the
    /// longer arc. Returns `None` when start and end coincide, since no
    /// unique circle passes through them. A radius shorter than half the
    /// chord is stretched to exactly half the chord.
    pub fn from_radius(start: Point, end: Point, radius: f64, clockwise: bool) -> Option<Self> {
        let chord = start.distance_to(&end);
        if chord < ARC_EPSILON || radius == 0.0 {
            return None;
        }

        let half = chord / 2.0;
        let offset = (radius * radius - half * half).max(0.0).sqrt();
        let mid = Point::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0);
        let (ux, uy) = ((end.x - start.x) / chord, (end.y - start.y) / chord);

        // Short CCW arcs keep the centre left of the chord.
        let turn = if clockwise { -1.0 } else { 1.0 };
        let side = turn * radius.signum();
        let center = Point::new(mid.x - uy * offset * side, mid.y + ux * offset * side);

        Some(Self::from_center(start, end, center, clockwise))
    }

    pub fn is_clockwise(&self) -> bool {
        self.sweep < 0.0
    }

    /// Point on the circle at `angle` (radians).
    pub fn point_at(&self, angle: f64) -> Point {
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    /// Approximate the arc by cubic Béziers of at most 90° each.
    ///
    /// The first curve starts exactly at `start` and the last one ends
    /// exactly at `end`, so consecutive segments stay connected.
    pub fn to_beziers(&self) -> Vec<CubicBezier> {
        let pieces = ((self.sweep.abs() / FRAC_PI_2) - ARC_EPSILON).ceil().max(1.0) as usize;
        let step = self.sweep / pieces as f64;
        let handle = 4.0 / 3.0 * (step / 4.0).tan() * self.radius;

        let mut curves = Vec::with_capacity(pieces);
        for i in 0..pieces {
            let a = self.start_angle + step * i as f64;
            let b = a + step;

            let p0 = if i == 0 { self.start } else { self.point_at(a) };
            let p3 = if i + 1 == pieces { self.end } else { self.point_at(b) };
            let p1 = Point::new(p0.x - handle * a.sin(), p0.y + handle * a.cos());
            let p2 = Point::new(p3.x + handle * b.sin(), p3.y - handle * b.cos());

            curves.push(CubicBezier::new(p0, p1, p2, p3));
        }
        curves
    }

    /// Points where the drawn arc reaches its leftmost, rightmost, lowest
    /// or highest position, plus both endpoints.
    pub fn extremes(&self) -> Vec<Point> {
        let mut points = vec![self.start, self.end];
        let span = self.sweep.abs();
        for quadrant in 0..4 {
            let angle = quadrant as f64 * FRAC_PI_2;
            let travelled = if self.is_clockwise() {
                (self.start_angle - angle).rem_euclid(TAU)
            } else {
                (angle - self.start_angle).rem_euclid(TAU)
            };
            if travelled <= span + ARC_EPSILON || span >= TAU - ARC_EPSILON {
                points.push(self.point_at(angle));
            }
        }
        points
    }

    /// Sweep in degrees, for logging.
    pub fn sweep_degrees(&self) -> f64 {
        self.sweep * 180.0 / PI
    }
}
