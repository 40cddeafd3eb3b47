//! # gcodesvg Core
//!
//! Core types shared by every gcodesvg crate.
//! Provides the toolpath data model produced by the geometry parser and
//! consumed by the SVG renderer, the per-command colour policy, unit
//! handling and the unified error types.

pub mod colors;
pub mod error;
pub mod geometry;
pub mod toolpath;
pub mod units;

pub use colors::ColorPolicy;
pub use error::{ConfigError, Error, GcodeError, Result};
pub use geometry::{BoundingBox, CubicBezier, Point};
pub use toolpath::{Segment, SegmentKind, Toolpath};
pub use units::Units;

/// Stroke width (in pixels) used when the caller does not provide one.
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;
