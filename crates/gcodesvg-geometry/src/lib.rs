//! # gcodesvg Geometry
//!
//! Turns G-Code text into toolpath geometry: an ordered list of rapid,
//! linear and circular segments plus their bounding box.
//!
//! Only the subset needed for drawing a 2D toolpath is understood:
//! - Motion modes G0, G1, G2, G3 (modal)
//! - Absolute/incremental distance (G90, G91)
//! - Inch/millimetre units (G20, G21), stored in millimetres
//! - Plane selection (G17, G18, G19); arcs are supported in XY only
//! - Arc centres from I/J offsets or an R radius
//!
//! Arcs are approximated by cubic Bézier curves of at most 90° each.

pub mod arc;
pub mod parser;

pub use arc::Arc;
pub use parser::{parse_gcode, DistanceMode, GeometryParser, Motion, Plane};
