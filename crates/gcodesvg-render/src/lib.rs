//! # gcodesvg Render
//!
//! Compiles a toolpath into an SVG document.
//!
//! The pipeline runs strictly forward:
//! 1. **scale** - one uniform factor fitting the toolpath into the canvas
//! 2. **runs** - maximal blocks of consecutive same-category segments
//! 3. **path** - one stroked `<path>` per run, coloured per category
//! 4. **document** - header, paths, footer
//!
//! [`convert`] ties the steps together; every step is also usable on its own.

pub mod convert;
pub mod document;
pub mod mapper;
pub mod path;
pub mod runs;
pub mod scale;

pub use convert::{convert, convert_gcode, RenderOptions};
pub use document::assemble;
pub use mapper::{to_image_point, ImageMapper};
pub use path::{curved_path_data, emit_path, straight_path_data};
pub use runs::{split_runs, Run, Runs};
pub use scale::calculate_scale;
