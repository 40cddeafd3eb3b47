//! # gcodesvg
//!
//! Renders CNC toolpaths as SVG drawings. Every maximal run of moves of
//! the same kind (rapid G0, straight G1, circular G2/G3) becomes one stroked
//! path in the colour configured for that kind; kinds without a colour are
//! left out.
//!
//! ## Architecture
//!
//! 1. **gcodesvg-core** - Toolpath types, colour policy, errors
//! 2. **gcodesvg-geometry** - G-Code text to toolpath, arcs as cubic Béziers
//! 3. **gcodesvg-render** - Toolpath to SVG document
//! 4. **gcodesvg-settings** - Config files and output defaults
//! 5. **gcodesvg** - Command-line binary tying the crates together

pub mod cli;

pub use gcodesvg_core::{
    BoundingBox, ColorPolicy, ConfigError, CubicBezier, Error, GcodeError, Point, Result, Segment,
    SegmentKind, Toolpath, Units,
};
pub use gcodesvg_geometry::{parse_gcode, GeometryParser};
pub use gcodesvg_render::{convert, convert_gcode, RenderOptions};
pub use gcodesvg_settings::{Config, OutputSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Log lines go to stderr so SVG written to stdout stays clean. `RUST_LOG`
/// takes precedence; otherwise `verbosity` picks the level (0 = warn,
/// 1 = info, 2 = debug, 3+ = trace).
pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
