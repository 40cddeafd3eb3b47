//! Toolpath to SVG conversion entry points.

use crate::document::assemble;
use crate::path::emit_path;
use crate::runs::Runs;
use crate::scale::calculate_scale;
use gcodesvg_core::{ColorPolicy, Result, Toolpath, DEFAULT_STROKE_WIDTH};
use tracing::{debug, trace};

/// Per-call output settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub title: String,
    /// Canvas width in pixels; the sign is ignored.
    pub width: f64,
    /// Canvas height in pixels; the sign is ignored.
    pub height: f64,
    /// Stroke width in pixels; `None`, NaN or infinity use [`DEFAULT_STROKE_WIDTH`].
    pub stroke_width: Option<f64>,
}

impl RenderOptions {
    pub fn new(title: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            stroke_width: None,
        }
    }

    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = Some(stroke_width);
        self
    }

    fn canvas(&self) -> Option<(f64, f64)> {
        let (width, height) = (self.width.abs(), self.height.abs());
        let drawable = |v: f64| v.is_finite() && v != 0.0;
        (drawable(width) && drawable(height)).then_some((width, height))
    }

    /// Absolute stroke width; missing or non-finite values use the default.
    fn stroke(&self) -> f64 {
        self.stroke_width
            .filter(|w| w.is_finite())
            .map_or(DEFAULT_STROKE_WIDTH, f64::abs)
    }
}

/// Render a toolpath as an SVG document.
///
/// Returns an empty string when there is nothing to render (no segments, or
/// a zero-sized canvas). A toolpath without extent on both axes yields a
/// document with no paths. Otherwise every run of same-category segments
/// becomes one path; runs whose category has no colour are left out.
pub fn convert(toolpath: &Toolpath, colors: &ColorPolicy, options: &RenderOptions) -> String {
    let Some((width, height)) = options.canvas() else {
        debug!("Canvas {}x{} is empty, nothing to render", options.width, options.height);
        return String::new();
    };
    if toolpath.is_empty() {
        debug!("Toolpath has no segments, nothing to render");
        return String::new();
    }

    let bounds = &toolpath.bounds;
    if bounds.is_degenerate() {
        debug!("Toolpath has no 2D extent, emitting empty document");
        return assemble::<&str>(&options.title, width, height, &[]);
    }

    let (gcode_width, gcode_height) = (bounds.width(), bounds.height());
    let scale = calculate_scale(gcode_width, gcode_height, width, height);
    let stroke_width = options.stroke();
    debug!(
        "Rendering {} segments ({}x{}) at scale {}",
        toolpath.len(),
        gcode_width,
        gcode_height,
        scale
    );

    let mut paths = Vec::new();
    let mut suppressed = 0usize;
    for run in Runs::new(&toolpath.segments) {
        let element = emit_path(&run, colors, stroke_width, bounds, scale);
        if element.is_empty() {
            trace!("Skipping {} run of {} segments", run.kind, run.len());
            suppressed += 1;
        } else {
            paths.push(element);
        }
    }
    debug!("Emitted {} paths, suppressed {} runs", paths.len(), suppressed);

    assemble(&options.title, width, height, &paths)
}

/// Parse G-Code text and render it.
///
/// Empty or blank text and zero-sized canvases short-circuit to an empty
/// string without parsing.
pub fn convert_gcode(text: &str, colors: &ColorPolicy, options: &RenderOptions) -> Result<String> {
    if text.trim().is_empty() || options.canvas().is_none() {
        return Ok(String::new());
    }
    let toolpath = gcodesvg_geometry::parse_gcode(text)?;
    Ok(convert(&toolpath, colors, options))
}
