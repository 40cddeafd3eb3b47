//! Uniform scale factor for fitting a toolpath into the canvas.

/// Scale that makes the toolpath use the whole drawing space while keeping
/// its aspect ratio.
///
/// Returns 0 when the toolpath has no extent on either axis or when the
/// canvas has a zero side. A toolpath that is flat on one axis is scaled by
/// the other axis alone. Inputs are expected to be non-negative.
pub fn calculate_scale(gcode_width: f64, gcode_height: f64, svg_width: f64, svg_height: f64) -> f64 {
    if (gcode_width == 0.0 && gcode_height == 0.0) || svg_width == 0.0 || svg_height == 0.0 {
        return 0.0;
    }
    if gcode_width == 0.0 {
        return svg_height / gcode_height;
    }
    if gcode_height == 0.0 {
        return svg_width / gcode_width;
    }
    (svg_width / gcode_width).min(svg_height / gcode_height)
}
