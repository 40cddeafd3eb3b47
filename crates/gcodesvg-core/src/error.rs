//! Error handling for gcodesvg
//!
//! Provides error types for the layers around the renderer:
//! - G-Code errors (parsing the input program)
//! - Configuration errors (loading and validating settings)
//!
//! The renderer itself never fails; degenerate input yields an empty
//! string or an empty document instead of an error.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// G-Code error type
///
/// Represents errors raised while turning G-Code text into toolpath geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GcodeError {
    /// Invalid G-Code syntax
    #[error("Invalid syntax at line {line_number}: {reason}")]
    InvalidSyntax {
        /// The line number where the syntax error occurred.
        line_number: u32,
        /// The reason for the syntax error.
        reason: String,
    },

    /// Invalid parameter value
    #[error("Invalid parameter '{param}' at line {line_number}: {reason}")]
    InvalidParameter {
        /// The line number where the invalid parameter was found.
        line_number: u32,
        /// The parameter name.
        param: String,
        /// The reason the parameter is invalid.
        reason: String,
    },

    /// Missing required parameter
    #[error("Missing required parameter '{param}' at line {line_number}")]
    MissingParameter {
        /// The line number where the parameter was missing.
        line_number: u32,
        /// The name of the missing parameter.
        param: String,
    },

    /// Arc programmed outside the XY plane
    #[error("Arcs in plane G{plane} are not supported (line {line_number})")]
    UnsupportedPlane {
        /// The line number of the arc.
        line_number: u32,
        /// The active plane selection (17, 18 or 19).
        plane: u8,
    },
}

/// Configuration error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Canvas width or height is zero or not finite
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// The configured width.
        width: f64,
        /// The configured height.
        height: f64,
    },

    /// Stroke width is not finite
    #[error("Invalid stroke width: {0}")]
    InvalidStrokeWidth(f64),

    /// Config file has an unknown extension
    #[error("Config file must be .json or .toml: {0}")]
    UnsupportedFormat(String),

    /// Config file content could not be parsed or written
    #[error("Invalid config: {0}")]
    Parse(String),
}

/// Main error type for gcodesvg
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// G-Code error
    #[error(transparent)]
    Gcode(#[from] GcodeError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if this is a G-Code error
    pub fn is_gcode_error(&self) -> bool {
        matches!(self, Error::Gcode(_))
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcode_error_display() {
        let err = GcodeError::InvalidParameter {
            line_number: 3,
            param: "X".to_string(),
            reason: "not a number: 1..2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'X' at line 3: not a number: 1..2"
        );

        let err = GcodeError::UnsupportedPlane {
            line_number: 7,
            plane: 18,
        };
        assert_eq!(
            err.to_string(),
            "Arcs in plane G18 are not supported (line 7)"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidDimensions {
            width: 0.0,
            height: 200.0,
        };
        assert_eq!(err.to_string(), "Invalid dimensions: 0x200");

        let err = ConfigError::UnsupportedFormat("settings.yaml".to_string());
        assert_eq!(
            err.to_string(),
            "Config file must be .json or .toml: settings.yaml"
        );
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = GcodeError::MissingParameter {
            line_number: 1,
            param: "R".to_string(),
        }
        .into();
        assert!(err.is_gcode_error());
        assert!(!err.is_config_error());

        let err: Error = ConfigError::InvalidStrokeWidth(f64::NAN).into();
        assert!(err.is_config_error());

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
