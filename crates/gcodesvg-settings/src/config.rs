//! Configuration for gcodesvg
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats; the default file lives in the platform config
//! directory.
//!
//! Configuration is organized into two sections:
//! - Colours per command category (`G0`, `G1`, `G2G3`)
//! - Output defaults (canvas size, stroke width, title)

use gcodesvg_core::{ColorPolicy, ConfigError, Result, DEFAULT_STROKE_WIDTH};
use gcodesvg_render::RenderOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIR_NAME: &str = "gcodesvg";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Canvas and stroke defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Canvas width in pixels
    pub width: f64,
    /// Canvas height in pixels
    pub height: f64,
    /// Stroke width in pixels
    pub stroke_width: f64,
    /// Document title; the input file name is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl OutputSettings {
    /// Reject NaN and infinite sizes.
    ///
    /// Zero sizes pass; they render as empty output rather than an error.
    pub fn check_finite(&self) -> Result<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            }
            .into());
        }
        if !self.stroke_width.is_finite() {
            return Err(ConfigError::InvalidStrokeWidth(self.stroke_width).into());
        }
        Ok(())
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            width: 250.0,
            height: 200.0,
            stroke_width: DEFAULT_STROKE_WIDTH,
            title: None,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Stroke colour per command category
    pub colors: ColorPolicy,
    /// Output defaults
    pub output: OutputSettings,
}

impl Default for Config {
    /// Cutting moves in black, rapids hidden.
    fn default() -> Self {
        Self {
            colors: ColorPolicy::new()
                .with_linear("#000000")
                .with_circular("#000000"),
            output: OutputSettings::default(),
        }
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string()).into()),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = Format::of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)
                .map_err(|e| ConfigError::Parse(format!("JSON: {}", e)))?,
            Format::Toml => {
                toml::from_str(&content).map_err(|e| ConfigError::Parse(format!("TOML: {}", e)))?
            }
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)
                .map_err(|e| ConfigError::Parse(format!("JSON: {}", e)))?,
            Format::Toml => toml::to_string_pretty(self)
                .map_err(|e| ConfigError::Parse(format!("TOML: {}", e)))?,
        };

        std::fs::write(path, content)?;
        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Load the config at [`default_config_path`], or the defaults when no
    /// such file exists.
    pub fn load_or_default() -> Result<Self> {
        match default_config_path() {
            Some(path) if path.is_file() => Self::load_from_file(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate configuration
    ///
    /// The renderer ignores signs, so only zero or non-finite sizes are
    /// rejected.
    pub fn validate(&self) -> Result<()> {
        self.output.check_finite()?;
        let OutputSettings { width, height, .. } = self.output;
        if width == 0.0 || height == 0.0 {
            return Err(ConfigError::InvalidDimensions { width, height }.into());
        }
        Ok(())
    }

    /// Render options for this config, using `title_fallback` when no title
    /// is configured.
    pub fn render_options(&self, title_fallback: &str) -> RenderOptions {
        let title = self
            .output
            .title
            .clone()
            .unwrap_or_else(|| title_fallback.to_string());
        RenderOptions::new(title, self.output.width, self.output.height)
            .with_stroke_width(self.output.stroke_width)
    }
}

/// Location of the user config file, e.g. `~/.config/gcodesvg/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
