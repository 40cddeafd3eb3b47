//! gcodesvg Settings Crate
//!
//! Loads, validates and saves the colour policy and output defaults used by
//! the command-line front end.

pub mod config;

pub use config::{default_config_path, Config, OutputSettings};
