//! Command-line front end

use anyhow::Context;
use clap::Parser;
use gcodesvg_core::SegmentKind;
use gcodesvg_render::convert_gcode;
use gcodesvg_settings::Config;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const FALLBACK_TITLE: &str = "gcode";

#[derive(Parser, Debug)]
#[command(
    name = "gcodesvg",
    version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"),
    about = "Render a G-Code toolpath as an SVG drawing"
)]
pub struct Args {
    /// Input G-Code file, or '-' for stdin
    pub input: Option<PathBuf>,

    /// Output SVG file (stdout when omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config file (.toml or .json)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(short = 'W', long = "width", allow_negative_numbers = true)]
    pub width: Option<f64>,

    /// Canvas height in pixels
    #[arg(short = 'H', long = "height", allow_negative_numbers = true)]
    pub height: Option<f64>,

    /// Stroke width in pixels
    #[arg(short = 's', long = "stroke-width", allow_negative_numbers = true)]
    pub stroke_width: Option<f64>,

    /// Document title (defaults to the input file name)
    #[arg(short = 't', long = "title")]
    pub title: Option<String>,

    /// Colour for rapid moves (G0)
    #[arg(long = "g0", value_name = "COLOR", conflicts_with = "hide_g0")]
    pub g0: Option<String>,

    /// Colour for straight moves (G1)
    #[arg(long = "g1", value_name = "COLOR", conflicts_with = "hide_g1")]
    pub g1: Option<String>,

    /// Colour for arcs (G2/G3)
    #[arg(long = "g2g3", value_name = "COLOR", conflicts_with = "hide_g2g3")]
    pub g2g3: Option<String>,

    /// Do not draw rapid moves
    #[arg(long = "hide-g0")]
    pub hide_g0: bool,

    /// Do not draw straight moves
    #[arg(long = "hide-g1")]
    pub hide_g1: bool,

    /// Do not draw arcs
    #[arg(long = "hide-g2g3")]
    pub hide_g2g3: bool,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Apply command-line overrides on top of a loaded config.
    pub fn apply(&self, config: &mut Config) {
        let colors = [
            (SegmentKind::Rapid, &self.g0, self.hide_g0),
            (SegmentKind::Linear, &self.g1, self.hide_g1),
            (SegmentKind::Circular, &self.g2g3, self.hide_g2g3),
        ];
        for (kind, color, hide) in colors {
            if hide {
                config.colors.set(kind, None);
            } else if let Some(color) = color {
                config.colors.set(kind, Some(color.clone()));
            }
        }

        if let Some(width) = self.width {
            config.output.width = width;
        }
        if let Some(height) = self.height {
            config.output.height = height;
        }
        if let Some(stroke_width) = self.stroke_width {
            config.output.stroke_width = stroke_width;
        }
        if let Some(title) = &self.title {
            config.output.title = Some(title.clone());
        }
    }

    fn stdin_input(&self) -> bool {
        self.input
            .as_deref()
            .is_none_or(|path| path == Path::new("-"))
    }

    /// Title used when neither the config nor the command line set one.
    pub fn default_title(&self) -> String {
        if self.stdin_input() {
            return FALLBACK_TITLE.to_string();
        }
        self.input
            .as_deref()
            .and_then(Path::file_stem)
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| FALLBACK_TITLE.to_string())
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Config::load_or_default().context("Failed to load default config"),
    }
}

fn read_input(args: &Args) -> anyhow::Result<String> {
    match args.input.as_deref() {
        Some(path) if !args.stdin_input() => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, svg: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => std::fs::write(path, svg)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
            if !svg.is_empty() {
                writeln!(stdout)?;
            }
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Run the converter with parsed arguments.
pub fn run(args: &Args) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    args.apply(&mut config);
    config
        .output
        .check_finite()
        .context("Invalid command-line option")?;

    let source = read_input(args)?;
    let options = config.render_options(&args.default_title());
    let svg = convert_gcode(&source, &config.colors, &options)
        .with_context(|| format!("Failed to convert '{}'", options.title))?;

    if svg.is_empty() {
        warn!("Nothing to render: input is empty or the canvas has no area");
    } else {
        info!("Rendered '{}' ({} bytes)", options.title, svg.len());
    }

    write_output(args.output.as_deref(), &svg)
}
