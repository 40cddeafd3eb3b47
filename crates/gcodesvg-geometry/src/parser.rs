//! G-Code parser with modal state tracking
//!
//! Reads a program line by line, keeps the modal groups that affect
//! geometry and records one segment per motion.

use crate::arc::Arc;
use gcodesvg_core::{BoundingBox, GcodeError, Point, Result, Segment, Toolpath, Units};
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, trace};

/// Motion mode - Group 1 (G0, G1, G2, G3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    #[default]
    Rapid,
    Linear,
    ClockwiseArc,
    CounterClockwiseArc,
}

/// Distance mode - Group 3 (G90, G91)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMode {
    #[default]
    Absolute,
    Incremental,
}

/// Plane selection - Group 2 (G17, G18, G19)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Plane {
    #[default]
    XY,
    XZ,
    YZ,
}

impl Plane {
    /// The G number selecting this plane.
    pub fn code(self) -> u8 {
        match self {
            Self::XY => 17,
            Self::XZ => 18,
            Self::YZ => 19,
        }
    }
}

/// A letter/value pair such as `X12.5`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Word {
    letter: char,
    value: f64,
}

/// Letters whose values take part in geometry; a malformed value on any
/// other letter is skipped.
const GEOMETRY_LETTERS: &[char] = &['G', 'X', 'Y', 'Z', 'I', 'J', 'R'];

/// G-Code to toolpath parser
///
/// Positions start at the origin in absolute millimetres.
#[derive(Debug, Clone)]
pub struct GeometryParser {
    motion: Motion,
    distance_mode: DistanceMode,
    units: Units,
    plane: Plane,
    position: Point,
    bounds: BoundingBox,
    segments: Vec<Segment>,
    line_number: u32,
}

impl Default for GeometryParser {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryParser {
    /// Create a parser in G0/G17/G21/G90 at the origin.
    pub fn new() -> Self {
        Self {
            motion: Motion::default(),
            distance_mode: DistanceMode::default(),
            units: Units::default(),
            plane: Plane::default(),
            position: Point::default(),
            bounds: BoundingBox::empty(),
            segments: Vec::new(),
            line_number: 0,
        }
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn distance_mode(&self) -> DistanceMode {
        self.distance_mode
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn plane(&self) -> Plane {
        self.plane
    }

    /// Current tool position in millimetres.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Number of lines consumed so far.
    pub fn line_number(&self) -> u32 {
        self.line_number
    }

    /// Parse a whole program and return its toolpath.
    pub fn parse(mut self, text: &str) -> Result<Toolpath> {
        for line in text.lines() {
            self.parse_line(line)?;
        }
        debug!(
            "Parsed {} segments from {} lines (last units: {})",
            self.segments.len(),
            self.line_number,
            self.units
        );
        Ok(self.finish())
    }

    /// Consume one line of G-Code.
    pub fn parse_line(&mut self, line: &str) -> Result<()> {
        self.line_number += 1;

        let cleaned = remove_comments(line);
        if cleaned.trim().is_empty() {
            return Ok(());
        }

        let words = self.tokenize(&cleaned)?;
        let consumes_axes = self.apply_modal_codes(&words);
        if consumes_axes {
            trace!("Line {}: axis words belong to a non-motion code", self.line_number);
            return Ok(());
        }

        let x = word_value(&words, 'X');
        let y = word_value(&words, 'Y');
        let z = word_value(&words, 'Z');
        let i = word_value(&words, 'I');
        let j = word_value(&words, 'J');
        let r = word_value(&words, 'R');

        let has_axis = x.is_some() || y.is_some() || z.is_some();
        let is_arc = matches!(
            self.motion,
            Motion::ClockwiseArc | Motion::CounterClockwiseArc
        );
        let has_arc_params = i.is_some() || j.is_some() || r.is_some();
        if !has_axis && !(is_arc && has_arc_params) {
            return Ok(());
        }

        let target = self.target(x, y);
        match self.motion {
            Motion::Rapid => self.push_straight(Segment::rapid(self.position, target)),
            Motion::Linear => self.push_straight(Segment::linear(self.position, target)),
            Motion::ClockwiseArc => self.push_arc(target, i, j, r, true)?,
            Motion::CounterClockwiseArc => self.push_arc(target, i, j, r, false)?,
        }
        self.position = target;

        Ok(())
    }

    /// Stop parsing and return the toolpath built so far.
    pub fn finish(self) -> Toolpath {
        Toolpath::new(self.segments, self.bounds.finalize())
    }

    fn tokenize(&self, line: &str) -> Result<Vec<Word>> {
        static WORD_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = WORD_REGEX
            .get_or_init(|| Regex::new(r"([A-Za-z])\s*([^A-Za-z\s]*)").expect("invalid regex pattern"));

        // `%` delimits a program and `/` marks block delete; both are ignored.
        let stray = regex
            .replace_all(line, "")
            .chars()
            .find(|c| !c.is_whitespace() && !matches!(c, '%' | '/'));
        if let Some(ch) = stray {
            return Err(GcodeError::InvalidSyntax {
                line_number: self.line_number,
                reason: format!("unexpected character '{}'", ch),
            }
            .into());
        }

        let mut words = Vec::new();
        for caps in regex.captures_iter(line) {
            let letter = caps[1].chars().next().unwrap_or(' ').to_ascii_uppercase();
            let raw = &caps[2];
            match raw.parse::<f64>() {
                Ok(value) if value.is_finite() => words.push(Word { letter, value }),
                _ if GEOMETRY_LETTERS.contains(&letter) => {
                    return Err(GcodeError::InvalidParameter {
                        line_number: self.line_number,
                        param: letter.to_string(),
                        reason: format!("not a number: '{}'", raw),
                    }
                    .into());
                }
                _ => trace!("Line {}: skipping word {}{}", self.line_number, letter, raw),
            }
        }
        Ok(words)
    }

    /// Apply every G word of the line to the modal state.
    ///
    /// Returns true when the line carries a non-motion code (dwell, offsets,
    /// homing) whose axis words must not move the tool.
    fn apply_modal_codes(&mut self, words: &[Word]) -> bool {
        let mut consumes_axes = false;
        for word in words.iter().filter(|w| w.letter == 'G') {
            // Tenths keep codes like G61.1 distinct from G61.
            match (word.value * 10.0).round() as i64 {
                0 => self.motion = Motion::Rapid,
                10 => self.motion = Motion::Linear,
                20 => self.motion = Motion::ClockwiseArc,
                30 => self.motion = Motion::CounterClockwiseArc,
                170 => self.plane = Plane::XY,
                180 => self.plane = Plane::XZ,
                190 => self.plane = Plane::YZ,
                200 => self.units = Units::Inches,
                210 => self.units = Units::Millimeters,
                900 => self.distance_mode = DistanceMode::Absolute,
                910 => self.distance_mode = DistanceMode::Incremental,
                40 | 100 | 280 | 300 | 530 | 920 => consumes_axes = true,
                other => trace!(
                    "Line {}: ignoring G{}",
                    self.line_number,
                    other as f64 / 10.0
                ),
            }
        }
        consumes_axes
    }

    fn target(&self, x: Option<f64>, y: Option<f64>) -> Point {
        let resolve = |word: Option<f64>, current: f64| match (word, self.distance_mode) {
            (Some(value), DistanceMode::Absolute) => self.units.to_mm(value),
            (Some(value), DistanceMode::Incremental) => current + self.units.to_mm(value),
            (None, _) => current,
        };
        Point::new(resolve(x, self.position.x), resolve(y, self.position.y))
    }

    fn push_straight(&mut self, segment: Segment) {
        if let (Some(start), Some(end)) = (segment.start(), segment.end()) {
            self.bounds.include(start);
            self.bounds.include(end);
        }
        self.segments.push(segment);
    }

    fn push_arc(
        &mut self,
        target: Point,
        i: Option<f64>,
        j: Option<f64>,
        r: Option<f64>,
        clockwise: bool,
    ) -> Result<()> {
        if self.plane != Plane::XY {
            return Err(GcodeError::UnsupportedPlane {
                line_number: self.line_number,
                plane: self.plane.code(),
            }
            .into());
        }

        let arc = if i.is_some() || j.is_some() {
            let center = Point::new(
                self.position.x + self.units.to_mm(i.unwrap_or(0.0)),
                self.position.y + self.units.to_mm(j.unwrap_or(0.0)),
            );
            Arc::from_center(self.position, target, center, clockwise)
        } else if let Some(radius) = r {
            Arc::from_radius(self.position, target, self.units.to_mm(radius), clockwise)
                .ok_or_else(|| GcodeError::InvalidParameter {
                    line_number: self.line_number,
                    param: "R".to_string(),
                    reason: "radius arcs need distinct start and end points".to_string(),
                })?
        } else {
            return Err(GcodeError::MissingParameter {
                line_number: self.line_number,
                param: "I/J or R".to_string(),
            }
            .into());
        };

        trace!(
            "Line {}: arc r={:.3} sweep={:.1}°",
            self.line_number,
            arc.radius,
            arc.sweep_degrees()
        );

        for point in arc.extremes() {
            self.bounds.include(point);
        }
        self.segments.push(Segment::circular(arc.to_beziers()));
        Ok(())
    }
}

/// Remove `( … )` and `;` comments from a G-Code line.
fn remove_comments(line: &str) -> String {
    static COMMENT_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = COMMENT_REGEX
        .get_or_init(|| Regex::new(r"\([^)]*\)?|;.*").expect("invalid regex pattern"));
    regex.replace_all(line, "").to_string()
}

/// Last value given for `letter` on the line.
fn word_value(words: &[Word], letter: char) -> Option<f64> {
    words.iter().rev().find(|w| w.letter == letter).map(|w| w.value)
}

/// Parse a G-Code program into a toolpath.
pub fn parse_gcode(text: &str) -> Result<Toolpath> {
    GeometryParser::new().parse(text)
}
