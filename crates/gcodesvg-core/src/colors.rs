//! Per-command colour policy
//!
//! Each command category may carry a colour string (e.g. `"#ff00ff"`).
//! A category without a colour is not drawn at all.

use crate::toolpath::SegmentKind;
use serde::{Deserialize, Serialize};

/// Stroke colours for G0, G1 and G2/G3 moves.
///
/// Serialised with the keys `G0`, `G1` and `G2G3`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColorPolicy {
    #[serde(rename = "G0", default, skip_serializing_if = "Option::is_none")]
    pub rapid: Option<String>,
    #[serde(rename = "G1", default, skip_serializing_if = "Option::is_none")]
    pub linear: Option<String>,
    #[serde(rename = "G2G3", default, skip_serializing_if = "Option::is_none")]
    pub circular: Option<String>,
}

impl ColorPolicy {
    /// A policy that draws nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every category in the same colour.
    pub fn uniform(color: impl Into<String>) -> Self {
        let color = color.into();
        Self {
            rapid: Some(color.clone()),
            linear: Some(color.clone()),
            circular: Some(color),
        }
    }

    pub fn with_rapid(mut self, color: impl Into<String>) -> Self {
        self.rapid = Some(color.into());
        self
    }

    pub fn with_linear(mut self, color: impl Into<String>) -> Self {
        self.linear = Some(color.into());
        self
    }

    pub fn with_circular(mut self, color: impl Into<String>) -> Self {
        self.circular = Some(color.into());
        self
    }

    /// Colour assigned to `kind`, or `None` if that category is hidden.
    pub fn color_for(&self, kind: SegmentKind) -> Option<&str> {
        match kind {
            SegmentKind::Rapid => self.rapid.as_deref(),
            SegmentKind::Linear => self.linear.as_deref(),
            SegmentKind::Circular => self.circular.as_deref(),
        }
    }

    /// Set or clear the colour of `kind`.
    pub fn set(&mut self, kind: SegmentKind, color: Option<String>) {
        match kind {
            SegmentKind::Rapid => self.rapid = color,
            SegmentKind::Linear => self.linear = color,
            SegmentKind::Circular => self.circular = color,
        }
    }

    /// True when no category would be drawn.
    pub fn is_empty(&self) -> bool {
        self.rapid.is_none() && self.linear.is_none() && self.circular.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_lookup() {
        let colors = ColorPolicy::new().with_linear("#000000");
        assert_eq!(colors.color_for(SegmentKind::Linear), Some("#000000"));
        assert_eq!(colors.color_for(SegmentKind::Rapid), None);
        assert_eq!(colors.color_for(SegmentKind::Circular), None);
    }

    #[test]
    fn test_set_and_clear() {
        let mut colors = ColorPolicy::uniform("red");
        assert!(!colors.is_empty());
        for kind in SegmentKind::ALL {
            colors.set(kind, None);
        }
        assert!(colors.is_empty());
    }
}
