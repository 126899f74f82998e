//! # Knob Parameters
//!
//! The externally supplied, immutable parameter record and its
//! validation rules.

use crate::error::KnobError;
use serde::{Deserialize, Serialize};

/// Shaft bore cross-section.
///
/// The enum is closed, so an unrecognized shaft type cannot reach the
/// assembler; unknown external values are rejected at the tag boundary
/// by [`ShaftKind::from_tag`] or by serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShaftKind {
    /// Plain round bore.
    Round,
    /// Round bore with a flat chord (potentiometer D-shaft).
    DShape,
    /// Round bore with evenly spaced spline notches.
    Detented,
}

impl ShaftKind {
    /// Parses an external shaft-type tag.
    ///
    /// # Errors
    ///
    /// Returns [`KnobError::UnsupportedShaftType`] for unknown tags; there
    /// is deliberately no default fallback.
    ///
    /// # Example
    ///
    /// ```rust
    /// use knob_builder::ShaftKind;
    ///
    /// assert_eq!(ShaftKind::from_tag("d-shape").unwrap(), ShaftKind::DShape);
    /// assert!(ShaftKind::from_tag("hexagonal").is_err());
    /// ```
    pub fn from_tag(tag: &str) -> Result<Self, KnobError> {
        match tag {
            "round" => Ok(Self::Round),
            "d-shape" => Ok(Self::DShape),
            "detented" => Ok(Self::Detented),
            other => Err(KnobError::UnsupportedShaftType {
                tag: other.to_string(),
            }),
        }
    }
}

/// Parameter record for one knob build. Immutable per build.
///
/// All lengths are millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KnobParams {
    /// Outer diameter of the knob body.
    pub diameter: f64,
    /// Height of the knob body.
    pub height: f64,
    /// Bore cross-section strategy.
    pub shaft: ShaftKind,
    /// Shaft bore diameter; 0 means no bore.
    pub shaft_diameter: f64,
    /// Whether to add grip ridges around the outside.
    pub outer_ridged: bool,
    /// Number of grip ridges; meaningful only when `outer_ridged`.
    pub ridge_count: u32,
    /// Whether to carve a spherical indent into the top face.
    pub top_indent: bool,
}

impl Default for KnobParams {
    fn default() -> Self {
        Self {
            diameter: 35.0,
            height: 14.0,
            shaft: ShaftKind::Round,
            shaft_diameter: 6.0,
            outer_ridged: false,
            ridge_count: 24,
            top_indent: false,
        }
    }
}

impl KnobParams {
    /// Checks the record's invariants.
    ///
    /// # Errors
    ///
    /// Returns [`KnobError::InvalidParameter`] when a dimension is out of
    /// range or the bore would not fit inside the body.
    pub fn validate(&self) -> Result<(), KnobError> {
        if self.diameter <= 0.0 {
            return Err(KnobError::invalid_parameter(format!(
                "diameter must be positive: {}",
                self.diameter
            )));
        }

        if self.height <= 0.0 {
            return Err(KnobError::invalid_parameter(format!(
                "height must be positive: {}",
                self.height
            )));
        }

        if self.shaft_diameter < 0.0 {
            return Err(KnobError::invalid_parameter(format!(
                "shaft diameter must be non-negative: {}",
                self.shaft_diameter
            )));
        }

        // A bore as wide as the body leaves no wall
        if self.shaft_diameter >= self.diameter {
            return Err(KnobError::invalid_parameter(format!(
                "shaft diameter {} must be smaller than knob diameter {}",
                self.shaft_diameter, self.diameter
            )));
        }

        if self.outer_ridged && self.ridge_count < 1 {
            return Err(KnobError::invalid_parameter(
                "ridge count must be at least 1 when outer ridges are enabled",
            ));
        }

        Ok(())
    }
}
