//! Centralized configuration values shared across the knob pipeline.
//!
//! Each public item in this module documents its purpose and provides a
//! minimal usage example so that downstream crates can remain declarative
//! and avoid scattering literals.

use std::fmt;

/// Symmetric epsilon band used for plane-side classification in the CSG
/// kernel. Points within this distance of a plane are treated as coplanar
/// and never force a polygon split.
///
/// # Examples
/// ```
/// use config::constants::CSG_EPSILON;
/// assert!(CSG_EPSILON > 0.0 && CSG_EPSILON < 1.0e-3);
/// ```
pub const CSG_EPSILON: f64 = 1.0e-5;

/// Quantization step for welding coincident vertices when a polygon soup
/// is re-indexed into a triangle mesh. Also serves as the zero-area
/// threshold for degenerate-triangle detection.
///
/// # Examples
/// ```
/// use config::constants::{CSG_EPSILON, VERTEX_MERGE_EPSILON};
/// assert!(VERTEX_MERGE_EPSILON < CSG_EPSILON);
/// ```
pub const VERTEX_MERGE_EPSILON: f64 = 1.0e-6;

/// Default tessellation segment count for primitives that require angular
/// resolution such as cylinders or spherical caps.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SEGMENTS;
/// assert!(DEFAULT_SEGMENTS >= 12);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 32;

/// Radial depth of an outer grip ridge, in millimeters. A ridge box
/// protrudes this far past the knob's outer radius.
pub const RIDGE_DEPTH_MM: f64 = 1.0;

/// Tangential width of an outer grip ridge, in millimeters.
pub const RIDGE_WIDTH_MM: f64 = 1.5;

/// Top-indent cap radius as a fraction of the knob diameter.
///
/// # Examples
/// ```
/// use config::constants::INDENT_RADIUS_RATIO;
/// // A 35 mm knob gets a 10.5 mm indent cap, inside its 17.5 mm radius.
/// assert!(INDENT_RADIUS_RATIO * 35.0 < 35.0 / 2.0);
/// ```
pub const INDENT_RADIUS_RATIO: f64 = 0.3;

/// Number of spline notches in a detented shaft bore.
pub const DETENT_COUNT: u32 = 20;

/// Cross-section side length of a single detent notch box, in millimeters.
pub const DETENT_NOTCH_MM: f64 = 0.6;

/// Offset of the D-shaft flat from the bore center, as a fraction of the
/// shaft diameter.
pub const DFLAT_OFFSET_RATIO: f64 = 1.0 / 6.0;

/// Extra height added to each end of a shaft negative volume so the
/// subtraction pierces cleanly through both knob caps, in millimeters.
pub const SHAFT_OVERSHOOT_MM: f64 = 1.0;

/// Immutable snapshot of engine settings that can be shared between
/// crates and threaded through the CSG pipeline.
///
/// # Examples
/// ```
/// use config::constants::EngineConfig;
/// let config = EngineConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Numeric tolerance propagated into the CSG kernel.
    pub tolerance: f64,
    /// Segment count for primitives that require polygonal subdivision.
    pub segments: u32,
}

impl EngineConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and segment count.
    ///
    /// # Examples
    /// ```
    /// use config::constants::EngineConfig;
    /// let cfg = EngineConfig::new(1.0e-6, 24).expect("valid config");
    /// assert_eq!(cfg.segments, 24);
    /// ```
    pub fn new(tolerance: f64, segments: u32) -> Result<Self, ConfigError> {
        if tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if segments < 3 {
            return Err(ConfigError::InvalidSegments(segments));
        }
        Ok(Self {
            tolerance,
            segments,
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tolerance: CSG_EPSILON,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero or negative.
    InvalidTolerance(f64),
    /// Raised when the requested segment count is too small to form a polygon.
    InvalidSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidSegments(value) => {
                write!(f, "segments must be >= 3: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
