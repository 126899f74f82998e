//! # Knob Errors
//!
//! Error types for knob assembly.

use knob_mesh::MeshError;
use thiserror::Error;

/// Errors that can occur while assembling a knob solid.
#[derive(Debug, Error)]
pub enum KnobError {
    /// Geometry kernel error from the mesh layer
    #[error("mesh error: {0}")]
    Mesh(#[from] MeshError),

    /// The parameter record violates its invariants
    #[error("invalid knob parameter: {message}")]
    InvalidParameter { message: String },

    /// An unrecognized shaft-type tag reached the parameter boundary
    #[error("unsupported shaft type: {tag}")]
    UnsupportedShaftType { tag: String },

    /// The assembled solid came back with no polygons
    #[error("degenerate knob solid: {message}")]
    DegenerateResult { message: String },
}

impl KnobError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates a degenerate result error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateResult {
            message: message.into(),
        }
    }
}
