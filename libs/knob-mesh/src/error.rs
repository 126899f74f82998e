//! # Mesh Errors
//!
//! Error types for mesh generation operations.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A primitive builder received a non-positive dimension or a segment
    /// count below the minimum needed to form a closed shape.
    #[error("invalid geometry parameter: {message}")]
    InvalidGeometryParameter { message: String },

    /// An operation produced or received geometry it cannot work with,
    /// such as an empty mesh handed to the exporter.
    #[error("degenerate result: {message}")]
    DegenerateResult { message: String },
}

impl MeshError {
    /// Creates an invalid geometry parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidGeometryParameter {
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
