//! # Plane for BSP Operations
//!
//! Plane representation with point classification.

use glam::DVec3;

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Classification of a point or polygon relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// In front of the plane (positive side).
    Front,
    /// Behind the plane (negative side).
    Back,
    /// On the plane, within tolerance.
    Coplanar,
    /// Polygon spans the plane (has vertices on both sides).
    Spanning,
}

// =============================================================================
// PLANE
// =============================================================================

/// A plane in 3D space defined by normal and distance from origin.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Normal vector (unit length).
    pub normal: DVec3,
    /// Distance from origin along normal.
    pub w: f64,
}

impl Plane {
    /// Create plane from normal and distance.
    pub fn new(normal: DVec3, w: f64) -> Self {
        Self { normal, w }
    }

    /// Create plane from three points.
    ///
    /// Points should be in counter-clockwise order when viewed from front.
    /// Returns `None` for collinear points.
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3, tolerance: f64) -> Option<Self> {
        let cross = (b - a).cross(c - a);
        if cross.length_squared() < tolerance * tolerance {
            return None;
        }

        let normal = cross / cross.length();
        let w = normal.dot(a);
        Some(Self { normal, w })
    }

    /// Flip the plane in place (reverse normal).
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Classify a point relative to this plane.
    ///
    /// Points within `tolerance` of the plane are coplanar; the symmetric
    /// band keeps nearly-parallel faces from forcing needless splits.
    pub fn classify_point(&self, point: DVec3, tolerance: f64) -> Classification {
        let dist = self.signed_distance(point);
        if dist > tolerance {
            Classification::Front
        } else if dist < -tolerance {
            Classification::Back
        } else {
            Classification::Coplanar
        }
    }

    /// Signed distance from point to plane.
    ///
    /// Positive = front, negative = back, zero = on plane.
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.w
    }
}

// =============================================================================
// TESTS
// =============================================================================
