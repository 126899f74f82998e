//! # Polygon for BSP Operations
//!
//! Convex polygon with plane and splitting support.

use super::plane::{Classification, Plane};
use glam::DVec3;

// =============================================================================
// POLYGON
// =============================================================================

/// A convex polygon with associated plane.
///
/// Vertices carry positions only; vertex normals are recomputed from the
/// final polygon soup after boolean operations, so nothing interpolated
/// through clipping is ever trusted.
#[derive(Debug, Clone)]
pub struct Polygon {
    /// Vertices in counter-clockwise order.
    vertices: Vec<DVec3>,
    /// Plane containing this polygon.
    plane: Plane,
}

impl Polygon {
    /// Create polygon from vertices.
    ///
    /// Returns None if the vertices are too few or too degenerate to
    /// derive a plane.
    pub fn from_vertices(vertices: Vec<DVec3>, tolerance: f64) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }

        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2], tolerance)?;
        Some(Self { vertices, plane })
    }

    /// Get polygon vertices.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Get polygon plane.
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Flip the polygon in place (reverse winding order and plane).
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane.flip();
    }

    /// Classify this polygon relative to a plane.
    pub fn classify(&self, plane: &Plane, tolerance: f64) -> Classification {
        let mut front_count = 0;
        let mut back_count = 0;

        for v in &self.vertices {
            match plane.classify_point(*v, tolerance) {
                Classification::Front => front_count += 1,
                Classification::Back => back_count += 1,
                _ => {}
            }
        }

        if front_count > 0 && back_count > 0 {
            Classification::Spanning
        } else if front_count > 0 {
            Classification::Front
        } else if back_count > 0 {
            Classification::Back
        } else {
            Classification::Coplanar
        }
    }

    /// Split polygon by a plane into the csg.js buckets.
    ///
    /// ## Parameters
    ///
    /// - `plane`: Splitting plane
    /// - `tolerance`: Coplanarity band for point classification
    /// - `coplanar_front`: Output for coplanar polygons facing same direction
    /// - `coplanar_back`: Output for coplanar polygons facing opposite direction
    /// - `front`: Output for polygons in front of plane
    /// - `back`: Output for polygons behind plane
    ///
    /// Fragments reduced to fewer than 3 vertices are discarded.
    pub fn split(
        &self,
        plane: &Plane,
        tolerance: f64,
        coplanar_front: &mut Vec<Polygon>,
        coplanar_back: &mut Vec<Polygon>,
        front: &mut Vec<Polygon>,
        back: &mut Vec<Polygon>,
    ) {
        match self.classify(plane, tolerance) {
            Classification::Coplanar => {
                // Check if polygon faces same direction as plane
                if self.plane.normal.dot(plane.normal) > 0.0 {
                    coplanar_front.push(self.clone());
                } else {
                    coplanar_back.push(self.clone());
                }
            }
            Classification::Front => {
                front.push(self.clone());
            }
            Classification::Back => {
                back.push(self.clone());
            }
            Classification::Spanning => {
                // Split the polygon along the plane
                let mut front_verts = Vec::with_capacity(self.vertices.len() + 1);
                let mut back_verts = Vec::with_capacity(self.vertices.len() + 1);

                for i in 0..self.vertices.len() {
                    let j = (i + 1) % self.vertices.len();
                    let vi = self.vertices[i];
                    let vj = self.vertices[j];

                    let ti = plane.classify_point(vi, tolerance);
                    let tj = plane.classify_point(vj, tolerance);

                    // Add current vertex to appropriate list(s)
                    if ti != Classification::Back {
                        front_verts.push(vi);
                    }
                    if ti != Classification::Front {
                        back_verts.push(vi);
                    }

                    // If edge crosses plane, add intersection point to both
                    if (ti == Classification::Front && tj == Classification::Back)
                        || (ti == Classification::Back && tj == Classification::Front)
                    {
                        let di = plane.signed_distance(vi);
                        let dj = plane.signed_distance(vj);
                        let t = di / (di - dj);
                        let intersection = vi.lerp(vj, t);
                        front_verts.push(intersection);
                        back_verts.push(intersection);
                    }
                }

                if front_verts.len() >= 3 {
                    if let Some(poly) = Polygon::from_vertices(front_verts, tolerance) {
                        front.push(poly);
                    }
                }
                if back_verts.len() >= 3 {
                    if let Some(poly) = Polygon::from_vertices(back_verts, tolerance) {
                        back.push(poly);
                    }
                }
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
