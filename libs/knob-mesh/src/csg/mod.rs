//! # Boolean Operations (CSG)
//!
//! Constructive Solid Geometry operations using BSP trees.
//!
//! ## Algorithm
//!
//! Based on the csg.js algorithm by Evan Wallace:
//! - Union: A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); combine
//! - Difference: A.invert(); A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); combine; result.invert()
//! - Intersection: A.invert(); B.clipTo(A); B.invert(); A.clipTo(B); B.clipTo(A); combine; result.invert()
//!
//! Trees are built fresh per operation and discarded after flattening back
//! to a mesh; the flattened soup is re-indexed with welded vertices and
//! freshly averaged vertex normals.
//!
//! The plane-classification tolerance is an explicit parameter of every
//! operation; the plain entry points use [`config::constants::CSG_EPSILON`].
//!
//! ## Example
//!
//! ```rust
//! use knob_mesh::csg::{union, difference, intersection};
//! use knob_mesh::Mesh;
//!
//! let a = Mesh::new(); // First mesh
//! let b = Mesh::new(); // Second mesh
//! let result = difference(&a, &b);
//! ```

mod bsp;
mod plane;
mod polygon;

use crate::Mesh;
use bsp::BspNode;
use config::constants::{CSG_EPSILON, VERTEX_MERGE_EPSILON};
use glam::DVec3;
use polygon::Polygon;
use std::collections::HashMap;

#[cfg(test)]
mod tests;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Compute union of two meshes with the default tolerance.
pub fn union(a: &Mesh, b: &Mesh) -> Mesh {
    union_with_tolerance(a, b, CSG_EPSILON)
}

/// Compute difference of two meshes (A - B) with the default tolerance.
pub fn difference(a: &Mesh, b: &Mesh) -> Mesh {
    difference_with_tolerance(a, b, CSG_EPSILON)
}

/// Compute intersection of two meshes with the default tolerance.
pub fn intersection(a: &Mesh, b: &Mesh) -> Mesh {
    intersection_with_tolerance(a, b, CSG_EPSILON)
}

/// Compute union of two meshes.
///
/// Returns a mesh covering all geometry from both inputs. An empty input
/// yields the other input unchanged; two empty inputs yield an empty mesh.
///
/// ## Parameters
///
/// - `a`: First mesh
/// - `b`: Second mesh
/// - `tolerance`: Plane-side classification epsilon
pub fn union_with_tolerance(a: &Mesh, b: &Mesh, tolerance: f64) -> Mesh {
    let polys_a = mesh_to_polygons(a, tolerance);
    let polys_b = mesh_to_polygons(b, tolerance);

    if polys_a.is_empty() {
        return b.clone();
    }
    if polys_b.is_empty() {
        return a.clone();
    }

    // Disjoint solids need no clipping; the union is the plain combination
    if !bounding_boxes_overlap(a, b, tolerance) {
        let mut polys = polys_a;
        polys.extend(polys_b);
        return polygons_to_mesh(&polys);
    }

    let mut bsp_a = BspNode::new(polys_a, tolerance);
    let mut bsp_b = BspNode::new(polys_b, tolerance);

    // a.clipTo(b) - remove parts of A inside B
    // b.clipTo(a) - remove parts of B inside A
    // b.invert(); b.clipTo(a); b.invert() - remove coplanar faces from B
    bsp_a.clip_to(&bsp_b, tolerance);
    bsp_b.clip_to(&bsp_a, tolerance);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a, tolerance);
    bsp_b.invert();

    let mut result_polys = bsp_a.all_polygons();
    result_polys.extend(bsp_b.all_polygons());

    polygons_to_mesh(&result_polys)
}

/// Compute difference of two meshes (A - B).
///
/// Returns the geometry of A outside B. Subtracting from an empty mesh
/// yields an empty mesh; subtracting a disjoint or empty B returns A
/// unchanged.
///
/// ## Parameters
///
/// - `a`: First mesh (base)
/// - `b`: Second mesh (to subtract)
/// - `tolerance`: Plane-side classification epsilon
pub fn difference_with_tolerance(a: &Mesh, b: &Mesh, tolerance: f64) -> Mesh {
    let polys_a = mesh_to_polygons(a, tolerance);
    let polys_b = mesh_to_polygons(b, tolerance);

    if polys_a.is_empty() {
        return Mesh::new();
    }
    if polys_b.is_empty() || !bounding_boxes_overlap(a, b, tolerance) {
        return a.clone();
    }

    let mut bsp_a = BspNode::new(polys_a, tolerance);
    let mut bsp_b = BspNode::new(polys_b, tolerance);

    // A - B = ~(~A | B)
    bsp_a.invert();
    bsp_a.clip_to(&bsp_b, tolerance);
    bsp_b.clip_to(&bsp_a, tolerance);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a, tolerance);
    bsp_b.invert();

    let mut result_polys = bsp_a.all_polygons();
    result_polys.extend(bsp_b.all_polygons());

    let mut result = BspNode::new(result_polys, tolerance);
    result.invert();

    polygons_to_mesh(&result.all_polygons())
}

/// Compute intersection of two meshes.
///
/// Returns only the geometry common to both inputs; disjoint or empty
/// inputs yield an empty mesh.
///
/// ## Parameters
///
/// - `a`: First mesh
/// - `b`: Second mesh
/// - `tolerance`: Plane-side classification epsilon
pub fn intersection_with_tolerance(a: &Mesh, b: &Mesh, tolerance: f64) -> Mesh {
    let polys_a = mesh_to_polygons(a, tolerance);
    let polys_b = mesh_to_polygons(b, tolerance);

    if polys_a.is_empty() || polys_b.is_empty() {
        return Mesh::new();
    }
    if !bounding_boxes_overlap(a, b, tolerance) {
        return Mesh::new();
    }

    let mut bsp_a = BspNode::new(polys_a, tolerance);
    let mut bsp_b = BspNode::new(polys_b, tolerance);

    // A & B = ~(~A | ~B)
    bsp_a.invert();
    bsp_b.clip_to(&bsp_a, tolerance);
    bsp_b.invert();
    bsp_a.clip_to(&bsp_b, tolerance);
    bsp_b.clip_to(&bsp_a, tolerance);

    let mut result_polys = bsp_a.all_polygons();
    result_polys.extend(bsp_b.all_polygons());

    let mut result = BspNode::new(result_polys, tolerance);
    result.invert();

    polygons_to_mesh(&result.all_polygons())
}

// =============================================================================
// CONVERSION HELPERS
// =============================================================================

/// Checks whether the axis-aligned bounding boxes of two meshes overlap,
/// expanded by the tolerance so touching solids count as overlapping.
fn bounding_boxes_overlap(a: &Mesh, b: &Mesh, tolerance: f64) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    let (a_min, a_max) = a.bounding_box();
    let (b_min, b_max) = b.bounding_box();

    a_min.x <= b_max.x + tolerance
        && b_min.x <= a_max.x + tolerance
        && a_min.y <= b_max.y + tolerance
        && b_min.y <= a_max.y + tolerance
        && a_min.z <= b_max.z + tolerance
        && b_min.z <= a_max.z + tolerance
}

/// Convert mesh triangles to BSP polygons.
///
/// Degenerate (sliver) triangles that cannot derive a plane are dropped.
fn mesh_to_polygons(mesh: &Mesh, tolerance: f64) -> Vec<Polygon> {
    let mut polygons = Vec::with_capacity(mesh.triangle_count());

    for tri in mesh.triangles() {
        let verts = vec![
            mesh.vertex(tri[0]),
            mesh.vertex(tri[1]),
            mesh.vertex(tri[2]),
        ];

        if let Some(poly) = Polygon::from_vertices(verts, tolerance) {
            polygons.push(poly);
        }
    }

    polygons
}

/// Convert a polygon soup back to an indexed mesh.
///
/// Coincident vertices are welded by quantized position, each convex
/// polygon is fan-triangulated, and vertex normals are recomputed by
/// averaging adjacent face normals.
fn polygons_to_mesh(polygons: &[Polygon]) -> Mesh {
    let mut mesh = Mesh::new();
    let mut index_of: HashMap<(i64, i64, i64), u32> = HashMap::new();

    let quantize = |p: DVec3| {
        (
            (p.x / VERTEX_MERGE_EPSILON).round() as i64,
            (p.y / VERTEX_MERGE_EPSILON).round() as i64,
            (p.z / VERTEX_MERGE_EPSILON).round() as i64,
        )
    };

    for poly in polygons {
        let verts = poly.vertices();
        if verts.len() < 3 {
            continue;
        }

        let indices: Vec<u32> = verts
            .iter()
            .map(|v| {
                *index_of
                    .entry(quantize(*v))
                    .or_insert_with(|| mesh.add_vertex(*v))
            })
            .collect();

        // Fan triangulation; welding can collapse fragments into slivers,
        // which are skipped
        for i in 1..verts.len() - 1 {
            let (a, b, c) = (indices[0], indices[i], indices[i + 1]);
            if a != b && b != c && a != c {
                mesh.add_triangle(a, b, c);
            }
        }
    }

    mesh.compute_normals();
    mesh
}
