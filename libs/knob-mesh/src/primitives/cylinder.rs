//! # Cylinder Primitive
//!
//! Generates mesh for cylinder shapes.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a cylinder mesh around the Z axis with its base at z = 0.
///
/// # Arguments
///
/// * `radius` - Radius of the circular cross-section
/// * `height` - Height along the Z axis
/// * `segments` - Number of segments around the circumference
/// * `capped` - If true, close both ends with N-gon fan caps
///
/// # Returns
///
/// A mesh representing the cylinder; closed when `capped` is true, an
/// open tube otherwise.
///
/// # Example
///
/// ```rust
/// use knob_mesh::primitives::create_cylinder;
///
/// let mesh = create_cylinder(5.0, 10.0, 32, true).unwrap();
/// assert!(mesh.is_watertight());
/// ```
pub fn create_cylinder(
    radius: f64,
    height: f64,
    segments: u32,
    capped: bool,
) -> Result<Mesh, MeshError> {
    if radius <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "cylinder radius must be positive: {}",
            radius
        )));
    }

    if height <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "cylinder height must be positive: {}",
            height
        )));
    }

    if segments < 3 {
        return Err(MeshError::invalid_parameter(format!(
            "cylinder segments must be at least 3: {}",
            segments
        )));
    }

    let mut mesh = Mesh::new();

    // Evenly spaced angular samples around the Z axis
    let bottom_indices: Vec<u32> = (0..segments)
        .map(|j| {
            let theta = 2.0 * PI * j as f64 / segments as f64;
            let x = radius * theta.cos();
            let y = radius * theta.sin();
            mesh.add_vertex(DVec3::new(x, y, 0.0))
        })
        .collect();

    let top_indices: Vec<u32> = (0..segments)
        .map(|j| {
            let theta = 2.0 * PI * j as f64 / segments as f64;
            let x = radius * theta.cos();
            let y = radius * theta.sin();
            mesh.add_vertex(DVec3::new(x, y, height))
        })
        .collect();

    // Side quads between the two rings, two triangles each
    for j in 0..segments {
        let j_next = (j + 1) % segments;

        let b0 = bottom_indices[j as usize];
        let b1 = bottom_indices[j_next as usize];
        let t0 = top_indices[j as usize];
        let t1 = top_indices[j_next as usize];

        mesh.add_triangle(b0, b1, t1);
        mesh.add_triangle(b0, t1, t0);
    }

    if capped {
        // Bottom cap (fan, wound to face -Z)
        for j in 1..segments - 1 {
            mesh.add_triangle(
                bottom_indices[0],
                bottom_indices[(j + 1) as usize],
                bottom_indices[j as usize],
            );
        }

        // Top cap (fan, wound to face +Z)
        for j in 1..segments - 1 {
            mesh.add_triangle(
                top_indices[0],
                top_indices[j as usize],
                top_indices[(j + 1) as usize],
            );
        }
    }

    mesh.compute_normals();
    Ok(mesh)
}
