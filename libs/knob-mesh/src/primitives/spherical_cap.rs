//! # Spherical Cap Primitive
//!
//! Generates mesh for partial spheres using latitude/longitude tessellation.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a spherical cap sector, closed by a flat base disk.
///
/// The polar angle is sampled in `[0, polar_range]` from the +Z apex, the
/// azimuth over the full circle. A hemisphere is `polar_range = PI / 2`:
/// dome up to `z = radius`, flat base at `z = 0`.
///
/// # Arguments
///
/// * `radius` - Sphere radius
/// * `rings` - Number of latitude subdivisions between apex and base
/// * `segments` - Number of segments around the azimuth
/// * `polar_range` - Polar angle of the base ring, in `(0, PI)`
///
/// # Returns
///
/// A closed mesh representing the cap.
///
/// # Example
///
/// ```rust
/// use knob_mesh::primitives::create_spherical_cap;
/// use std::f64::consts::FRAC_PI_2;
///
/// let mesh = create_spherical_cap(5.0, 8, 32, FRAC_PI_2).unwrap();
/// assert!(mesh.is_watertight());
/// ```
pub fn create_spherical_cap(
    radius: f64,
    rings: u32,
    segments: u32,
    polar_range: f64,
) -> Result<Mesh, MeshError> {
    if radius <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "spherical cap radius must be positive: {}",
            radius
        )));
    }

    if rings < 1 {
        return Err(MeshError::invalid_parameter(format!(
            "spherical cap rings must be at least 1: {}",
            rings
        )));
    }

    if segments < 3 {
        return Err(MeshError::invalid_parameter(format!(
            "spherical cap segments must be at least 3: {}",
            segments
        )));
    }

    if polar_range <= 0.0 || polar_range >= PI {
        return Err(MeshError::invalid_parameter(format!(
            "spherical cap polar range must be in (0, pi): {}",
            polar_range
        )));
    }

    let mut mesh = Mesh::new();

    let apex = mesh.add_vertex(DVec3::new(0.0, 0.0, radius));

    // Latitude rings from just below the apex down to the base ring
    let mut ring_indices: Vec<Vec<u32>> = Vec::with_capacity(rings as usize);
    for i in 1..=rings {
        let phi = polar_range * i as f64 / rings as f64;
        let ring_radius = radius * phi.sin();
        let z = radius * phi.cos();

        let ring: Vec<u32> = (0..segments)
            .map(|j| {
                let theta = 2.0 * PI * j as f64 / segments as f64;
                let x = ring_radius * theta.cos();
                let y = ring_radius * theta.sin();
                mesh.add_vertex(DVec3::new(x, y, z))
            })
            .collect();
        ring_indices.push(ring);
    }

    // Apex fan to the first ring
    let first_ring = &ring_indices[0];
    for j in 0..segments {
        let j_next = (j + 1) % segments;
        mesh.add_triangle(
            apex,
            first_ring[j as usize],
            first_ring[j_next as usize],
        );
    }

    // Bands between adjacent rings (quads, two triangles each)
    for i in 0..rings as usize - 1 {
        let ring_a = &ring_indices[i];
        let ring_b = &ring_indices[i + 1];

        for j in 0..segments {
            let j_next = (j + 1) % segments;

            let a0 = ring_a[j as usize];
            let a1 = ring_a[j_next as usize];
            let b0 = ring_b[j as usize];
            let b1 = ring_b[j_next as usize];

            mesh.add_triangle(a0, b0, b1);
            mesh.add_triangle(a0, b1, a1);
        }
    }

    // Flat base disk closing the boundary ring, facing away from the dome
    let base_z = radius * polar_range.cos();
    let center = mesh.add_vertex(DVec3::new(0.0, 0.0, base_z));
    let last_ring = &ring_indices[rings as usize - 1];
    for j in 0..segments {
        let j_next = (j + 1) % segments;
        mesh.add_triangle(
            center,
            last_ring[j_next as usize],
            last_ring[j as usize],
        );
    }

    mesh.compute_normals();
    Ok(mesh)
}
