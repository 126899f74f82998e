//! # Outer Ridge Feature
//!
//! Grip ridges around the knob's outside wall.

use config::constants::{EngineConfig, RIDGE_DEPTH_MM, RIDGE_WIDTH_MM};
use glam::{DMat4, DVec3};
use knob_mesh::primitives::create_cuboid;
use knob_mesh::{csg, Mesh, MeshError};
use std::f64::consts::PI;

/// Returns the ridge placement angles, exactly `2*pi*i/count` radians.
pub fn ridge_angles(count: u32) -> Vec<f64> {
    (0..count)
        .map(|i| 2.0 * PI * i as f64 / count as f64)
        .collect()
}

/// Unions `count` evenly spaced ridge boxes onto the solid.
///
/// Each ridge is a `RIDGE_DEPTH x RIDGE_WIDTH x height` box moved to the
/// outer radius plus half the ridge depth, then rotated about the Z axis
/// to its placement angle. Ridges are accumulated left-to-right; the
/// order does not change the final geometry, only intermediate mesh
/// complexity.
pub fn apply_ridges(
    solid: &Mesh,
    diameter: f64,
    height: f64,
    count: u32,
    config: &EngineConfig,
) -> Result<Mesh, MeshError> {
    let size = DVec3::new(RIDGE_DEPTH_MM, RIDGE_WIDTH_MM, height);
    let offset = DVec3::new(diameter / 2.0 + RIDGE_DEPTH_MM / 2.0, 0.0, height / 2.0);

    let mut result = solid.clone();
    for angle in ridge_angles(count) {
        let mut ridge = create_cuboid(size)?;
        ridge.transform(&(DMat4::from_rotation_z(angle) * DMat4::from_translation(offset)));
        result = csg::union_with_tolerance(&result, &ridge, config.tolerance);
    }

    Ok(result)
}
