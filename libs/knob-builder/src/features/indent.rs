//! # Top Indent Feature
//!
//! Spherical finger indent carved into the knob's top face.

use config::constants::{EngineConfig, INDENT_RADIUS_RATIO};
use glam::{DMat4, DVec3};
use knob_mesh::primitives::create_spherical_cap;
use knob_mesh::{csg, Mesh, MeshError};
use std::f64::consts::{FRAC_PI_2, PI};

/// Subtracts a hemispherical indent from the top face of the solid.
///
/// The cap radius is `INDENT_RADIUS_RATIO * diameter`. The dome points
/// down into the body with the flat face coincident with the top face,
/// so the subtraction carves a bowl without touching the outer wall.
pub fn apply_top_indent(
    solid: &Mesh,
    diameter: f64,
    height: f64,
    config: &EngineConfig,
) -> Result<Mesh, MeshError> {
    let radius = INDENT_RADIUS_RATIO * diameter;
    let rings = (config.segments / 4).max(2);

    let mut cap = create_spherical_cap(radius, rings, config.segments, FRAC_PI_2)?;

    // Half-turn about X points the dome down and keeps the flat face at
    // z = 0; then lift the flat face onto the top of the knob
    cap.transform(
        &(DMat4::from_translation(DVec3::new(0.0, 0.0, height)) * DMat4::from_rotation_x(PI)),
    );

    Ok(csg::difference_with_tolerance(solid, &cap, config.tolerance))
}
