//! # Shaft Bore Strategies
//!
//! Each shaft kind produces a negative-volume tool mesh, taller than the
//! knob and centered on the Z axis, that the assembler subtracts from the
//! body. New shaft types implement [`ShaftProfile`] rather than branching
//! inside the assembler.

use crate::params::ShaftKind;
use config::constants::{
    EngineConfig, DETENT_COUNT, DETENT_NOTCH_MM, DFLAT_OFFSET_RATIO, SHAFT_OVERSHOOT_MM,
};
use glam::{DMat4, DVec3};
use knob_mesh::primitives::{create_cuboid, create_cylinder};
use knob_mesh::{csg, Mesh, MeshError};
use std::f64::consts::PI;

/// Capability of one shaft kind: produce a negative-volume mesh, taller
/// than the knob, centered on the vertical axis.
pub trait ShaftProfile {
    /// Builds the bore tool for the given shaft diameter and knob height.
    ///
    /// The tool spans `[-SHAFT_OVERSHOOT, height + SHAFT_OVERSHOOT]` on
    /// the Z axis so the subtraction pierces cleanly through both caps.
    fn negative_volume(
        &self,
        shaft_diameter: f64,
        knob_height: f64,
        config: &EngineConfig,
    ) -> Result<Mesh, MeshError>;
}

/// Plain round bore.
pub struct RoundShaft;

/// Round bore flattened on one side for potentiometer D-shafts.
pub struct DShapeShaft;

/// Round bore with spline notches that resist rotation.
pub struct DetentedShaft;

/// Returns the strategy for a shaft kind.
pub fn profile_for(kind: ShaftKind) -> &'static dyn ShaftProfile {
    match kind {
        ShaftKind::Round => &RoundShaft,
        ShaftKind::DShape => &DShapeShaft,
        ShaftKind::Detented => &DetentedShaft,
    }
}

/// Base bore cylinder shared by all strategies.
fn bore_cylinder(
    shaft_diameter: f64,
    knob_height: f64,
    config: &EngineConfig,
) -> Result<Mesh, MeshError> {
    let tool_height = knob_height + 2.0 * SHAFT_OVERSHOOT_MM;
    let mut tool = create_cylinder(shaft_diameter / 2.0, tool_height, config.segments, true)?;
    tool.translate(DVec3::new(0.0, 0.0, -SHAFT_OVERSHOOT_MM));
    Ok(tool)
}

impl ShaftProfile for RoundShaft {
    fn negative_volume(
        &self,
        shaft_diameter: f64,
        knob_height: f64,
        config: &EngineConfig,
    ) -> Result<Mesh, MeshError> {
        bore_cylinder(shaft_diameter, knob_height, config)
    }
}

impl ShaftProfile for DShapeShaft {
    fn negative_volume(
        &self,
        shaft_diameter: f64,
        knob_height: f64,
        config: &EngineConfig,
    ) -> Result<Mesh, MeshError> {
        let tool = bore_cylinder(shaft_diameter, knob_height, config)?;

        let radius = shaft_diameter / 2.0;
        let flat_offset = shaft_diameter * DFLAT_OFFSET_RATIO;
        let tool_height = knob_height + 2.0 * SHAFT_OVERSHOOT_MM;

        // Cutter box occupies x >= flat_offset across the whole tool,
        // leaving the flat chord of the D profile
        let mut cutter = create_cuboid(DVec3::new(
            radius,
            shaft_diameter + 2.0,
            tool_height + 2.0,
        ))?;
        cutter.translate(DVec3::new(
            flat_offset + radius / 2.0,
            0.0,
            knob_height / 2.0,
        ));

        Ok(csg::difference_with_tolerance(
            &tool,
            &cutter,
            config.tolerance,
        ))
    }
}

impl ShaftProfile for DetentedShaft {
    fn negative_volume(
        &self,
        shaft_diameter: f64,
        knob_height: f64,
        config: &EngineConfig,
    ) -> Result<Mesh, MeshError> {
        let mut tool = bore_cylinder(shaft_diameter, knob_height, config)?;

        let radius = shaft_diameter / 2.0;
        let tool_height = knob_height + 2.0 * SHAFT_OVERSHOOT_MM;
        let notch_size = DVec3::new(DETENT_NOTCH_MM, DETENT_NOTCH_MM, tool_height);
        let offset = DVec3::new(radius, 0.0, knob_height / 2.0);

        // Notch boxes straddle the bore wall so the subtraction leaves
        // grooves the shaft's splines can seat into
        for i in 0..DETENT_COUNT {
            let angle = 2.0 * PI * i as f64 / DETENT_COUNT as f64;
            let mut notch = create_cuboid(notch_size)?;
            notch.transform(&(DMat4::from_rotation_z(angle) * DMat4::from_translation(offset)));
            tool = csg::union_with_tolerance(&tool, &notch, config.tolerance);
        }

        Ok(tool)
    }
}
