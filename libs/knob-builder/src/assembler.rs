//! # Knob Assembler
//!
//! Fixed linear pipeline producing one solid per parameter record:
//! base cylinder, optional outer ridges, optional top indent, optional
//! shaft bore. There are no back-edges and no partial results; the
//! caller receives a complete solid or an error.

use crate::error::KnobError;
use crate::features::{indent, ridges, shaft};
use crate::params::KnobParams;
use config::constants::EngineConfig;
use knob_mesh::primitives::create_cylinder;
use knob_mesh::{csg, Mesh};
use rayon::prelude::*;

/// Builds a knob solid with the default engine configuration.
///
/// # Errors
///
/// - [`KnobError::InvalidParameter`] for an invalid parameter record
/// - [`KnobError::Mesh`] when a primitive builder rejects its inputs
/// - [`KnobError::DegenerateResult`] when the assembled solid is empty
///
/// # Example
///
/// ```rust
/// use knob_builder::{build_knob, KnobParams};
///
/// let solid = build_knob(&KnobParams::default()).unwrap();
/// assert!(!solid.is_empty());
/// ```
pub fn build_knob(params: &KnobParams) -> Result<Mesh, KnobError> {
    build_knob_with(params, &EngineConfig::default())
}

/// Builds a knob solid with an explicit engine configuration.
///
/// The configuration's tolerance is threaded through every boolean
/// operation and its segment count through every curved primitive, so
/// test suites can probe near-degenerate inputs deterministically.
pub fn build_knob_with(params: &KnobParams, config: &EngineConfig) -> Result<Mesh, KnobError> {
    params.validate()?;

    // 1. Base cylinder body
    let mut solid = create_cylinder(
        params.diameter / 2.0,
        params.height,
        config.segments,
        true,
    )?;

    // 2. Outer grip ridges
    if params.outer_ridged {
        solid = ridges::apply_ridges(
            &solid,
            params.diameter,
            params.height,
            params.ridge_count,
            config,
        )?;
    }

    // 3. Top indent
    if params.top_indent {
        solid = indent::apply_top_indent(&solid, params.diameter, params.height, config)?;
    }

    // 4. Shaft bore
    if params.shaft_diameter > 0.0 {
        let profile = shaft::profile_for(params.shaft);
        let tool = profile.negative_volume(params.shaft_diameter, params.height, config)?;
        solid = csg::difference_with_tolerance(&solid, &tool, config.tolerance);
    }

    // A pathological parameter set can clip the body away entirely; that
    // is reported, never silently repaired
    if solid.is_empty() {
        return Err(KnobError::degenerate("assembled solid has no polygons"));
    }

    Ok(solid)
}

/// Builds many knobs in parallel, one worker per parameter record.
///
/// Each build is pure and owns its meshes, so records are processed as an
/// embarrassingly-parallel map with no coordination.
pub fn build_many(params: &[KnobParams]) -> Vec<Result<Mesh, KnobError>> {
    params.par_iter().map(build_knob).collect()
}
