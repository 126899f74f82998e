//! End-to-end knob build scenarios, from parameter record to solid (and
//! out through the export collaborator).

use config::constants::{DEFAULT_SEGMENTS, RIDGE_DEPTH_MM};
use knob_builder::{build_knob, KnobError, KnobParams, ShaftKind};
use knob_mesh::export::{write_binary_stl, MeshBuffers};
use knob_mesh::primitives::create_cylinder;
use std::f64::consts::PI;

fn plain_params() -> KnobParams {
    KnobParams {
        diameter: 35.0,
        height: 14.0,
        shaft: ShaftKind::Round,
        shaft_diameter: 6.0,
        outer_ridged: false,
        ridge_count: 1,
        top_indent: false,
    }
}

/// Volume of the tessellated cylinder body (an N-gon prism).
fn prism_volume(radius: f64, height: f64, segments: u32) -> f64 {
    let n = segments as f64;
    0.5 * n * radius * radius * (2.0 * PI / n).sin() * height
}

fn radial(v: &glam::DVec3) -> f64 {
    (v.x * v.x + v.y * v.y).sqrt()
}

#[test]
fn scenario_round_bore_knob() {
    let solid = build_knob(&plain_params()).unwrap();

    // Outer boundary is the 35 mm body
    let (min, max) = solid.bounding_box();
    assert!((max.x - 17.5).abs() < 1e-9);
    assert!((min.x + 17.5).abs() < 1e-9);
    assert!(min.z.abs() < 1e-9);
    assert!((max.z - 14.0).abs() < 1e-9);

    // A central round bore of radius 3 runs through the solid: the
    // innermost vertices sit on the bore wall, between the tessellated
    // chord radius and the nominal radius
    let chord_radius = 3.0 * (PI / DEFAULT_SEGMENTS as f64).cos();
    let min_radial = solid
        .vertices()
        .iter()
        .map(radial)
        .fold(f64::INFINITY, f64::min);
    assert!(min_radial < 3.0 + 1e-6);
    assert!(min_radial > chord_radius - 1e-6);

    // Exactly the bore prism is removed (the tool is coaxial and taller)
    let expected = prism_volume(17.5, 14.0, DEFAULT_SEGMENTS) - prism_volume(3.0, 14.0, DEFAULT_SEGMENTS);
    assert!((solid.signed_volume() - expected).abs() < 1e-6);
}

#[test]
fn scenario_zero_shaft_skips_subtraction() {
    let params = KnobParams {
        shaft_diameter: 0.0,
        ..plain_params()
    };

    let solid = build_knob(&params).unwrap();
    let base = create_cylinder(17.5, 14.0, DEFAULT_SEGMENTS, true).unwrap();

    // No boolean ran: the output is the unmodified base cylinder mesh
    assert_eq!(solid.vertex_count(), base.vertex_count());
    assert_eq!(solid.triangle_count(), base.triangle_count());
    assert_eq!(solid.vertices(), base.vertices());
    assert_eq!(solid.triangles(), base.triangles());
}

#[test]
fn scenario_fifty_ridges() {
    let params = KnobParams {
        shaft_diameter: 0.0,
        outer_ridged: true,
        ridge_count: 50,
        ..plain_params()
    };

    let solid = build_knob(&params).unwrap();

    // Ridges extend the footprint by the ridge depth
    let (_, max) = solid.bounding_box();
    assert!((max.x - (17.5 + RIDGE_DEPTH_MM)).abs() < 1e-9);

    // Material exists at every expected placement: each ridge is
    // centered at angle 2*pi*i/50 on the circle of radius D/2 + depth/2
    let ridge_radius = 17.5 + RIDGE_DEPTH_MM / 2.0;
    for i in 0..50 {
        let angle = 2.0 * PI * i as f64 / 50.0;
        let cx = ridge_radius * angle.cos();
        let cy = ridge_radius * angle.sin();

        let found = solid.vertices().iter().any(|v| {
            radial(v) > 17.5 + 1e-9
                && ((v.x - cx).powi(2) + (v.y - cy).powi(2)).sqrt() < 1.0
        });
        assert!(found, "no ridge material at angle index {i}");
    }

    // Ridges only add material outside the base cylinder
    let base_volume = prism_volume(17.5, 14.0, DEFAULT_SEGMENTS);
    assert!(solid.signed_volume() > base_volume);
}

#[test]
fn scenario_dshape_bore() {
    let params = KnobParams {
        shaft: ShaftKind::DShape,
        ..plain_params()
    };

    let solid = build_knob(&params).unwrap();
    assert!(!solid.is_empty());

    // The bore wall carries the flat chord at x = d/6 = 1
    let flat_vertices: Vec<_> = solid
        .vertices()
        .iter()
        .filter(|v| (v.x - 1.0).abs() < 1e-6)
        .collect();
    assert!(!flat_vertices.is_empty());

    // Inside the bore region, everything stops at the flat: any vertex
    // closer to the axis than the bore wall lies on the x = 1 plane
    let chord_radius = 3.0 * (PI / DEFAULT_SEGMENTS as f64).cos();
    for v in solid.vertices() {
        if radial(v) < chord_radius - 1e-6 {
            assert!(
                (v.x - 1.0).abs() < 1e-6,
                "vertex inside bore not on the flat: {v:?}"
            );
        }
    }

    // The D bore removes less material than the full round bore
    let round = build_knob(&plain_params()).unwrap();
    assert!(solid.signed_volume() > round.signed_volume());
}

#[test]
fn scenario_oversized_shaft_is_rejected() {
    let params = KnobParams {
        shaft_diameter: 40.0,
        ..plain_params()
    };

    assert!(matches!(
        build_knob(&params),
        Err(KnobError::InvalidParameter { .. })
    ));

    // Equal diameters leave no wall either
    let params = KnobParams {
        shaft_diameter: 35.0,
        ..plain_params()
    };
    assert!(build_knob(&params).is_err());
}

#[test]
fn scenario_detented_bore_removes_more_than_round() {
    let round = build_knob(&plain_params()).unwrap();

    let detented = build_knob(&KnobParams {
        shaft: ShaftKind::Detented,
        ..plain_params()
    })
    .unwrap();

    assert!(detented.signed_volume() < round.signed_volume() - 1.0);
}

#[test]
fn scenario_indented_knob_keeps_bore() {
    let params = KnobParams {
        top_indent: true,
        ..plain_params()
    };

    let solid = build_knob(&params).unwrap();

    let plain = build_knob(&plain_params()).unwrap();
    assert!(solid.signed_volume() < plain.signed_volume());

    // The bore still runs through
    let chord_radius = 3.0 * (PI / DEFAULT_SEGMENTS as f64).cos();
    let min_radial = solid
        .vertices()
        .iter()
        .map(radial)
        .fold(f64::INFINITY, f64::min);
    assert!(min_radial > chord_radius - 1e-6);
}

#[test]
fn scenario_export_handoff() {
    let solid = build_knob(&plain_params()).unwrap();

    let buffers = MeshBuffers::from_mesh(&solid);
    assert_eq!(buffers.vertex_count(), solid.vertex_count());
    assert_eq!(buffers.triangle_count(), solid.triangle_count());
    assert_eq!(buffers.normals.len(), buffers.vertices.len());

    let stl = write_binary_stl(&solid, "knob").unwrap();
    assert_eq!(stl.len(), 80 + 4 + solid.triangle_count() * 50);
}
