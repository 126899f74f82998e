//! # Boolean Operation Tests
//!
//! Behavior and algebra-law tests for the CSG boolean operations.

use super::*;
use crate::primitives::create_cuboid;
use glam::DVec3;

/// Creates a unit cube centered at origin for testing.
fn test_cube() -> Mesh {
    create_cuboid(DVec3::ONE).unwrap()
}

/// Creates a centered cube of the given size at a specific position.
fn cube_at(pos: DVec3, size: f64) -> Mesh {
    let mut mesh = create_cuboid(DVec3::splat(size)).unwrap();
    mesh.translate(pos);
    mesh
}

fn assert_volume(mesh: &Mesh, expected: f64) {
    let volume = mesh.signed_volume();
    assert!(
        (volume - expected).abs() < 1.0e-6,
        "expected volume {expected}, got {volume}"
    );
}

// =============================================================================
// UNION TESTS
// =============================================================================

#[test]
fn test_union_empty_a() {
    let a = Mesh::new();
    let b = test_cube();

    let result = union(&a, &b);

    // Result should be B
    assert_eq!(result.vertex_count(), b.vertex_count());
}

#[test]
fn test_union_empty_b() {
    let a = test_cube();
    let b = Mesh::new();

    let result = union(&a, &b);

    // Result should be A
    assert_eq!(result.vertex_count(), a.vertex_count());
}

#[test]
fn test_union_non_overlapping() {
    // Two cubes far apart
    let a = cube_at(DVec3::new(-5.0, 0.0, 0.0), 1.0);
    let b = cube_at(DVec3::new(5.0, 0.0, 0.0), 1.0);

    let result = union(&a, &b);

    // Both cubes survive intact
    assert_eq!(result.vertex_count(), 16);
    assert_eq!(result.triangle_count(), 24);
    assert_volume(&result, 2.0);
}

#[test]
fn test_union_disjoint_is_watertight() {
    let a = cube_at(DVec3::new(-5.0, 0.0, 0.0), 1.0);
    let b = cube_at(DVec3::new(5.0, 0.0, 0.0), 1.0);

    let result = union(&a, &b);

    assert!(result.is_watertight());
}

#[test]
fn test_union_disjoint_polygon_count_bound() {
    let a = cube_at(DVec3::new(-5.0, 0.0, 0.0), 1.0);
    let b = cube_at(DVec3::new(5.0, 0.0, 0.0), 1.0);

    let result = union(&a, &b);

    assert!(result.triangle_count() >= a.triangle_count().max(b.triangle_count()));
}

#[test]
fn test_union_overlapping_volume() {
    // Two size-2 cubes overlapping by a 1x2x2 slab
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::new(1.0, 0.0, 0.0), 2.0);

    let result = union(&a, &b);

    assert!(result.vertex_count() > 0);
    assert_volume(&result, 8.0 + 8.0 - 4.0);
}

#[test]
fn test_union_identical() {
    // Two identical cubes
    let a = test_cube();
    let b = test_cube();

    let result = union(&a, &b);

    // Result should have geometry (may have some artifacts)
    assert!(result.vertex_count() > 0);
}

#[test]
fn test_union_recomputes_normals() {
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::new(1.0, 0.0, 0.0), 2.0);

    let result = union(&a, &b);

    let normals = result.normals().expect("boolean results carry normals");
    assert_eq!(normals.len(), result.vertex_count());
}

// =============================================================================
// DIFFERENCE TESTS
// =============================================================================

#[test]
fn test_difference_empty_a() {
    let a = Mesh::new();
    let b = test_cube();

    let result = difference(&a, &b);

    assert_eq!(result.vertex_count(), 0);
}

#[test]
fn test_difference_empty_b() {
    let a = test_cube();
    let b = Mesh::new();

    let result = difference(&a, &b);

    // Result should be A
    assert_eq!(result.vertex_count(), a.vertex_count());
}

#[test]
fn test_difference_non_overlapping_returns_a_unchanged() {
    let a = cube_at(DVec3::new(-5.0, 0.0, 0.0), 1.0);
    let b = cube_at(DVec3::new(5.0, 0.0, 0.0), 1.0);

    let result = difference(&a, &b);

    assert_eq!(result.vertex_count(), a.vertex_count());
    assert_eq!(result.triangle_count(), a.triangle_count());
    assert_volume(&result, 1.0);
}

#[test]
fn test_difference_contained_volume() {
    // Size-2 cube fully inside a size-4 cube
    let a = cube_at(DVec3::ZERO, 4.0);
    let b = cube_at(DVec3::ZERO, 2.0);

    let result = difference(&a, &b);

    assert!(result.vertex_count() > 0);
    assert_volume(&result, 64.0 - 8.0);
}

#[test]
fn test_difference_overlapping_volume() {
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::new(1.0, 0.0, 0.0), 2.0);

    let result = difference(&a, &b);

    assert_volume(&result, 8.0 - 4.0);
}

#[test]
fn test_difference_double_subtraction_idempotent() {
    // Subtracting an already-removed volume changes nothing
    let a = cube_at(DVec3::ZERO, 4.0);
    let b = cube_at(DVec3::new(1.0, 0.0, 0.0), 2.0);

    let once = difference(&a, &b);
    let twice = difference(&once, &b);

    let v_once = once.signed_volume();
    let v_twice = twice.signed_volume();
    assert!(
        (v_once - v_twice).abs() < 1.0e-6,
        "double subtraction changed volume: {v_once} -> {v_twice}"
    );
}

// =============================================================================
// INTERSECTION TESTS
// =============================================================================

#[test]
fn test_intersection_empty_a() {
    let a = Mesh::new();
    let b = test_cube();

    let result = intersection(&a, &b);

    assert_eq!(result.vertex_count(), 0);
}

#[test]
fn test_intersection_empty_b() {
    let a = test_cube();
    let b = Mesh::new();

    let result = intersection(&a, &b);

    assert_eq!(result.vertex_count(), 0);
}

#[test]
fn test_intersection_non_overlapping() {
    let a = cube_at(DVec3::new(-5.0, 0.0, 0.0), 1.0);
    let b = cube_at(DVec3::new(5.0, 0.0, 0.0), 1.0);

    let result = intersection(&a, &b);

    assert_eq!(result.vertex_count(), 0);
}

#[test]
fn test_intersection_overlapping_volume() {
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::new(1.0, 0.0, 0.0), 2.0);

    let result = intersection(&a, &b);

    assert!(result.vertex_count() > 0);
    assert_volume(&result, 4.0);
}

#[test]
fn test_intersection_contained_is_inner_solid() {
    let a = cube_at(DVec3::ZERO, 4.0);
    let b = cube_at(DVec3::ZERO, 2.0);

    let result = intersection(&a, &b);

    assert_volume(&result, 8.0);
}

// =============================================================================
// BOUNDING BOX TESTS
// =============================================================================

#[test]
fn test_bounding_boxes_overlap_true() {
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::new(1.0, 0.0, 0.0), 2.0);

    assert!(bounding_boxes_overlap(&a, &b, CSG_EPSILON));
}

#[test]
fn test_bounding_boxes_overlap_false() {
    let a = cube_at(DVec3::new(-5.0, 0.0, 0.0), 1.0);
    let b = cube_at(DVec3::new(5.0, 0.0, 0.0), 1.0);

    assert!(!bounding_boxes_overlap(&a, &b, CSG_EPSILON));
}

#[test]
fn test_bounding_boxes_overlap_touching() {
    // Cubes just touching at a face count as overlapping
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::new(2.0, 0.0, 0.0), 2.0);

    assert!(bounding_boxes_overlap(&a, &b, CSG_EPSILON));
}

// =============================================================================
// INTEGRATION TESTS
// =============================================================================

#[test]
fn test_boolean_chain() {
    // (A ∪ B) - C
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::new(1.0, 0.0, 0.0), 2.0);
    let c = cube_at(DVec3::new(0.5, 0.0, 0.0), 1.0);

    let ab = union(&a, &b);
    let result = difference(&ab, &c);

    assert!(result.vertex_count() > 0);
    assert_volume(&result, 12.0 - 1.0);
}

#[test]
fn test_mesh_to_polygons_roundtrip() {
    let mesh = test_cube();
    let polys = mesh_to_polygons(&mesh, CSG_EPSILON);
    let result = polygons_to_mesh(&polys);

    assert_eq!(result.triangle_count(), mesh.triangle_count());
    assert!((result.signed_volume() - mesh.signed_volume()).abs() < 1.0e-9);
}

#[test]
fn test_polygons_to_mesh_welds_vertices() {
    let mesh = test_cube();
    let polys = mesh_to_polygons(&mesh, CSG_EPSILON);
    let result = polygons_to_mesh(&polys);

    // 12 triangles reference only the 8 cube corners after welding
    assert_eq!(result.vertex_count(), 8);
    assert!(result.is_watertight());
}

#[test]
fn test_explicit_tolerance_variant() {
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::new(1.0, 0.0, 0.0), 2.0);

    let result = union_with_tolerance(&a, &b, 1.0e-7);

    assert!(result.vertex_count() > 0);
    assert_volume(&result, 12.0);
}
