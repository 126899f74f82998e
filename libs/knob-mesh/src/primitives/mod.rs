//! # Primitives
//!
//! Mesh generation for the base solids of the knob pipeline
//! (cylinder, cuboid, spherical cap).
//!
//! All builders validate their inputs before generating anything and
//! return meshes whose normals are computed from vertex winding.

pub mod cuboid;
pub mod cylinder;
pub mod spherical_cap;

pub use cuboid::create_cuboid;
pub use cylinder::create_cylinder;
pub use spherical_cap::create_spherical_cap;
