//! # Knob Mesh
//!
//! Geometry kernel for the parametric knob pipeline.
//! Produces triangle meshes from primitive builders and combines them
//! with boolean operations into printable solids.
//!
//! ## Architecture
//!
//! ```text
//! primitives (Mesh) → csg (boolean ops) → export (buffers / STL bytes)
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are pure Rust with no native dependencies:
//! - **Boolean Operations**: BSP trees (csg.js algorithm)
//! - **Triangulation**: Fan triangulation of convex polygons
//! - **Primitives**: Custom mesh generation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use knob_mesh::{csg, primitives};
//!
//! let body = primitives::create_cylinder(17.5, 14.0, 32, true)?;
//! let bore = primitives::create_cylinder(3.0, 16.0, 32, true)?;
//! let solid = csg::difference(&body, &bore);
//! ```

pub mod csg;
pub mod error;
pub mod export;
pub mod mesh;
pub mod primitives;

pub use csg::{difference, intersection, union};
pub use error::MeshError;
pub use export::MeshBuffers;
pub use mesh::Mesh;
