//! # Mesh Export
//!
//! Buffer export for rendering consumers and binary STL bytes for the
//! file-writing collaborator. The kernel guarantees consistent outward
//! winding, so exporters recompute face normals from winding and never
//! reorient triangles.

use crate::error::MeshError;
use crate::mesh::Mesh;
use serde::{Deserialize, Serialize};

/// Mesh buffers suitable for rendering consumers.
///
/// Contains flat vertex positions, normals, and triangle indices with
/// `f32` precision at the boundary.
///
/// # Examples
/// ```
/// use knob_mesh::primitives::create_cuboid;
/// use knob_mesh::MeshBuffers;
/// use glam::DVec3;
///
/// let c = create_cuboid(DVec3::splat(1.0)).unwrap();
/// let buffers = MeshBuffers::from_mesh(&c);
///
/// assert_eq!(buffers.vertices.len(), 8 * 3); // 8 vertices * 3 components
/// assert_eq!(buffers.indices.len(), 12 * 3); // 12 triangles * 3 indices
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeshBuffers {
    /// Vertex positions as flat array [x, y, z, x, y, z, ...].
    pub vertices: Vec<f32>,

    /// Vertex normals as flat array, parallel to `vertices`. Empty when
    /// the source mesh carried no normals.
    pub normals: Vec<f32>,

    /// Triangle indices as flat array [i0, i1, i2, i0, i1, i2, ...].
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Creates empty mesh buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Exports a mesh to flat buffers, converting internal `f64`
    /// precision to `f32`.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Self {
            vertices: mesh.vertices_f32(),
            normals: mesh.normals_f32().unwrap_or_default(),
            indices: mesh.indices_u32(),
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Export a mesh as binary STL bytes.
///
/// Binary STL format:
/// - 80-byte header (arbitrary text)
/// - u32 triangle count (little-endian)
/// - For each triangle: 3×f32 normal + 3×(3×f32 vertex) + u16 attribute = 50 bytes
///
/// Face normals are recomputed from the triangle winding.
///
/// # Errors
///
/// Returns [`MeshError::DegenerateResult`] for an empty mesh.
pub fn write_binary_stl(mesh: &Mesh, name: &str) -> Result<Vec<u8>, MeshError> {
    let tri_count = mesh.triangle_count();
    if tri_count == 0 {
        return Err(MeshError::degenerate("mesh has no triangles to export"));
    }

    let file_size = 80 + 4 + tri_count * 50;
    let mut buf = Vec::with_capacity(file_size);

    // 80-byte header
    let header = format!("binary STL: {}", name);
    let header_bytes = header.as_bytes();
    buf.extend_from_slice(&header_bytes[..header_bytes.len().min(80)]);
    buf.resize(80, 0u8);

    // Triangle count
    buf.extend_from_slice(&(tri_count as u32).to_le_bytes());

    // Triangles
    for tri in mesh.triangles() {
        let v0 = mesh.vertex(tri[0]);
        let v1 = mesh.vertex(tri[1]);
        let v2 = mesh.vertex(tri[2]);

        // Face normal from the cross product of the winding
        let normal = (v1 - v0).cross(v2 - v0);
        let len = normal.length();
        let normal = if len > 1e-12 {
            normal / len
        } else {
            glam::DVec3::Z
        };

        // Normal
        buf.extend_from_slice(&(normal.x as f32).to_le_bytes());
        buf.extend_from_slice(&(normal.y as f32).to_le_bytes());
        buf.extend_from_slice(&(normal.z as f32).to_le_bytes());

        // 3 vertices
        for v in [v0, v1, v2] {
            buf.extend_from_slice(&(v.x as f32).to_le_bytes());
            buf.extend_from_slice(&(v.y as f32).to_le_bytes());
            buf.extend_from_slice(&(v.z as f32).to_le_bytes());
        }

        // Attribute byte count (unused)
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    Ok(buf)
}
