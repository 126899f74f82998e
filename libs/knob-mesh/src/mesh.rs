//! # Mesh Data Structure
//!
//! Core mesh representation with vertices, triangles, and optional normals.

use config::constants::VERTEX_MERGE_EPSILON;
use glam::DVec3;
use std::collections::HashMap;

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the buffer boundary for consumers.
///
/// # Example
///
/// ```rust
/// use knob_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional vertex normals
    normals: Option<Vec<DVec3>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
            normals: None,
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            normals: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.triangles.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Returns the vertex normals.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes and sets vertex normals by averaging adjacent face normals.
    ///
    /// The accumulated cross products are area-weighted, so large faces
    /// dominate the average at shared vertices.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];

            let edge1 = v1 - v0;
            let edge2 = v2 - v0;
            let normal = edge1.cross(edge2);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        // Normalize
        for normal in &mut normals {
            let len = normal.length();
            if len > 0.0 {
                *normal /= len;
            }
        }

        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Transforms all vertices by a 4x4 matrix.
    pub fn transform(&mut self, matrix: &glam::DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }

        // Transform normals if present (use inverse transpose for normals)
        if let Some(normals) = &mut self.normals {
            let normal_matrix = matrix.inverse().transpose();
            for n in normals {
                let transformed = normal_matrix.transform_vector3(*n);
                *n = transformed.normalize_or_zero();
            }
        }
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Merges another mesh's buffers into this one.
    ///
    /// This is raw buffer concatenation with index rebasing. It does not
    /// combine solids; use the boolean operations for that.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);

        for tri in &other.triangles {
            self.triangles
                .push([tri[0] + offset, tri[1] + offset, tri[2] + offset]);
        }

        // Normals stay consistent only if both sides carry them
        match (&mut self.normals, &other.normals) {
            (Some(self_normals), Some(other_normals)) => {
                self_normals.extend_from_slice(other_normals);
            }
            _ => self.normals = None,
        }
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No degenerate triangles (repeated indices or zero area)
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        for tri in &self.triangles {
            // Check indices are valid
            if tri[0] >= vertex_count || tri[1] >= vertex_count || tri[2] >= vertex_count {
                return false;
            }

            // Check for degenerate triangles
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }

            // Check for zero-area triangles
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let area = (v1 - v0).cross(v2 - v0).length();
            if area < VERTEX_MERGE_EPSILON {
                return false;
            }
        }

        true
    }

    /// Checks the closure invariant: every undirected edge is used by
    /// exactly two triangles, once in each direction.
    ///
    /// Exact on indexed meshes with shared vertices (all primitives, and
    /// boolean results whose inputs were never clipped). Boolean results
    /// that were clipped can carry T-vertices on fragment boundaries,
    /// which this check reports as open edges.
    pub fn is_watertight(&self) -> bool {
        if self.triangles.is_empty() {
            return false;
        }

        // (forward, backward) use counts per undirected edge
        let mut edges: HashMap<(u32, u32), (u32, u32)> = HashMap::new();

        for tri in &self.triangles {
            for k in 0..3 {
                let a = tri[k];
                let b = tri[(k + 1) % 3];
                if a == b {
                    return false;
                }
                let entry = edges.entry((a.min(b), a.max(b))).or_insert((0, 0));
                if a < b {
                    entry.0 += 1;
                } else {
                    entry.1 += 1;
                }
            }
        }

        edges.values().all(|&counts| counts == (1, 1))
    }

    /// Computes the signed volume enclosed by the mesh via the divergence
    /// theorem. Positive for consistently outward-wound closed meshes.
    pub fn signed_volume(&self) -> f64 {
        let mut volume = 0.0;

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            volume += v0.dot(v1.cross(v2));
        }

        volume / 6.0
    }

    /// Exports vertices as f32 array for consumers.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports triangle indices as u32 array for consumers.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        let mut result = Vec::with_capacity(self.triangles.len() * 3);
        for tri in &self.triangles {
            result.push(tri[0]);
            result.push(tri[1]);
            result.push(tri[2]);
        }
        result
    }

    /// Exports normals as f32 array for consumers.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            let mut result = Vec::with_capacity(normals.len() * 3);
            for n in normals {
                result.push(n.x as f32);
                result.push(n.y as f32);
                result.push(n.z as f32);
            }
            result
        })
    }
}
