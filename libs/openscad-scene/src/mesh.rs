//! # Mesh Snapshot
//!
//! Finalized polygon mesh as handed over by the host application:
//! vertex positions plus triangle/quad faces indexing into them.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// One polygon face, an ordered list of indices into the owning mesh's
/// vertex list.
///
/// The container accepts any arity; the exporter only emits triangles and
/// quads and rejects everything else as a structural error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    indices: Vec<u32>,
}

impl Face {
    /// Creates a face from an arbitrary index list.
    pub fn new(indices: Vec<u32>) -> Self {
        Self { indices }
    }

    /// Creates a triangle face.
    pub fn triangle(a: u32, b: u32, c: u32) -> Self {
        Self {
            indices: vec![a, b, c],
        }
    }

    /// Creates a quad face.
    pub fn quad(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self {
            indices: vec![a, b, c, d],
        }
    }

    /// Returns the vertex indices in source order.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the number of vertex references.
    #[inline]
    pub fn arity(&self) -> usize {
        self.indices.len()
    }
}

/// A polygon mesh with vertices and faces.
///
/// All geometry uses f64, matching the rest of the pipeline; precision is
/// only reduced at text-emission time.
///
/// # Example
///
/// ```rust
/// use openscad_scene::{Face, Mesh};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_face(Face::triangle(0, 1, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Polygon faces referencing the vertex list
    faces: Vec<Face>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no vertices and no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a face.
    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }
}
