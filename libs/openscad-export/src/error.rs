//! # Export Errors
//!
//! Error types for the OpenSCAD emission pipeline.

use thiserror::Error;

/// Errors that can occur while emitting OpenSCAD declarations.
///
/// Every variant except [`ExportError::Io`] is structural: it invalidates a
/// single object's emission but not the batch. Sink failures abort the whole
/// export immediately.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A face outside the supported triangle/quad range
    #[error("Unsupported face: face {face} of \"{object}\" has {arity} vertices (triangles and quads only)")]
    UnsupportedFace {
        object: String,
        face: usize,
        arity: usize,
    },

    /// A face referencing a vertex the mesh does not have
    #[error("Face index out of range: face {face} of \"{object}\" references vertex {index} but the mesh has {vertex_count} vertices")]
    FaceIndexOutOfRange {
        object: String,
        face: usize,
        index: u32,
        vertex_count: usize,
    },

    /// A shape key whose position list is not aligned with the base mesh
    #[error("Shape key mismatch: key \"{key}\" of \"{object}\" has {positions} positions but the mesh has {vertex_count} vertices")]
    ShapeKeyMismatch {
        object: String,
        key: String,
        positions: usize,
        vertex_count: usize,
    },

    /// A relative key declaring a base outside its own set
    #[error("Invalid relative key: key \"{key}\" of \"{object}\" references a key outside its set")]
    InvalidRelativeKey { object: String, key: String },

    /// A shape key set without a reference key
    #[error("Empty shape key set on \"{object}\": a reference key is required")]
    EmptyShapeKeySet { object: String },

    /// Destination sink failure
    #[error("Sink error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Returns true for errors local to one object's geometry, which skip
    /// the object and let the batch continue.
    pub fn is_structural(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
