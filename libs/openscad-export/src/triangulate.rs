//! # Winding Correction and Fan Triangulation
//!
//! OpenSCAD's polyhedron expects the opposite winding order from the source
//! meshes, so every emitted triangle is reversed. Quads are split into two
//! triangles sharing the first/third-vertex diagonal; anything outside the
//! triangle/quad range is rejected.

use crate::error::ExportError;
use openscad_scene::Face;

/// Reverses winding and fan-triangulates one face's vertex indices.
///
/// A triangle `(a, b, c)` becomes `(c, b, a)`; a quad `(a, b, c, d)` becomes
/// `(c, b, a)` and `(d, c, a)`. Returns `None` for unsupported arities.
pub fn fan_triangulate(indices: &[u32]) -> Option<Vec<[u32; 3]>> {
    match *indices {
        [a, b, c] => Some(vec![[c, b, a]]),
        [a, b, c, d] => Some(vec![[c, b, a], [d, c, a]]),
        _ => None,
    }
}

/// Checks that every index of a face is within the mesh's vertex range.
pub fn check_face_indices(
    object: &str,
    face_index: usize,
    face: &Face,
    vertex_count: usize,
) -> Result<(), ExportError> {
    for &index in face.indices() {
        if index as usize >= vertex_count {
            return Err(ExportError::FaceIndexOutOfRange {
                object: object.to_string(),
                face: face_index,
                index,
                vertex_count,
            });
        }
    }
    Ok(())
}

/// Maps an unsupported-arity face to its structural error.
pub fn unsupported_face(object: &str, face_index: usize, face: &Face) -> ExportError {
    ExportError::UnsupportedFace {
        object: object.to_string(),
        face: face_index,
        arity: face.arity(),
    }
}
