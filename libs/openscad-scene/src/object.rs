//! # Scene Object
//!
//! One exportable object as handed over by the host integration layer.

use crate::{Mesh, ShapeKeySet};
use serde::{Deserialize, Serialize};

/// A display-named mesh snapshot with optional shape keys.
///
/// The mesh is expected to be final: modifiers applied, world-space
/// coordinates. Enumerating objects (including instanced duplicates) is the
/// caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Display name; sanitized into an OpenSCAD identifier at emission.
    pub name: String,
    /// Finalized mesh snapshot.
    pub mesh: Mesh,
    /// Shape keys, if the object has any. Selects the parametrized emitter.
    pub shape_keys: Option<ShapeKeySet>,
}

impl SceneObject {
    /// Creates a static object without shape keys.
    pub fn new(name: impl Into<String>, mesh: Mesh) -> Self {
        Self {
            name: name.into(),
            mesh,
            shape_keys: None,
        }
    }

    /// Creates an object carrying shape keys.
    pub fn with_shape_keys(name: impl Into<String>, mesh: Mesh, keys: ShapeKeySet) -> Self {
        Self {
            name: name.into(),
            mesh,
            shape_keys: Some(keys),
        }
    }
}
