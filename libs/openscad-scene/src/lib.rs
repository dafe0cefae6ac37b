//! # OpenSCAD Scene
//!
//! Value types describing one exportable snapshot of host-application
//! geometry: a finalized mesh (already modifier-applied, already in world
//! space), its optional shape keys, and a display name.
//!
//! ## Architecture
//!
//! ```text
//! host application → openscad-scene (snapshot) → openscad-export (.scad text)
//! ```
//!
//! The types here are deliberately dumb containers. Face arity and index
//! validation belong to the emitter, which reports violations as structural
//! errors instead of panicking on malformed input.

pub mod mesh;
pub mod object;
pub mod shape_keys;

pub use mesh::{Face, Mesh};
pub use object::SceneObject;
pub use shape_keys::{ShapeKey, ShapeKeySet};
