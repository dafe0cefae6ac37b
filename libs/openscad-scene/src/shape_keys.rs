//! # Shape Keys
//!
//! Named alternate vertex-position sets over a fixed mesh topology, used to
//! interpolate deformations. The first key of a set is the reference (basis)
//! shape; every other key is a relative key measured as a delta against its
//! designated base (the reference by default).

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// One shape key: a full vertex-position set index-aligned with the base
/// mesh's vertex list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeKey {
    /// Display name, authored in the host application.
    pub name: String,
    /// Displaced position of every base-mesh vertex under this key.
    /// `positions[i]` corresponds to `Mesh::vertex(i)`.
    pub positions: Vec<DVec3>,
    /// Currently authored weight on the host's slider scale (usually 0..1).
    pub value: f64,
    /// Lower slider bound on the host's scale.
    pub slider_min: f64,
    /// Upper slider bound on the host's scale.
    pub slider_max: f64,
    /// Index of the key this one is measured against, within the owning
    /// [`ShapeKeySet`]. `None` means the reference key.
    pub relative_to: Option<usize>,
}

impl ShapeKey {
    /// Creates a key with the host defaults: zero weight, 0..1 slider,
    /// relative to the reference key.
    pub fn new(name: impl Into<String>, positions: Vec<DVec3>) -> Self {
        Self {
            name: name.into(),
            positions,
            value: 0.0,
            slider_min: 0.0,
            slider_max: 1.0,
            relative_to: None,
        }
    }

    /// Sets the authored weight.
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Sets the slider bounds.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.slider_min = min;
        self.slider_max = max;
        self
    }

    /// Sets the key this one is measured against.
    pub fn relative_to(mut self, index: usize) -> Self {
        self.relative_to = Some(index);
        self
    }
}

/// An ordered set of shape keys. Index 0 is the reference key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeKeySet {
    keys: Vec<ShapeKey>,
}

impl ShapeKeySet {
    /// Creates a set from an ordered key list; `keys[0]` is the reference.
    pub fn new(keys: Vec<ShapeKey>) -> Self {
        Self { keys }
    }

    /// Returns all keys, reference first.
    #[inline]
    pub fn keys(&self) -> &[ShapeKey] {
        &self.keys
    }

    /// Returns the reference key, if the set is non-empty.
    pub fn reference(&self) -> Option<&ShapeKey> {
        self.keys.first()
    }

    /// Iterates the non-reference keys with their set indices.
    pub fn relative_keys(&self) -> impl Iterator<Item = (usize, &ShapeKey)> {
        self.keys.iter().enumerate().skip(1)
    }

    /// Resolves the base key a given key is measured against.
    ///
    /// Defaults to the reference key when the key declares no explicit base.
    /// Returns `None` for an out-of-range declaration.
    pub fn base_of(&self, key: &ShapeKey) -> Option<&ShapeKey> {
        self.keys.get(key.relative_to.unwrap_or(0))
    }
}
