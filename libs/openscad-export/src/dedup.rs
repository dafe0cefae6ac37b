//! # Vertex Deduplication Table
//!
//! Maps rounded vertex positions to dense point-table indices assigned in
//! first-seen order. One table serves exactly one mesh emission: write-once
//! during face traversal, read-once when the point table is materialized.

use config::constants::DEDUP_SCALE;
use glam::DVec3;
use std::collections::HashMap;

/// Deduplication key: components scaled by [`DEDUP_SCALE`] and rounded to
/// integers, so equality is decimal-place rounding rather than raw float
/// bits (`-0.0` collapses with `0.0`).
fn dedup_key(position: DVec3) -> [i64; 3] {
    [
        (position.x * DEDUP_SCALE).round() as i64,
        (position.y * DEDUP_SCALE).round() as i64,
        (position.z * DEDUP_SCALE).round() as i64,
    ]
}

/// Position-to-index table scoped to a single mesh emission.
///
/// Indices are dense, start at 0, and follow insertion order. The ordered
/// point list lives in a plain `Vec`, so output order never depends on hash
/// iteration order.
#[derive(Debug, Default)]
pub struct VertexTable {
    indices: HashMap<[i64; 3], u32>,
    points: Vec<DVec3>,
}

impl VertexTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of the rounded position, inserting it with the
    /// next sequential index if unseen.
    pub fn lookup_or_insert(&mut self, position: DVec3) -> u32 {
        let key = dedup_key(position);
        if let Some(&index) = self.indices.get(&key) {
            return index;
        }
        let index = self.points.len() as u32;
        self.indices.insert(key, index);
        self.points.push(DVec3::new(
            key[0] as f64 / DEDUP_SCALE,
            key[1] as f64 / DEDUP_SCALE,
            key[2] as f64 / DEDUP_SCALE,
        ));
        index
    }

    /// Returns the number of distinct rounded positions inserted so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if nothing has been inserted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consumes the table, returning the rounded positions in ascending
    /// index order.
    ///
    /// Consuming `self` enforces the write-once-then-read-once lifecycle.
    pub fn into_points(self) -> Vec<DVec3> {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_insert_is_zero() {
        let mut table = VertexTable::new();
        assert_eq!(table.lookup_or_insert(DVec3::new(1.0, 2.0, 3.0)), 0);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_identical_positions_collapse() {
        let mut table = VertexTable::new();
        let a = table.lookup_or_insert(DVec3::new(1.0, 0.0, 0.0));
        let b = table.lookup_or_insert(DVec3::new(1.0, 0.0, 0.0));
        assert_eq!(a, b);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_rounding_collapses_within_precision() {
        let mut table = VertexTable::new();
        let a = table.lookup_or_insert(DVec3::new(1.0000001, 0.0, 0.0));
        let b = table.lookup_or_insert(DVec3::new(0.9999999, 0.0, 0.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_rounding_distinguishes_beyond_precision() {
        let mut table = VertexTable::new();
        let a = table.lookup_or_insert(DVec3::new(1.000001, 0.0, 0.0));
        let b = table.lookup_or_insert(DVec3::new(1.000002, 0.0, 0.0));
        assert_ne!(a, b);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_negative_zero_collapses_with_zero() {
        let mut table = VertexTable::new();
        let a = table.lookup_or_insert(DVec3::new(0.0, 0.0, 0.0));
        let b = table.lookup_or_insert(DVec3::new(-0.0, -1.0e-9, 0.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_into_points_preserves_insertion_order() {
        let mut table = VertexTable::new();
        table.lookup_or_insert(DVec3::new(0.0, 0.0, 0.0));
        table.lookup_or_insert(DVec3::new(1.0, 0.0, 0.0));
        table.lookup_or_insert(DVec3::new(0.0, 0.0, 0.0));
        table.lookup_or_insert(DVec3::new(0.0, 1.0, 0.0));
        let points = table.into_points();
        assert_eq!(
            points,
            vec![
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(1.0, 0.0, 0.0),
                DVec3::new(0.0, 1.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_points_are_rounded() {
        let mut table = VertexTable::new();
        table.lookup_or_insert(DVec3::new(1.23456789, 0.0, 0.0));
        let points = table.into_points();
        assert_eq!(points[0].x, 1.234568);
    }
}
