//! # Config Crate
//!
//! Centralized configuration constants for the OpenSCAD export pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEDUP_DECIMALS, DEDUP_SCALE, COORD_DECIMALS};
//!
//! // Round a coordinate to the deduplication precision
//! let raw = 1.0000004_f64;
//! let rounded = (raw * DEDUP_SCALE).round() / DEDUP_SCALE;
//! assert_eq!(rounded, 1.0);
//! assert_eq!(DEDUP_DECIMALS, COORD_DECIMALS as u32);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **OpenSCAD Compatible**: Emitted defaults match the target syntax
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
