//! # Configuration Constants
//!
//! Centralized constants for the OpenSCAD export pipeline. Vertex
//! deduplication precision, coordinate formatting, and emitted-module
//! defaults are all defined here.
//!
//! ## Categories
//!
//! - **Precision**: Rounding applied before vertex deduplication
//! - **Formatting**: Fixed-point precision of emitted coordinates
//! - **Topology**: Supported polygon face arities
//! - **Emission**: Defaults baked into the generated OpenSCAD text

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Number of decimal places kept when deduplicating vertex positions.
///
/// Two positions that agree after rounding each component to this many
/// decimal places collapse to a single point-table index.
///
/// # Example
///
/// ```rust
/// use config::constants::DEDUP_DECIMALS;
///
/// assert_eq!(DEDUP_DECIMALS, 6);
/// ```
pub const DEDUP_DECIMALS: u32 = 6;

/// Scaling factor implementing [`DEDUP_DECIMALS`]-place rounding in
/// integer space.
///
/// Coordinates are multiplied by this factor and rounded to `i64` to form
/// deduplication keys, which sidesteps `-0.0`/`0.0` and other bit-level
/// float equality pitfalls.
///
/// # Example
///
/// ```rust
/// use config::constants::DEDUP_SCALE;
///
/// let key = (-1.0e-9_f64 * DEDUP_SCALE).round() as i64;
/// assert_eq!(key, 0);
/// ```
pub const DEDUP_SCALE: f64 = 1e6;

// =============================================================================
// FORMATTING CONSTANTS
// =============================================================================

/// Fractional digits used when rendering coordinates as fixed-point text.
///
/// Matches [`DEDUP_DECIMALS`] so the emitted text round-trips every
/// distinction the deduplication table preserves. Exponential notation is
/// never used.
///
/// # Example
///
/// ```rust
/// use config::constants::COORD_DECIMALS;
///
/// let text = format!("{:.*}", COORD_DECIMALS, 1.5_f64);
/// assert_eq!(text, "1.500000");
/// ```
pub const COORD_DECIMALS: usize = 6;

// =============================================================================
// TOPOLOGY CONSTANTS
// =============================================================================

/// Smallest face arity the emitter accepts (triangles).
pub const MIN_FACE_ARITY: usize = 3;

/// Largest face arity the emitter accepts (quads, fan-triangulated).
///
/// Faces outside `[MIN_FACE_ARITY, MAX_FACE_ARITY]` are a structural error;
/// general n-gon tessellation is deliberately not attempted.
pub const MAX_FACE_ARITY: usize = 4;

// =============================================================================
// EMISSION CONSTANTS
// =============================================================================

/// Scale mapping authored shape-key weights (0..1 sliders) onto the
/// percentage convention used by emitted weight parameters.
///
/// # Example
///
/// ```rust
/// use config::constants::WEIGHT_PERCENT_SCALE;
///
/// let authored = 0.5_f64;
/// assert_eq!(authored * WEIGHT_PERCENT_SCALE, 50.0);
/// ```
pub const WEIGHT_PERCENT_SCALE: f64 = 100.0;

/// Default strut radius of the generated `frame` module variant.
pub const DEFAULT_FRAME_THICKNESS: f64 = 0.1;

/// Default wall radius of the generated `shell` module variant.
pub const DEFAULT_SHELL_THICKNESS: f64 = 0.1;

/// Identifier substituted for an empty or missing object name.
///
/// Kept for compatibility with the Blender exporter convention this
/// pipeline replaces.
pub const UNNAMED_IDENTIFIER: &str = "None";
