//! # Output Formatting
//!
//! Number rendering, identifier sanitization, and one-pass table
//! serialization. Traversal (face walking, deduplication) happens elsewhere;
//! these helpers only turn already-materialized tables into text.

use config::constants::{COORD_DECIMALS, UNNAMED_IDENTIFIER};
use glam::DVec3;

/// Renders a coordinate as fixed-point decimal text, never exponential.
///
/// Precision matches the deduplication rounding, so emitted text preserves
/// every distinction the point table does.
pub fn format_coord(value: f64) -> String {
    format!("{:.*}", COORD_DECIMALS, value)
}

/// Renders a scalar in its shortest exact form (`50`, `0.1`, `12.5`).
///
/// Used for weight defaults, slider bounds, and module parameter defaults
/// where fixed six-digit padding would just be noise.
pub fn format_scalar(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Renders one point as `[x,y,z]`.
pub fn format_point(point: DVec3) -> String {
    format!(
        "[{},{},{}]",
        format_coord(point.x),
        format_coord(point.y),
        format_coord(point.z)
    )
}

/// Renders a point table as `[[x,y,z],[x,y,z],...]` in one pass.
pub fn format_point_table(points: &[DVec3]) -> String {
    let cells: Vec<String> = points.iter().map(|p| format_point(*p)).collect();
    format!("[{}]", cells.join(","))
}

/// Renders a triangle-index table as `[[c,b,a], [d,c,a], ...]` in one pass.
pub fn format_triangle_table(triangles: &[[u32; 3]]) -> String {
    let cells: Vec<String> = triangles
        .iter()
        .map(|t| format!("[{},{},{}]", t[0], t[1], t[2]))
        .collect();
    format!("[{}]", cells.join(", "))
}

/// Sanitizes a display name into an OpenSCAD identifier.
///
/// Non-alphanumeric characters (spaces, periods, anything else) become
/// underscores; a leading digit gets an underscore prefix; an empty name
/// falls back to the legacy `None` token. Collisions between distinct
/// display names sharing a sanitized form are the caller's concern.
pub fn sanitize_identifier(name: &str) -> String {
    if name.is_empty() {
        return UNNAMED_IDENTIFIER.to_string();
    }
    let mut out = String::with_capacity(name.len() + 1);
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.push('_');
    }
    for c in name.chars() {
        out.push(if c.is_ascii_alphanumeric() { c } else { '_' });
    }
    out
}

/// Escapes a display name for inclusion in an emitted string literal.
pub fn escape_scad_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}
