//! # OpenSCAD Export
//!
//! Converts finalized mesh snapshots into OpenSCAD `polyhedron`
//! function/module declarations.
//!
//! ## Architecture
//!
//! ```text
//! openscad-scene (snapshot) → openscad-export (.scad text) → io::Write sink
//! ```
//!
//! Per object: faces are walked once, quads fan-triangulated, winding
//! reversed for OpenSCAD's convention, and positions deduplicated into a
//! dense point table. Objects carrying shape keys instead get a parametrized
//! unit whose per-vertex blend expression OpenSCAD re-evaluates at its own
//! render time.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use openscad_export::export_scene;
//!
//! let report = export_scene(&mut file, &objects)?;
//! for skipped in &report.skipped {
//!     eprintln!("skipped {}: {:?}", skipped.name, skipped.reason);
//! }
//! ```

pub mod blend_emit;
pub mod dedup;
pub mod error;
pub mod format;
pub mod report;
pub mod static_emit;
pub mod triangulate;

pub use dedup::VertexTable;
pub use error::ExportError;
pub use report::{ExportReport, SkipReason, SkippedObject};

use openscad_scene::SceneObject;
use std::io::Write;

/// Exports a sequence of objects as one OpenSCAD text stream.
///
/// Objects are processed in order, each start-to-finish with its own
/// deduplication table. Structural errors and empty meshes skip the
/// offending object and are recorded in the returned report; sink errors
/// abort the batch immediately. The sink is flushed on every exit path,
/// including the abort path.
///
/// Identifier collisions between objects whose display names sanitize to
/// the same token are not resolved here; later declarations shadow earlier
/// ones in OpenSCAD's namespace, and disambiguation is the caller's policy.
pub fn export_scene<W: Write>(
    sink: &mut W,
    objects: &[SceneObject],
) -> Result<ExportReport, ExportError> {
    let result = write_scene(sink, objects);
    let flushed = sink.flush();
    let report = result?;
    flushed?;
    Ok(report)
}

fn write_scene<W: Write>(
    sink: &mut W,
    objects: &[SceneObject],
) -> Result<ExportReport, ExportError> {
    let mut report = ExportReport::default();

    for object in objects {
        if object.mesh.is_empty() {
            report.skipped.push(SkippedObject {
                name: object.name.clone(),
                reason: SkipReason::InsufficientGeometry,
            });
            continue;
        }

        let outcome = match &object.shape_keys {
            Some(keys) => blend_emit::emit(sink, object, keys),
            None => static_emit::emit(sink, object),
        };

        match outcome {
            Ok(()) => report.exported.push(object.name.clone()),
            Err(err) if err.is_structural() => {
                report.skipped.push(SkippedObject {
                    name: object.name.clone(),
                    reason: SkipReason::Structural {
                        message: err.to_string(),
                    },
                });
            }
            Err(err) => return Err(err),
        }
    }

    Ok(report)
}
