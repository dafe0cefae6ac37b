//! # Blend-Shape Emitter
//!
//! Serializes one mesh plus its shape keys into a parametrized OpenSCAD
//! unit. Instead of baking a single blended pose, the emitted points
//! function carries one linear-interpolation expression per vertex
//! component, so OpenSCAD itself re-evaluates the blend whenever a weight
//! parameter changes.
//!
//! Triangle indices reference the base mesh's own vertex order (winding
//! reversed, no positional deduplication): every shape's point table is
//! index-aligned with the base vertex list and has to stay that way.

use crate::error::ExportError;
use crate::format::{
    escape_scad_string, format_coord, format_point_table, format_scalar, format_triangle_table,
    sanitize_identifier,
};
use crate::triangulate::{check_face_indices, fan_triangulate, unsupported_face};
use config::constants::WEIGHT_PERCENT_SCALE;
use openscad_scene::{SceneObject, ShapeKey, ShapeKeySet};
use std::io::Write;

/// One weight parameter of the emitted unit, on the percentage scale.
#[derive(Debug)]
struct WeightParam {
    /// Parameter identifier (`weight_<sanitized key name>`)
    name: String,
    default: f64,
    min: f64,
    max: f64,
}

/// One blend term: a non-reference key and the key it is measured against.
struct BlendTerm<'a> {
    param: usize,
    key: &'a ShapeKey,
    base: &'a ShapeKey,
}

/// Fully materialized declarations for one blend-shape mesh, built (and
/// validated) before anything is written.
#[derive(Debug)]
struct BlendDeclarations<'a> {
    triangles: Vec<[u32; 3]>,
    key_tables: Vec<(String, &'a [glam::DVec3])>,
    weights: Vec<WeightParam>,
    point_rows: Vec<String>,
}

/// Emits the parametrized declaration block for one object with shape keys.
pub(crate) fn emit<W: Write>(
    sink: &mut W,
    object: &SceneObject,
    keys: &ShapeKeySet,
) -> Result<(), ExportError> {
    let declarations = prepare(object, keys)?;
    let ident = sanitize_identifier(&object.name);
    write_declarations(sink, object, &ident, &declarations)?;
    Ok(())
}

fn prepare<'a>(
    object: &SceneObject,
    keys: &'a ShapeKeySet,
) -> Result<BlendDeclarations<'a>, ExportError> {
    let mesh = &object.mesh;
    let reference = keys
        .reference()
        .ok_or_else(|| ExportError::EmptyShapeKeySet {
            object: object.name.clone(),
        })?;

    for key in keys.keys() {
        if key.positions.len() != mesh.vertex_count() {
            return Err(ExportError::ShapeKeyMismatch {
                object: object.name.clone(),
                key: key.name.clone(),
                positions: key.positions.len(),
                vertex_count: mesh.vertex_count(),
            });
        }
    }

    // Triangle table on the base mesh's own vertex indices.
    let mut triangles = Vec::with_capacity(mesh.face_count() * 2);
    for (face_index, face) in mesh.faces().iter().enumerate() {
        check_face_indices(&object.name, face_index, face, mesh.vertex_count())?;
        let fan = fan_triangulate(face.indices())
            .ok_or_else(|| unsupported_face(&object.name, face_index, face))?;
        triangles.extend(fan);
    }

    // Weight parameters and blend terms for the non-reference keys.
    let mut weights = Vec::new();
    let mut terms = Vec::new();
    for (_, key) in keys.relative_keys() {
        let base = keys
            .base_of(key)
            .ok_or_else(|| ExportError::InvalidRelativeKey {
                object: object.name.clone(),
                key: key.name.clone(),
            })?;
        weights.push(WeightParam {
            name: format!("weight_{}", sanitize_identifier(&key.name)),
            default: key.value * WEIGHT_PERCENT_SCALE,
            min: key.slider_min * WEIGHT_PERCENT_SCALE,
            max: key.slider_max * WEIGHT_PERCENT_SCALE,
        });
        terms.push(BlendTerm {
            param: weights.len() - 1,
            key,
            base,
        });
    }

    // Per-vertex blended-position rows, literals inlined.
    let percent = format_scalar(WEIGHT_PERCENT_SCALE);
    let mut point_rows = Vec::with_capacity(mesh.vertex_count());
    for i in 0..mesh.vertex_count() {
        let mut components = Vec::with_capacity(3);
        for c in 0..3 {
            let mut expr = format_coord(reference.positions[i][c]);
            for term in &terms {
                expr.push_str(&format!(
                    " + ({} - {}) * {} / {}",
                    format_coord(term.key.positions[i][c]),
                    format_coord(term.base.positions[i][c]),
                    weights[term.param].name,
                    percent,
                ));
            }
            components.push(expr);
        }
        point_rows.push(format!("[{}]", components.join(", ")));
    }

    let key_tables = keys
        .keys()
        .iter()
        .map(|key| {
            (
                sanitize_identifier(&key.name),
                key.positions.as_slice(),
            )
        })
        .collect();

    Ok(BlendDeclarations {
        triangles,
        key_tables,
        weights,
        point_rows,
    })
}

fn write_declarations<W: Write>(
    sink: &mut W,
    object: &SceneObject,
    ident: &str,
    declarations: &BlendDeclarations<'_>,
) -> std::io::Result<()> {
    let display = escape_scad_string(&object.name);

    writeln!(
        sink,
        "// Exported mesh \"{display}\" with shape keys as parametrized OpenSCAD declarations.\n\
         //  Adjust the weight variables below (percent scale) to re-blend the shape."
    )?;
    writeln!(sink, "\necho(\"Exported mesh {display}\");")?;
    writeln!(sink, "echo(\"  Triangles function: {ident}_triangles()\");")?;
    writeln!(
        sink,
        "echo(\"  Blended points function: {ident}_points()\");"
    )?;

    writeln!(
        sink,
        "\nfunction {ident}_triangles()={};",
        format_triangle_table(&declarations.triangles)
    )?;
    for (key_ident, positions) in &declarations.key_tables {
        writeln!(
            sink,
            "function {ident}_{key_ident}_points() = {};",
            format_point_table(positions)
        )?;
    }

    if !declarations.weights.is_empty() {
        writeln!(sink)?;
        for weight in &declarations.weights {
            writeln!(
                sink,
                "{ident}_{} = {}; // [{}:{}]",
                weight.name,
                format_scalar(weight.default),
                format_scalar(weight.min),
                format_scalar(weight.max),
            )?;
        }
    }

    let params: Vec<String> = declarations
        .weights
        .iter()
        .map(|w| format!("{}={}", w.name, format_scalar(w.default)))
        .collect();
    let params = params.join(", ");
    let arguments: Vec<String> = declarations
        .weights
        .iter()
        .map(|w| w.name.clone())
        .collect();
    let arguments = arguments.join(", ");

    writeln!(sink, "\nfunction {ident}_points({params}) = [")?;
    for (i, row) in declarations.point_rows.iter().enumerate() {
        if i == 0 {
            writeln!(sink, "    {row}")?;
        } else {
            writeln!(sink, "    , {row}")?;
        }
    }
    writeln!(sink, "];")?;

    writeln!(sink, "\nmodule {ident}({params}) {{")?;
    writeln!(sink, "    polyhedron(")?;
    writeln!(sink, "        triangles={ident}_triangles()")?;
    writeln!(sink, "        , points={ident}_points({arguments})")?;
    writeln!(sink, "    );")?;
    writeln!(sink, "}}")?;

    let invocation: Vec<String> = declarations
        .weights
        .iter()
        .map(|w| format!("{name}={ident}_{name}", name = w.name))
        .collect();
    writeln!(sink, "{ident}({});", invocation.join(", "))?;
    Ok(())
}
