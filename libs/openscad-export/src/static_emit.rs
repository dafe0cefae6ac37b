//! # Static Mesh Emitter
//!
//! Serializes one mesh without shape keys into OpenSCAD declarations: a
//! triangle-index function, a deduplicated point function, and a module
//! offering `polyhedron`, `frame`, and `shell` render variants.
//!
//! Emission is two-phase: traversal materializes the tables (all structural
//! validation happens there, before a single byte is written), then each
//! table is serialized in one pass.

use crate::dedup::VertexTable;
use crate::error::ExportError;
use crate::format::{
    escape_scad_string, format_point_table, format_scalar, format_triangle_table,
    sanitize_identifier,
};
use crate::triangulate::{check_face_indices, fan_triangulate, unsupported_face};
use config::constants::{DEFAULT_FRAME_THICKNESS, DEFAULT_SHELL_THICKNESS};
use glam::DVec3;
use openscad_scene::SceneObject;
use std::io::Write;

/// Materialized declaration tables for one static mesh.
#[derive(Debug)]
pub(crate) struct StaticTables {
    pub triangles: Vec<[u32; 3]>,
    pub points: Vec<DVec3>,
}

/// Walks the faces once, deduplicating positions and correcting winding.
///
/// Positions enter the table in source face order, so point-table indices
/// follow first appearance in the original mesh rather than the reversed
/// triangle order.
pub(crate) fn collect_tables(object: &SceneObject) -> Result<StaticTables, ExportError> {
    let mesh = &object.mesh;
    let mut table = VertexTable::new();
    let mut triangles = Vec::with_capacity(mesh.face_count() * 2);

    for (face_index, face) in mesh.faces().iter().enumerate() {
        check_face_indices(&object.name, face_index, face, mesh.vertex_count())?;
        let global: Vec<u32> = face
            .indices()
            .iter()
            .map(|&i| table.lookup_or_insert(mesh.vertex(i)))
            .collect();
        let fan = fan_triangulate(&global)
            .ok_or_else(|| unsupported_face(&object.name, face_index, face))?;
        triangles.extend(fan);
    }

    Ok(StaticTables {
        triangles,
        points: table.into_points(),
    })
}

/// Emits the full static declaration block for one object.
///
/// All structural errors surface from [`collect_tables`] before any write,
/// so a rejected object never leaves partial declarations in the sink.
pub(crate) fn emit<W: Write>(sink: &mut W, object: &SceneObject) -> Result<(), ExportError> {
    let tables = collect_tables(object)?;
    let ident = sanitize_identifier(&object.name);
    write_declarations(sink, object, &ident, &tables)?;
    Ok(())
}

fn write_declarations<W: Write>(
    sink: &mut W,
    object: &SceneObject,
    ident: &str,
    tables: &StaticTables,
) -> std::io::Result<()> {
    let display = escape_scad_string(&object.name);
    let frame_th = format_scalar(DEFAULT_FRAME_THICKNESS);
    let shell_th = format_scalar(DEFAULT_SHELL_THICKNESS);

    writeln!(
        sink,
        "// Exported mesh \"{display}\" as OpenSCAD declarations.\n\
         //  Note: If your mesh is non-manifold and/or OpenSCAD complains about the simple \"polyhedron\" variation,\n\
         //    try using the \"frame\" or \"shell\" variants."
    )?;
    writeln!(sink, "\necho(\"Exported mesh {display}\");")?;
    writeln!(sink, "echo(\"  Triangles function: {ident}_triangles()\");")?;
    writeln!(sink, "echo(\"  Points function: {ident}_points()\");")?;
    writeln!(sink, "render_part=\"polyhedron\";")?;
    writeln!(sink, "// render_part=\"frame\";")?;
    writeln!(sink, "// render_part=\"shell_with_diff\";")?;
    writeln!(sink)?;
    writeln!(sink, "if(render_part==\"polyhedron\") {{")?;
    writeln!(
        sink,
        "  echo(\"Rendering {ident}(type=\\\"polyhedron\\\")...\");"
    )?;
    writeln!(sink, "    {ident}(type=\"polyhedron\");")?;
    writeln!(sink, "}}")?;
    writeln!(sink, "if(render_part==\"frame\") {{")?;
    writeln!(
        sink,
        "  echo(\"Rendering {ident}(type=\\\"frame\\\",frame_th={frame_th})...\");"
    )?;
    writeln!(sink, "    {ident}(type=\"frame\",frame_th={frame_th});")?;
    writeln!(sink, "}}")?;
    writeln!(sink, "if(render_part==\"shell_with_diff\") {{")?;
    writeln!(
        sink,
        "  echo(\"Rendering {ident}(type=\\\"shell\\\",shell_th={shell_th}) differenced with cube(100,center=false)...\");"
    )?;
    writeln!(sink, "  difference() {{")?;
    writeln!(sink, "    {ident}(type=\"shell\",shell_th={shell_th});")?;
    writeln!(sink, "    cube(100,center=false);")?;
    writeln!(sink, "  }}")?;
    writeln!(sink, "}}")?;

    writeln!(
        sink,
        "\nfunction {ident}_triangles()={};",
        format_triangle_table(&tables.triangles)
    )?;
    writeln!(
        sink,
        "function {ident}_points() = {};",
        format_point_table(&tables.points)
    )?;

    writeln!(sink, "\nmodule {ident}(type=\"polyhedron\"")?;
    writeln!(sink, "    , frame_th={frame_th}")?;
    writeln!(sink, "    , shell_th={shell_th}")?;
    writeln!(sink, "    ) {{")?;
    writeln!(sink, "    if(type==\"polyhedron\") {{")?;
    writeln!(sink, "        polyhedron(")?;
    writeln!(sink, "            triangles={ident}_triangles()")?;
    writeln!(sink, "            , points={ident}_points()")?;
    writeln!(sink, "        );")?;
    writeln!(sink, "    }} else if(type==\"frame\") {{")?;
    writeln!(
        sink,
        "        for(i=[0:len({ident}_triangles())-1]) let(triangle={ident}_triangles()[i]) {{"
    )?;
    writeln!(sink, "            for(j=[0:2]) {{")?;
    writeln!(sink, "                hull() {{")?;
    writeln!(
        sink,
        "                    translate({ident}_points()[triangle[j%3]]) sphere($fn=8,r=frame_th/2);"
    )?;
    writeln!(
        sink,
        "                    translate({ident}_points()[triangle[(j+1)%3]]) sphere($fn=8,r=frame_th/2);"
    )?;
    writeln!(sink, "                }}")?;
    writeln!(sink, "            }}")?;
    writeln!(sink, "        }}")?;
    writeln!(sink, "    }} else if(type==\"shell\") {{")?;
    writeln!(
        sink,
        "        for(i=[0:len({ident}_triangles())-1]) let(triangle={ident}_triangles()[i]) {{"
    )?;
    writeln!(sink, "            hull() {{")?;
    writeln!(
        sink,
        "                translate({ident}_points()[triangle[0]]) sphere($fn=8,r=shell_th/2);"
    )?;
    writeln!(
        sink,
        "                translate({ident}_points()[triangle[1]]) sphere($fn=8,r=shell_th/2);"
    )?;
    writeln!(
        sink,
        "                translate({ident}_points()[triangle[2]]) sphere($fn=8,r=shell_th/2);"
    )?;
    writeln!(sink, "            }}")?;
    writeln!(sink, "        }}")?;
    writeln!(sink, "    }}")?;
    writeln!(sink, "}}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use openscad_scene::{Face, Mesh};

    fn triangle_object() -> SceneObject {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        mesh.add_face(Face::triangle(0, 1, 2));
        SceneObject::new("tri", mesh)
    }

    #[test]
    fn test_collect_single_triangle() {
        let tables = collect_tables(&triangle_object()).unwrap();
        assert_eq!(tables.triangles, vec![[2, 1, 0]]);
        assert_eq!(
            tables.points,
            vec![
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(1.0, 0.0, 0.0),
                DVec3::new(0.0, 1.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_collect_quad_fan() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        mesh.add_face(Face::quad(0, 1, 2, 3));
        let tables = collect_tables(&SceneObject::new("quad", mesh)).unwrap();
        assert_eq!(tables.triangles, vec![[2, 1, 0], [3, 2, 0]]);
        assert_eq!(tables.points.len(), 4);
    }

    #[test]
    fn test_collect_dedups_shared_corners() {
        // Two triangles sharing an edge: 4 distinct positions, not 6.
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        mesh.add_face(Face::triangle(0, 1, 2));
        mesh.add_face(Face::triangle(0, 2, 3));
        let tables = collect_tables(&SceneObject::new("split_quad", mesh)).unwrap();
        assert_eq!(tables.points.len(), 4);
        assert_eq!(tables.triangles, vec![[2, 1, 0], [3, 2, 0]]);
    }

    #[test]
    fn test_collect_rejects_ngon() {
        let mut mesh = Mesh::new();
        for _ in 0..5 {
            mesh.add_vertex(DVec3::ZERO);
        }
        mesh.add_face(Face::new(vec![0, 1, 2, 3, 4]));
        let err = collect_tables(&SceneObject::new("ngon", mesh)).unwrap_err();
        match err {
            ExportError::UnsupportedFace { arity, .. } => assert_eq!(arity, 5),
            other => panic!("expected arity error, got {other:?}"),
        }
    }

    #[test]
    fn test_emit_writes_expected_tables() {
        let mut out = Vec::new();
        emit(&mut out, &triangle_object()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("function tri_triangles()=[[2,1,0]];"));
        assert!(text.contains(
            "function tri_points() = [[0.000000,0.000000,0.000000],[1.000000,0.000000,0.000000],[0.000000,1.000000,0.000000]];"
        ));
        assert!(text.contains("module tri(type=\"polyhedron\""));
    }

    #[test]
    fn test_emit_rejects_without_writing() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_face(Face::new(vec![0, 0]));
        let mut out = Vec::new();
        assert!(emit(&mut out, &SceneObject::new("bad", mesh)).is_err());
        assert!(out.is_empty());
    }
}
