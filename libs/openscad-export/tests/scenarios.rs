use glam::DVec3;
use openscad_export::{export_scene, ExportError, SkipReason};
use openscad_scene::{Face, Mesh, SceneObject};

fn single_triangle() -> SceneObject {
    let mut mesh = Mesh::new();
    mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
    mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
    mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
    mesh.add_face(Face::triangle(0, 1, 2));
    SceneObject::new("tri", mesh)
}

fn single_quad() -> SceneObject {
    let mut mesh = Mesh::new();
    mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
    mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
    mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
    mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
    mesh.add_face(Face::quad(0, 1, 2, 3));
    SceneObject::new("quad", mesh)
}

fn export_to_string(objects: &[SceneObject]) -> (String, openscad_export::ExportReport) {
    let mut out = Vec::new();
    let report = export_scene(&mut out, objects).unwrap();
    (String::from_utf8(out).unwrap(), report)
}

#[test]
fn triangle_mesh_emits_reversed_winding() {
    let (text, report) = export_to_string(&[single_triangle()]);
    assert_eq!(report.exported, vec!["tri".to_string()]);
    assert!(text.contains("function tri_triangles()=[[2,1,0]];"));
    assert!(text.contains(
        "function tri_points() = [[0.000000,0.000000,0.000000],\
         [1.000000,0.000000,0.000000],[0.000000,1.000000,0.000000]];"
    ));
}

#[test]
fn quad_mesh_emits_two_fan_triangles() {
    let (text, _) = export_to_string(&[single_quad()]);
    assert!(text.contains("function quad_triangles()=[[2,1,0], [3,2,0]];"));
}

#[test]
fn empty_mesh_is_reported_and_batch_continues() {
    let objects = vec![
        SceneObject::new("nothing", Mesh::new()),
        single_triangle(),
    ];
    let (text, report) = export_to_string(&objects);
    assert_eq!(report.exported, vec!["tri".to_string()]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].name, "nothing");
    assert_eq!(report.skipped[0].reason, SkipReason::InsufficientGeometry);
    assert!(!text.contains("nothing"));
    assert!(text.contains("module tri("));
}

#[test]
fn export_is_byte_identical_across_runs() {
    let objects = vec![single_triangle(), single_quad()];
    let (first, _) = export_to_string(&objects);
    let (second, _) = export_to_string(&objects);
    assert_eq!(first, second);
}

#[test]
fn nearby_positions_collapse_across_faces() {
    // Second triangle repeats two corners with sub-precision jitter.
    let mut mesh = Mesh::new();
    mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
    mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
    mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
    mesh.add_vertex(DVec3::new(1.0000000001, 0.0, 0.0));
    mesh.add_vertex(DVec3::new(0.0, 1.0000000001, 0.0));
    mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
    mesh.add_face(Face::triangle(0, 1, 2));
    mesh.add_face(Face::triangle(3, 5, 4));
    let (text, _) = export_to_string(&[SceneObject::new("welded", mesh)]);
    // Four distinct points, not six.
    assert!(text.contains(
        "function welded_points() = [[0.000000,0.000000,0.000000],\
         [1.000000,0.000000,0.000000],[0.000000,1.000000,0.000000],\
         [1.000000,1.000000,0.000000]];"
    ));
}

#[test]
fn display_names_are_sanitized_into_identifiers() {
    let mut object = single_triangle();
    object.name = "Cube.001 left".to_string();
    let (text, _) = export_to_string(&[object]);
    assert!(text.contains("function Cube_001_left_triangles()"));
    assert!(text.contains("module Cube_001_left("));
    // The human-readable header keeps the original spelling.
    assert!(text.contains("\"Cube.001 left\""));
}

#[test]
fn rejected_object_leaves_no_partial_declarations() {
    let mut bad = Mesh::new();
    bad.add_vertex(DVec3::ZERO);
    bad.add_vertex(DVec3::X);
    bad.add_vertex(DVec3::Y);
    bad.add_face(Face::triangle(0, 1, 2));
    bad.add_face(Face::new(vec![0, 1])); // structural violation, second face
    let objects = vec![SceneObject::new("broken", bad), single_triangle()];
    let (text, report) = export_to_string(&objects);
    assert!(!text.contains("broken"));
    assert_eq!(report.exported, vec!["tri".to_string()]);
    match &report.skipped[0].reason {
        SkipReason::Structural { message } => assert!(message.contains("2 vertices")),
        other => panic!("expected structural skip, got {other:?}"),
    }
}

/// Sink failing after a byte budget, for abort-path coverage.
struct FailingSink {
    remaining: usize,
}

impl std::io::Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if buf.len() > self.remaining {
            return Err(std::io::Error::new(
                std::io::ErrorKind::WriteZero,
                "sink full",
            ));
        }
        self.remaining -= buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn sink_failure_aborts_the_batch() {
    let objects = vec![single_triangle(), single_quad()];
    let mut sink = FailingSink { remaining: 64 };
    let err = export_scene(&mut sink, &objects).unwrap_err();
    assert!(matches!(err, ExportError::Io(_)));
}
