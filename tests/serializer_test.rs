use octasphere::{
    Error, Mesh, MeshGenerator, MeshSerializer, OctaSphere, SubdivisionMode, TempFolder,
    Triangle, VERTEX_LINE_WIDTH,
};
use std::fs;

#[test]
fn test_seed_output_is_bit_exact() {
    let mesh = OctaSphere::new(0.7, 0)
        .expect("Failed to create sphere generator")
        .generate()
        .expect("Failed to generate sphere");

    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let vertex_path = tmp.path().join("vertices.arr");
    let index_path = tmp.path().join("elements.arr");
    MeshSerializer::write(&mesh, Some(&vertex_path), Some(&index_path))
        .expect("Failed to write mesh");

    let vertices = fs::read_to_string(&vertex_path).expect("Failed to read vertex file");
    assert_eq!(
        vertices,
        "0.00000 0.00000 0.70000   \n\
         0.70000 0.00000 0.00000   \n\
         0.00000 0.70000 0.00000   \n\
         -0.70000 0.00000 0.00000  \n\
         -0.00000 -0.70000 0.00000 \n\
         0.00000 0.00000 -0.70000  "
    );

    let indices = fs::read_to_string(&index_path).expect("Failed to read index file");
    assert_eq!(
        indices,
        "0 1 2\n0 2 3\n0 3 4\n0 4 1\n5 1 2\n5 2 3\n5 3 4\n5 4 1"
    );
}

#[test]
fn test_retained_parents_output_layout() {
    let mesh = OctaSphere::with_mode(0.7, 1, SubdivisionMode::RetainParents)
        .expect("Failed to create sphere generator")
        .generate()
        .expect("Failed to generate sphere");

    let vertices = MeshSerializer::vertex_text(&mesh);
    let lines: Vec<&str> = vertices.lines().collect();
    assert_eq!(lines.len(), 30);
    assert_eq!(lines[6], "0.49497 0.00000 0.49497   ");
    assert_eq!(lines[7], "0.00000 0.49497 0.49497   ");
    assert_eq!(lines[8], "0.49497 0.49497 0.00000   ");

    let indices = MeshSerializer::index_text(&mesh);
    let lines: Vec<&str> = indices.lines().collect();
    assert_eq!(lines.len(), 40);
    assert_eq!(lines[0], "0 1 2");
    assert_eq!(&lines[8..12], ["0 6 7", "1 6 8", "2 8 7", "6 7 8"]);
}

#[test]
fn test_round_trip() {
    let mesh = OctaSphere::new(3.25, 3)
        .expect("Failed to create sphere generator")
        .generate()
        .expect("Failed to generate sphere");

    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let vertex_path = tmp.path().join("vertices.arr");
    let index_path = tmp.path().join("elements.arr");
    mesh.save_arr(Some(&vertex_path), Some(&index_path))
        .expect("Failed to write mesh");

    let loaded = Mesh::load_arr(&vertex_path, &index_path).expect("Failed to read mesh");

    assert_eq!(loaded.vertex_count(), mesh.vertex_count());
    assert_eq!(loaded.triangles(), mesh.triangles());
    for (a, b) in loaded.vertices().iter().zip(mesh.vertices()) {
        assert!((a - b).amax() <= 5e-6 + 1e-12, "{} vs {}", a, b);
    }

    let text = fs::read_to_string(&vertex_path).expect("Failed to read vertex file");
    assert!(text.lines().all(|l| l.len() == VERTEX_LINE_WIDTH));
}

#[test]
fn test_vertex_only_write() {
    let mesh = OctaSphere::new(1.0, 1)
        .expect("Failed to create sphere generator")
        .generate()
        .expect("Failed to generate sphere");

    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let vertex_path = tmp.path().join("vertices.arr");
    let index_path = tmp.path().join("elements.arr");

    MeshSerializer::write(&mesh, Some(&vertex_path), None).expect("Failed to write mesh");

    assert!(vertex_path.exists());
    assert!(!index_path.exists());
    assert_eq!(fs::read_dir(tmp.path()).expect("Failed to list").count(), 1);
}

#[test]
fn test_index_only_write() {
    let mesh = OctaSphere::new(1.0, 1)
        .expect("Failed to create sphere generator")
        .generate()
        .expect("Failed to generate sphere");

    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let vertex_path = tmp.path().join("vertices.arr");
    let index_path = tmp.path().join("elements.arr");

    MeshSerializer::write(&mesh, None, Some(&index_path)).expect("Failed to write mesh");

    assert!(!vertex_path.exists());
    assert!(index_path.exists());
    let triangles = MeshSerializer::read_indices(&index_path).expect("Failed to read indices");
    assert_eq!(triangles.len(), 32);
}

#[test]
fn test_no_destinations_is_noop() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    MeshSerializer::write(&Mesh::new(), None, None).expect("Failed to write mesh");
    assert_eq!(fs::read_dir(tmp.path()).expect("Failed to list").count(), 0);
}

#[test]
fn test_overwrite_replaces_whole_file() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let index_path = tmp.path().join("elements.arr");
    fs::write(&index_path, "stale content that is much longer than the new file\n".repeat(50))
        .expect("Failed to seed file");

    let mesh = OctaSphere::new(1.0, 0)
        .expect("Failed to create sphere generator")
        .generate()
        .expect("Failed to generate sphere");
    MeshSerializer::write(&mesh, None, Some(&index_path)).expect("Failed to write mesh");

    let text = fs::read_to_string(&index_path).expect("Failed to read index file");
    assert_eq!(text.lines().count(), 8);
    assert!(!text.contains("stale"));
}

#[test]
fn test_write_to_missing_directory_fails() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let vertex_path = tmp.path().join("no_such_dir").join("vertices.arr");

    let mesh = OctaSphere::new(1.0, 0)
        .expect("Failed to create sphere generator")
        .generate()
        .expect("Failed to generate sphere");
    let err = MeshSerializer::write(&mesh, Some(&vertex_path), None)
        .expect_err("Write into a missing directory should fail");

    assert!(matches!(err, Error::FileSave(_)));
    assert!(!vertex_path.exists());
}

#[test]
fn test_read_rejects_malformed_files() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let vertex_path = tmp.path().join("vertices.arr");
    let index_path = tmp.path().join("elements.arr");

    fs::write(&vertex_path, "0.0 0.0 1.0\n1.0 zero 0.0").expect("Failed to seed file");
    let err = MeshSerializer::read_vertices(&vertex_path).expect_err("Should not parse");
    assert!(matches!(err, Error::MalformedRecord { line: 2, .. }));

    fs::write(&vertex_path, "0.0 0.0 1.0\n1.0 0.0 0.0\n0.0 1.0 0.0").expect("Failed to seed file");
    fs::write(&index_path, "0 1 2\n0 1 3").expect("Failed to seed file");
    let err = MeshSerializer::read(&vertex_path, &index_path).expect_err("Index out of range");
    assert!(matches!(err, Error::IndexOutOfRange { index: 3, .. }));

    let missing = tmp.path().join("missing.arr");
    assert!(matches!(
        MeshSerializer::read_indices(&missing),
        Err(Error::FileLoad(_))
    ));
}

#[test]
fn test_flat_buffers_match_files() {
    let mesh = Mesh::from_buffers(
        vec![
            nalgebra::Vector3::new(0.0, 0.0, 1.0),
            nalgebra::Vector3::new(1.0, 0.0, 0.0),
            nalgebra::Vector3::new(0.0, 1.0, 0.0),
        ],
        vec![Triangle::new(0, 1, 2)],
    )
    .expect("Failed to build mesh");

    assert_eq!(mesh.vertex_buffer().len(), 9);
    assert_eq!(mesh.index_buffer(), vec![0, 1, 2]);
    assert_eq!(MeshSerializer::index_text(&mesh), "0 1 2");
}
