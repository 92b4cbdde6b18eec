use a3da_bake_core::{
    bake_scene, export_to_path, parse_document_json, to_json_string, BakeError, ExportConfig,
};

#[test]
fn exported_file_parses_back_to_the_same_document() {
    let mut scene = a3da_test_fixtures::scenes::load("arm-rig").unwrap();
    let doc = bake_scene(&mut scene, &ExportConfig::default().with_file_name("A3D")).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("A3D.json");
    export_to_path(&doc, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, to_json_string(&doc).unwrap());
    assert_eq!(parse_document_json(&text).unwrap(), doc);
}

#[test]
fn write_failure_surfaces_io_error() {
    let mut scene = a3da_test_fixtures::scenes::load("arm-rig").unwrap();
    let doc = bake_scene(&mut scene, &ExportConfig::default()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("A3D.json");
    let err = export_to_path(&doc, &path).unwrap_err();
    assert!(matches!(err, BakeError::Io(_)));
}

#[test]
fn rendering_is_deterministic() {
    let cfg = ExportConfig::default();
    let mut a = a3da_test_fixtures::scenes::load("arm-rig").unwrap();
    let mut b = a3da_test_fixtures::scenes::load("arm-rig").unwrap();
    let first = to_json_string(&bake_scene(&mut a, &cfg).unwrap()).unwrap();
    let second = to_json_string(&bake_scene(&mut b, &cfg).unwrap()).unwrap();
    assert_eq!(first, second);
}
