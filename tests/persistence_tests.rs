use morph_core::persistence::{load_from_disk, save_to_disk, ExportFormat};
use morph_core::{Error, MorphEngine};
use std::path::Path;
use tempfile::tempdir;

#[test]
fn json_export_reads_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("qtl.json");
    let tree = MorphEngine::new().expand("ቀተለ").unwrap();

    save_to_disk(&tree, &path, ExportFormat::Json).unwrap();
    let loaded = load_from_disk(&path, ExportFormat::Json).unwrap();
    assert_eq!(loaded, tree);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("ይቀትል"));
}

#[test]
fn binary_export_reads_back_into_nested_dir() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("exports").join("qds.bin");
    let tree = MorphEngine::new().expand("ቀደሰ").unwrap();

    save_to_disk(&tree, &path, ExportFormat::Binary).unwrap();
    assert_eq!(load_from_disk(&path, ExportFormat::Binary).unwrap(), tree);
}

#[test]
fn overwrite_replaces_previous_export() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tree.json");
    let engine = MorphEngine::new();

    save_to_disk(&engine.expand("ቀተለ").unwrap(), &path, ExportFormat::Json).unwrap();
    let second = engine.expand("ሰተየ").unwrap();
    save_to_disk(&second, &path, ExportFormat::Json).unwrap();
    assert_eq!(load_from_disk(&path, ExportFormat::Json).unwrap(), second);
    // Only the export itself is left behind.
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn format_follows_extension() {
    assert_eq!(ExportFormat::from_path(Path::new("a/b.bin")), ExportFormat::Binary);
    assert_eq!(ExportFormat::from_path(Path::new("tree.json")), ExportFormat::Json);
    assert_eq!(ExportFormat::from_path(Path::new("tree")), ExportFormat::Json);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = load_from_disk(&dir.path().join("absent.json"), ExportFormat::Json).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn corrupt_json_is_json_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = load_from_disk(&path, ExportFormat::Json).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn two_radical_root_is_rejected_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("qt.json");
    save_to_disk(&MorphEngine::new().expand("ቀተለ").unwrap(), &path, ExportFormat::Json).unwrap();

    let mut value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    value["root"]["radicals"] = serde_json::json!(["ቀ", "ተ"]);
    std::fs::write(&path, value.to_string()).unwrap();

    let err = load_from_disk(&path, ExportFormat::Json).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(err.to_string().contains("invalid root"), "{err}");
}
