use std::fs;

use entryform::model::{EntryListModel, EntryPolicy};
use entryform::storage::{DocumentFile, open_document};
use tempfile::TempDir;

#[test]
fn test_open_missing_document_starts_empty() {
    let dir = TempDir::new().unwrap();
    let (model, doc) = open_document(dir.path().join("data.json"), EntryPolicy::default()).unwrap();
    assert!(model.is_empty());
    assert!(!doc.exists());
}

#[test]
fn test_open_existing_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, r#"[{"Title":"Hi","Content":"Hello world"}]"#).unwrap();

    let (model, _) = open_document(&path, EntryPolicy::default()).unwrap();
    assert_eq!(model.len(), 1);
    assert_eq!(model.entries()[0].title, "Hi");
}

#[test]
fn test_open_broken_document_is_import_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, r#"{"not":"an array"}"#).unwrap();

    let err = open_document(&path, EntryPolicy::default()).unwrap_err();
    assert_eq!(err.code(), "E003");
}

#[test]
fn test_saved_bytes_equal_serialized_size() {
    let dir = TempDir::new().unwrap();
    let doc = DocumentFile::new(dir.path().join("data.json"));

    let mut model = EntryListModel::new(EntryPolicy::default());
    model.add_entry("Ü", "naïve café").unwrap();
    doc.save_from(&model).unwrap();

    assert_eq!(
        doc.file_size().unwrap() as usize,
        model.compute_metrics().serialized_size
    );
}
