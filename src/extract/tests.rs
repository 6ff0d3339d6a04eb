use std::fs;
use std::io::{Cursor, Write};

use serde_json::json;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use super::*;

fn archive_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(data.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

#[test]
fn test_read_archive_parses_required_entry() {
    let payload = json!([{"input": "q", "output": "a", "task": "t",
        "context": {"content": "c", "title": "T"}}]);
    let bytes = archive_bytes(&[
        ("README.txt", "ignored"),
        ("examples.data", payload.to_string().as_str()),
    ]);

    let value = read_archive(Cursor::new(bytes)).expect("should extract");
    assert_eq!(value, payload);
}

#[test]
fn test_read_archive_missing_entry() {
    let bytes = archive_bytes(&[("other.json", "[]")]);

    let err = read_archive(Cursor::new(bytes)).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::MissingEntry {
            entry: "examples.data"
        }
    ));
}

#[test]
fn test_read_archive_malformed_json() {
    let bytes = archive_bytes(&[("examples.data", "[{\"input\": ")]);

    let err = read_archive(Cursor::new(bytes)).unwrap_err();
    assert!(matches!(err, ExtractError::MalformedJson { .. }));
}

#[test]
fn test_read_archive_not_a_zip() {
    let err = read_archive(Cursor::new(b"definitely not a zip".to_vec())).unwrap_err();
    assert!(matches!(err, ExtractError::Archive(_)));
}

#[test]
fn test_extract_data_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("submission.zip");
    fs::write(&path, archive_bytes(&[("examples.data", "[]")])).unwrap();

    assert_eq!(extract_data(&path).unwrap(), json!([]));
}

#[test]
fn test_extract_data_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    let err = extract_data(&dir.path().join("absent.zip")).unwrap_err();
    assert!(matches!(err, ExtractError::Io(_)));
}

#[test]
fn test_find_input_file_picks_first_by_name() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("aaa-subdir")).unwrap();
    fs::write(dir.path().join("b.zip"), b"").unwrap();
    fs::write(dir.path().join("a.zip"), b"").unwrap();

    let found = find_input_file(dir.path()).unwrap();
    assert_eq!(found, dir.path().join("a.zip"));
}

#[test]
fn test_find_input_file_empty_dir() {
    let dir = tempfile::tempdir().unwrap();

    let err = find_input_file(dir.path()).unwrap_err();
    assert!(matches!(err, ExtractError::NoInputFile { .. }));
}
