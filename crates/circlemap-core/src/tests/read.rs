use crate::*;
use std::io::Write;

#[test]
fn read_dataset_parses_a_file_on_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "Population\nX 10 1.0 2.0\nY 20 3.0 4.0\nX: Y").expect("write");

    let dataset = read_dataset(file.path()).expect("dataset");
    assert_eq!(dataset.title, "Population");
    assert_eq!(dataset.region_count(), 2);
}

#[test]
fn missing_file_is_not_a_format_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = read_dataset(dir.path().join("missing.txt")).expect_err("missing");
    assert!(matches!(err, ParseError::Io(_)), "{err}");
    assert!(!err.is_format_error());
    assert_eq!(err.line(), None);
}
