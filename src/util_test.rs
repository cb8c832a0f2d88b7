use super::*;
use std::io::Cursor;

#[test]
fn is_binary_reader_detects_null_byte() {
    let mut cursor = Cursor::new(vec![0x41, 0x42, 0x00, 0x43]);
    assert!(is_binary_reader(&mut cursor).unwrap());
}

#[test]
fn is_binary_reader_text_is_not_binary() {
    let mut cursor = Cursor::new(b"fn main() {}\n".to_vec());
    assert!(!is_binary_reader(&mut cursor).unwrap());
}

#[test]
fn is_binary_reader_resets_position() {
    let mut cursor = Cursor::new(b"hello world".to_vec());
    is_binary_reader(&mut cursor).unwrap();
    let mut rest = Vec::new();
    cursor.read_to_end(&mut rest).unwrap();
    assert_eq!(rest, b"hello world");
}

#[test]
fn atomic_write_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    atomic_write(&path, "hello").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
}

#[test]
fn atomic_write_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, "old content").unwrap();
    atomic_write(&path, "new content").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "new content");
}

#[test]
fn atomic_write_leaves_no_tmp_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    atomic_write(&path, "hello").unwrap();
    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name())
        .collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0], "out.txt");
}
