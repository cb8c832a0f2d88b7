use std::fs;
use std::sync::Arc;

use tempfile::tempdir;

use super::*;
use crate::token::TokenRecord;

fn tok(file: &str, line: usize, offset: usize) -> TokenRecord {
    TokenRecord {
        file_id: Arc::from(file),
        line,
        byte_offset: offset,
        value: Arc::from("x"),
    }
}

#[test]
fn annotate_store_wraps_each_member_region() {
    let dir = tempdir().unwrap();
    let a_path = dir.path().join("a.txt");
    let b_path = dir.path().join("b.txt");
    let body = "one\ntwo\nthree\nfour\nfive\nsix\n";
    fs::write(&a_path, body).unwrap();
    fs::write(&b_path, body).unwrap();

    let a_id = a_path.to_str().unwrap();
    let b_id = b_path.to_str().unwrap();

    let mut store = MatchStore::new();
    // line_count = end.line - start.line = 3: lines 1..=3 are annotated.
    store.add_exact_match(
        [9u8; 20],
        tok(a_id, 1, 0),
        tok(a_id, 4, 30),
        tok(b_id, 1, 0),
        tok(b_id, 4, 30),
    );

    let annotated = annotate_store(&store);
    assert_eq!(annotated, 2);

    let a_out = fs::read_to_string(&a_path).unwrap();
    let lines: Vec<&str> = a_out.lines().collect();
    assert!(lines[0].starts_with("//!DUPLICATE BEGIN 1 -- "));
    assert!(lines[0].contains(b_id));
    assert_eq!(lines[1], "one");
    assert_eq!(lines[2], "two");
    assert_eq!(lines[3], "three");
    assert!(lines[4].starts_with("//!DUPLICATE END 1"));
    assert_eq!(lines[5], "four");
}

#[test]
fn annotate_store_handles_single_line_match() {
    let dir = tempdir().unwrap();
    let a_path = dir.path().join("a.txt");
    let b_path = dir.path().join("b.txt");
    let body = "one\ntwo\nthree\n";
    fs::write(&a_path, body).unwrap();
    fs::write(&b_path, body).unwrap();

    let a_id = a_path.to_str().unwrap();
    let b_id = b_path.to_str().unwrap();

    let mut store = MatchStore::new();
    // start.line == end.line: line_count() == 0, the match lives on one line.
    store.add_exact_match(
        [7u8; 20],
        tok(a_id, 2, 4),
        tok(a_id, 2, 8),
        tok(b_id, 2, 4),
        tok(b_id, 2, 8),
    );

    let annotated = annotate_store(&store);
    assert_eq!(annotated, 2);

    let a_out = fs::read_to_string(&a_path).unwrap();
    let lines: Vec<&str> = a_out.lines().collect();
    assert_eq!(lines[0], "one");
    assert!(lines[1].starts_with("//!DUPLICATE BEGIN 1 -- "));
    assert_eq!(lines[2], "two");
    assert!(lines[3].starts_with("//!DUPLICATE END 1"));
    assert_eq!(lines[4], "three");
}

#[test]
fn annotate_store_skips_missing_file_without_panicking() {
    let mut store = MatchStore::new();
    store.add_exact_match(
        [8u8; 20],
        tok("/nonexistent/a.txt", 1, 0),
        tok("/nonexistent/a.txt", 4, 30),
        tok("/nonexistent/b.txt", 1, 0),
        tok("/nonexistent/b.txt", 4, 30),
    );

    let annotated = annotate_store(&store);
    assert_eq!(annotated, 0);
}
