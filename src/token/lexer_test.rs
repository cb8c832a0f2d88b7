use super::*;

fn rust_spec() -> LexSpec {
    LexSpec {
        line_comments: &["//"],
        line_comment_not_before: "",
        block_comment: Some(("/*", "*/")),
        nested_block_comments: true,
        single_quote_strings: false,
        triple_quote_strings: false,
        operator_symbols: RUST_SYMBOLS,
    }
}

fn values(source: &str, spec: &LexSpec) -> Vec<String> {
    let file_id: Arc<str> = Arc::from("test.rs");
    tokenize_str(source, spec, &file_id)
        .into_iter()
        .map(|t| t.value.to_string())
        .collect()
}

#[test]
fn skips_whitespace_and_line_comments() {
    let spec = rust_spec();
    let toks = values("let x = 1; // a comment\nlet y = 2;", &spec);
    assert!(!toks.iter().any(|v| v.contains("comment")));
    assert_eq!(toks[0], "let");
}

#[test]
fn skips_nested_block_comments() {
    let spec = rust_spec();
    let toks = values("a /* outer /* inner */ still-outer */ b", &spec);
    assert_eq!(toks, vec!["a", "b"]);
}

#[test]
fn string_literal_is_one_token_with_delimiters() {
    let spec = rust_spec();
    let toks = values(r#"let s = "hello world";"#, &spec);
    assert!(toks.contains(&"\"hello world\"".to_string()));
}

#[test]
fn escaped_quote_does_not_end_string_early() {
    let spec = rust_spec();
    let toks = values(r#"let s = "he said \"hi\"";"#, &spec);
    assert!(toks.contains(&"\"he said \\\"hi\\\"\"".to_string()));
}

#[test]
fn longest_match_operator_wins() {
    let spec = rust_spec();
    let toks = values("fn f() -> i32 { x == y }", &spec);
    assert!(toks.contains(&"->".to_string()));
    assert!(toks.contains(&"==".to_string()));
    assert!(!toks.iter().any(|v| v == "-" || v == ">"));
}

#[test]
fn identifiers_and_numbers_are_distinct_tokens() {
    let spec = rust_spec();
    let toks = values("let count = 42;", &spec);
    assert!(toks.contains(&"count".to_string()));
    assert!(toks.contains(&"42".to_string()));
}

#[test]
fn byte_offsets_are_strictly_increasing() {
    let spec = rust_spec();
    let file_id: Arc<str> = Arc::from("test.rs");
    let toks = tokenize_str("let x = 1;", &spec, &file_id);
    for pair in toks.windows(2) {
        assert!(pair[0].byte_offset < pair[1].byte_offset);
    }
}

#[test]
fn line_numbers_track_newlines() {
    let spec = rust_spec();
    let file_id: Arc<str> = Arc::from("test.rs");
    let toks = tokenize_str("a\nb\nc", &spec, &file_id);
    let lines: Vec<_> = toks.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 2, 3]);
}

#[test]
fn generic_spec_still_tokenizes_unknown_languages() {
    let spec = generic_spec();
    let toks = values("foo(bar, 1);", &spec);
    assert!(toks.contains(&"foo".to_string()));
    assert!(toks.contains(&"(".to_string()));
}

#[test]
fn operator_symbols_for_known_and_unknown_languages() {
    assert_eq!(
        operator_symbols_for("Rust").first(),
        RUST_SYMBOLS.first()
    );
    assert_eq!(operator_symbols_for("Esperanto-Lang"), GENERIC_SYMBOLS);
}

#[test]
fn lex_spec_for_combines_comment_rules_and_symbols() {
    let lang = crate::lang::detect(std::path::Path::new("foo.py")).unwrap();
    let spec = lex_spec_for(lang);
    assert_eq!(spec.line_comments, &["#"]);
    assert_eq!(spec.operator_symbols.first(), PYTHON_SYMBOLS.first());
}
