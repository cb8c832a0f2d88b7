use super::*;

fn record(byte_offset: usize, value: &str) -> TokenRecord {
    TokenRecord {
        file_id: Arc::from("a.rs"),
        line: 1,
        byte_offset,
        value: Arc::from(value),
    }
}

#[test]
fn file_tokens_tokens_yields_in_order() {
    let ft = FileTokens::new(vec![record(0, "a"), record(2, "b"), record(4, "c")]);
    let values: Vec<_> = ft.tokens().map(|t| t.value.to_string()).collect();
    assert_eq!(values, vec!["a", "b", "c"]);
}

#[test]
fn file_tokens_from_finds_first_at_or_after_offset() {
    let ft = FileTokens::new(vec![record(0, "a"), record(5, "b"), record(10, "c")]);
    let values: Vec<_> = ft.tokens_from(6).map(|t| t.value.to_string()).collect();
    assert_eq!(values, vec!["c"]);
}

#[test]
fn file_tokens_from_exact_offset_is_inclusive() {
    let ft = FileTokens::new(vec![record(0, "a"), record(5, "b")]);
    let values: Vec<_> = ft.tokens_from(5).map(|t| t.value.to_string()).collect();
    assert_eq!(values, vec!["b"]);
}

#[test]
fn file_tokens_from_past_end_is_empty() {
    let ft = FileTokens::new(vec![record(0, "a")]);
    assert_eq!(ft.tokens_from(100).count(), 0);
}

#[test]
fn file_tokens_len_and_is_empty() {
    assert!(FileTokens::new(vec![]).is_empty());
    assert_eq!(FileTokens::new(vec![record(0, "a")]).len(), 1);
}

#[test]
fn cache_insert_and_get() {
    let mut cache = TokenSourceCache::new();
    cache.insert(Arc::from("a.rs"), vec![record(0, "a")]);
    assert!(cache.get("a.rs").is_some());
    assert!(cache.get("missing.rs").is_none());
}

#[test]
fn cache_tokens_from_unknown_file_is_empty() {
    let cache = TokenSourceCache::new();
    assert_eq!(cache.tokens_from("missing.rs", 0).count(), 0);
}

#[test]
fn cache_tokens_from_delegates_to_file() {
    let mut cache = TokenSourceCache::new();
    cache.insert(Arc::from("a.rs"), vec![record(0, "a"), record(5, "b")]);
    let values: Vec<_> = cache
        .tokens_from("a.rs", 1)
        .map(|t| t.value.to_string())
        .collect();
    assert_eq!(values, vec!["b"]);
}
