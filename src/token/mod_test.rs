use super::*;

fn record(file_id: &str, line: usize, byte_offset: usize, value: &str) -> TokenRecord {
    TokenRecord {
        file_id: Arc::from(file_id),
        line,
        byte_offset,
        value: Arc::from(value),
    }
}

#[test]
fn token_record_equality_is_by_value() {
    let a = record("a.rs", 1, 0, "let");
    let b = record("a.rs", 1, 0, "let");
    assert_eq!(a, b);
}

#[test]
fn token_record_clone_shares_arcs() {
    let a = record("a.rs", 1, 0, "let");
    let b = a.clone();
    assert!(Arc::ptr_eq(&a.file_id, &b.file_id));
    assert!(Arc::ptr_eq(&a.value, &b.value));
}

struct VecSource(Vec<TokenRecord>);

impl TokenSource for VecSource {
    fn tokens(&self) -> Box<dyn Iterator<Item = TokenRecord> + '_> {
        Box::new(self.0.iter().cloned())
    }

    fn tokens_from(&self, byte_offset: usize) -> Box<dyn Iterator<Item = TokenRecord> + '_> {
        Box::new(
            self.0
                .iter()
                .filter(move |t| t.byte_offset >= byte_offset)
                .cloned(),
        )
    }
}

#[test]
fn token_source_is_usable_as_trait_object() {
    let source = VecSource(vec![
        record("a.rs", 1, 0, "let"),
        record("a.rs", 1, 4, "x"),
        record("a.rs", 1, 6, "="),
    ]);
    let source: &dyn TokenSource = &source;
    assert_eq!(source.tokens().count(), 3);
    assert_eq!(source.tokens_from(5).count(), 2);
}
