use std::collections::HashMap;
use std::sync::Arc;

use super::{TokenRecord, TokenSource};

/// A tokenized file's tokens, cached once and queried many times.
///
/// `tokens()` iterates the cached vector in order; `tokens_from` binary
/// searches for the first token at or after a byte offset (tokens are
/// sorted by `byte_offset` by construction) and iterates from there. This
/// is what lets match verification walk forward without re-lexing from
/// byte zero on every candidate, which would make the extension walk in
/// `dups::verify` quadratic.
#[derive(Clone)]
pub struct FileTokens(Arc<[TokenRecord]>);

impl FileTokens {
    pub fn new(tokens: Vec<TokenRecord>) -> Self {
        Self(tokens.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TokenSource for FileTokens {
    fn tokens(&self) -> Box<dyn Iterator<Item = TokenRecord> + '_> {
        Box::new(self.0.iter().cloned())
    }

    fn tokens_from(&self, byte_offset: usize) -> Box<dyn Iterator<Item = TokenRecord> + '_> {
        let start = self.0.partition_point(|t| t.byte_offset < byte_offset);
        Box::new(self.0[start..].iter().cloned())
    }
}

/// Immutable file_id → tokens mapping built once per run before indexing
/// begins. A plain `HashMap` behind a shared reference is safe for
/// concurrent read once construction finishes — Rust's aliasing rules
/// give us that for free, no locking required.
#[derive(Default)]
pub struct TokenSourceCache {
    files: HashMap<Arc<str>, FileTokens>,
}

impl TokenSourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file_id: Arc<str>, tokens: Vec<TokenRecord>) {
        self.files.insert(file_id, FileTokens::new(tokens));
    }

    pub fn get(&self, file_id: &str) -> Option<&FileTokens> {
        self.files.get(file_id)
    }

    /// Yield tokens for `file_id` starting at or after `byte_offset`. Used
    /// by match verification to walk both sides of a candidate in lockstep.
    pub fn tokens_from(
        &self,
        file_id: &str,
        byte_offset: usize,
    ) -> Box<dyn Iterator<Item = TokenRecord> + '_> {
        match self.files.get(file_id) {
            Some(ft) => ft.tokens_from(byte_offset),
            None => Box::new(std::iter::empty()),
        }
    }
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;
