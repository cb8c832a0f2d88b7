//! The fingerprint index: rolling-hash bucket → candidate token records.

use std::collections::HashMap;

use crate::token::TokenRecord;

/// Maps a `WindowHash` to every token record previously seen starting a
/// window with that hash. Append-only during indexing; unbounded growth
/// is expected (one entry per token processed, in the worst case).
#[derive(Default)]
pub struct FingerprintIndex {
    buckets: HashMap<u32, Vec<TokenRecord>>,
}

impl FingerprintIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidates previously recorded under `window_hash`, in insertion
    /// order. Empty slice if the bucket has never been populated.
    pub fn probe(&self, window_hash: u32) -> &[TokenRecord] {
        self.buckets
            .get(&window_hash)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn insert(&mut self, window_hash: u32, token: TokenRecord) {
        self.buckets.entry(window_hash).or_default().push(token);
    }
}

#[cfg(test)]
#[path = "fingerprint_test.rs"]
mod tests;
