//! Top-level detection pass: feed every file's tokens through its own
//! `RollingHasher`, all sharing one `FingerprintIndex` and `MatchStore`.

use std::sync::Arc;

use crate::token::{TokenRecord, TokenSourceCache};

use super::fingerprint::FingerprintIndex;
use super::rolling::RollingHasher;
use super::store::MatchStore;

/// Runs the full detection pass over `files` (file_id, in-order tokens) with
/// window size `k`. Files are processed in the order given; within a file,
/// tokens are fed in lexical order. Both orderings matter: self-match
/// suppression depends on a candidate having been inserted into the index
/// before a later anchor in the same file probes for it.
pub fn find_copies(files: Vec<(Arc<str>, Vec<TokenRecord>)>, k: usize) -> MatchStore {
    let mut cache = TokenSourceCache::new();
    for (file_id, tokens) in &files {
        cache.insert(file_id.clone(), tokens.clone());
    }

    let mut index = FingerprintIndex::new();
    let mut store = MatchStore::new();

    for (_, tokens) in files {
        let mut hasher = RollingHasher::new(k);
        for token in tokens {
            hasher.feed(token, &mut index, &cache, &mut store);
        }
    }

    store
}

#[cfg(test)]
#[path = "detector_test.rs"]
mod tests;
