//! Match verification: turn a rolling-hash candidate into a confirmed run.

use sha1::{Digest, Sha1};

use crate::token::{TokenRecord, TokenSourceCache};

use super::fingerprint::FingerprintIndex;
use super::store::MatchStore;

/// `find_matches` from the rolling hasher's perspective: probe the index
/// for every candidate sharing `window_hash`, verify each one that passes
/// the acceptance rule, record confirmed runs in `store`, and return the
/// longest confirmed run length (0 if none matched).
///
/// Every qualifying candidate at the bucket is verified independently, not
/// just the first — a window hash can legitimately collide with more than
/// one distinct earlier anchor (three-way or more duplication). They land
/// in the same `MatchSet` automatically once verified, since they share
/// the same content hash.
pub fn find_matches(
    window_hash: u32,
    anchor: &TokenRecord,
    k: usize,
    index: &FingerprintIndex,
    cache: &TokenSourceCache,
    store: &mut MatchStore,
) -> usize {
    let candidates: Vec<TokenRecord> = index.probe(window_hash).to_vec();
    let mut max_len = 0;

    for candidate in &candidates {
        if candidate.value != anchor.value {
            continue;
        }
        if candidate.file_id == anchor.file_id {
            let far_enough = anchor.byte_offset.abs_diff(candidate.byte_offset) > k;
            let ordered = anchor.line > candidate.line;
            if !(far_enough && ordered) {
                continue;
            }
        }

        let Some((cand_end, anchor_end, len, digest)) = extend(cache, candidate, anchor) else {
            continue;
        };

        if len >= k {
            store.add_exact_match(
                digest,
                candidate.clone(),
                cand_end,
                anchor.clone(),
                anchor_end,
            );
            max_len = max_len.max(len);
        }
    }

    max_len
}

/// Walk both streams forward in lockstep from `a`/`b`, comparing token
/// values, stopping at the first mismatch or end-of-stream. Returns the
/// final token reached on each side, the matched length, and the SHA-1
/// digest accumulated over the matched `value` bytes (anchor first, then
/// each extension token) — or `None` if not even the anchor pair matched.
fn extend(
    cache: &TokenSourceCache,
    a: &TokenRecord,
    b: &TokenRecord,
) -> Option<(TokenRecord, TokenRecord, usize, [u8; 20])> {
    let mut a_iter = cache.tokens_from(&a.file_id, a.byte_offset);
    let mut b_iter = cache.tokens_from(&b.file_id, b.byte_offset);
    let mut hasher = Sha1::new();
    let mut last: Option<(TokenRecord, TokenRecord)> = None;
    let mut len = 0usize;

    loop {
        match (a_iter.next(), b_iter.next()) {
            (Some(ta), Some(tb)) if ta.value == tb.value => {
                hasher.update(ta.value.as_bytes());
                len += 1;
                last = Some((ta, tb));
            }
            _ => break,
        }
    }

    let (last_a, last_b) = last?;
    let digest: [u8; 20] = hasher.finalize().into();
    Some((last_a, last_b, len, digest))
}

#[cfg(test)]
#[path = "verify_test.rs"]
mod tests;
