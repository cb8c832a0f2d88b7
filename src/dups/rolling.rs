//! The rolling hasher: a three-state FSM per token stream.

use std::collections::VecDeque;

use crate::token::{TokenRecord, TokenSourceCache};

use super::fingerprint::FingerprintIndex;
use super::hashing;
use super::store::MatchStore;
use super::verify;

/// FILLING while the window has fewer than K tokens (hash updates only),
/// SCANNING once full with no pending skip (probe + insert every step),
/// SKIPPING while suppressing the overlapping candidates inside a run
/// already confirmed. Terminal on end-of-stream; whatever is left in the
/// window at that point is never flushed into the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HasherState {
    Filling,
    Scanning,
    Skipping,
}

/// Consumes one token stream, maintaining a sliding window of the last K
/// token hashes, probing the shared `FingerprintIndex` and recording
/// confirmed runs in the shared `MatchStore`.
pub struct RollingHasher {
    k: usize,
    base_pow: u32,
    window: VecDeque<(u8, TokenRecord)>,
    window_hash: u32,
    skip: usize,
}

impl RollingHasher {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            base_pow: hashing::base_pow(k.saturating_sub(1)),
            window: VecDeque::with_capacity(k),
            window_hash: 0,
            skip: 0,
        }
    }

    pub fn state(&self) -> HasherState {
        if self.window.len() < self.k {
            HasherState::Filling
        } else if self.skip > 0 {
            HasherState::Skipping
        } else {
            HasherState::Scanning
        }
    }

    /// Feed one token, performing the eviction/probe/insert step described
    /// in the rolling-hash algorithm, then appending the new token.
    pub fn feed(
        &mut self,
        token: TokenRecord,
        index: &mut FingerprintIndex,
        cache: &TokenSourceCache,
        store: &mut MatchStore,
    ) {
        let h = hashing::token_hash(&token.value);

        if self.k > 0 && self.window.len() == self.k {
            let (h0, t0) = self.window.pop_front().expect("window at capacity");

            if self.skip == 0 {
                let max_len = verify::find_matches(self.window_hash, &t0, self.k, index, cache, store);
                self.skip = max_len.saturating_sub(1);
            } else {
                self.skip -= 1;
            }

            // Inserted after match-finding so t0 cannot match itself.
            index.insert(self.window_hash, t0);
            self.window_hash = hashing::roll_out(self.window_hash, h0, self.base_pow);
        }

        self.window.push_back((h, token));
        self.window_hash = hashing::roll_in(self.window_hash, h);
    }
}

#[cfg(test)]
#[path = "rolling_test.rs"]
mod tests;
