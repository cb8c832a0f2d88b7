//! Match store: confirmed duplicate runs, clustered by content hash.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::token::TokenRecord;

/// 160-bit SHA-1 digest over the matched token-value sequence, used as the
/// Match Store key so all occurrences of the same canonical run cluster
/// together regardless of which candidate pair first discovered them.
pub type ContentHash = [u8; 20];

/// One occurrence of a duplicate run. Equality and hashing are defined
/// solely by `(file_id, start.line)`, which collapses multiple overlapping
/// discoveries of the same region into one entry.
#[derive(Debug, Clone)]
pub struct MatchData {
    pub start: TokenRecord,
    pub end: TokenRecord,
}

impl MatchData {
    /// Builds a match occurrence, asserting the invariants from the data
    /// model: start/end share a file and are correctly ordered. A violation
    /// here indicates an engine bug, not bad input, so it aborts rather
    /// than being swallowed.
    pub fn new(start: TokenRecord, end: TokenRecord) -> Self {
        assert_eq!(start.file_id, end.file_id, "match spans two files");
        assert!(start.line <= end.line, "match end precedes its start line");
        assert!(
            start.byte_offset < end.byte_offset,
            "match end does not follow its start byte offset"
        );
        Self { start, end }
    }

    pub fn file_id(&self) -> &Arc<str> {
        &self.start.file_id
    }

    pub fn line_count(&self) -> usize {
        self.end.line - self.start.line
    }
}

impl PartialEq for MatchData {
    fn eq(&self, other: &Self) -> bool {
        self.start.file_id == other.start.file_id && self.start.line == other.start.line
    }
}

impl Eq for MatchData {}

impl Hash for MatchData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.file_id.hash(state);
        self.start.line.hash(state);
    }
}

/// All locations sharing one `ContentHash`.
#[derive(Default)]
pub struct MatchSet {
    members: Vec<MatchData>,
}

impl MatchSet {
    /// Insert `data`, replacing any existing member with the same
    /// `(file_id, start.line)` key (idempotent re-discovery).
    fn insert(&mut self, data: MatchData) {
        if let Some(existing) = self
            .members
            .iter_mut()
            .find(|m| **m == data)
        {
            *existing = data;
        } else {
            self.members.push(data);
        }
    }

    pub fn members(&self) -> &[MatchData] {
        &self.members
    }

    /// Minimum `line_count` across members — conservative because the same
    /// token run can straddle a different number of blank lines on each
    /// side of the match.
    pub fn reported_line_count(&self) -> usize {
        self.members
            .iter()
            .map(MatchData::line_count)
            .min()
            .unwrap_or(0)
    }

    /// Lexicographically-smallest `(file_id, start.line)` member, used as
    /// the tie-break anchor for sorting clusters and ordering their
    /// member listing.
    pub fn first_member(&self) -> Option<&MatchData> {
        self.members
            .iter()
            .min_by(|a, b| (a.file_id(), a.start.line).cmp(&(b.file_id(), b.start.line)))
    }
}

/// `ContentHash → MatchSet`, populated during a single indexing pass and
/// drained read-only afterward. Clusters of size 1 are suppressed from
/// `iter_matches`.
#[derive(Default)]
pub struct MatchStore {
    clusters: HashMap<ContentHash, MatchSet>,
}

impl MatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one confirmed run, `L` tokens long, found between the two
    /// sides. Constructs two `MatchData` (one per side) and adds both to
    /// the `MatchSet` for `content_hash`.
    pub fn add_exact_match(
        &mut self,
        content_hash: ContentHash,
        a_start: TokenRecord,
        a_end: TokenRecord,
        b_start: TokenRecord,
        b_end: TokenRecord,
    ) {
        let set = self.clusters.entry(content_hash).or_default();
        set.insert(MatchData::new(a_start, a_end));
        set.insert(MatchData::new(b_start, b_end));
    }

    /// Yields clusters of size >= 2, in unspecified order. Callers must
    /// sort (by `reported_line_count` descending, tie-broken by the
    /// lexicographically-smallest member) for deterministic output.
    pub fn iter_matches(&self) -> impl Iterator<Item = &MatchSet> {
        self.clusters.values().filter(|set| set.members.len() >= 2)
    }

    /// Like `iter_matches`, but paired with the `ContentHash` each cluster
    /// is keyed by — needed by the JSON report, which surfaces the digest.
    pub fn iter_matches_with_hash(&self) -> impl Iterator<Item = (&ContentHash, &MatchSet)> {
        self.clusters
            .iter()
            .filter(|(_, set)| set.members.len() >= 2)
    }

    pub fn len(&self) -> usize {
        self.iter_matches().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
