//! Token records, the `TokenSource` capability, and the bundled lexer.
//!
//! The engine depends only on the `TokenSource` trait, never on a concrete
//! lexer: `token::lexer` is the default (and only) implementation, feeding
//! a `TokenSourceCache` that both the rolling hasher and match verification
//! read from.
mod cache;
pub mod lexer;

pub use cache::{FileTokens, TokenSourceCache};

use std::sync::Arc;

/// A single lexical token emitted by a `TokenSource`.
///
/// `file_id` and `value` are `Arc<str>`: the same file_id is stamped on
/// every token of a file, and the same value text (keywords, punctuation)
/// recurs constantly across the corpus, so sharing keeps the per-token
/// record small despite being held for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    pub file_id: Arc<str>,
    pub line: usize,
    pub byte_offset: usize,
    pub value: Arc<str>,
}

/// Capability any token producer must implement. The engine is generic
/// only insofar as it calls through this trait; it is not parameterized
/// by a lexer implementation choice at the type level.
pub trait TokenSource {
    /// Yield every token in file order, starting from the beginning.
    /// Restartable: calling this again yields the same sequence.
    fn tokens(&self) -> Box<dyn Iterator<Item = TokenRecord> + '_>;

    /// Yield tokens whose `byte_offset` is >= `byte_offset`, in file order.
    /// Used by match verification to walk forward from a candidate point
    /// without re-lexing from the start of the file.
    fn tokens_from(&self, byte_offset: usize) -> Box<dyn Iterator<Item = TokenRecord> + '_>;
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
