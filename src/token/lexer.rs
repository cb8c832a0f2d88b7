//! A small multi-language lexer driven by a per-language `LexSpec`.
//!
//! Concrete, swappable implementation of the `TokenSource` capability:
//! skips whitespace and comments, emits identifiers/numbers/operators/
//! string literals as single tokens, and never normalizes identifiers
//! (renamed identifiers are not treated as equal).

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use crate::lang::LanguageSpec;
use crate::util::is_binary_file;

use super::TokenRecord;

/// Per-language lexer configuration: comment/string rules borrowed from
/// the language registry, plus an ordered, longest-match-first table of
/// operator symbols.
pub struct LexSpec {
    pub line_comments: &'static [&'static str],
    pub line_comment_not_before: &'static str,
    pub block_comment: Option<(&'static str, &'static str)>,
    pub nested_block_comments: bool,
    pub single_quote_strings: bool,
    pub triple_quote_strings: bool,
    pub operator_symbols: &'static [&'static str],
}

/// Generic fallback symbol table: common C-style punctuation, longest
/// match first. Used for unrecognized languages so every walked file
/// still produces *some* token stream rather than being silently dropped.
const GENERIC_SYMBOLS: &[&str] = &[
    "===", "!==", "<=>", "&&", "||", "==", "!=", "<=", ">=", "->", "=>", "::", "++", "--", "+=",
    "-=", "*=", "/=", "%=", "&=", "|=", "^=", "+", "-", "*", "/", "%", "&", "|", "^", "~", "!",
    "<", ">", "=", ";", ",", ".", ":", "(", ")", "[", "]", "{", "}", "?", "@", "#", "$",
];

static RUST_SYMBOLS: &[&str] = &[
    "..=", "...", "=>", "->", "&&", "||", "==", "!=", "<=", ">=", "+=", "-=", "*=", "/=", "%=",
    "&=", "|=", "^=", "<<=", ">>=", "<<", ">>", "::", "..", "+", "-", "*", "/", "%", "&", "|", "^",
    "!", "<", ">", "=", ";", ",", ".", ":", "(", ")", "[", "]", "{", "}", "?", "#",
];

static PYTHON_SYMBOLS: &[&str] = &[
    "**=", "//=", ">>=", "<<=", "**", "//", "==", "!=", "<=", ">=", "+=", "-=", "*=", "/=", "%=",
    "&=", "|=", "^=", "<<", ">>", "->", "+", "-", "*", "/", "%", "&", "|", "^", "~", "<", ">", "=",
    ";", ",", ".", ":", "(", ")", "[", "]", "{", "}", "@",
];

static JAVASCRIPT_SYMBOLS: &[&str] = &[
    "===", "!==", ">>>", "**=", ">>=", "<<=", "=>", "&&", "||", "??", "==", "!=", "<=", ">=", "+=",
    "-=", "*=", "/=", "%=", "&=", "|=", "^=", "**", "<<", ">>", "++", "--", "+", "-", "*", "/",
    "%", "&", "|", "^", "~", "!", "<", ">", "=", ";", ",", ".", ":", "(", ")", "[", "]", "{", "}",
    "?",
];

static GO_SYMBOLS: &[&str] = &[
    ":=", "&&", "||", "==", "!=", "<=", ">=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=",
    "<<=", ">>=", "<<", ">>", "<-", "++", "--", "+", "-", "*", "/", "%", "&", "|", "^", "!", "<",
    ">", "=", ";", ",", ".", ":", "(", ")", "[", "]", "{", "}",
];

static C_FAMILY_SYMBOLS: &[&str] = &[
    "->", "::", "&&", "||", "==", "!=", "<=", ">=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=",
    "<<=", ">>=", "<<", ">>", "++", "--", "+", "-", "*", "/", "%", "&", "|", "^", "~", "!", "<",
    ">", "=", ";", ",", ".", ":", "(", ")", "[", "]", "{", "}", "?", "#",
];

static RUBY_SYMBOLS: &[&str] = &[
    "<=>", "===", "**=", "&&=", "||=", "=>", "&&", "||", "==", "!=", "<=", ">=", "+=", "-=", "*=",
    "/=", "%=", "**", "<<", ">>", "..", "+", "-", "*", "/", "%", "&", "|", "^", "~", "!", "<", ">",
    "=", ";", ",", ".", ":", "(", ")", "[", "]", "{", "}", "?", "@",
];

static KOTLIN_SYMBOLS: &[&str] = &[
    "?:", "&&", "||", "==", "!=", "<=", ">=", "+=", "-=", "*=", "/=", "%=", "->", "::", "++", "--",
    "..", "+", "-", "*", "/", "%", "!", "<", ">", "=", ";", ",", ".", ":", "(", ")", "[", "]", "{",
    "}", "?", "@",
];

static SWIFT_SYMBOLS: &[&str] = &[
    "&&", "||", "==", "!=", "<=", ">=", "+=", "-=", "*=", "/=", "%=", "->", "..<", "...", "??",
    "+", "-", "*", "/", "%", "&", "|", "^", "~", "!", "<", ">", "=", ";", ",", ".", ":", "(", ")",
    "[", "]", "{", "}", "?", "@",
];

static SHELL_SYMBOLS: &[&str] = &[
    "&&", "||", "==", "!=", "<=", ">=", ">>", "<<", ";;", "|", "&", ";", "<", ">", "=", "(", ")",
    "[", "]", "{", "}", "!", "$",
];

/// Pick the operator-symbol table for a detected language by name, falling
/// back to the generic table for anything not explicitly listed.
fn operator_symbols_for(name: &str) -> &'static [&'static str] {
    match name {
        "Rust" => RUST_SYMBOLS,
        "Python" => PYTHON_SYMBOLS,
        "JavaScript" | "TypeScript" | "Groovy" | "Gradle" => JAVASCRIPT_SYMBOLS,
        "Go" => GO_SYMBOLS,
        "C" | "C++" | "C#" | "Java" | "Objective-C" | "PHP" | "Dart" | "Scala" | "Zig" => {
            C_FAMILY_SYMBOLS
        }
        "Ruby" => RUBY_SYMBOLS,
        "Kotlin" => KOTLIN_SYMBOLS,
        "Swift" => SWIFT_SYMBOLS,
        "Bourne Shell" | "Bourne Again Shell" | "Zsh" => SHELL_SYMBOLS,
        _ => GENERIC_SYMBOLS,
    }
}

/// Build a `LexSpec` for a detected language by combining its comment and
/// string rules with the matching operator-symbol table.
pub fn lex_spec_for(lang: &LanguageSpec) -> LexSpec {
    LexSpec {
        line_comments: lang.line_comments,
        line_comment_not_before: lang.line_comment_not_before,
        block_comment: lang.block_comment,
        nested_block_comments: lang.nested_block_comments,
        single_quote_strings: lang.single_quote_strings,
        triple_quote_strings: lang.triple_quote_strings,
        operator_symbols: operator_symbols_for(lang.name),
    }
}

/// Spec used when a file's language could not be detected: no comment or
/// string awareness, generic punctuation only. Duplicate detection still
/// runs on these files, just without skipping comments/strings.
pub fn generic_spec() -> LexSpec {
    LexSpec {
        line_comments: &[],
        line_comment_not_before: "",
        block_comment: None,
        nested_block_comments: false,
        single_quote_strings: false,
        triple_quote_strings: false,
        operator_symbols: GENERIC_SYMBOLS,
    }
}

/// Read and tokenize a file on disk. Binary files and invalid-UTF-8
/// content are reported as errors so the caller can skip and continue
/// (this crate's FileOpen/Decode error kinds).
pub fn tokenize_file(
    path: &Path,
    spec: &LexSpec,
    file_id: &Arc<str>,
) -> io::Result<Vec<TokenRecord>> {
    if is_binary_file(path)? {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "binary file"));
    }
    let bytes = fs::read(path)?;
    let source =
        String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(tokenize_str(&source, spec, file_id))
}

/// Tokenize already-decoded source text.
pub fn tokenize_str(source: &str, spec: &LexSpec, file_id: &Arc<str>) -> Vec<TokenRecord> {
    Lexer {
        source,
        spec,
        file_id,
        idx: 0,
        line: 1,
        tokens: Vec::new(),
    }
    .run()
}

struct Lexer<'a> {
    source: &'a str,
    spec: &'a LexSpec,
    file_id: &'a Arc<str>,
    idx: usize,
    line: usize,
    tokens: Vec<TokenRecord>,
}

impl<'a> Lexer<'a> {
    fn rest(&self) -> &'a str {
        &self.source[self.idx..]
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance past one char, tracking line number.
    fn bump(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.idx += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    fn emit(&mut self, start: usize) {
        self.tokens.push(TokenRecord {
            file_id: Arc::clone(self.file_id),
            line: self.line,
            byte_offset: start,
            value: Arc::from(&self.source[start..self.idx]),
        });
    }

    fn run(mut self) -> Vec<TokenRecord> {
        while self.peek_char().is_some() {
            if self.skip_whitespace_or_comment() {
                continue;
            }
            let start = self.idx;
            if self.lex_string(start) {
                continue;
            }
            if self.lex_operator(start) {
                continue;
            }
            let ch = self.peek_char().unwrap();
            if ch.is_ascii_digit() {
                self.lex_number(start);
                continue;
            }
            if ch == '_' || ch.is_alphabetic() {
                self.lex_identifier(start);
                continue;
            }
            // Unrecognized char: emit as its own token so the stream still
            // reflects its presence instead of vanishing.
            self.bump();
            self.emit(start);
        }
        self.tokens
    }

    /// Returns true if whitespace, a line comment, or a block comment was
    /// consumed at the current position (caller should loop and retry).
    fn skip_whitespace_or_comment(&mut self) -> bool {
        if let Some(ch) = self.peek_char()
            && ch.is_whitespace()
        {
            self.bump();
            return true;
        }
        if let Some((open, close)) = self.spec.block_comment
            && self.rest().starts_with(open)
        {
            self.skip_block_comment(open, close);
            return true;
        }
        for marker in self.spec.line_comments {
            if !self.rest().starts_with(marker) {
                continue;
            }
            let after = &self.rest()[marker.len()..];
            if !self.spec.line_comment_not_before.is_empty()
                && after.starts_with(|c| self.spec.line_comment_not_before.contains(c))
            {
                continue;
            }
            while let Some(c) = self.peek_char() {
                if c == '\n' {
                    break;
                }
                self.bump();
            }
            return true;
        }
        false
    }

    fn skip_block_comment(&mut self, open: &str, close: &str) {
        self.idx += open.len();
        let mut depth = 1usize;
        while self.peek_char().is_some() {
            if self.rest().starts_with(close) {
                self.idx += close.len();
                depth -= 1;
                if depth == 0 {
                    return;
                }
                continue;
            }
            if self.spec.nested_block_comments && self.rest().starts_with(open) {
                self.idx += open.len();
                depth += 1;
                continue;
            }
            self.bump();
        }
    }

    /// Try to lex a string/char literal starting at the current position.
    /// Returns true (and emits a token) if one was found.
    fn lex_string(&mut self, start: usize) -> bool {
        if self.spec.triple_quote_strings && self.rest().starts_with("\"\"\"") {
            self.idx += 3;
            self.scan_until("\"\"\"", true);
            self.emit(start);
            return true;
        }
        let Some(ch) = self.peek_char() else {
            return false;
        };
        let quote = if ch == '"' {
            '"'
        } else if ch == '\'' && self.spec.single_quote_strings {
            '\''
        } else {
            return false;
        };
        self.bump();
        loop {
            match self.peek_char() {
                None => break,
                Some(c) if c == quote => {
                    self.bump();
                    break;
                }
                Some('\\') => {
                    self.bump();
                    self.bump();
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
        self.emit(start);
        true
    }

    /// Consume up to and including `closer`, escape-aware when `escaped`.
    fn scan_until(&mut self, closer: &str, escaped: bool) {
        while self.peek_char().is_some() {
            if self.rest().starts_with(closer) {
                self.idx += closer.len();
                return;
            }
            if escaped && self.peek_char() == Some('\\') {
                self.bump();
                self.bump();
                continue;
            }
            self.bump();
        }
    }

    fn lex_operator(&mut self, start: usize) -> bool {
        let rest = self.rest();
        let Some(sym) = self
            .spec
            .operator_symbols
            .iter()
            .find(|sym| rest.starts_with(*sym))
        else {
            return false;
        };
        self.idx += sym.len();
        self.emit(start);
        true
    }

    fn lex_identifier(&mut self, start: usize) {
        while let Some(ch) = self.peek_char() {
            if ch == '_' || ch.is_alphanumeric() {
                self.bump();
            } else {
                break;
            }
        }
        self.emit(start);
    }

    fn lex_number(&mut self, start: usize) {
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                self.bump();
            } else {
                break;
            }
        }
        // Allow one fractional part, e.g. `3.14`, without swallowing a
        // trailing method call like `3.to_string()`.
        if self.peek_char() == Some('.')
            && self.rest()[1..].chars().next().is_some_and(|c| c.is_ascii_digit())
        {
            self.bump();
            while let Some(ch) = self.peek_char() {
                if ch.is_ascii_alphanumeric() || ch == '_' {
                    self.bump();
                } else {
                    break;
                }
            }
        }
        self.emit(start);
    }
}

#[cfg(test)]
#[path = "lexer_test.rs"]
mod tests;
