//! Token-based duplicate code detection: tokenizing, the rolling-hash
//! engine, match verification and clustering, and the report/annotate
//! front ends that sit on top of it.

mod annotate;
mod detector;
mod fingerprint;
mod hashing;
mod report;
mod rolling;
mod store;
mod verify;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::path::PathBuf;
use std::sync::Arc;

use crate::token::lexer;
use crate::token::TokenRecord;
use crate::walk::{ExcludeFilter, WalkConfig};

/// Default number of match sets shown by `detect` unless `--show-all` is given.
const DEFAULT_GROUP_LIMIT: usize = 20;

/// A window of zero tokens can't define a duplicate run; reject it up front
/// rather than let the rolling hasher silently never report anything.
fn check_minmatch(minmatch: usize) -> Result<(), Box<dyn std::error::Error>> {
    if minmatch == 0 {
        return Err("minmatch must be at least 1".into());
    }
    Ok(())
}

/// Walk `paths`, tokenize every recognized source file, and return the
/// (file_id, tokens) pairs ready for the detector. A file whose language
/// couldn't be detected falls back to the generic token spec rather than
/// being dropped; a file that fails to read, decode, or lex is skipped with
/// a warning.
fn tokenize_all(
    paths: &[PathBuf],
    include_tests: bool,
    filter: &ExcludeFilter,
) -> Vec<(Arc<str>, Vec<TokenRecord>)> {
    let mut files = Vec::new();
    for path in paths {
        let config = WalkConfig::new(path, include_tests, filter);
        for (file_path, spec) in config.source_files() {
            let file_id: Arc<str> = Arc::from(file_path.to_string_lossy().as_ref());
            let lex_spec = match spec {
                Some(spec) => lexer::lex_spec_for(spec),
                None => lexer::generic_spec(),
            };
            match lexer::tokenize_file(&file_path, &lex_spec, &file_id) {
                Ok(tokens) if !tokens.is_empty() => files.push((file_id, tokens)),
                Ok(_) => {}
                Err(err) => eprintln!("warning: {}: {err}", file_path.display()),
            }
        }
    }
    files
}

/// `detect` command: tokenize, run the detector, print the report.
pub fn run(
    paths: &[PathBuf],
    minmatch: usize,
    include_tests: bool,
    filter: &ExcludeFilter,
    json: bool,
    show_all: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    check_minmatch(minmatch)?;
    let files = tokenize_all(paths, include_tests, filter);
    let store = detector::find_copies(files, minmatch);

    if json {
        report::print_json_report(&store)
    } else {
        let limit = if show_all { usize::MAX } else { DEFAULT_GROUP_LIMIT };
        report::print_text_report(&store, limit);
        Ok(())
    }
}

/// `annotate` command: tokenize, run the detector, rewrite affected files.
pub fn annotate(
    paths: &[PathBuf],
    minmatch: usize,
    include_tests: bool,
    filter: &ExcludeFilter,
) -> Result<(), Box<dyn std::error::Error>> {
    check_minmatch(minmatch)?;
    let files = tokenize_all(paths, include_tests, filter);
    let store = detector::find_copies(files, minmatch);
    let set_count = store.len();
    let annotated = annotate::annotate_store(&store);
    println!("annotated {annotated} location(s) across {set_count} match set(s)");
    Ok(())
}
