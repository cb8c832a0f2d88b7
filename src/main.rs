//! `dupkarp` — a CLI tool for token-based duplicate code detection.
//!
//! Tokenizes source files with a language-aware lexer and finds duplicated
//! regions by rolling-hashing fixed-width windows of tokens, verifying
//! candidate matches by lockstep extension, and clustering confirmed
//! matches into match sets by content hash. Duplicated regions can
//! optionally be annotated in place with marker comments.
//!
//! The dispatch pattern is uniform: parse CLI args with `clap`, resolve
//! the analysis paths (defaulting to "."), and delegate to the `dups`
//! module's `run()`/`annotate()` entry points.

/// CLI argument definitions using `clap` derive macros.
mod cli;
/// Duplicate detection: tokenizing, rolling hash, match verification,
/// match store, annotation, and reporting.
mod dups;
/// Language specification registry and detection.
mod lang;
/// Shared report formatting utilities (separators, path widths, JSON output).
mod report_helpers;
/// Token records, lexing, and the token source cache.
mod token;
/// Shared utilities (binary detection, atomic file rewrite).
mod util;
/// Filesystem walking with .gitignore support and test exclusion.
mod walk;

use std::path::PathBuf;

use clap::Parser;

use cli::{Cli, CommonArgs, Commands};
use walk::ExcludeFilter;

/// Resolve a set of analysis paths, defaulting to the current directory
/// when none were given.
fn resolve_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths
    }
}

/// Run an analysis command, printing errors to stderr and exiting with
/// code 1 on failure.
fn run_command(f: impl FnOnce() -> Result<(), Box<dyn std::error::Error>>) {
    if let Err(err) = f() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Application entry point: parse CLI arguments and dispatch to the
/// appropriate duplicate-detection command.
fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Detect {
            common,
            minmatch,
            show_all,
        } => {
            let CommonArgs {
                paths,
                json,
                include_tests,
                exclude_ext,
                exclude_dir,
                exclude_glob,
            } = common;
            let paths = resolve_paths(paths);
            let filter = ExcludeFilter::new(&[], &exclude_ext, &exclude_dir, &exclude_glob);
            run_command(|| dups::run(&paths, minmatch, include_tests, &filter, json, show_all));
        }
        Commands::Annotate { common, minmatch } => {
            let CommonArgs {
                paths,
                json: _,
                include_tests,
                exclude_ext,
                exclude_dir,
                exclude_glob,
            } = common;
            let paths = resolve_paths(paths);
            let filter = ExcludeFilter::new(&[], &exclude_ext, &exclude_dir, &exclude_glob);
            run_command(|| dups::annotate(&paths, minmatch, include_tests, &filter));
        }
    }
}
