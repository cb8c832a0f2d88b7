/// CLI argument definitions for the `dupkarp` command.
///
/// Defines all subcommands, their arguments, and long help text
/// using the `clap` derive macros.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "dupkarp", version, about = "Token-based duplicate code detector")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Common arguments shared by both analysis commands.
#[derive(Args)]
pub struct CommonArgs {
    /// Directories or files to analyze (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Include test files and directories in analysis (excluded by default)
    #[arg(long)]
    pub include_tests: bool,

    /// File extensions to exclude (repeatable, e.g. --exclude-ext min.js)
    #[arg(long = "exclude-ext")]
    pub exclude_ext: Vec<String>,

    /// Directory names to exclude (repeatable)
    #[arg(long = "exclude-dir")]
    pub exclude_dir: Vec<String>,

    /// Glob patterns to exclude (repeatable, e.g. --exclude 'vendor/**')
    #[arg(long = "exclude")]
    pub exclude_glob: Vec<String>,
}

/// All available analysis subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Detect duplicate code across files using token-level rolling hashes
    #[command(long_about = "\
Detect duplicate code across files using token-level rolling hashes.

Unlike line-based detection, duplicates are found over the token stream,
so differences in whitespace, indentation, and line breaks do not prevent
a match. Each file is tokenized with a language-aware lexer (comments and
string contents are excluded from the token stream) and a Rabin-Karp
style rolling hash scans fixed-width windows of `minmatch` tokens.

Matching windows are verified by extending token-for-token in both
directions, then clustered into match sets by SHA-1 content hash.

Examples:
  dupkarp detect                        # scan current directory
  dupkarp detect src/ lib/              # scan specific directories
  dupkarp detect --minmatch 50          # shorter minimum match length
  dupkarp detect --json                 # machine-readable output")]
    Detect {
        #[command(flatten)]
        common: CommonArgs,

        /// Minimum match length in tokens (default: 100)
        #[arg(long, default_value = "100")]
        minmatch: usize,

        /// Show all match sets (default: top 20)
        #[arg(long)]
        show_all: bool,
    },

    /// Detect duplicates and annotate source files with markers
    #[command(long_about = "\
Detect duplicate code and rewrite the affected source files in place,
wrapping each duplicated region with `//!DUPLICATE BEGIN`/`//!DUPLICATE END`
marker comments that reference the other members of its match set.

Each file is rewritten atomically (written to a sibling temporary file,
then renamed over the original); a write failure for one file leaves
that file untouched and does not abort annotation of the rest.

Examples:
  dupkarp annotate                      # annotate current directory
  dupkarp annotate --minmatch 50 src/   # lower threshold, specific path")]
    Annotate {
        #[command(flatten)]
        common: CommonArgs,

        /// Minimum match length in tokens (default: 100)
        #[arg(long, default_value = "100")]
        minmatch: usize,
    },
}
