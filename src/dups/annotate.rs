//! Annotator: rewrites source files in place, wrapping each reported
//! duplicate region in `//!DUPLICATE BEGIN`/`END` marker lines.

use std::path::Path;

use crate::util;

use super::report::sorted_clusters;
use super::store::{MatchData, MatchSet, MatchStore};

/// Annotate every file referenced by `store`, in cluster-then-member order.
/// Returns the number of member locations successfully annotated. A failed
/// rewrite of one location is logged and skipped; it does not abort the run
/// or affect later locations (possibly in the same file).
pub fn annotate_store(store: &MatchStore) -> usize {
    let mut next_id = 1u64;
    let mut annotated = 0;

    for cluster in sorted_clusters(store) {
        let mut members = cluster.members().to_vec();
        members.sort_by(|a, b| (a.file_id(), a.start.line).cmp(&(b.file_id(), b.start.line)));

        for member in &members {
            let info = info_string(cluster, member);
            match annotate_member(member, next_id, &info) {
                Ok(()) => annotated += 1,
                Err(err) => eprintln!(
                    "warning: annotate {}: {}",
                    member.file_id(),
                    err
                ),
            }
            next_id += 1;
        }
    }

    annotated
}

/// `file_id:start_line+line_count` for every other member of `cluster`.
fn info_string(cluster: &MatchSet, annotated: &MatchData) -> String {
    cluster
        .members()
        .iter()
        .filter(|m| *m != annotated)
        .map(|m| format!("{}:{}+{}", m.file_id(), m.start.line, m.line_count()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn annotate_member(member: &MatchData, id: u64, info: &str) -> std::io::Result<()> {
    let path = Path::new(member.file_id().as_ref());
    let contents = std::fs::read_to_string(path)?;

    let start_line = member.start.line;
    // A match whose tokens all fall on one physical line has line_count() == 0;
    // clamp to 1 so the wrapped region is never empty (end_line < start_line),
    // which would leave the BEGIN marker without a matching END.
    let end_line = start_line + member.line_count().max(1) - 1;
    let mut out = String::with_capacity(contents.len() + 64);

    for (i, line) in contents.lines().enumerate() {
        let line_no = i + 1;
        if line_no == start_line {
            out.push_str(&format!("//!DUPLICATE BEGIN {id} -- {info}\n"));
        }
        out.push_str(line);
        out.push('\n');
        if line_no == end_line {
            out.push_str(&format!("//!DUPLICATE END {id}\n"));
        }
    }

    util::atomic_write(path, &out)
}

#[cfg(test)]
#[path = "annotate_test.rs"]
mod tests;
