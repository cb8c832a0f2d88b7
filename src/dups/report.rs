//! Renders a `MatchStore` as the textual match report or as JSON.

use serde::Serialize;

use crate::report_helpers::print_json_stdout;

use super::store::{ContentHash, MatchSet, MatchStore};

const SEPARATOR: &str = "==================================================";

fn sort_key(set: &MatchSet) -> Option<(String, usize)> {
    set.first_member().map(|m| (m.file_id().to_string(), m.start.line))
}

/// Clusters sorted by `reported_line_count` descending, tied broken by the
/// lexicographically-smallest `(file_id, start.line)` of the first member.
/// Shared by the text/JSON report and by the annotator, which must process
/// clusters in the same order.
pub fn sorted_clusters(store: &MatchStore) -> Vec<&MatchSet> {
    let mut clusters: Vec<&MatchSet> = store.iter_matches().collect();
    clusters.sort_by(|a, b| {
        b.reported_line_count()
            .cmp(&a.reported_line_count())
            .then_with(|| sort_key(a).cmp(&sort_key(b)))
    });
    clusters
}

fn sorted_clusters_with_hash(store: &MatchStore) -> Vec<(&ContentHash, &MatchSet)> {
    let mut clusters: Vec<(&ContentHash, &MatchSet)> = store.iter_matches_with_hash().collect();
    clusters.sort_by(|(_, a), (_, b)| {
        b.reported_line_count()
            .cmp(&a.reported_line_count())
            .then_with(|| sort_key(a).cmp(&sort_key(b)))
    });
    clusters
}

/// Print the descending-order text report described in the external
/// interface: a separator, a 1-based match rank, the line-count/file-count
/// summary, and one "Starting at" line per member. At most `limit` clusters
/// are printed, mirroring the teacher's `DEFAULT_GROUP_LIMIT` convention for
/// keeping default output readable on large codebases.
pub fn print_text_report(store: &MatchStore, limit: usize) {
    for (i, cluster) in sorted_clusters(store).into_iter().take(limit).enumerate() {
        let mut members = cluster.members().to_vec();
        members.sort_by(|a, b| (a.file_id(), a.start.line).cmp(&(b.file_id(), b.start.line)));

        println!("{SEPARATOR}");
        println!("Match {}:", i + 1);
        println!(
            "Found an approx. {} line duplication in {} files.",
            cluster.reported_line_count(),
            members.len()
        );
        for member in &members {
            println!("Starting at line {} of {}", member.start.line, member.file_id());
        }
    }
}

#[derive(Serialize)]
struct JsonMember {
    file: String,
    start_line: usize,
    end_line: usize,
}

#[derive(Serialize)]
struct JsonMatch {
    content_hash: String,
    line_count: usize,
    members: Vec<JsonMember>,
}

/// Render the same clusters as JSON: `{content_hash, line_count, members}`.
/// `content_hash` is the hex-encoded SHA-1 digest the cluster is keyed by
/// in the `MatchStore`.
pub fn print_json_report(store: &MatchStore) -> Result<(), Box<dyn std::error::Error>> {
    let matches: Vec<JsonMatch> = sorted_clusters_with_hash(store)
        .into_iter()
        .map(|(hash, cluster)| {
            let mut members = cluster.members().to_vec();
            members.sort_by(|a, b| (a.file_id(), a.start.line).cmp(&(b.file_id(), b.start.line)));
            JsonMatch {
                content_hash: hex_encode(hash),
                line_count: cluster.reported_line_count(),
                members: members
                    .iter()
                    .map(|m| JsonMember {
                        file: m.file_id().to_string(),
                        start_line: m.start.line,
                        end_line: m.end.line,
                    })
                    .collect(),
            }
        })
        .collect();

    print_json_stdout(&matches)
}

fn hex_encode(bytes: &ContentHash) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
