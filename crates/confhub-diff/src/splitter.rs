//! Multi-file diff splitting
//!
//! A combined diff blob from a Git provider concatenates one `diff --git`
//! section per touched file. The splitter walks it once and emits an
//! independent record per section, in input order.

use crate::types::{ParseWarning, ParsedFileDiff, SplitOutcome};
use regex::Regex;

/// What the scanner is doing between file headers.
#[derive(Clone, Copy)]
enum ScanState {
    /// No record open yet (start of input, or after a flush)
    Idle,
    /// Accumulating body lines for the record at this index
    InRecord(usize),
    /// A malformed header was seen; lines are skipped until the next header
    Skipping,
}

/// Split a combined git diff into per-file records.
///
/// Never fails: sections that cannot be attributed to a file are skipped
/// and reported in [`SplitOutcome::warnings`]. Empty input yields an empty
/// outcome.
pub fn split_combined_diff(raw: &str) -> SplitOutcome {
    let header_re = Regex::new(r"^diff --git a/(.+) b/(.+)$").unwrap();

    let mut outcome = SplitOutcome::default();
    let mut bodies: Vec<Vec<&str>> = Vec::new();
    let mut state = ScanState::Idle;
    let mut orphan_run = false;

    for (idx, line) in raw.lines().enumerate() {
        if line.starts_with("diff --git") {
            orphan_run = false;
            match header_re.captures(line) {
                Some(captures) => {
                    let old_path = captures[1].to_string();
                    let new_path = captures[2].to_string();
                    let is_renamed = old_path != new_path;

                    outcome.records.push(ParsedFileDiff {
                        path: new_path.clone(),
                        old_path,
                        new_path,
                        is_new: false,
                        is_deleted: false,
                        is_renamed,
                        diff: String::new(),
                    });
                    bodies.push(vec![line]);
                    state = ScanState::InRecord(outcome.records.len() - 1);
                }
                None => {
                    tracing::warn!(line = idx + 1, "malformed diff header, section skipped");
                    outcome.warnings.push(ParseWarning::MalformedHeader {
                        line: idx + 1,
                        header: line.to_string(),
                    });
                    state = ScanState::Skipping;
                }
            }
            continue;
        }

        match state {
            ScanState::InRecord(i) => {
                if line.starts_with("new file mode") {
                    outcome.records[i].is_new = true;
                } else if line.starts_with("deleted file mode") {
                    outcome.records[i].is_deleted = true;
                } else if line.starts_with("rename from") || line.starts_with("rename to") {
                    outcome.records[i].is_renamed = true;
                }
                bodies[i].push(line);
            }
            ScanState::Idle => {
                // One warning per contiguous run of unattributable content
                if !line.trim().is_empty() && !orphan_run {
                    outcome
                        .warnings
                        .push(ParseWarning::OrphanedContent { line: idx + 1 });
                    orphan_run = true;
                }
            }
            ScanState::Skipping => {}
        }
    }

    for (record, body) in outcome.records.iter_mut().zip(bodies) {
        record.diff = body.join("\n");
    }

    outcome
}
