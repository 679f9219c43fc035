//! Hunk-to-content reconstruction
//!
//! Replays the hunks of a single-file unified diff into "before" and
//! "after" text bodies for a side-by-side viewer. The result is
//! intentionally approximate: content outside the emitted hunks is not
//! recoverable from a diff alone.

use crate::types::ContentPair;
use confhub_core::DiffConfig;

/// Options controlling content reconstruction.
#[derive(Debug, Clone)]
pub struct ReconstructOptions {
    /// Keep `@@` hunk header lines in both output buffers as visual
    /// separators. Callers that want plain file content should disable
    /// this and strip nothing afterwards.
    pub include_hunk_headers: bool,
}

impl Default for ReconstructOptions {
    fn default() -> Self {
        Self {
            include_hunk_headers: true,
        }
    }
}

impl From<&DiffConfig> for ReconstructOptions {
    fn from(config: &DiffConfig) -> Self {
        Self {
            include_hunk_headers: config.include_hunk_headers,
        }
    }
}

const PREAMBLE_PREFIXES: &[&str] = &[
    "diff --git",
    "index ",
    "--- ",
    "+++ ",
    "new file mode",
    "deleted file mode",
    "old mode",
    "new mode",
    "similarity index",
    "rename from",
    "rename to",
    "Binary files",
];

fn is_preamble(line: &str) -> bool {
    // "---"/"+++" may appear bare (no path) in hand-edited diffs
    line == "---" || line == "+++" || PREAMBLE_PREFIXES.iter().any(|p| line.starts_with(p))
}

/// Reconstruct the before/after contents of a single-file unified diff.
///
/// Accepts the diff with or without its `diff --git`/`index`/`---`/`+++`
/// preamble. Context lines land in both buffers, `-` lines in the old one,
/// `+` lines in the new one. Unprefixed lines inside a hunk are treated as
/// context so malformed hunks still render something useful.
pub fn reconstruct_contents(diff: &str, opts: &ReconstructOptions) -> ContentPair {
    let mut old_lines: Vec<&str> = Vec::new();
    let mut new_lines: Vec<&str> = Vec::new();
    let mut in_hunk = false;

    for line in diff.lines() {
        if is_preamble(line) {
            continue;
        }

        if line.starts_with("@@") {
            in_hunk = true;
            if opts.include_hunk_headers {
                old_lines.push(line);
                new_lines.push(line);
            }
            continue;
        }

        if !in_hunk {
            continue;
        }

        if let Some(rest) = line.strip_prefix('-') {
            old_lines.push(rest);
        } else if let Some(rest) = line.strip_prefix('+') {
            new_lines.push(rest);
        } else if let Some(rest) = line.strip_prefix(' ') {
            old_lines.push(rest);
            new_lines.push(rest);
        } else if line.starts_with('\\') {
            // "\ No newline at end of file"
            continue;
        } else {
            // Lenient fallback: treat as context
            old_lines.push(line);
            new_lines.push(line);
        }
    }

    ContentPair {
        old_content: old_lines.join("\n"),
        new_content: new_lines.join("\n"),
    }
}
