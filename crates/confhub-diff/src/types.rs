//! Type definitions for diff processing

use serde::Serialize;
use thiserror::Error;

/// One file's slice of a combined git diff, with flags derived from its
/// header and metadata lines.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedFileDiff {
    /// Repository-relative path (the `b/` side of the header)
    pub path: String,
    pub old_path: String,
    pub new_path: String,
    pub is_new: bool,
    pub is_deleted: bool,
    pub is_renamed: bool,
    /// Raw unified-diff body for this file only, header line included
    pub diff: String,
}

/// Result of splitting a combined diff: per-file records in input order,
/// plus warnings for any sections that could not be attributed to a file.
#[derive(Debug, Default, Serialize)]
pub struct SplitOutcome {
    pub records: Vec<ParsedFileDiff>,
    pub warnings: Vec<ParseWarning>,
}

/// A non-fatal problem encountered while splitting a combined diff.
///
/// The splitter never fails outright; anything it cannot attribute to a
/// file record is reported here instead of being dropped silently.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ParseWarning {
    /// A `diff --git` line whose paths could not be extracted. Lines up to
    /// the next header are skipped.
    #[error("line {line}: malformed diff header: {header}")]
    MalformedHeader { line: usize, header: String },

    /// Diff body content encountered while no file record was open.
    #[error("line {line}: content outside any diff section")]
    OrphanedContent { line: usize },
}

/// The "before" and "after" text bodies reconstructed from a single-file
/// unified diff.
///
/// This is an approximation for display purposes: only lines present in
/// emitted hunks appear, so content outside the changed regions is not
/// recovered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentPair {
    pub old_content: String,
    pub new_content: String,
}
