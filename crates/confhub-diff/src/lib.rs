//! Combined git diff splitting and hunk content reconstruction
//!
//! This crate turns the raw unified-diff text returned by an application's
//! Git provider into structured, per-file records, and replays the hunks of
//! a single-file diff into "before" and "after" text bodies for side-by-side
//! rendering. Both operations are pure and best-effort: malformed input
//! degrades to partial output plus warnings, never a panic.

mod reconstruct;
mod save;
mod splitter;
mod types;

pub use reconstruct::{reconstruct_contents, ReconstructOptions};
pub use save::{chunk_suffix, export_chunks};
pub use splitter::split_combined_diff;
pub use types::{ContentPair, ParseWarning, ParsedFileDiff, SplitOutcome};
