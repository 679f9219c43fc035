//! Tracing subscriber setup for the confhub CLI.

use std::str::FromStr;
use tracing::Level;

/// Initialize the global tracing subscriber.
///
/// `level` is a textual level ("error", "warn", "info", "debug", "trace");
/// unknown values fall back to `info`. Logs go to stderr so stdout stays
/// machine-readable for `--json` consumers.
pub fn init(level: &str) {
    let level = Level::from_str(level).unwrap_or(Level::INFO);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
