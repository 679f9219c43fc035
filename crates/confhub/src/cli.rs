use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "confhub", version, about = "Config Hub diff and parameter tooling")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level
    #[arg(long, env = "CONFHUB_LOG_LEVEL", default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Split a combined git diff into per-file records
    Split {
        /// Diff file to read (stdin when omitted)
        file: Option<PathBuf>,

        /// Emit records and warnings as JSON
        #[arg(long)]
        json: bool,

        /// Write each record to a chunk_<suffix>.diff file
        #[arg(long)]
        save: bool,

        /// Output directory for --save (defaults to [diff].output_dir)
        #[arg(long, env = "CONFHUB_SAVE_DIR")]
        save_dir: Option<String>,
    },

    /// Reconstruct before/after contents from a single-file diff
    Show {
        /// Diff file to read (stdin when omitted)
        file: Option<PathBuf>,

        /// Emit both contents as JSON
        #[arg(long)]
        json: bool,

        /// Drop @@ hunk header lines from the reconstructed contents
        #[arg(long)]
        strip_hunk_headers: bool,
    },

    /// Compare two flat JSON files of Helm parameters
    Params {
        /// Current parameter values
        current: PathBuf,

        /// Proposed parameter values
        proposed: PathBuf,

        /// Emit the diff buckets as JSON
        #[arg(long)]
        json: bool,

        /// Compare values by exact JSON type instead of string rendering
        #[arg(long)]
        strict: bool,
    },
}
