//! Subcommand implementations.

use anyhow::{bail, Context, Result};
use confhub_core::Config;
use confhub_diff::{
    export_chunks, reconstruct_contents, split_combined_diff, ReconstructOptions, SplitOutcome,
};
use confhub_params::{compare_parameters, EqualityPolicy, ParameterDiff};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Read a diff from the given file, or stdin when absent.
fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

fn log_warnings(outcome: &SplitOutcome) {
    for warning in &outcome.warnings {
        tracing::warn!("{}", warning);
    }
}

fn change_marker(record: &confhub_diff::ParsedFileDiff) -> &'static str {
    if record.is_new {
        "added"
    } else if record.is_deleted {
        "deleted"
    } else if record.is_renamed {
        "renamed"
    } else {
        "modified"
    }
}

pub fn run_split(
    file: Option<PathBuf>,
    json: bool,
    save: bool,
    save_dir: Option<String>,
    config: &Config,
) -> Result<()> {
    let input = read_input(file.as_ref())?;
    let outcome = split_combined_diff(&input);

    if save {
        let default_dir = config.diff.clone().unwrap_or_default().output_dir;
        let dir = save_dir.as_deref().unwrap_or(&default_dir);
        let written = export_chunks(&outcome.records, dir)
            .with_context(|| format!("failed to export chunks to {}", dir))?;
        tracing::info!(count = written.len(), dir, "exported diff chunks");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        log_warnings(&outcome);
        for record in &outcome.records {
            if record.is_renamed {
                println!(
                    "{:<9} {} -> {}",
                    change_marker(record),
                    record.old_path,
                    record.new_path
                );
            } else {
                println!("{:<9} {}", change_marker(record), record.path);
            }
        }
    }

    Ok(())
}

pub fn run_show(
    file: Option<PathBuf>,
    json: bool,
    strip_hunk_headers: bool,
    config: &Config,
) -> Result<()> {
    let input = read_input(file.as_ref())?;

    let mut opts = config
        .diff
        .as_ref()
        .map(ReconstructOptions::from)
        .unwrap_or_default();
    if strip_hunk_headers {
        opts.include_hunk_headers = false;
    }

    let pair = reconstruct_contents(&input, &opts);

    if json {
        println!("{}", serde_json::to_string_pretty(&pair)?);
    } else {
        println!("=== before ===");
        println!("{}", pair.old_content);
        println!("=== after ===");
        println!("{}", pair.new_content);
    }

    Ok(())
}

/// Load a flat JSON object of parameters from disk.
fn read_params_file(path: &Path) -> Result<BTreeMap<String, Value>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    let Value::Object(map) = value else {
        bail!("{} must contain a flat JSON object", path.display());
    };

    Ok(map.into_iter().collect())
}

fn resolve_policy(strict: bool, config: &Config) -> EqualityPolicy {
    if strict {
        return EqualityPolicy::Strict;
    }

    let configured = config.params.clone().unwrap_or_default().equality;
    configured.parse().unwrap_or_else(|e| {
        tracing::warn!("{}, using coerced", e);
        EqualityPolicy::default()
    })
}

fn print_param_summary(diff: &ParameterDiff) {
    for (key, value) in &diff.added {
        println!("+ {} = {}", key, value);
    }
    for (key, change) in &diff.modified {
        println!("~ {}: {} -> {}", key, change.current, change.proposed);
    }
    for (key, value) in &diff.removed {
        println!("- {} = {}", key, value);
    }
    println!("unchanged: {}", diff.unchanged.len());
}

pub fn run_params(
    current: PathBuf,
    proposed: PathBuf,
    json: bool,
    strict: bool,
    config: &Config,
) -> Result<()> {
    let current_params = read_params_file(&current)?;
    let proposed_params = read_params_file(&proposed)?;
    let policy = resolve_policy(strict, config);

    let diff = compare_parameters(&current_params, &proposed_params, policy);

    if json {
        println!("{}", serde_json::to_string_pretty(&diff)?);
    } else {
        print_param_summary(&diff);
        if diff.is_clean() {
            tracing::info!("no parameter changes");
        }
    }

    Ok(())
}
