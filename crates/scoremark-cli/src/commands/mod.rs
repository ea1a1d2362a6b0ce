//! CLI subcommand implementations.

pub mod add;
pub mod init;
pub mod insights;
pub mod list;
pub mod remove;
pub mod summary;
pub mod target;
pub mod transfer;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Result;

use scoremark_core::config::{load_config_from, ScoremarkConfig};
use scoremark_core::conflict::ConflictDecision;
use scoremark_core::model::Dimension;
use scoremark_store::{JsonStore, Repository};

/// Load config and open the repository it points at.
pub fn open_repository(config_path: Option<PathBuf>) -> Result<(Repository, ScoremarkConfig)> {
    let config = load_config_from(config_path.as_deref())?;
    let store = JsonStore::new(&config.data_dir);
    let repo = Repository::open(store, config.clone());
    Ok((repo, config))
}

/// Parse an `--on-conflict` flag value.
pub fn parse_decision(s: &str) -> Result<ConflictDecision> {
    match s.to_lowercase().as_str() {
        "overwrite" => Ok(ConflictDecision::Overwrite),
        "keep" | "keep-existing" => Ok(ConflictDecision::KeepExisting),
        "cancel" => Ok(ConflictDecision::Cancel),
        other => anyhow::bail!("unknown conflict policy: {other} (expected overwrite, keep, cancel)"),
    }
}

/// Resolve a `--group-by` value: a preset name from config, or a
/// comma-separated dimension list. `None` uses the configured default preset.
pub fn resolve_grouping(config: &ScoremarkConfig, group_by: Option<&str>) -> Result<Vec<Dimension>> {
    let spec = group_by.unwrap_or(config.default_grouping.as_str());
    if let Some(dims) = config.grouping(spec) {
        return Ok(dims.to_vec());
    }
    spec.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| Dimension::from_str(s).map_err(anyhow::Error::msg))
        .collect::<Result<Vec<_>>>()
        .and_then(|dims| {
            if dims.is_empty() {
                anyhow::bail!("empty grouping: {spec}");
            }
            Ok(dims)
        })
}

/// Minimal CSV field quoting for the summary export.
pub fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Write a file, creating parent directories as needed.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;
    Ok(())
}
