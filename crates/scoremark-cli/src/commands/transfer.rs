//! The `scoremark export` and `scoremark import` commands.

use std::path::PathBuf;

use anyhow::{Context, Result};

use super::{open_repository, parse_decision, write_output};

pub fn export(config: Option<PathBuf>, kind: String, output: Option<PathBuf>) -> Result<()> {
    let (repo, _) = open_repository(config)?;

    let (payload, count) = match kind.as_str() {
        "records" => (repo.export_records()?, repo.records().len()),
        "targets" => (repo.export_targets()?, repo.targets().len()),
        other => anyhow::bail!("unknown export kind: {other} (expected records, targets)"),
    };

    let path = output.unwrap_or_else(|| {
        let date = chrono::Local::now().format("%Y-%m-%d");
        PathBuf::from(format!("{kind}-{date}.json"))
    });
    write_output(&path, &payload)?;
    println!("Exported {count} {kind} to {}", path.display());
    Ok(())
}

pub fn import(
    config: Option<PathBuf>,
    kind: String,
    input: PathBuf,
    on_conflict: String,
) -> Result<()> {
    let decision = parse_decision(&on_conflict)?;
    let (mut repo, _) = open_repository(config)?;

    let payload = std::fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let report = match kind.as_str() {
        "records" => repo.import_records(&payload, decision)?,
        "targets" => repo.import_targets(&payload, decision)?,
        other => anyhow::bail!("unknown import kind: {other} (expected records, targets)"),
    };

    println!(
        "Imported: {} new, {} overwritten, {} skipped",
        report.inserted, report.replaced, report.skipped
    );
    Ok(())
}
