//! The `scoremark insights` command.

use std::path::PathBuf;

use anyhow::Result;

use scoremark_core::aggregate::aggregate;
use scoremark_core::insight::synthesize;

use super::{open_repository, resolve_grouping};

pub fn execute(config: Option<PathBuf>, group_by: Option<String>) -> Result<()> {
    let (repo, config) = open_repository(config)?;
    let dimensions = resolve_grouping(&config, group_by.as_deref())?;

    let groups = aggregate(repo.records(), &dimensions);
    let insights = synthesize(repo.records(), &groups, repo.targets(), &config);

    if insights.is_empty() {
        println!("No records yet.");
        return Ok(());
    }
    for insight in &insights {
        println!("- {}", insight.message);
    }
    Ok(())
}
