//! The `scoremark summary` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use scoremark_core::aggregate::aggregate;
use scoremark_core::deviation::{deviation_for_group, Deviation};
use scoremark_core::model::Dimension;

use super::{csv_field, open_repository, resolve_grouping, write_output};

pub fn execute(config: Option<PathBuf>, group_by: Option<String>, csv: Option<PathBuf>) -> Result<()> {
    let (repo, config) = open_repository(config)?;
    let dimensions = resolve_grouping(&config, group_by.as_deref())?;

    let groups = aggregate(repo.records(), &dimensions);
    if groups.is_empty() {
        println!("No records yet.");
        return Ok(());
    }

    let mut header: Vec<String> = dimensions.iter().map(dimension_header).collect();
    header.extend(["Average".to_string(), "Members".to_string(), "Deviation".to_string()]);

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(groups.len());
    for group in &groups {
        let mut row: Vec<String> = group.dimensions.iter().map(|(_, v)| v.clone()).collect();
        row.push(format!("{:.1}%", group.average));
        row.push(group.member_count.to_string());
        row.push(match deviation_for_group(group, repo.targets()) {
            Deviation::Measured(delta) => format!("{delta:+.1}"),
            Deviation::Unknown => "no target".to_string(),
        });
        rows.push(row);
    }

    let mut table = Table::new();
    table.set_header(header.clone());
    for row in &rows {
        table.add_row(row.iter().map(Cell::new).collect::<Vec<_>>());
    }
    println!("{table}");

    if let Some(path) = csv {
        let mut out = String::new();
        out.push_str(&join_csv(&header));
        out.push('\n');
        for row in &rows {
            out.push_str(&join_csv(row));
            out.push('\n');
        }
        write_output(&path, &out)?;
        println!("CSV written to {}", path.display());
    }

    Ok(())
}

fn dimension_header(dim: &Dimension) -> String {
    match dim {
        Dimension::Teacher => "Teacher",
        Dimension::Subject => "Subject",
        Dimension::Grade => "Grade",
        Dimension::Stream => "Stream",
        Dimension::Term => "Term",
        Dimension::ExamType => "Exam",
        Dimension::Year => "Year",
    }
    .to_string()
}

fn join_csv(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| csv_field(f))
        .collect::<Vec<_>>()
        .join(",")
}
