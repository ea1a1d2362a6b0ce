//! The `scoremark list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use scoremark_core::aggregate::sort_records;
use scoremark_core::rubric::classify;

use super::open_repository;

pub fn execute(config: Option<PathBuf>) -> Result<()> {
    let (repo, config) = open_repository(config)?;

    let mut records = repo.records().to_vec();
    if records.is_empty() {
        println!("No records yet.");
        return Ok(());
    }
    sort_records(&mut records);

    let mut table = Table::new();
    table.set_header(vec![
        "#", "Teacher", "Subject", "Grade", "Stream", "Term", "Exam", "Year", "Mean", "Band",
    ]);
    for (i, r) in records.iter().enumerate() {
        let band = classify(r.mean_score, &config.rubric);
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&r.teacher),
            Cell::new(&r.subject),
            Cell::new(&r.grade),
            Cell::new(&r.stream),
            Cell::new(&r.term),
            Cell::new(&r.exam_type),
            Cell::new(r.year),
            Cell::new(format!("{:.1}%", r.mean_score)),
            Cell::new(format!("{} ({})", band.label(), band.code())),
        ]);
    }

    println!("{table}");
    println!("{} record(s)", records.len());
    Ok(())
}
