//! The `scoremark add` command.

use std::path::PathBuf;

use anyhow::Result;

use scoremark_core::conflict::WriteOutcome;
use scoremark_core::model::ScoreRecord;

use super::{open_repository, parse_decision};

#[allow(clippy::too_many_arguments)]
pub fn execute(
    config: Option<PathBuf>,
    teacher: String,
    subject: String,
    grade: String,
    stream: String,
    term: String,
    exam_type: String,
    year: i32,
    mean_score: f64,
    on_conflict: String,
) -> Result<()> {
    let decision = parse_decision(&on_conflict)?;
    let (mut repo, _) = open_repository(config)?;

    let candidate = ScoreRecord {
        teacher,
        subject,
        grade,
        stream,
        term,
        exam_type,
        year,
        mean_score,
    };

    match repo.add_record(candidate, decision)? {
        WriteOutcome::Inserted => println!("Record saved."),
        WriteOutcome::Replaced => println!("Existing record overwritten."),
        WriteOutcome::Unchanged => println!("Record already exists; nothing changed."),
    }
    Ok(())
}
