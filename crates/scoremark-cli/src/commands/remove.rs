//! The `scoremark remove` command.

use std::path::PathBuf;

use anyhow::Result;

use scoremark_core::model::RecordKey;

use super::open_repository;

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
) -> Result<()> {
    let (mut repo, _) = open_repository(config)?;
    let key = RecordKey {
        teacher,
        subject,
        grade,
        stream,
        term,
        exam_type,
        year,
    };
    if repo.remove_record(&key)? {
        println!("Record removed.");
    } else {
        println!("No such record.");
    }
    Ok(())
}
