//! Candidate validation for records and targets.
//!
//! Every problem in a candidate is reported at once, so the UI layer can
//! highlight all offending fields in a single round instead of one at a time.

use crate::config::ScoremarkConfig;
use crate::error::ValidationError;
use crate::model::{ScoreRecord, Target};

/// Check a candidate record for completeness and range.
///
/// Rejects the whole write on the first failing candidate; a record is never
/// partially accepted.
pub fn validate_record(
    record: &ScoreRecord,
    config: &ScoremarkConfig,
) -> Result<(), ValidationError> {
    let mut missing = Vec::new();
    let mut out_of_range = Vec::new();

    for (name, value) in [
        ("teacher", &record.teacher),
        ("subject", &record.subject),
        ("grade", &record.grade),
        ("stream", &record.stream),
        ("term", &record.term),
        ("examType", &record.exam_type),
    ] {
        if value.trim().is_empty() {
            missing.push(name);
        }
    }

    if !score_in_range(record.mean_score) {
        out_of_range.push("meanScore");
    }
    if record.year < config.year_min || record.year > config.year_max {
        out_of_range.push("year");
    }

    finish(missing, out_of_range)
}

/// Check a candidate target for completeness and range.
pub fn validate_target(target: &Target) -> Result<(), ValidationError> {
    let mut missing = Vec::new();
    let mut out_of_range = Vec::new();

    for (name, value) in [
        ("subject", &target.subject),
        ("grade", &target.grade),
        ("stream", &target.stream),
        ("term", &target.term),
        ("examType", &target.exam_type),
    ] {
        if value.trim().is_empty() {
            missing.push(name);
        }
    }

    if !score_in_range(target.score) {
        out_of_range.push("score");
    }

    finish(missing, out_of_range)
}

fn score_in_range(score: f64) -> bool {
    score.is_finite() && (0.0..=100.0).contains(&score)
}

fn finish(
    missing_fields: Vec<&'static str>,
    out_of_range_fields: Vec<&'static str>,
) -> Result<(), ValidationError> {
    if missing_fields.is_empty() && out_of_range_fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationError {
            missing_fields,
            out_of_range_fields,
        })
    }
}
