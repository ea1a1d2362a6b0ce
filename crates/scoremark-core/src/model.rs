//! Core data model types for scoremark.
//!
//! These are the fundamental types the entire scoremark system uses to
//! represent exam mean-score records, targets, and their identity keys.
//! Wire field names (camelCase) match the backup/export format exactly.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A single exam mean-score entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    /// Teacher who recorded the score.
    pub teacher: String,
    /// Subject taught (e.g. "Mathematics").
    pub subject: String,
    /// Grade level (usually numeric, e.g. "7").
    pub grade: String,
    /// Class stream within the grade (e.g. "A").
    pub stream: String,
    /// Academic term (e.g. "Term 1").
    pub term: String,
    /// Exam type (e.g. "Mid-Term", "End-Term").
    pub exam_type: String,
    /// Academic year.
    pub year: i32,
    /// Recorded class mean, as a percentage in [0, 100].
    pub mean_score: f64,
}

/// Identity key of a [`ScoreRecord`]. Unique within the repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub teacher: String,
    pub subject: String,
    pub grade: String,
    pub stream: String,
    pub term: String,
    pub exam_type: String,
    pub year: i32,
}

impl ScoreRecord {
    /// The tuple of fields that must be unique within the repository.
    pub fn key(&self) -> RecordKey {
        RecordKey {
            teacher: self.teacher.clone(),
            subject: self.subject.clone(),
            grade: self.grade.clone(),
            stream: self.stream.clone(),
            term: self.term.clone(),
            exam_type: self.exam_type.clone(),
            year: self.year,
        }
    }

    /// The value this record contributes to a grouping dimension.
    pub fn dimension_value(&self, dim: Dimension) -> String {
        match dim {
            Dimension::Teacher => self.teacher.clone(),
            Dimension::Subject => self.subject.clone(),
            Dimension::Grade => self.grade.clone(),
            Dimension::Stream => self.stream.clone(),
            Dimension::Term => self.term.clone(),
            Dimension::ExamType => self.exam_type.clone(),
            Dimension::Year => self.year.to_string(),
        }
    }
}

/// A performance target for an academic context.
///
/// Targets are independent of teacher and year: one target applies to every
/// record matching the same (subject, grade, stream, term, examType).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub subject: String,
    pub grade: String,
    pub stream: String,
    pub term: String,
    pub exam_type: String,
    /// Target mean, as a percentage in [0, 100].
    pub score: f64,
}

/// Identity key of a [`Target`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetKey {
    pub subject: String,
    pub grade: String,
    pub stream: String,
    pub term: String,
    pub exam_type: String,
}

impl Target {
    pub fn key(&self) -> TargetKey {
        TargetKey {
            subject: self.subject.clone(),
            grade: self.grade.clone(),
            stream: self.stream.clone(),
            term: self.term.clone(),
            exam_type: self.exam_type.clone(),
        }
    }
}

/// A dimension records can be partitioned by during aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Teacher,
    Subject,
    Grade,
    Stream,
    Term,
    ExamType,
    Year,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Teacher => write!(f, "teacher"),
            Dimension::Subject => write!(f, "subject"),
            Dimension::Grade => write!(f, "grade"),
            Dimension::Stream => write!(f, "stream"),
            Dimension::Term => write!(f, "term"),
            Dimension::ExamType => write!(f, "examType"),
            Dimension::Year => write!(f, "year"),
        }
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "teacher" => Ok(Dimension::Teacher),
            "subject" => Ok(Dimension::Subject),
            "grade" => Ok(Dimension::Grade),
            "stream" => Ok(Dimension::Stream),
            "term" => Ok(Dimension::Term),
            "examtype" | "exam-type" | "exam_type" => Ok(Dimension::ExamType),
            "year" => Ok(Dimension::Year),
            other => Err(format!("unknown dimension: {other}")),
        }
    }
}

/// Compare two grade values for display ordering.
///
/// Numeric grades sort ascending by value; non-numeric grades sort after all
/// numeric ones, lexicographically among themselves.
pub fn compare_grades(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<i64>(), b.trim().parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ScoreRecord {
        ScoreRecord {
            teacher: "Achieng".into(),
            subject: "Mathematics".into(),
            grade: "7".into(),
            stream: "A".into(),
            term: "Term 1".into(),
            exam_type: "Mid-Term".into(),
            year: 2025,
            mean_score: 64.5,
        }
    }

    #[test]
    fn dimension_display_and_parse() {
        assert_eq!(Dimension::ExamType.to_string(), "examType");
        assert_eq!("subject".parse::<Dimension>().unwrap(), Dimension::Subject);
        assert_eq!(
            "exam-type".parse::<Dimension>().unwrap(),
            Dimension::ExamType
        );
        assert_eq!("Year".parse::<Dimension>().unwrap(), Dimension::Year);
        assert!("semester".parse::<Dimension>().is_err());
    }

    #[test]
    fn record_serde_uses_wire_field_names() {
        let json = serde_json::to_value(record()).unwrap();
        assert!(json.get("examType").is_some());
        assert!(json.get("meanScore").is_some());
        assert!(json.get("exam_type").is_none());
    }

    #[test]
    fn record_key_ignores_score() {
        let mut a = record();
        let mut b = record();
        a.mean_score = 10.0;
        b.mean_score = 90.0;
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn target_key_ignores_teacher_and_year() {
        let t = Target {
            subject: "Mathematics".into(),
            grade: "7".into(),
            stream: "A".into(),
            term: "Term 1".into(),
            exam_type: "Mid-Term".into(),
            score: 70.0,
        };
        let k = t.key();
        assert_eq!(k.subject, "Mathematics");
        assert_eq!(k.exam_type, "Mid-Term");
    }

    #[test]
    fn grade_comparison_is_numeric_first() {
        assert_eq!(compare_grades("7", "10"), Ordering::Less);
        assert_eq!(compare_grades("10", "7"), Ordering::Greater);
        assert_eq!(compare_grades("7", "PP1"), Ordering::Less);
        assert_eq!(compare_grades("PP1", "PP2"), Ordering::Less);
    }
}
