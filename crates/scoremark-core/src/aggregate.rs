//! Grouping and averaging of score records.
//!
//! Records are partitioned by a caller-chosen ordered tuple of dimensions and
//! each group's arithmetic mean is computed in f64. Group keys are structured
//! tuples of dimension values, never delimiter-joined strings, so a field
//! value containing a delimiter can never collide with another group.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{compare_grades, Dimension, ScoreRecord};

/// Structured grouping key: one value per requested dimension, in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey(pub Vec<String>);

/// One aggregated group of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// The (dimension, value) pairs identifying this group, in the order the
    /// caller requested them.
    pub dimensions: Vec<(Dimension, String)>,
    /// Arithmetic mean of the members' mean scores.
    pub average: f64,
    /// Number of records in the group, always >= 1.
    pub member_count: usize,
}

impl GroupSummary {
    /// Value of one of this group's dimensions, if it participated in the
    /// grouping.
    pub fn dimension_value(&self, dim: Dimension) -> Option<&str> {
        self.dimensions
            .iter()
            .find(|(d, _)| *d == dim)
            .map(|(_, v)| v.as_str())
    }

    /// Human-readable group label for messages and table headers.
    pub fn label(&self) -> String {
        self.dimensions
            .iter()
            .map(|(_, v)| v.as_str())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

/// Group records by the given dimensions and average each group.
///
/// Only groups with at least one member are emitted, so the division is never
/// by zero; an empty input yields an empty output, never NaN. The result is
/// in canonical display order (see [`canonical_group_order`]).
pub fn aggregate(records: &[ScoreRecord], dimensions: &[Dimension]) -> Vec<GroupSummary> {
    let mut order: Vec<GroupKey> = Vec::new();
    let mut members: HashMap<GroupKey, Vec<f64>> = HashMap::new();

    for record in records {
        let key = GroupKey(
            dimensions
                .iter()
                .map(|&d| record.dimension_value(d))
                .collect(),
        );
        match members.get_mut(&key) {
            Some(scores) => scores.push(record.mean_score),
            None => {
                members.insert(key.clone(), vec![record.mean_score]);
                order.push(key);
            }
        }
    }

    let mut groups: Vec<GroupSummary> = order
        .into_iter()
        .map(|key| {
            let scores = &members[&key];
            let average = scores.iter().sum::<f64>() / scores.len() as f64;
            GroupSummary {
                dimensions: dimensions.iter().copied().zip(key.0).collect(),
                average,
                member_count: scores.len(),
            }
        })
        .collect();

    groups.sort_by(|a, b| canonical_group_order(a, b));
    groups
}

/// Weighted mean of all record scores: sum of scores over record count, not
/// an average of group averages. `None` on an empty collection.
pub fn overall_average(records: &[ScoreRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    Some(records.iter().map(|r| r.mean_score).sum::<f64>() / records.len() as f64)
}

/// Canonical display order for records: Grade (numeric ascending), then
/// Stream, Subject, Term, Teacher lexicographic. The sort is stable, so
/// records with equal keys keep their insertion order.
///
/// Applied identically to raw listings and grouped summaries so exported and
/// on-screen views never disagree.
pub fn sort_records(records: &mut [ScoreRecord]) {
    records.sort_by(|a, b| {
        compare_grades(&a.grade, &b.grade)
            .then_with(|| a.stream.cmp(&b.stream))
            .then_with(|| a.subject.cmp(&b.subject))
            .then_with(|| a.term.cmp(&b.term))
            .then_with(|| a.teacher.cmp(&b.teacher))
    });
}

/// Canonical display order for groups, over whichever of the canonical
/// dimensions the grouping included. Missing dimensions compare equal, which
/// keeps the stable first-encounter order for them.
pub fn canonical_group_order(a: &GroupSummary, b: &GroupSummary) -> Ordering {
    let cmp_dim = |dim: Dimension, by: fn(&str, &str) -> Ordering| -> Ordering {
        match (a.dimension_value(dim), b.dimension_value(dim)) {
            (Some(x), Some(y)) => by(x, y),
            _ => Ordering::Equal,
        }
    };

    cmp_dim(Dimension::Grade, compare_grades)
        .then_with(|| cmp_dim(Dimension::Stream, str::cmp))
        .then_with(|| cmp_dim(Dimension::Subject, str::cmp))
        .then_with(|| cmp_dim(Dimension::Term, str::cmp))
        .then_with(|| cmp_dim(Dimension::Teacher, str::cmp))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(subject: &str, grade: &str, stream: &str, score: f64) -> ScoreRecord {
        ScoreRecord {
            teacher: "Achieng".into(),
            subject: subject.into(),
            grade: grade.into(),
            stream: stream.into(),
            term: "Term 1".into(),
            exam_type: "Mid-Term".into(),
            year: 2025,
            mean_score: score,
        }
    }

    const CLASS_DIMS: [Dimension; 5] = [
        Dimension::Subject,
        Dimension::Grade,
        Dimension::Stream,
        Dimension::Term,
        Dimension::Year,
    ];

    #[test]
    fn identical_context_averages_together() {
        let records = vec![
            record("Mathematics", "7", "A", 90.0),
            record("Mathematics", "7", "A", 70.0),
        ];
        let groups = aggregate(&records, &CLASS_DIMS);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].average, 80.0);
        assert_eq!(groups[0].member_count, 2);
    }

    #[test]
    fn empty_input_is_safe() {
        assert!(aggregate(&[], &CLASS_DIMS).is_empty());
        assert_eq!(overall_average(&[]), None);
    }

    #[test]
    fn overall_average_is_weighted_not_average_of_averages() {
        // Group A has three records at 90, group B one record at 50. The
        // average of group averages would be 70; the weighted mean is 80.
        let records = vec![
            record("Mathematics", "7", "A", 90.0),
            record("Mathematics", "7", "A", 90.0),
            record("Mathematics", "7", "A", 90.0),
            record("English", "7", "A", 50.0),
        ];
        assert_eq!(overall_average(&records), Some(80.0));
    }

    #[test]
    fn structured_keys_do_not_collide_on_delimiters() {
        // With string-joined keys "A|B" + "C" would collide with "A" + "B|C".
        let a = record("A|B", "7", "C", 10.0);
        let b = record("A", "7", "B|C", 90.0);
        let groups = aggregate(&[a, b], &[Dimension::Subject, Dimension::Stream]);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn canonical_sort_scenario() {
        let records = vec![
            record("Mathematics", "8", "B", 50.0),
            record("English", "7", "A", 60.0),
            record("Mathematics", "8", "A", 70.0),
        ];
        let groups = aggregate(&records, &CLASS_DIMS);
        let labels: Vec<_> = groups
            .iter()
            .map(|g| {
                format!(
                    "{}-{}-{}",
                    g.dimension_value(Dimension::Grade).unwrap(),
                    g.dimension_value(Dimension::Stream).unwrap(),
                    g.dimension_value(Dimension::Subject).unwrap()
                )
            })
            .collect();
        assert_eq!(
            labels,
            vec!["7-A-English", "8-A-Mathematics", "8-B-Mathematics"]
        );
    }

    #[test]
    fn sort_records_matches_group_order() {
        let mut records = vec![
            record("Mathematics", "8", "B", 50.0),
            record("English", "7", "A", 60.0),
            record("Mathematics", "8", "A", 70.0),
        ];
        sort_records(&mut records);
        assert_eq!(records[0].subject, "English");
        assert_eq!(records[1].stream, "A");
        assert_eq!(records[2].stream, "B");
    }

    #[test]
    fn grade_ten_sorts_after_grade_seven() {
        let records = vec![
            record("Mathematics", "10", "A", 50.0),
            record("Mathematics", "7", "A", 60.0),
        ];
        let groups = aggregate(&records, &CLASS_DIMS);
        assert_eq!(groups[0].dimension_value(Dimension::Grade), Some("7"));
        assert_eq!(groups[1].dimension_value(Dimension::Grade), Some("10"));
    }

    #[test]
    fn stable_order_for_equal_keys() {
        // Two distinct groups that tie on every canonical dimension keep
        // their first-encounter order.
        let mut early = record("Mathematics", "7", "A", 40.0);
        early.year = 2024;
        let mut late = record("Mathematics", "7", "A", 80.0);
        late.year = 2023;
        let groups = aggregate(&[early, late], &CLASS_DIMS);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].dimension_value(Dimension::Year), Some("2024"));
        assert_eq!(groups[1].dimension_value(Dimension::Year), Some("2023"));
    }

    #[test]
    fn group_label_joins_values() {
        let groups = aggregate(
            &[record("Mathematics", "7", "A", 64.0)],
            &[Dimension::Subject, Dimension::Grade],
        );
        assert_eq!(groups[0].label(), "Mathematics / 7");
    }
}
