//! Comparison of group averages against targets.
//!
//! A group with no matching target is `Unknown`, a distinct state that is
//! never coerced to 0.0, so consumers can render "no target set" rather than
//! "on target".

use serde::{Deserialize, Serialize};

use crate::aggregate::GroupSummary;
use crate::model::{Dimension, Target};

/// Signed difference between a group average and its matching target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Deviation {
    /// `average - target.score`; positive means above target.
    Measured(f64),
    /// No target matches this group's academic context.
    Unknown,
}

impl Deviation {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Deviation::Unknown)
    }
}

/// The five dimensions a target is keyed on. Teacher and year never
/// participate in target matching.
const TARGET_DIMS: [Dimension; 5] = [
    Dimension::Subject,
    Dimension::Grade,
    Dimension::Stream,
    Dimension::Term,
    Dimension::ExamType,
];

fn target_dimension_value(target: &Target, dim: Dimension) -> &str {
    match dim {
        Dimension::Subject => &target.subject,
        Dimension::Grade => &target.grade,
        Dimension::Stream => &target.stream,
        Dimension::Term => &target.term,
        Dimension::ExamType => &target.exam_type,
        // Targets carry no teacher or year.
        Dimension::Teacher | Dimension::Year => "",
    }
}

/// Find the target matching a group's academic context.
///
/// The group must have been aggregated over all five target dimensions for a
/// match to be well-defined; a grouping that omitted any of them has no basis
/// for comparison and matches nothing.
pub fn match_target<'a>(group: &GroupSummary, targets: &'a [Target]) -> Option<&'a Target> {
    let context: Vec<(Dimension, &str)> = TARGET_DIMS
        .iter()
        .map(|&dim| group.dimension_value(dim).map(|v| (dim, v)))
        .collect::<Option<_>>()?;

    targets.iter().find(|t| {
        context
            .iter()
            .all(|&(dim, value)| target_dimension_value(t, dim) == value)
    })
}

/// Deviation of one aggregated group from its matching target.
pub fn deviation_for_group(group: &GroupSummary, targets: &[Target]) -> Deviation {
    match match_target(group, targets) {
        Some(target) => Deviation::Measured(group.average - target.score),
        None => Deviation::Unknown,
    }
}
