//! Ranked natural-language performance insights.
//!
//! Each insight is a structured record; the `message` is short human text,
//! but final rendering (styling, emoji, layout) is the caller's concern.

use serde::{Deserialize, Serialize};

use crate::aggregate::{overall_average, GroupSummary};
use crate::config::ScoremarkConfig;
use crate::deviation::{deviation_for_group, Deviation};
use crate::model::{ScoreRecord, Target};
use crate::rubric::classify;

/// What an insight is about, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InsightKind {
    /// Weighted mean of all records, classified against the rubric.
    Overall,
    /// Group with the strict-maximum average.
    BestGroup,
    /// Group with the strict-minimum average.
    WorstGroup,
    /// Group average below the urgent threshold.
    UrgentAttention,
    /// Group average below the review threshold.
    NeedsReview,
    /// Group average above the excelling threshold.
    Excelling,
}

/// One synthesized insight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    /// The group or scope the insight refers to (group label, or "overall").
    pub context: String,
    /// The average the insight is based on.
    pub value: f64,
    /// Short human-readable summary.
    pub message: String,
}

/// Synthesize insights from aggregated data, in priority order: overall,
/// best group, worst group, then per-group alerts in canonical group order.
///
/// Ties for best/worst break to the first group in canonical order. An empty
/// record collection yields no insights.
pub fn synthesize(
    records: &[ScoreRecord],
    groups: &[GroupSummary],
    targets: &[Target],
    config: &ScoremarkConfig,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    if let Some(overall) = overall_average(records) {
        let band = classify(overall, &config.rubric);
        insights.push(Insight {
            kind: InsightKind::Overall,
            context: "overall".to_string(),
            value: overall,
            message: format!(
                "Overall mean across {} record(s) is {overall:.1}% ({band})",
                records.len()
            ),
        });
    }

    if let Some(best) = strict_extreme(groups, |a, b| a > b) {
        insights.push(Insight {
            kind: InsightKind::BestGroup,
            context: best.label(),
            value: best.average,
            message: format!(
                "Best performing group: {} averaging {:.1}%",
                best.label(),
                best.average
            ),
        });
    }

    if let Some(worst) = strict_extreme(groups, |a, b| a < b) {
        insights.push(Insight {
            kind: InsightKind::WorstGroup,
            context: worst.label(),
            value: worst.average,
            message: format!(
                "Weakest group: {} averaging {:.1}%",
                worst.label(),
                worst.average
            ),
        });
    }

    for group in groups {
        let Some(kind) = alert_kind(group.average, config) else {
            continue;
        };
        let mut message = match kind {
            InsightKind::UrgentAttention => format!(
                "{} needs urgent attention: average {:.1}%",
                group.label(),
                group.average
            ),
            InsightKind::NeedsReview => format!(
                "{} needs review: average {:.1}%",
                group.label(),
                group.average
            ),
            _ => format!(
                "{} is excelling: average {:.1}%",
                group.label(),
                group.average
            ),
        };
        if let Deviation::Measured(delta) = deviation_for_group(group, targets) {
            message.push_str(&format!(" ({delta:+.1} vs target)"));
        }
        insights.push(Insight {
            kind,
            context: group.label(),
            value: group.average,
            message,
        });
    }

    insights
}

/// First group in canonical order whose average is a strict extreme under
/// `wins` (strictly-greater for best, strictly-less for worst).
fn strict_extreme(
    groups: &[GroupSummary],
    wins: impl Fn(f64, f64) -> bool,
) -> Option<&GroupSummary> {
    let mut extreme: Option<&GroupSummary> = None;
    for group in groups {
        match extreme {
            Some(current) if !wins(group.average, current.average) => {}
            _ => extreme = Some(group),
        }
    }
    extreme
}

/// Alert tier for a group average, if any. Averages between the review and
/// excelling thresholds are silent.
fn alert_kind(average: f64, config: &ScoremarkConfig) -> Option<InsightKind> {
    if average < config.alerts.urgent_below {
        Some(InsightKind::UrgentAttention)
    } else if average < config.alerts.review_below {
        Some(InsightKind::NeedsReview)
    } else if average > config.alerts.excelling_above {
        Some(InsightKind::Excelling)
    } else {
        None
    }
}
