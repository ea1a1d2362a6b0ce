//! Rubric classification of mean scores.
//!
//! The four-tier CBC-style rubric: Below / Approaching / Meeting / Exceeding.
//! `classify` is total and deterministic over [0, 100]; out-of-range input is
//! rejected upstream by the validator, not here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::RubricThresholds;

/// A rubric performance band. Ordered so that `rank` is monotone in score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Band {
    Below,
    Approaching,
    Meeting,
    Exceeding,
}

impl Band {
    /// Numeric rank, 0 (Below) through 3 (Exceeding).
    pub fn rank(&self) -> u8 {
        match self {
            Band::Below => 0,
            Band::Approaching => 1,
            Band::Meeting => 2,
            Band::Exceeding => 3,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Band::Below => "Below",
            Band::Approaching => "Approaching",
            Band::Meeting => "Meeting",
            Band::Exceeding => "Exceeding",
        }
    }

    /// Two-letter report code.
    pub fn code(&self) -> &'static str {
        match self {
            Band::Below => "BE",
            Band::Approaching => "AE",
            Band::Meeting => "ME",
            Band::Exceeding => "EE",
        }
    }

    /// Hex color used by render/export layers.
    pub fn color_code(&self) -> &'static str {
        match self {
            Band::Below => "#ef4444",
            Band::Approaching => "#f59e0b",
            Band::Meeting => "#2563eb",
            Band::Exceeding => "#16a34a",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a mean score against the rubric.
///
/// Boundary values belong to the higher tier: a score equal to a threshold
/// classifies into that threshold's band.
pub fn classify(score: f64, thresholds: &RubricThresholds) -> Band {
    if score >= thresholds.exceeding {
        Band::Exceeding
    } else if score >= thresholds.meeting {
        Band::Meeting
    } else if score >= thresholds.approaching {
        Band::Approaching
    } else {
        Band::Below
    }
}
