//! Configuration: rubric thresholds, alert thresholds, and grouping presets.
//!
//! Every threshold in the engine is named configuration rather than a magic
//! number, so schools using a different rubric can adjust `scoremark.toml`
//! without touching code.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::Dimension;

/// Lower bounds of the four rubric tiers. A boundary value belongs to the
/// higher tier (a score equal to `exceeding` classifies as Exceeding).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RubricThresholds {
    #[serde(default = "default_exceeding")]
    pub exceeding: f64,
    #[serde(default = "default_meeting")]
    pub meeting: f64,
    #[serde(default = "default_approaching")]
    pub approaching: f64,
}

fn default_exceeding() -> f64 {
    75.0
}
fn default_meeting() -> f64 {
    41.0
}
fn default_approaching() -> f64 {
    21.0
}

impl Default for RubricThresholds {
    fn default() -> Self {
        Self {
            exceeding: default_exceeding(),
            meeting: default_meeting(),
            approaching: default_approaching(),
        }
    }
}

/// Thresholds for per-group insight alerts. Group averages in
/// `[review_below, excelling_above]` produce no alert.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AlertThresholds {
    #[serde(default = "default_urgent")]
    pub urgent_below: f64,
    #[serde(default = "default_review")]
    pub review_below: f64,
    #[serde(default = "default_excelling")]
    pub excelling_above: f64,
}

fn default_urgent() -> f64 {
    40.0
}
fn default_review() -> f64 {
    60.0
}
fn default_excelling() -> f64 {
    80.0
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            urgent_below: default_urgent(),
            review_below: default_review(),
            excelling_above: default_excelling(),
        }
    }
}

/// Top-level scoremark configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoremarkConfig {
    #[serde(default)]
    pub rubric: RubricThresholds,
    #[serde(default)]
    pub alerts: AlertThresholds,
    /// Earliest acceptable record year.
    #[serde(default = "default_year_min")]
    pub year_min: i32,
    /// Latest acceptable record year.
    #[serde(default = "default_year_max")]
    pub year_max: i32,
    /// Named grouping-dimension presets, keyed by preset name.
    #[serde(default = "default_groupings")]
    pub groupings: HashMap<String, Vec<Dimension>>,
    /// Preset used by `summary` when none is requested.
    #[serde(default = "default_grouping_name")]
    pub default_grouping: String,
    /// Data directory for the record and target stores.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_year_min() -> i32 {
    2000
}
fn default_year_max() -> i32 {
    2100
}

fn default_groupings() -> HashMap<String, Vec<Dimension>> {
    use Dimension::*;
    HashMap::from([
        (
            "class-term".to_string(),
            vec![Subject, Grade, Stream, Term, Year],
        ),
        (
            "exam".to_string(),
            vec![Subject, Grade, Stream, Term, ExamType, Year],
        ),
        (
            "teacher".to_string(),
            vec![Teacher, Grade, Stream, Subject, Term],
        ),
    ])
}

fn default_grouping_name() -> String {
    "class-term".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./scoremark-data")
}

impl Default for ScoremarkConfig {
    fn default() -> Self {
        Self {
            rubric: RubricThresholds::default(),
            alerts: AlertThresholds::default(),
            year_min: default_year_min(),
            year_max: default_year_max(),
            groupings: default_groupings(),
            default_grouping: default_grouping_name(),
            data_dir: default_data_dir(),
        }
    }
}

impl ScoremarkConfig {
    /// Resolve a grouping preset by name.
    pub fn grouping(&self, name: &str) -> Option<&[Dimension]> {
        self.groupings.get(name).map(|v| v.as_slice())
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `scoremark.toml` in the current directory
/// 2. `~/.config/scoremark/config.toml`
pub fn load_config() -> Result<ScoremarkConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<ScoremarkConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("scoremark.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<ScoremarkConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(ScoremarkConfig::default()),
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("scoremark"))
}
