//! Fail-soft JSON file store.
//!
//! Loads return an empty collection on missing or corrupt files, never an
//! error: a damaged data directory degrades to an empty state the user can
//! rebuild from a backup, not a crash. Writes go through a temp file and
//! rename so a partial write can never corrupt the previous contents.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use scoremark_core::model::{ScoreRecord, Target};

const RECORDS_FILE: &str = "records.json";
const TARGETS_FILE: &str = "targets.json";

/// JSON-file-backed key-value store under a data directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Load all records; `[]` on missing or corrupt storage.
    pub fn load_records(&self) -> Vec<ScoreRecord> {
        self.load_collection(RECORDS_FILE)
    }

    /// Persist the full record collection.
    pub fn save_records(&self, records: &[ScoreRecord]) -> Result<()> {
        self.save_collection(RECORDS_FILE, records)
    }

    /// Load all targets; `[]` on missing or corrupt storage.
    pub fn load_targets(&self) -> Vec<Target> {
        self.load_collection(TARGETS_FILE)
    }

    /// Persist the full target collection.
    pub fn save_targets(&self, targets: &[Target]) -> Result<()> {
        self.save_collection(TARGETS_FILE, targets)
    }

    fn load_collection<T: DeserializeOwned>(&self, file: &str) -> Vec<T> {
        let path = self.dir.join(file);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!("failed to read {}: {e}; treating as empty", path.display());
                return Vec::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(
                    "corrupt store file {}: {e}; treating as empty",
                    path.display()
                );
                Vec::new()
            }
        }
    }

    fn save_collection<T: Serialize>(&self, file: &str, items: &[T]) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create data dir {}", self.dir.display()))?;
        let path = self.dir.join(file);
        let json = serde_json::to_string_pretty(items).context("failed to serialize store")?;
        write_atomic(&path, &json)
    }
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, content)
        .with_context(|| format!("failed to write {}", tmp.display()))?;
    std::fs::rename(&tmp, path)
        .with_context(|| format!("failed to replace {}", path.display()))?;
    tracing::debug!("wrote {}", path.display());
    Ok(())
}
