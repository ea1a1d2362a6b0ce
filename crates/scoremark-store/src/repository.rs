//! The record repository service object.
//!
//! Sole owner of the record and target collections. Every write runs the
//! validator, then the duplicate resolver, and only persists once the new
//! collection is fully formed; a rejected write never reaches the store.

use anyhow::Result;

use scoremark_core::config::ScoremarkConfig;
use scoremark_core::conflict::{
    resolve_record_write, resolve_target_write, ConflictDecision, WriteOutcome,
};
use scoremark_core::error::ImportError;
use scoremark_core::model::{RecordKey, ScoreRecord, Target, TargetKey};
use scoremark_core::validate::{validate_record, validate_target};

use crate::store::JsonStore;

/// Counts from a bulk import merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub inserted: usize,
    pub replaced: usize,
    pub skipped: usize,
}

/// In-memory repository backed by a [`JsonStore`].
pub struct Repository {
    store: JsonStore,
    config: ScoremarkConfig,
    records: Vec<ScoreRecord>,
    targets: Vec<Target>,
}

impl Repository {
    /// Open the repository, loading both collections. Missing or corrupt
    /// storage loads as empty.
    pub fn open(store: JsonStore, config: ScoremarkConfig) -> Self {
        let records = store.load_records();
        let targets = store.load_targets();
        tracing::debug!(
            records = records.len(),
            targets = targets.len(),
            "repository opened"
        );
        Self {
            store,
            config,
            records,
            targets,
        }
    }

    /// Snapshot of the record collection, in stored order.
    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    /// Snapshot of the target collection, in stored order.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Validate and write one record under the given conflict policy.
    pub fn add_record(
        &mut self,
        candidate: ScoreRecord,
        decision: ConflictDecision,
    ) -> Result<WriteOutcome> {
        validate_record(&candidate, &self.config)?;
        let mut next = self.records.clone();
        let outcome = resolve_record_write(&mut next, candidate, decision);
        if outcome != WriteOutcome::Unchanged {
            self.store.save_records(&next)?;
            self.records = next;
        }
        Ok(outcome)
    }

    /// Remove the record with the given identity key. Returns whether a
    /// record was removed.
    pub fn remove_record(&mut self, key: &RecordKey) -> Result<bool> {
        let mut next = self.records.clone();
        let before = next.len();
        next.retain(|r| r.key() != *key);
        if next.len() == before {
            return Ok(false);
        }
        self.store.save_records(&next)?;
        self.records = next;
        Ok(true)
    }

    /// Validate and write one target under the given conflict policy.
    pub fn set_target(
        &mut self,
        candidate: Target,
        decision: ConflictDecision,
    ) -> Result<WriteOutcome> {
        validate_target(&candidate)?;
        let mut next = self.targets.clone();
        let outcome = resolve_target_write(&mut next, candidate, decision);
        if outcome != WriteOutcome::Unchanged {
            self.store.save_targets(&next)?;
            self.targets = next;
        }
        Ok(outcome)
    }

    /// Remove the target with the given identity key.
    pub fn remove_target(&mut self, key: &TargetKey) -> Result<bool> {
        let mut next = self.targets.clone();
        let before = next.len();
        next.retain(|t| t.key() != *key);
        if next.len() == before {
            return Ok(false);
        }
        self.store.save_targets(&next)?;
        self.targets = next;
        Ok(true)
    }

    /// Export the record collection as a pretty JSON array in the backup
    /// format.
    pub fn export_records(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    /// Export the target collection as a pretty JSON array.
    pub fn export_targets(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.targets)?)
    }

    /// Import a JSON array of records, merging under the given conflict
    /// policy.
    ///
    /// The whole payload is parsed and validated before any merge happens; a
    /// malformed or invalid payload leaves the collection unmodified.
    pub fn import_records(
        &mut self,
        payload: &str,
        decision: ConflictDecision,
    ) -> Result<ImportReport> {
        let candidates: Vec<ScoreRecord> = serde_json::from_str(payload)
            .map_err(|e| ImportError::Malformed(e.to_string()))?;
        for (index, candidate) in candidates.iter().enumerate() {
            validate_record(candidate, &self.config)
                .map_err(|source| ImportError::InvalidEntry { index, source })?;
        }

        let mut next = self.records.clone();
        let mut report = ImportReport::default();
        for candidate in candidates {
            match resolve_record_write(&mut next, candidate, decision) {
                WriteOutcome::Inserted => report.inserted += 1,
                WriteOutcome::Replaced => report.replaced += 1,
                WriteOutcome::Unchanged => report.skipped += 1,
            }
        }
        self.store.save_records(&next)?;
        self.records = next;
        Ok(report)
    }

    /// Import a JSON array of targets, merging under the given conflict
    /// policy.
    pub fn import_targets(
        &mut self,
        payload: &str,
        decision: ConflictDecision,
    ) -> Result<ImportReport> {
        let candidates: Vec<Target> = serde_json::from_str(payload)
            .map_err(|e| ImportError::Malformed(e.to_string()))?;
        for (index, candidate) in candidates.iter().enumerate() {
            validate_target(candidate)
                .map_err(|source| ImportError::InvalidEntry { index, source })?;
        }

        let mut next = self.targets.clone();
        let mut report = ImportReport::default();
        for candidate in candidates {
            match resolve_target_write(&mut next, candidate, decision) {
                WriteOutcome::Inserted => report.inserted += 1,
                WriteOutcome::Replaced => report.replaced += 1,
                WriteOutcome::Unchanged => report.skipped += 1,
            }
        }
        self.store.save_targets(&next)?;
        self.targets = next;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_repo(dir: &TempDir) -> Repository {
        Repository::open(JsonStore::new(dir.path()), ScoremarkConfig::default())
    }

    fn record(teacher: &str, score: f64) -> ScoreRecord {
        ScoreRecord {
            teacher: teacher.into(),
            subject: "Mathematics".into(),
            grade: "7".into(),
            stream: "A".into(),
            term: "Term 1".into(),
            exam_type: "Mid-Term".into(),
            year: 2025,
            mean_score: score,
        }
    }

    #[test]
    fn add_then_reopen_persists() {
        let dir = TempDir::new().unwrap();
        {
            let mut repo = open_repo(&dir);
            let outcome = repo
                .add_record(record("Achieng", 64.5), ConflictDecision::Cancel)
                .unwrap();
            assert_eq!(outcome, WriteOutcome::Inserted);
        }
        let repo = open_repo(&dir);
        assert_eq!(repo.records().len(), 1);
        assert_eq!(repo.records()[0].mean_score, 64.5);
    }

    #[test]
    fn invalid_candidate_never_reaches_the_store() {
        let dir = TempDir::new().unwrap();
        let mut repo = open_repo(&dir);
        let mut bad = record("Achieng", 64.5);
        bad.mean_score = 130.0;
        assert!(repo.add_record(bad, ConflictDecision::Overwrite).is_err());
        assert!(repo.records().is_empty());
        assert!(!dir.path().join("records.json").exists());
    }

    #[test]
    fn duplicate_without_overwrite_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut repo = open_repo(&dir);
        repo.add_record(record("Achieng", 64.5), ConflictDecision::Cancel)
            .unwrap();
        let outcome = repo
            .add_record(record("Achieng", 90.0), ConflictDecision::KeepExisting)
            .unwrap();
        assert_eq!(outcome, WriteOutcome::Unchanged);
        assert_eq!(repo.records().len(), 1);
        assert_eq!(repo.records()[0].mean_score, 64.5);
    }

    #[test]
    fn remove_record_by_key() {
        let dir = TempDir::new().unwrap();
        let mut repo = open_repo(&dir);
        let r = record("Achieng", 64.5);
        let key = r.key();
        repo.add_record(r, ConflictDecision::Cancel).unwrap();
        assert!(repo.remove_record(&key).unwrap());
        assert!(!repo.remove_record(&key).unwrap());
        assert!(repo.records().is_empty());
    }

    #[test]
    fn export_import_roundtrip_is_multiset_equal() {
        let dir = TempDir::new().unwrap();
        let mut repo = open_repo(&dir);
        repo.add_record(record("Achieng", 64.5), ConflictDecision::Cancel)
            .unwrap();
        repo.add_record(record("Baraka", 71.0), ConflictDecision::Cancel)
            .unwrap();
        let exported = repo.export_records().unwrap();

        let other_dir = TempDir::new().unwrap();
        let mut other = open_repo(&other_dir);
        let report = other
            .import_records(&exported, ConflictDecision::KeepExisting)
            .unwrap();
        assert_eq!(report.inserted, 2);

        let mut original: Vec<_> = repo.records().to_vec();
        let mut imported: Vec<_> = other.records().to_vec();
        let by_key = |r: &ScoreRecord| (r.teacher.clone(), r.year, r.mean_score.to_bits());
        original.sort_by_key(by_key);
        imported.sort_by_key(by_key);
        assert_eq!(original, imported);
    }

    #[test]
    fn malformed_import_leaves_collection_unmodified() {
        let dir = TempDir::new().unwrap();
        let mut repo = open_repo(&dir);
        repo.add_record(record("Achieng", 64.5), ConflictDecision::Cancel)
            .unwrap();

        for payload in ["not json", "{\"teacher\": \"x\"}", "[{\"teacher\": 3}]"] {
            let err = repo
                .import_records(payload, ConflictDecision::Overwrite)
                .unwrap_err();
            assert!(err.to_string().contains("malformed"), "{err:#}");
            assert_eq!(repo.records().len(), 1);
        }
    }

    #[test]
    fn import_with_invalid_entry_is_rejected_whole() {
        let dir = TempDir::new().unwrap();
        let mut repo = open_repo(&dir);
        let good = record("Achieng", 64.5);
        let mut bad = record("Baraka", 64.5);
        bad.mean_score = -3.0;
        let payload = serde_json::to_string(&[good, bad]).unwrap();
        let err = repo
            .import_records(&payload, ConflictDecision::Overwrite)
            .unwrap_err();
        assert!(err.to_string().contains("index 1"), "{err:#}");
        assert!(repo.records().is_empty());
    }

    #[test]
    fn import_merge_counts_outcomes() {
        let dir = TempDir::new().unwrap();
        let mut repo = open_repo(&dir);
        repo.add_record(record("Achieng", 64.5), ConflictDecision::Cancel)
            .unwrap();
        let payload =
            serde_json::to_string(&[record("Achieng", 90.0), record("Baraka", 70.0)]).unwrap();

        let report = repo
            .import_records(&payload, ConflictDecision::Overwrite)
            .unwrap();
        assert_eq!(
            report,
            ImportReport {
                inserted: 1,
                replaced: 1,
                skipped: 0
            }
        );
        let report = repo
            .import_records(&payload, ConflictDecision::KeepExisting)
            .unwrap();
        assert_eq!(report.skipped, 2);
    }

    #[test]
    fn target_write_and_removal() {
        let dir = TempDir::new().unwrap();
        let mut repo = open_repo(&dir);
        let target = Target {
            subject: "Mathematics".into(),
            grade: "7".into(),
            stream: "A".into(),
            term: "Term 1".into(),
            exam_type: "Mid-Term".into(),
            score: 70.0,
        };
        let key = target.key();
        repo.set_target(target.clone(), ConflictDecision::Cancel)
            .unwrap();
        let mut raised = target;
        raised.score = 75.0;
        let outcome = repo
            .set_target(raised, ConflictDecision::Overwrite)
            .unwrap();
        assert_eq!(outcome, WriteOutcome::Replaced);
        assert_eq!(repo.targets()[0].score, 75.0);
        assert!(repo.remove_target(&key).unwrap());
    }
}
