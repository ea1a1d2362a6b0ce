//! Duplicate detection and resolution.
//!
//! A write that collides with an existing identity key is never decided
//! silently: the caller supplies a [`ConflictDecision`] and the resolver
//! applies it. Absent a positive overwrite, the collection is unchanged.

use crate::model::{ScoreRecord, Target};

/// Caller-supplied policy for an identity-key collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictDecision {
    /// Replace the existing entity with the candidate.
    Overwrite,
    /// Keep the existing entity and drop the candidate.
    KeepExisting,
    /// Abort the write entirely.
    Cancel,
}

/// What a resolved write did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// No existing entity shared the key; the candidate was appended.
    Inserted,
    /// An existing entity was replaced in place.
    Replaced,
    /// The collection was left as it was.
    Unchanged,
}

/// Index of the record sharing the candidate's identity key, if any.
pub fn find_record_conflict(candidate: &ScoreRecord, records: &[ScoreRecord]) -> Option<usize> {
    let key = candidate.key();
    records.iter().position(|r| r.key() == key)
}

/// Index of the target sharing the candidate's identity key, if any.
pub fn find_target_conflict(candidate: &Target, targets: &[Target]) -> Option<usize> {
    let key = candidate.key();
    targets.iter().position(|t| t.key() == key)
}

/// Apply a validated candidate record to the collection under the given
/// conflict policy. After this returns, no two records share an identity key.
pub fn resolve_record_write(
    records: &mut Vec<ScoreRecord>,
    candidate: ScoreRecord,
    decision: ConflictDecision,
) -> WriteOutcome {
    match find_record_conflict(&candidate, records) {
        None => {
            records.push(candidate);
            WriteOutcome::Inserted
        }
        Some(index) => match decision {
            ConflictDecision::Overwrite => {
                records[index] = candidate;
                WriteOutcome::Replaced
            }
            ConflictDecision::KeepExisting | ConflictDecision::Cancel => WriteOutcome::Unchanged,
        },
    }
}

/// Target counterpart of [`resolve_record_write`].
pub fn resolve_target_write(
    targets: &mut Vec<Target>,
    candidate: Target,
    decision: ConflictDecision,
) -> WriteOutcome {
    match find_target_conflict(&candidate, targets) {
        None => {
            targets.push(candidate);
            WriteOutcome::Inserted
        }
        Some(index) => match decision {
            ConflictDecision::Overwrite => {
                targets[index] = candidate;
                WriteOutcome::Replaced
            }
            ConflictDecision::KeepExisting | ConflictDecision::Cancel => WriteOutcome::Unchanged,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn fresh_key_inserts() {
        let mut records = vec![record("Achieng", 60.0)];
        let outcome =
            resolve_record_write(&mut records, record("Baraka", 70.0), ConflictDecision::Cancel);
        assert_eq!(outcome, WriteOutcome::Inserted);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn duplicate_without_overwrite_leaves_collection_unchanged() {
        let original = vec![record("Achieng", 60.0)];
        for decision in [ConflictDecision::KeepExisting, ConflictDecision::Cancel] {
            let mut records = original.clone();
            let outcome = resolve_record_write(&mut records, record("Achieng", 95.0), decision);
            assert_eq!(outcome, WriteOutcome::Unchanged);
            assert_eq!(records, original);
        }
    }

    #[test]
    fn overwrite_replaces_in_place() {
        let mut records = vec![record("Achieng", 60.0), record("Baraka", 50.0)];
        let outcome = resolve_record_write(
            &mut records,
            record("Achieng", 95.0),
            ConflictDecision::Overwrite,
        );
        assert_eq!(outcome, WriteOutcome::Replaced);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].mean_score, 95.0);
    }

    #[test]
    fn no_duplicate_keys_after_any_write() {
        let mut records = vec![record("Achieng", 60.0)];
        resolve_record_write(
            &mut records,
            record("Achieng", 70.0),
            ConflictDecision::Overwrite,
        );
        let keys: Vec<_> = records.iter().map(|r| r.key()).collect();
        let mut deduped = keys.clone();
        deduped.dedup();
        assert_eq!(keys.len(), deduped.len());
    }

    #[test]
    fn target_conflict_matches_on_academic_context() {
        let t = Target {
            subject: "Mathematics".into(),
            grade: "7".into(),
            stream: "A".into(),
            term: "Term 1".into(),
            exam_type: "Mid-Term".into(),
            score: 70.0,
        };
        let mut other = t.clone();
        other.score = 80.0;
        let mut targets = vec![t];
        let outcome = resolve_target_write(&mut targets, other, ConflictDecision::Overwrite);
        assert_eq!(outcome, WriteOutcome::Replaced);
        assert_eq!(targets[0].score, 80.0);
    }
}
