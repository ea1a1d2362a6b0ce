//! Engine error types.
//!
//! Defined here so the store and CLI layers can match on failure kinds
//! without string comparison.

use thiserror::Error;

/// A candidate record or target failed validation. The whole write is
/// rejected; there is no partial acceptance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", describe(.missing_fields, .out_of_range_fields))]
pub struct ValidationError {
    /// Identity-key fields that were empty or absent.
    pub missing_fields: Vec<&'static str>,
    /// Fields whose value fell outside the configured range.
    pub out_of_range_fields: Vec<&'static str>,
}

fn describe(missing: &[&'static str], out_of_range: &[&'static str]) -> String {
    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!("missing: {}", missing.join(", ")));
    }
    if !out_of_range.is_empty() {
        parts.push(format!("out of range: {}", out_of_range.join(", ")));
    }
    parts.join("; ")
}

/// An import payload could not be accepted. The in-memory collection is left
/// unmodified.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The payload was not a JSON array of the expected shape.
    #[error("malformed import payload: {0}")]
    Malformed(String),

    /// An entry parsed but failed validation.
    #[error("invalid entry at index {index}: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: ValidationError,
    },
}
