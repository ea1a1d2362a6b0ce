//! scoremark-core — Aggregation and classification engine.
//!
//! This crate defines the data model, rubric classifier, grouping/averaging
//! logic, target-deviation calculator, and insight synthesizer that the rest
//! of scoremark builds on.

pub mod aggregate;
pub mod config;
pub mod conflict;
pub mod deviation;
pub mod error;
pub mod insight;
pub mod model;
pub mod rubric;
pub mod validate;
