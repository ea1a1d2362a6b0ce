//! scoremark-store — Record repository and JSON persistence.
//!
//! The repository is the sole owner of the record and target collections;
//! every other component reads snapshots and returns new values.

pub mod repository;
pub mod store;

pub use repository::{ImportReport, Repository};
pub use store::JsonStore;
