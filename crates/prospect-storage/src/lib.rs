//! # prospect-storage
//!
//! SQLite persistence for the discovery engine: WAL-mode connection pool with
//! a single serialized writer, versioned migrations, and upsert queries for
//! hypotheses, tiered signals, and category states.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use prospect_core::errors::{ProspectError, StorageError};

/// Convert a rusqlite (or row decoding) failure into a `ProspectError`.
pub(crate) fn to_storage_err(message: String) -> ProspectError {
    ProspectError::StorageError(StorageError::SqliteError { message })
}
