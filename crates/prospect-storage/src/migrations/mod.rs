//! Versioned schema migrations tracked in the `schema_version` table.

pub mod v001_hypotheses;
pub mod v002_signals_states;

use rusqlite::{params, Connection};
use tracing::info;

use prospect_core::errors::{ProspectError, ProspectResult, StorageError};

type MigrationFn = fn(&Connection) -> ProspectResult<()>;

const MIGRATIONS: [(u32, MigrationFn); 2] = [
    (1, v001_hypotheses::migrate),
    (2, v002_signals_states::migrate),
];

/// Latest schema version.
pub const LATEST_VERSION: u32 = 2;

/// Apply every pending migration, each in its own transaction.
pub fn run_migrations(conn: &Connection) -> ProspectResult<()> {
    ensure_version_table(conn)?;
    let current = current_version(conn)?;

    for (version, migrate) in MIGRATIONS {
        if version <= current {
            continue;
        }
        let failed = |e: String| -> ProspectError {
            StorageError::MigrationFailed { version, reason: e }.into()
        };
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| failed(e.to_string()))?;
        migrate(&tx).map_err(|e| failed(e.to_string()))?;
        tx.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            params![version],
        )
        .map_err(|e| failed(e.to_string()))?;
        tx.commit().map_err(|e| failed(e.to_string()))?;
        info!(version, "applied migration");
    }
    Ok(())
}

/// Highest applied version, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> ProspectResult<u32> {
    ensure_version_table(conn)?;
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| {
        StorageError::SqliteError {
            message: e.to_string(),
        }
        .into()
    })
}

fn ensure_version_table(conn: &Connection) -> ProspectResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| {
        StorageError::MigrationFailed {
            version: 0,
            reason: e.to_string(),
        }
        .into()
    })
}
