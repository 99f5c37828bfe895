//! v001: hypotheses with their counters, failure counts, and audit trail.

use rusqlite::Connection;

use prospect_core::errors::ProspectResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> ProspectResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS hypotheses (
            hypothesis_id           TEXT PRIMARY KEY,
            entity_id               TEXT NOT NULL,
            category                TEXT NOT NULL,
            statement               TEXT NOT NULL,
            confidence              REAL NOT NULL,
            status                  TEXT NOT NULL DEFAULT 'ACTIVE',
            iterations_attempted    INTEGER NOT NULL DEFAULT 0,
            iterations_accepted     INTEGER NOT NULL DEFAULT 0,
            iterations_weak_accept  INTEGER NOT NULL DEFAULT 0,
            iterations_rejected     INTEGER NOT NULL DEFAULT 0,
            iterations_no_progress  INTEGER NOT NULL DEFAULT 0,
            hop_failure_counts      TEXT NOT NULL DEFAULT '{}',
            last_failed_hop         TEXT,
            iteration_results       TEXT NOT NULL DEFAULT '[]',
            supersedes              TEXT,
            superseded_by           TEXT,
            created_at              TEXT NOT NULL,
            updated_at              TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_hypotheses_entity ON hypotheses(entity_id);
        CREATE INDEX IF NOT EXISTS idx_hypotheses_pair ON hypotheses(entity_id, category);
        CREATE INDEX IF NOT EXISTS idx_hypotheses_status ON hypotheses(status);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
