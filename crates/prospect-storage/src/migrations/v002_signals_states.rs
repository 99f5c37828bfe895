//! v002: admitted tiered signals and per-category hypothesis states.

use rusqlite::Connection;

use prospect_core::errors::ProspectResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> ProspectResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS signals (
            signal_id       TEXT PRIMARY KEY,
            entity_id       TEXT NOT NULL,
            category        TEXT NOT NULL,
            hypothesis_id   TEXT NOT NULL,
            iteration       INTEGER NOT NULL,
            tier            TEXT NOT NULL,
            decision        TEXT NOT NULL,
            confidence      REAL NOT NULL,
            evidence        TEXT NOT NULL DEFAULT '[]',
            source_url      TEXT,
            source_domain   TEXT,
            observed_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_signals_pair ON signals(entity_id, category);
        CREATE INDEX IF NOT EXISTS idx_signals_hypothesis ON signals(hypothesis_id);

        CREATE TABLE IF NOT EXISTS hypothesis_states (
            entity_id            TEXT NOT NULL,
            category             TEXT NOT NULL,
            maturity_score       REAL NOT NULL DEFAULT 0.0,
            activity_score       REAL NOT NULL DEFAULT 0.0,
            state                TEXT NOT NULL DEFAULT 'MONITOR',
            capability_signals   INTEGER NOT NULL DEFAULT 0,
            procurement_signals  INTEGER NOT NULL DEFAULT 0,
            validated_signals    INTEGER NOT NULL DEFAULT 0,
            last_updated         TEXT NOT NULL,
            PRIMARY KEY (entity_id, category)
        );

        CREATE INDEX IF NOT EXISTS idx_states_state ON hypothesis_states(state);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
