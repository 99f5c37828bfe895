//! Category state upsert and lookups, keyed by (entity_id, category).

use rusqlite::{params, Connection, OptionalExtension, Row};

use prospect_core::errors::ProspectResult;
use prospect_core::models::HypothesisState;

use super::{parse_enum, parse_time};
use crate::to_storage_err;

const COLUMNS: &str = "entity_id, category, maturity_score, activity_score, state,
    capability_signals, procurement_signals, validated_signals, last_updated";

pub fn upsert_state(conn: &Connection, s: &HypothesisState) -> ProspectResult<()> {
    conn.execute(
        "INSERT INTO hypothesis_states (
            entity_id, category, maturity_score, activity_score, state,
            capability_signals, procurement_signals, validated_signals, last_updated
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
         ON CONFLICT(entity_id, category) DO UPDATE SET
            maturity_score = excluded.maturity_score,
            activity_score = excluded.activity_score,
            state = excluded.state,
            capability_signals = excluded.capability_signals,
            procurement_signals = excluded.procurement_signals,
            validated_signals = excluded.validated_signals,
            last_updated = excluded.last_updated",
        params![
            s.entity_id,
            s.category,
            s.maturity_score,
            s.activity_score,
            s.state.as_str(),
            s.capability_signals,
            s.procurement_signals,
            s.validated_signals,
            s.last_updated.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_state(
    conn: &Connection,
    entity_id: &str,
    category: &str,
) -> ProspectResult<Option<HypothesisState>> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM hypothesis_states WHERE entity_id = ?1 AND category = ?2"),
        params![entity_id, category],
        row_to_state,
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Every category state of an entity, ordered by category.
pub fn get_all_states(conn: &Connection, entity_id: &str) -> ProspectResult<Vec<HypothesisState>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {COLUMNS} FROM hypothesis_states WHERE entity_id = ?1 ORDER BY category"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![entity_id], row_to_state)
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

fn row_to_state(row: &Row<'_>) -> rusqlite::Result<HypothesisState> {
    Ok(HypothesisState {
        entity_id: row.get(0)?,
        category: row.get(1)?,
        maturity_score: row.get(2)?,
        activity_score: row.get(3)?,
        state: parse_enum(4, row.get(4)?)?,
        capability_signals: row.get(5)?,
        procurement_signals: row.get(6)?,
        validated_signals: row.get(7)?,
        last_updated: parse_time(8, &row.get::<_, String>(8)?)?,
    })
}
