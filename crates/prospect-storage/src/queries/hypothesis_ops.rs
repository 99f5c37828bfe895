//! Hypothesis upsert and lookups.

use rusqlite::{params, Connection, OptionalExtension, Row};

use prospect_core::errors::ProspectResult;
use prospect_core::models::Hypothesis;
use prospect_core::Confidence;

use super::{parse_enum, parse_json, parse_time};
use crate::to_storage_err;

const COLUMNS: &str = "hypothesis_id, entity_id, category, statement, confidence, status,
    iterations_attempted, iterations_accepted, iterations_weak_accept, iterations_rejected,
    iterations_no_progress, hop_failure_counts, last_failed_hop, iteration_results,
    supersedes, superseded_by, created_at, updated_at";

/// Insert or replace a hypothesis by `hypothesis_id`.
pub fn upsert_hypothesis(conn: &Connection, h: &Hypothesis) -> ProspectResult<()> {
    let hop_failure_counts = serde_json::to_string(&h.hop_failure_counts)?;
    let iteration_results = serde_json::to_string(&h.iteration_results)?;
    conn.execute(
        "INSERT INTO hypotheses (
            hypothesis_id, entity_id, category, statement, confidence, status,
            iterations_attempted, iterations_accepted, iterations_weak_accept,
            iterations_rejected, iterations_no_progress, hop_failure_counts,
            last_failed_hop, iteration_results, supersedes, superseded_by,
            created_at, updated_at
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)
         ON CONFLICT(hypothesis_id) DO UPDATE SET
            entity_id = excluded.entity_id,
            category = excluded.category,
            statement = excluded.statement,
            confidence = excluded.confidence,
            status = excluded.status,
            iterations_attempted = excluded.iterations_attempted,
            iterations_accepted = excluded.iterations_accepted,
            iterations_weak_accept = excluded.iterations_weak_accept,
            iterations_rejected = excluded.iterations_rejected,
            iterations_no_progress = excluded.iterations_no_progress,
            hop_failure_counts = excluded.hop_failure_counts,
            last_failed_hop = excluded.last_failed_hop,
            iteration_results = excluded.iteration_results,
            supersedes = excluded.supersedes,
            superseded_by = excluded.superseded_by,
            updated_at = excluded.updated_at",
        params![
            h.hypothesis_id,
            h.entity_id,
            h.category,
            h.statement,
            h.confidence.value(),
            h.status.as_str(),
            h.iterations_attempted,
            h.iterations_accepted,
            h.iterations_weak_accept,
            h.iterations_rejected,
            h.iterations_no_progress,
            hop_failure_counts,
            h.last_failed_hop.map(|hop| hop.as_str()),
            iteration_results,
            h.supersedes,
            h.superseded_by,
            h.created_at.to_rfc3339(),
            h.updated_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_hypothesis(conn: &Connection, hypothesis_id: &str) -> ProspectResult<Option<Hypothesis>> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM hypotheses WHERE hypothesis_id = ?1"),
        params![hypothesis_id],
        row_to_hypothesis,
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Every hypothesis of an entity, superseded ones included, oldest first.
pub fn hypotheses_for_entity(conn: &Connection, entity_id: &str) -> ProspectResult<Vec<Hypothesis>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {COLUMNS} FROM hypotheses WHERE entity_id = ?1
             ORDER BY created_at, hypothesis_id"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![entity_id], row_to_hypothesis)
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

fn row_to_hypothesis(row: &Row<'_>) -> rusqlite::Result<Hypothesis> {
    let last_failed_hop: Option<String> = row.get(12)?;
    Ok(Hypothesis {
        hypothesis_id: row.get(0)?,
        entity_id: row.get(1)?,
        category: row.get(2)?,
        statement: row.get(3)?,
        confidence: Confidence::new(row.get(4)?),
        status: parse_enum(5, row.get(5)?)?,
        iterations_attempted: row.get(6)?,
        iterations_accepted: row.get(7)?,
        iterations_weak_accept: row.get(8)?,
        iterations_rejected: row.get(9)?,
        iterations_no_progress: row.get(10)?,
        hop_failure_counts: parse_json(11, &row.get::<_, String>(11)?)?,
        last_failed_hop: last_failed_hop.map(|hop| parse_enum(12, hop)).transpose()?,
        iteration_results: parse_json(13, &row.get::<_, String>(13)?)?,
        supersedes: row.get(14)?,
        superseded_by: row.get(15)?,
        created_at: parse_time(16, &row.get::<_, String>(16)?)?,
        updated_at: parse_time(17, &row.get::<_, String>(17)?)?,
    })
}
