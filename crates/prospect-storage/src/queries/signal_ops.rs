//! Tiered signal upsert and lookups.

use rusqlite::{params, Connection, Row};

use prospect_core::errors::ProspectResult;
use prospect_core::models::TieredSignal;

use super::{parse_enum, parse_json, parse_time};
use crate::to_storage_err;

const COLUMNS: &str = "signal_id, entity_id, category, hypothesis_id, iteration, tier, decision,
    confidence, evidence, source_url, source_domain, observed_at";

/// Insert or replace a signal by its deterministic `signal_id`.
pub fn upsert_signal(conn: &Connection, s: &TieredSignal) -> ProspectResult<()> {
    let evidence = serde_json::to_string(&s.evidence)?;
    conn.execute(
        "INSERT INTO signals (
            signal_id, entity_id, category, hypothesis_id, iteration, tier, decision,
            confidence, evidence, source_url, source_domain, observed_at
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
         ON CONFLICT(signal_id) DO UPDATE SET
            tier = excluded.tier,
            decision = excluded.decision,
            confidence = excluded.confidence,
            evidence = excluded.evidence,
            source_url = excluded.source_url,
            source_domain = excluded.source_domain,
            observed_at = excluded.observed_at",
        params![
            s.signal_id,
            s.entity_id,
            s.category,
            s.hypothesis_id,
            s.iteration,
            s.tier.as_str(),
            s.decision.as_str(),
            s.confidence,
            evidence,
            s.source_url,
            s.source_domain,
            s.observed_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn signals_for(conn: &Connection, entity_id: &str, category: &str) -> ProspectResult<Vec<TieredSignal>> {
    query(
        conn,
        &format!(
            "SELECT {COLUMNS} FROM signals WHERE entity_id = ?1 AND category = ?2
             ORDER BY observed_at, signal_id"
        ),
        params![entity_id, category],
    )
}

pub fn signals_for_entity(conn: &Connection, entity_id: &str) -> ProspectResult<Vec<TieredSignal>> {
    query(
        conn,
        &format!(
            "SELECT {COLUMNS} FROM signals WHERE entity_id = ?1
             ORDER BY category, observed_at, signal_id"
        ),
        params![entity_id],
    )
}

/// Distinct categories with at least one signal for the entity.
pub fn signal_categories(conn: &Connection, entity_id: &str) -> ProspectResult<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT DISTINCT category FROM signals WHERE entity_id = ?1 ORDER BY category")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![entity_id], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

fn query(
    conn: &Connection,
    sql: &str,
    params: &[&dyn rusqlite::ToSql],
) -> ProspectResult<Vec<TieredSignal>> {
    let mut stmt = conn.prepare(sql).map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params, row_to_signal)
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

fn row_to_signal(row: &Row<'_>) -> rusqlite::Result<TieredSignal> {
    Ok(TieredSignal {
        signal_id: row.get(0)?,
        entity_id: row.get(1)?,
        category: row.get(2)?,
        hypothesis_id: row.get(3)?,
        iteration: row.get(4)?,
        tier: parse_enum(5, row.get(5)?)?,
        decision: parse_enum(6, row.get(6)?)?,
        confidence: row.get(7)?,
        evidence: parse_json(8, &row.get::<_, String>(8)?)?,
        source_url: row.get(9)?,
        source_domain: row.get(10)?,
        observed_at: parse_time(11, &row.get::<_, String>(11)?)?,
    })
}
