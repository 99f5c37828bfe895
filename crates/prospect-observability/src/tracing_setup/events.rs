//! Structured log events for run milestones and lifecycle transitions.
//!
//! Each function emits a `tracing` event with an `event` field naming it.

/// A run started for an entity.
pub fn run_started(entity_id: &str, hypotheses: usize) {
    tracing::info!(
        event = "run_started",
        entity_id = %entity_id,
        hypotheses = hypotheses,
        "discovery run started"
    );
}

/// A run stopped.
pub fn run_finished(entity_id: &str, termination: &str, iterations: u32, cost_usd: f64) {
    tracing::info!(
        event = "run_finished",
        entity_id = %entity_id,
        termination = %termination,
        iterations = iterations,
        cost_usd = cost_usd,
        "discovery run finished"
    );
}

/// A hypothesis changed status.
pub fn status_changed(hypothesis_id: &str, from: &str, to: &str, confidence: f64) {
    tracing::info!(
        event = "status_changed",
        hypothesis_id = %hypothesis_id,
        from = %from,
        to = %to,
        confidence = confidence,
        "hypothesis status changed"
    );
}

/// A category moved to a different lifecycle state.
pub fn state_changed(entity_id: &str, category: &str, from: &str, to: &str) {
    tracing::info!(
        event = "state_changed",
        entity_id = %entity_id,
        category = %category,
        from = %from,
        to = %to,
        "category state changed"
    );
}

/// Every hop type was excluded and the failure counters were cleared.
pub fn exclusion_reset(hypothesis_id: &str, excluded: usize) {
    tracing::warn!(
        event = "exclusion_reset",
        hypothesis_id = %hypothesis_id,
        excluded = excluded,
        "all hop types excluded; resetting failure counts"
    );
}

/// An oracle failure or unusable payload was treated as NO_PROGRESS.
pub fn oracle_degraded(hypothesis_id: &str, reason: &str) {
    tracing::warn!(
        event = "oracle_degraded",
        hypothesis_id = %hypothesis_id,
        reason = %reason,
        "oracle response degraded to NO_PROGRESS"
    );
}
