use chrono::Utc;
use prospect_core::config::ConfidenceConfig;
use prospect_core::models::{Decision, Hypothesis, HypothesisStatus};

use super::status::next_status;

/// Result of applying one decision to a hypothesis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceUpdate {
    /// Change actually applied, after clamping and the ceiling.
    pub delta: f64,
    pub confidence_before: f64,
    pub confidence_after: f64,
    pub status_before: HypothesisStatus,
    pub status_after: HypothesisStatus,
}

impl ConfidenceUpdate {
    pub fn status_changed(&self) -> bool {
        self.status_before != self.status_after
    }
}

/// Apply a decision to `hypothesis`: bump its counter, move its confidence,
/// enforce the no-accept ceiling, and recompute its status.
///
/// `delta_override` is the oracle's suggested delta. It replaces the configured
/// delta for ACCEPT and WEAK_ACCEPT when finite and non-negative, and is ignored
/// for every other decision.
pub fn apply_decision(
    hypothesis: &mut Hypothesis,
    decision: Decision,
    delta_override: Option<f64>,
    config: &ConfidenceConfig,
) -> ConfidenceUpdate {
    let before = hypothesis.confidence;
    let status_before = hypothesis.status;
    let positive = |configured: f64| {
        delta_override
            .filter(|d| d.is_finite() && *d >= 0.0)
            .unwrap_or(configured)
    };

    let delta = match decision {
        Decision::Accept => {
            hypothesis.iterations_accepted = hypothesis.iterations_accepted.saturating_add(1);
            positive(config.accept_delta)
        }
        Decision::WeakAccept => {
            hypothesis.iterations_weak_accept = hypothesis.iterations_weak_accept.saturating_add(1);
            positive(config.weak_accept_delta)
        }
        Decision::Reject => {
            hypothesis.iterations_rejected = hypothesis.iterations_rejected.saturating_add(1);
            -config.reject_penalty
        }
        Decision::NoProgress => {
            hypothesis.iterations_no_progress =
                hypothesis.iterations_no_progress.saturating_add(1);
            0.0
        }
        // Loop-internal; never moves confidence or counters.
        Decision::Saturated => 0.0,
    };

    let mut after = before + delta;
    if hypothesis.iterations_accepted == 0 {
        after = after.capped(config.no_accept_ceiling);
    }
    hypothesis.confidence = after;
    hypothesis.status = next_status(hypothesis, config);
    hypothesis.updated_at = Utc::now();

    ConfidenceUpdate {
        delta: after.value() - before.value(),
        confidence_before: before.value(),
        confidence_after: after.value(),
        status_before,
        status_after: hypothesis.status,
    }
}
