use serde::{Deserialize, Serialize};

use super::defaults;

/// Confidence deltas and status thresholds for the hypothesis state machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    /// Confidence of a freshly generated hypothesis.
    pub initial: f64,
    pub accept_delta: f64,
    pub weak_accept_delta: f64,
    /// Subtracted on REJECT. Zero keeps REJECT confidence-neutral.
    pub reject_penalty: f64,
    /// Cap applied while a hypothesis has no ACCEPT.
    pub no_accept_ceiling: f64,
    pub promote_threshold: f64,
    pub kill_threshold: f64,
    pub degrade_min_rejections: u32,
    pub kill_min_rejections: u32,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            initial: defaults::DEFAULT_INITIAL_CONFIDENCE,
            accept_delta: defaults::DEFAULT_ACCEPT_DELTA,
            weak_accept_delta: defaults::DEFAULT_WEAK_ACCEPT_DELTA,
            reject_penalty: defaults::DEFAULT_REJECT_PENALTY,
            no_accept_ceiling: defaults::DEFAULT_NO_ACCEPT_CEILING,
            promote_threshold: defaults::DEFAULT_PROMOTE_THRESHOLD,
            kill_threshold: defaults::DEFAULT_KILL_THRESHOLD,
            degrade_min_rejections: defaults::DEFAULT_DEGRADE_MIN_REJECTIONS,
            kill_min_rejections: defaults::DEFAULT_KILL_MIN_REJECTIONS,
        }
    }
}
