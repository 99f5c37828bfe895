use prospect_core::config::ConfidenceConfig;
use prospect_core::models::{Hypothesis, HypothesisStatus};

/// Status implied by the current counters and confidence.
///
/// Terminal statuses are sticky. Otherwise, in order: KILLED, PROMOTED,
/// DEGRADED, ACTIVE. Saturation is decided separately, after this.
pub fn next_status(hypothesis: &Hypothesis, config: &ConfidenceConfig) -> HypothesisStatus {
    if hypothesis.status.is_terminal() {
        return hypothesis.status;
    }
    let confidence = hypothesis.confidence.value();
    let accepted = hypothesis.iterations_accepted;
    let weak = hypothesis.iterations_weak_accept;
    let rejected = hypothesis.iterations_rejected;

    if confidence <= config.kill_threshold && rejected >= config.kill_min_rejections {
        HypothesisStatus::Killed
    } else if accepted >= 1 && confidence >= config.promote_threshold {
        HypothesisStatus::Promoted
    } else if rejected >= config.degrade_min_rejections
        && u64::from(rejected) > u64::from(accepted) + u64::from(weak)
    {
        HypothesisStatus::Degraded
    } else {
        HypothesisStatus::Active
    }
}
