//! Which hypothesis an iteration probes.

use prospect_core::models::{Hypothesis, HypothesisStatus};

/// Weight applied to DEGRADED hypotheses.
const DEGRADED_WEIGHT: f64 = 0.5;

/// Probe priority: uncertainty, halved for DEGRADED hypotheses.
pub fn priority(hypothesis: &Hypothesis) -> f64 {
    let weight = match hypothesis.status {
        HypothesisStatus::Degraded => DEGRADED_WEIGHT,
        _ => 1.0,
    };
    hypothesis.confidence.entropy() * weight
}

/// Index of the probe-able hypothesis with the highest priority.
///
/// Ties go to fewer attempts, then the lower id. `None` when nothing is
/// probe-able.
pub fn select_hypothesis(hypotheses: &[Hypothesis]) -> Option<usize> {
    hypotheses
        .iter()
        .enumerate()
        .filter(|(_, h)| h.is_probeable())
        .min_by(|(_, a), (_, b)| {
            priority(b)
                .total_cmp(&priority(a))
                .then(a.iterations_attempted.cmp(&b.iterations_attempted))
                .then_with(|| a.hypothesis_id.cmp(&b.hypothesis_id))
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;

    #[test]
    fn degraded_priority_is_halved() {
        let mut h = Hypothesis::new("acme", "CRM", "s", 0.5);
        let full = priority(&h);
        h.status = HypothesisStatus::Degraded;
        assert_eq!(priority(&h), full * 0.5);
        assert_eq!(priority(&h).partial_cmp(&full), Some(Ordering::Less));
    }
}
