//! Property tests: recomputation is idempotent and order-independent, scores stay in [0, 1].

use chrono::Utc;
use proptest::prelude::*;

use prospect_aggregation::StateAggregator;
use prospect_core::models::{EvidenceTier, LifecycleState};
use test_fixtures::signals;

fn build(cap: usize, proc: usize, val: usize) -> Vec<prospect_core::TieredSignal> {
    let mut all = signals("acme", "CRM", EvidenceTier::Capability, cap);
    all.extend(signals("acme", "CRM", EvidenceTier::ProcurementIndicator, proc));
    all.extend(signals("acme", "CRM", EvidenceTier::ValidatedRfp, val));
    all
}

proptest! {
    #[test]
    fn prop_recompute_is_idempotent(cap in 0usize..12, proc in 0usize..8, val in 0usize..2) {
        let all = build(cap, proc, val);
        let agg = StateAggregator::default();
        let now = Utc::now();
        let first = agg.compute("acme", "CRM", &all, now);
        let second = agg.compute("acme", "CRM", &all, now);
        prop_assert!(first.same_rollup(&second));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_order_and_replay_do_not_matter(cap in 0usize..12, proc in 0usize..8, val in 0usize..2) {
        let all = build(cap, proc, val);
        let agg = StateAggregator::default();
        let forward = agg.compute("acme", "CRM", &all, Utc::now());

        let mut shuffled: Vec<_> = all.iter().rev().cloned().collect();
        shuffled.extend(all.iter().cloned());
        let replayed = agg.compute("acme", "CRM", &shuffled, Utc::now());
        prop_assert!(forward.same_rollup(&replayed));
    }

    #[test]
    fn prop_scores_bounded_and_live_iff_validated(cap in 0usize..30, proc in 0usize..30, val in 0usize..3) {
        let state = StateAggregator::default().compute("acme", "CRM", &build(cap, proc, val), Utc::now());
        prop_assert!((0.0..=1.0).contains(&state.maturity_score));
        prop_assert!((0.0..=1.0).contains(&state.activity_score));
        prop_assert_eq!(state.state == LifecycleState::Live, val > 0);
    }
}
