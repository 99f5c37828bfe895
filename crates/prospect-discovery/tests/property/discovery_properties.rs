//! Properties of the confidence state machine, saturation, and hop exclusion.

use proptest::prelude::*;

use prospect_core::config::{ConfidenceConfig, SaturationConfig};
use prospect_core::models::{Decision, HopType};
use prospect_discovery::confidence::apply_decision;
use prospect_discovery::{EntityRun, HopSelector, HypothesisGenerator, SaturationDetector};
use test_fixtures::{entity, hypothesis, iteration, templates};

fn decision() -> impl Strategy<Value = Decision> {
    prop_oneof![
        Just(Decision::Accept),
        Just(Decision::WeakAccept),
        Just(Decision::Reject),
        Just(Decision::NoProgress),
    ]
}

fn non_accept() -> impl Strategy<Value = Decision> {
    prop_oneof![
        Just(Decision::WeakAccept),
        Just(Decision::Reject),
        Just(Decision::NoProgress),
    ]
}

proptest! {
    #[test]
    fn confidence_never_passes_ceiling_without_accept(
        steps in prop::collection::vec((non_accept(), prop::option::of(0.0f64..1.0)), 0..60),
        reject_penalty in 0.0f64..0.3,
    ) {
        let config = ConfidenceConfig { reject_penalty, ..Default::default() };
        let mut h = hypothesis("acme", "CRM");
        for (d, delta) in steps {
            apply_decision(&mut h, d, delta, &config);
            prop_assert_eq!(h.iterations_accepted, 0);
            prop_assert!(h.confidence.value() <= config.no_accept_ceiling);
        }
    }

    #[test]
    fn created_hypotheses_respect_the_ceiling(
        initial in -1.0f64..2.0,
        no_accept_ceiling in 0.0f64..1.0,
        steps in prop::collection::vec((non_accept(), prop::option::of(0.0f64..1.0)), 0..20),
    ) {
        let config = ConfidenceConfig { initial, no_accept_ceiling, ..Default::default() };
        let generator = HypothesisGenerator::from_config(&config);
        let mut run = EntityRun::start(entity("acme"), &templates(&["CRM", "ERP"]), &generator);
        let old_id = run.hypotheses()[0].hypothesis_id.clone();
        run.supersede(&old_id, &generator).unwrap();

        for created in run.hypotheses() {
            prop_assert_eq!(created.iterations_accepted, 0);
            prop_assert!(created.confidence.value() <= no_accept_ceiling);
            let mut h = created.clone();
            for (d, delta) in &steps {
                apply_decision(&mut h, *d, *delta, &config);
                prop_assert!(h.confidence.value() <= no_accept_ceiling);
            }
        }
    }

    #[test]
    fn confidence_stays_in_unit_interval(
        steps in prop::collection::vec((decision(), prop::option::of(-2.0f64..2.0)), 0..60),
    ) {
        let config = ConfidenceConfig { reject_penalty: 0.1, ..Default::default() };
        let mut h = hypothesis("acme", "CRM");
        for (d, delta) in steps {
            let update = apply_decision(&mut h, d, delta, &config);
            let c = h.confidence.value();
            prop_assert!((0.0..=1.0).contains(&c));
            prop_assert_eq!(update.confidence_after, c);
        }
    }

    #[test]
    fn counters_sum_to_applied_decisions(
        decisions in prop::collection::vec(decision(), 0..60),
    ) {
        let config = ConfidenceConfig::default();
        let mut h = hypothesis("acme", "CRM");
        for d in &decisions {
            apply_decision(&mut h, *d, None, &config);
        }
        let total = h.iterations_accepted
            + h.iterations_weak_accept
            + h.iterations_rejected
            + h.iterations_no_progress;
        prop_assert_eq!(total as usize, decisions.len());
    }

    #[test]
    fn saturation_matches_trailing_window_count(
        decisions in prop::collection::vec(decision(), 0..30),
        threshold in 1usize..6,
        extra in 0usize..4,
    ) {
        let window = threshold + extra;
        let detector = SaturationDetector::new(SaturationConfig {
            no_progress_threshold: threshold,
            window,
        });
        let mut h = hypothesis("acme", "CRM");
        for (i, d) in decisions.iter().enumerate() {
            h.iteration_results.push(iteration(i as u32, *d, 0.5, None));
            let start = (i + 1).saturating_sub(window);
            let expected = decisions[start..=i]
                .iter()
                .filter(|d| **d == Decision::NoProgress)
                .count()
                >= threshold;
            prop_assert_eq!(detector.is_saturated(&h), expected);
        }
    }

    #[test]
    fn selection_never_picks_an_excluded_hop(
        failures in prop::collection::vec(0u32..4, HopType::ALL.len()),
    ) {
        let selector = HopSelector::default();
        let mut h = hypothesis("acme", "CRM");
        for (hop, n) in HopType::ALL.into_iter().zip(&failures) {
            for _ in 0..*n {
                selector.record_failure(&mut h, hop);
            }
        }
        let all_excluded = failures.iter().all(|n| *n >= 2);
        let before = h.clone();
        let choice = selector.select(&mut h, &Default::default());

        prop_assert_eq!(choice.exclusion_reset, all_excluded);
        if all_excluded {
            prop_assert!(h.hop_failure_counts.is_empty());
        } else {
            prop_assert!(!selector.is_excluded(&before, choice.hop));
            prop_assert_eq!(&h.hop_failure_counts, &before.hop_failure_counts);
        }
    }
}
