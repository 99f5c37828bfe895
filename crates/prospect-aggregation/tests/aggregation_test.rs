//! Rollup scenarios for the category state machine.

use chrono::Utc;
use prospect_aggregation::{determine_state, StateAggregator};
use prospect_core::config::AggregationConfig;
use prospect_core::models::{EvidenceTier, LifecycleState, TieredSignal};
use test_fixtures::{signal, signals};

fn rollup(signals: &[TieredSignal]) -> prospect_core::HypothesisState {
    StateAggregator::default().compute("acme", "CRM_UPGRADE", signals, Utc::now())
}

#[test]
fn no_signals_is_monitor_with_zero_scores() {
    let state = rollup(&[]);
    assert_eq!(state.maturity_score, 0.0);
    assert_eq!(state.activity_score, 0.0);
    assert_eq!(state.state, LifecycleState::Monitor);
}

#[test]
fn three_capability_signals_are_warm() {
    let state = rollup(&signals("acme", "CRM_UPGRADE", EvidenceTier::Capability, 3));
    assert_eq!(state.maturity_score, 0.45);
    assert_eq!(state.activity_score, 0.0);
    assert_eq!(state.state, LifecycleState::Warm);
}

#[test]
fn two_capability_signals_stay_monitor() {
    let state = rollup(&signals("acme", "CRM_UPGRADE", EvidenceTier::Capability, 2));
    assert_eq!(state.maturity_score, 0.3);
    assert_eq!(state.state, LifecycleState::Monitor);
}

#[test]
fn warm_maturity_threshold_is_configurable() {
    let config = AggregationConfig {
        warm_maturity: 0.5,
        ..Default::default()
    };
    let state = StateAggregator::new(config).compute(
        "acme",
        "CRM_UPGRADE",
        &signals("acme", "CRM_UPGRADE", EvidenceTier::Capability, 3),
        Utc::now(),
    );
    assert_eq!(state.maturity_score, 0.45);
    assert_eq!(state.state, LifecycleState::Monitor);
}

#[test]
fn four_capability_signals_are_warm() {
    let state = rollup(&signals("acme", "CRM_UPGRADE", EvidenceTier::Capability, 4));
    assert_eq!(state.maturity_score, 0.6);
    assert_eq!(state.state, LifecycleState::Warm);
}

#[test]
fn maturity_caps_at_one() {
    let state = rollup(&signals("acme", "CRM_UPGRADE", EvidenceTier::Capability, 20));
    assert_eq!(state.maturity_score, 1.0);
    assert_eq!(state.capability_signals, 20);
}

#[test]
fn three_procurement_indicators_engage() {
    let state = rollup(&signals(
        "acme",
        "CRM_UPGRADE",
        EvidenceTier::ProcurementIndicator,
        3,
    ));
    assert_eq!(state.activity_score, 0.75);
    assert_eq!(state.maturity_score, 0.0);
    assert_eq!(state.state, LifecycleState::Engage);
}

#[test]
fn two_procurement_indicators_are_warm() {
    let state = rollup(&signals(
        "acme",
        "CRM_UPGRADE",
        EvidenceTier::ProcurementIndicator,
        2,
    ));
    assert_eq!(state.activity_score, 0.5);
    assert_eq!(state.state, LifecycleState::Warm);
}

#[test]
fn validated_rfp_overrides_everything() {
    let mut all = signals("acme", "CRM_UPGRADE", EvidenceTier::ProcurementIndicator, 3);
    all.extend(signals("acme", "CRM_UPGRADE", EvidenceTier::Capability, 5));
    all.push(signal("acme", "CRM_UPGRADE", EvidenceTier::ValidatedRfp));
    let state = rollup(&all);
    assert_eq!(state.state, LifecycleState::Live);
    assert_eq!(state.validated_signals, 1);
    // Validated signals feed neither score.
    assert_eq!(state.activity_score, 0.75);
    assert_eq!(state.maturity_score, 0.75);
}

#[test]
fn duplicate_signal_ids_count_once() {
    let s = signal("acme", "CRM_UPGRADE", EvidenceTier::ProcurementIndicator);
    let replayed = vec![s.clone(), s.clone(), s];
    let state = rollup(&replayed);
    assert_eq!(state.procurement_signals, 1);
    assert_eq!(state.activity_score, 0.25);
    assert_eq!(state.state, LifecycleState::Monitor);
}

#[test]
fn signals_for_other_pairs_are_ignored() {
    let mut all = signals("acme", "ERP", EvidenceTier::ProcurementIndicator, 4);
    all.extend(signals("globex", "CRM_UPGRADE", EvidenceTier::ValidatedRfp, 1));
    let state = rollup(&all);
    assert_eq!(state.state, LifecycleState::Monitor);
    assert_eq!(state.procurement_signals, 0);
}

#[test]
fn compute_all_groups_by_category_in_order() {
    let mut all = signals("acme", "ERP", EvidenceTier::ProcurementIndicator, 3);
    all.extend(signals("acme", "CRM_UPGRADE", EvidenceTier::Capability, 1));
    all.extend(signals("globex", "HRIS", EvidenceTier::Capability, 1));
    let states = StateAggregator::default().compute_all("acme", &all, Utc::now());
    let cats: Vec<&str> = states.iter().map(|s| s.category.as_str()).collect();
    assert_eq!(cats, vec!["CRM_UPGRADE", "ERP"]);
    assert_eq!(states[1].state, LifecycleState::Engage);
}

#[test]
fn compute_for_includes_categories_without_signals() {
    let all = signals("acme", "ERP", EvidenceTier::ProcurementIndicator, 2);
    let states =
        StateAggregator::default().compute_for("acme", ["HRIS", "ERP", "HRIS"], &all, Utc::now());
    let cats: Vec<&str> = states.iter().map(|s| s.category.as_str()).collect();
    assert_eq!(cats, vec!["ERP", "HRIS"]);
    assert_eq!(states[0].state, LifecycleState::Warm);
    assert_eq!(states[1].state, LifecycleState::Monitor);
    assert_eq!(states[1].procurement_signals, 0);
}

#[test]
fn determine_state_thresholds_are_inclusive() {
    let c = AggregationConfig::default();
    assert_eq!(determine_state(0.0, 0.6, 0, &c), LifecycleState::Engage);
    assert_eq!(determine_state(0.0, 0.4, 0, &c), LifecycleState::Warm);
    assert_eq!(determine_state(0.45, 0.0, 0, &c), LifecycleState::Warm);
    assert_eq!(determine_state(0.5, 0.0, 0, &c), LifecycleState::Warm);
    assert_eq!(determine_state(0.3, 0.39, 0, &c), LifecycleState::Monitor);
    assert_eq!(determine_state(0.0, 0.0, 1, &c), LifecycleState::Live);
}
