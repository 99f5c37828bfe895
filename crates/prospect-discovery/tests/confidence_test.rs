//! Confidence state machine and status transitions.

use prospect_core::config::ConfidenceConfig;
use prospect_core::models::{Decision, HypothesisStatus};
use prospect_discovery::confidence::{apply_decision, next_status};
use test_fixtures::hypothesis;

fn apply_all(decisions: &[Decision], config: &ConfidenceConfig) -> prospect_core::Hypothesis {
    let mut h = hypothesis("acme", "CRM");
    for d in decisions {
        apply_decision(&mut h, *d, None, config);
    }
    h
}

#[test]
fn accept_adds_configured_delta() {
    let mut h = hypothesis("acme", "CRM");
    let update = apply_decision(&mut h, Decision::Accept, None, &ConfidenceConfig::default());
    assert_eq!(h.iterations_accepted, 1);
    assert!((h.confidence.value() - 0.56).abs() < 1e-12);
    assert!((update.delta - 0.06).abs() < 1e-12);
    assert_eq!(h.status, HypothesisStatus::Active);
}

#[test]
fn oracle_delta_overrides_configured_delta() {
    let mut h = hypothesis("acme", "CRM");
    apply_decision(&mut h, Decision::WeakAccept, Some(0.1), &ConfidenceConfig::default());
    assert!((h.confidence.value() - 0.6).abs() < 1e-12);
}

#[test]
fn weak_accepts_alone_never_pass_the_ceiling() {
    let h = apply_all(&[Decision::WeakAccept; 40], &ConfidenceConfig::default());
    assert_eq!(h.iterations_weak_accept, 40);
    assert_eq!(h.confidence.value(), 0.70);
}

#[test]
fn ceiling_lifts_after_first_accept() {
    let mut decisions = vec![Decision::WeakAccept; 20];
    decisions.push(Decision::Accept);
    let h = apply_all(&decisions, &ConfidenceConfig::default());
    assert!(h.confidence.value() > 0.70);
    assert_eq!(h.status, HypothesisStatus::Promoted);
}

#[test]
fn reject_is_confidence_neutral_by_default() {
    let h = apply_all(&[Decision::Reject, Decision::NoProgress], &ConfidenceConfig::default());
    assert_eq!(h.confidence.value(), 0.5);
    assert_eq!(h.iterations_rejected, 1);
    assert_eq!(h.iterations_no_progress, 1);
}

#[test]
fn reject_penalty_is_applied_when_configured() {
    let config = ConfidenceConfig {
        reject_penalty: 0.1,
        ..Default::default()
    };
    let mut h = hypothesis("acme", "CRM");
    let update = apply_decision(&mut h, Decision::Reject, Some(0.5), &config);
    assert!((h.confidence.value() - 0.4).abs() < 1e-12);
    assert!((update.delta + 0.1).abs() < 1e-12);
}

#[test]
fn promotion_needs_an_accept_and_the_threshold() {
    let h = apply_all(&[Decision::Accept; 3], &ConfidenceConfig::default());
    assert_eq!(h.status, HypothesisStatus::Active);
    let h = apply_all(&[Decision::Accept; 4], &ConfidenceConfig::default());
    assert_eq!(h.status, HypothesisStatus::Promoted);
}

#[test]
fn repeated_rejections_degrade_until_support_catches_up() {
    let config = ConfidenceConfig::default();
    let mut h = apply_all(&[Decision::Reject, Decision::Reject], &config);
    assert_eq!(h.status, HypothesisStatus::Degraded);

    apply_decision(&mut h, Decision::WeakAccept, None, &config);
    assert_eq!(h.status, HypothesisStatus::Degraded);
    let update = apply_decision(&mut h, Decision::WeakAccept, None, &config);
    assert_eq!(h.status, HypothesisStatus::Active);
    assert!(update.status_changed());
}

#[test]
fn killed_is_terminal() {
    let config = ConfidenceConfig {
        reject_penalty: 0.2,
        ..Default::default()
    };
    let mut h = apply_all(&[Decision::Reject; 3], &config);
    assert_eq!(h.confidence.value(), 0.0);
    assert_eq!(h.status, HypothesisStatus::Killed);

    apply_decision(&mut h, Decision::Accept, Some(0.9), &config);
    assert_eq!(h.status, HypothesisStatus::Killed);
    assert!(!h.is_probeable());
}

#[test]
fn kill_needs_minimum_rejections() {
    let config = ConfidenceConfig {
        reject_penalty: 0.5,
        ..Default::default()
    };
    let h = apply_all(&[Decision::Reject; 2], &config);
    assert_eq!(h.confidence.value(), 0.0);
    assert_eq!(h.status, HypothesisStatus::Degraded);
}

#[test]
fn saturated_status_is_sticky() {
    let mut h = hypothesis("acme", "CRM");
    h.status = HypothesisStatus::Saturated;
    let update = apply_decision(&mut h, Decision::Accept, None, &ConfidenceConfig::default());
    assert_eq!(h.status, HypothesisStatus::Saturated);
    assert!(!update.status_changed());
    assert_eq!(next_status(&h, &ConfidenceConfig::default()), HypothesisStatus::Saturated);
}
