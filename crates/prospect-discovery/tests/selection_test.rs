//! Hop selection, loop prevention, and hypothesis priority.

use std::collections::BTreeMap;

use prospect_core::models::{Decision, HopType, HypothesisStatus};
use prospect_core::Confidence;
use prospect_discovery::{select_hypothesis, HopSelector};
use test_fixtures::{hypothesis, iteration};

fn no_costs() -> BTreeMap<HopType, f64> {
    BTreeMap::new()
}

#[test]
fn fresh_hypothesis_starts_with_hiring_sources() {
    let selector = HopSelector::default();
    let mut h = hypothesis("acme", "CRM");
    let choice = selector.select(&mut h, &no_costs());
    // Careers page and job board tie on score; the identifier decides.
    assert_eq!(choice.hop, HopType::CareersPage);
    assert!(!choice.exclusion_reset);
    assert!((choice.score - 0.96).abs() < 1e-12);
}

#[test]
fn cumulative_cost_breaks_score_ties() {
    let selector = HopSelector::default();
    let mut h = hypothesis("acme", "CRM");
    let mut costs = no_costs();
    costs.insert(HopType::CareersPage, 0.05);
    assert_eq!(selector.select(&mut h, &costs).hop, HopType::JobBoard);
}

#[test]
fn visited_hops_lose_novelty() {
    let selector = HopSelector::default();
    let mut h = hypothesis("acme", "CRM");
    let mut record = iteration(0, Decision::NoProgress, 0.5, None);
    record.hop_type = HopType::CareersPage;
    h.iteration_results.push(record);
    assert!(selector.eig(&h, HopType::CareersPage) < selector.eig(&h, HopType::JobBoard));
    assert_eq!(selector.select(&mut h, &no_costs()).hop, HopType::JobBoard);
}

#[test]
fn validation_focus_prefers_tender_portals() {
    let selector = HopSelector::default();
    let mut h = hypothesis("acme", "CRM");
    h.iterations_accepted = 1;
    h.confidence = Confidence::new(0.56);
    assert_eq!(selector.select(&mut h, &no_costs()).hop, HopType::TenderPortal);
}

#[test]
fn hop_is_excluded_after_two_failures_and_back_after_one_success() {
    let selector = HopSelector::default();
    let mut h = hypothesis("acme", "CRM");

    selector.record_failure(&mut h, HopType::CareersPage);
    assert!(!selector.is_excluded(&h, HopType::CareersPage));
    assert_eq!(selector.select(&mut h, &no_costs()).hop, HopType::CareersPage);

    selector.record_failure(&mut h, HopType::CareersPage);
    assert!(selector.is_excluded(&h, HopType::CareersPage));
    assert_eq!(h.last_failed_hop, Some(HopType::CareersPage));
    assert_eq!(selector.select(&mut h, &no_costs()).hop, HopType::JobBoard);

    selector.record_success(&mut h, HopType::CareersPage);
    assert_eq!(h.failure_count(HopType::CareersPage), 0);
    assert_eq!(selector.select(&mut h, &no_costs()).hop, HopType::CareersPage);
}

#[test]
fn all_excluded_resets_before_selection() {
    let selector = HopSelector::default();
    let mut h = hypothesis("acme", "CRM");
    for hop in HopType::ALL {
        selector.record_failure(&mut h, hop);
        selector.record_failure(&mut h, hop);
    }
    assert_eq!(selector.excluded(&h).len(), HopType::ALL.len());

    let choice = selector.select(&mut h, &no_costs());
    assert!(choice.exclusion_reset);
    assert!(h.hop_failure_counts.is_empty());
    assert_eq!(choice.hop, HopType::CareersPage);
}

#[test]
fn last_remaining_hop_is_still_selectable() {
    let selector = HopSelector::default();
    let mut h = hypothesis("acme", "CRM");
    for hop in HopType::ALL.into_iter().filter(|h| *h != HopType::AnnualReport) {
        selector.record_failure(&mut h, hop);
        selector.record_failure(&mut h, hop);
    }
    let choice = selector.select(&mut h, &no_costs());
    assert_eq!(choice.hop, HopType::AnnualReport);
    assert!(!choice.exclusion_reset);
}

#[test]
fn no_probeable_hypothesis_selects_nothing() {
    assert_eq!(select_hypothesis(&[]), None);
    let mut saturated = hypothesis("acme", "CRM");
    saturated.status = HypothesisStatus::Saturated;
    let mut killed = hypothesis("acme", "ERP");
    killed.status = HypothesisStatus::Killed;
    assert_eq!(select_hypothesis(&[saturated, killed]), None);
}

#[test]
fn most_uncertain_hypothesis_goes_first() {
    let mut settled = hypothesis("acme", "CRM");
    settled.confidence = Confidence::new(0.68);
    let open = hypothesis("acme", "ERP");
    assert_eq!(select_hypothesis(&[settled, open]), Some(1));
}

#[test]
fn degraded_hypotheses_yield_to_active_ones() {
    let mut degraded = hypothesis("acme", "CRM");
    degraded.status = HypothesisStatus::Degraded;
    let mut active = hypothesis("acme", "ERP");
    active.confidence = Confidence::new(0.68);
    assert_eq!(select_hypothesis(&[degraded, active]), Some(1));
}

#[test]
fn equal_priority_prefers_fewer_attempts() {
    let mut busy = hypothesis("acme", "CRM");
    busy.iterations_attempted = 3;
    let idle = hypothesis("acme", "ERP");
    assert_eq!(select_hypothesis(&[busy, idle]), Some(1));
}

#[test]
fn superseded_hypotheses_are_skipped() {
    let mut old = hypothesis("acme", "CRM");
    let mut next = old.supersede(0.5);
    next.confidence = Confidence::new(0.68);
    assert_eq!(select_hypothesis(&[old, next]), Some(1));
}
