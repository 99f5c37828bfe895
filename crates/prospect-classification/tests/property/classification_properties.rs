//! Property tests: classify is total and agrees with the tier table.

use proptest::prelude::*;

use prospect_classification::classify;
use prospect_core::config::ClassificationConfig;
use prospect_core::models::{Decision, EvidenceTier};

fn any_decision() -> impl Strategy<Value = Decision> {
    prop_oneof![
        Just(Decision::Accept),
        Just(Decision::WeakAccept),
        Just(Decision::Reject),
        Just(Decision::NoProgress),
        Just(Decision::Saturated),
    ]
}

fn any_domain() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        "[a-z]{1,12}\\.(com|org|net)".prop_map(Some),
        Just(Some("tenders.gov.uk".to_string())),
        Just(Some("rfp.city.org".to_string())),
        Just(Some("a-contract-hub.io".to_string())),
    ]
}

proptest! {
    #[test]
    fn prop_classify_matches_table(
        decision in any_decision(),
        confidence in 0.0f64..=1.0,
        domain in any_domain(),
    ) {
        let config = ClassificationConfig::default();
        let tier = classify(decision, confidence, domain.as_deref(), &config);
        let tender = domain.as_deref().is_some_and(|d| {
            ["tender", "bidnet", "rfp.", "procurement", "contract"]
                .iter()
                .any(|p| d.contains(p))
        });
        let expected = match decision {
            Decision::WeakAccept => Some(EvidenceTier::Capability),
            Decision::Accept if confidence >= 0.75 || tender => Some(EvidenceTier::ValidatedRfp),
            Decision::Accept => Some(EvidenceTier::ProcurementIndicator),
            _ => None,
        };
        prop_assert_eq!(tier, expected);
    }

    #[test]
    fn prop_only_positive_decisions_are_tiered(
        decision in any_decision(),
        confidence in -1.0f64..2.0,
        domain in any_domain(),
    ) {
        let tier = classify(decision, confidence, domain.as_deref(), &ClassificationConfig::default());
        prop_assert_eq!(tier.is_some(), decision.is_positive());
    }
}
