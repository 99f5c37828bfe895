//! Property tests: stored records read back with the same keys and counters,
//! and repeated upserts never create duplicates.

use proptest::prelude::*;

use prospect_core::models::EvidenceTier;
use prospect_core::traits::IDiscoveryStorage;
use prospect_storage::StorageEngine;
use test_fixtures::{hypothesis, signal};

fn tier_strategy() -> impl Strategy<Value = EvidenceTier> {
    prop_oneof![
        Just(EvidenceTier::Capability),
        Just(EvidenceTier::ProcurementIndicator),
        Just(EvidenceTier::ValidatedRfp),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_hypothesis_counters_roundtrip(
        attempted in 0u32..10_000,
        accepted in 0u32..100,
        weak in 0u32..100,
        rejected in 0u32..100,
        no_progress in 0u32..100,
    ) {
        let storage = StorageEngine::open_in_memory().unwrap();
        let mut h = hypothesis("acme", "CRM");
        h.iterations_attempted = attempted;
        h.iterations_accepted = accepted;
        h.iterations_weak_accept = weak;
        h.iterations_rejected = rejected;
        h.iterations_no_progress = no_progress;
        storage.save_hypothesis(&h).unwrap();

        let loaded = storage.get_hypothesis(&h.hypothesis_id).unwrap().unwrap();
        prop_assert_eq!(loaded.iterations_attempted, attempted);
        prop_assert_eq!(loaded.iterations_accepted, accepted);
        prop_assert_eq!(loaded.iterations_weak_accept, weak);
        prop_assert_eq!(loaded.iterations_rejected, rejected);
        prop_assert_eq!(loaded.iterations_no_progress, no_progress);
    }

    #[test]
    fn prop_signal_replays_never_duplicate(
        tiers in proptest::collection::vec(tier_strategy(), 1..10),
        replays in 1usize..4,
    ) {
        let storage = StorageEngine::open_in_memory().unwrap();
        let batch: Vec<_> = tiers.iter().map(|t| signal("acme", "CRM", *t)).collect();
        for _ in 0..replays {
            for s in &batch {
                storage.save_signal(s).unwrap();
            }
        }
        prop_assert_eq!(storage.signals_for("acme", "CRM").unwrap().len(), batch.len());
    }
}
