//! StateAggregator: full recomputation of category states from signals.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use prospect_core::config::AggregationConfig;
use prospect_core::models::{EvidenceTier, HypothesisState, TieredSignal};
use tracing::debug;

use crate::lifecycle::determine_state;
use crate::scoring::capped_score;

#[derive(Debug, Clone, Default)]
pub struct StateAggregator {
    config: AggregationConfig,
}

impl StateAggregator {
    pub fn new(config: AggregationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Recompute the state of one (entity, category) pair.
    ///
    /// Signals for other pairs are ignored; a signal id seen twice counts once.
    pub fn compute(
        &self,
        entity_id: &str,
        category: &str,
        signals: &[TieredSignal],
        as_of: DateTime<Utc>,
    ) -> HypothesisState {
        let mut seen = BTreeSet::new();
        let mut counts: BTreeMap<EvidenceTier, u32> = BTreeMap::new();
        for s in signals {
            if s.entity_id != entity_id || s.category != category {
                continue;
            }
            if !seen.insert(s.signal_id.as_str()) {
                continue;
            }
            *counts.entry(s.tier).or_default() += 1;
        }

        let capability = counts.get(&EvidenceTier::Capability).copied().unwrap_or(0);
        let procurement = counts
            .get(&EvidenceTier::ProcurementIndicator)
            .copied()
            .unwrap_or(0);
        let validated = counts.get(&EvidenceTier::ValidatedRfp).copied().unwrap_or(0);

        let precision = self.config.score_precision;
        let maturity_score = capped_score(capability, self.config.capability_weight, precision);
        let activity_score = capped_score(procurement, self.config.procurement_weight, precision);
        let state = determine_state(maturity_score, activity_score, validated, &self.config);

        debug!(
            entity_id,
            category,
            capability,
            procurement,
            validated,
            maturity_score,
            activity_score,
            state = %state,
            "hypothesis state recomputed"
        );

        HypothesisState {
            entity_id: entity_id.to_string(),
            category: category.to_string(),
            maturity_score,
            activity_score,
            state,
            capability_signals: capability,
            procurement_signals: procurement,
            validated_signals: validated,
            last_updated: as_of,
        }
    }

    /// Recompute every category of `entity_id` that has at least one signal,
    /// ordered by category.
    pub fn compute_all(
        &self,
        entity_id: &str,
        signals: &[TieredSignal],
        as_of: DateTime<Utc>,
    ) -> Vec<HypothesisState> {
        let categories: BTreeSet<&str> = signals
            .iter()
            .filter(|s| s.entity_id == entity_id)
            .map(|s| s.category.as_str())
            .collect();
        self.compute_for(entity_id, categories, signals, as_of)
    }

    /// Recompute the given categories of `entity_id`, deduplicated and ordered
    /// by category. A category without signals comes out as MONITOR.
    pub fn compute_for<'a>(
        &self,
        entity_id: &str,
        categories: impl IntoIterator<Item = &'a str>,
        signals: &[TieredSignal],
        as_of: DateTime<Utc>,
    ) -> Vec<HypothesisState> {
        let categories: BTreeSet<&str> = categories.into_iter().collect();
        categories
            .into_iter()
            .map(|category| self.compute(entity_id, category, signals, as_of))
            .collect()
    }
}
