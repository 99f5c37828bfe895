use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::HopType;

/// Hop scoring weights, loop-prevention threshold, and per-hop fetch costs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HopSelectionConfig {
    /// Consecutive failures after which a hop type is excluded.
    pub failure_exclusion_threshold: u32,
    pub eig_weight: f64,
    pub affinity_weight: f64,
    /// Fetch cost per hop type identifier. Missing entries use `default_cost_usd`.
    pub costs_usd: BTreeMap<String, f64>,
    pub default_cost_usd: f64,
}

impl HopSelectionConfig {
    pub fn cost_of(&self, hop: HopType) -> f64 {
        self.costs_usd
            .get(hop.as_str())
            .copied()
            .unwrap_or(self.default_cost_usd)
    }
}

impl Default for HopSelectionConfig {
    fn default() -> Self {
        let mut costs_usd = BTreeMap::new();
        costs_usd.insert(
            HopType::TenderPortal.as_str().to_string(),
            defaults::DEFAULT_TENDER_HOP_COST_USD,
        );
        Self {
            failure_exclusion_threshold: defaults::DEFAULT_FAILURE_EXCLUSION_THRESHOLD,
            eig_weight: defaults::DEFAULT_EIG_WEIGHT,
            affinity_weight: defaults::DEFAULT_AFFINITY_WEIGHT,
            costs_usd,
            default_cost_usd: defaults::DEFAULT_HOP_COST_USD,
        }
    }
}
