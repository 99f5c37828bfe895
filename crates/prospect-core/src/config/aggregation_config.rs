use serde::{Deserialize, Serialize};

use super::defaults;

/// Weights and thresholds for the category-level state rollup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Maturity contributed per admitted CAPABILITY signal.
    pub capability_weight: f64,
    /// Activity contributed per admitted PROCUREMENT_INDICATOR signal.
    pub procurement_weight: f64,
    pub engage_activity: f64,
    pub warm_activity: f64,
    pub warm_maturity: f64,
    /// Decimal places scores are rounded to.
    pub score_precision: i32,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            capability_weight: defaults::DEFAULT_CAPABILITY_WEIGHT,
            procurement_weight: defaults::DEFAULT_PROCUREMENT_WEIGHT,
            engage_activity: defaults::DEFAULT_ENGAGE_ACTIVITY,
            warm_activity: defaults::DEFAULT_WARM_ACTIVITY,
            warm_maturity: defaults::DEFAULT_WARM_MATURITY,
            score_precision: defaults::DEFAULT_SCORE_PRECISION,
        }
    }
}
