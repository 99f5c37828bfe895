use serde::{Deserialize, Serialize};

use super::defaults;

/// Per-entity run budgets. Whichever is hit first stops the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Maximum iterations (hop attempts, resolved or not).
    pub max_iterations: u32,
    /// Maximum hop chain length (resolved hops).
    pub max_depth: u32,
    /// Running cost ceiling for external calls.
    pub cost_limit_usd: f64,
    /// Cost charged per oracle call when the oracle does not report one.
    pub evaluation_cost_usd: f64,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            max_iterations: defaults::DEFAULT_MAX_ITERATIONS,
            max_depth: defaults::DEFAULT_MAX_DEPTH,
            cost_limit_usd: defaults::DEFAULT_COST_LIMIT_USD,
            evaluation_cost_usd: defaults::DEFAULT_EVALUATION_COST_USD,
        }
    }
}
