//! Per-run budgets: iterations, hop chain depth, running cost.

use std::collections::BTreeMap;

use prospect_core::config::DiscoveryConfig;
use prospect_core::models::{HopType, Termination};

/// Spend so far in one entity run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunBudget {
    /// Hop attempts, resolved or not.
    pub iterations: u32,
    /// Resolved hops.
    pub depth: u32,
    pub cost_usd: f64,
    /// Cost spent per hop type, fetch plus evaluation.
    pub cost_by_hop: BTreeMap<HopType, f64>,
}

impl RunBudget {
    /// The first budget that is used up, checked in the order iterations,
    /// depth, cost.
    pub fn exhausted(&self, config: &DiscoveryConfig) -> Option<Termination> {
        if self.iterations >= config.max_iterations {
            Some(Termination::MaxIterations)
        } else if self.depth >= config.max_depth {
            Some(Termination::MaxDepth)
        } else if self.cost_usd >= config.cost_limit_usd {
            Some(Termination::CostLimit)
        } else {
            None
        }
    }

    pub fn charge(&mut self, hop: HopType, cost_usd: f64) {
        if !cost_usd.is_finite() || cost_usd <= 0.0 {
            return;
        }
        self.cost_usd += cost_usd;
        *self.cost_by_hop.entry(hop).or_insert(0.0) += cost_usd;
    }
}
