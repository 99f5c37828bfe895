//! Hop selection with loop prevention.
//!
//! A hop type that failed to resolve `failure_exclusion_threshold` times in a
//! row is excluded until it resolves again. When every type is excluded the
//! failure counters are cleared before choosing, so there is always a candidate.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use prospect_core::config::HopSelectionConfig;
use prospect_core::models::{HopType, Hypothesis};

use super::affinity::affinity;

/// The hop chosen for one iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HopChoice {
    pub hop: HopType,
    pub score: f64,
    /// The exclusion list was cleared to make this choice.
    pub exclusion_reset: bool,
}

#[derive(Debug, Clone, Default)]
pub struct HopSelector {
    config: HopSelectionConfig,
}

impl HopSelector {
    pub fn new(config: HopSelectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HopSelectionConfig {
        &self.config
    }

    /// Expected information gain: uncertainty times novelty.
    pub fn eig(&self, hypothesis: &Hypothesis, hop: HopType) -> f64 {
        let visits = hypothesis.hop_visits(hop) as f64;
        hypothesis.confidence.entropy() / (1.0 + visits)
    }

    pub fn score(&self, hypothesis: &Hypothesis, hop: HopType) -> f64 {
        self.config.eig_weight * self.eig(hypothesis, hop)
            + self.config.affinity_weight * affinity(hypothesis.evidence_focus(), hop)
    }

    pub fn is_excluded(&self, hypothesis: &Hypothesis, hop: HopType) -> bool {
        hypothesis.failure_count(hop) >= self.config.failure_exclusion_threshold
    }

    /// Hop types currently excluded for `hypothesis`, in identifier order.
    pub fn excluded(&self, hypothesis: &Hypothesis) -> Vec<HopType> {
        HopType::ALL
            .into_iter()
            .filter(|hop| self.is_excluded(hypothesis, *hop))
            .collect()
    }

    /// Pick the next hop for `hypothesis`.
    ///
    /// Highest score wins, then lowest cumulative cost for the hop type, then
    /// the hop identifier. Clears `hop_failure_counts` first if every type is
    /// excluded.
    pub fn select(
        &self,
        hypothesis: &mut Hypothesis,
        cumulative_cost: &BTreeMap<HopType, f64>,
    ) -> HopChoice {
        let exclusion_reset = self.excluded(hypothesis).len() == HopType::ALL.len();
        if exclusion_reset {
            hypothesis.hop_failure_counts.clear();
        }

        let cost = |hop: HopType| cumulative_cost.get(&hop).copied().unwrap_or(0.0);
        let mut best: Option<(HopType, f64)> = None;
        // ALL is in identifier order, so keeping the first of equals breaks
        // the final tie.
        for hop in HopType::ALL {
            if self.is_excluded(hypothesis, hop) {
                continue;
            }
            let score = self.score(hypothesis, hop);
            let better = match best {
                None => true,
                Some((current, current_score)) => match score.total_cmp(&current_score) {
                    Ordering::Greater => true,
                    Ordering::Less => false,
                    Ordering::Equal => cost(hop) < cost(current),
                },
            };
            if better {
                best = Some((hop, score));
            }
        }

        // Unreachable after a reset, but never leave the loop without a hop.
        let (hop, score) = best.unwrap_or((HopType::ALL[0], 0.0));
        HopChoice {
            hop,
            score,
            exclusion_reset,
        }
    }

    /// Record that `hop` could not be resolved.
    pub fn record_failure(&self, hypothesis: &mut Hypothesis, hop: HopType) {
        let count = hypothesis
            .hop_failure_counts
            .entry(hop.as_str().to_string())
            .or_insert(0);
        *count = count.saturating_add(1);
        hypothesis.last_failed_hop = Some(hop);
    }

    /// Record that `hop` resolved: its failure counter goes back to zero.
    pub fn record_success(&self, hypothesis: &mut Hypothesis, hop: HopType) {
        hypothesis.hop_failure_counts.remove(hop.as_str());
    }
}
