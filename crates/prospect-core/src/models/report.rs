use serde::{Deserialize, Serialize};

use super::{HypothesisState, HypothesisStatus};

/// Why an entity run stopped. Every variant is a normal termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    MaxIterations,
    MaxDepth,
    CostLimit,
    AllHypothesesTerminal,
}

impl Termination {
    pub fn as_str(self) -> &'static str {
        match self {
            Termination::MaxIterations => "max_iterations",
            Termination::MaxDepth => "max_depth",
            Termination::CostLimit => "cost_limit",
            Termination::AllHypothesesTerminal => "all_hypotheses_terminal",
        }
    }
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final status of one hypothesis at the end of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HypothesisOutcome {
    pub hypothesis_id: String,
    pub category: String,
    pub status: HypothesisStatus,
    pub confidence: f64,
    pub iterations_attempted: u32,
    pub iterations_accepted: u32,
}

/// Summary of one entity discovery run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryReport {
    pub entity_id: String,
    pub iterations: u32,
    pub depth: u32,
    pub cost_usd: f64,
    pub termination: Termination,
    pub hop_failures: u32,
    pub exclusion_resets: u32,
    pub signals_admitted: u32,
    pub signals_dropped: u32,
    pub hypotheses: Vec<HypothesisOutcome>,
    pub states: Vec<HypothesisState>,
    pub actionable: bool,
}
