use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category-level engagement state, ordered from coldest to hottest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    #[default]
    Monitor,
    Warm,
    Engage,
    Live,
}

impl LifecycleState {
    pub fn as_str(self) -> &'static str {
        match self {
            LifecycleState::Monitor => "MONITOR",
            LifecycleState::Warm => "WARM",
            LifecycleState::Engage => "ENGAGE",
            LifecycleState::Live => "LIVE",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate of every admitted signal for one (entity, category) pair.
///
/// Never mutated in place: it is recomputed from the full signal set each time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HypothesisState {
    pub entity_id: String,
    pub category: String,
    /// Derived only from CAPABILITY signals.
    pub maturity_score: f64,
    /// Derived only from PROCUREMENT_INDICATOR signals.
    pub activity_score: f64,
    pub state: LifecycleState,
    pub capability_signals: u32,
    pub procurement_signals: u32,
    pub validated_signals: u32,
    pub last_updated: DateTime<Utc>,
}

impl HypothesisState {
    /// Same scores and state, ignoring `last_updated`.
    pub fn same_rollup(&self, other: &HypothesisState) -> bool {
        self.entity_id == other.entity_id
            && self.category == other.category
            && self.maturity_score.to_bits() == other.maturity_score.to_bits()
            && self.activity_score.to_bits() == other.activity_score.to_bits()
            && self.state == other.state
            && self.capability_signals == other.capability_signals
            && self.procurement_signals == other.procurement_signals
            && self.validated_signals == other.validated_signals
    }
}
