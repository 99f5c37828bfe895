use std::sync::Arc;

use crate::errors::ProspectResult;
use crate::models::{Hypothesis, HypothesisState, TieredSignal};

/// Durable store for hypotheses, admitted signals, and category states.
///
/// Every write is an upsert: hypotheses by `hypothesis_id`, signals by
/// `signal_id`, states by `(entity_id, category)`.
pub trait IDiscoveryStorage: Send + Sync {
    // --- Hypotheses ---
    fn save_hypothesis(&self, hypothesis: &Hypothesis) -> ProspectResult<()>;
    fn get_hypothesis(&self, hypothesis_id: &str) -> ProspectResult<Option<Hypothesis>>;
    fn hypotheses_for_entity(&self, entity_id: &str) -> ProspectResult<Vec<Hypothesis>>;

    // --- Signals ---
    fn save_signal(&self, signal: &TieredSignal) -> ProspectResult<()>;
    fn signals_for(&self, entity_id: &str, category: &str) -> ProspectResult<Vec<TieredSignal>>;
    fn signals_for_entity(&self, entity_id: &str) -> ProspectResult<Vec<TieredSignal>>;

    // --- States ---
    fn save_state(&self, state: &HypothesisState) -> ProspectResult<()>;
    fn get_state(&self, entity_id: &str, category: &str)
        -> ProspectResult<Option<HypothesisState>>;
    fn get_all_states(&self, entity_id: &str) -> ProspectResult<Vec<HypothesisState>>;

    /// Recompute and store every category state of an entity from its stored signals.
    fn recalculate(&self, entity_id: &str) -> ProspectResult<Vec<HypothesisState>>;
}

/// Blanket impl: `Arc<T>` implements `IDiscoveryStorage` by delegating to the inner `T`.
impl<T: IDiscoveryStorage> IDiscoveryStorage for Arc<T> {
    fn save_hypothesis(&self, hypothesis: &Hypothesis) -> ProspectResult<()> { (**self).save_hypothesis(hypothesis) }
    fn get_hypothesis(&self, hypothesis_id: &str) -> ProspectResult<Option<Hypothesis>> { (**self).get_hypothesis(hypothesis_id) }
    fn hypotheses_for_entity(&self, entity_id: &str) -> ProspectResult<Vec<Hypothesis>> { (**self).hypotheses_for_entity(entity_id) }
    fn save_signal(&self, signal: &TieredSignal) -> ProspectResult<()> { (**self).save_signal(signal) }
    fn signals_for(&self, entity_id: &str, category: &str) -> ProspectResult<Vec<TieredSignal>> { (**self).signals_for(entity_id, category) }
    fn signals_for_entity(&self, entity_id: &str) -> ProspectResult<Vec<TieredSignal>> { (**self).signals_for_entity(entity_id) }
    fn save_state(&self, state: &HypothesisState) -> ProspectResult<()> { (**self).save_state(state) }
    fn get_state(&self, entity_id: &str, category: &str) -> ProspectResult<Option<HypothesisState>> { (**self).get_state(entity_id, category) }
    fn get_all_states(&self, entity_id: &str) -> ProspectResult<Vec<HypothesisState>> { (**self).get_all_states(entity_id) }
    fn recalculate(&self, entity_id: &str) -> ProspectResult<Vec<HypothesisState>> { (**self).recalculate(entity_id) }
}
