//! One entity's exclusively owned discovery session.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use prospect_aggregation::StateAggregator;
use prospect_core::errors::{ProspectError, ProspectResult};
use prospect_core::models::{
    CategoryTemplate, EntityContext, Hypothesis, HypothesisState, Termination, TieredSignal,
};
use prospect_core::traits::IDiscoveryStorage;

use crate::actionability::is_actionable;
use crate::budget::RunBudget;
use crate::generation::HypothesisGenerator;

/// State of a single entity run: its hypotheses, every admitted signal known
/// for the entity, and the budget spent so far.
///
/// Nothing here is shared with other runs. The engine mutates it between
/// awaits and persists it at the end; if persisting fails the run is left
/// intact so the caller can persist it again.
#[derive(Debug, Clone)]
pub struct EntityRun {
    pub(crate) entity: EntityContext,
    pub(crate) hypotheses: Vec<Hypothesis>,
    pub(crate) signals: Vec<TieredSignal>,
    signal_ids: BTreeSet<String>,
    pub(crate) budget: RunBudget,
    pub(crate) hop_failures: u32,
    pub(crate) exclusion_resets: u32,
    pub(crate) signals_admitted: u32,
    pub(crate) signals_dropped: u32,
    pub(crate) termination: Option<Termination>,
}

impl EntityRun {
    /// A run over the given hypotheses with no prior signals.
    pub fn new(entity: EntityContext, hypotheses: Vec<Hypothesis>) -> Self {
        Self {
            entity,
            hypotheses,
            signals: Vec::new(),
            signal_ids: BTreeSet::new(),
            budget: RunBudget::default(),
            hop_failures: 0,
            exclusion_resets: 0,
            signals_admitted: 0,
            signals_dropped: 0,
            termination: None,
        }
    }

    /// A fresh run with one generated hypothesis per template.
    pub fn start(
        entity: EntityContext,
        templates: &[CategoryTemplate],
        generator: &HypothesisGenerator,
    ) -> Self {
        let hypotheses = generator.generate(&entity, templates, &[]);
        Self::new(entity, hypotheses)
    }

    /// Continue from what `storage` holds for the entity, generating
    /// hypotheses for template categories not yet covered.
    pub fn resume<S: IDiscoveryStorage>(
        storage: &S,
        entity: EntityContext,
        templates: &[CategoryTemplate],
    ) -> ProspectResult<Self> {
        Self::resume_with(storage, entity, templates, &HypothesisGenerator::default())
    }

    pub fn resume_with<S: IDiscoveryStorage>(
        storage: &S,
        entity: EntityContext,
        templates: &[CategoryTemplate],
        generator: &HypothesisGenerator,
    ) -> ProspectResult<Self> {
        let stored: Vec<Hypothesis> = storage
            .hypotheses_for_entity(&entity.entity_id)?
            .into_iter()
            .filter(|h| !h.is_superseded())
            .collect();
        let generated = generator.generate(&entity, templates, &stored);

        let mut hypotheses = stored;
        hypotheses.extend(generated);
        let mut run = Self::new(entity, hypotheses);
        for signal in storage.signals_for_entity(&run.entity.entity_id)? {
            run.record_signal(signal);
        }
        Ok(run)
    }

    pub fn entity(&self) -> &EntityContext {
        &self.entity
    }

    pub fn entity_id(&self) -> &str {
        &self.entity.entity_id
    }

    pub fn hypotheses(&self) -> &[Hypothesis] {
        &self.hypotheses
    }

    pub fn hypothesis(&self, hypothesis_id: &str) -> Option<&Hypothesis> {
        self.hypotheses
            .iter()
            .find(|h| h.hypothesis_id == hypothesis_id)
    }

    /// Every admitted signal known for the entity, prior runs included.
    pub fn signals(&self) -> &[TieredSignal] {
        &self.signals
    }

    pub fn budget(&self) -> &RunBudget {
        &self.budget
    }

    pub fn hop_failures(&self) -> u32 {
        self.hop_failures
    }

    pub fn exclusion_resets(&self) -> u32 {
        self.exclusion_resets
    }

    pub fn signals_admitted(&self) -> u32 {
        self.signals_admitted
    }

    pub fn signals_dropped(&self) -> u32 {
        self.signals_dropped
    }

    /// Why the run stopped, once it has.
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    pub fn is_actionable(&self) -> bool {
        is_actionable(&self.hypotheses)
    }

    /// Add a signal unless one with the same id is already known.
    pub(crate) fn record_signal(&mut self, signal: TieredSignal) -> bool {
        if !self.signal_ids.insert(signal.signal_id.clone()) {
            return false;
        }
        self.signals.push(signal);
        true
    }

    /// Replace a hypothesis with a fresh one for the same category, starting
    /// at the generator's initial confidence.
    ///
    /// The old hypothesis stays in the run, marked as superseded, so it is
    /// persisted with its link to the replacement.
    pub fn supersede(
        &mut self,
        hypothesis_id: &str,
        generator: &HypothesisGenerator,
    ) -> ProspectResult<&Hypothesis> {
        let old = self
            .hypotheses
            .iter_mut()
            .find(|h| h.hypothesis_id == hypothesis_id && !h.is_superseded())
            .ok_or_else(|| ProspectError::HypothesisNotFound {
                id: hypothesis_id.to_string(),
            })?;
        let next = old.supersede(generator.initial_confidence());
        self.hypotheses.push(next);
        let index = self.hypotheses.len() - 1;
        Ok(&self.hypotheses[index])
    }

    /// Categories with a live hypothesis or at least one signal.
    pub fn categories(&self) -> BTreeSet<&str> {
        self.hypotheses
            .iter()
            .filter(|h| !h.is_superseded())
            .map(|h| h.category.as_str())
            .chain(self.signals.iter().map(|s| s.category.as_str()))
            .collect()
    }

    /// One state per category as of `as_of`, computed from the run's signals.
    /// Categories without signals come out as MONITOR.
    pub fn states(
        &self,
        aggregator: &StateAggregator,
        as_of: DateTime<Utc>,
    ) -> Vec<HypothesisState> {
        aggregator.compute_for(
            &self.entity.entity_id,
            self.categories(),
            &self.signals,
            as_of,
        )
    }
}
