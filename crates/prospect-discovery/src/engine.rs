//! DiscoveryEngine: drives entity runs against the oracle, the retrieval
//! source, and storage.

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::{debug, Instrument};

use prospect_aggregation::StateAggregator;
use prospect_classification::{ClassificationOutcome, SignalClassifier, SignalInput};
use prospect_core::config::ProspectConfig;
use prospect_core::errors::ProspectResult;
use prospect_core::models::{
    CategoryTemplate, DiscoveryReport, EntityContext, EvaluationRequest, EvaluationResponse,
    EvidenceItem, HopResolution, HopType, HypothesisOutcome, HypothesisState, HypothesisStatus,
    IterationResult, LifecycleState, Termination,
};
use prospect_core::traits::{IDiscoveryStorage, IEvaluationOracle, IRetrievalSource};
use prospect_observability::tracing_setup::events;
use prospect_observability::{aggregation_span, discovery_span, iteration_span};

use crate::confidence::apply_decision;
use crate::generation::HypothesisGenerator;
use crate::run::EntityRun;
use crate::saturation::SaturationDetector;
use crate::selection::{select_hypothesis, HopSelector};

/// The discovery loop.
///
/// One `EntityRun` is driven strictly in order: select, fetch, evaluate,
/// update. The oracle call is the only suspension point that matters and is
/// never overlapped within a run.
pub struct DiscoveryEngine<O, R, S> {
    oracle: O,
    retrieval: R,
    storage: S,
    config: ProspectConfig,
    generator: HypothesisGenerator,
    hop_selector: HopSelector,
    saturation: SaturationDetector,
    classifier: SignalClassifier,
    aggregator: StateAggregator,
}

impl<O, R, S> DiscoveryEngine<O, R, S>
where
    O: IEvaluationOracle,
    R: IRetrievalSource,
    S: IDiscoveryStorage,
{
    pub fn new(oracle: O, retrieval: R, storage: S, config: ProspectConfig) -> Self {
        Self {
            generator: HypothesisGenerator::from_config(&config.confidence),
            hop_selector: HopSelector::new(config.hop_selection.clone()),
            saturation: SaturationDetector::new(config.saturation),
            classifier: SignalClassifier::new(config.classification.clone()),
            aggregator: StateAggregator::new(config.aggregation.clone()),
            oracle,
            retrieval,
            storage,
            config,
        }
    }

    pub fn config(&self) -> &ProspectConfig {
        &self.config
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn retrieval(&self) -> &R {
        &self.retrieval
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn generator(&self) -> &HypothesisGenerator {
        &self.generator
    }

    /// Load (or create) the run for an entity from storage.
    pub fn begin(
        &self,
        entity: EntityContext,
        templates: &[CategoryTemplate],
    ) -> ProspectResult<EntityRun> {
        EntityRun::resume_with(&self.storage, entity, templates, &self.generator)
    }

    /// Resume, drive to termination, persist, and report.
    ///
    /// Storage calls block the calling thread; `DiscoveryPool` moves them to
    /// the blocking thread pool.
    ///
    /// A persistence error drops the in-memory run. To keep it for a retry,
    /// call [`begin`](Self::begin), [`drive`](Self::drive) and
    /// [`persist`](Self::persist) directly.
    pub async fn run_entity(
        &self,
        entity: EntityContext,
        templates: &[CategoryTemplate],
    ) -> ProspectResult<DiscoveryReport> {
        let mut run = self.begin(entity, templates)?;
        self.drive(&mut run).await;
        let states = self.persist(&run)?;
        Ok(self.report(&run, states))
    }

    /// Iterate until a budget is used up or no hypothesis is probe-able.
    pub async fn drive(&self, run: &mut EntityRun) -> Termination {
        let span = discovery_span!(run.entity_id());
        async {
            events::run_started(run.entity_id(), run.hypotheses.len());
            let termination = loop {
                if let Some(exhausted) = run.budget.exhausted(&self.config.discovery) {
                    break exhausted;
                }
                let Some(index) = select_hypothesis(&run.hypotheses) else {
                    break Termination::AllHypothesesTerminal;
                };
                let span = iteration_span!(run.hypotheses[index].hypothesis_id, run.budget.iterations);
                self.iterate(run, index).instrument(span).await;
            };
            run.termination = Some(termination);
            events::run_finished(
                run.entity_id(),
                termination.as_str(),
                run.budget.iterations,
                run.budget.cost_usd,
            );
            termination
        }
        .instrument(span)
        .await
    }

    /// One iteration against `run.hypotheses[index]`.
    async fn iterate(&self, run: &mut EntityRun, index: usize) {
        let choice = self
            .hop_selector
            .select(&mut run.hypotheses[index], &run.budget.cost_by_hop);
        let hop = choice.hop;
        if choice.exclusion_reset {
            run.exclusion_resets += 1;
            events::exclusion_reset(&run.hypotheses[index].hypothesis_id, HopType::ALL.len());
        }

        run.budget.iterations += 1;
        {
            let h = &mut run.hypotheses[index];
            h.iterations_attempted = h.iterations_attempted.saturating_add(1);
            h.updated_at = Utc::now();
        }

        let resolved = match self.retrieval.resolve(hop, &run.entity).await {
            HopResolution::Resolved(resolved) => resolved,
            HopResolution::Unresolved { reason } => {
                let h = &mut run.hypotheses[index];
                self.hop_selector.record_failure(h, hop);
                run.hop_failures += 1;
                debug!(
                    hop = %hop,
                    failures = h.failure_count(hop),
                    %reason,
                    "hop unresolved"
                );
                return;
            }
        };
        self.hop_selector
            .record_success(&mut run.hypotheses[index], hop);
        run.budget.depth += 1;

        let fetch_cost = resolved
            .cost_usd
            .filter(|c| c.is_finite() && *c >= 0.0)
            .unwrap_or_else(|| self.config.hop_selection.cost_of(hop));
        let source_url = resolved.url;
        let request = {
            let h = &run.hypotheses[index];
            EvaluationRequest {
                hypothesis_id: h.hypothesis_id.clone(),
                category: h.category.clone(),
                hypothesis_statement: h.statement.clone(),
                scraped_content: resolved.content,
                source_url: source_url.clone(),
            }
        };

        let response = match self.oracle.evaluate(&request).await {
            Ok(response) => {
                let returned = response.decision;
                let response = response.sanitized();
                if response.decision != returned {
                    events::oracle_degraded(&request.hypothesis_id, &response.justification);
                }
                response
            }
            Err(e) => {
                let reason = e.to_string();
                events::oracle_degraded(&request.hypothesis_id, &reason);
                EvaluationResponse::no_progress(reason)
            }
        };
        let evaluation_cost = response
            .cost_usd
            .unwrap_or(self.config.discovery.evaluation_cost_usd);
        run.budget.charge(hop, fetch_cost + evaluation_cost);

        let h = &mut run.hypotheses[index];
        let update = apply_decision(
            h,
            response.decision,
            response.confidence_delta,
            &self.config.confidence,
        );
        let evidence: Vec<EvidenceItem> = response
            .evidence_found
            .iter()
            .map(|excerpt| EvidenceItem {
                excerpt: excerpt.clone(),
                evidence_type: response.evidence_type.clone(),
            })
            .collect();
        let record = IterationResult {
            iteration: u32::try_from(h.iteration_results.len()).unwrap_or(u32::MAX),
            hop_type: hop,
            depth: run.budget.depth,
            decision: response.decision,
            confidence_delta: update.delta,
            confidence_after: update.confidence_after,
            evidence_count: u32::try_from(evidence.len()).unwrap_or(u32::MAX),
            evidence_excerpt: response.evidence_found.first().cloned(),
            justification: Some(response.justification.clone()).filter(|j| !j.is_empty()),
            source_url: Some(source_url),
            timestamp: Utc::now(),
        };
        h.iteration_results.push(record.clone());

        if !h.status.is_terminal() && self.saturation.is_saturated(h) {
            h.status = HypothesisStatus::Saturated;
        }
        if h.status != update.status_before {
            events::status_changed(
                &h.hypothesis_id,
                update.status_before.as_str(),
                h.status.as_str(),
                h.confidence.value(),
            );
        }
        debug!(
            hop = %hop,
            decision = %response.decision,
            delta = update.delta,
            confidence = update.confidence_after,
            evidence = record.evidence_count,
            "iteration evaluated"
        );

        match self.classifier.process(SignalInput {
            hypothesis: h,
            iteration: &record,
            evidence,
        }) {
            ClassificationOutcome::Admitted(signal) => {
                if run.record_signal(signal) {
                    run.signals_admitted += 1;
                }
            }
            ClassificationOutcome::Dropped { .. } => run.signals_dropped += 1,
            ClassificationOutcome::Unclassified => {}
        }
    }

    /// Write the run's hypotheses, signals, and recomputed category states.
    ///
    /// Every write is an upsert, so calling this again after a failure is
    /// safe. Returns the states that were written.
    pub fn persist(&self, run: &EntityRun) -> ProspectResult<Vec<HypothesisState>> {
        let entity_id = run.entity_id();
        let previous: BTreeMap<String, LifecycleState> = self
            .storage
            .get_all_states(entity_id)?
            .into_iter()
            .map(|s| (s.category, s.state))
            .collect();

        for hypothesis in &run.hypotheses {
            self.storage.save_hypothesis(hypothesis)?;
        }
        for signal in &run.signals {
            self.storage.save_signal(signal)?;
        }

        let states = run.states(&self.aggregator, Utc::now());
        for state in &states {
            let _span = aggregation_span!(entity_id, state.category).entered();
            self.storage.save_state(state)?;
            match previous.get(&state.category) {
                Some(prev) if *prev == state.state => {}
                prev => events::state_changed(
                    entity_id,
                    &state.category,
                    prev.map_or("NONE", |p| p.as_str()),
                    state.state.as_str(),
                ),
            }
        }
        Ok(states)
    }

    /// Summarize a run.
    pub fn report(&self, run: &EntityRun, states: Vec<HypothesisState>) -> DiscoveryReport {
        let termination = run
            .termination()
            .or_else(|| run.budget.exhausted(&self.config.discovery))
            .unwrap_or(Termination::AllHypothesesTerminal);
        DiscoveryReport {
            entity_id: run.entity_id().to_string(),
            iterations: run.budget.iterations,
            depth: run.budget.depth,
            cost_usd: run.budget.cost_usd,
            termination,
            hop_failures: run.hop_failures,
            exclusion_resets: run.exclusion_resets,
            signals_admitted: run.signals_admitted,
            signals_dropped: run.signals_dropped,
            hypotheses: run
                .hypotheses
                .iter()
                .filter(|h| !h.is_superseded())
                .map(|h| HypothesisOutcome {
                    hypothesis_id: h.hypothesis_id.clone(),
                    category: h.category.clone(),
                    status: h.status,
                    confidence: h.confidence.value(),
                    iterations_attempted: h.iterations_attempted,
                    iterations_accepted: h.iterations_accepted,
                })
                .collect(),
            states,
            actionable: run.is_actionable(),
        }
    }
}
