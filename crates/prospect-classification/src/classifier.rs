//! Decision → evidence tier mapping.

use prospect_core::config::ClassificationConfig;
use prospect_core::models::{
    Decision, EvidenceItem, EvidenceTier, Hypothesis, IterationResult, TieredSignal,
};
use tracing::debug;

use crate::admission::{admit, Admission};
use crate::domain::{extract_domain, is_tender_domain};

/// Classify one raw decision. Total over every input.
///
/// - `WEAK_ACCEPT` → CAPABILITY
/// - `ACCEPT` at or above `validated_confidence` → VALIDATED_RFP
/// - `ACCEPT` from a tender-pattern domain → VALIDATED_RFP, whatever the confidence
/// - `ACCEPT` otherwise → PROCUREMENT_INDICATOR
/// - anything else → no tier
pub fn classify(
    decision: Decision,
    confidence: f64,
    source_domain: Option<&str>,
    config: &ClassificationConfig,
) -> Option<EvidenceTier> {
    match decision {
        Decision::WeakAccept => Some(EvidenceTier::Capability),
        Decision::Accept => {
            let tender_source = source_domain
                .is_some_and(|d| is_tender_domain(d, &config.tender_domain_patterns));
            if confidence >= config.validated_confidence || tender_source {
                Some(EvidenceTier::ValidatedRfp)
            } else {
                Some(EvidenceTier::ProcurementIndicator)
            }
        }
        Decision::Reject | Decision::NoProgress | Decision::Saturated => None,
    }
}

/// Everything the classifier needs about one evaluated iteration.
pub struct SignalInput<'a> {
    /// The hypothesis after its confidence update.
    pub hypothesis: &'a Hypothesis,
    pub iteration: &'a IterationResult,
    pub evidence: Vec<EvidenceItem>,
}

/// What became of one iteration's signal.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationOutcome {
    /// The decision maps to no tier.
    Unclassified,
    /// Classified, but failed its tier's admission rule.
    Dropped {
        tier: EvidenceTier,
        admission: Admission,
    },
    Admitted(TieredSignal),
}

impl ClassificationOutcome {
    pub fn admitted(&self) -> Option<&TieredSignal> {
        match self {
            ClassificationOutcome::Admitted(signal) => Some(signal),
            _ => None,
        }
    }
}

/// Classifies iterations into admitted signals.
#[derive(Debug, Clone, Default)]
pub struct SignalClassifier {
    config: ClassificationConfig,
}

impl SignalClassifier {
    pub fn new(config: ClassificationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassificationConfig {
        &self.config
    }

    /// Classify and admit one iteration, building the signal if it is admitted.
    ///
    /// The confidence used for both tiering and admission is the hypothesis
    /// confidence after the iteration's update.
    pub fn process(&self, input: SignalInput<'_>) -> ClassificationOutcome {
        let record = input.iteration;
        let confidence = record.confidence_after;
        let source_domain = record.source_url.as_deref().and_then(extract_domain);

        let Some(tier) = classify(
            record.decision,
            confidence,
            source_domain.as_deref(),
            &self.config,
        ) else {
            return ClassificationOutcome::Unclassified;
        };

        let admission = admit(tier, input.evidence.len(), confidence, &self.config);
        if !admission.is_admitted() {
            debug!(
                hypothesis_id = %input.hypothesis.hypothesis_id,
                tier = %tier,
                ?admission,
                "signal dropped at admission"
            );
            return ClassificationOutcome::Dropped { tier, admission };
        }

        let h = input.hypothesis;
        ClassificationOutcome::Admitted(TieredSignal {
            signal_id: TieredSignal::compute_id(&h.hypothesis_id, record.iteration, tier),
            entity_id: h.entity_id.clone(),
            category: h.category.clone(),
            hypothesis_id: h.hypothesis_id.clone(),
            iteration: record.iteration,
            tier,
            decision: record.decision,
            confidence,
            evidence: input.evidence,
            source_url: record.source_url.clone(),
            source_domain,
            observed_at: record.timestamp,
        })
    }
}
