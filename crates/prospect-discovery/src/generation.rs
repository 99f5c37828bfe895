//! Hypothesis generation from category templates.

use std::collections::BTreeSet;

use prospect_core::config::ConfidenceConfig;
use prospect_core::models::{CategoryTemplate, EntityContext, Hypothesis};
use prospect_core::Confidence;

/// Builds one hypothesis per category template for an entity.
///
/// A new hypothesis has no ACCEPT, so its initial confidence never exceeds
/// the no-accept ceiling.
#[derive(Debug, Clone)]
pub struct HypothesisGenerator {
    initial_confidence: f64,
}

impl Default for HypothesisGenerator {
    fn default() -> Self {
        Self::from_config(&ConfidenceConfig::default())
    }
}

impl HypothesisGenerator {
    pub fn new(initial_confidence: f64, no_accept_ceiling: f64) -> Self {
        let capped = Confidence::new(initial_confidence).capped(no_accept_ceiling);
        Self {
            initial_confidence: capped.value(),
        }
    }

    pub fn from_config(config: &ConfidenceConfig) -> Self {
        Self::new(config.initial, config.no_accept_ceiling)
    }

    pub fn initial_confidence(&self) -> f64 {
        self.initial_confidence
    }

    /// Hypotheses for every template category that `existing` does not cover
    /// with a live (non-superseded) hypothesis. Duplicate template categories
    /// produce one hypothesis.
    pub fn generate(
        &self,
        entity: &EntityContext,
        templates: &[CategoryTemplate],
        existing: &[Hypothesis],
    ) -> Vec<Hypothesis> {
        let mut covered: BTreeSet<&str> = existing
            .iter()
            .filter(|h| h.entity_id == entity.entity_id && !h.is_superseded())
            .map(|h| h.category.as_str())
            .collect();

        let mut generated = Vec::new();
        for template in templates {
            if !covered.insert(template.category.as_str()) {
                continue;
            }
            generated.push(Hypothesis::new(
                entity.entity_id.clone(),
                template.category.clone(),
                template.render(entity),
                self.initial_confidence,
            ));
        }
        generated
    }
}
