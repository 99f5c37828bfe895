use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::EvidenceTier;

/// Admission rule for one evidence tier. Both bounds must hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdmissionRule {
    pub min_evidence: usize,
    pub min_confidence: f64,
}

/// Signal classification and tier admission thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationConfig {
    /// ACCEPT at or above this confidence is a validated RFP.
    pub validated_confidence: f64,
    /// Substrings marking a tender / procurement source domain.
    pub tender_domain_patterns: Vec<String>,
    pub capability: AdmissionRule,
    pub procurement_indicator: AdmissionRule,
    pub validated_rfp: AdmissionRule,
}

impl ClassificationConfig {
    pub fn admission(&self, tier: EvidenceTier) -> AdmissionRule {
        match tier {
            EvidenceTier::Capability => self.capability,
            EvidenceTier::ProcurementIndicator => self.procurement_indicator,
            EvidenceTier::ValidatedRfp => self.validated_rfp,
        }
    }
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            validated_confidence: defaults::DEFAULT_VALIDATED_CONFIDENCE,
            tender_domain_patterns: defaults::DEFAULT_TENDER_DOMAIN_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            capability: AdmissionRule {
                min_evidence: defaults::DEFAULT_CAPABILITY_MIN_EVIDENCE,
                min_confidence: defaults::DEFAULT_CAPABILITY_MIN_CONFIDENCE,
            },
            procurement_indicator: AdmissionRule {
                min_evidence: defaults::DEFAULT_PROCUREMENT_MIN_EVIDENCE,
                min_confidence: defaults::DEFAULT_PROCUREMENT_MIN_CONFIDENCE,
            },
            validated_rfp: AdmissionRule {
                min_evidence: defaults::DEFAULT_VALIDATED_MIN_EVIDENCE,
                min_confidence: defaults::DEFAULT_VALIDATED_MIN_CONFIDENCE,
            },
        }
    }
}
