//! Per-tier admission rules: minimum evidence items and minimum confidence.

use prospect_core::config::ClassificationConfig;
use prospect_core::models::EvidenceTier;

/// Result of checking a classified signal against its tier's admission rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Admission {
    Admitted,
    InsufficientEvidence { have: usize, need: usize },
    LowConfidence { have: f64, need: f64 },
}

impl Admission {
    pub fn is_admitted(self) -> bool {
        self == Admission::Admitted
    }
}

/// Both the evidence count and the confidence floor must hold.
pub fn admit(
    tier: EvidenceTier,
    evidence_count: usize,
    confidence: f64,
    config: &ClassificationConfig,
) -> Admission {
    let rule = config.admission(tier);
    if evidence_count < rule.min_evidence {
        return Admission::InsufficientEvidence {
            have: evidence_count,
            need: rule.min_evidence,
        };
    }
    if confidence.is_nan() || confidence < rule.min_confidence {
        return Admission::LowConfidence {
            have: confidence,
            need: rule.min_confidence,
        };
    }
    Admission::Admitted
}
