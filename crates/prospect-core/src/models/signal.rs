use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Decision;

/// Evidentiary strength of a classified signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvidenceTier {
    Capability,
    ProcurementIndicator,
    ValidatedRfp,
}

impl EvidenceTier {
    pub const ALL: [EvidenceTier; 3] = [
        EvidenceTier::Capability,
        EvidenceTier::ProcurementIndicator,
        EvidenceTier::ValidatedRfp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EvidenceTier::Capability => "CAPABILITY",
            EvidenceTier::ProcurementIndicator => "PROCUREMENT_INDICATOR",
            EvidenceTier::ValidatedRfp => "VALIDATED_RFP",
        }
    }
}

impl fmt::Display for EvidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One piece of evidence quoted by the oracle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub excerpt: String,
    pub evidence_type: Option<String>,
}

/// A classified signal that passed tier admission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TieredSignal {
    /// Deterministic: the same hypothesis iteration always yields the same id.
    pub signal_id: String,
    pub entity_id: String,
    pub category: String,
    pub hypothesis_id: String,
    pub iteration: u32,
    pub tier: EvidenceTier,
    pub decision: Decision,
    pub confidence: f64,
    pub evidence: Vec<EvidenceItem>,
    pub source_url: Option<String>,
    pub source_domain: Option<String>,
    pub observed_at: DateTime<Utc>,
}

impl TieredSignal {
    /// blake3 over (hypothesis id, iteration, tier), hex encoded.
    pub fn compute_id(hypothesis_id: &str, iteration: u32, tier: EvidenceTier) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(hypothesis_id.as_bytes());
        hasher.update(&[0]);
        hasher.update(&iteration.to_le_bytes());
        hasher.update(tier.as_str().as_bytes());
        hasher.finalize().to_hex().to_string()
    }
}
