use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Decision, HopType};
use crate::confidence::Confidence;

/// Lifecycle status of a hypothesis.
///
/// `Saturated` and `Killed` are terminal: once reached, the discovery loop
/// never probes the hypothesis again within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HypothesisStatus {
    #[default]
    Active,
    Promoted,
    Degraded,
    Saturated,
    Killed,
}

impl HypothesisStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            HypothesisStatus::Active => "ACTIVE",
            HypothesisStatus::Promoted => "PROMOTED",
            HypothesisStatus::Degraded => "DEGRADED",
            HypothesisStatus::Saturated => "SATURATED",
            HypothesisStatus::Killed => "KILLED",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, HypothesisStatus::Saturated | HypothesisStatus::Killed)
    }
}

/// Which tier of evidence a hypothesis needs next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceFocus {
    /// Nothing supporting yet: look for capability evidence.
    Capability,
    /// Weak support only: look for procurement activity.
    Procurement,
    /// Strong support exists: look for a validated tender.
    Validation,
}

/// One evaluated hop, appended to the hypothesis audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationResult {
    /// Position of this record in `iteration_results`.
    pub iteration: u32,
    pub hop_type: HopType,
    /// Hop chain length of the entity run when this hop was taken.
    pub depth: u32,
    pub decision: Decision,
    /// Confidence change actually applied, after clamping and the ceiling.
    pub confidence_delta: f64,
    pub confidence_after: f64,
    pub evidence_count: u32,
    pub evidence_excerpt: Option<String>,
    pub justification: Option<String>,
    pub source_url: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// A single testable claim about one (entity, category) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    pub hypothesis_id: String,
    pub entity_id: String,
    pub category: String,
    pub statement: String,
    pub confidence: Confidence,
    #[serde(default)]
    pub status: HypothesisStatus,

    pub iterations_attempted: u32,
    pub iterations_accepted: u32,
    pub iterations_weak_accept: u32,
    pub iterations_rejected: u32,
    pub iterations_no_progress: u32,

    /// Consecutive resolution failures keyed by hop type identifier.
    #[serde(default)]
    pub hop_failure_counts: BTreeMap<String, u32>,
    pub last_failed_hop: Option<HopType>,
    /// Append-only audit trail.
    #[serde(default)]
    pub iteration_results: Vec<IterationResult>,

    pub supersedes: Option<String>,
    pub superseded_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Hypothesis {
    /// `initial_confidence` is only clamped to [0, 1]. `HypothesisGenerator`
    /// also caps it at the no-accept ceiling.
    pub fn new(
        entity_id: impl Into<String>,
        category: impl Into<String>,
        statement: impl Into<String>,
        initial_confidence: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            hypothesis_id: uuid::Uuid::new_v4().to_string(),
            entity_id: entity_id.into(),
            category: category.into(),
            statement: statement.into(),
            confidence: Confidence::new(initial_confidence),
            status: HypothesisStatus::Active,
            iterations_attempted: 0,
            iterations_accepted: 0,
            iterations_weak_accept: 0,
            iterations_rejected: 0,
            iterations_no_progress: 0,
            hop_failure_counts: BTreeMap::new(),
            last_failed_hop: None,
            iteration_results: Vec::new(),
            supersedes: None,
            superseded_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace this hypothesis with a fresh one for the same pair.
    ///
    /// The old record is kept and marked; counters and the audit trail start over
    /// on the new record.
    pub fn supersede(&mut self, initial_confidence: f64) -> Hypothesis {
        let mut next = Hypothesis::new(
            self.entity_id.clone(),
            self.category.clone(),
            self.statement.clone(),
            initial_confidence,
        );
        next.supersedes = Some(self.hypothesis_id.clone());
        self.superseded_by = Some(next.hypothesis_id.clone());
        self.updated_at = next.created_at;
        next
    }

    pub fn is_superseded(&self) -> bool {
        self.superseded_by.is_some()
    }

    /// Whether the discovery loop may still probe this hypothesis.
    pub fn is_probeable(&self) -> bool {
        !self.status.is_terminal() && !self.is_superseded()
    }

    pub fn evidence_focus(&self) -> EvidenceFocus {
        if self.iterations_accepted > 0 {
            EvidenceFocus::Validation
        } else if self.iterations_weak_accept > 0 {
            EvidenceFocus::Procurement
        } else {
            EvidenceFocus::Capability
        }
    }

    /// Consecutive resolution failures recorded for `hop`.
    pub fn failure_count(&self, hop: HopType) -> u32 {
        self.hop_failure_counts
            .get(hop.as_str())
            .copied()
            .unwrap_or(0)
    }

    /// Number of evaluated iterations that used `hop`.
    pub fn hop_visits(&self, hop: HopType) -> usize {
        self.iteration_results
            .iter()
            .filter(|r| r.hop_type == hop)
            .count()
    }

    /// Decisions of the most recent `window` iteration records, oldest first.
    pub fn recent_decisions(&self, window: usize) -> impl Iterator<Item = Decision> + '_ {
        let start = self.iteration_results.len().saturating_sub(window);
        self.iteration_results[start..].iter().map(|r| r.decision)
    }
}
