//! Test fixtures for the Prospect workspace.
//!
//! Provides scripted stand-ins for the external collaborators (evaluation
//! oracle, retrieval source) and builders for hypotheses, iteration records,
//! and signals.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use chrono::Utc;
use prospect_core::errors::OracleError;
use prospect_core::models::*;
use prospect_core::traits::{IEvaluationOracle, IRetrievalSource};

static SIGNAL_SEQ: AtomicU32 = AtomicU32::new(0);

// --- Oracle responses ---

fn evidence_strings(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("evidence item {i}")).collect()
}

/// ACCEPT with `evidence` items and the configured delta.
pub fn accept(evidence: usize) -> EvaluationResponse {
    EvaluationResponse {
        decision: Decision::Accept,
        confidence_delta: None,
        justification: "explicit purchasing intent".to_string(),
        evidence_found: evidence_strings(evidence),
        evidence_type: Some("procurement".to_string()),
        cost_usd: None,
    }
}

/// WEAK_ACCEPT with `evidence` items and the configured delta.
pub fn weak_accept(evidence: usize) -> EvaluationResponse {
    EvaluationResponse {
        decision: Decision::WeakAccept,
        confidence_delta: None,
        justification: "related capability mentioned".to_string(),
        evidence_found: evidence_strings(evidence),
        evidence_type: Some("capability".to_string()),
        cost_usd: None,
    }
}

pub fn reject() -> EvaluationResponse {
    EvaluationResponse {
        decision: Decision::Reject,
        confidence_delta: None,
        justification: "content contradicts the claim".to_string(),
        evidence_found: Vec::new(),
        evidence_type: None,
        cost_usd: None,
    }
}

pub fn no_progress() -> EvaluationResponse {
    EvaluationResponse::no_progress("nothing relevant on the page")
}

// --- Scripted oracle ---

/// Oracle that replays a fixed script, then answers `NO_PROGRESS` forever.
pub struct ScriptedOracle {
    script: Mutex<VecDeque<Result<EvaluationResponse, OracleError>>>,
    requests: Mutex<Vec<EvaluationRequest>>,
}

impl ScriptedOracle {
    pub fn new(script: Vec<Result<EvaluationResponse, OracleError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Script of successful responses only.
    pub fn replying(responses: Vec<EvaluationResponse>) -> Self {
        Self::new(responses.into_iter().map(Ok).collect())
    }

    /// Always the same response.
    pub fn always(response: EvaluationResponse, times: usize) -> Self {
        Self::replying(vec![response; times])
    }

    /// Requests received so far, in call order.
    pub fn requests(&self) -> Vec<EvaluationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl IEvaluationOracle for ScriptedOracle {
    async fn evaluate(
        &self,
        request: &EvaluationRequest,
    ) -> Result<EvaluationResponse, OracleError> {
        self.requests.lock().unwrap().push(request.clone());
        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(no_progress()))
    }
}

// --- Scripted retrieval ---

/// Retrieval source that resolves every hop type except the configured ones.
pub struct ScriptedRetrieval {
    unresolvable: BTreeSet<HopType>,
    /// Hop types that fail a fixed number of times before resolving.
    failures_left: Mutex<BTreeMap<HopType, u32>>,
    cost_usd: Option<f64>,
    calls: Mutex<Vec<HopType>>,
}

impl ScriptedRetrieval {
    pub fn resolving_all() -> Self {
        Self {
            unresolvable: BTreeSet::new(),
            failures_left: Mutex::new(BTreeMap::new()),
            cost_usd: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Nothing resolves.
    pub fn resolving_none() -> Self {
        Self::resolving_all().unresolvable(HopType::ALL)
    }

    /// Only `hops` resolve.
    pub fn resolving_only(hops: impl IntoIterator<Item = HopType>) -> Self {
        let keep: BTreeSet<HopType> = hops.into_iter().collect();
        Self::resolving_all().unresolvable(HopType::ALL.into_iter().filter(|h| !keep.contains(h)))
    }

    pub fn unresolvable(mut self, hops: impl IntoIterator<Item = HopType>) -> Self {
        self.unresolvable.extend(hops);
        self
    }

    /// `hop` fails `times` times, then resolves.
    pub fn failing(self, hop: HopType, times: u32) -> Self {
        self.failures_left.lock().unwrap().insert(hop, times);
        self
    }

    pub fn with_cost(mut self, cost_usd: f64) -> Self {
        self.cost_usd = Some(cost_usd);
        self
    }

    /// Hop types requested so far, in call order.
    pub fn calls(&self) -> Vec<HopType> {
        self.calls.lock().unwrap().clone()
    }
}

impl IRetrievalSource for ScriptedRetrieval {
    async fn resolve(&self, hop: HopType, entity: &EntityContext) -> HopResolution {
        self.calls.lock().unwrap().push(hop);
        if self.unresolvable.contains(&hop) {
            return HopResolution::unresolved(format!("no {hop} source for {}", entity.name));
        }
        {
            let mut left = self.failures_left.lock().unwrap();
            if let Some(n) = left.get_mut(&hop) {
                if *n > 0 {
                    *n -= 1;
                    return HopResolution::unresolved(format!("{hop} temporarily unresolvable"));
                }
            }
        }
        let domain = match hop {
            HopType::TenderPortal => "tenders.example.gov".to_string(),
            _ => entity
                .domain
                .clone()
                .unwrap_or_else(|| format!("{}.example.com", entity.entity_id)),
        };
        HopResolution::Resolved(ResolvedHop {
            url: format!("https://{domain}/{hop}"),
            content: format!("{} {hop} page", entity.name),
            cost_usd: self.cost_usd,
        })
    }
}

// --- Builders ---

pub fn entity(entity_id: &str) -> EntityContext {
    EntityContext::new(entity_id, format!("{entity_id} Ltd"))
        .with_domain(format!("{entity_id}.example.com"))
}

pub fn templates(categories: &[&str]) -> Vec<CategoryTemplate> {
    categories
        .iter()
        .map(|c| CategoryTemplate::new(*c, format!("{{entity}} is planning a {c} purchase")))
        .collect()
}

pub fn hypothesis(entity_id: &str, category: &str) -> Hypothesis {
    Hypothesis::new(
        entity_id,
        category,
        format!("{entity_id} is planning a {category} purchase"),
        0.5,
    )
}

/// An iteration record with default hop and no evidence excerpt.
pub fn iteration(
    index: u32,
    decision: Decision,
    confidence_after: f64,
    source_url: Option<&str>,
) -> IterationResult {
    IterationResult {
        iteration: index,
        hop_type: HopType::OfficialSite,
        depth: index + 1,
        decision,
        confidence_delta: 0.0,
        confidence_after,
        evidence_count: 0,
        evidence_excerpt: None,
        justification: None,
        source_url: source_url.map(str::to_string),
        timestamp: Utc::now(),
    }
}

pub fn evidence(n: usize) -> Vec<EvidenceItem> {
    (0..n)
        .map(|i| EvidenceItem {
            excerpt: format!("evidence item {i}"),
            evidence_type: None,
        })
        .collect()
}

/// An admitted signal with a unique id.
pub fn signal(entity_id: &str, category: &str, tier: EvidenceTier) -> TieredSignal {
    let seq = SIGNAL_SEQ.fetch_add(1, Ordering::Relaxed);
    let hypothesis_id = format!("{entity_id}-{category}");
    TieredSignal {
        signal_id: TieredSignal::compute_id(&hypothesis_id, seq, tier),
        entity_id: entity_id.to_string(),
        category: category.to_string(),
        hypothesis_id,
        iteration: seq,
        tier,
        decision: match tier {
            EvidenceTier::Capability => Decision::WeakAccept,
            _ => Decision::Accept,
        },
        confidence: 0.8,
        evidence: evidence(3),
        source_url: None,
        source_domain: None,
        observed_at: Utc::now(),
    }
}

/// `n` admitted signals of one tier.
pub fn signals(entity_id: &str, category: &str, tier: EvidenceTier, n: usize) -> Vec<TieredSignal> {
    (0..n).map(|_| signal(entity_id, category, tier)).collect()
}
