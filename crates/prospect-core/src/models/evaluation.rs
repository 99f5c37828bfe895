use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Decision;

/// Input to the evaluation oracle for one hop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub hypothesis_id: String,
    pub category: String,
    pub hypothesis_statement: String,
    pub scraped_content: String,
    pub source_url: String,
}

/// Decision returned by the evaluation oracle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResponse {
    pub decision: Decision,
    /// Oracle-suggested confidence change. `None` means use the configured delta.
    #[serde(default)]
    pub confidence_delta: Option<f64>,
    #[serde(default)]
    pub justification: String,
    #[serde(default)]
    pub evidence_found: Vec<String>,
    #[serde(default)]
    pub evidence_type: Option<String>,
    /// Cost of the oracle call when the oracle reports it.
    #[serde(default)]
    pub cost_usd: Option<f64>,
}

impl EvaluationResponse {
    /// Zero-delta `NO_PROGRESS`, used whenever the oracle output is unusable.
    pub fn no_progress(justification: impl Into<String>) -> Self {
        Self {
            decision: Decision::NoProgress,
            confidence_delta: Some(0.0),
            justification: justification.into(),
            evidence_found: Vec::new(),
            evidence_type: None,
            cost_usd: None,
        }
    }

    /// Parse a raw oracle payload, degrading anything unusable to `NO_PROGRESS`.
    ///
    /// Accepts decision spellings in any case with `_`, `-` or space separators,
    /// `evidence_found` as a list or a single string, and a missing delta.
    pub fn from_json_lenient(raw: &str) -> Self {
        let value: Value = match serde_json::from_str(raw) {
            Ok(v) => v,
            Err(e) => return Self::no_progress(format!("unparseable oracle payload: {e}")),
        };
        let Some(obj) = value.as_object() else {
            return Self::no_progress("oracle payload is not an object");
        };

        let decision = match obj.get("decision").and_then(Value::as_str) {
            Some(s) => match s.parse::<Decision>() {
                Ok(d) => d,
                Err(_) => return Self::no_progress(format!("unknown decision: {s}")),
            },
            None => return Self::no_progress("oracle payload has no decision"),
        };

        let evidence_found = match obj.get("evidence_found") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str())
                .map(str::to_string)
                .collect(),
            Some(Value::String(s)) if !s.trim().is_empty() => vec![s.clone()],
            _ => Vec::new(),
        };

        Self {
            decision,
            confidence_delta: obj.get("confidence_delta").and_then(Value::as_f64),
            justification: obj
                .get("justification")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            evidence_found,
            evidence_type: obj
                .get("evidence_type")
                .and_then(Value::as_str)
                .map(str::to_string),
            cost_usd: obj.get("cost_usd").and_then(Value::as_f64),
        }
        .sanitized()
    }

    /// Enforce the oracle contract on an already-typed response.
    ///
    /// The synthetic `SATURATED` decision and non-finite numbers are not valid
    /// oracle output and degrade to `NO_PROGRESS`.
    pub fn sanitized(mut self) -> Self {
        if !self.decision.is_oracle_decision() {
            return Self::no_progress(format!(
                "oracle returned loop-internal decision {}",
                self.decision
            ));
        }
        if self.confidence_delta.is_some_and(|d| !d.is_finite()) {
            return Self::no_progress("oracle returned a non-finite confidence delta");
        }
        if self.cost_usd.is_some_and(|c| !c.is_finite() || c < 0.0) {
            self.cost_usd = None;
        }
        if self.decision == Decision::NoProgress {
            self.confidence_delta = Some(0.0);
        }
        self
    }
}
