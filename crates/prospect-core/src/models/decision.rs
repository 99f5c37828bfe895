use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ProspectError;

/// Outcome of evaluating one hop against one hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Accept,
    WeakAccept,
    Reject,
    NoProgress,
    /// Loop-internal marker for a hypothesis that stopped yielding information.
    /// The oracle never produces it.
    Saturated,
}

impl Decision {
    /// Decisions an evaluation oracle is allowed to return.
    pub const ORACLE: [Decision; 4] = [
        Decision::Accept,
        Decision::WeakAccept,
        Decision::Reject,
        Decision::NoProgress,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Accept => "ACCEPT",
            Decision::WeakAccept => "WEAK_ACCEPT",
            Decision::Reject => "REJECT",
            Decision::NoProgress => "NO_PROGRESS",
            Decision::Saturated => "SATURATED",
        }
    }

    pub fn is_oracle_decision(self) -> bool {
        self != Decision::Saturated
    }

    /// Whether the decision counts as supporting evidence.
    pub fn is_positive(self) -> bool {
        matches!(self, Decision::Accept | Decision::WeakAccept)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Decision {
    type Err = ProspectError;

    /// Case-insensitive; accepts `_`, `-` and space as word separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();
        match normalized.as_str() {
            "ACCEPT" => Ok(Decision::Accept),
            "WEAK_ACCEPT" | "WEAKACCEPT" => Ok(Decision::WeakAccept),
            "REJECT" => Ok(Decision::Reject),
            "NO_PROGRESS" | "NOPROGRESS" => Ok(Decision::NoProgress),
            "SATURATED" => Ok(Decision::Saturated),
            _ => Err(ProspectError::InvalidDecision {
                value: s.to_string(),
            }),
        }
    }
}
