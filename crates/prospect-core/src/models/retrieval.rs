use serde::{Deserialize, Serialize};

/// Content fetched for one hop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedHop {
    pub url: String,
    pub content: String,
    /// Cost of the fetch, if the collaborator reports it.
    #[serde(default)]
    pub cost_usd: Option<f64>,
}

/// Result of asking the retrieval collaborator to resolve a hop.
///
/// `Unresolved` means no fetchable URL or query exists for this hop type; it is
/// what increments the hop failure counter. Unhelpful but fetchable content is
/// `Resolved` and is judged by the oracle instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum HopResolution {
    Resolved(ResolvedHop),
    Unresolved { reason: String },
}

impl HopResolution {
    pub fn resolved(url: impl Into<String>, content: impl Into<String>) -> Self {
        HopResolution::Resolved(ResolvedHop {
            url: url.into(),
            content: content.into(),
            cost_usd: None,
        })
    }

    pub fn unresolved(reason: impl Into<String>) -> Self {
        HopResolution::Unresolved {
            reason: reason.into(),
        }
    }
}
