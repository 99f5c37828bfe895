mod decision;
mod entity;
mod evaluation;
mod hop;
mod hypothesis;
mod hypothesis_state;
mod report;
mod retrieval;
mod signal;

pub use decision::Decision;
pub use entity::{CategoryTemplate, EntityContext};
pub use evaluation::{EvaluationRequest, EvaluationResponse};
pub use hop::HopType;
pub use hypothesis::{EvidenceFocus, Hypothesis, HypothesisStatus, IterationResult};
pub use hypothesis_state::{HypothesisState, LifecycleState};
pub use report::{DiscoveryReport, HypothesisOutcome, Termination};
pub use retrieval::{HopResolution, ResolvedHop};
pub use signal::{EvidenceItem, EvidenceTier, TieredSignal};
