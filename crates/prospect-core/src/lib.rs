//! # prospect-core
//!
//! Foundation crate for the Prospect discovery engine.
//! Defines the hypothesis and signal models, collaborator traits, errors,
//! config, and defaults. Every other crate in the workspace depends on this.

pub mod config;
pub mod confidence;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use confidence::Confidence;
pub use config::ProspectConfig;
pub use errors::{ProspectError, ProspectResult};
pub use models::{
    Decision, EvidenceTier, HopType, Hypothesis, HypothesisState, HypothesisStatus,
    LifecycleState, TieredSignal,
};
