//! # prospect-discovery
//!
//! The per-entity discovery loop. Each iteration picks a hypothesis and a hop
//! type, fetches content through the retrieval source, asks the oracle for a
//! decision, updates confidence and status, and classifies the result into a
//! tiered signal. Runs for many entities are fanned out by [`DiscoveryPool`].

pub mod actionability;
pub mod budget;
pub mod confidence;
pub mod engine;
pub mod generation;
pub mod pool;
pub mod run;
pub mod saturation;
pub mod selection;

pub use actionability::is_actionable;
pub use budget::RunBudget;
pub use engine::DiscoveryEngine;
pub use generation::HypothesisGenerator;
pub use pool::DiscoveryPool;
pub use run::EntityRun;
pub use saturation::SaturationDetector;
pub use selection::{select_hypothesis, HopChoice, HopSelector};
