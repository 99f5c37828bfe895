//! # prospect-aggregation
//!
//! Recomputes the category-level `HypothesisState` for an (entity, category)
//! pair from its complete set of admitted signals.
//!
//! The rollup is a pure function of the signal set: it never mutates a prior
//! state, and duplicate signal ids count once, so replays cannot inflate scores.

pub mod engine;
pub mod lifecycle;
pub mod scoring;

pub use engine::StateAggregator;
pub use lifecycle::determine_state;
