//! # prospect-observability
//!
//! Structured tracing for the discovery engine: subscriber setup driven by
//! `PROSPECT_LOG`, span macros for runs, iterations, and rollups, and
//! structured events for the transitions worth alerting on.

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_json, init_tracing_with_filter};
