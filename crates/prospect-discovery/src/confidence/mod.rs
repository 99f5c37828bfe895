//! Confidence state machine: per-decision counter and confidence updates,
//! the no-accept ceiling, and status transitions.

pub mod state_machine;
pub mod status;

pub use state_machine::{apply_decision, ConfidenceUpdate};
pub use status::next_status;
