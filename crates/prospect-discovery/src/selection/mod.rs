//! Choosing what to probe next: which hypothesis, then which hop type.

pub mod affinity;
pub mod hop;
pub mod hypothesis;

pub use affinity::affinity;
pub use hop::{HopChoice, HopSelector};
pub use hypothesis::{priority, select_hypothesis};
