//! # prospect-classification
//!
//! Maps a raw oracle decision into an evidence tier and decides whether the
//! resulting signal is strong enough to be stored for aggregation.
//!
//! ## Tiers
//! - **CAPABILITY**: weak support (the organization could buy)
//! - **PROCUREMENT_INDICATOR**: strong support without a tender
//! - **VALIDATED_RFP**: strong support at high confidence, or from a tender source
//!
//! Classification and confidence accounting are independent: a dropped signal
//! still counts toward the hypothesis counters.

pub mod admission;
pub mod classifier;
pub mod domain;

pub use admission::{admit, Admission};
pub use classifier::{classify, ClassificationOutcome, SignalClassifier, SignalInput};
pub use domain::{extract_domain, is_tender_domain};
