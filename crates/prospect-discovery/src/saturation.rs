//! Trailing-window NO_PROGRESS detection.

use prospect_core::config::SaturationConfig;
use prospect_core::models::{Decision, Hypothesis};

/// Flags a hypothesis as saturated once at least `no_progress_threshold` of
/// its last `window` iteration records are NO_PROGRESS.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaturationDetector {
    config: SaturationConfig,
}

impl SaturationDetector {
    pub fn new(config: SaturationConfig) -> Self {
        Self { config }
    }

    /// NO_PROGRESS decisions among the trailing window.
    pub fn no_progress_in_window(&self, hypothesis: &Hypothesis) -> usize {
        hypothesis
            .recent_decisions(self.config.window)
            .filter(|d| *d == Decision::NoProgress)
            .count()
    }

    pub fn is_saturated(&self, hypothesis: &Hypothesis) -> bool {
        self.no_progress_in_window(hypothesis) >= self.config.no_progress_threshold
    }
}
