use serde::{Deserialize, Serialize};

use super::defaults;

/// Sliding-window saturation rule: K `NO_PROGRESS` within the last W iterations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SaturationConfig {
    /// K.
    pub no_progress_threshold: usize,
    /// W.
    pub window: usize,
}

impl Default for SaturationConfig {
    fn default() -> Self {
        Self {
            no_progress_threshold: defaults::DEFAULT_SATURATION_THRESHOLD,
            window: defaults::DEFAULT_SATURATION_WINDOW,
        }
    }
}
