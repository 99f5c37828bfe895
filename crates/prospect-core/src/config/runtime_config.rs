use serde::{Deserialize, Serialize};

use super::defaults;

/// Cross-entity concurrency limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Entity runs allowed in flight at once.
    pub max_concurrent_entities: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_concurrent_entities: defaults::DEFAULT_MAX_CONCURRENT_ENTITIES,
        }
    }
}
