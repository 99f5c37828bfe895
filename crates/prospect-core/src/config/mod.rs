pub mod aggregation_config;
pub mod classification_config;
pub mod confidence_config;
pub mod defaults;
pub mod discovery_config;
pub mod hop_config;
pub mod observability_config;
pub mod runtime_config;
pub mod saturation_config;
pub mod storage_config;

use std::path::Path;

pub use aggregation_config::AggregationConfig;
pub use classification_config::{AdmissionRule, ClassificationConfig};
pub use confidence_config::ConfidenceConfig;
pub use discovery_config::DiscoveryConfig;
pub use hop_config::HopSelectionConfig;
pub use observability_config::ObservabilityConfig;
pub use runtime_config::RuntimeConfig;
pub use saturation_config::SaturationConfig;
pub use storage_config::StorageConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, ProspectResult};

/// Top-level configuration aggregating all subsystem configs.
/// Every section falls back to its defaults when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProspectConfig {
    pub discovery: DiscoveryConfig,
    pub confidence: ConfidenceConfig,
    pub saturation: SaturationConfig,
    pub hop_selection: HopSelectionConfig,
    pub classification: ClassificationConfig,
    pub aggregation: AggregationConfig,
    pub storage: StorageConfig,
    pub runtime: RuntimeConfig,
    pub observability: ObservabilityConfig,
}

impl ProspectConfig {
    /// Parse from a TOML string and validate.
    pub fn from_toml(toml_str: &str) -> ProspectResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_file(path: &Path) -> ProspectResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&raw)
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> ProspectResult<()> {
        let c = &self.confidence;
        for (field, value) in [
            ("confidence.initial", c.initial),
            ("confidence.no_accept_ceiling", c.no_accept_ceiling),
            ("confidence.promote_threshold", c.promote_threshold),
            ("confidence.kill_threshold", c.kill_threshold),
            ("classification.validated_confidence", self.classification.validated_confidence),
            ("hop_selection.eig_weight", self.hop_selection.eig_weight),
            ("hop_selection.affinity_weight", self.hop_selection.affinity_weight),
            ("aggregation.capability_weight", self.aggregation.capability_weight),
            ("aggregation.procurement_weight", self.aggregation.procurement_weight),
        ] {
            unit_interval(field, value)?;
        }
        for (field, value) in [
            ("confidence.accept_delta", c.accept_delta),
            ("confidence.weak_accept_delta", c.weak_accept_delta),
            ("confidence.reject_penalty", c.reject_penalty),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, format!("{value} must be a delta in [0, 1]")));
            }
        }

        if c.initial > c.no_accept_ceiling {
            return Err(invalid(
                "confidence.initial",
                format!(
                    "initial {} exceeds the no-accept ceiling {}",
                    c.initial, c.no_accept_ceiling
                ),
            ));
        }

        let s = &self.saturation;
        if s.no_progress_threshold == 0 {
            return Err(invalid("saturation.no_progress_threshold", "must be at least 1"));
        }
        if s.window < s.no_progress_threshold {
            return Err(invalid(
                "saturation.window",
                format!(
                    "window {} is smaller than threshold {}",
                    s.window, s.no_progress_threshold
                ),
            ));
        }

        if self.hop_selection.failure_exclusion_threshold == 0 {
            return Err(invalid(
                "hop_selection.failure_exclusion_threshold",
                "must be at least 1",
            ));
        }
        if self
            .hop_selection
            .costs_usd
            .values()
            .chain(std::iter::once(&self.hop_selection.default_cost_usd))
            .any(|c| !c.is_finite() || *c < 0.0)
        {
            return Err(invalid("hop_selection.costs_usd", "costs must be non-negative"));
        }

        let d = &self.discovery;
        if !d.cost_limit_usd.is_finite() || d.cost_limit_usd < 0.0 {
            return Err(invalid("discovery.cost_limit_usd", "must be non-negative"));
        }
        if !d.evaluation_cost_usd.is_finite() || d.evaluation_cost_usd < 0.0 {
            return Err(invalid("discovery.evaluation_cost_usd", "must be non-negative"));
        }

        if self.runtime.max_concurrent_entities == 0 {
            return Err(invalid("runtime.max_concurrent_entities", "must be at least 1"));
        }
        Ok(())
    }
}

fn unit_interval(field: &str, value: f64) -> ProspectResult<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} is outside [0, 1]")))
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> crate::errors::ProspectError {
    ConfigError::Invalid {
        field: field.to_string(),
        reason: reason.into(),
    }
    .into()
}
