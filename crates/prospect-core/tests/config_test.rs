use prospect_core::config::*;
use prospect_core::errors::{ConfigError, ProspectError};
use prospect_core::models::HopType;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = ProspectConfig::from_toml("").unwrap();

    // Discovery budgets
    assert_eq!(config.discovery.max_iterations, 30);
    assert_eq!(config.discovery.max_depth, 10);
    assert_eq!(config.discovery.cost_limit_usd, 2.0);

    // Confidence
    assert_eq!(config.confidence.accept_delta, 0.06);
    assert_eq!(config.confidence.weak_accept_delta, 0.02);
    assert_eq!(config.confidence.reject_penalty, 0.0);
    assert_eq!(config.confidence.no_accept_ceiling, 0.70);

    // Saturation uses the tuned pair
    assert_eq!(config.saturation.no_progress_threshold, 5);
    assert_eq!(config.saturation.window, 7);

    // Hop selection
    assert_eq!(config.hop_selection.failure_exclusion_threshold, 2);
    assert_eq!(config.hop_selection.cost_of(HopType::TenderPortal), 0.03);
    assert_eq!(config.hop_selection.cost_of(HopType::CareersPage), 0.01);

    // Classification admission table
    assert_eq!(config.classification.capability.min_evidence, 1);
    assert_eq!(config.classification.capability.min_confidence, 0.45);
    assert_eq!(config.classification.procurement_indicator.min_evidence, 2);
    assert_eq!(config.classification.procurement_indicator.min_confidence, 0.60);
    assert_eq!(config.classification.validated_rfp.min_evidence, 3);
    assert_eq!(config.classification.validated_rfp.min_confidence, 0.70);
    assert_eq!(config.classification.tender_domain_patterns.len(), 5);

    // Aggregation
    assert_eq!(config.aggregation.capability_weight, 0.15);
    assert_eq!(config.aggregation.procurement_weight, 0.25);
    assert_eq!(config.aggregation.warm_maturity, 0.45);

    // Runtime / storage / observability
    assert_eq!(config.runtime.max_concurrent_entities, 4);
    assert_eq!(config.storage.db_path, "prospect.db");
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[discovery]
max_iterations = 12
cost_limit_usd = 0.5

[saturation]
no_progress_threshold = 3
window = 5

[confidence]
accept_delta = 0.08

[hop_selection.costs_usd]
job_board = 0.05
"#;
    let config = ProspectConfig::from_toml(toml).unwrap();
    assert_eq!(config.discovery.max_iterations, 12);
    assert_eq!(config.discovery.cost_limit_usd, 0.5);
    assert_eq!(config.discovery.max_depth, 10); // default
    assert_eq!(config.saturation.no_progress_threshold, 3);
    assert_eq!(config.saturation.window, 5);
    assert_eq!(config.confidence.accept_delta, defaults::ACCEPT_DELTA_AGGRESSIVE);
    assert_eq!(config.confidence.weak_accept_delta, 0.02); // default
    assert_eq!(config.hop_selection.cost_of(HopType::JobBoard), 0.05);
}

#[test]
fn config_serde_roundtrip() {
    let config = ProspectConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = ProspectConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.saturation.window, config.saturation.window);
    assert_eq!(
        roundtripped.hop_selection.cost_of(HopType::TenderPortal),
        config.hop_selection.cost_of(HopType::TenderPortal)
    );
}

#[test]
fn config_rejects_window_smaller_than_threshold() {
    let toml = r#"
[saturation]
no_progress_threshold = 5
window = 3
"#;
    let err = ProspectConfig::from_toml(toml).unwrap_err();
    match err {
        ProspectError::ConfigError(ConfigError::Invalid { field, .. }) => {
            assert_eq!(field, "saturation.window")
        }
        other => panic!("expected invalid saturation window, got {other:?}"),
    }
}

#[test]
fn config_rejects_ceiling_outside_unit_interval() {
    let toml = r#"
[confidence]
no_accept_ceiling = 1.5
"#;
    assert!(ProspectConfig::from_toml(toml).is_err());
}

#[test]
fn config_rejects_initial_confidence_above_ceiling() {
    let toml = r#"
[confidence]
initial = 0.8
"#;
    match ProspectConfig::from_toml(toml).unwrap_err() {
        ProspectError::ConfigError(ConfigError::Invalid { field, .. }) => {
            assert_eq!(field, "confidence.initial")
        }
        other => panic!("expected invalid initial confidence, got {other:?}"),
    }
}

#[test]
fn config_rejects_zero_exclusion_threshold() {
    let toml = r#"
[hop_selection]
failure_exclusion_threshold = 0
"#;
    assert!(ProspectConfig::from_toml(toml).is_err());
}

#[test]
fn config_rejects_malformed_toml() {
    let err = ProspectConfig::from_toml("[discovery\nmax_iterations = ").unwrap_err();
    assert!(matches!(
        err,
        ProspectError::ConfigError(ConfigError::Parse { .. })
    ));
}

#[test]
fn config_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prospect.toml");
    std::fs::write(&path, "[runtime]\nmax_concurrent_entities = 2\n").unwrap();
    let config = ProspectConfig::from_file(&path).unwrap();
    assert_eq!(config.runtime.max_concurrent_entities, 2);
}

#[test]
fn config_missing_file_is_io_error() {
    let err = ProspectConfig::from_file(std::path::Path::new("/nonexistent/prospect.toml"))
        .unwrap_err();
    assert!(matches!(err, ProspectError::ConfigError(ConfigError::Io { .. })));
}
