use engram_core::config::{defaults, EngramConfig};
use engram_core::errors::ConfigError;

#[test]
fn defaults_match_documented_values() {
    let config = EngramConfig::default();
    assert_eq!(config.ranking.task_criticality, 0.45);
    assert_eq!(config.ranking.semantic_similarity, 0.25);
    assert_eq!(config.ranking.importance, 0.20);
    assert_eq!(config.ranking.recency, 0.10);
    assert_eq!(config.freshness.max_age_hours, 2160.0);
    assert_eq!(config.freshness.relevance_threshold, 0.3);
    assert_eq!(config.freshness.recall_target_percent, 95.0);
    assert_eq!(config.drift.max_drift_score, defaults::DEFAULT_MAX_DRIFT_SCORE);
    assert_eq!(
        config.drift.min_coherence_score,
        defaults::DEFAULT_MIN_COHERENCE_SCORE
    );
    assert_eq!(
        config.drift.max_fragmentation_score,
        defaults::DEFAULT_MAX_FRAGMENTATION_SCORE
    );
    assert!(config.validate().is_ok());
}

#[test]
fn partial_toml_fills_in_defaults() {
    let config = EngramConfig::from_toml_str(
        r#"
[freshness]
max_age_hours = 720.0
"#,
    )
    .unwrap();
    assert_eq!(config.freshness.max_age_hours, 720.0);
    assert_eq!(config.freshness.relevance_threshold, 0.3);
    assert_eq!(config.ranking.task_criticality, 0.45);
}

#[test]
fn negative_weight_rejected() {
    let result = EngramConfig::from_toml_str(
        r#"
[ranking]
recency = -0.1
"#,
    );
    assert!(matches!(result, Err(ConfigError::InvalidWeight { .. })));
}

#[test]
fn zero_max_age_rejected() {
    let result = EngramConfig::from_toml_str(
        r#"
[freshness]
max_age_hours = 0.0
"#,
    );
    assert!(matches!(result, Err(ConfigError::InvalidSlo { .. })));
}

#[test]
fn out_of_range_threshold_rejected() {
    let result = EngramConfig::from_toml_str(
        r#"
[drift]
max_drift_score = 1.5
"#,
    );
    assert!(matches!(result, Err(ConfigError::InvalidThreshold { .. })));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    assert!(matches!(
        EngramConfig::from_toml_str("[ranking"),
        Err(ConfigError::Parse(_))
    ));
}
