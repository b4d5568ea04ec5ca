pub mod defaults;
pub mod ranking_weights;

pub use ranking_weights::RankingWeights;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::models::drift::DriftThresholds;
use crate::models::slo::FreshnessSlo;

/// Top-level Engram configuration.
///
/// All sections default independently, so a partial TOML file is fine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngramConfig {
    pub ranking: RankingWeights,
    pub freshness: FreshnessSlo,
    pub drift: DriftThresholds,
}

impl EngramConfig {
    /// Parse a TOML document, then validate it.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every tunable is in its legal range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("task_criticality", self.ranking.task_criticality),
            ("semantic_similarity", self.ranking.semantic_similarity),
            ("importance", self.ranking.importance),
            ("recency", self.ranking.recency),
        ] {
            if value < 0.0 || !value.is_finite() {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        if self.freshness.max_age_hours <= 0.0 || !self.freshness.max_age_hours.is_finite() {
            return Err(ConfigError::InvalidSlo {
                value: self.freshness.max_age_hours,
            });
        }
        for (name, value) in [
            ("relevance_threshold", self.freshness.relevance_threshold),
            ("max_drift_score", self.drift.max_drift_score),
            ("min_coherence_score", self.drift.min_coherence_score),
            (
                "max_fragmentation_score",
                self.drift.max_fragmentation_score,
            ),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidThreshold { name, value });
            }
        }
        if !(0.0..=100.0).contains(&self.freshness.recall_target_percent) {
            return Err(ConfigError::InvalidThreshold {
                name: "recall_target_percent",
                value: self.freshness.recall_target_percent,
            });
        }
        Ok(())
    }
}
