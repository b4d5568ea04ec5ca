use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::query::WeightOverride;

/// Weights for the 4 ranking components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingWeights {
    pub task_criticality: f64,
    pub semantic_similarity: f64,
    pub importance: f64,
    pub recency: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            task_criticality: defaults::DEFAULT_WEIGHT_TASK_CRITICALITY,
            semantic_similarity: defaults::DEFAULT_WEIGHT_SEMANTIC_SIMILARITY,
            importance: defaults::DEFAULT_WEIGHT_IMPORTANCE,
            recency: defaults::DEFAULT_WEIGHT_RECENCY,
        }
    }
}

impl RankingWeights {
    /// Apply per-query overrides on top of these weights.
    pub fn with_override(&self, o: &WeightOverride) -> Self {
        Self {
            task_criticality: o.task_criticality.unwrap_or(self.task_criticality),
            semantic_similarity: o.semantic_similarity.unwrap_or(self.semantic_similarity),
            importance: o.importance.unwrap_or(self.importance),
            recency: o.recency.unwrap_or(self.recency),
        }
    }
}
