use engram_core::memory::MemoryObject;
use engram_core::models::drift::{DriftReport, DriftThresholds};

use crate::metrics;

/// Weight of the topic change rate in the drift score.
const WEIGHT_TOPIC_CHANGE: f64 = 0.4;
/// Weight of fragmentation in the drift score.
const WEIGHT_FRAGMENTATION: f64 = 0.3;
/// Weight of incoherence in the drift score.
const WEIGHT_INCOHERENCE: f64 = 0.3;

/// Detects topic drift across a session's memories.
#[derive(Debug, Clone, Default)]
pub struct DriftDetector {
    thresholds: DriftThresholds,
}

impl DriftDetector {
    pub fn new(thresholds: DriftThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &DriftThresholds {
        &self.thresholds
    }

    /// Analyze one session's memories.
    ///
    /// Sorts by `created_at` internally so callers can pass memories in any
    /// order. Sessions with fewer than two memories have no transitions to
    /// drift across and report no drift.
    pub fn analyze(&self, memories: &[MemoryObject]) -> DriftReport {
        if memories.len() < 2 {
            return DriftReport::empty();
        }

        let mut sorted: Vec<MemoryObject> = memories.to_vec();
        sorted.sort_by_key(|m| m.created_at);

        let topic_changes = metrics::topic_changes(&sorted);
        let topic_change_rate = if sorted.len() > 1 {
            topic_changes as f64 / (sorted.len() - 1) as f64
        } else {
            0.0
        };
        let fragmentation_score = metrics::fragmentation(&sorted);
        let coherence_score = metrics::coherence(&sorted);

        let drift_score = (WEIGHT_TOPIC_CHANGE * topic_change_rate
            + WEIGHT_FRAGMENTATION * fragmentation_score
            + WEIGHT_INCOHERENCE * (1.0 - coherence_score))
            .min(1.0);

        let drift_detected = drift_score > self.thresholds.max_drift_score
            || coherence_score < self.thresholds.min_coherence_score
            || fragmentation_score > self.thresholds.max_fragmentation_score;

        DriftReport {
            topic_changes,
            topic_change_rate,
            fragmentation_score,
            coherence_score,
            drift_score,
            drift_detected,
        }
    }
}
