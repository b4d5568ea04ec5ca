use serde::{Deserialize, Serialize};

/// Thresholds above/below which a session counts as drifting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftThresholds {
    pub max_drift_score: f64,
    pub min_coherence_score: f64,
    pub max_fragmentation_score: f64,
}

impl Default for DriftThresholds {
    fn default() -> Self {
        Self {
            max_drift_score: crate::config::defaults::DEFAULT_MAX_DRIFT_SCORE,
            min_coherence_score: crate::config::defaults::DEFAULT_MIN_COHERENCE_SCORE,
            max_fragmentation_score: crate::config::defaults::DEFAULT_MAX_FRAGMENTATION_SCORE,
        }
    }
}

/// Topic-coherence metrics for one session's memories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftReport {
    /// Consecutive pairs whose tag Jaccard similarity fell below 0.3.
    pub topic_changes: usize,
    /// `topic_changes / (n - 1)`.
    pub topic_change_rate: f64,
    /// Fraction of tagged memories sharing no tag with any other memory.
    pub fragmentation_score: f64,
    /// `min(1, 2 · avg_tag_frequency)`.
    pub coherence_score: f64,
    /// `min(1, 0.4·rate + 0.3·fragmentation + 0.3·(1 − coherence))`.
    pub drift_score: f64,
    pub drift_detected: bool,
}

impl DriftReport {
    /// The report for an empty session: no drift, full coherence.
    pub fn empty() -> Self {
        Self {
            topic_changes: 0,
            topic_change_rate: 0.0,
            fragmentation_score: 0.0,
            coherence_score: 1.0,
            drift_score: 0.0,
            drift_detected: false,
        }
    }
}
