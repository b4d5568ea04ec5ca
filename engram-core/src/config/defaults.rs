//! Named default values for every tunable.

/// Default ranking weight for task criticality.
pub const DEFAULT_WEIGHT_TASK_CRITICALITY: f64 = 0.45;
/// Default ranking weight for semantic similarity.
pub const DEFAULT_WEIGHT_SEMANTIC_SIMILARITY: f64 = 0.25;
/// Default ranking weight for importance.
pub const DEFAULT_WEIGHT_IMPORTANCE: f64 = 0.20;
/// Default ranking weight for recency decay.
pub const DEFAULT_WEIGHT_RECENCY: f64 = 0.10;

/// Default maximum memory age before staleness (90 days).
pub const DEFAULT_MAX_AGE_HOURS: f64 = 2160.0;
/// Default minimum semantic similarity for relevance compliance.
pub const DEFAULT_RELEVANCE_THRESHOLD: f64 = 0.3;
/// Default recall compliance target (percent).
pub const DEFAULT_RECALL_TARGET_PERCENT: f64 = 95.0;

/// Default drift score above which drift is detected.
pub const DEFAULT_MAX_DRIFT_SCORE: f64 = 0.4;
/// Default coherence score below which drift is detected.
pub const DEFAULT_MIN_COHERENCE_SCORE: f64 = 0.6;
/// Default fragmentation score above which drift is detected.
pub const DEFAULT_MAX_FRAGMENTATION_SCORE: f64 = 0.3;
