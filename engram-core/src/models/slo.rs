use serde::{Deserialize, Serialize};

/// Freshness service-level objective for a namespace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FreshnessSlo {
    /// Memories older than this are stale.
    pub max_age_hours: f64,
    /// Minimum semantic similarity for a result to count as relevant.
    pub relevance_threshold: f64,
    /// Percent of results that must be fresh/relevant.
    pub recall_target_percent: f64,
}

impl Default for FreshnessSlo {
    fn default() -> Self {
        Self {
            max_age_hours: crate::config::defaults::DEFAULT_MAX_AGE_HOURS,
            relevance_threshold: crate::config::defaults::DEFAULT_RELEVANCE_THRESHOLD,
            recall_target_percent: crate::config::defaults::DEFAULT_RECALL_TARGET_PERCENT,
        }
    }
}

/// Per-memory staleness verdict.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StalenessAssessment {
    /// Effective age in hours (more recent of created/last-accessed).
    pub age_hours: f64,
    /// [0,1] progression toward the SLO's maximum age.
    pub staleness: f64,
    /// True iff age has reached `max_age_hours`.
    pub is_stale: bool,
}

/// Which compliance dimension a violation concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Freshness,
    Relevance,
    CrossSessionRecall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationSeverity {
    Warning,
    Critical,
}

/// One recorded SLO violation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SloViolation {
    pub kind: ViolationKind,
    pub severity: ViolationSeverity,
    /// Observed compliance percent.
    pub observed_percent: f64,
    /// Target compliance percent.
    pub target_percent: f64,
}

/// Namespace-level SLO compliance over a batch of query results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub freshness_percent: f64,
    pub relevance_percent: f64,
    /// Cross-session recall compliance, when attempts were made.
    pub cross_session_percent: Option<f64>,
    pub violations: Vec<SloViolation>,
    /// True iff no violation was recorded.
    pub is_compliant: bool,
}
