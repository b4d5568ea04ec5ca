use serde::{Deserialize, Serialize};

/// Why a search surfaced nothing (or less than expected).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecallFailureReason {
    /// No candidate matched the query at all.
    NoMatches,
    /// Candidates matched but every one was past its freshness SLO.
    AllStale,
    /// Candidates matched but none met the similarity floor.
    BelowRelevanceThreshold,
    /// Cross-session recall was requested but disabled or unavailable.
    CrossSessionUnavailable,
    /// The store failed mid-search.
    StorageError,
    /// The caller's deadline elapsed.
    Timeout,
    /// No embedding was available for the query.
    EmbeddingUnavailable,
    /// The namespace holds no memories.
    NamespaceNotFound,
    /// A quota prevented the search from completing.
    QuotaExceeded,
}

/// A structured explanation returned instead of a silent empty result.
///
/// Turns "nothing came back" into a diagnosable event the agent can relay
/// to its user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecallFailure {
    pub reason: RecallFailureReason,
    /// Human-readable explanation.
    pub message: String,
    /// How many candidates the store returned before filtering.
    pub candidate_count: usize,
    /// How many candidates filtering removed.
    pub filtered_count: usize,
    /// Suggested remediations, in priority order.
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl RecallFailure {
    pub fn new(reason: RecallFailureReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
            candidate_count: 0,
            filtered_count: 0,
            suggestions: Vec::new(),
        }
    }

    pub fn with_counts(mut self, candidates: usize, filtered: usize) -> Self {
        self.candidate_count = candidates;
        self.filtered_count = filtered;
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}
