use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::memory::{MemoryObject, Score, SourceType};

use super::namespace::NamespaceKey;
use super::recall::RecallFailure;

/// Ranking weight overrides carried on a query. `None` means "use defaults".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeightOverride {
    pub task_criticality: Option<f64>,
    pub semantic_similarity: Option<f64>,
    pub importance: Option<f64>,
    pub recency: Option<f64>,
}

/// A memory search request against one namespace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub namespace: NamespaceKey,
    /// Free-text query.
    pub text: String,
    /// Only return memories carrying all of these tags (empty = no filter).
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Only return memories from these source types (empty = all).
    #[serde(default)]
    pub source_types: Vec<SourceType>,
    #[serde(default)]
    pub min_importance: Option<Score>,
    #[serde(default)]
    pub min_similarity: Option<Score>,
    /// Only return memories created within this many seconds.
    #[serde(default)]
    pub max_age_seconds: Option<u64>,
    pub limit: usize,
    /// Per-query ranking weight overrides.
    #[serde(default)]
    pub weights: WeightOverride,
    /// Only return memories originating in this session.
    #[serde(default)]
    pub session_id: Option<String>,
    /// Whether memories from other sessions may be recalled.
    #[serde(default = "default_true")]
    pub include_cross_session: bool,
}

fn default_true() -> bool {
    true
}

impl SearchQuery {
    pub fn new(namespace: NamespaceKey, text: impl Into<String>) -> Self {
        Self {
            namespace,
            text: text.into(),
            tags: BTreeSet::new(),
            source_types: Vec::new(),
            min_importance: None,
            min_similarity: None,
            max_age_seconds: None,
            limit: 10,
            weights: WeightOverride::default(),
            session_id: None,
            include_cross_session: true,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_tags<I: IntoIterator<Item = String>>(mut self, tags: I) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    pub fn with_min_similarity(mut self, min: Score) -> Self {
        self.min_similarity = Some(min);
        self
    }

    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}

/// A raw store search hit: the memory plus its externally supplied
/// semantic similarity to the query.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub memory: MemoryObject,
    pub semantic_similarity: Score,
}

/// A fully ranked retrieval result.
#[derive(Debug, Clone)]
pub struct RankedMemory {
    pub memory: MemoryObject,
    pub semantic_similarity: Score,
    /// Composite relevance score from the ranking engine.
    pub relevance: f64,
    /// Staleness in [0,1] from the freshness evaluator.
    pub staleness: f64,
    pub is_stale: bool,
}

/// What a retrieval returns: ranked results plus structured diagnostics for
/// anything that kept candidates from surfacing. Never an error.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub results: Vec<RankedMemory>,
    pub failures: Vec<RecallFailure>,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
