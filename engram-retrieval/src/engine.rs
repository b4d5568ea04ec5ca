use std::sync::Arc;

use chrono::Utc;

use engram_core::config::RankingWeights;
use engram_core::memory::{MemoryStatus, ProvenanceAction, ProvenanceEntry};
use engram_core::models::query::{RankedMemory, SearchOutcome, SearchQuery};
use engram_core::models::recall::{RecallFailure, RecallFailureReason};
use engram_core::traits::MemoryStore;
use engram_freshness::FreshnessEvaluator;

use crate::ranking::scorer;

/// The retrieval pipeline: search → rank → freshness gate → diagnose.
pub struct RetrievalEngine<S: MemoryStore> {
    store: Arc<S>,
    weights: RankingWeights,
    freshness: FreshnessEvaluator,
}

impl<S: MemoryStore> RetrievalEngine<S> {
    pub fn new(store: Arc<S>, weights: RankingWeights, freshness: FreshnessEvaluator) -> Self {
        Self {
            store,
            weights,
            freshness,
        }
    }

    /// Run a retrieval. Never fails: degradation is reported through
    /// `SearchOutcome::failures`.
    pub fn recall(&self, query: &SearchQuery) -> SearchOutcome {
        let hits = match self.store.search_memories(query) {
            Ok(hits) => hits,
            Err(e) => {
                tracing::warn!(namespace = %query.namespace, error = %e, "memory search failed");
                return SearchOutcome {
                    results: Vec::new(),
                    failures: vec![RecallFailure::new(
                        RecallFailureReason::StorageError,
                        format!("memory store search failed: {e}"),
                    )
                    .with_suggestion("retry the query; check store connectivity")],
                };
            }
        };

        let candidate_count = hits.len();
        if candidate_count == 0 {
            return SearchOutcome {
                results: Vec::new(),
                failures: vec![self.diagnose_no_candidates(query)],
            };
        }

        // Relevance floor.
        let min_similarity = query.min_similarity.map(|s| s.value());
        let relevant: Vec<_> = match min_similarity {
            Some(floor) => hits
                .iter()
                .filter(|h| h.semantic_similarity.value() >= floor)
                .cloned()
                .collect(),
            None => hits.clone(),
        };
        if relevant.is_empty() {
            let failure = RecallFailure::new(
                RecallFailureReason::BelowRelevanceThreshold,
                format!(
                    "{candidate_count} candidate(s) matched but none met the similarity floor"
                ),
            )
            .with_counts(candidate_count, candidate_count)
            .with_suggestion("lower min_similarity or broaden the query text");
            return SearchOutcome {
                results: Vec::new(),
                failures: vec![failure],
            };
        }

        // Rank, then gate on freshness.
        let weights = self.weights.with_override(&query.weights);
        let scored = scorer::rank(&relevant, &weights);

        let mut results = Vec::new();
        let mut stale_count = 0usize;
        for s in &scored {
            let assessment = self.freshness.assess(&s.hit.memory);
            if assessment.is_stale {
                stale_count += 1;
                continue;
            }
            results.push(RankedMemory {
                memory: s.hit.memory.clone(),
                semantic_similarity: s.hit.semantic_similarity,
                relevance: s.relevance,
                staleness: assessment.staleness,
                is_stale: false,
            });
        }

        let mut failures = Vec::new();
        if results.is_empty() {
            failures.push(
                RecallFailure::new(
                    RecallFailureReason::AllStale,
                    format!(
                        "{stale_count} candidate(s) passed relevance but all exceeded the freshness SLO"
                    ),
                )
                .with_counts(candidate_count, stale_count)
                .with_suggestion("raise max_age_hours or refresh the memories in question"),
            );
        } else {
            self.mark_accessed(query, &results);
        }

        SearchOutcome { results, failures }
    }

    /// Explain an empty candidate set: distinguishes an empty namespace from
    /// a query nothing matched, and flags disabled cross-session recall.
    fn diagnose_no_candidates(&self, query: &SearchQuery) -> RecallFailure {
        let namespace_populated = self
            .store
            .list_memories(&query.namespace, &engram_core::traits::MemoryFilter::active())
            .map(|memories| !memories.is_empty())
            .unwrap_or(false);

        if !namespace_populated {
            return RecallFailure::new(
                RecallFailureReason::NamespaceNotFound,
                format!("namespace {} holds no active memories", query.namespace),
            )
            .with_suggestion("verify the namespace key; create memories before querying");
        }
        if query.session_id.is_some() && !query.include_cross_session {
            return RecallFailure::new(
                RecallFailureReason::CrossSessionUnavailable,
                "no memories in the requested session and cross-session recall is disabled",
            )
            .with_suggestion("enable include_cross_session to recall from other sessions");
        }
        RecallFailure::new(
            RecallFailureReason::NoMatches,
            "no memories matched the query filters",
        )
        .with_suggestion("relax tag/source/age filters or rephrase the query")
    }

    /// Record the access on each surfaced memory: bump `last_accessed_at`,
    /// session bookkeeping, and an `Accessed` provenance entry. Best-effort;
    /// a write failure never degrades the retrieval itself.
    ///
    /// The write-back re-reads the stored copy and goes through the
    /// version-checked update, so a lifecycle mutation landing after the
    /// search is never clobbered by the stale search-time snapshot; on a
    /// conflict the access record is dropped. A memory deleted or
    /// quarantined since the search is skipped.
    fn mark_accessed(&self, query: &SearchQuery, results: &[RankedMemory]) {
        let now = Utc::now();
        for ranked in results {
            let id = &ranked.memory.memory_id;
            let mut memory = match self.store.get_memory(id) {
                Ok(Some(m)) if m.status == MemoryStatus::Active => m,
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!(memory_id = %id, error = %e, "failed to record access");
                    continue;
                }
            };
            let observed_version = memory.version;
            memory.last_accessed_at = Some(now);
            if let Some(session) = &query.session_id {
                memory.accessed_in_sessions.insert(session.clone());
                if memory.session_id.as_deref() != Some(session.as_str()) {
                    memory.cross_session_recall_count += 1;
                }
            }
            memory
                .provenance
                .push(ProvenanceEntry::new(ProvenanceAction::Accessed, "retrieval"));
            if let Err(e) = self.store.update_with_version_check(&memory, observed_version) {
                tracing::debug!(memory_id = %id, error = %e, "access record dropped");
            }
        }
    }
}
