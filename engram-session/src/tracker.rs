use std::collections::HashMap;
use std::sync::Arc;

use engram_core::constants::DEFAULT_SESSION_ID;
use engram_core::errors::EngramResult;
use engram_core::memory::MemoryObject;
use engram_core::models::namespace::NamespaceKey;
use engram_core::models::session::SessionSummary;
use engram_core::traits::{MemoryFilter, MemoryStore};

/// Aggregated cross-session recall numbers for a namespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossSessionStats {
    /// Sessions observed in the namespace.
    pub session_count: usize,
    /// Memories recalled at least once outside their originating session.
    pub memories_recalled_across_sessions: usize,
    /// Total cross-session recalls summed over all memories.
    pub total_cross_session_recalls: u64,
}

/// Groups a namespace's active memories by originating session.
pub struct SessionTracker<S: MemoryStore> {
    store: Arc<S>,
}

impl<S: MemoryStore> SessionTracker<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Session summaries for a namespace, sorted newest-start-first.
    ///
    /// Memories without a `session_id` land in the `"default"` bucket.
    pub fn sessions(&self, namespace: &NamespaceKey) -> EngramResult<Vec<SessionSummary>> {
        let memories = self
            .store
            .list_memories(namespace, &MemoryFilter::active())?;
        Ok(group_sessions(&memories))
    }

    /// One session's summary, if it has any active memories.
    pub fn session(
        &self,
        namespace: &NamespaceKey,
        session_id: &str,
    ) -> EngramResult<Option<SessionSummary>> {
        Ok(self
            .sessions(namespace)?
            .into_iter()
            .find(|s| s.session_id == session_id))
    }

    /// Cross-session recall statistics for a namespace.
    pub fn cross_session_stats(&self, namespace: &NamespaceKey) -> EngramResult<CrossSessionStats> {
        let memories = self
            .store
            .list_memories(namespace, &MemoryFilter::active())?;
        let summaries = group_sessions(&memories);
        let recalled = memories
            .iter()
            .filter(|m| m.cross_session_recall_count > 0)
            .count();
        let total = memories.iter().map(|m| m.cross_session_recall_count).sum();
        Ok(CrossSessionStats {
            session_count: summaries.len(),
            memories_recalled_across_sessions: recalled,
            total_cross_session_recalls: total,
        })
    }
}

/// Pure grouping over an already-fetched memory set.
pub fn group_sessions(memories: &[MemoryObject]) -> Vec<SessionSummary> {
    let mut buckets: HashMap<&str, Vec<&MemoryObject>> = HashMap::new();
    for memory in memories {
        let session = memory.session_id.as_deref().unwrap_or(DEFAULT_SESSION_ID);
        buckets.entry(session).or_default().push(memory);
    }

    let mut summaries: Vec<SessionSummary> = buckets
        .into_iter()
        .filter_map(|(session_id, members)| {
            let started_at = members.iter().map(|m| m.created_at).min()?;
            let memory_ids: Vec<String> =
                members.iter().map(|m| m.memory_id.clone()).collect();
            let cross_session_recalls =
                members.iter().map(|m| m.cross_session_recall_count).sum();
            Some(SessionSummary {
                session_id: session_id.to_string(),
                started_at,
                memory_count: memory_ids.len(),
                memory_ids,
                cross_session_recalls,
            })
        })
        .collect();

    // Newest session first.
    summaries.sort_by(|a, b| b.started_at.cmp(&a.started_at));
    summaries
}
