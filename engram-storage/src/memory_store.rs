//! DashMap-backed reference store with primary and quarantine partitions.

use std::sync::Mutex;

use chrono::{Duration, Utc};
use dashmap::DashMap;

use engram_core::errors::{EngramResult, StoreError};
use engram_core::memory::{MemoryObject, MemoryStatus, ProvenanceEntry};
use engram_core::models::audit::AuditEntry;
use engram_core::models::namespace::NamespaceKey;
use engram_core::models::query::{SearchHit, SearchQuery};
use engram_core::traits::{MemoryFilter, MemoryStore};
use engram_core::Score;

use crate::similarity::lexical_similarity;

/// Thread-safe in-memory store.
///
/// Primary and quarantine partitions are separate maps keyed by memory id,
/// mirroring the partition split the contract requires. The audit log is an
/// append-only vector behind a mutex.
#[derive(Default)]
pub struct InMemoryStore {
    primary: DashMap<String, MemoryObject>,
    quarantine: DashMap<String, MemoryObject>,
    audit_log: Mutex<Vec<AuditEntry>>,
    /// When true, every operation fails. For degradation tests.
    fail_all: std::sync::atomic::AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle simulated backend failure.
    pub fn set_failing(&self, failing: bool) {
        self.fail_all
            .store(failing, std::sync::atomic::Ordering::SeqCst);
    }

    fn check_available(&self) -> EngramResult<()> {
        if self.fail_all.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(StoreError::Backend {
                message: "simulated backend failure".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// All audit entries written so far (cloned snapshot).
    pub fn audit_entries(&self) -> Vec<AuditEntry> {
        self.audit_log
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }

    /// Number of memories in the primary partition.
    pub fn primary_len(&self) -> usize {
        self.primary.len()
    }

    /// Number of memories in the quarantine partition.
    pub fn quarantine_len(&self) -> usize {
        self.quarantine.len()
    }

    fn list_partition(
        partition: &DashMap<String, MemoryObject>,
        namespace: &NamespaceKey,
        filter: &MemoryFilter,
    ) -> Vec<MemoryObject> {
        partition
            .iter()
            .filter(|entry| entry.namespace == *namespace && filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect()
    }
}

impl MemoryStore for InMemoryStore {
    fn save_memory(&self, memory: &MemoryObject) -> EngramResult<()> {
        self.check_available()?;
        self.primary.insert(memory.memory_id.clone(), memory.clone());
        Ok(())
    }

    fn get_memory(&self, id: &str) -> EngramResult<Option<MemoryObject>> {
        self.check_available()?;
        Ok(self.primary.get(id).map(|entry| entry.value().clone()))
    }

    fn update_memory(&self, memory: &MemoryObject) -> EngramResult<()> {
        self.check_available()?;
        match self.primary.entry(memory.memory_id.clone()) {
            dashmap::mapref::entry::Entry::Occupied(mut occupied) => {
                // Deleted is terminal: a stored deleted record is never
                // replaced by a live one.
                if occupied.get().status == MemoryStatus::Deleted
                    && memory.status != MemoryStatus::Deleted
                {
                    return Err(StoreError::Backend {
                        message: format!("memory {} is deleted", memory.memory_id),
                    }
                    .into());
                }
                occupied.insert(memory.clone());
                Ok(())
            }
            dashmap::mapref::entry::Entry::Vacant(_) => Err(StoreError::Backend {
                message: format!("cannot update unknown memory {}", memory.memory_id),
            }
            .into()),
        }
    }

    fn update_with_version_check(
        &self,
        memory: &MemoryObject,
        expected_version: u64,
    ) -> EngramResult<()> {
        self.check_available()?;
        // Entry-level lock: the version check and the write are one atomic step.
        match self.primary.entry(memory.memory_id.clone()) {
            dashmap::mapref::entry::Entry::Occupied(mut occupied) => {
                if occupied.get().status == MemoryStatus::Deleted
                    && memory.status != MemoryStatus::Deleted
                {
                    return Err(StoreError::Backend {
                        message: format!("memory {} is deleted", memory.memory_id),
                    }
                    .into());
                }
                let found = occupied.get().version;
                if found != expected_version {
                    return Err(StoreError::VersionConflict {
                        memory_id: memory.memory_id.clone(),
                        expected: expected_version,
                        found,
                    }
                    .into());
                }
                occupied.insert(memory.clone());
                Ok(())
            }
            dashmap::mapref::entry::Entry::Vacant(_) => Err(StoreError::Backend {
                message: format!("cannot update unknown memory {}", memory.memory_id),
            }
            .into()),
        }
    }

    fn list_memories(
        &self,
        namespace: &NamespaceKey,
        filter: &MemoryFilter,
    ) -> EngramResult<Vec<MemoryObject>> {
        self.check_available()?;
        Ok(Self::list_partition(&self.primary, namespace, filter))
    }

    fn save_quarantined(&self, memory: &MemoryObject) -> EngramResult<()> {
        self.check_available()?;
        self.quarantine
            .insert(memory.memory_id.clone(), memory.clone());
        Ok(())
    }

    fn get_quarantined(&self, id: &str) -> EngramResult<Option<MemoryObject>> {
        self.check_available()?;
        Ok(self.quarantine.get(id).map(|entry| entry.value().clone()))
    }

    fn list_quarantined(
        &self,
        namespace: &NamespaceKey,
        filter: &MemoryFilter,
    ) -> EngramResult<Vec<MemoryObject>> {
        self.check_available()?;
        Ok(Self::list_partition(&self.quarantine, namespace, filter))
    }

    fn delete_quarantined(&self, id: &str) -> EngramResult<()> {
        self.check_available()?;
        self.quarantine.remove(id);
        Ok(())
    }

    /// Candidate search. Applies the structural filters (namespace, status,
    /// tags, source types, age, session, importance) and attaches the
    /// similarity signal; the relevance floor and the freshness gate are the
    /// retrieval engine's job so it can diagnose what filtering removed.
    fn search_memories(&self, query: &SearchQuery) -> EngramResult<Vec<SearchHit>> {
        self.check_available()?;
        let now = Utc::now();
        let mut hits: Vec<SearchHit> = self
            .primary
            .iter()
            .filter(|entry| {
                let m = entry.value();
                if m.namespace != query.namespace || m.status != MemoryStatus::Active {
                    return false;
                }
                if !query.tags.is_empty() && !query.tags.iter().all(|t| m.tags.contains(t)) {
                    return false;
                }
                if !query.source_types.is_empty()
                    && !query.source_types.contains(&m.source.source_type)
                {
                    return false;
                }
                if let Some(min) = query.min_importance {
                    if m.importance < min {
                        return false;
                    }
                }
                if let Some(max_age) = query.max_age_seconds {
                    if now - m.created_at > Duration::seconds(max_age as i64) {
                        return false;
                    }
                }
                // With cross-session recall enabled the session filter is a
                // preference, not a wall: other sessions stay eligible.
                if let Some(session) = &query.session_id {
                    if !query.include_cross_session
                        && m.session_id.as_deref() != Some(session.as_str())
                    {
                        return false;
                    }
                }
                true
            })
            .map(|entry| {
                let similarity = lexical_similarity(&query.text, &entry.value().content);
                SearchHit {
                    memory: entry.value().clone(),
                    semantic_similarity: Score::new(similarity),
                }
            })
            .collect();

        hits.sort_by(|a, b| {
            b.semantic_similarity
                .partial_cmp(&a.semantic_similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        // limit = 0 means "return nothing", not "return one".
        hits.truncate(query.limit);
        Ok(hits)
    }

    fn log_audit(&self, entry: &AuditEntry) -> EngramResult<()> {
        self.check_available()?;
        let mut log = self.audit_log.lock().map_err(|_| StoreError::AuditUnavailable {
            reason: "audit log mutex poisoned".to_string(),
        })?;
        log.push(entry.clone());
        Ok(())
    }

    fn get_memory_audit_log(&self, id: &str) -> EngramResult<Vec<ProvenanceEntry>> {
        self.check_available()?;
        let memory = self
            .primary
            .get(id)
            .map(|entry| entry.value().clone())
            .or_else(|| self.quarantine.get(id).map(|entry| entry.value().clone()));
        Ok(memory.map(|m| m.provenance).unwrap_or_default())
    }
}
