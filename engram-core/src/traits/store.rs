use crate::errors::EngramResult;
use crate::memory::{MemoryObject, MemoryStatus, ProvenanceEntry};
use crate::models::audit::AuditEntry;
use crate::models::namespace::NamespaceKey;
use crate::models::query::{SearchHit, SearchQuery};

/// Filter for namespace listings.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilter {
    /// Only memories in this status (`None` = any).
    pub status: Option<MemoryStatus>,
    /// Only memories originating in this session.
    pub session_id: Option<String>,
    /// Only memories carrying this tag.
    pub tag: Option<String>,
}

impl MemoryFilter {
    /// Filter down to active memories only.
    pub fn active() -> Self {
        Self {
            status: Some(MemoryStatus::Active),
            ..Self::default()
        }
    }

    /// Whether a memory passes this filter. Namespace is checked separately.
    pub fn matches(&self, memory: &MemoryObject) -> bool {
        if let Some(status) = self.status {
            if memory.status != status {
                return false;
            }
        }
        if let Some(session) = &self.session_id {
            if memory.session_id.as_deref() != Some(session.as_str()) {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if !memory.tags.contains(tag) {
                return false;
            }
        }
        true
    }
}

/// The narrow persistence contract the core depends on.
///
/// Quarantined memories live in a separate partition from active ones until
/// promoted. The production backend is external; `engram-storage` ships an
/// in-memory reference implementation for tests.
pub trait MemoryStore: Send + Sync {
    // --- Primary partition ---
    fn save_memory(&self, memory: &MemoryObject) -> EngramResult<()>;
    fn get_memory(&self, id: &str) -> EngramResult<Option<MemoryObject>>;
    /// Replace a stored memory. Deletion is terminal: implementations must
    /// refuse to replace a deleted record with a non-deleted one.
    fn update_memory(&self, memory: &MemoryObject) -> EngramResult<()>;
    /// Conditional write: fails with `StoreError::VersionConflict` unless the
    /// stored version equals `expected_version`. Backends that cannot check
    /// may fall back to `update_memory`.
    fn update_with_version_check(
        &self,
        memory: &MemoryObject,
        expected_version: u64,
    ) -> EngramResult<()>;
    fn list_memories(
        &self,
        namespace: &NamespaceKey,
        filter: &MemoryFilter,
    ) -> EngramResult<Vec<MemoryObject>>;

    // --- Quarantine partition ---
    fn save_quarantined(&self, memory: &MemoryObject) -> EngramResult<()>;
    fn get_quarantined(&self, id: &str) -> EngramResult<Option<MemoryObject>>;
    fn list_quarantined(
        &self,
        namespace: &NamespaceKey,
        filter: &MemoryFilter,
    ) -> EngramResult<Vec<MemoryObject>>;
    fn delete_quarantined(&self, id: &str) -> EngramResult<()>;

    // --- Search ---
    /// Candidate search with externally supplied semantic similarity per hit.
    fn search_memories(&self, query: &SearchQuery) -> EngramResult<Vec<SearchHit>>;

    // --- Audit ---
    fn log_audit(&self, entry: &AuditEntry) -> EngramResult<()>;
    fn get_memory_audit_log(&self, id: &str) -> EngramResult<Vec<ProvenanceEntry>>;
}
