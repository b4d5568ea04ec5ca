use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::ingestion::IngestionMetadata;
use super::provenance::ProvenanceEntry;
use super::score::Score;
use super::source::MemorySource;
use super::status::MemoryStatus;
use super::version::MemoryVersion;
use crate::models::namespace::NamespaceKey;

/// The central entity: one versioned, provenance-tracked memory fact.
///
/// Mutated exclusively by the lifecycle manager; the store only persists
/// what it is given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryObject {
    /// UUID v4 identifier, immutable after creation.
    pub memory_id: String,
    /// Partition this memory is scoped to.
    pub namespace: NamespaceKey,
    /// The remembered fact itself.
    pub content: String,
    /// MIME-ish content type (e.g. "text/plain").
    pub content_type: String,
    /// Origin descriptor.
    pub source: MemorySource,
    /// Validation verdict from ingestion, set once at creation.
    pub ingestion: IngestionMetadata,
    /// Append-only lifecycle history. Exactly one entry per state change.
    pub provenance: Vec<ProvenanceEntry>,
    /// Unordered label set. Insertion order is irrelevant for ranking.
    pub tags: BTreeSet<String>,
    /// How important this memory is, independent of any query.
    pub importance: Score,
    /// How critical this memory is to the agent's current task.
    pub task_criticality: Score,
    /// Opaque embedding vector, when the caller supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_accessed_at: Option<DateTime<Utc>>,
    /// TTL in seconds. `None` disables TTL expiry; `Some(0)` expires
    /// immediately on the next sweep.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl_seconds: Option<u64>,
    /// Hard expiry deadline, independent of TTL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Checkpoint ids that reference this memory, in reference order.
    #[serde(default)]
    pub checkpoint_refs: Vec<String>,
    /// Starts at 1; increments by exactly 1 on every versioning mutation.
    pub version: u64,
    /// Pre-mutation snapshots, append-only.
    #[serde(default)]
    pub previous_versions: Vec<MemoryVersion>,
    pub status: MemoryStatus,
    /// Session that originated this memory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Sessions that have retrieved this memory.
    #[serde(default)]
    pub accessed_in_sessions: BTreeSet<String>,
    /// How many times a session other than the originating one recalled this.
    #[serde(default)]
    pub cross_session_recall_count: u64,
    /// blake3 hash of content, for dedup and merge-retry idempotency.
    pub content_hash: String,
}

impl MemoryObject {
    /// Compute the blake3 content hash.
    pub fn compute_content_hash(content: &str) -> String {
        blake3::hash(content.as_bytes()).to_hex().to_string()
    }

    /// Snapshot the current mutable fields, for appending to
    /// `previous_versions` before a mutation.
    pub fn snapshot(&self, superseded_by: &str, change_reason: Option<&str>) -> MemoryVersion {
        MemoryVersion {
            version: self.version,
            content: self.content.clone(),
            content_type: self.content_type.clone(),
            tags: self.tags.clone(),
            importance: self.importance,
            task_criticality: self.task_criticality,
            superseded_at: Utc::now(),
            superseded_by: superseded_by.to_string(),
            change_reason: change_reason.map(str::to_string),
        }
    }

    /// Whether this memory is due for expiry at `now`.
    ///
    /// Expires when `ttl_seconds` is zero, when `expires_at` has passed, or
    /// when `created_at + ttl_seconds` has passed. A memory with no TTL and
    /// no deadline never expires.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        if self.ttl_seconds == Some(0) {
            return true;
        }
        if let Some(expires_at) = self.expires_at {
            if now >= expires_at {
                return true;
            }
        }
        if let Some(ttl) = self.ttl_seconds {
            let deadline = self.created_at + Duration::seconds(ttl as i64);
            if now >= deadline {
                return true;
            }
        }
        false
    }

    /// Structural/content comparison: same content hash, type, tags,
    /// importance, and task criticality.
    ///
    /// This is distinct from `PartialEq`, which only compares ids.
    pub fn content_eq(&self, other: &Self) -> bool {
        self.content_hash == other.content_hash
            && self.content_type == other.content_type
            && self.tags == other.tags
            && self.importance == other.importance
            && self.task_criticality == other.task_criticality
    }
}

/// Identity equality: two memories are equal if they have the same id.
///
/// A memory's identity is its UUID, not its content. For structural
/// comparison, use [`MemoryObject::content_eq`].
impl PartialEq for MemoryObject {
    fn eq(&self, other: &Self) -> bool {
        self.memory_id == other.memory_id
    }
}
