//! Shared builders for Engram tests.
//!
//! Every crate's integration tests need a `MemoryObject` in a known state;
//! these helpers build one without going through the lifecycle manager.

use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeSet;

use engram_core::memory::{
    IngestionMetadata, MemoryObject, MemorySource, MemoryStatus, ProvenanceAction,
    ProvenanceEntry, Score, SourceType,
};
use engram_core::models::namespace::NamespaceKey;

/// The namespace used by fixture memories.
pub fn test_namespace() -> NamespaceKey {
    NamespaceKey::new("test-org", "test-app", "agent-1", None)
        .expect("fixture namespace is valid")
}

/// A second namespace, for cross-namespace failure cases.
pub fn other_namespace() -> NamespaceKey {
    NamespaceKey::new("test-org", "test-app", "agent-2", None)
        .expect("fixture namespace is valid")
}

/// Builder for fixture memories. Starts active, version 1, created now,
/// with a single `Created` provenance entry.
pub struct MemoryBuilder {
    content: String,
    tags: BTreeSet<String>,
    importance: Score,
    task_criticality: Score,
    created_at: DateTime<Utc>,
    last_accessed_at: Option<DateTime<Utc>>,
    ttl_seconds: Option<u64>,
    expires_at: Option<DateTime<Utc>>,
    session_id: Option<String>,
    namespace: NamespaceKey,
    status: MemoryStatus,
    cross_session_recall_count: u64,
}

impl MemoryBuilder {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tags: BTreeSet::new(),
            importance: Score::new(0.5),
            task_criticality: Score::new(0.5),
            created_at: Utc::now(),
            last_accessed_at: None,
            ttl_seconds: None,
            expires_at: None,
            session_id: None,
            namespace: test_namespace(),
            status: MemoryStatus::Active,
            cross_session_recall_count: 0,
        }
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn importance(mut self, value: f64) -> Self {
        self.importance = Score::new(value);
        self
    }

    pub fn task_criticality(mut self, value: f64) -> Self {
        self.task_criticality = Score::new(value);
        self
    }

    pub fn created_hours_ago(mut self, hours: i64) -> Self {
        self.created_at = Utc::now() - Duration::hours(hours);
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn accessed_hours_ago(mut self, hours: i64) -> Self {
        self.last_accessed_at = Some(Utc::now() - Duration::hours(hours));
        self
    }

    pub fn ttl_seconds(mut self, ttl: u64) -> Self {
        self.ttl_seconds = Some(ttl);
        self
    }

    pub fn expires_at(mut self, at: DateTime<Utc>) -> Self {
        self.expires_at = Some(at);
        self
    }

    pub fn session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn namespace(mut self, namespace: NamespaceKey) -> Self {
        self.namespace = namespace;
        self
    }

    pub fn status(mut self, status: MemoryStatus) -> Self {
        self.status = status;
        self
    }

    pub fn cross_session_recalls(mut self, count: u64) -> Self {
        self.cross_session_recall_count = count;
        self
    }

    pub fn build(self) -> MemoryObject {
        let content_hash = MemoryObject::compute_content_hash(&self.content);
        let mut created = ProvenanceEntry::new(ProvenanceAction::Created, "fixture");
        created.timestamp = self.created_at;
        created.version = Some(1);
        MemoryObject {
            memory_id: uuid::Uuid::new_v4().to_string(),
            namespace: self.namespace,
            content: self.content,
            content_type: "text/plain".to_string(),
            source: MemorySource {
                source_type: SourceType::UserInput,
                identifier: "fixture".to_string(),
                timestamp: self.created_at,
            },
            ingestion: IngestionMetadata::clean("text/plain"),
            provenance: vec![created],
            tags: self.tags,
            importance: self.importance,
            task_criticality: self.task_criticality,
            embedding: None,
            created_at: self.created_at,
            last_accessed_at: self.last_accessed_at,
            ttl_seconds: self.ttl_seconds,
            expires_at: self.expires_at,
            checkpoint_refs: Vec::new(),
            version: 1,
            previous_versions: Vec::new(),
            status: self.status,
            session_id: self.session_id,
            accessed_in_sessions: BTreeSet::new(),
            cross_session_recall_count: self.cross_session_recall_count,
            content_hash,
        }
    }
}

/// Shorthand: an active memory with the given content and tags.
pub fn memory_with_tags(content: &str, tags: &[&str]) -> MemoryObject {
    MemoryBuilder::new(content).tags(tags.iter().copied()).build()
}
