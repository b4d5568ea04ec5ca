use chrono::{Duration, Utc};

use engram_core::memory::{
    IngestionMetadata, MemoryObject, MemorySource, MemoryStatus, ProvenanceAction,
    ProvenanceEntry, Score, SourceType,
};
use engram_core::models::namespace::NamespaceKey;

fn make_memory(content: &str) -> MemoryObject {
    MemoryObject {
        memory_id: "m-1".to_string(),
        namespace: NamespaceKey::new("o", "a", "g", None).unwrap(),
        content: content.to_string(),
        content_type: "text/plain".to_string(),
        source: MemorySource::new(SourceType::UserInput, "test"),
        ingestion: IngestionMetadata::clean("text/plain"),
        provenance: vec![ProvenanceEntry::new(ProvenanceAction::Created, "tester")],
        tags: ["alpha".to_string()].into_iter().collect(),
        importance: Score::new(0.6),
        task_criticality: Score::new(0.4),
        embedding: None,
        created_at: Utc::now(),
        last_accessed_at: None,
        ttl_seconds: None,
        expires_at: None,
        checkpoint_refs: Vec::new(),
        version: 1,
        previous_versions: Vec::new(),
        status: MemoryStatus::Active,
        session_id: None,
        accessed_in_sessions: Default::default(),
        cross_session_recall_count: 0,
        content_hash: MemoryObject::compute_content_hash(content),
    }
}

#[test]
fn score_clamps_to_unit_interval() {
    assert_eq!(Score::new(1.5).value(), 1.0);
    assert_eq!(Score::new(-0.3).value(), 0.0);
    assert_eq!(Score::new(0.42).value(), 0.42);
}

#[test]
fn identity_equality_ignores_content() {
    let a = make_memory("first");
    let mut b = make_memory("second");
    b.memory_id = a.memory_id.clone();
    assert_eq!(a, b);
    assert!(!a.content_eq(&b));
}

#[test]
fn content_eq_matches_on_hash_and_metadata() {
    let a = make_memory("same words");
    let mut b = make_memory("same words");
    b.memory_id = "m-2".to_string();
    assert_ne!(a, b);
    assert!(a.content_eq(&b));
}

#[test]
fn zero_ttl_expires_immediately() {
    let mut m = make_memory("zero ttl");
    m.ttl_seconds = Some(0);
    assert!(m.is_expired(Utc::now()));
}

#[test]
fn absent_ttl_never_expires_via_ttl() {
    let mut m = make_memory("no ttl");
    m.created_at = Utc::now() - Duration::days(3650);
    assert!(!m.is_expired(Utc::now()));
}

#[test]
fn ttl_deadline_respected() {
    let mut m = make_memory("short ttl");
    m.created_at = Utc::now() - Duration::seconds(120);
    m.ttl_seconds = Some(60);
    assert!(m.is_expired(Utc::now()));

    m.ttl_seconds = Some(600);
    assert!(!m.is_expired(Utc::now()));
}

#[test]
fn expires_at_overrides_nothing_else() {
    let mut m = make_memory("deadline");
    m.expires_at = Some(Utc::now() - Duration::minutes(1));
    assert!(m.is_expired(Utc::now()));

    m.expires_at = Some(Utc::now() + Duration::minutes(5));
    assert!(!m.is_expired(Utc::now()));
}

#[test]
fn snapshot_preserves_mutable_fields() {
    let m = make_memory("snapshot me");
    let snap = m.snapshot("editor", Some("pre-edit"));
    assert_eq!(snap.version, m.version);
    assert_eq!(snap.content, m.content);
    assert_eq!(snap.tags, m.tags);
    assert_eq!(snap.importance, m.importance);
    assert_eq!(snap.task_criticality, m.task_criticality);
    assert_eq!(snap.superseded_by, "editor");
    assert_eq!(snap.change_reason.as_deref(), Some("pre-edit"));
}

#[test]
fn provenance_round_trips_through_json() {
    let entry = ProvenanceEntry::new(ProvenanceAction::Merged, "merger")
        .with_version(3)
        .with_merged_from(vec!["a".to_string(), "b".to_string()])
        .with_reason("dedup");
    let json = serde_json::to_string(&entry).unwrap();
    let back: ProvenanceEntry = serde_json::from_str(&json).unwrap();
    assert_eq!(back, entry);
    assert!(json.contains("\"merged\""));
}
