use engram_core::errors::{EngramError, StoreError};
use engram_core::memory::MemoryStatus;
use engram_core::models::audit::AuditEntry;
use engram_core::models::query::SearchQuery;
use engram_core::traits::{MemoryFilter, MemoryStore};
use engram_core::Score;
use engram_storage::{lexical_similarity, InMemoryStore};
use test_fixtures::{memory_with_tags, other_namespace, test_namespace, MemoryBuilder};

#[test]
fn save_and_get_round_trip() {
    let store = InMemoryStore::new();
    let memory = MemoryBuilder::new("the staging cluster lives in eu-west-1").build();
    store.save_memory(&memory).unwrap();

    let fetched = store.get_memory(&memory.memory_id).unwrap().unwrap();
    assert_eq!(fetched, memory);
    assert_eq!(fetched.content, memory.content);
}

#[test]
fn partitions_are_separate() {
    let store = InMemoryStore::new();
    let memory = MemoryBuilder::new("suspicious instruction-like content")
        .status(MemoryStatus::Quarantined)
        .build();
    store.save_quarantined(&memory).unwrap();

    assert!(store.get_memory(&memory.memory_id).unwrap().is_none());
    assert!(store.get_quarantined(&memory.memory_id).unwrap().is_some());
    assert_eq!(store.primary_len(), 0);
    assert_eq!(store.quarantine_len(), 1);
}

#[test]
fn update_unknown_memory_fails() {
    let store = InMemoryStore::new();
    let memory = MemoryBuilder::new("never saved").build();
    assert!(store.update_memory(&memory).is_err());
}

#[test]
fn version_checked_update_detects_conflict() {
    let store = InMemoryStore::new();
    let mut memory = MemoryBuilder::new("versioned fact").build();
    store.save_memory(&memory).unwrap();

    memory.version = 2;
    // Stored copy is at version 1; claiming it was at 3 must conflict.
    let err = store.update_with_version_check(&memory, 3).unwrap_err();
    assert!(matches!(
        err,
        EngramError::Store(StoreError::VersionConflict { expected: 3, found: 1, .. })
    ));

    store.update_with_version_check(&memory, 1).unwrap();
    assert_eq!(store.get_memory(&memory.memory_id).unwrap().unwrap().version, 2);
}

#[test]
fn deleted_memories_cannot_be_revived() {
    let store = InMemoryStore::new();
    let memory = MemoryBuilder::new("fact that gets retracted").build();
    store.save_memory(&memory).unwrap();

    let mut deleted = memory.clone();
    deleted.status = MemoryStatus::Deleted;
    store.update_memory(&deleted).unwrap();

    // A stale pre-deletion snapshot must not bring the memory back.
    let mut revived = memory.clone();
    revived.last_accessed_at = Some(chrono::Utc::now());
    assert!(store.update_memory(&revived).is_err());
    assert!(store.update_with_version_check(&revived, revived.version).is_err());
    assert_eq!(
        store.get_memory(&memory.memory_id).unwrap().unwrap().status,
        MemoryStatus::Deleted
    );

    // Rewriting the deleted record itself stays allowed.
    store.update_memory(&deleted).unwrap();
}

#[test]
fn list_filters_by_namespace_and_status() {
    let store = InMemoryStore::new();
    store
        .save_memory(&MemoryBuilder::new("ours").build())
        .unwrap();
    store
        .save_memory(&MemoryBuilder::new("theirs").namespace(other_namespace()).build())
        .unwrap();
    store
        .save_memory(
            &MemoryBuilder::new("gone")
                .status(MemoryStatus::Deleted)
                .build(),
        )
        .unwrap();

    let active = store
        .list_memories(&test_namespace(), &MemoryFilter::active())
        .unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].content, "ours");
}

#[test]
fn filter_narrows_by_session_and_tag() {
    let store = InMemoryStore::new();
    store
        .save_memory(
            &MemoryBuilder::new("tagged session work")
                .session("s1")
                .tags(["ops"])
                .build(),
        )
        .unwrap();
    store
        .save_memory(&MemoryBuilder::new("other session work").session("s2").build())
        .unwrap();

    let mut filter = MemoryFilter::active();
    filter.session_id = Some("s1".to_string());
    let listed = store.list_memories(&test_namespace(), &filter).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].content, "tagged session work");

    let mut filter = MemoryFilter::active();
    filter.tag = Some("ops".to_string());
    let listed = store.list_memories(&test_namespace(), &filter).unwrap();
    assert_eq!(listed.len(), 1);
}

#[test]
fn quarantine_partition_lists_and_deletes() {
    let store = InMemoryStore::new();
    let memory = MemoryBuilder::new("held for review")
        .status(MemoryStatus::Quarantined)
        .build();
    store.save_quarantined(&memory).unwrap();

    let listed = store
        .list_quarantined(&test_namespace(), &MemoryFilter::default())
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert!(store
        .list_quarantined(&other_namespace(), &MemoryFilter::default())
        .unwrap()
        .is_empty());

    store.delete_quarantined(&memory.memory_id).unwrap();
    assert_eq!(store.quarantine_len(), 0);
}

#[test]
fn memory_audit_log_reads_provenance_from_either_partition() {
    let store = InMemoryStore::new();
    let primary = MemoryBuilder::new("in primary").build();
    let held = MemoryBuilder::new("in quarantine")
        .status(MemoryStatus::Quarantined)
        .build();
    store.save_memory(&primary).unwrap();
    store.save_quarantined(&held).unwrap();

    assert_eq!(store.get_memory_audit_log(&primary.memory_id).unwrap().len(), 1);
    assert_eq!(store.get_memory_audit_log(&held.memory_id).unwrap().len(), 1);
    assert!(store.get_memory_audit_log("unknown").unwrap().is_empty());
}

#[test]
fn search_matches_on_token_overlap_and_tags() {
    let store = InMemoryStore::new();
    store
        .save_memory(&memory_with_tags(
            "postgres connection pool exhausted under load",
            &["db", "incident"],
        ))
        .unwrap();
    store
        .save_memory(&memory_with_tags("user prefers dark mode", &["prefs"]))
        .unwrap();

    let query = SearchQuery::new(test_namespace(), "postgres pool exhausted").with_limit(10);
    let hits = store.search_memories(&query).unwrap();
    assert_eq!(hits.len(), 2);
    // Best lexical match first.
    assert!(hits[0].memory.content.contains("postgres"));
    assert!(hits[0].semantic_similarity > hits[1].semantic_similarity);

    let tagged = SearchQuery::new(test_namespace(), "postgres")
        .with_tags(["prefs".to_string()])
        .with_limit(10);
    let hits = store.search_memories(&tagged).unwrap();
    assert_eq!(hits.len(), 1);
    assert!(hits[0].memory.tags.contains("prefs"));
}

#[test]
fn search_excludes_non_active_memories() {
    let store = InMemoryStore::new();
    store
        .save_memory(
            &MemoryBuilder::new("quarantined fact")
                .status(MemoryStatus::Quarantined)
                .build(),
        )
        .unwrap();

    let hits = store
        .search_memories(&SearchQuery::new(test_namespace(), "quarantined fact"))
        .unwrap();
    assert!(hits.is_empty());
}

#[test]
fn search_respects_min_importance_and_limit() {
    let store = InMemoryStore::new();
    for i in 0..5 {
        store
            .save_memory(
                &MemoryBuilder::new(format!("shared tokens variant {i}"))
                    .importance(0.2 + 0.15 * i as f64)
                    .build(),
            )
            .unwrap();
    }

    let mut query = SearchQuery::new(test_namespace(), "shared tokens").with_limit(2);
    query.min_importance = Some(Score::new(0.5));
    let hits = store.search_memories(&query).unwrap();
    assert_eq!(hits.len(), 2);
    for hit in &hits {
        assert!(hit.memory.importance >= Score::new(0.5));
    }
}

#[test]
fn zero_limit_search_returns_nothing() {
    let store = InMemoryStore::new();
    store
        .save_memory(&MemoryBuilder::new("shared tokens variant").build())
        .unwrap();

    let query = SearchQuery::new(test_namespace(), "shared tokens").with_limit(0);
    assert!(store.search_memories(&query).unwrap().is_empty());
}

#[test]
fn simulated_failure_surfaces_as_store_error() {
    let store = InMemoryStore::new();
    store.set_failing(true);
    assert!(store.get_memory("anything").is_err());
    store.set_failing(false);
    assert!(store.get_memory("anything").unwrap().is_none());
}

#[test]
fn audit_log_appends() {
    let store = InMemoryStore::new();
    let entry = AuditEntry::new(
        test_namespace(),
        "create",
        "m-1",
        "tester",
        serde_json::json!({}),
    );
    store.log_audit(&entry).unwrap();
    store.log_audit(&entry).unwrap();
    assert_eq!(store.audit_entries().len(), 2);
}

#[test]
fn lexical_similarity_bounds_and_identity() {
    assert_eq!(lexical_similarity("", "anything"), 0.0);
    assert_eq!(lexical_similarity("same words here", "same words here"), 1.0);
    let partial = lexical_similarity("alpha beta", "beta gamma");
    assert!(partial > 0.0 && partial < 1.0);
}
