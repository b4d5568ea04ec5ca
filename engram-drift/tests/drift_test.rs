use engram_core::models::drift::DriftThresholds;
use engram_drift::metrics::{coherence, fragmentation, jaccard, topic_changes};
use engram_drift::DriftDetector;
use test_fixtures::memory_with_tags;

#[test]
fn jaccard_basics() {
    let a: std::collections::BTreeSet<String> =
        ["x".to_string(), "y".to_string()].into_iter().collect();
    let b: std::collections::BTreeSet<String> =
        ["y".to_string(), "z".to_string()].into_iter().collect();
    assert!((jaccard(&a, &b) - 1.0 / 3.0).abs() < 1e-9);
    assert_eq!(jaccard(&a, &a), 1.0);

    let empty = std::collections::BTreeSet::new();
    assert_eq!(jaccard(&empty, &empty), 1.0);
    assert_eq!(jaccard(&a, &empty), 0.0);
}

#[test]
fn empty_session_reports_no_drift() {
    let report = DriftDetector::default().analyze(&[]);
    assert_eq!(report.drift_score, 0.0);
    assert_eq!(report.coherence_score, 1.0);
    assert_eq!(report.fragmentation_score, 0.0);
    assert!(!report.drift_detected);
}

#[test]
fn single_memory_session_has_no_transitions() {
    let report = DriftDetector::default().analyze(&[memory_with_tags("solo", &["a"])]);
    assert_eq!(report.topic_changes, 0);
    assert_eq!(report.topic_change_rate, 0.0);
    assert!(!report.drift_detected);
}

#[test]
fn documented_scenario_fully_disjoint_tags() {
    // Three memories tagged [a,b], [c,d], [e,f]: pairwise Jaccard 0,
    // 2 changes over 2 transitions, fragmentation 1, coherence near 0.
    let memories = vec![
        memory_with_tags("first topic", &["a", "b"]),
        memory_with_tags("second topic", &["c", "d"]),
        memory_with_tags("third topic", &["e", "f"]),
    ];
    let report = DriftDetector::default().analyze(&memories);

    assert_eq!(report.topic_changes, 2);
    assert_eq!(report.topic_change_rate, 1.0);
    assert_eq!(report.fragmentation_score, 1.0);
    assert!(report.coherence_score < 0.4);
    assert_eq!(report.drift_score, 1.0);
    assert!(report.drift_detected);
}

#[test]
fn repeated_tags_stay_coherent() {
    let memories = vec![
        memory_with_tags("deploy checklist", &["deploy", "ops"]),
        memory_with_tags("deploy rollback steps", &["deploy", "ops"]),
        memory_with_tags("deploy monitoring", &["deploy"]),
    ];
    let report = DriftDetector::default().analyze(&memories);
    assert_eq!(report.topic_changes, 0);
    assert_eq!(report.fragmentation_score, 0.0);
    assert!(report.coherence_score > 0.6);
    assert!(!report.drift_detected);
}

#[test]
fn untagged_memories_do_not_count_as_fragmented() {
    let memories = vec![
        memory_with_tags("untagged note", &[]),
        memory_with_tags("another untagged", &[]),
    ];
    assert_eq!(fragmentation(&memories), 0.0);
    assert_eq!(coherence(&memories), 1.0);
}

#[test]
fn custom_thresholds_change_the_verdict() {
    let memories = vec![
        memory_with_tags("one", &["a", "b"]),
        memory_with_tags("two", &["b", "c"]),
        memory_with_tags("three", &["c", "d"]),
    ];
    let strict = DriftDetector::new(DriftThresholds {
        max_drift_score: 0.05,
        min_coherence_score: 0.0,
        max_fragmentation_score: 1.0,
    });
    assert!(strict.analyze(&memories).drift_detected);

    let lenient = DriftDetector::new(DriftThresholds {
        max_drift_score: 1.0,
        min_coherence_score: 0.0,
        max_fragmentation_score: 1.0,
    });
    assert!(!lenient.analyze(&memories).drift_detected);
}

#[test]
fn topic_change_threshold_is_point_three() {
    // Jaccard 1/3 >= 0.3: not a change. Jaccard 1/5 < 0.3: a change.
    let close = vec![
        memory_with_tags("one", &["a", "b"]),
        memory_with_tags("two", &["b", "c"]),
    ];
    assert_eq!(topic_changes(&close), 0);

    let far = vec![
        memory_with_tags("one", &["a", "b", "c"]),
        memory_with_tags("two", &["c", "d", "e"]),
    ];
    assert_eq!(topic_changes(&far), 1);
}
