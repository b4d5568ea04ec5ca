use chrono::{Duration, Utc};
use engram_retrieval::ranking::recency::recency_score;
use test_fixtures::MemoryBuilder;

#[test]
fn freshly_created_memory_scores_near_one() {
    let memory = MemoryBuilder::new("just now").build();
    let score = recency_score(&memory, Utc::now());
    assert!(score > 0.99, "got {score}");
}

#[test]
fn future_created_at_scores_exactly_one() {
    let now = Utc::now();
    let memory = MemoryBuilder::new("clock skew")
        .created_at(now + Duration::hours(5))
        .build();
    assert_eq!(recency_score(&memory, now), 1.0);
}

#[test]
fn one_half_life_halves_the_score() {
    let now = Utc::now();
    let memory = MemoryBuilder::new("a week old")
        .created_at(now - Duration::days(7))
        .build();
    let score = recency_score(&memory, now);
    assert!((score - 0.5).abs() < 1e-6, "got {score}");
}

#[test]
fn access_boost_never_exceeds_point_two() {
    let now = Utc::now();
    // 70 days old: created-at decay is ~0.001, so the score is almost
    // entirely the access boost.
    let untouched = MemoryBuilder::new("old and cold")
        .created_at(now - Duration::days(70))
        .build();
    let mut touched = untouched.clone();
    touched.last_accessed_at = Some(now);

    let base = recency_score(&untouched, now);
    let boosted = recency_score(&touched, now);
    assert!(boosted > base);
    assert!(boosted - base <= 0.2 + 1e-9, "boost was {}", boosted - base);
}

#[test]
fn access_boost_decays_with_its_own_half_life() {
    let now = Utc::now();
    let mut memory = MemoryBuilder::new("old")
        .created_at(now - Duration::days(70))
        .build();
    memory.last_accessed_at = Some(now - Duration::hours(84));
    // 3.5 days after access the boost is half of the 0.2 cap.
    let score = recency_score(&memory, now);
    assert!((score - 0.1).abs() < 0.01, "got {score}");
}

#[test]
fn future_access_timestamp_is_ignored() {
    let now = Utc::now();
    let mut memory = MemoryBuilder::new("old")
        .created_at(now - Duration::days(7))
        .build();
    let plain = recency_score(&memory, now);
    memory.last_accessed_at = Some(now + Duration::hours(1));
    assert_eq!(recency_score(&memory, now), plain);
}

#[test]
fn score_is_clamped_to_one() {
    let now = Utc::now();
    let mut memory = MemoryBuilder::new("brand new and touched").build();
    memory.created_at = now;
    memory.last_accessed_at = Some(now);
    assert_eq!(recency_score(&memory, now), 1.0);
}
