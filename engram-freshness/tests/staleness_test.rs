use engram_core::models::slo::FreshnessSlo;
use engram_freshness::staleness::{effective_age_hours, staleness_for_age};
use engram_freshness::FreshnessEvaluator;
use test_fixtures::MemoryBuilder;

fn default_slo() -> FreshnessSlo {
    FreshnessSlo::default()
}

#[test]
fn fresh_memory_has_zero_staleness() {
    assert_eq!(staleness_for_age(0.0, &default_slo()), 0.0);
    assert_eq!(staleness_for_age(-5.0, &default_slo()), 0.0);
}

#[test]
fn max_age_saturates_at_one() {
    let slo = default_slo();
    assert_eq!(staleness_for_age(slo.max_age_hours, &slo), 1.0);
    assert_eq!(staleness_for_age(slo.max_age_hours * 3.0, &slo), 1.0);
}

#[test]
fn grace_period_caps_at_point_two() {
    let slo = default_slo();
    let grace = slo.max_age_hours * 0.5;
    let at_grace_end = staleness_for_age(grace, &slo);
    assert!((at_grace_end - 0.2).abs() < 1e-9);
    // Halfway through grace: 0.1.
    assert!((staleness_for_age(grace / 2.0, &slo) - 0.1).abs() < 1e-9);
}

#[test]
fn documented_scenario_1200_hours() {
    // max_age 2160h, grace 1080h: staleness = 0.2 + ((1200-1080)/1080)*0.8.
    let slo = default_slo();
    let staleness = staleness_for_age(1200.0, &slo);
    let expected = 0.2 + ((1200.0 - 1080.0) / 1080.0) * 0.8;
    assert!((staleness - expected).abs() < 1e-9);
    assert!((staleness - 0.2888).abs() < 1e-3);
}

#[test]
fn assessment_flags_stale_only_at_max_age() {
    let evaluator = FreshnessEvaluator::default();

    let aging = MemoryBuilder::new("aging fact").created_hours_ago(1200).build();
    let assessment = evaluator.assess(&aging);
    assert!(!assessment.is_stale);
    assert!(assessment.staleness > 0.2 && assessment.staleness < 0.3);

    let ancient = MemoryBuilder::new("ancient fact").created_hours_ago(3000).build();
    let assessment = evaluator.assess(&ancient);
    assert!(assessment.is_stale);
    assert_eq!(assessment.staleness, 1.0);
}

#[test]
fn recent_access_reduces_effective_age() {
    let memory = MemoryBuilder::new("old but touched")
        .created_hours_ago(3000)
        .accessed_hours_ago(10)
        .build();
    let age = effective_age_hours(&memory, chrono::Utc::now());
    assert!(age < 11.0, "access should anchor the effective age, got {age}");

    let assessment = FreshnessEvaluator::default().assess(&memory);
    assert!(!assessment.is_stale);
}

#[test]
fn access_older_than_creation_is_ignored() {
    let mut memory = MemoryBuilder::new("weird clock").created_hours_ago(10).build();
    memory.last_accessed_at = Some(chrono::Utc::now() - chrono::Duration::hours(100));
    let age = effective_age_hours(&memory, chrono::Utc::now());
    assert!((age - 10.0).abs() < 0.1);
}
