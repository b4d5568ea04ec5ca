use engram_core::models::slo::FreshnessSlo;
use engram_freshness::staleness::staleness_for_age;
use proptest::prelude::*;

proptest! {
    #[test]
    fn staleness_bounded(age in -1000.0f64..100_000.0, max_age in 1.0f64..50_000.0) {
        let slo = FreshnessSlo { max_age_hours: max_age, ..FreshnessSlo::default() };
        let s = staleness_for_age(age, &slo);
        prop_assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn staleness_monotonic(
        age1 in 0.0f64..50_000.0,
        delta in 0.0f64..50_000.0,
        max_age in 1.0f64..50_000.0,
    ) {
        let slo = FreshnessSlo { max_age_hours: max_age, ..FreshnessSlo::default() };
        let s1 = staleness_for_age(age1, &slo);
        let s2 = staleness_for_age(age1 + delta, &slo);
        prop_assert!(s1 <= s2 + 1e-12, "staleness({age1})={s1} > staleness({})={s2}", age1 + delta);
    }

    #[test]
    fn stale_iff_past_max_age(age in 0.0f64..10_000.0) {
        let slo = FreshnessSlo::default();
        let s = staleness_for_age(age, &slo);
        if age >= slo.max_age_hours {
            prop_assert_eq!(s, 1.0);
        } else {
            prop_assert!(s < 1.0);
        }
    }
}
