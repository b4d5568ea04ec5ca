use engram_core::Score;
use proptest::prelude::*;

proptest! {
    #[test]
    fn score_is_always_clamped(value in -1000.0f64..1000.0) {
        let s = Score::new(value);
        prop_assert!((0.0..=1.0).contains(&s.value()));
    }

    #[test]
    fn arithmetic_stays_in_range(a in 0.0f64..1.0, b in 0.0f64..1.0, k in -10.0f64..10.0) {
        let sum = Score::new(a) + Score::new(b);
        prop_assert!((0.0..=1.0).contains(&sum.value()));
        let diff = Score::new(a) - Score::new(b);
        prop_assert!((0.0..=1.0).contains(&diff.value()));
        let scaled = Score::new(a) * k;
        prop_assert!((0.0..=1.0).contains(&scaled.value()));
    }

    #[test]
    fn ordering_follows_the_raw_value(a in 0.0f64..1.0, b in 0.0f64..1.0) {
        prop_assert_eq!(Score::new(a) < Score::new(b), a < b);
    }
}
