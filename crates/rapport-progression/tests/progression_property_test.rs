use proptest::prelude::*;
use rapport_progression::{round_tenth, SqrtDecayCurve, StepCurve};

// ── Exhaustive checks over the small range ───────────────────────────────

#[test]
fn progression_consistent_with_level_for_small_n() {
    let curve = StepCurve::new();
    for n in 0..=50 {
        let trace = curve.progression(n);
        assert!(trace.len() as i64 <= n.max(0), "len > n for n={n}");
        for (i, step) in trace.iter().enumerate() {
            assert_eq!(step.session as usize, i + 1, "sessions must start at 1 and step by 1");
        }
        if let Some(last) = trace.last() {
            assert_eq!(last.level, curve.level(n), "final level mismatch at n={n}");
        }
    }
}

#[test]
fn trace_levels_match_level_at_each_session() {
    let curve = StepCurve::new();
    for step in curve.progression(300) {
        assert_eq!(step.level, curve.level(i64::from(step.session)));
    }
}

// ── Properties ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn step_level_bounded(n in any::<i64>()) {
        let level = StepCurve::new().level(n);
        prop_assert!((25.0..=75.0).contains(&level), "level({}) = {}", n, level);
    }

    #[test]
    fn step_level_non_decreasing(n in -10i64..400) {
        let curve = StepCurve::new();
        prop_assert!(curve.level(n) <= curve.level(n + 1));
    }

    #[test]
    fn next_increment_consistent_with_level(n in -5i64..400) {
        let curve = StepCurve::new();
        let predicted = curve.level(n) + curve.next_increment(n);
        // Displayed levels are rounded to 0.1; allow one rounding step.
        prop_assert!(
            (round_tenth(predicted) - curve.level(n + 1)).abs() <= 0.1 + 1e-9,
            "n={}: {} + {} vs {}",
            n,
            curve.level(n),
            curve.next_increment(n),
            curve.level(n + 1)
        );
        prop_assert!(curve.next_increment(n) >= 0.0);
    }

    #[test]
    fn progression_increments_sum_to_level(n in 1i64..400) {
        let curve = StepCurve::new();
        let trace = curve.progression(n);
        let total: f64 = 25.0 + trace.iter().map(|s| s.increment).sum::<f64>();
        prop_assert!((total - curve.level(n)).abs() <= 0.05 + 1e-6);
    }

    #[test]
    fn sqrt_level_bounded(n in any::<i64>()) {
        let level = SqrtDecayCurve::new().level(n);
        prop_assert!((25.0..=75.0).contains(&level));
    }

    #[test]
    fn sqrt_level_non_decreasing(n in -10i64..2000) {
        let curve = SqrtDecayCurve::new();
        prop_assert!(curve.level(n) <= curve.level(n + 1));
    }
}
