use rapport_core::config::{ProgressionConfig, StepTier};
use rapport_core::errors::RapportError;
use rapport_core::traits::IUnderstandingCurve;
use rapport_progression::{StepCurve, StepTable};

// ── Anchor values ────────────────────────────────────────────────────────

#[test]
fn base_level_for_non_positive_and_first_session() {
    let curve = StepCurve::new();
    assert_eq!(curve.level(i64::MIN), 25.0);
    assert_eq!(curve.level(-3), 25.0);
    assert_eq!(curve.level(0), 25.0);
    assert_eq!(curve.level(1), 25.0);
}

#[test]
fn default_table_levels() {
    let curve = StepCurve::new();
    let expected = [
        (2, 35.0),
        (3, 40.0),
        (4, 45.0),
        (5, 47.5),
        (6, 50.0),
        (7, 51.5),
        (8, 53.0),
        (9, 54.0),
        (10, 55.0),
        (11, 55.5),
        (14, 57.0),
        (15, 57.3), // 57.25 rounds half up
        (16, 57.5),
        (17, 57.8),
        (20, 58.5),
        (21, 58.6),
        (30, 59.5),
        (184, 74.9),
        (185, 75.0),
    ];
    for (sessions, level) in expected {
        assert_eq!(curve.level(sessions), level, "level({sessions})");
    }
}

#[test]
fn clamped_at_max_forever() {
    let curve = StepCurve::new();
    assert_eq!(curve.sessions_to_max(), 185);
    for sessions in [186, 500, 10_000, i64::MAX] {
        assert_eq!(curve.level(sessions), 75.0);
    }
}

#[test]
fn reaches_max_exactly_without_float_drift() {
    // 165 steps of +0.1 from 58.5 must land on 75.0, not 74.99999.
    let curve = StepCurve::new();
    let trace = curve.progression(200);
    let last = trace.last().unwrap();
    assert_eq!(last.session, 185);
    assert_eq!(last.level, 75.0);
    assert_eq!(last.increment, 0.1);
}

// ── Table ────────────────────────────────────────────────────────────────

#[test]
fn table_increments_by_session() {
    let table = StepTable::default();
    assert_eq!(table.increment(0), 0.0);
    assert_eq!(table.increment(1), 0.0);
    assert_eq!(table.increment(2), 10.0);
    assert_eq!(table.increment(3), 5.0);
    assert_eq!(table.increment(4), 5.0);
    assert_eq!(table.increment(5), 2.5);
    assert_eq!(table.increment(8), 1.5);
    assert_eq!(table.increment(10), 1.0);
    assert_eq!(table.increment(11), 0.5);
    assert_eq!(table.increment(20), 0.25);
    assert_eq!(table.increment(21), 0.1);
    assert_eq!(table.increment(1_000_000), 0.1);
}

// ── Progression trace ────────────────────────────────────────────────────

#[test]
fn progression_empty_for_non_positive() {
    let curve = StepCurve::new();
    assert!(curve.progression(0).is_empty());
    assert!(curve.progression(-10).is_empty());
}

#[test]
fn progression_first_entries() {
    let curve = StepCurve::new();
    let trace = curve.progression(5);
    assert_eq!(trace.len(), 5);
    let sessions: Vec<u32> = trace.iter().map(|s| s.session).collect();
    assert_eq!(sessions, vec![1, 2, 3, 4, 5]);
    let levels: Vec<f64> = trace.iter().map(|s| s.level).collect();
    assert_eq!(levels, vec![25.0, 35.0, 40.0, 45.0, 47.5]);
    let increments: Vec<f64> = trace.iter().map(|s| s.increment).collect();
    assert_eq!(increments, vec![0.0, 10.0, 5.0, 5.0, 2.5]);
}

#[test]
fn progression_stops_at_cap() {
    let curve = StepCurve::new();
    assert_eq!(curve.progression(10_000).len(), 185);
}

#[test]
fn final_step_increment_is_clamped() {
    // base 25, max 40: 25 → 35 (+10) → 40 (+5) → cap. Use max 38 to clamp.
    let config = ProgressionConfig {
        max_level: 38.0,
        ..Default::default()
    };
    let curve = StepCurve::from_config(&config).unwrap();
    let trace = curve.progression(10);
    assert_eq!(trace.len(), 3);
    assert_eq!(trace[2].level, 38.0);
    assert_eq!(trace[2].increment, 3.0);
    assert_eq!(curve.level(3), 38.0);
}

// ── Next increment ───────────────────────────────────────────────────────

#[test]
fn next_increment_values() {
    let curve = StepCurve::new();
    assert_eq!(curve.next_increment(-5), 0.0);
    assert_eq!(curve.next_increment(0), 0.0);
    assert_eq!(curve.next_increment(1), 10.0);
    assert_eq!(curve.next_increment(2), 5.0);
    assert_eq!(curve.next_increment(20), 0.1);
    assert_eq!(curve.next_increment(184), 0.1);
    assert_eq!(curve.next_increment(185), 0.0);
    assert_eq!(curve.next_increment(i64::MAX), 0.0);
}

#[test]
fn next_increment_clamped_to_remaining() {
    let config = ProgressionConfig {
        max_level: 38.0,
        ..Default::default()
    };
    let curve = StepCurve::from_config(&config).unwrap();
    assert_eq!(curve.next_increment(2), 3.0);
}

// ── Config ───────────────────────────────────────────────────────────────

#[test]
fn custom_table_from_config() {
    let config = ProgressionConfig {
        base_level: 0.0,
        max_level: 10.0,
        tiers: vec![
            StepTier {
                through_session: 3,
                increment: 3.0,
            },
        ],
        beyond_increment: 1.0,
        ..Default::default()
    };
    let curve = StepCurve::from_config(&config).unwrap();
    assert_eq!(curve.level(2), 3.0);
    assert_eq!(curve.level(3), 6.0);
    assert_eq!(curve.level(4), 7.0);
    assert_eq!(curve.level(7), 10.0);
    assert_eq!(curve.sessions_to_max(), 7);
    assert_eq!(IUnderstandingCurve::base(&curve), 0.0);
    assert_eq!(IUnderstandingCurve::max(&curve), 10.0);
}

#[test]
fn levels_at_top_of_fixed_point_range_are_exact() {
    let config = ProgressionConfig {
        base_level: 42_000_000.0,
        max_level: 42_949_672.0,
        ..Default::default()
    };
    let curve = StepCurve::from_config(&config).unwrap();
    assert_eq!(curve.level(0), 42_000_000.0);
    assert_eq!(curve.level(2), 42_000_010.0);
    assert_eq!(IUnderstandingCurve::max(&curve), 42_949_672.0);
}

#[test]
fn hundredth_increment_is_applied_as_configured() {
    let config = ProgressionConfig {
        beyond_increment: 0.01,
        ..Default::default()
    };
    let curve = StepCurve::from_config(&config).unwrap();
    assert_eq!(curve.table().increment(21), 0.01);
    // 58.5 after session 20, then 982 sessions of +0.01.
    assert_eq!(curve.level(1002), 68.3);
}

#[test]
fn unrepresentable_configs_rejected() {
    for config in [
        ProgressionConfig {
            base_level: 5e7,
            max_level: 6e7,
            ..Default::default()
        },
        ProgressionConfig {
            beyond_increment: 0.001,
            ..Default::default()
        },
    ] {
        assert!(matches!(
            StepCurve::from_config(&config),
            Err(RapportError::InvalidConfig { .. })
        ));
    }
}

#[test]
fn invalid_config_rejected() {
    let config = ProgressionConfig {
        beyond_increment: -0.1,
        ..Default::default()
    };
    assert!(matches!(
        StepCurve::from_config(&config),
        Err(RapportError::InvalidConfig { .. })
    ));
}

#[test]
fn curve_trait_reports_name_and_bounds() {
    let curve = StepCurve::default();
    let dyn_curve: &dyn IUnderstandingCurve = &curve;
    assert_eq!(dyn_curve.name(), "step_table");
    assert_eq!(dyn_curve.base(), 25.0);
    assert_eq!(dyn_curve.max(), 75.0);
    assert_eq!(dyn_curve.level(2), 35.0);
}
