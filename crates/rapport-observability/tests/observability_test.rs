use rapport_core::config::ObservabilityConfig;
use rapport_core::GateReason;
use rapport_observability::tracing_setup::{events, spans};
use rapport_observability::{
    init_tracing, init_tracing_with_filter, GateMetrics, GateMetricsSnapshot, ProgressionMetrics,
};

// ── Gate metrics ─────────────────────────────────────────────────────────

#[test]
fn gate_metrics_bucket_each_reason() {
    let metrics = GateMetrics::new();
    metrics.record_decision(GateReason::Forced);
    metrics.record_decision(GateReason::FirstObservation);
    metrics.record_decision(GateReason::ThresholdsMet);
    metrics.record_decision(GateReason::AwaitingMessages);
    metrics.record_decision(GateReason::AwaitingMessages);
    metrics.record_decision(GateReason::AwaitingTime);
    metrics.record_decision(GateReason::AwaitingBoth);
    metrics.record_mark();
    metrics.record_evictions(3);

    let snap = metrics.snapshot();
    assert_eq!(snap.forced, 1);
    assert_eq!(snap.first_observation, 1);
    assert_eq!(snap.thresholds_met, 1);
    assert_eq!(snap.awaiting_messages, 2);
    assert_eq!(snap.awaiting_time, 1);
    assert_eq!(snap.awaiting_both, 1);
    assert_eq!(snap.marks, 1);
    assert_eq!(snap.evictions, 3);
    assert_eq!(snap.allowed(), 3);
    assert_eq!(snap.suppressed(), 4);
    assert!((snap.allow_rate() - 3.0 / 7.0).abs() < f64::EPSILON);
}

#[test]
fn allow_rate_zero_division() {
    assert_eq!(GateMetricsSnapshot::default().allow_rate(), 0.0);
}

#[test]
fn reset_zeroes_counters() {
    let metrics = GateMetrics::new();
    metrics.record_decision(GateReason::Forced);
    metrics.record_evictions(10);
    metrics.reset();
    assert_eq!(metrics.snapshot(), GateMetricsSnapshot::default());
}

#[test]
fn gate_metrics_concurrent_recording() {
    use std::sync::Arc;
    use std::thread;

    let metrics = Arc::new(GateMetrics::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let m = Arc::clone(&metrics);
            thread::spawn(move || {
                for _ in 0..1000 {
                    m.record_decision(GateReason::AwaitingTime);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(metrics.snapshot().awaiting_time, 8000);
}

#[test]
fn gate_metrics_snapshot_serializes() {
    let metrics = GateMetrics::new();
    metrics.record_mark();
    let json = serde_json::to_value(metrics.snapshot()).unwrap();
    assert_eq!(json["marks"], 1);
    assert_eq!(json["forced"], 0);
}

// ── Progression metrics ──────────────────────────────────────────────────

#[test]
fn progression_metrics_track_capped_results() {
    let metrics = ProgressionMetrics::new();
    metrics.record_level(false);
    metrics.record_level(true);
    metrics.record_cache_hit();
    let snap = metrics.snapshot();
    assert_eq!(snap.level_queries, 2);
    assert_eq!(snap.capped_results, 1);
    assert_eq!(snap.cache_hits, 1);
}

// ── Tracing ──────────────────────────────────────────────────────────────

#[test]
fn init_tracing_is_idempotent() {
    init_tracing(&ObservabilityConfig::default());
    init_tracing(&ObservabilityConfig::default());
    init_tracing_with_filter("debug");

    // Events and spans are safe to emit once a subscriber is installed.
    let span = rapport_observability::gate_span!("should_generate", "user-1");
    let _guard = span.enter();
    events::generation_allowed("user-1", GateReason::FirstObservation);
    events::generation_suppressed("user-1", GateReason::AwaitingTime, 0, 120);
    events::generation_marked("user-1");
    events::users_evicted(2, "idle", 10);
    events::snapshot_restored(5, 1);
    events::snapshot_saved(5, "/tmp/gate.json");
}

#[test]
fn span_names_are_namespaced() {
    assert_eq!(spans::names::GATE, "rapport.gate");
    assert_eq!(spans::names::PROGRESSION, "rapport.progression");
    assert!(spans::names::MAINTENANCE.starts_with("rapport."));
}
