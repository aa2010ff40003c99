//! Gate verdict counts, marks, and evictions.

use std::sync::atomic::{AtomicU64, Ordering};

use rapport_core::GateReason;
use serde::{Deserialize, Serialize};

/// Live counters for one gate.
#[derive(Debug, Default)]
pub struct GateMetrics {
    forced: AtomicU64,
    first_observation: AtomicU64,
    thresholds_met: AtomicU64,
    awaiting_messages: AtomicU64,
    awaiting_time: AtomicU64,
    awaiting_both: AtomicU64,
    marks: AtomicU64,
    evictions: AtomicU64,
}

impl GateMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one `should_generate` verdict.
    pub fn record_decision(&self, reason: GateReason) {
        let counter = match reason {
            GateReason::Forced => &self.forced,
            GateReason::FirstObservation => &self.first_observation,
            GateReason::ThresholdsMet => &self.thresholds_met,
            GateReason::AwaitingMessages => &self.awaiting_messages,
            GateReason::AwaitingTime => &self.awaiting_time,
            GateReason::AwaitingBoth => &self.awaiting_both,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_mark(&self) {
        self.marks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_evictions(&self, count: usize) {
        self.evictions.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> GateMetricsSnapshot {
        GateMetricsSnapshot {
            forced: self.forced.load(Ordering::Relaxed),
            first_observation: self.first_observation.load(Ordering::Relaxed),
            thresholds_met: self.thresholds_met.load(Ordering::Relaxed),
            awaiting_messages: self.awaiting_messages.load(Ordering::Relaxed),
            awaiting_time: self.awaiting_time.load(Ordering::Relaxed),
            awaiting_both: self.awaiting_both.load(Ordering::Relaxed),
            marks: self.marks.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }

    /// Zero every counter (useful for testing or periodic rotation).
    pub fn reset(&self) {
        for counter in [
            &self.forced,
            &self.first_observation,
            &self.thresholds_met,
            &self.awaiting_messages,
            &self.awaiting_time,
            &self.awaiting_both,
            &self.marks,
            &self.evictions,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

/// Point-in-time copy of [`GateMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateMetricsSnapshot {
    pub forced: u64,
    pub first_observation: u64,
    pub thresholds_met: u64,
    pub awaiting_messages: u64,
    pub awaiting_time: u64,
    pub awaiting_both: u64,
    pub marks: u64,
    pub evictions: u64,
}

impl GateMetricsSnapshot {
    pub fn allowed(&self) -> u64 {
        self.forced + self.first_observation + self.thresholds_met
    }

    pub fn suppressed(&self) -> u64 {
        self.awaiting_messages + self.awaiting_time + self.awaiting_both
    }

    /// Fraction of verdicts that allowed a generation (0.0–1.0).
    pub fn allow_rate(&self) -> f64 {
        let total = self.allowed() + self.suppressed();
        if total == 0 {
            return 0.0;
        }
        self.allowed() as f64 / total as f64
    }
}
