//! Policy metrics.
//!
//! Counters are atomics so engines shared across request handlers can record
//! through `&self`. [`GateMetrics::snapshot`] and
//! [`ProgressionMetrics::snapshot`] produce plain serializable copies.

mod gate_metrics;
mod progression_metrics;

pub use gate_metrics::{GateMetrics, GateMetricsSnapshot};
pub use progression_metrics::{ProgressionMetrics, ProgressionMetricsSnapshot};
