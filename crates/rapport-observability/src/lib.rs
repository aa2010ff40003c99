//! # rapport-observability
//!
//! Structured tracing setup, span macros, log events, and lock-free
//! counters for the gate and progression engines.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{GateMetrics, GateMetricsSnapshot, ProgressionMetrics, ProgressionMetricsSnapshot};
pub use tracing_setup::{init_tracing, init_tracing_with_filter};
