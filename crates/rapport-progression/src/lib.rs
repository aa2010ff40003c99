//! # rapport-progression
//!
//! Maps a user's cumulative session count to a bounded "understanding
//! level". Two unrelated curves share that name and are kept apart:
//!
//! - [`StepCurve`]: lookup-table increments that shrink as sessions accrue,
//!   clamped the moment the running total reaches the max.
//! - [`SqrtDecayCurve`]: `base + range × (1 − 1/√n)`, snapping to max at the
//!   cap session count.
//!
//! They are not interchangeable; callers pick one via [`CurveKind`].

pub mod curves;
pub mod engine;

pub use curves::{round_tenth, SqrtDecayCurve, StepCurve, StepTable};
pub use engine::{CurveKind, ProgressionEngine};
