use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use rapport_core::config::ProgressionConfig;
use rapport_core::errors::RapportResult;
use rapport_core::traits::IUnderstandingCurve;
use rapport_core::ProgressionStep;
use rapport_observability::{progression_span, ProgressionMetrics, ProgressionMetricsSnapshot};

use crate::curves::{SqrtDecayCurve, StepCurve};

/// Which understanding-level formula to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    #[default]
    StepTable,
    SqrtDecay,
}

/// Owns both curves, a memo of step-curve levels, and query metrics.
pub struct ProgressionEngine {
    step: StepCurve,
    sqrt_decay: SqrtDecayCurve,
    /// Session count at which the step curve saturates; cache keys are
    /// clamped to it so the memo stays bounded.
    saturation: i64,
    cache: DashMap<i64, f64>,
    metrics: ProgressionMetrics,
}

impl ProgressionEngine {
    pub fn new() -> Self {
        Self::build(StepCurve::new(), SqrtDecayCurve::new())
    }

    pub fn from_config(config: &ProgressionConfig) -> RapportResult<Self> {
        Ok(Self::build(
            StepCurve::from_config(config)?,
            SqrtDecayCurve::from_config(config)?,
        ))
    }

    fn build(step: StepCurve, sqrt_decay: SqrtDecayCurve) -> Self {
        let saturation = step.sessions_to_max();
        Self {
            step,
            sqrt_decay,
            saturation,
            cache: DashMap::new(),
            metrics: ProgressionMetrics::new(),
        }
    }

    pub fn step_curve(&self) -> &StepCurve {
        &self.step
    }

    pub fn sqrt_decay_curve(&self) -> &SqrtDecayCurve {
        &self.sqrt_decay
    }

    /// The curve an integrating application selected.
    pub fn curve(&self, kind: CurveKind) -> &dyn IUnderstandingCurve {
        match kind {
            CurveKind::StepTable => &self.step,
            CurveKind::SqrtDecay => &self.sqrt_decay,
        }
    }

    /// Step-table level for `session_count`.
    pub fn level(&self, session_count: i64) -> f64 {
        self.level_with(CurveKind::StepTable, session_count)
    }

    /// Square-root-decay level for `session_count`.
    pub fn sqrt_decay_level(&self, session_count: i64) -> f64 {
        self.level_with(CurveKind::SqrtDecay, session_count)
    }

    pub fn level_with(&self, kind: CurveKind, session_count: i64) -> f64 {
        let curve = self.curve(kind);
        let _span = progression_span!(curve.name(), session_count).entered();
        let level = curve.level(session_count);
        self.metrics.record_level(level >= curve.max());
        debug!(curve = curve.name(), session_count, level, "understanding level");
        level
    }

    /// Memoized step-table level.
    pub fn level_cached(&self, session_count: i64) -> f64 {
        let key = session_count.clamp(0, self.saturation);
        if let Some(level) = self.cache.get(&key) {
            self.metrics.record_cache_hit();
            return *level;
        }
        let level = self.level(key);
        self.cache.insert(key, level);
        level
    }

    pub fn progression(&self, session_count: i64) -> Vec<ProgressionStep> {
        self.step.progression(session_count)
    }

    pub fn next_increment(&self, current_session_count: i64) -> f64 {
        self.step.next_increment(current_session_count)
    }

    /// Session count at which the step curve reaches max.
    pub fn sessions_to_max(&self) -> i64 {
        self.saturation
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }

    pub fn metrics(&self) -> ProgressionMetricsSnapshot {
        self.metrics.snapshot()
    }
}

impl Default for ProgressionEngine {
    fn default() -> Self {
        Self::new()
    }
}
