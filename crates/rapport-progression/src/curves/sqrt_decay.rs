//! Square-root-decay progression.
//!
//! ```text
//! level(n ≤ 1)   = base
//! level(n)       = base + (max − base) × (1 − 1/√n)
//! level(n ≥ cap) = max
//! ```
//!
//! Approaches max asymptotically and snaps to it at `cap_sessions`.

use rapport_core::config::ProgressionConfig;
use rapport_core::errors::RapportResult;
use rapport_core::traits::IUnderstandingCurve;

use super::round_tenth;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtDecayCurve {
    base: f64,
    max: f64,
    cap_sessions: u32,
}

impl SqrtDecayCurve {
    /// Base 25, max 75, capped at 1000 sessions.
    pub fn new() -> Self {
        Self::from_validated(&ProgressionConfig::default())
    }

    pub fn from_config(config: &ProgressionConfig) -> RapportResult<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: &ProgressionConfig) -> Self {
        Self {
            base: config.base_level,
            max: config.max_level,
            cap_sessions: config.sqrt_cap_sessions,
        }
    }

    pub fn cap_sessions(&self) -> u32 {
        self.cap_sessions
    }

    pub fn level(&self, session_count: i64) -> f64 {
        if session_count <= 1 {
            return round_tenth(self.base);
        }
        if session_count >= i64::from(self.cap_sessions) {
            return round_tenth(self.max);
        }
        let progress = 1.0 - 1.0 / (session_count as f64).sqrt();
        round_tenth(self.base + (self.max - self.base) * progress).min(round_tenth(self.max))
    }
}

impl Default for SqrtDecayCurve {
    fn default() -> Self {
        Self::new()
    }
}

impl IUnderstandingCurve for SqrtDecayCurve {
    fn name(&self) -> &'static str {
        "sqrt_decay"
    }

    fn level(&self, session_count: i64) -> f64 {
        SqrtDecayCurve::level(self, session_count)
    }

    fn base(&self) -> f64 {
        self.base
    }

    fn max(&self) -> f64 {
        self.max
    }
}
