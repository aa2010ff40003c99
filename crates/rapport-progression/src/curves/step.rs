//! Lookup-table progression.
//!
//! ```text
//! level(n ≤ 1) = base
//! level(n)     = min(max, base + Σ table(i) for i in 2..=n)
//! ```
//!
//! The running total is kept in hundredths of a point so the cap is hit
//! exactly; repeated `+0.1` in floating point would drift below it.

use rapport_core::config::ProgressionConfig;
use rapport_core::constants::LEVEL_SCALE;
use rapport_core::errors::RapportResult;
use rapport_core::traits::IUnderstandingCurve;
use rapport_core::ProgressionStep;

/// Per-session increments, monotonically non-increasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTable {
    /// `(through_session, increment)` in hundredths.
    tiers: Vec<(u32, u32)>,
    beyond: u32,
}

impl StepTable {
    /// Build from an already-validated config.
    pub fn from_config(config: &ProgressionConfig) -> Self {
        Self {
            tiers: config
                .tiers
                .iter()
                .map(|tier| (tier.through_session, to_scaled(tier.increment)))
                .collect(),
            beyond: to_scaled(config.beyond_increment),
        }
    }

    /// Table increment for 1-based `session`. Session 1 and below add nothing.
    pub fn increment(&self, session: i64) -> f64 {
        from_scaled(self.scaled_increment(session))
    }

    fn scaled_increment(&self, session: i64) -> u32 {
        if session < 2 {
            return 0;
        }
        self.tiers
            .iter()
            .find(|(through, _)| session <= i64::from(*through))
            .map_or(self.beyond, |(_, increment)| *increment)
    }
}

impl Default for StepTable {
    fn default() -> Self {
        Self::from_config(&ProgressionConfig::default())
    }
}

/// Step-table understanding level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCurve {
    table: StepTable,
    base: u32,
    max: u32,
}

impl StepCurve {
    /// Default table, base 25, max 75.
    pub fn new() -> Self {
        Self::from_validated(&ProgressionConfig::default())
    }

    pub fn from_config(config: &ProgressionConfig) -> RapportResult<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: &ProgressionConfig) -> Self {
        Self {
            table: StepTable::from_config(config),
            base: to_scaled(config.base_level),
            max: to_scaled(config.max_level),
        }
    }

    pub fn table(&self) -> &StepTable {
        &self.table
    }

    /// Understanding level after `session_count` sessions, rounded to 0.1.
    pub fn level(&self, session_count: i64) -> f64 {
        display(self.scaled_level(session_count))
    }

    /// Step-by-step trace from session 1 until `session_count` or the cap,
    /// whichever comes first.
    pub fn progression(&self, session_count: i64) -> Vec<ProgressionStep> {
        if session_count <= 0 {
            return Vec::new();
        }
        let mut steps = vec![ProgressionStep {
            session: 1,
            level: display(self.base),
            increment: 0.0,
        }];

        let mut level = self.base;
        let mut session: i64 = 2;
        while session <= session_count && level < self.max {
            let applied = self.table.scaled_increment(session).min(self.max - level);
            level = level.saturating_add(applied);
            steps.push(ProgressionStep {
                session: u32::try_from(session).unwrap_or(u32::MAX),
                level: display(level),
                increment: from_scaled(applied),
            });
            session += 1;
        }
        steps
    }

    /// Increment the next session would add, never pushing past max.
    pub fn next_increment(&self, current_session_count: i64) -> f64 {
        let level = self.scaled_level(current_session_count);
        if level >= self.max {
            return 0.0;
        }
        let next = current_session_count.saturating_add(1);
        from_scaled(self.table.scaled_increment(next).min(self.max - level))
    }

    /// Smallest session count whose level equals max.
    pub fn sessions_to_max(&self) -> i64 {
        let mut level = self.base;
        let mut session: i64 = 1;
        while level < self.max {
            session += 1;
            level = level
                .saturating_add(self.table.scaled_increment(session))
                .min(self.max);
        }
        session
    }

    fn scaled_level(&self, session_count: i64) -> u32 {
        let mut level = self.base;
        let mut session: i64 = 2;
        // Every increment is at least one hundredth, so this stops at the cap
        // well before `session_count` for large inputs.
        while session <= session_count {
            level = level.saturating_add(self.table.scaled_increment(session));
            if level >= self.max {
                return self.max;
            }
            session += 1;
        }
        level
    }
}

impl Default for StepCurve {
    fn default() -> Self {
        Self::new()
    }
}

impl IUnderstandingCurve for StepCurve {
    fn name(&self) -> &'static str {
        "step_table"
    }

    fn level(&self, session_count: i64) -> f64 {
        StepCurve::level(self, session_count)
    }

    fn base(&self) -> f64 {
        from_scaled(self.base)
    }

    fn max(&self) -> f64 {
        from_scaled(self.max)
    }
}

fn to_scaled(value: f64) -> u32 {
    (value * f64::from(LEVEL_SCALE)).round() as u32
}

fn from_scaled(value: u32) -> f64 {
    f64::from(value) / f64::from(LEVEL_SCALE)
}

/// Scaled value to one decimal, rounding halves up in integer space.
fn display(value: u32) -> f64 {
    let per_tenth = LEVEL_SCALE / 10;
    f64::from(value.saturating_add(per_tenth / 2) / per_tenth) / 10.0
}
