use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::LEVEL_SCALE;
use crate::errors::{RapportError, RapportResult};

/// Largest level the step curve's fixed-point total can hold.
pub const MAX_REPRESENTABLE_LEVEL: f64 = (u32::MAX / LEVEL_SCALE) as f64;

/// One row of the step table: every session up to and including
/// `through_session` (and after the previous tier) adds `increment`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepTier {
    pub through_session: u32,
    pub increment: f64,
}

/// Understanding-level progression configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    pub base_level: f64,
    pub max_level: f64,
    /// Ordered step tiers, starting at session 2.
    pub tiers: Vec<StepTier>,
    /// Increment for sessions past the last tier.
    pub beyond_increment: f64,
    /// Session count at which the square-root curve snaps to `max_level`.
    pub sqrt_cap_sessions: u32,
}

impl ProgressionConfig {
    pub fn validate(&self) -> RapportResult<()> {
        if !self.base_level.is_finite() || self.base_level < 0.0 {
            return Err(RapportError::invalid_config(
                "progression.base_level",
                "must be a finite, non-negative number",
            ));
        }
        check_level("progression.base_level", self.base_level)?;
        if !self.max_level.is_finite() || self.max_level <= self.base_level {
            return Err(RapportError::invalid_config(
                "progression.max_level",
                format!("must be greater than base_level ({})", self.base_level),
            ));
        }
        check_level("progression.max_level", self.max_level)?;

        let mut prev_through = 1;
        let mut prev_increment = f64::INFINITY;
        for (i, tier) in self.tiers.iter().enumerate() {
            let field = format!("progression.tiers[{i}]");
            if tier.through_session <= prev_through {
                return Err(RapportError::invalid_config(
                    field,
                    format!(
                        "through_session {} must exceed {}",
                        tier.through_session, prev_through
                    ),
                ));
            }
            check_increment(&field, tier.increment, prev_increment)?;
            prev_through = tier.through_session;
            prev_increment = tier.increment;
        }
        check_increment(
            "progression.beyond_increment",
            self.beyond_increment,
            prev_increment,
        )?;

        if self.sqrt_cap_sessions < 2 {
            return Err(RapportError::invalid_config(
                "progression.sqrt_cap_sessions",
                "must be at least 2",
            ));
        }
        Ok(())
    }
}

fn check_level(field: &str, level: f64) -> RapportResult<()> {
    if level > MAX_REPRESENTABLE_LEVEL {
        return Err(RapportError::invalid_config(
            field,
            format!("must not exceed {MAX_REPRESENTABLE_LEVEL}"),
        ));
    }
    if !is_whole_hundredths(level) {
        return Err(RapportError::invalid_config(
            field,
            "must be a whole number of hundredths",
        ));
    }
    Ok(())
}

fn check_increment(field: &str, increment: f64, previous: f64) -> RapportResult<()> {
    if !increment.is_finite() || increment <= 0.0 {
        return Err(RapportError::invalid_config(field, "increment must be positive"));
    }
    if increment * f64::from(LEVEL_SCALE) < 1.0 - HUNDREDTHS_TOLERANCE {
        return Err(RapportError::invalid_config(
            field,
            format!("increment {increment} is below the 0.01 resolution"),
        ));
    }
    if increment > MAX_REPRESENTABLE_LEVEL || !is_whole_hundredths(increment) {
        return Err(RapportError::invalid_config(
            field,
            format!("increment {increment} must be a whole number of hundredths"),
        ));
    }
    if increment > previous {
        return Err(RapportError::invalid_config(
            field,
            format!("increment {increment} exceeds preceding increment {previous}"),
        ));
    }
    Ok(())
}

// Absorbs binary representation error in values like 0.1 × 100.
const HUNDREDTHS_TOLERANCE: f64 = 1e-6;

fn is_whole_hundredths(value: f64) -> bool {
    let scaled = value * f64::from(LEVEL_SCALE);
    (scaled - scaled.round()).abs() <= HUNDREDTHS_TOLERANCE
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            base_level: defaults::DEFAULT_BASE_LEVEL,
            max_level: defaults::DEFAULT_MAX_LEVEL,
            tiers: defaults::DEFAULT_STEP_TIERS
                .iter()
                .map(|&(through_session, increment)| StepTier {
                    through_session,
                    increment,
                })
                .collect(),
            beyond_increment: defaults::DEFAULT_BEYOND_INCREMENT,
            sqrt_cap_sessions: defaults::DEFAULT_SQRT_CAP_SESSIONS,
        }
    }
}
