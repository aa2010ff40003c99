use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{RapportError, RapportResult};

/// Regeneration gate configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Minimum wall-clock interval between generations (seconds).
    pub min_interval_secs: u64,
    /// Messages required since the last generation.
    pub message_threshold: u64,
    /// Entries idle longer than this are swept (seconds). 0 disables.
    pub max_idle_secs: u64,
    /// Upper bound on tracked users. 0 disables.
    pub max_tracked_users: usize,
}

impl GateConfig {
    pub fn min_interval(&self) -> Duration {
        Duration::seconds(clamp_secs(self.min_interval_secs))
    }

    pub fn max_idle(&self) -> Option<Duration> {
        (self.max_idle_secs > 0).then(|| Duration::seconds(clamp_secs(self.max_idle_secs)))
    }

    pub fn capacity(&self) -> Option<usize> {
        (self.max_tracked_users > 0).then_some(self.max_tracked_users)
    }

    pub fn validate(&self) -> RapportResult<()> {
        if self.message_threshold == 0 {
            return Err(RapportError::invalid_config(
                "gate.message_threshold",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            min_interval_secs: defaults::DEFAULT_MIN_INTERVAL_SECS,
            message_threshold: defaults::DEFAULT_MESSAGE_THRESHOLD,
            max_idle_secs: defaults::DEFAULT_MAX_IDLE_SECS,
            max_tracked_users: defaults::DEFAULT_MAX_TRACKED_USERS,
        }
    }
}

// chrono panics past i64::MAX / 1000 seconds.
fn clamp_secs(secs: u64) -> i64 {
    secs.min(i64::MAX as u64 / 1000) as i64
}
