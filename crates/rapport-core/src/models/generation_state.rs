use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-user debounce state for the regeneration gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationState {
    /// When a generation last completed. `None` until the first one.
    #[serde(default)]
    pub last_generated_at: Option<DateTime<Utc>>,
    /// Messages observed since the last generation.
    #[serde(default)]
    pub messages_since_last_generation: u64,
    /// Last time this entry was touched; drives idle eviction.
    pub last_activity: DateTime<Utc>,
}

impl GenerationState {
    /// A fresh entry with no generation and no messages.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            last_generated_at: None,
            messages_since_last_generation: 0,
            last_activity: now,
        }
    }

    /// Count one more message. Returns the new count.
    pub fn record_message(&mut self, now: DateTime<Utc>) -> u64 {
        self.messages_since_last_generation = self.messages_since_last_generation.saturating_add(1);
        self.last_activity = now;
        self.messages_since_last_generation
    }

    /// Reset the counter after a completed generation.
    pub fn record_generation(&mut self, now: DateTime<Utc>) {
        self.messages_since_last_generation = 0;
        self.last_generated_at = Some(now);
        self.last_activity = now;
    }

    /// Time since the last generation, or `None` if there never was one.
    /// Negative elapsed time (clock moved backwards) reads as zero.
    pub fn elapsed_since_generation(&self, now: DateTime<Utc>) -> Option<chrono::Duration> {
        self.last_generated_at
            .map(|at| (now - at).max(chrono::Duration::zero()))
    }

    /// Time since the entry was last touched.
    pub fn idle_duration(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.last_activity
    }
}
