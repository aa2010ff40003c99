use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Read-only view of one user's standing against the gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateStatus {
    pub user_id: String,
    /// Whether the gate holds any state for this user.
    pub tracked: bool,
    pub messages_since: u64,
    pub last_generated_at: Option<DateTime<Utc>>,
    pub enough_messages: bool,
    pub enough_time: bool,
    /// Remaining wait before the time gate clears (zero when already clear).
    #[serde(with = "duration_secs")]
    pub time_until_next: Duration,
    pub messages_until_next: u64,
    /// What `should_generate(user_id, false)` would return right now.
    pub would_generate: bool,
}

/// Result of recording a message and evaluating the gate in one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateDecision {
    pub message_count: u64,
    pub should_generate: bool,
}

mod duration_secs {
    use chrono::Duration;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_i64(d.num_seconds())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = i64::deserialize(d)?;
        Duration::try_seconds(secs).ok_or_else(|| D::Error::custom("duration out of range"))
    }
}

/// Why the gate reached a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateReason {
    /// Caller bypassed the thresholds.
    Forced,
    /// No state recorded for the user yet.
    FirstObservation,
    /// Both the time and message thresholds are met.
    ThresholdsMet,
    /// Time gate is clear; not enough messages.
    AwaitingMessages,
    /// Message gate is clear; not enough time has passed.
    AwaitingTime,
    /// Neither gate is clear.
    AwaitingBoth,
}

impl GateReason {
    /// Whether this reason lets a generation run.
    pub fn allows(self) -> bool {
        matches!(
            self,
            Self::Forced | Self::FirstObservation | Self::ThresholdsMet
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forced => "forced",
            Self::FirstObservation => "first_observation",
            Self::ThresholdsMet => "thresholds_met",
            Self::AwaitingMessages => "awaiting_messages",
            Self::AwaitingTime => "awaiting_time",
            Self::AwaitingBoth => "awaiting_both",
        }
    }
}

impl std::fmt::Display for GateReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
