//! Serializable copy of all gate state.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rapport_core::constants::SNAPSHOT_FORMAT_VERSION;
use rapport_core::errors::{RapportResult, SnapshotError};
use rapport_core::GenerationState;

/// Every tracked user's state at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateSnapshot {
    pub version: u32,
    pub taken_at: DateTime<Utc>,
    pub entries: BTreeMap<String, GenerationState>,
}

impl GateSnapshot {
    pub fn new(taken_at: DateTime<Utc>, entries: BTreeMap<String, GenerationState>) -> Self {
        Self {
            version: SNAPSHOT_FORMAT_VERSION,
            taken_at,
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reject snapshots written by an incompatible format.
    pub fn check_version(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_FORMAT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                expected: SNAPSHOT_FORMAT_VERSION,
            });
        }
        Ok(())
    }

    pub fn to_json(&self) -> RapportResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SnapshotError::from(e).into())
    }

    /// Parse and version-check a snapshot.
    pub fn from_json(s: &str) -> RapportResult<Self> {
        let snapshot: Self = serde_json::from_str(s).map_err(SnapshotError::from)?;
        snapshot.check_version()?;
        Ok(snapshot)
    }
}
