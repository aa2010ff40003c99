pub mod defaults;
mod gate_config;
mod observability_config;
mod progression_config;

pub use gate_config::GateConfig;
pub use observability_config::ObservabilityConfig;
pub use progression_config::{ProgressionConfig, StepTier, MAX_REPRESENTABLE_LEVEL};

use serde::{Deserialize, Serialize};

use crate::errors::RapportResult;

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RapportConfig {
    pub gate: GateConfig,
    pub progression: ProgressionConfig,
    pub observability: ObservabilityConfig,
}

impl RapportConfig {
    /// Parse from a TOML string. Missing sections and keys keep their defaults.
    pub fn from_toml(s: &str) -> RapportResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parse and validate in one step.
    pub fn load(s: &str) -> RapportResult<Self> {
        let config = Self::from_toml(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> RapportResult<()> {
        self.gate.validate()?;
        self.progression.validate()
    }
}
