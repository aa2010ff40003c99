//! # rapport-core
//!
//! Foundation crate for the Rapport policy engines.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod clock;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use clock::{ManualClock, SystemClock};
pub use config::RapportConfig;
pub use errors::{RapportError, RapportResult};
pub use models::{GateDecision, GateReason, GateStatus, GenerationState, ProgressionStep};
