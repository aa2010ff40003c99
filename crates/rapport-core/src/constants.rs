/// Rapport system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current on-disk snapshot format version for gate state.
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// Fixed-point scale used by the step curve (levels tracked in hundredths).
pub const LEVEL_SCALE: u32 = 100;

/// Environment variable consulted for tracing filters.
pub const LOG_ENV_VAR: &str = "RAPPORT_LOG";
