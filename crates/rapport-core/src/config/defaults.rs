// Single source of truth for all default values.

// --- Gate ---
pub const DEFAULT_MIN_INTERVAL_SECS: u64 = 300; // 5 minutes
pub const DEFAULT_MESSAGE_THRESHOLD: u64 = 10;
pub const DEFAULT_MAX_IDLE_SECS: u64 = 604_800; // 7 days
pub const DEFAULT_MAX_TRACKED_USERS: usize = 100_000;

// --- Progression ---
pub const DEFAULT_BASE_LEVEL: f64 = 25.0;
pub const DEFAULT_MAX_LEVEL: f64 = 75.0;
pub const DEFAULT_BEYOND_INCREMENT: f64 = 0.1;
pub const DEFAULT_SQRT_CAP_SESSIONS: u32 = 1000;

/// `(through_session, increment)` pairs; session 1 is the starting point.
pub const DEFAULT_STEP_TIERS: [(u32, f64); 7] = [
    (2, 10.0),
    (4, 5.0),
    (6, 2.5),
    (8, 1.5),
    (10, 1.0),
    (14, 0.5),
    (20, 0.25),
];

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
