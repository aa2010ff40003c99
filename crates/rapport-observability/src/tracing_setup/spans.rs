//! Span definitions per operation: gate decisions and level computation.

/// Create a gate span for one user-scoped operation.
#[macro_export]
macro_rules! gate_span {
    ($op:expr, $user_id:expr) => {
        tracing::debug_span!("rapport.gate", op = %$op, user_id = %$user_id)
    };
}

/// Create a progression span.
#[macro_export]
macro_rules! progression_span {
    ($curve:expr, $session_count:expr) => {
        tracing::debug_span!("rapport.progression", curve = %$curve, session_count = $session_count)
    };
}

/// Create a maintenance span (sweeps, restores).
#[macro_export]
macro_rules! maintenance_span {
    ($task:expr) => {
        tracing::info_span!("rapport.maintenance", task = %$task)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const GATE: &str = "rapport.gate";
    pub const PROGRESSION: &str = "rapport.progression";
    pub const MAINTENANCE: &str = "rapport.maintenance";
}
