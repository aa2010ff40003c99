use serde::{Deserialize, Serialize};

/// One row of a progression trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressionStep {
    /// 1-based session index.
    pub session: u32,
    /// Level after this session, rounded to one decimal.
    pub level: f64,
    /// Delta actually applied at this session (0 for session 1).
    pub increment: f64,
}
