//! Structured log events for key gate operations.
//!
//! Each function emits a `tracing` event with structured fields.

use rapport_core::GateReason;

/// Log a verdict that lets a generation run.
pub fn generation_allowed(user_id: &str, reason: GateReason) {
    tracing::debug!(
        event = "generation_allowed",
        user_id = %user_id,
        reason = %reason,
        "regeneration allowed"
    );
}

/// Log a verdict that holds a generation back.
pub fn generation_suppressed(
    user_id: &str,
    reason: GateReason,
    messages_until: u64,
    secs_until: i64,
) {
    tracing::debug!(
        event = "generation_suppressed",
        user_id = %user_id,
        reason = %reason,
        messages_until = messages_until,
        secs_until = secs_until,
        "regeneration suppressed"
    );
}

/// Log a completed generation being recorded.
pub fn generation_marked(user_id: &str) {
    tracing::debug!(
        event = "generation_marked",
        user_id = %user_id,
        "generation marked"
    );
}

/// Log an eviction pass.
pub fn users_evicted(count: usize, cause: &str, remaining: usize) {
    tracing::info!(
        event = "users_evicted",
        count = count,
        cause = %cause,
        remaining = remaining,
        "evicted gate state"
    );
}

/// Log a snapshot load.
pub fn snapshot_restored(entries: usize, version: u32) {
    tracing::info!(
        event = "snapshot_restored",
        entries = entries,
        version = version,
        "gate snapshot restored"
    );
}

/// Log a snapshot being written.
pub fn snapshot_saved(entries: usize, path: &str) {
    tracing::info!(
        event = "snapshot_saved",
        entries = entries,
        path = %path,
        "gate snapshot saved"
    );
}
