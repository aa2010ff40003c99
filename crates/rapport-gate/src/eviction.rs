//! Bounds on gate state growth.
//!
//! Two policies: an idle sweep that drops users not seen for `max_idle`, and a
//! capacity bound that drops the least-recently-active users once the store
//! grows past `max_tracked_users`.

use chrono::{DateTime, Duration, Utc};

use rapport_core::traits::IGenerationStore;

/// Remove entries idle for longer than `max_idle`. Returns the number removed.
pub fn sweep_idle<S: IGenerationStore + ?Sized>(
    store: &S,
    now: DateTime<Utc>,
    max_idle: Duration,
) -> usize {
    store.retain(&mut |_, state| state.idle_duration(now) <= max_idle)
}

/// Headroom freed below capacity on each overflow, so a store sitting at
/// capacity doesn't rescan on every new user.
pub fn eviction_target(capacity: usize) -> usize {
    capacity - capacity / 100
}

/// Evict least-recently-active entries until the store holds at most
/// [`eviction_target`]`(capacity)` entries. `protect` is never evicted.
///
/// Returns the number removed. Does nothing while the store is within
/// `capacity`.
pub fn evict_least_recent<S: IGenerationStore + ?Sized>(
    store: &S,
    capacity: usize,
    protect: Option<&str>,
) -> usize {
    let len = store.len();
    if len <= capacity {
        return 0;
    }
    let excess = len - eviction_target(capacity);

    let mut candidates: Vec<(DateTime<Utc>, String)> = store
        .entries()
        .into_iter()
        .filter(|(user_id, _)| Some(user_id.as_str()) != protect)
        .map(|(user_id, state)| (state.last_activity, user_id))
        .collect();
    candidates.sort();

    candidates
        .into_iter()
        .take(excess)
        .filter(|(_, user_id)| store.delete(user_id).is_some())
        .count()
}
