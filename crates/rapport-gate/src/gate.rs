//! RegenerationGate: decides when a per-user summary may be regenerated.
//!
//! A generation is allowed when the caller forces it, when the user has never
//! been seen, or when BOTH:
//!
//! ```text
//! now - last_generated_at >= min_interval      (default 5 minutes)
//! messages_since_last_generation >= threshold  (default 10)
//! ```
//!
//! Callers increment on every inbound message, ask before starting the
//! expensive job, and mark only after the job has completed.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use rapport_core::clock::SystemClock;
use rapport_core::config::GateConfig;
use rapport_core::errors::RapportResult;
use rapport_core::traits::{IClock, IGenerationStore};
use rapport_core::{GateDecision, GateReason, GateStatus, GenerationState};
use rapport_observability::tracing_setup::events;
use rapport_observability::{gate_span, maintenance_span, GateMetrics, GateMetricsSnapshot};

use crate::eviction;
use crate::persistence;
use crate::snapshot::GateSnapshot;
use crate::store::InMemoryGenerationStore;

/// Time + volume debounce over an injectable store and clock.
pub struct RegenerationGate<S = InMemoryGenerationStore, C = SystemClock> {
    store: S,
    clock: C,
    config: GateConfig,
    metrics: GateMetrics,
}

impl RegenerationGate {
    /// In-memory gate with default thresholds and the system clock.
    pub fn new() -> Self {
        Self {
            store: InMemoryGenerationStore::new(),
            clock: SystemClock,
            config: GateConfig::default(),
            metrics: GateMetrics::new(),
        }
    }

    /// In-memory gate with custom thresholds.
    pub fn with_config(config: GateConfig) -> RapportResult<Self> {
        Self::with_parts(InMemoryGenerationStore::new(), SystemClock, config)
    }
}

impl Default for RegenerationGate {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: IGenerationStore, C: IClock> RegenerationGate<S, C> {
    /// Build a gate from its parts. Fails only if `config` is invalid.
    pub fn with_parts(store: S, clock: C, config: GateConfig) -> RapportResult<Self> {
        config.validate()?;
        Ok(Self {
            store,
            clock,
            config,
            metrics: GateMetrics::new(),
        })
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn metrics(&self) -> GateMetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Number of users with recorded state.
    pub fn tracked_users(&self) -> usize {
        self.store.len()
    }

    // --- Policy ---

    /// Whether a regeneration should run for `user_id` now.
    ///
    /// Read-only: never creates state for an unknown user. The verdict and
    /// the logged wait figures come from a single read of the user's state.
    pub fn should_generate(&self, user_id: &str, force: bool) -> bool {
        let _span = gate_span!("should_generate", user_id).entered();
        let now = self.clock.now();
        let state = if force { None } else { self.store.get(user_id) };
        let reason = self.reason_for(state.as_ref(), force, now);
        self.metrics.record_decision(reason);

        if reason.allows() {
            events::generation_allowed(user_id, reason);
        } else {
            events::generation_suppressed(
                user_id,
                reason,
                self.messages_until(state.as_ref()),
                self.time_until(state.as_ref(), now).num_seconds(),
            );
        }
        reason.allows()
    }

    /// The verdict `should_generate` would reach, with its cause.
    pub fn reason(&self, user_id: &str, force: bool) -> GateReason {
        let state = if force { None } else { self.store.get(user_id) };
        self.reason_for(state.as_ref(), force, self.clock.now())
    }

    /// Count one inbound message. Returns the count since the last generation.
    pub fn increment_message_count(&self, user_id: &str) -> u64 {
        let now = self.clock.now();
        let (state, created) =
            self.store
                .upsert(user_id, GenerationState::new(now), &mut |state| {
                    state.record_message(now);
                });
        if created {
            self.evict_over_capacity(Some(user_id));
        }
        debug!(
            user_id = %user_id,
            count = state.messages_since_last_generation,
            "message counted"
        );
        state.messages_since_last_generation
    }

    /// Record that a generation has just completed.
    ///
    /// Call only after the job succeeds; marking early suppresses a
    /// regeneration that is legitimately due.
    pub fn mark_generated(&self, user_id: &str) {
        let now = self.clock.now();
        let (_, created) = self
            .store
            .upsert(user_id, GenerationState::new(now), &mut |state| {
                state.record_generation(now);
            });
        if created {
            self.evict_over_capacity(Some(user_id));
        }
        self.metrics.record_mark();
        events::generation_marked(user_id);
    }

    /// Increment, then evaluate the gate without forcing.
    pub fn record_message(&self, user_id: &str) -> GateDecision {
        let message_count = self.increment_message_count(user_id);
        GateDecision {
            message_count,
            should_generate: self.should_generate(user_id, false),
        }
    }

    // --- Queries ---

    /// Message threshold met. Unknown users have zero messages.
    pub fn has_enough_messages(&self, user_id: &str) -> bool {
        self.store
            .get(user_id)
            .is_some_and(|state| self.messages_clear(&state))
    }

    /// Time threshold met. True for unknown and never-generated users.
    pub fn has_enough_time_passed(&self, user_id: &str) -> bool {
        self.store
            .get(user_id)
            .map_or(true, |state| self.time_clear(&state, self.clock.now()))
    }

    /// Remaining wait before the time gate clears; zero once it has.
    pub fn time_until_next_generation(&self, user_id: &str) -> Duration {
        self.time_until(self.store.get(user_id).as_ref(), self.clock.now())
    }

    /// Messages still needed before the message gate clears.
    pub fn messages_until_next_generation(&self, user_id: &str) -> u64 {
        self.messages_until(self.store.get(user_id).as_ref())
    }

    /// Everything the gate knows about one user, in one read.
    pub fn status(&self, user_id: &str) -> GateStatus {
        let now = self.clock.now();
        let state = self.store.get(user_id);
        let state = state.as_ref();

        GateStatus {
            user_id: user_id.to_string(),
            tracked: state.is_some(),
            messages_since: state.map_or(0, |s| s.messages_since_last_generation),
            last_generated_at: state.and_then(|s| s.last_generated_at),
            enough_messages: state.is_some_and(|s| self.messages_clear(s)),
            enough_time: state.map_or(true, |s| self.time_clear(s, now)),
            time_until_next: self.time_until(state, now),
            messages_until_next: self.messages_until(state),
            would_generate: self.reason_for(state, false, now).allows(),
        }
    }

    /// Forget a user. Returns whether any state existed.
    pub fn clear_user_state(&self, user_id: &str) -> bool {
        let existed = self.store.delete(user_id).is_some();
        debug!(user_id = %user_id, existed, "user state cleared");
        existed
    }

    // --- Maintenance ---

    /// Drop users idle longer than `max_idle_secs`. Returns the number removed.
    pub fn sweep_idle(&self) -> usize {
        let Some(max_idle) = self.config.max_idle() else {
            return 0;
        };
        let _span = maintenance_span!("sweep_idle").entered();
        let removed = eviction::sweep_idle(&self.store, self.clock.now(), max_idle);
        if removed > 0 {
            self.metrics.record_evictions(removed);
            events::users_evicted(removed, "idle", self.store.len());
        }
        removed
    }

    /// Copy every entry into a serializable snapshot.
    pub fn snapshot(&self) -> GateSnapshot {
        let entries: BTreeMap<String, GenerationState> = self.store.entries().into_iter().collect();
        GateSnapshot::new(self.clock.now(), entries)
    }

    /// Load a snapshot, replacing entries with the same user id.
    /// Returns the number of entries loaded.
    pub fn restore(&self, snapshot: GateSnapshot) -> RapportResult<usize> {
        let _span = maintenance_span!("restore").entered();
        snapshot.check_version()?;
        let version = snapshot.version;
        let count = snapshot.entries.len();
        for (user_id, state) in snapshot.entries {
            self.store.set(&user_id, state);
        }
        self.evict_over_capacity(None);
        events::snapshot_restored(count, version);
        Ok(count)
    }

    /// Snapshot and write to `path`.
    pub fn save_snapshot(&self, path: &Path) -> RapportResult<()> {
        persistence::save_snapshot(path, &self.snapshot())
    }

    /// Restore from `path` if it exists. Returns the number of entries loaded.
    pub fn restore_from(&self, path: &Path) -> RapportResult<usize> {
        match persistence::load_snapshot(path)? {
            Some(snapshot) => self.restore(snapshot),
            None => Ok(0),
        }
    }

    // --- Internals ---

    fn reason_for(
        &self,
        state: Option<&GenerationState>,
        force: bool,
        now: DateTime<Utc>,
    ) -> GateReason {
        if force {
            return GateReason::Forced;
        }
        match state {
            None => GateReason::FirstObservation,
            Some(state) => self.evaluate(state, now),
        }
    }

    fn time_until(&self, state: Option<&GenerationState>, now: DateTime<Utc>) -> Duration {
        state
            .and_then(|s| s.elapsed_since_generation(now))
            .map_or(Duration::zero(), |elapsed| {
                (self.config.min_interval() - elapsed).max(Duration::zero())
            })
    }

    fn messages_until(&self, state: Option<&GenerationState>) -> u64 {
        let seen = state.map_or(0, |s| s.messages_since_last_generation);
        self.config.message_threshold.saturating_sub(seen)
    }

    fn evaluate(&self, state: &GenerationState, now: DateTime<Utc>) -> GateReason {
        match (self.time_clear(state, now), self.messages_clear(state)) {
            (true, true) => GateReason::ThresholdsMet,
            (true, false) => GateReason::AwaitingMessages,
            (false, true) => GateReason::AwaitingTime,
            (false, false) => GateReason::AwaitingBoth,
        }
    }

    fn time_clear(&self, state: &GenerationState, now: DateTime<Utc>) -> bool {
        state
            .elapsed_since_generation(now)
            .map_or(true, |elapsed| elapsed >= self.config.min_interval())
    }

    fn messages_clear(&self, state: &GenerationState) -> bool {
        state.messages_since_last_generation >= self.config.message_threshold
    }

    fn evict_over_capacity(&self, protect: Option<&str>) {
        let Some(capacity) = self.config.capacity() else {
            return;
        };
        let removed = eviction::evict_least_recent(&self.store, capacity, protect);
        if removed > 0 {
            self.metrics.record_evictions(removed);
            events::users_evicted(removed, "capacity", self.store.len());
        }
    }
}
