//! InMemoryGenerationStore: concurrent per-user state via DashMap.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use rapport_core::traits::IGenerationStore;
use rapport_core::GenerationState;

/// Thread-safe generation state store using `DashMap`.
///
/// `upsert` runs its closure while holding the shard write lock for the key,
/// so concurrent increments for one user never lose updates.
#[derive(Debug, Default)]
pub struct InMemoryGenerationStore {
    entries: DashMap<String, GenerationState>,
}

impl InMemoryGenerationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IGenerationStore for InMemoryGenerationStore {
    fn get(&self, user_id: &str) -> Option<GenerationState> {
        self.entries.get(user_id).map(|r| r.clone())
    }

    fn set(&self, user_id: &str, state: GenerationState) {
        self.entries.insert(user_id.to_string(), state);
    }

    fn delete(&self, user_id: &str) -> Option<GenerationState> {
        self.entries.remove(user_id).map(|(_, v)| v)
    }

    fn upsert(
        &self,
        user_id: &str,
        init: GenerationState,
        apply: &mut dyn FnMut(&mut GenerationState),
    ) -> (GenerationState, bool) {
        // Fast path avoids allocating the key for known users.
        if let Some(mut existing) = self.entries.get_mut(user_id) {
            apply(existing.value_mut());
            return (existing.clone(), false);
        }

        match self.entries.entry(user_id.to_string()) {
            // Another thread inserted between the two lookups.
            Entry::Occupied(mut occupied) => {
                apply(occupied.get_mut());
                (occupied.get().clone(), false)
            }
            Entry::Vacant(vacant) => {
                let mut state = init;
                apply(&mut state);
                let snapshot = state.clone();
                vacant.insert(state);
                (snapshot, true)
            }
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn user_ids(&self) -> Vec<String> {
        self.entries.iter().map(|r| r.key().clone()).collect()
    }

    fn entries(&self) -> Vec<(String, GenerationState)> {
        self.entries
            .iter()
            .map(|r| (r.key().clone(), r.value().clone()))
            .collect()
    }

    fn retain(&self, keep: &mut dyn FnMut(&str, &GenerationState) -> bool) -> usize {
        let mut removed = 0;
        self.entries.retain(|user_id, state| {
            let kept = keep(user_id, state);
            if !kept {
                removed += 1;
            }
            kept
        });
        removed
    }
}
