use crate::models::GenerationState;

/// Keyed storage for per-user generation state.
///
/// All mutations that depend on the previous value must go through
/// [`upsert`](IGenerationStore::upsert), which implementations guarantee to
/// run atomically with respect to other calls on the same key.
pub trait IGenerationStore: Send + Sync {
    // --- CRUD ---
    fn get(&self, user_id: &str) -> Option<GenerationState>;
    fn set(&self, user_id: &str, state: GenerationState);
    fn delete(&self, user_id: &str) -> Option<GenerationState>;

    /// Apply `apply` to the entry for `user_id`, creating it from `init` if
    /// absent. Returns the updated state and whether the entry was created.
    fn upsert(
        &self,
        user_id: &str,
        init: GenerationState,
        apply: &mut dyn FnMut(&mut GenerationState),
    ) -> (GenerationState, bool);

    // --- Aggregation ---
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn user_ids(&self) -> Vec<String>;
    /// Point-in-time copy of every entry.
    fn entries(&self) -> Vec<(String, GenerationState)>;

    // --- Maintenance ---
    /// Keep only entries for which `keep` returns true. Returns the number removed.
    fn retain(&self, keep: &mut dyn FnMut(&str, &GenerationState) -> bool) -> usize;
}
