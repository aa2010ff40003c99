//! # rapport-gate
//!
//! Time + volume debounce deciding when a per-user summary regeneration
//! may run. Both gates must clear: enough wall-clock time since the last
//! generation AND enough messages since then.
//!
//! ## Modules
//!
//! - `gate`: `RegenerationGate`, the policy over an injectable store and clock
//! - `store`: `InMemoryGenerationStore` with `DashMap` for per-key atomic updates
//! - `eviction`: Idle sweep and capacity bound
//! - `snapshot`: Serializable copy of all gate state
//! - `persistence`: Atomic snapshot save/load to a JSON file

pub mod eviction;
pub mod gate;
pub mod persistence;
pub mod snapshot;
pub mod store;

pub use gate::RegenerationGate;
pub use persistence::{load_snapshot, save_snapshot};
pub use snapshot::GateSnapshot;
pub use store::InMemoryGenerationStore;
