mod gate_status;
mod generation_state;
mod progression_step;

pub use gate_status::{GateDecision, GateReason, GateStatus};
pub use generation_state::GenerationState;
pub use progression_step::ProgressionStep;
