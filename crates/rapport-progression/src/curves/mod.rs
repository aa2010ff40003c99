mod sqrt_decay;
mod step;

pub use sqrt_decay::SqrtDecayCurve;
pub use step::{StepCurve, StepTable};

/// Round to one decimal place, halves away from zero.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
