mod clock;
mod generation_store;
mod understanding_curve;

pub use clock::IClock;
pub use generation_store::IGenerationStore;
pub use understanding_curve::IUnderstandingCurve;
