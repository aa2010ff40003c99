/// A bounded mapping from session count to understanding level.
///
/// Implementations are pure: the same input always yields the same output,
/// and every output lies in `[base(), max()]`.
pub trait IUnderstandingCurve: Send + Sync {
    /// Human-readable curve name, used in logs.
    fn name(&self) -> &'static str;

    /// Level for a cumulative session count. Non-positive counts yield `base()`.
    fn level(&self, session_count: i64) -> f64;

    fn base(&self) -> f64;
    fn max(&self) -> f64;
}
