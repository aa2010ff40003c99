use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Source of "now" for time-gated policy.
pub trait IClock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

impl<C: IClock + ?Sized> IClock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
