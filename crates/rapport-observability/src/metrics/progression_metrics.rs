use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Level query counts.
#[derive(Debug, Default)]
pub struct ProgressionMetrics {
    level_queries: AtomicU64,
    capped_results: AtomicU64,
    cache_hits: AtomicU64,
}

impl ProgressionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one level computation; `capped` when the result sat at max.
    pub fn record_level(&self, capped: bool) {
        self.level_queries.fetch_add(1, Ordering::Relaxed);
        if capped {
            self.capped_results.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> ProgressionMetricsSnapshot {
        ProgressionMetricsSnapshot {
            level_queries: self.level_queries.load(Ordering::Relaxed),
            capped_results: self.capped_results.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`ProgressionMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionMetricsSnapshot {
    pub level_queries: u64,
    pub capped_results: u64,
    pub cache_hits: u64,
}
