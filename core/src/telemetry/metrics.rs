use log::warn;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};

/// Counters for queries answered by the hosting layer.
pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub queries: usize,
    pub rejected: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    // Plain counters stay consistent even if a holder panicked.
    fn counters(&self) -> MutexGuard<'_, MetricsSnapshot> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("metrics lock poisoned; continuing with recovered counters");
            poisoned.into_inner()
        })
    }

    pub fn record_query(&self) {
        self.counters().queries += 1;
    }

    pub fn record_rejected(&self) {
        self.counters().rejected += 1;
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        *self.counters()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
