//! Observability stubs (process-local counters)

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics handle for recording counters
#[derive(Debug, Default)]
pub struct Metrics {
    operations_computed: AtomicU64,
    records_appended: AtomicU64,
    append_failures: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operation_computed(&self) {
        self.operations_computed.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "operations_computed", "Metric incremented");
    }

    pub fn record_appended(&self) {
        self.records_appended.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "records_appended", "Metric incremented");
    }

    pub fn append_failed(&self) {
        self.append_failures.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "append_failures", "Metric incremented");
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            operations_computed: self.operations_computed.load(Ordering::Relaxed),
            records_appended: self.records_appended.load(Ordering::Relaxed),
            append_failures: self.append_failures.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    pub operations_computed: u64,
    pub records_appended: u64,
    pub append_failures: u64,
}
