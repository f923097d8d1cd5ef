use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic process-lifetime counter
#[derive(Debug, Default)]
pub struct Counter(AtomicU64);

impl Counter {
    /// Increments the counter and returns the new value
    pub fn increment(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Request and error counters, owned by the application state rather than
/// living in process globals. Values are reported through log events; there
/// is no scrape endpoint.
#[derive(Debug, Default)]
pub struct Metrics {
    pub catalog_requests: Counter,
    pub course_detail_requests: Counter,
    pub add_course_requests: Counter,
    pub add_course_errors: Counter,
    pub storage_errors: Counter,
}
