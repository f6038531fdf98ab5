//! Counters for indexing and search activity.
//!
//! The tracker is cheap to clone and shared between the indexing callback
//! and the query executor, so both sides report into the same totals.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared metrics for one search index.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    objects_indexed_total: Arc<AtomicU64>,
    objects_skipped_total: Arc<AtomicU64>,
    malformed_recipients_total: Arc<AtomicU64>,
    searches_total: Arc<AtomicU64>,
    truncated_searches_total: Arc<AtomicU64>,
    results_delivered_total: Arc<AtomicU64>,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            objects_indexed_total: Arc::new(AtomicU64::new(0)),
            objects_skipped_total: Arc::new(AtomicU64::new(0)),
            malformed_recipients_total: Arc::new(AtomicU64::new(0)),
            searches_total: Arc::new(AtomicU64::new(0)),
            truncated_searches_total: Arc::new(AtomicU64::new(0)),
            results_delivered_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track the outcome of one indexing callback.
    pub fn track_indexing(&self, kind: &str, indexed: bool) {
        if indexed {
            self.objects_indexed_total.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(kind = %kind, "Object indexed");
        } else {
            self.objects_skipped_total.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(kind = %kind, "Object not indexed");
        }
    }

    /// Track a recipient id that failed phone number parsing.
    pub fn track_malformed_recipient(&self) {
        self.malformed_recipients_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Track a completed search.
    pub fn track_search(&self, duration_ms: u128, delivered: usize, truncated: bool) {
        self.searches_total.fetch_add(1, Ordering::Relaxed);
        self.results_delivered_total
            .fetch_add(delivered as u64, Ordering::Relaxed);
        if truncated {
            self.truncated_searches_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::debug!(
            duration_ms = duration_ms,
            delivered = delivered,
            truncated = truncated,
            "Search completed"
        );
    }

    /// Get the total number of objects given a content string.
    pub fn objects_indexed_total(&self) -> u64 {
        self.objects_indexed_total.load(Ordering::Relaxed)
    }

    /// Get the total number of objects left out of the index.
    pub fn objects_skipped_total(&self) -> u64 {
        self.objects_skipped_total.load(Ordering::Relaxed)
    }

    /// Get the total number of malformed recipient ids seen.
    pub fn malformed_recipients_total(&self) -> u64 {
        self.malformed_recipients_total.load(Ordering::Relaxed)
    }

    /// Get the total number of searches.
    pub fn searches_total(&self) -> u64 {
        self.searches_total.load(Ordering::Relaxed)
    }

    /// Get the number of searches that hit the result cap.
    pub fn truncated_searches_total(&self) -> u64 {
        self.truncated_searches_total.load(Ordering::Relaxed)
    }

    /// Get the total number of results handed to consumers.
    pub fn results_delivered_total(&self) -> u64 {
        self.results_delivered_total.load(Ordering::Relaxed)
    }

    /// Summary of all counters.
    pub fn summary(&self) -> String {
        format!(
            "Metrics Summary:\n\
             Objects Indexed: {}\n\
             Objects Skipped: {}\n\
             Malformed Recipients: {}\n\
             Searches: {}\n\
             Truncated Searches: {}\n\
             Results Delivered: {}",
            self.objects_indexed_total(),
            self.objects_skipped_total(),
            self.malformed_recipients_total(),
            self.searches_total(),
            self.truncated_searches_total(),
            self.results_delivered_total(),
        )
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    /// Finish the timer and return the elapsed time in milliseconds.
    pub fn finish(self) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        tracing::trace!(
            operation = %self.operation,
            duration_ms = duration_ms,
            "Operation completed"
        );

        duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_tracker_creation() {
        let tracker = MetricsTracker::new();
        assert_eq!(tracker.objects_indexed_total(), 0);
        assert_eq!(tracker.objects_skipped_total(), 0);
        assert_eq!(tracker.malformed_recipients_total(), 0);
        assert_eq!(tracker.searches_total(), 0);
    }

    #[test]
    fn test_track_indexing() {
        let tracker = MetricsTracker::new();

        tracker.track_indexing("message", true);
        tracker.track_indexing("other", false);
        tracker.track_indexing("group", true);

        assert_eq!(tracker.objects_indexed_total(), 2);
        assert_eq!(tracker.objects_skipped_total(), 1);
    }

    #[test]
    fn test_track_search() {
        let tracker = MetricsTracker::new();

        tracker.track_search(3, 10, false);
        tracker.track_search(7, 500, true);

        assert_eq!(tracker.searches_total(), 2);
        assert_eq!(tracker.truncated_searches_total(), 1);
        assert_eq!(tracker.results_delivered_total(), 510);
    }

    #[test]
    fn test_clones_share_counters() {
        let tracker = MetricsTracker::new();
        let clone = tracker.clone();

        clone.track_malformed_recipient();
        assert_eq!(tracker.malformed_recipients_total(), 1);
    }

    #[test]
    fn test_summary() {
        let tracker = MetricsTracker::new();
        tracker.track_indexing("message", true);
        tracker.track_search(1, 1, false);

        let summary = tracker.summary();
        assert!(summary.contains("Objects Indexed: 1"));
        assert!(summary.contains("Searches: 1"));
    }
}
