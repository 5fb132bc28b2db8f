//! Logger metrics for observability
//!
//! Counters describing what happened to log calls: queued, written,
//! filtered out, rejected after shutdown, or lost to a failing sink.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use game_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_enqueued();
/// metrics.record_written();
///
/// assert_eq!(metrics.enqueued(), 1);
/// assert_eq!(metrics.written(), 1);
/// assert_eq!(metrics.pending(), 0);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records accepted into the queue
    enqueued: AtomicU64,

    /// Records handed to a sink without error
    written: AtomicU64,

    /// Calls dropped by the minimum-level gate
    filtered: AtomicU64,

    /// Calls made after shutdown started
    rejected: AtomicU64,

    /// Sink writes that returned an error
    write_failures: AtomicU64,

    /// File-targeted calls made while file logging was disabled
    misuse_warnings: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            enqueued: AtomicU64::new(0),
            written: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            rejected: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            misuse_warnings: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn enqueued(&self) -> u64 {
        self.enqueued.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn rejected(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn misuse_warnings(&self) -> u64 {
        self.misuse_warnings.load(Ordering::Relaxed)
    }

    /// Records queued but not yet accounted for as written or failed.
    pub fn pending(&self) -> u64 {
        self.enqueued()
            .saturating_sub(self.written() + self.write_failures())
    }

    #[inline]
    pub fn record_enqueued(&self) -> u64 {
        self.enqueued.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_rejected(&self) -> u64 {
        self.rejected.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_misuse(&self) -> u64 {
        self.misuse_warnings.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            enqueued: AtomicU64::new(self.enqueued()),
            written: AtomicU64::new(self.written()),
            filtered: AtomicU64::new(self.filtered()),
            rejected: AtomicU64::new(self.rejected()),
            write_failures: AtomicU64::new(self.write_failures()),
            misuse_warnings: AtomicU64::new(self.misuse_warnings()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.enqueued(), 0);
        assert_eq!(metrics.written(), 0);
        assert_eq!(metrics.filtered(), 0);
        assert_eq!(metrics.rejected(), 0);
        assert_eq!(metrics.write_failures(), 0);
        assert_eq!(metrics.misuse_warnings(), 0);
    }

    #[test]
    fn test_record_returns_previous_value() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_filtered(), 0);
        assert_eq!(metrics.record_filtered(), 1);
        assert_eq!(metrics.filtered(), 2);
    }

    #[test]
    fn test_pending() {
        let metrics = LoggerMetrics::new();
        for _ in 0..5 {
            metrics.record_enqueued();
        }
        metrics.record_written();
        metrics.record_written();
        metrics.record_write_failure();
        assert_eq!(metrics.pending(), 2);
    }

    #[test]
    fn test_metrics_clone() {
        let metrics = LoggerMetrics::new();
        metrics.record_enqueued();
        metrics.record_written();

        let snapshot = metrics.clone();
        assert_eq!(snapshot.written(), 1);

        // Original and clone are independent
        metrics.record_written();
        assert_eq!(metrics.written(), 2);
        assert_eq!(snapshot.written(), 1);
    }
}
