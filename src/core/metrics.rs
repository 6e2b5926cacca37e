//! Logger metrics for observability
//!
//! Counters for monitoring queue health: accepted lines, overload drops,
//! queue-full events, and post-shutdown bypass writes. Overload drops are
//! silent at the call site; these counters are how they become visible.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines accepted into the queue
    enqueued: AtomicU64,

    /// Lines dropped because the queue was full
    dropped: AtomicU64,

    /// Number of times the queue was observed full
    queue_full_events: AtomicU64,

    /// Direct synchronous writes taken after shutdown began
    bypass_writes: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            enqueued: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
            queue_full_events: AtomicU64::new(0),
            bypass_writes: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn enqueued_count(&self) -> u64 {
        self.enqueued.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn queue_full_events(&self) -> u64 {
        self.queue_full_events.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn bypass_write_count(&self) -> u64 {
        self.bypass_writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_enqueued(&self) -> u64 {
        self.enqueued.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.queue_full_events.fetch_add(1, Ordering::Relaxed);
        self.dropped.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_bypass_write(&self) -> u64 {
        self.bypass_writes.fetch_add(1, Ordering::Relaxed)
    }

    /// Drop rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been logged yet.
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.dropped_count() as f64;
        let total = self.enqueued_count() as f64 + dropped;
        if total == 0.0 {
            0.0
        } else {
            (dropped / total) * 100.0
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.enqueued.store(0, Ordering::Relaxed);
        self.dropped.store(0, Ordering::Relaxed);
        self.queue_full_events.store(0, Ordering::Relaxed);
        self.bypass_writes.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_start_at_zero() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.enqueued_count(), 0);
        assert_eq!(metrics.dropped_count(), 0);
        assert_eq!(metrics.queue_full_events(), 0);
        assert_eq!(metrics.bypass_write_count(), 0);
    }

    #[test]
    fn test_record_dropped_tracks_queue_full() {
        let metrics = LoggerMetrics::new();
        metrics.record_dropped();
        metrics.record_dropped();
        assert_eq!(metrics.dropped_count(), 2);
        assert_eq!(metrics.queue_full_events(), 2);
    }

    #[test]
    fn test_drop_rate() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.drop_rate(), 0.0);

        for _ in 0..90 {
            metrics.record_enqueued();
        }
        for _ in 0..10 {
            metrics.record_dropped();
        }
        let rate = metrics.drop_rate();
        assert!((9.9..=10.1).contains(&rate), "Drop rate was {}", rate);
    }

    #[test]
    fn test_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_enqueued();
        metrics.record_dropped();
        metrics.record_bypass_write();
        metrics.reset();
        assert_eq!(metrics.enqueued_count(), 0);
        assert_eq!(metrics.dropped_count(), 0);
        assert_eq!(metrics.bypass_write_count(), 0);
    }
}
