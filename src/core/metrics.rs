//! Dispatch metrics for observability
//!
//! Counters shared between the producer side and the consumer thread of a
//! dispatching logger. Sink failures never reach producers, so these
//! counters are the only place they become visible.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for a dispatching logger
///
/// # Example
///
/// ```
/// use rust_kv_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_enqueued();
/// metrics.record_delivered();
///
/// assert_eq!(metrics.enqueued(), 1);
/// assert_eq!(metrics.pending(), 0);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records admitted to the queue
    enqueued: AtomicU64,

    /// Records the sink accepted
    delivered: AtomicU64,

    /// Records the sink rejected or panicked on
    sink_errors: AtomicU64,

    /// Records dropped because the queue was full
    overflowed: AtomicU64,

    /// Records refused because shutdown had begun
    rejected: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            enqueued: AtomicU64::new(0),
            delivered: AtomicU64::new(0),
            sink_errors: AtomicU64::new(0),
            overflowed: AtomicU64::new(0),
            rejected: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn enqueued(&self) -> u64 {
        self.enqueued.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_errors(&self) -> u64 {
        self.sink_errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn overflowed(&self) -> u64 {
        self.overflowed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn rejected(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }

    /// Records admitted but not yet handed to the sink
    pub fn pending(&self) -> u64 {
        self.enqueued()
            .saturating_sub(self.delivered())
            .saturating_sub(self.sink_errors())
    }

    #[inline]
    pub fn record_enqueued(&self) -> u64 {
        self.enqueued.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_sink_error(&self) -> u64 {
        self.sink_errors.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_overflow(&self) -> u64 {
        self.overflowed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_rejected(&self) -> u64 {
        self.rejected.fetch_add(1, Ordering::Relaxed)
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
            delivered: AtomicU64::new(self.delivered()),
            sink_errors: AtomicU64::new(self.sink_errors()),
            overflowed: AtomicU64::new(self.overflowed()),
            rejected: AtomicU64::new(self.rejected()),
        }
    }
}
