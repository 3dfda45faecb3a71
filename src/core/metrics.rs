//! Logger metrics for observability
//!
//! Per-instance counters describing what happened to each message: how many were
//! rendered or suppressed, and which sinks received them.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use ns_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_rendered();
/// metrics.record_suppressed();
///
/// assert_eq!(metrics.rendered_count(), 1);
/// assert_eq!(metrics.suppressed_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Messages that produced a line
    rendered: AtomicU64,

    /// Messages dropped by the enabled flag or the debug gate
    suppressed: AtomicU64,

    /// Lines appended to the message file
    message_writes: AtomicU64,

    /// Lines appended to the event file
    event_writes: AtomicU64,

    /// Lines written to stdout, stderr or the debug channel
    console_writes: AtomicU64,

    /// Writes skipped because a configured file had disappeared
    missing_sink_skips: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            rendered: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            message_writes: AtomicU64::new(0),
            event_writes: AtomicU64::new(0),
            console_writes: AtomicU64::new(0),
            missing_sink_skips: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn rendered_count(&self) -> u64 {
        self.rendered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed_count(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn message_writes(&self) -> u64 {
        self.message_writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn event_writes(&self) -> u64 {
        self.event_writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn console_writes(&self) -> u64 {
        self.console_writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn missing_sink_skips(&self) -> u64 {
        self.missing_sink_skips.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_rendered(&self) -> u64 {
        self.rendered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_message_write(&self) -> u64 {
        self.message_writes.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_event_write(&self) -> u64 {
        self.event_writes.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_console_write(&self) -> u64 {
        self.console_writes.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_missing_sink(&self) -> u64 {
        self.missing_sink_skips.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of level calls that were suppressed, as a percentage (0.0 - 100.0)
    pub fn suppression_rate(&self) -> f64 {
        let suppressed = self.suppressed_count();
        let total = suppressed + self.rendered_count();
        if total == 0 {
            return 0.0;
        }
        (suppressed as f64 / total as f64) * 100.0
    }
}
