//! Hot-swappable logger

use crate::core::{Record, Result, Sink};
use arc_swap::ArcSwapOption;
use std::fmt;
use std::sync::Arc;

/// Forwards records to whichever sink is currently installed
///
/// The sink lives in an atomically replaceable cell: every `emit` observes
/// either the old or the new sink of a concurrent [`swap`](Self::swap),
/// never a partially installed one, and readers never contend on a lock.
/// An empty logger accepts and discards every record.
///
/// # Example
///
/// ```
/// use rust_kv_logger::{NopSink, Record, Sink, SwapLogger};
///
/// let logger = SwapLogger::default();
/// assert!(logger.emit(Record::new().with("k", "v")).is_ok());
///
/// logger.install(NopSink);
/// assert!(logger.is_installed());
/// ```
pub struct SwapLogger {
    sink: ArcSwapOption<Box<dyn Sink>>,
}

impl SwapLogger {
    /// Create a logger with `sink` already installed
    pub fn new<S: Sink + 'static>(sink: S) -> Self {
        let logger = Self::default();
        logger.install(sink);
        logger
    }

    /// Atomically replace the installed sink; `None` uninstalls it
    pub fn swap(&self, sink: Option<Box<dyn Sink>>) {
        self.sink.store(sink.map(Arc::new));
    }

    /// Install `sink`, replacing whatever was there
    pub fn install<S: Sink + 'static>(&self, sink: S) {
        self.swap(Some(Box::new(sink)));
    }

    /// Uninstall the current sink
    pub fn clear(&self) {
        self.swap(None);
    }

    pub fn is_installed(&self) -> bool {
        self.sink.load().is_some()
    }
}

impl Default for SwapLogger {
    fn default() -> Self {
        Self {
            sink: ArcSwapOption::empty(),
        }
    }
}

impl Sink for SwapLogger {
    fn emit(&self, record: Record) -> Result<()> {
        // Own a reference for the duration of the call so a concurrent swap
        // can't free the sink underneath us.
        match self.sink.load_full() {
            Some(sink) => sink.emit(record),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for SwapLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwapLogger")
            .field("installed", &self.is_installed())
            .finish()
    }
}
