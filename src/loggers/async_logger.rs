//! Asynchronous logger with blocking backpressure

use super::consumer;
use crate::core::{
    DispatchConfig, LoggerError, LoggerMetrics, Record, Result, Sink, DEFAULT_SHUTDOWN_TIMEOUT,
};
use crossbeam_channel::{bounded, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// Hands records to a dedicated consumer thread through a bounded queue
///
/// `emit` returns once the record is queued, not once the sink has seen it.
/// When the queue is full the caller blocks until the consumer makes room.
/// Records queued one after another are delivered in that order. Errors
/// returned by the sink are counted in [`metrics`](Self::metrics) and never
/// reach producers.
///
/// # Example
///
/// ```
/// use rust_kv_logger::{AsyncLogger, NopSink, Record, Sink};
///
/// let logger = AsyncLogger::new(NopSink, 64).unwrap();
/// logger.emit(Record::new().with("event", "started")).unwrap();
/// ```
pub struct AsyncLogger {
    sender: Option<Sender<Record>>,
    handle: Option<JoinHandle<()>>,
    metrics: Arc<LoggerMetrics>,
    capacity: usize,
}

impl AsyncLogger {
    /// Spawn a consumer for `sink` behind a queue of `capacity` records
    pub fn new<S: Sink + 'static>(sink: S, capacity: usize) -> Result<Self> {
        Self::with_config(sink, DispatchConfig::new(capacity))
    }

    pub fn with_config<S: Sink + 'static>(sink: S, config: DispatchConfig) -> Result<Self> {
        config.validate()?;

        let (sender, receiver) = bounded(config.capacity);
        let metrics = Arc::new(LoggerMetrics::new());
        let handle = consumer::spawn(
            &config.thread_name,
            sink,
            receiver,
            Arc::clone(&metrics),
            || {},
        )?;

        Ok(Self {
            sender: Some(sender),
            handle: Some(handle),
            metrics,
            capacity: config.capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Records currently waiting in the queue
    pub fn queued(&self) -> usize {
        self.sender.as_ref().map_or(0, Sender::len)
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Close the queue and wait for the consumer to drain it
    ///
    /// Returns `true` if every queued record was handed to the sink within
    /// `timeout`. Afterwards `emit` fails with [`LoggerError::Disconnected`].
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        drop(self.sender.take());

        match self.handle.take() {
            Some(handle) => consumer::join_with_timeout(handle, timeout),
            None => true,
        }
    }
}

impl Sink for AsyncLogger {
    fn emit(&self, record: Record) -> Result<()> {
        let sender = self.sender.as_ref().ok_or(LoggerError::Disconnected)?;
        sender.send(record).map_err(|_| LoggerError::Disconnected)?;
        self.metrics.record_enqueued();
        Ok(())
    }
}

impl Drop for AsyncLogger {
    fn drop(&mut self) {
        self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);
    }
}
