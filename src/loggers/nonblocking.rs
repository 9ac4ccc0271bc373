//! Nonblocking logger with overflow detection and cooperative shutdown
//!
//! Producers never wait: a full queue is reported as
//! [`LoggerError::Overflow`] and the record is dropped. Shutdown runs in
//! three observable phases:
//!
//! 1. `Running`: records are admitted while the queue has room.
//! 2. `Stopping`: entered on the first [`NonblockingLogger::stop`]. No new
//!    records are admitted; the consumer keeps draining what was queued.
//! 3. `Stopped`: the queue is empty and every admitted record has been
//!    handed to the sink. Terminal.
//!
//! Each transition out of `Running` fires a one-shot [`Signal`].

use super::consumer;
use crate::core::signal::{signal, Trigger};
use crate::core::{
    DispatchConfig, LoggerError, LoggerMetrics, Record, Result, Signal, Sink,
    DEFAULT_SHUTDOWN_TIMEOUT,
};
use crossbeam_channel::{bounded, Sender, TrySendError};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

/// Lifecycle of a [`NonblockingLogger`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LifecycleState {
    Running = 0,
    Stopping = 1,
    Stopped = 2,
}

impl LifecycleState {
    fn from_u8(v: u8) -> Self {
        match v {
            0 => LifecycleState::Running,
            1 => LifecycleState::Stopping,
            _ => LifecycleState::Stopped,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LifecycleState::Running => "running",
            LifecycleState::Stopping => "stopping",
            LifecycleState::Stopped => "stopped",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// Dispatches records to a consumer thread without ever blocking the caller
///
/// # Example
///
/// ```
/// use rust_kv_logger::{LifecycleState, NonblockingLogger, NopSink, Record, Sink};
///
/// let logger = NonblockingLogger::new(NopSink, 128).unwrap();
/// logger.emit(Record::new().with("k", "v")).unwrap();
///
/// logger.stop();
/// logger.stopped().wait();
/// assert_eq!(logger.state(), LifecycleState::Stopped);
/// ```
pub struct NonblockingLogger {
    /// Admission slot; emptied exactly once, by the first `stop`
    admission: RwLock<Option<Sender<Record>>>,
    state: Arc<AtomicU8>,
    stopping_trigger: Trigger,
    stopping: Signal,
    stopped: Signal,
    handle: Mutex<Option<JoinHandle<()>>>,
    metrics: Arc<LoggerMetrics>,
    capacity: usize,
}

impl NonblockingLogger {
    /// Spawn a consumer for `sink` behind a queue of `capacity` records
    pub fn new<S: Sink + 'static>(sink: S, capacity: usize) -> Result<Self> {
        Self::with_config(sink, DispatchConfig::new(capacity))
    }

    pub fn with_config<S: Sink + 'static>(sink: S, config: DispatchConfig) -> Result<Self> {
        config.validate()?;

        let (sender, receiver) = bounded(config.capacity);
        let (stopping_trigger, stopping) = signal();
        let (stopped_trigger, stopped) = signal();
        let state = Arc::new(AtomicU8::new(LifecycleState::Running as u8));
        let metrics = Arc::new(LoggerMetrics::new());

        let consumer_state = Arc::clone(&state);
        let handle = consumer::spawn(
            &config.thread_name,
            sink,
            receiver,
            Arc::clone(&metrics),
            move || {
                consumer_state.store(LifecycleState::Stopped as u8, Ordering::Release);
                stopped_trigger.fire();
            },
        )?;

        Ok(Self {
            admission: RwLock::new(Some(sender)),
            state,
            stopping_trigger,
            stopping,
            stopped,
            handle: Mutex::new(Some(handle)),
            metrics,
            capacity: config.capacity,
        })
    }

    /// Begin shutdown
    ///
    /// The first call moves the logger to `Stopping`, fires the stopping
    /// signal and closes admission; the consumer then drains the queue and
    /// fires the stopped signal. Later calls do nothing. Never waits for the
    /// drain; use [`stopped`](Self::stopped) for that.
    pub fn stop(&self) {
        let transitioned = self
            .state
            .compare_exchange(
                LifecycleState::Running as u8,
                LifecycleState::Stopping as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok();
        if !transitioned {
            return;
        }

        self.stopping_trigger.fire();

        // Dropping the only sender lets the consumer exit once it runs dry
        drop(self.admission.write().take());
    }

    pub fn state(&self) -> LifecycleState {
        LifecycleState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Fires when the logger enters `Stopping`
    pub fn stopping(&self) -> Signal {
        self.stopping.clone()
    }

    /// Fires when the logger enters `Stopped`
    pub fn stopped(&self) -> Signal {
        self.stopped.clone()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    fn reject(&self) -> LoggerError {
        self.metrics.record_rejected();
        LoggerError::Stopping
    }
}

impl Sink for NonblockingLogger {
    fn emit(&self, record: Record) -> Result<()> {
        if self.state() != LifecycleState::Running {
            return Err(self.reject());
        }

        // Only `stop` ever takes the write lock, so failing to get a read
        // lock means shutdown is underway.
        let Some(admission) = self.admission.try_read() else {
            return Err(self.reject());
        };
        let Some(sender) = admission.as_ref() else {
            return Err(self.reject());
        };

        match sender.try_send(record) {
            Ok(()) => {
                self.metrics.record_enqueued();
                Ok(())
            }
            Err(TrySendError::Full(_)) => {
                self.metrics.record_overflow();
                Err(LoggerError::overflow(self.capacity))
            }
            Err(TrySendError::Disconnected(_)) => Err(self.reject()),
        }
    }
}

impl Drop for NonblockingLogger {
    fn drop(&mut self) {
        self.stop();

        if let Some(handle) = self.handle.lock().take() {
            consumer::join_with_timeout(handle, DEFAULT_SHUTDOWN_TIMEOUT);
        }
    }
}
