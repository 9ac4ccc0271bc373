//! Construction-time configuration for dispatching loggers

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default queue capacity
pub const DEFAULT_CAPACITY: usize = 1024;

/// Default consumer thread name
pub const DEFAULT_THREAD_NAME: &str = "kv-logger";

/// Default shutdown timeout for consumer cleanup (5 seconds)
///
/// Used when a dispatching logger is dropped without an explicit shutdown.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration shared by [`AsyncLogger`](crate::AsyncLogger) and
/// [`NonblockingLogger`](crate::NonblockingLogger)
///
/// # Example
///
/// ```
/// use rust_kv_logger::DispatchConfig;
///
/// let config = DispatchConfig::default()
///     .with_capacity(256)
///     .with_thread_name("audit-log");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Fixed queue capacity; must be positive
    pub capacity: usize,

    /// Name given to the consumer thread
    pub thread_name: String,
}

impl DispatchConfig {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(LoggerError::config(
                "DispatchConfig",
                "queue capacity must be a positive integer",
            ));
        }
        if self.thread_name.trim().is_empty() {
            return Err(LoggerError::config(
                "DispatchConfig",
                "consumer thread name must not be empty",
            ));
        }
        // std::thread::Builder panics on interior NUL bytes
        if self.thread_name.contains('\0') {
            return Err(LoggerError::config(
                "DispatchConfig",
                "consumer thread name must not contain NUL",
            ));
        }
        Ok(())
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            thread_name: DEFAULT_THREAD_NAME.to_string(),
        }
    }
}
