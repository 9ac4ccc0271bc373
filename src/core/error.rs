//! Error types for the logging pipeline

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Nonblocking queue full; the record was dropped
    #[error("Log queue overflow: {capacity} records already buffered")]
    Overflow { capacity: usize },

    /// Admission attempted after shutdown began
    #[error("Logger is stopping")]
    Stopping,

    /// The consumer side of an async logger is gone
    #[error("Failed to send log record to consumer thread")]
    Disconnected,

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error reported by a user supplied sink
    #[error("Sink error: {0}")]
    Sink(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a queue overflow error
    pub fn overflow(capacity: usize) -> Self {
        LoggerError::Overflow { capacity }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a sink error
    pub fn sink<S: Into<String>>(msg: S) -> Self {
        LoggerError::Sink(msg.into())
    }
}
