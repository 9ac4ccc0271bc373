//! Core record types, the sink contract and shared plumbing

pub mod config;
pub mod error;
pub mod metrics;
pub mod record;
pub mod signal;
pub mod sink;
pub mod value;

pub use config::{DispatchConfig, DEFAULT_CAPACITY, DEFAULT_SHUTDOWN_TIMEOUT, DEFAULT_THREAD_NAME};
pub use error::{LoggerError, Result};
pub use metrics::LoggerMetrics;
pub use record::Record;
pub use signal::Signal;
pub use sink::{sink_fn, NopSink, Sink, SinkFn};
pub use value::{Value, MISSING_VALUE};
