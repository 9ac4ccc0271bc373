//! # Rust KV Logger
//!
//! A structured key-value logging pipeline that decouples log producers
//! from a single downstream sink.
//!
//! ## Features
//!
//! - **Hot swapping**: [`SwapLogger`] replaces its sink atomically while in use
//! - **Serialization**: [`SerializingLogger`] and [`SyncWriter`] keep concurrent writes whole
//! - **Asynchronous dispatch**: [`AsyncLogger`] blocks producers on a full queue
//! - **Nonblocking dispatch**: [`NonblockingLogger`] reports overflow instead of
//!   blocking and shuts down in three observable phases

pub mod core;
pub mod loggers;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        sink_fn, DispatchConfig, LoggerError, LoggerMetrics, NopSink, Record, Result, Signal,
        Sink, Value, DEFAULT_SHUTDOWN_TIMEOUT,
    };
    pub use crate::loggers::{
        AsyncLogger, LifecycleState, NonblockingLogger, SerializingLogger, SwapLogger, SyncWriter,
    };
    pub use crate::sinks::{JsonLogger, LogfmtLogger, PrefixLogger};
}

pub use crate::core::{
    sink_fn, DispatchConfig, LoggerError, LoggerMetrics, NopSink, Record, Result, Signal, Sink,
    SinkFn, Value, DEFAULT_CAPACITY, DEFAULT_SHUTDOWN_TIMEOUT, DEFAULT_THREAD_NAME, MISSING_VALUE,
};
pub use loggers::{
    AsyncLogger, LifecycleState, NonblockingLogger, SerializingLogger, SwapLogger, SyncWriter,
};
pub use sinks::{JsonLogger, LogfmtLogger, PrefixLogger};
