//! Macros for building and emitting records from flat key/value lists.
//!
//! # Examples
//!
//! ```
//! use rust_kv_logger::prelude::*;
//! use rust_kv_logger::{emit, record};
//!
//! let record = record!("method", "GET", "status", 200);
//! assert_eq!(record.to_string(), "method=GET status=200");
//!
//! let logger = SwapLogger::default();
//! emit!(logger, "event", "request", "elapsed_ms", 12).unwrap();
//! ```

/// Build a [`Record`](crate::Record) from `key, value, ...` arguments.
///
/// A trailing key without a value is padded with
/// [`Value::Missing`](crate::Value::Missing).
///
/// # Examples
///
/// ```
/// use rust_kv_logger::{record, Value};
///
/// let record = record!("user", "alice", "orphan");
/// assert_eq!(record.get("orphan"), Some(&Value::Missing));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    ($($kv:expr),+ $(,)?) => {
        $crate::Record::from_keyvals(::std::vec![$($crate::Value::from($kv)),+])
    };
}

/// Build a record and emit it through any [`Sink`](crate::Sink).
///
/// Evaluates to the `Result` returned by the sink.
///
/// # Examples
///
/// ```
/// use rust_kv_logger::{emit, NopSink};
///
/// emit!(NopSink, "k", "v").unwrap();
/// ```
#[macro_export]
macro_rules! emit {
    ($logger:expr, $($kv:expr),+ $(,)?) => {
        $crate::Sink::emit(&$logger, $crate::record!($($kv),+))
    };
}
