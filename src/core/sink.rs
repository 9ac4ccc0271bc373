//! Sink trait: the terminal end of every logger chain

use super::{error::Result, record::Record};
use std::sync::Arc;

/// Anything that accepts a record and reports success or failure
///
/// The contract itself imposes no concurrency discipline. Wrap a sink in
/// [`SerializingLogger`](crate::SerializingLogger) when its writes must not
/// interleave, or in one of the dispatching loggers to move it off the
/// producer's thread.
///
/// # Example
///
/// ```
/// use rust_kv_logger::{Record, Result, Sink};
///
/// struct StderrSink;
///
/// impl Sink for StderrSink {
///     fn emit(&self, record: Record) -> Result<()> {
///         eprintln!("{}", record);
///         Ok(())
///     }
/// }
/// ```
pub trait Sink: Send + Sync {
    fn emit(&self, record: Record) -> Result<()>;
}

/// Discards every record and always succeeds
#[derive(Debug, Clone, Copy, Default)]
pub struct NopSink;

impl Sink for NopSink {
    fn emit(&self, _record: Record) -> Result<()> {
        Ok(())
    }
}

/// Adapter turning a closure into a [`Sink`]
pub struct SinkFn<F>(pub F);

impl<F> Sink for SinkFn<F>
where
    F: Fn(Record) -> Result<()> + Send + Sync,
{
    fn emit(&self, record: Record) -> Result<()> {
        (self.0)(record)
    }
}

/// Wrap a closure as a sink
pub fn sink_fn<F>(f: F) -> SinkFn<F>
where
    F: Fn(Record) -> Result<()> + Send + Sync,
{
    SinkFn(f)
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn emit(&self, record: Record) -> Result<()> {
        (**self).emit(record)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn emit(&self, record: Record) -> Result<()> {
        (**self).emit(record)
    }
}

impl<S: Sink + ?Sized> Sink for &S {
    fn emit(&self, record: Record) -> Result<()> {
        (**self).emit(record)
    }
}
