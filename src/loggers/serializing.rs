//! Mutual-exclusion wrappers for sinks and raw writers

use crate::core::{Record, Result, Sink};
use parking_lot::Mutex;
use std::io::{self, Write};

/// Serializes calls into the wrapped sink
///
/// No two `emit` calls reach the inner sink at the same time; the lock is
/// released on every exit path, including errors and panics.
pub struct SerializingLogger<S> {
    inner: Mutex<S>,
}

impl<S: Sink> SerializingLogger<S> {
    pub fn new(sink: S) -> Self {
        Self {
            inner: Mutex::new(sink),
        }
    }

    pub fn into_inner(self) -> S {
        self.inner.into_inner()
    }
}

impl<S: Sink> Sink for SerializingLogger<S> {
    fn emit(&self, record: Record) -> Result<()> {
        let sink = self.inner.lock();
        sink.emit(record)
    }
}

/// Serializes writes into a raw byte stream
///
/// `&SyncWriter<W>` implements [`Write`]. Each `write` call hands the whole
/// buffer to the inner writer under the lock, so an encoder that issues a
/// single `write_all` per record never interleaves with another encoder
/// sharing the same writer.
///
/// # Example
///
/// ```
/// use rust_kv_logger::{LogfmtLogger, Record, Sink, SyncWriter};
///
/// let logger = LogfmtLogger::new(SyncWriter::new(Vec::new()));
/// logger.emit(Record::new().with("k", "v")).unwrap();
///
/// let bytes = logger.into_inner().into_inner();
/// assert_eq!(bytes, b"k=v\n");
/// ```
#[derive(Debug, Default)]
pub struct SyncWriter<W> {
    inner: Mutex<W>,
}

impl<W: Write> SyncWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.inner.into_inner()
    }
}

impl<W: Write> Write for &SyncWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut writer = self.inner.lock();
        writer.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.lock().flush()
    }
}

impl<W: Write> Write for SyncWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Write::write(&mut &*self, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Write::flush(&mut &*self)
    }
}
