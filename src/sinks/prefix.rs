//! Plain `key=value` encoder with no quoting or escaping

use crate::core::{Record, Result, Sink};
use std::fmt::Write as _;
use std::io::Write;

/// Writes each record as `k=v k2=v2` followed by a newline
///
/// Keys and values are rendered with their `Display` form as-is. Unlike
/// [`LogfmtLogger`](super::LogfmtLogger) nothing is quoted, so the output is
/// meant for people rather than parsers. Each record is one `write_all`.
///
/// # Example
///
/// ```
/// use rust_kv_logger::{PrefixLogger, Sink, SyncWriter, record};
///
/// let logger = PrefixLogger::new(SyncWriter::new(Vec::new()));
/// logger
///     .emit(record!("question", "what is the meaning of life?", "answer", 42))
///     .unwrap();
///
/// let bytes = logger.into_inner().into_inner();
/// assert_eq!(bytes, b"question=what is the meaning of life? answer=42\n");
/// ```
pub struct PrefixLogger<W> {
    writer: W,
}

impl<W> PrefixLogger<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Sink for PrefixLogger<W>
where
    W: Send + Sync,
    for<'a> &'a W: Write,
{
    fn emit(&self, record: Record) -> Result<()> {
        let mut line = encode(&record);
        line.push('\n');
        (&self.writer).write_all(line.as_bytes())?;
        Ok(())
    }
}

/// Render a record as space-separated `key=value` pairs
pub fn encode(record: &Record) -> String {
    let mut out = String::with_capacity(record.len() * 16);
    for (i, (key, value)) in record.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}={}", key, value);
    }
    out
}
