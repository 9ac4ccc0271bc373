//! logfmt encoder: `key=value key2="spaced value"`

use crate::core::{Record, Result, Sink, Value};
use std::fmt::Write as _;
use std::io::Write;

/// Writes each record as one logfmt line
///
/// The whole line goes out in a single `write_all`, so wrapping the writer
/// in a [`SyncWriter`](crate::SyncWriter) is enough to keep lines from
/// concurrent producers intact. Any writer usable through a shared reference
/// works: `SyncWriter`, `File`, `Stdout`, `Stderr`, `TcpStream`.
pub struct LogfmtLogger<W> {
    writer: W,
}

impl<W> LogfmtLogger<W> {
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

impl<W> Sink for LogfmtLogger<W>
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

/// Encode a record as a logfmt line, without the trailing newline
pub fn encode(record: &Record) -> String {
    let mut out = String::with_capacity(record.len() * 16);
    for (i, (key, value)) in record.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write_key(&mut out, key);
        out.push('=');
        write_value(&mut out, value);
    }
    out
}

fn write_key(out: &mut String, key: &Value) {
    let key = key.to_string();
    if key.is_empty() {
        out.push('_');
        return;
    }
    // Keys are never quoted; characters that would break parsing become '_'
    out.extend(key.chars().map(|c| {
        if c <= ' ' || c == '=' || c == '"' || c.is_control() {
            '_'
        } else {
            c
        }
    }));
}

fn write_value(out: &mut String, value: &Value) {
    let text = value.to_string();
    if !needs_quotes(&text) {
        out.push_str(&text);
        return;
    }

    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

fn needs_quotes(text: &str) -> bool {
    text.is_empty()
        || text
            .chars()
            .any(|c| c <= ' ' || c == '=' || c == '"' || c == '\\' || c.is_control())
}
