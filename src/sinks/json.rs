//! JSON encoder: one object per line (JSONL)

use crate::core::{Record, Result, Sink, Value};
use serde_json::Map;
use std::io::Write;

/// Writes each record as a single-line JSON object
///
/// Keys are rendered as strings and sorted; when a key repeats, the later
/// value wins. Compatible with log aggregation tools like ELK, Loki, etc.
pub struct JsonLogger<W> {
    writer: W,
    pretty: bool,
}

impl<W> JsonLogger<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }

    /// Same as [`new`](Self::new) but pretty prints each object
    pub fn new_pretty(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Sink for JsonLogger<W>
where
    W: Send + Sync,
    for<'a> &'a W: Write,
{
    fn emit(&self, record: Record) -> Result<()> {
        let object = to_json(record);
        let mut bytes = if self.pretty {
            serde_json::to_vec_pretty(&object)?
        } else {
            serde_json::to_vec(&object)?
        };
        bytes.push(b'\n');
        (&self.writer).write_all(&bytes)?;
        Ok(())
    }
}

/// Convert a record into a JSON object
pub fn to_json(record: Record) -> serde_json::Value {
    let mut map = Map::with_capacity(record.len());
    for (key, value) in record {
        let key = match key {
            Value::String(s) => s,
            other => other.to_string(),
        };
        map.insert(key, value.to_json_value());
    }
    serde_json::Value::Object(map)
}
