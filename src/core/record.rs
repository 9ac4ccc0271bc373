//! Log record structure

use super::value::Value;
use std::fmt;

/// One log event: an ordered sequence of key/value pairs
///
/// Keys are not required to be unique and insertion order is preserved
/// all the way to the sink.
///
/// # Example
///
/// ```
/// use rust_kv_logger::{Record, Value};
///
/// let record = Record::from_keyvals(vec!["method".into(), "GET".into(), "status".into()]);
/// assert_eq!(record.len(), 2);
/// assert_eq!(record.get("status"), Some(&Value::Missing));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(Value, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Build a record from a flat `key, value, key, value, ...` list
    ///
    /// An odd-length list gets [`Value::Missing`] padded onto its trailing key.
    pub fn from_keyvals<I>(keyvals: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let mut iter = keyvals.into_iter();
        let mut record = Self::with_capacity(iter.size_hint().0.div_ceil(2));
        while let Some(key) = iter.next() {
            let value = iter.next().unwrap_or(Value::Missing);
            record.fields.push((key, value));
        }
        record
    }

    /// Append a field (builder style)
    #[must_use]
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<Value>,
        V: Into<Value>,
    {
        self.push(key, value);
        self
    }

    /// Append a field
    pub fn push<K, V>(&mut self, key: K, value: V)
    where
        K: Into<Value>,
        V: Into<Value>,
    {
        self.fields.push((key.into(), value.into()));
    }

    pub fn fields(&self) -> &[(Value, Value)] {
        &self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (Value, Value)> {
        self.fields.iter()
    }

    /// First value stored under a string key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(k, _)| k.as_str() == Some(key))
            .map(|(_, v)| v)
    }

    /// Number of key/value pairs
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Flatten back into `key, value, ...` form
    pub fn into_keyvals(self) -> Vec<Value> {
        self.fields
            .into_iter()
            .flat_map(|(k, v)| [k, v])
            .collect()
    }
}

impl IntoIterator for Record {
    type Item = (Value, Value);
    type IntoIter = std::vec::IntoIter<(Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a (Value, Value);
    type IntoIter = std::slice::Iter<'a, (Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={}", k, v)?;
        }
        Ok(())
    }
}
