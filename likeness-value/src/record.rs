// likeness-value - Record type
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Text-keyed records.
//!
//! A record is an ordered list of uniquely keyed fields. Field order is
//! kept for display only; equality and structural comparison treat the key
//! set as unordered.

use std::fmt;
use std::sync::Arc;

use im::Vector;

use crate::value::Value;

/// A record: text keys mapped to values, keys unique, declaration ordered.
#[derive(Clone, Default)]
pub struct Record {
    fields: Vector<(Arc<str>, Value)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Record {
            fields: Vector::new(),
        }
    }

    /// Build a record from key/value pairs.
    ///
    /// A repeated key overwrites the earlier value but keeps its position.
    pub fn from_fields<K, I>(fields: I) -> Self
    where
        K: Into<Arc<str>>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let mut record = Record::new();
        for (key, value) in fields {
            record.set(key.into(), value);
        }
        record
    }

    fn set(&mut self, key: Arc<str>, value: Value) {
        match self.position(&key) {
            Some(idx) => {
                self.fields.set(idx, (key, value));
            }
            None => self.fields.push_back((key, value)),
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|(k, _)| &**k == key)
    }

    /// Get a field value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(k, _)| &**k == key)
            .map(|(_, v)| v)
    }

    /// Returns true if the record has a field with this key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Create a new record with an added or updated field.
    pub fn insert(&self, key: impl Into<Arc<str>>, value: Value) -> Self {
        let mut record = self.clone();
        record.set(key.into(), value);
        record
    }

    /// Create a new record without the given field.
    pub fn remove(&self, key: &str) -> Self {
        let mut record = self.clone();
        if let Some(idx) = record.position(key) {
            record.fields.remove(idx);
        }
        record
    }

    /// Iterate fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (&**k, v))
    }

    /// Iterate keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| &**k)
    }

    /// Number of fields, callable fields included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        write!(f, "}}")
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        // Same key set, same value per key; field order is not significant
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|v| v == value))
    }
}
