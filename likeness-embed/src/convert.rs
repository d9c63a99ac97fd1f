// likeness-embed - Type conversion traits
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Type conversion between Rust types and likeness values.
//!
//! This module provides the [`IntoValue`] and [`FromValue`] traits for
//! converting between Rust types and [`Value`].
//!
//! # Built-in Conversions
//!
//! | Rust Type | Value |
//! |-----------|-------|
//! | `()` | `null` |
//! | `bool` | `Bool` |
//! | `i32`, `i64`, `u32`, `usize` | `Int` |
//! | `f32`, `f64` | `Float` |
//! | `String`, `&str` | `Text` |
//! | `Vec<T>` | `Seq` |
//! | `Option<T>` | `Some` / `None` variant |
//! | `Result<T, E>` | `Ok` / `Err` variant |
//! | `HashMap<K, V>` | `Map` |
//! | `BTreeMap<String, V>` | `Record` |
//! | `HashSet<T>` | `Set` |
//! | `DateTime<Utc>` | `Timestamp` |
//!
//! # Custom Conversions
//!
//! ```rust
//! use likeness_embed::{Error, FromValue, IntoValue, Result, Value};
//!
//! struct Point { x: i64, y: i64 }
//!
//! impl IntoValue for Point {
//!     fn into_value(self) -> Value {
//!         Value::record([("x", Value::int(self.x)), ("y", Value::int(self.y))])
//!     }
//! }
//!
//! impl FromValue for Point {
//!     fn from_value(value: &Value) -> Result<Self> {
//!         let record = value
//!             .as_record()
//!             .ok_or_else(|| Error::type_error("record", value.type_name()))?;
//!         let field = |key| {
//!             record
//!                 .get(key)
//!                 .ok_or_else(|| Error::type_error("point field", "absent"))
//!                 .and_then(i64::from_value)
//!         };
//!         Ok(Point { x: field("x")?, y: field("y")? })
//!     }
//! }
//! ```

use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::Hash;
use std::sync::Arc;

use likeness_core::{DateTime, Error, Result, Utc, Value, match_option, match_result};

/// Convert a Rust type into a `Value`.
pub trait IntoValue {
    fn into_value(self) -> Value;
}

/// Convert a `Value` into a Rust type.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self>;
}

// ============================================================================
// IntoValue implementations
// ============================================================================

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl IntoValue for () {
    fn into_value(self) -> Value {
        Value::Null
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl IntoValue for i64 {
    fn into_value(self) -> Value {
        Value::int(self)
    }
}

impl IntoValue for i32 {
    fn into_value(self) -> Value {
        Value::int(i64::from(self))
    }
}

impl IntoValue for u32 {
    fn into_value(self) -> Value {
        Value::int(i64::from(self))
    }
}

impl IntoValue for usize {
    fn into_value(self) -> Value {
        // Beyond i64 only a float keeps the magnitude
        i64::try_from(self).map_or(Value::float(self as f64), Value::int)
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::float(self)
    }
}

impl IntoValue for f32 {
    fn into_value(self) -> Value {
        Value::float(f64::from(self))
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::text(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::text(self)
    }
}

impl IntoValue for Arc<str> {
    fn into_value(self) -> Value {
        Value::Text(self)
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::seq(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(v) => Value::some(v.into_value()),
            None => Value::none(),
        }
    }
}

impl<T: IntoValue, E: IntoValue> IntoValue for std::result::Result<T, E> {
    fn into_value(self) -> Value {
        match self {
            Ok(v) => Value::ok(v.into_value()),
            Err(e) => Value::err(e.into_value()),
        }
    }
}

impl<K: IntoValue, V: IntoValue> IntoValue for HashMap<K, V> {
    fn into_value(self) -> Value {
        let pairs: Vec<(Value, Value)> = self
            .into_iter()
            .map(|(k, v)| (k.into_value(), v.into_value()))
            .collect();
        Value::map(pairs)
    }
}

impl<V: IntoValue> IntoValue for BTreeMap<String, V> {
    fn into_value(self) -> Value {
        Value::record(self.into_iter().map(|(k, v)| (k, v.into_value())))
    }
}

impl<T: IntoValue> IntoValue for HashSet<T> {
    fn into_value(self) -> Value {
        Value::set(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl IntoValue for DateTime<Utc> {
    fn into_value(self) -> Value {
        Value::timestamp(self)
    }
}

// ============================================================================
// FromValue implementations
// ============================================================================

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }
}

impl FromValue for () {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(()),
            other => Err(Error::type_error("null", other.type_name())),
        }
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(Error::type_error("bool", other.type_name())),
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Int(n) => Ok(*n),
            other => Err(Error::type_error("integer", other.type_name())),
        }
    }
}

impl FromValue for i32 {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Int(n) => i32::try_from(*n).map_err(|_| Error::out_of_range(n, "i32")),
            other => Err(Error::type_error("integer", other.type_name())),
        }
    }
}

impl FromValue for u32 {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Int(n) => u32::try_from(*n).map_err(|_| Error::out_of_range(n, "u32")),
            other => Err(Error::type_error("integer", other.type_name())),
        }
    }
}

impl FromValue for usize {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Int(n) => usize::try_from(*n).map_err(|_| Error::out_of_range(n, "usize")),
            other => Err(Error::type_error("non-negative integer", other.type_name())),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Float(n) => Ok(*n),
            Value::Int(n) => Ok(*n as f64),
            other => Err(Error::type_error("number", other.type_name())),
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Result<Self> {
        let n = f64::from_value(value)?;
        let result = n as f32;
        if result.is_infinite() && n.is_finite() {
            Err(Error::out_of_range(n, "f32"))
        } else {
            Ok(result)
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Text(s) => Ok(s.to_string()),
            other => Err(Error::type_error("text", other.type_name())),
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Seq(v) | Value::Set(v) => v.iter().map(T::from_value).collect(),
            other => Err(Error::type_error("sequence", other.type_name())),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Result<Self> {
        match_option(value, |payload| T::from_value(payload).map(Some), || Ok(None))?
    }
}

impl<T: FromValue, E: FromValue> FromValue for std::result::Result<T, E> {
    fn from_value(value: &Value) -> Result<Self> {
        match_result(
            value,
            |payload| T::from_value(payload).map(Ok),
            |payload| E::from_value(payload).map(Err),
        )?
    }
}

impl<K: FromValue + Eq + Hash, V: FromValue> FromValue for HashMap<K, V> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Map(pairs) => {
                let mut result = HashMap::with_capacity(pairs.len());
                for (k, v) in pairs.iter() {
                    result.insert(K::from_value(k)?, V::from_value(v)?);
                }
                Ok(result)
            }
            other => Err(Error::type_error("map", other.type_name())),
        }
    }
}

impl<V: FromValue> FromValue for BTreeMap<String, V> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Record(record) => record
                .iter()
                .map(|(k, v)| Ok((k.to_string(), V::from_value(v)?)))
                .collect(),
            other => Err(Error::type_error("record", other.type_name())),
        }
    }
}

impl<T: FromValue + Eq + Hash> FromValue for HashSet<T> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Set(v) | Value::Seq(v) => v.iter().map(T::from_value).collect(),
            other => Err(Error::type_error("set", other.type_name())),
        }
    }
}

impl FromValue for DateTime<Utc> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Timestamp(at) => Ok(*at),
            other => Err(Error::type_error("timestamp", other.type_name())),
        }
    }
}

// ============================================================================
// Convenience functions
// ============================================================================

/// Convert a Rust value into a `Value`.
#[must_use]
pub fn to_value<T: IntoValue>(value: T) -> Value {
    value.into_value()
}

/// Convert a `Value` into a Rust type.
pub fn from_value<T: FromValue>(value: &Value) -> Result<T> {
    T::from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_narrowing() {
        assert_eq!(i32::from_value(&Value::int(7)), Ok(7));
        assert_eq!(
            i32::from_value(&Value::int(i64::MAX)),
            Err(Error::out_of_range(i64::MAX, "i32"))
        );
        assert!(usize::from_value(&Value::int(-1)).is_err());
        assert_eq!(u32::MAX.into_value(), Value::int(i64::from(u32::MAX)));
    }

    #[test]
    fn test_float_conversions() {
        assert_eq!(f64::from_value(&Value::int(2)), Ok(2.0));
        assert!(f32::from_value(&Value::float(1e300)).is_err());
        assert_eq!(f32::from_value(&Value::float(f64::INFINITY)), Ok(f32::INFINITY));
    }

    #[test]
    fn test_type_errors_name_the_kind() {
        assert_eq!(
            String::from_value(&Value::int(1)),
            Err(Error::type_error("text", "number"))
        );
    }
}
