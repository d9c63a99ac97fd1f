// likeness-core - Pattern matching
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Pattern matching.
//!
//! A pattern is an ordinary [`Value`] that may contain [`Value::Any`] at any
//! depth. Matching follows the same rules as content equality, except that a
//! wildcard on the pattern side accepts whatever sits at that position,
//! callables and composites included. The relation is asymmetric: a
//! wildcard in the value being matched is just a value.
//!
//! ```
//! use likeness_core::{satisfies, Value};
//!
//! let point = Value::record([("x", Value::int(1)), ("y", Value::int(2))]);
//! let on_x_axis = Value::record([("x", Value::any()), ("y", Value::int(0))]);
//! let any_point = Value::record([("x", Value::any()), ("y", Value::any())]);
//! assert!(!satisfies(&point, &on_x_axis));
//! assert!(satisfies(&point, &any_point));
//! ```

use likeness_value::Value;

use crate::cmp::Comparator;

/// True if `value` fits `pattern`, with this thread's default limits.
pub fn satisfies(value: &Value, pattern: &Value) -> bool {
    Comparator::current().satisfies(value, pattern)
}

/// True if `condition` holds and `value` fits `pattern`.
pub fn satisfies_if(value: &Value, pattern: &Value, condition: bool) -> bool {
    Comparator::current().satisfies_if(value, pattern, condition)
}
