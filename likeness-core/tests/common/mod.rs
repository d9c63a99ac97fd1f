// likeness-core - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared test helpers for likeness integration tests.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Available Helpers
//!
//! - [`int`], [`text`], [`ints`], [`seq`] - Short value constructors
//! - [`rec`] - Build a record from `(key, value)` pairs
//! - [`func`] - A named callable returning null
//! - [`nest`] - A value wrapped in `depth` single-element sequences
//!
//! # Macros
//!
//! - [`assert_outcome!`] - Assert `compare` in both directions
//! - [`assert_equivalent!`] - Assert two values compare equivalent
//! - [`assert_not_equivalent!`] - Assert two values compare not equivalent

#[allow(unused_imports)]
pub use likeness_core::{
    Arm, Comparator, Dispatch, Limits, MatchOutcome, Outcome, Record, Value, compare, eq,
    same_shape, satisfies,
};

#[must_use]
#[allow(dead_code)]
pub fn int(n: i64) -> Value {
    Value::int(n)
}

#[must_use]
#[allow(dead_code)]
pub fn text(s: &str) -> Value {
    Value::text(s)
}

/// Sequence of integers.
#[must_use]
#[allow(dead_code)]
pub fn ints(ns: &[i64]) -> Value {
    Value::seq(ns.iter().copied().map(Value::int).collect())
}

#[must_use]
#[allow(dead_code)]
pub fn seq(elements: Vec<Value>) -> Value {
    Value::seq(elements)
}

/// Record from `(key, value)` pairs.
#[must_use]
#[allow(dead_code)]
pub fn rec(fields: &[(&str, Value)]) -> Value {
    Value::record(fields.iter().map(|(k, v)| (*k, v.clone())))
}

/// A named callable that ignores its arguments.
#[must_use]
#[allow(dead_code)]
pub fn func(name: &str) -> Value {
    Value::callable(name.to_string(), |_| Value::null())
}

/// `leaf` wrapped in `depth` single-element sequences.
#[must_use]
#[allow(dead_code)]
pub fn nest(depth: usize, leaf: Value) -> Value {
    (0..depth).fold(leaf, |inner, _| Value::seq(vec![inner]))
}

/// Assert that `compare` gives the expected outcome in both directions.
///
/// # Example
///
/// ```ignore
/// assert_outcome!(int(1), ints(&[1]), Outcome::Incomparable);
/// ```
#[macro_export]
macro_rules! assert_outcome {
    ($lhs:expr, $rhs:expr, $expected:expr) => {
        let (lhs, rhs) = ($lhs, $rhs);
        assert_eq!(
            $crate::common::compare(&lhs, &rhs),
            $expected,
            "compare({}, {})",
            lhs,
            rhs
        );
        assert_eq!(
            $crate::common::compare(&rhs, &lhs),
            $expected,
            "compare({}, {})",
            rhs,
            lhs
        );
    };
}

/// Assert that two values compare equivalent in both directions.
#[macro_export]
macro_rules! assert_equivalent {
    ($lhs:expr, $rhs:expr) => {
        $crate::assert_outcome!($lhs, $rhs, $crate::common::Outcome::Equivalent);
    };
}

/// Assert that two values compare not equivalent in both directions.
#[macro_export]
macro_rules! assert_not_equivalent {
    ($lhs:expr, $rhs:expr) => {
        $crate::assert_outcome!($lhs, $rhs, $crate::common::Outcome::NotEquivalent);
    };
}
