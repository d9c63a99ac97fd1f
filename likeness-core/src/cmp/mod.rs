// likeness-core - Structural comparison
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Structural comparison of values.
//!
//! One recursive decision tree answers three questions:
//!
//! - [`compare`] / [`eq`]: do two values hold the same content?
//! - [`same_shape`]: are two values built from the same kinds?
//! - [`satisfies`](crate::satisfies): does a value fit a pattern that may
//!   contain wildcards?
//!
//! Sequences, sets and maps are compared as multisets: element order never
//! matters, duplicates count. Records compare key by key and ignore fields
//! holding callables. Callables are only equal to themselves.

mod multiset;
mod relation;
mod walk;

use std::fmt;

use likeness_value::Value;

use crate::limits::Limits;
use relation::{Content, Satisfy, Shape};
use walk::Walk;

// ============================================================================
// Outcome
// ============================================================================

/// Result of comparing two values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Same content
    Equivalent,
    /// Comparable, but the content differs
    NotEquivalent,
    /// The pair cannot be compared meaningfully (different kind classes,
    /// distinct callables, depth limit reached)
    Incomparable,
}

impl Outcome {
    #[inline]
    pub fn is_equivalent(self) -> bool {
        self == Outcome::Equivalent
    }

    #[inline]
    pub(crate) fn from_bool(related: bool) -> Self {
        if related {
            Outcome::Equivalent
        } else {
            Outcome::NotEquivalent
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Outcome::Equivalent => "equivalent",
            Outcome::NotEquivalent => "not-equivalent",
            Outcome::Incomparable => "incomparable",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Comparator
// ============================================================================

/// Comparison entry points bound to explicit [`Limits`].
///
/// ```
/// use likeness_core::{Comparator, Limits, Outcome, Value};
///
/// let cmp = Comparator::new(Limits::default());
/// let lhs = Value::seq(vec![Value::int(1), Value::int(2)]);
/// let rhs = Value::seq(vec![Value::int(2), Value::int(1)]);
/// assert_eq!(cmp.compare(&lhs, &rhs), Outcome::Equivalent);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Comparator {
    limits: Limits,
}

impl Comparator {
    pub fn new(limits: Limits) -> Self {
        Comparator { limits }
    }

    /// Comparator using this thread's default limits.
    pub fn current() -> Self {
        Comparator::new(Limits::current())
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Compare the content of two values.
    pub fn compare(&self, lhs: &Value, rhs: &Value) -> Outcome {
        Walk::run(&Content, self.limits, lhs, rhs)
    }

    /// True if the two values hold the same content.
    pub fn eq(&self, lhs: &Value, rhs: &Value) -> bool {
        self.compare(lhs, rhs).is_equivalent()
    }

    /// True if the two values are built from the same kinds.
    pub fn same_shape(&self, lhs: &Value, rhs: &Value) -> bool {
        Walk::run(&Shape, self.limits, lhs, rhs).is_equivalent()
    }

    /// True if `value` fits `pattern`. `Any` in the pattern matches anything.
    pub fn satisfies(&self, value: &Value, pattern: &Value) -> bool {
        self.satisfies_if(value, pattern, true)
    }

    /// [`satisfies`](Self::satisfies) gated on an extra condition.
    pub fn satisfies_if(&self, value: &Value, pattern: &Value, condition: bool) -> bool {
        condition && Walk::run(&Satisfy, self.limits, value, pattern).is_equivalent()
    }
}

// ============================================================================
// Free functions
// ============================================================================

/// Compare two values with this thread's default limits.
pub fn compare(lhs: &Value, rhs: &Value) -> Outcome {
    Comparator::current().compare(lhs, rhs)
}

/// True if two values hold the same content.
pub fn eq(lhs: &Value, rhs: &Value) -> bool {
    Comparator::current().eq(lhs, rhs)
}

/// True if two values are built from the same kinds.
pub fn same_shape(lhs: &Value, rhs: &Value) -> bool {
    Comparator::current().same_shape(lhs, rhs)
}
