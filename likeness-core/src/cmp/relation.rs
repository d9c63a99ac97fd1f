// likeness-core - Comparison relations
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The three relations plugged into the comparison walker.
//!
//! - [`Content`]: structural equality
//! - [`Shape`]: kind compatibility
//! - [`Satisfy`]: content equality where the right side may hold wildcards

use likeness_value::{Callable, Value, int_eq_float};

use super::Outcome;

/// How container elements must correspond.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Correspondence {
    /// Equal lengths and a perfect pairing of elements
    OneToOne,
    /// Every element has some partner on the other side
    Covering,
}

/// Leaf rules for one relation. The walker owns the recursion.
pub(crate) trait Relation {
    /// Relate two primitives, neither of them null.
    fn primitives(&self, lhs: &Value, rhs: &Value) -> Outcome;

    /// Relate two callables.
    fn callables(&self, lhs: &Callable, rhs: &Callable) -> Outcome;

    /// Whether a record field with this value takes part in the comparison.
    fn counts_field(&self, value: &Value) -> bool;

    fn correspondence(&self) -> Correspondence;

    /// Whether a right-side `Any` matches everything.
    fn wildcards(&self) -> bool {
        false
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Content;

impl Relation for Content {
    fn primitives(&self, lhs: &Value, rhs: &Value) -> Outcome {
        let same = match (lhs, rhs) {
            (Value::Absent, Value::Absent) | (Value::Any, Value::Any) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                int_eq_float(*a, *b)
            }
            (Value::Float(a), Value::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            _ => false,
        };
        Outcome::from_bool(same)
    }

    fn callables(&self, lhs: &Callable, rhs: &Callable) -> Outcome {
        if lhs.same_identity(rhs) {
            Outcome::Equivalent
        } else {
            Outcome::Incomparable
        }
    }

    fn counts_field(&self, value: &Value) -> bool {
        !value.is_callable()
    }

    fn correspondence(&self) -> Correspondence {
        Correspondence::OneToOne
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Shape;

impl Relation for Shape {
    fn primitives(&self, lhs: &Value, rhs: &Value) -> Outcome {
        Outcome::from_bool(lhs.kind() == rhs.kind())
    }

    fn callables(&self, _lhs: &Callable, _rhs: &Callable) -> Outcome {
        Outcome::Equivalent
    }

    // Callable fields are part of a record's shape
    fn counts_field(&self, _value: &Value) -> bool {
        true
    }

    fn correspondence(&self) -> Correspondence {
        Correspondence::Covering
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Satisfy;

impl Relation for Satisfy {
    fn primitives(&self, lhs: &Value, rhs: &Value) -> Outcome {
        Content.primitives(lhs, rhs)
    }

    fn callables(&self, lhs: &Callable, rhs: &Callable) -> Outcome {
        Content.callables(lhs, rhs)
    }

    fn counts_field(&self, value: &Value) -> bool {
        Content.counts_field(value)
    }

    fn correspondence(&self) -> Correspondence {
        Correspondence::OneToOne
    }

    fn wildcards(&self) -> bool {
        true
    }
}
