// likeness-value - Kind discriminant
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Coarse kind discriminant for [`Value`](crate::Value).
//!
//! The comparator dispatches on `Kind` with an exhaustive `match` instead
//! of probing a value's representation at runtime. `Int` and `Float` share
//! the `Number` kind.

use std::fmt;

/// Kind of a value, used for structural dispatch.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Kind {
    Absent,
    Null,
    Bool,
    Number,
    Text,
    /// Pattern wildcard
    Any,
    Callable,
    Seq,
    Map,
    Set,
    Timestamp,
    Pending,
    Record,
    Boxed,
}

/// Comparison class of a kind.
///
/// Primitives compare by value, callables by identity, composites by
/// structure.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Class {
    Primitive,
    Callable,
    Composite,
}

impl Kind {
    /// Get the comparison class for this kind.
    pub fn class(self) -> Class {
        match self {
            Kind::Absent | Kind::Null | Kind::Bool | Kind::Number | Kind::Text | Kind::Any => {
                Class::Primitive
            }
            Kind::Callable => Class::Callable,
            Kind::Seq
            | Kind::Map
            | Kind::Set
            | Kind::Timestamp
            | Kind::Pending
            | Kind::Record
            | Kind::Boxed => Class::Composite,
        }
    }

    /// Returns true for composite kinds.
    pub fn is_composite(self) -> bool {
        self.class() == Class::Composite
    }

    /// Get the kind name as a string.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Absent => "absent",
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::Text => "text",
            Kind::Any => "any",
            Kind::Callable => "callable",
            Kind::Seq => "seq",
            Kind::Map => "map",
            Kind::Set => "set",
            Kind::Timestamp => "timestamp",
            Kind::Pending => "pending",
            Kind::Record => "record",
            Kind::Boxed => "boxed",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
