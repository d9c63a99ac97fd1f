// likeness-value - Value types for likeness
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Core value type for likeness.
//!
//! `Value` is the central enum representing everything the comparison
//! engine can look at: primitives, callables, sequences, key-unique maps,
//! unique-element sets, timestamps, pending results, records and boxes.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use im::Vector;

use crate::kind::Kind;
use crate::record::Record;

// ============================================================================
// Callable and Pending handles
// ============================================================================

/// Signature of a callable value.
pub type CallableFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A function value.
///
/// Callables are compared by identity only: two handles are the same
/// callable when they share the same allocation.
#[derive(Clone)]
pub struct Callable {
    /// Name for display
    name: Option<Arc<str>>,
    func: Arc<CallableFn>,
}

impl Callable {
    /// Create a named callable.
    pub fn new<F>(name: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Callable {
            name: Some(name.into()),
            func: Arc::new(func),
        }
    }

    /// Create an anonymous callable.
    pub fn anonymous<F>(func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Callable {
            name: None,
            func: Arc::new(func),
        }
    }

    /// Get the callable's name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Invoke the callable.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }

    /// Returns true if both handles refer to the same function.
    pub fn same_identity(&self, other: &Callable) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.func), Arc::as_ptr(&other.func))
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "#<fn {}>", name),
            None => write!(f, "#<fn>"),
        }
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

/// An opaque pending asynchronous result.
///
/// The engine never awaits a pending value; it is compared as a kind.
#[derive(Clone)]
pub struct Pending {
    label: Option<Arc<str>>,
    handle: Arc<dyn Any + Send + Sync>,
}

impl Pending {
    /// Wrap an arbitrary handle (a join handle, a shared future, ...).
    pub fn new<T: Any + Send + Sync>(handle: T) -> Self {
        Pending {
            label: None,
            handle: Arc::new(handle),
        }
    }

    /// Wrap a handle with a label used for display.
    pub fn labelled<T: Any + Send + Sync>(label: impl Into<Arc<str>>, handle: T) -> Self {
        Pending {
            label: Some(label.into()),
            handle: Arc::new(handle),
        }
    }

    /// Get the label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Borrow the wrapped handle if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.handle.downcast_ref::<T>()
    }
}

impl fmt::Debug for Pending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "#<pending {}>", label),
            None => write!(f, "#<pending>"),
        }
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.handle), Arc::as_ptr(&other.handle))
    }
}

// ============================================================================
// Value
// ============================================================================

/// The core value type for likeness.
///
/// Values are immutable and cheap to clone: containers use persistent
/// vectors and everything else is reference counted, so a `Value` can be
/// shared freely between threads.
#[derive(Clone)]
pub enum Value {
    /// The absent marker (distinct from null)
    Absent,
    /// The null marker
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(Arc<str>),
    /// Function value, compared by identity
    Callable(Callable),
    /// Ordered sequence
    Seq(Vector<Value>),
    /// Key-unique mapping, insertion ordered
    Map(Vector<(Value, Value)>),
    /// Unique-element collection, insertion ordered
    Set(Vector<Value>),
    Timestamp(DateTime<Utc>),
    /// Pending asynchronous result
    Pending(Pending),
    Record(Arc<Record>),
    /// Single-slot box: compare the contents, not the box
    Boxed(Arc<Value>),
    /// Wildcard, matches anything when used as a pattern
    Any,
}

impl Value {
    /// Create the absent marker
    pub fn absent() -> Self {
        Value::Absent
    }

    /// Create the null marker
    pub fn null() -> Self {
        Value::Null
    }

    /// Create a boolean value
    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    /// Create an integer value
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a float value
    pub fn float(n: f64) -> Self {
        Value::Float(n)
    }

    /// Create a text value
    pub fn text(s: impl Into<Arc<str>>) -> Self {
        Value::Text(s.into())
    }

    /// Create a named callable value
    pub fn callable<F>(name: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Value::Callable(Callable::new(name, func))
    }

    /// Create an empty sequence
    pub fn empty_seq() -> Self {
        Value::Seq(Vector::new())
    }

    /// Create a sequence from elements
    pub fn seq(elements: Vec<Value>) -> Self {
        Value::Seq(elements.into_iter().collect())
    }

    /// Create a key-unique map from key/value pairs.
    ///
    /// A repeated key replaces the earlier entry's value in place. Values
    /// have no hash, so each key is checked against the entries so far and
    /// construction is quadratic in the number of pairs.
    pub fn map(pairs: Vec<(Value, Value)>) -> Self {
        let mut entries: Vector<(Value, Value)> = Vector::new();
        for (key, value) in pairs {
            match entries.iter().position(|(k, _)| *k == key) {
                Some(idx) => {
                    entries.set(idx, (key, value));
                }
                None => entries.push_back((key, value)),
            }
        }
        Value::Map(entries)
    }

    /// Create a unique-element set; later duplicates are dropped.
    ///
    /// Like [`Value::map`], uniqueness is checked by scanning, so
    /// construction is quadratic in the number of elements.
    pub fn set(elements: Vec<Value>) -> Self {
        let mut items: Vector<Value> = Vector::new();
        for element in elements {
            if !items.contains(&element) {
                items.push_back(element);
            }
        }
        Value::Set(items)
    }

    /// Create a timestamp value
    pub fn timestamp(at: DateTime<Utc>) -> Self {
        Value::Timestamp(at)
    }

    /// Create a timestamp for the current instant
    pub fn now() -> Self {
        Value::Timestamp(Utc::now())
    }

    /// Create a pending value around an opaque handle
    pub fn pending<T: Any + Send + Sync>(handle: T) -> Self {
        Value::Pending(Pending::new(handle))
    }

    /// Create a record from key/value pairs
    pub fn record<K, I>(fields: I) -> Self
    where
        K: Into<Arc<str>>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Record(Arc::new(Record::from_fields(fields)))
    }

    /// Create a record value from an existing record
    pub fn from_record(record: Record) -> Self {
        Value::Record(Arc::new(record))
    }

    /// Box a value
    pub fn boxed(inner: Value) -> Self {
        Value::Boxed(Arc::new(inner))
    }

    /// Create the wildcard pattern
    pub fn any() -> Self {
        Value::Any
    }

    /// Get the kind discriminant
    pub fn kind(&self) -> Kind {
        match self {
            Value::Absent => Kind::Absent,
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) | Value::Float(_) => Kind::Number,
            Value::Text(_) => Kind::Text,
            Value::Callable(_) => Kind::Callable,
            Value::Seq(_) => Kind::Seq,
            Value::Map(_) => Kind::Map,
            Value::Set(_) => Kind::Set,
            Value::Timestamp(_) => Kind::Timestamp,
            Value::Pending(_) => Kind::Pending,
            Value::Record(_) => Kind::Record,
            Value::Boxed(_) => Kind::Boxed,
            Value::Any => Kind::Any,
        }
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Check if this value is callable
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Callable(_))
    }

    /// Check if this value is the absent or null marker
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Absent | Value::Null)
    }

    /// Check if this value is falsy: `false`, zero, empty text, absent or null
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Absent | Value::Null | Value::Bool(false) => true,
            Value::Int(n) => *n == 0,
            Value::Float(n) => *n == 0.0 || n.is_nan(),
            Value::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Unwrap one level of boxing.
    ///
    /// Returns the boxed contents for a `Boxed` value, the value itself
    /// otherwise.
    pub fn unboxed(&self) -> &Value {
        match self {
            Value::Boxed(inner) => inner,
            other => other,
        }
    }

    /// Borrow the record, if this is one
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Borrow the text, if this is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Number of elements for containers, fields for records.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Seq(items) | Value::Set(items) => Some(items.len()),
            Value::Map(entries) => Some(entries.len()),
            Value::Record(r) => Some(r.len()),
            _ => None,
        }
    }
}

// ============================================================================
// Display implementation
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => write!(f, "absent"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if n.is_infinite() {
                    if *n > 0.0 {
                        write!(f, "Infinity")
                    } else {
                        write!(f, "-Infinity")
                    }
                } else if n.fract() == 0.0 {
                    write!(f, "{}.0", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Text(s) => write!(f, "\"{}\"", escape_text(s)),
            Value::Callable(c) => write!(f, "{:?}", c),
            Value::Seq(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "#map{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} {}", k, v)?;
                }
                write!(f, "}}")
            }
            Value::Set(items) => {
                write!(f, "#{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "}}")
            }
            Value::Timestamp(at) => write!(f, "#inst \"{}\"", at.to_rfc3339()),
            Value::Pending(p) => write!(f, "{:?}", p),
            Value::Record(r) => write!(f, "{}", r),
            Value::Boxed(inner) => write!(f, "#box[{}]", inner),
            Value::Any => write!(f, "_"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            _ => result.push(c),
        }
    }
    result
}

// ============================================================================
// Strict equality
// ============================================================================

/// Returns true if `float` holds exactly the integer `int`.
///
/// Casting the integer to `f64` would round above 2^53 and make distinct
/// integers equal to the same float.
pub fn int_eq_float(int: i64, float: f64) -> bool {
    // i64::MIN is exactly representable; i64::MAX + 1 is the first float past the range
    const LOWER: f64 = -9_223_372_036_854_775_808.0;
    const UPPER: f64 = 9_223_372_036_854_775_808.0;
    float.fract() == 0.0 && (LOWER..UPPER).contains(&float) && float as i64 == int
}

// `PartialEq` is strict structural identity: kinds must agree, sequences are
// order sensitive and callables compare by identity. It decides key and
// element uniqueness for maps and sets. The multiset equivalence used for
// matching lives in likeness-core.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Absent, Value::Absent) => true,
            (Value::Null, Value::Null) => true,
            (Value::Any, Value::Any) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                int_eq_float(*a, *b)
            }
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Callable(a), Value::Callable(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a == b,
            (Value::Timestamp(a), Value::Timestamp(b)) => a == b,
            (Value::Pending(a), Value::Pending(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::Boxed(a), Value::Boxed(b)) => a == b,
            _ => false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
