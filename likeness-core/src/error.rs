// likeness-core - Error types for the likeness engine
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for likeness.
//!
//! Comparison and dispatch are total and never fail. Errors only come from
//! the glue around the engine: converting values to Rust types, reading a
//! variant that is not there, or moving values in and out of JSON.

use likeness_value::{Kind, Value};
use thiserror::Error;

/// Result type for likeness operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the engine's collaborators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Value has the wrong kind for a conversion
    #[error("type error: expected {expected}, got {got}")]
    TypeError {
        expected: &'static str,
        got: &'static str,
    },
    /// Numeric value does not fit the target type
    #[error("{value} out of range for {target}")]
    OutOfRange { value: String, target: &'static str },
    /// Variant helper used on something that is not that kind of variant
    #[error("expected {expected} variant, got {got}")]
    NotAVariant { expected: &'static str, got: String },
    /// Unwrapping the wrong variant
    #[error("called unwrap on {found}, expected {expected}")]
    Unwrap { expected: String, found: String },
    /// Value kind has no JSON form
    #[error("{kind} values cannot be represented as JSON")]
    Unrepresentable { kind: Kind },
    /// Input text is not valid JSON
    #[error("invalid JSON: {message}")]
    InvalidJson { message: String },
}

impl Error {
    /// Create a type error.
    pub fn type_error(expected: &'static str, got: &'static str) -> Self {
        Error::TypeError { expected, got }
    }

    /// Create an out-of-range error.
    pub fn out_of_range(value: impl ToString, target: &'static str) -> Self {
        Error::OutOfRange {
            value: value.to_string(),
            target,
        }
    }

    /// Create a not-a-variant error for the offending value.
    pub fn not_a_variant(expected: &'static str, got: &Value) -> Self {
        Error::NotAVariant {
            expected,
            got: got.to_string(),
        }
    }

    /// Create an invalid JSON error.
    pub fn invalid_json(message: impl ToString) -> Self {
        Error::InvalidJson {
            message: message.to_string(),
        }
    }
}
