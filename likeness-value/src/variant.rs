// likeness-value - Tagged variants
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Tagged variants for Option/Result-style wrappers.
//!
//! A variant is an ordinary record with two fields: the discriminant under
//! [`VARIANT_FIELD`] and the payload under [`PAYLOAD_FIELD`]. Because it is
//! a plain record, the comparator and dispatcher treat it like any other
//! record pattern.

use std::sync::Arc;

use crate::value::Value;

/// Field holding the variant tag.
pub const VARIANT_FIELD: &str = "variant";
/// Field holding the variant payload.
pub const PAYLOAD_FIELD: &str = "value";

pub const SOME: &str = "Some";
pub const NONE: &str = "None";
pub const OK: &str = "Ok";
pub const ERR: &str = "Err";

impl Value {
    /// Create a tagged variant record.
    pub fn variant(tag: impl Into<Arc<str>>, payload: Value) -> Self {
        Value::record([
            (VARIANT_FIELD, Value::Text(tag.into())),
            (PAYLOAD_FIELD, payload),
        ])
    }

    /// `Some(payload)`
    pub fn some(payload: Value) -> Self {
        Value::variant(SOME, payload)
    }

    /// `None`, with an absent payload
    pub fn none() -> Self {
        Value::variant(NONE, Value::Absent)
    }

    /// `Ok(payload)`
    pub fn ok(payload: Value) -> Self {
        Value::variant(OK, payload)
    }

    /// `Err(payload)`
    pub fn err(payload: Value) -> Self {
        Value::variant(ERR, payload)
    }

    /// Get the variant tag if this value is a tagged variant.
    pub fn variant_tag(&self) -> Option<&str> {
        let record = self.as_record()?;
        if record.len() != 2 || !record.contains_key(PAYLOAD_FIELD) {
            return None;
        }
        record.get(VARIANT_FIELD)?.as_text()
    }

    /// Get the variant payload if this value is a tagged variant.
    pub fn variant_payload(&self) -> Option<&Value> {
        self.variant_tag()?;
        self.as_record()?.get(PAYLOAD_FIELD)
    }
}
