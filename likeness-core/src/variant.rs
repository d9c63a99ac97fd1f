// likeness-core - Option and Result style variants
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Dispatch over two-case variants.
//!
//! A variant is a plain record `{variant: tag, value: payload}` (see
//! [`Value::variant`]). These helpers dispatch over the `Some`/`None` and
//! `Ok`/`Err` tags with wildcard payload patterns, so they go through the
//! same matching as any user-written arm.

use likeness_value::{ERR, NONE, OK, PAYLOAD_FIELD, SOME, VARIANT_FIELD, Value};

use crate::dispatch::Dispatch;
use crate::error::{Error, Result};
use crate::pattern::satisfies;

/// Pattern matching any variant tagged `tag`.
pub fn variant_pattern(tag: &str) -> Value {
    Value::variant(tag, Value::any())
}

/// True if `value` is a variant tagged `tag`.
pub fn is_variant(value: &Value, tag: &str) -> bool {
    satisfies(value, &variant_pattern(tag))
}

fn any_variant() -> Value {
    Value::record([(VARIANT_FIELD, Value::any()), (PAYLOAD_FIELD, Value::any())])
}

pub fn is_some(value: &Value) -> bool {
    is_variant(value.unboxed(), SOME)
}

pub fn is_none(value: &Value) -> bool {
    is_variant(value.unboxed(), NONE)
}

pub fn is_ok(value: &Value) -> bool {
    is_variant(value.unboxed(), OK)
}

pub fn is_err(value: &Value) -> bool {
    is_variant(value.unboxed(), ERR)
}

/// Run `some` with the payload of a `Some` variant, or `none` for `None`.
pub fn match_option<A, S, N>(value: &Value, some: S, none: N) -> Result<A>
where
    S: FnOnce(&Value) -> A,
    N: FnOnce() -> A,
{
    let payload = payload_of(value);
    Dispatch::new()
        .arm([variant_pattern(SOME)], move || Ok(some(&payload)))
        .arm([variant_pattern(NONE)], move || Ok(none()))
        .run(value.unboxed(), |value, _| Err(Error::not_a_variant("option", value)))
}

/// Run `ok` or `err` with the payload of an `Ok` or `Err` variant.
pub fn match_result<A, O, E>(value: &Value, ok: O, err: E) -> Result<A>
where
    O: FnOnce(&Value) -> A,
    E: FnOnce(&Value) -> A,
{
    let payload = payload_of(value);
    let err_payload = payload.clone();
    Dispatch::new()
        .arm([variant_pattern(OK)], move || Ok(ok(&payload)))
        .arm([variant_pattern(ERR)], move || Ok(err(&err_payload)))
        .run(value.unboxed(), |value, _| Err(Error::not_a_variant("result", value)))
}

/// Payload of a variant tagged `tag`.
pub fn unwrap_variant(value: &Value, tag: &str) -> Result<Value> {
    match value.unboxed().variant_tag() {
        Some(found) if found == tag => Ok(payload_of(value)),
        Some(found) => Err(Error::Unwrap {
            expected: tag.to_string(),
            found: found.to_string(),
        }),
        None => Err(Error::not_a_variant("tagged", value)),
    }
}

// =============================================================================
// Combinators
// =============================================================================

/// Rewrap the payload of a `tag` variant through `f`.
///
/// A variant with another tag comes back unchanged, so
/// `map_variant(v, OK, f)` leaves an `Err` alone.
pub fn map_variant<F>(value: &Value, tag: &str, f: F) -> Result<Value>
where
    F: FnOnce(&Value) -> Value,
{
    let subject = value.unboxed();
    let payload = payload_of(value);
    Dispatch::new()
        .arm([variant_pattern(tag)], move || {
            Ok(Value::variant(tag, f(&payload)))
        })
        .arm([any_variant()], || Ok(subject.clone()))
        .run(subject, |value, _| Err(Error::not_a_variant("variant", value)))
}

/// Replace a `tag` variant with whatever `f` returns for its payload.
///
/// Other variants come back unchanged.
pub fn and_then<F>(value: &Value, tag: &str, f: F) -> Result<Value>
where
    F: FnOnce(&Value) -> Value,
{
    let subject = value.unboxed();
    let payload = payload_of(value);
    Dispatch::new()
        .arm([variant_pattern(tag)], move || Ok(f(&payload)))
        .arm([any_variant()], || Ok(subject.clone()))
        .run(subject, |value, _| Err(Error::not_a_variant("variant", value)))
}

/// Payload of a `tag` variant, or `fallback` for any other variant.
pub fn unwrap_or(value: &Value, tag: &str, fallback: Value) -> Result<Value> {
    let payload = payload_of(value);
    Dispatch::new()
        .arm([variant_pattern(tag)], move || Ok(payload))
        .arm([any_variant()], move || Ok(fallback))
        .run(value.unboxed(), |value, _| Err(Error::not_a_variant("variant", value)))
}

/// `Some(x)` becomes `Ok(x)`, `None` becomes `Err(err)`.
pub fn ok_or(value: &Value, err: Value) -> Result<Value> {
    match_option(value, |some| Value::ok(some.clone()), move || Value::err(err))
}

/// `Ok(x)` becomes `Some(x)`, `Err(_)` becomes `None`.
pub fn ok_option(value: &Value) -> Result<Value> {
    match_result(value, |ok| Value::some(ok.clone()), |_| Value::none())
}

/// `Err(e)` becomes `Some(e)`, `Ok(_)` becomes `None`.
pub fn err_option(value: &Value) -> Result<Value> {
    match_result(value, |_| Value::none(), |err| Value::some(err.clone()))
}

fn payload_of(value: &Value) -> Value {
    value
        .unboxed()
        .variant_payload()
        .cloned()
        .unwrap_or(Value::Absent)
}
