// likeness-core - Variant dispatch integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for Option and Result style variants.

mod common;

use common::*;
use likeness_core::{
    ERR, Error, NONE, OK, SOME, and_then, err_option, is_err, is_none, is_ok, is_some, is_variant,
    map_variant, match_option, match_result, ok_option, ok_or, unwrap_or, unwrap_variant,
};

#[test]
fn test_match_option() {
    let doubled = match_option(
        &Value::some(int(21)),
        |payload| match payload {
            Value::Int(n) => n * 2,
            _ => -1,
        },
        || 0,
    );
    assert_eq!(doubled, Ok(42));
    assert_eq!(match_option(&Value::none(), |_| 1, || 0), Ok(0));
}

#[test]
fn test_match_option_rejects_other_values() {
    let result = match_option(&int(3), |_| 1, || 0);
    assert!(matches!(
        result,
        Err(Error::NotAVariant {
            expected: "option",
            ..
        })
    ));
    // A result variant is not an option
    assert!(match_option(&Value::ok(int(1)), |_| 1, || 0).is_err());
}

#[test]
fn test_match_result() {
    let describe = |value: &Value| {
        match_result(
            value,
            |ok| format!("ok {}", ok),
            |err| format!("err {}", err),
        )
    };
    assert_eq!(describe(&Value::ok(ints(&[1]))), Ok("ok [1]".to_string()));
    assert_eq!(describe(&Value::err(text("bad"))), Ok("err \"bad\"".to_string()));
    assert!(describe(&Value::some(int(1))).is_err());
}

#[test]
fn test_boxed_variants() {
    let boxed = Value::boxed(Value::some(int(1)));
    assert_eq!(match_option(&boxed, |p| p.clone(), Value::absent), Ok(int(1)));
    assert_eq!(unwrap_variant(&boxed, SOME), Ok(int(1)));
}

#[test]
fn test_unwrap_variant() {
    assert_eq!(unwrap_variant(&Value::ok(int(5)), OK), Ok(int(5)));
    assert_eq!(unwrap_variant(&Value::none(), NONE), Ok(Value::absent()));
    let err = unwrap_variant(&Value::err(text("boom")), OK);
    assert_eq!(
        err,
        Err(Error::Unwrap {
            expected: OK.to_string(),
            found: ERR.to_string(),
        })
    );
}

#[test]
fn test_variants_are_plain_records() {
    let some = Value::some(int(1));
    assert!(is_variant(&some, SOME));
    assert!(eq(&some, &rec(&[("variant", text("Some")), ("value", int(1))])));
    assert!(satisfies(
        &some,
        &rec(&[("variant", Value::any()), ("value", int(1))])
    ));
    // An extra field means it is no longer a variant
    let widened = rec(&[("variant", text("Some")), ("value", int(1)), ("x", int(0))]);
    assert!(!is_variant(&widened, SOME));
}

#[test]
fn test_callable_payloads() {
    let f = func("f");
    let some = Value::some(f.clone());
    assert!(is_variant(&some, SOME));
    assert!(is_some(&some));
    let payload = match_option(&some, |p| p.clone(), Value::absent);
    assert!(payload.as_ref().is_ok_and(|p| eq(p, &f)));
    assert!(is_ok(&Value::ok(func("g"))));
}

// =============================================================================
// Combinators
// =============================================================================

#[test]
fn test_predicates() {
    assert!(is_some(&Value::some(int(1))));
    assert!(is_none(&Value::none()));
    assert!(is_ok(&Value::ok(int(1))));
    assert!(is_err(&Value::err(text("e"))));
    assert!(!is_none(&Value::some(Value::absent())));
    assert!(!is_err(&Value::ok(int(1))));
    assert!(!is_some(&rec(&[])));
}

#[test]
fn test_map_variant() {
    let double = |p: &Value| match p {
        Value::Int(n) => int(n * 2),
        other => other.clone(),
    };
    assert_eq!(map_variant(&Value::some(int(4)), SOME, double), Ok(Value::some(int(8))));
    assert_eq!(map_variant(&Value::none(), SOME, double), Ok(Value::none()));
    assert_eq!(
        map_variant(&Value::err(text("bad")), ERR, |_| text("worse")),
        Ok(Value::err(text("worse")))
    );
    assert!(matches!(
        map_variant(&int(1), SOME, double),
        Err(Error::NotAVariant { .. })
    ));
}

#[test]
fn test_and_then() {
    let halve = |p: &Value| match p {
        Value::Int(n) if n % 2 == 0 => Value::ok(int(n / 2)),
        _ => Value::err(text("odd")),
    };
    assert_eq!(and_then(&Value::ok(int(8)), OK, halve), Ok(Value::ok(int(4))));
    assert_eq!(and_then(&Value::ok(int(3)), OK, halve), Ok(Value::err(text("odd"))));
    let failed = Value::err(text("earlier"));
    assert_eq!(and_then(&failed, OK, halve), Ok(failed.clone()));
}

#[test]
fn test_unwrap_or() {
    assert_eq!(unwrap_or(&Value::some(int(1)), SOME, int(0)), Ok(int(1)));
    assert_eq!(unwrap_or(&Value::none(), SOME, int(0)), Ok(int(0)));
    assert_eq!(unwrap_or(&Value::err(text("e")), OK, int(9)), Ok(int(9)));
    assert!(unwrap_or(&text("plain"), SOME, int(0)).is_err());
}

#[test]
fn test_option_result_conversions() {
    assert_eq!(ok_or(&Value::some(int(1)), text("missing")), Ok(Value::ok(int(1))));
    assert_eq!(ok_or(&Value::none(), text("missing")), Ok(Value::err(text("missing"))));
    assert_eq!(ok_option(&Value::ok(int(2))), Ok(Value::some(int(2))));
    assert_eq!(ok_option(&Value::err(text("e"))), Ok(Value::none()));
    assert_eq!(err_option(&Value::err(text("e"))), Ok(Value::some(text("e"))));
    assert_eq!(err_option(&Value::ok(int(2))), Ok(Value::none()));
    assert!(ok_option(&Value::some(int(1))).is_err());
}
