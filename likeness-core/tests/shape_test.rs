// likeness-core - Shape comparison integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for shape comparison.
//!
//! Tests for: primitive kinds, callables, sequence coverage, records
//! counting callable fields

mod common;

use common::*;

#[test]
fn test_primitive_kinds() {
    assert!(same_shape(&int(1), &Value::float(2.5)));
    assert!(same_shape(&text("a"), &text("b")));
    assert!(same_shape(&Value::null(), &Value::null()));
    assert!(!same_shape(&text("a"), &int(1)));
    assert!(!same_shape(&Value::null(), &int(1)));
}

#[test]
fn test_callables_share_a_shape() {
    assert!(same_shape(&func("f"), &func("g")));
    assert!(!same_shape(&func("f"), &int(1)));
}

#[test]
fn test_sequences_ignore_length() {
    assert!(same_shape(&ints(&[1, 2, 3]), &ints(&[9])));
    assert!(same_shape(&ints(&[]), &ints(&[])));
    assert!(!same_shape(&ints(&[]), &ints(&[1])));
    assert!(!same_shape(
        &seq(vec![int(1), text("a")]),
        &ints(&[1, 2])
    ));
    assert!(same_shape(
        &seq(vec![int(1), text("a")]),
        &seq(vec![text("z"), int(7), int(8)])
    ));
}

#[test]
fn test_records_count_callable_fields() {
    assert!(same_shape(
        &rec(&[("a", int(1)), ("f", func("f"))]),
        &rec(&[("f", func("g")), ("a", int(2))])
    ));
    assert!(!same_shape(
        &rec(&[("a", int(1)), ("f", func("f"))]),
        &rec(&[("a", int(1))])
    ));
    assert!(!same_shape(&rec(&[("a", int(1))]), &rec(&[("a", text("x"))])));
}

#[test]
fn test_maps_and_sets() {
    assert!(same_shape(
        &Value::map(vec![(text("a"), int(1)), (text("b"), int(2))]),
        &Value::map(vec![(text("z"), int(9))])
    ));
    assert!(!same_shape(
        &Value::map(vec![(text("a"), int(1))]),
        &Value::map(vec![(int(1), int(1))])
    ));
    assert!(same_shape(
        &Value::set(vec![int(1), int(2)]),
        &Value::set(vec![int(3)])
    ));
}

#[test]
fn test_kind_mismatches_are_not_same_shape() {
    assert!(!same_shape(&ints(&[1]), &Value::set(vec![int(1)])));
    assert!(!same_shape(&ints(&[1]), &int(1)));
    assert!(same_shape(&Value::now(), &Value::now()));
}

#[test]
fn test_equal_values_share_a_shape() {
    let values = [
        int(3),
        ints(&[2, 1]),
        rec(&[("a", ints(&[1])), ("b", text("x"))]),
        Value::map(vec![(text("k"), Value::null())]),
    ];
    for value in &values {
        assert!(eq(value, &value.clone()));
        assert!(same_shape(value, value), "{} should share its own shape", value);
    }
}
