// likeness-core - Property-based tests for comparison
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Property-based tests for comparison.
//!
//! Tests the algebraic contracts: reflexivity, symmetry, permutation
//! invariance, length sensitivity, and the links between content, shape
//! and pattern comparison.

mod common;

use common::*;
use proptest::prelude::*;

/// Strategy for callable-free values up to a few levels deep
fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::null()),
        Just(Value::absent()),
        any::<bool>().prop_map(Value::bool),
        (-50i64..50).prop_map(Value::int),
        (-50.0f64..50.0).prop_map(Value::float),
        "[a-c]{0,3}".prop_map(|s| Value::text(s)),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::seq),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::set),
            prop::collection::vec(("[a-d]", inner.clone()), 0..4)
                .prop_map(|fields| Value::record(fields)),
            inner.prop_map(Value::boxed),
        ]
    })
}

// =============================================================================
// Content comparison
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every callable-free value equals itself
    #[test]
    fn compare_is_reflexive(v in arb_value()) {
        prop_assert_eq!(compare(&v, &v.clone()), Outcome::Equivalent);
    }

    /// compare(a, b) and compare(b, a) agree
    #[test]
    fn compare_is_symmetric(a in arb_value(), b in arb_value()) {
        prop_assert_eq!(compare(&a, &b), compare(&b, &a));
    }

    /// Reordering a sequence never changes its content
    #[test]
    fn sequences_ignore_order(
        (xs, shuffled) in prop::collection::vec(arb_value(), 0..6)
            .prop_flat_map(|xs| (Just(xs.clone()), Just(xs).prop_shuffle()))
    ) {
        prop_assert!(eq(&Value::seq(xs), &Value::seq(shuffled)));
    }

    /// Adding an element always breaks equality
    #[test]
    fn sequences_are_length_sensitive(
        xs in prop::collection::vec(arb_value(), 0..5),
        extra in arb_value(),
    ) {
        let mut longer = xs.clone();
        longer.push(extra);
        prop_assert_eq!(
            compare(&Value::seq(xs), &Value::seq(longer)),
            Outcome::NotEquivalent
        );
    }

    /// Integer content is equivalent exactly when the multisets agree
    #[test]
    fn int_sequences_match_sorted_comparison(
        a in prop::collection::vec(0i64..4, 0..6),
        b in prop::collection::vec(0i64..4, 0..6),
    ) {
        let (mut sa, mut sb) = (a.clone(), b.clone());
        sa.sort_unstable();
        sb.sort_unstable();
        prop_assert_eq!(eq(&ints(&a), &ints(&b)), sa == sb);
    }
}

// =============================================================================
// Shape and pattern links
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Equal values always share a shape
    #[test]
    fn equal_values_share_a_shape(a in arb_value(), b in arb_value()) {
        if eq(&a, &b) {
            prop_assert!(same_shape(&a, &b));
        }
        prop_assert!(same_shape(&a, &a));
    }

    /// Every value satisfies itself and the bare wildcard
    #[test]
    fn values_satisfy_themselves(v in arb_value()) {
        prop_assert!(satisfies(&v, &v));
        prop_assert!(satisfies(&v, &Value::any()));
    }

    /// Without wildcards, matching is content equality
    #[test]
    fn satisfies_without_wildcards_is_eq(a in arb_value(), b in arb_value()) {
        prop_assert_eq!(satisfies(&a, &b), eq(&a, &b));
    }

    /// Wildcards replacing every element match any sequence of that length
    #[test]
    fn wildcard_sequences_match_by_length(xs in prop::collection::vec(arb_value(), 0..5)) {
        let pattern = Value::seq(vec![Value::any(); xs.len()]);
        prop_assert!(satisfies(&Value::seq(xs), &pattern));
    }
}
