//! Tests for the ready-made comparators and predicates.
//!
//! Comparators drive `distinct` and the set combinators, so they must be
//! total orders. These tests cover:
//! - Integer orders (natural, descending, reversed, by_key)
//! - The floating-point total order (signed zeros, NaN grouping)
//! - Numeric predicates built on `num-traits`
//!
//! ## Test Organization
//!
//! 1. **Integer Orders** - Basic comparators
//! 2. **Floating-Point Order** - float_total with distinct and combinators
//! 3. **Predicates** - Numeric helpers

use approx::assert_relative_eq;
use core::cmp::Ordering;

use arrayfilter::predicate::{equal_to, is_negative, is_odd, is_positive, is_zero, less_than};
use arrayfilter::prelude::*;

// ============================================================================
// Integer Order Tests
// ============================================================================

/// Test the basic comparators.
///
/// Verifies natural, descending and reversed orders.
#[test]
fn test_basic_comparators() {
    assert_eq!(natural(&1, &2), Ordering::Less);
    assert_eq!(descending(&1, &2), Ordering::Greater);
    assert_eq!(reversed(natural::<i32>)(&1, &2), Ordering::Greater);
    assert_eq!(natural(&"b", &"b"), Ordering::Equal);
}

/// Test comparing by key.
///
/// Verifies the key alone decides the order.
#[test]
fn test_by_key() {
    let by_len = by_key(|s: &&str| s.len());
    assert_eq!(by_len(&"abc", &"xy"), Ordering::Greater);
    assert_eq!(by_len(&"ab", &"xy"), Ordering::Equal);
}

// ============================================================================
// Floating-Point Order Tests
// ============================================================================

/// Test the float total order.
///
/// Verifies the ordering of infinities, zeros and NaN.
#[test]
fn test_float_total_order() {
    let nan = f64::NAN.copysign(1.0);
    assert_eq!(float_total(&1.0, &2.0), Ordering::Less);
    assert_eq!(float_total(&-0.0, &0.0), Ordering::Less);
    assert_eq!(float_total(&0.0, &0.0), Ordering::Equal);
    assert_eq!(float_total(&f64::INFINITY, &nan), Ordering::Less);
    assert_eq!(float_total(&-nan, &f64::NEG_INFINITY), Ordering::Less);
    assert_eq!(float_total(&nan, &nan), Ordering::Equal);
}

/// Test distinct over floats.
///
/// Verifies NaN is grouped and signed zeros stay apart.
#[test]
fn test_distinct_floats() {
    let source = [1.5, f64::NAN, 1.5, -0.0, f64::NAN, 0.0, 2.25];
    let result = distinct(&source, float_total);

    assert_eq!(result.count(), 5);
    let data = result.data();
    assert_relative_eq!(data[0], 1.5);
    assert!(data[1].is_nan());
    assert!(data[2] == 0.0 && data[2].is_sign_negative());
    assert!(data[3] == 0.0 && data[3].is_sign_positive());
    assert_relative_eq!(data[4], 2.25);
}

/// Test a float union.
///
/// Verifies combinators work with the float order.
#[test]
fn test_union_floats() {
    let source = [0.5f32, 3.25, -1.75, 3.25, 8.0];

    let mut small = FilterChain::new();
    small.add_where(|x: &f32| *x < 1.0).unwrap();
    let mut large = FilterChain::new();
    large.add_where(|x: &f32| *x > 3.0).unwrap();

    let mut union = FilterUnion::new();
    union.add(small).unwrap().add(large).unwrap();

    let result = union.apply(&source, float_total);
    let expected = [-1.75f32, 0.5, 3.25, 8.0];
    assert_eq!(result.count(), expected.len());
    for (actual, expected) in result.data().iter().zip(expected.iter()) {
        assert_relative_eq!(*actual, *expected, epsilon = 1e-6);
    }
    assert_eq!(result.source_indices(), Some(&[2, 0, 1, 4][..]));
}

// ============================================================================
// Predicate Tests
// ============================================================================

/// Test numeric predicates.
///
/// Verifies the helpers against hand-picked values.
#[test]
fn test_numeric_predicates() {
    let source = [-2i64, -1, 0, 1, 2, 3];
    assert_eq!(filter_where(&source, is_odd).data(), &[-1, 1, 3]);
    assert_eq!(filter_where(&source, is_zero).data(), &[0]);
    assert_eq!(filter_where(&source, is_positive).data(), &[1, 2, 3]);
    assert_eq!(filter_where(&source, less_than(0i64)).data(), &[-2, -1]);
    assert_eq!(filter_where(&source, equal_to(2i64)).data(), &[2]);
}

/// Test predicates on floats.
///
/// Verifies the generic helpers accept floating-point values.
#[test]
fn test_float_predicates() {
    let source = [-0.5, 0.0, 0.25, 4.0];
    let result = filter_where(&source, is_positive);
    assert_eq!(result.count(), 2);
    assert_relative_eq!(result.data()[0], 0.25);
    assert_relative_eq!(result.data()[1], 4.0);
}

/// Test sign predicates on signed zeros and NaN.
///
/// Verifies that only values strictly away from zero match.
#[test]
fn test_float_sign_edge_cases() {
    let source = [-0.0f64, 0.0, f64::NAN, -f64::NAN, -1.5, 2.5];

    let positive = filter_where(&source, is_positive);
    assert_eq!(positive.count(), 1);
    assert_relative_eq!(positive.data()[0], 2.5);

    let negative = filter_where(&source, is_negative);
    assert_eq!(negative.count(), 1);
    assert_relative_eq!(negative.data()[0], -1.5);

    assert!(!is_positive(&0.0f64));
    assert!(!is_negative(&-0.0f64));
    assert!(!is_positive(&f64::NAN));
}
