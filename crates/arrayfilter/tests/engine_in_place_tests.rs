//! Tests for the in-place variants.
//!
//! In-place variants compact survivors to the front of a mutable buffer and
//! return how many there are. These tests cover:
//! - Predicate compaction and partitioning
//! - Positional compaction and its untouched-buffer edge cases
//! - First-occurrence deduplication
//! - Rejection of zero-sized element types
//!
//! ## Test Organization
//!
//! 1. **Predicate Compaction** - in_place, in_place_not
//! 2. **Positional Compaction** - take_first, skip_first
//! 3. **Distinct** - in_place_distinct
//! 4. **Validation** - Err versus Ok(0)

use arrayfilter::prelude::*;

fn sorted(mut values: Vec<i32>) -> Vec<i32> {
    values.sort();
    values
}

// ============================================================================
// Predicate Compaction Tests
// ============================================================================

/// Test predicate compaction.
///
/// Verifies that survivors occupy the prefix in their original order.
#[test]
fn test_in_place_keeps_order() {
    let mut buf = vec![7, 2, 9, 4, 1, 6];
    let kept = in_place(&mut buf, |x| x % 2 == 0).unwrap();

    assert_eq!(kept, 3);
    assert_eq!(&buf[..kept], &[2, 4, 6]);
}

/// Test that compaction only permutes.
///
/// Verifies that no element is lost or duplicated.
#[test]
fn test_in_place_is_permutation() {
    let original = vec![5, 3, 8, 3, 1, 9, 2];
    let mut buf = original.clone();
    let _ = in_place(&mut buf, |x| *x > 3).unwrap();

    assert_eq!(sorted(buf), sorted(original));
}

/// Test in_place and in_place_not as a partition.
///
/// Verifies that the two prefixes together are exactly the source.
#[test]
fn test_in_place_partition() {
    let source = vec![4, 11, 6, 3, 10, 7, 8];
    let predicate = |x: &i32| *x < 7;

    let mut yes = source.clone();
    let kept_yes = in_place(&mut yes, predicate).unwrap();
    let mut no = source.clone();
    let kept_no = in_place_not(&mut no, predicate).unwrap();

    assert_eq!(kept_yes + kept_no, source.len());
    assert!(yes[..kept_yes].iter().all(predicate));
    assert!(!no[..kept_no].iter().any(predicate));

    let mut union: Vec<i32> = yes[..kept_yes].to_vec();
    union.extend_from_slice(&no[..kept_no]);
    assert_eq!(sorted(union), sorted(source));
}

/// Test zero survivors.
///
/// Verifies that no survivors is `Ok(0)`, distinct from an error.
#[test]
fn test_in_place_no_survivors() {
    let mut buf = vec![1, 3, 5];
    assert_eq!(in_place(&mut buf, |x| x % 2 == 0), Ok(0));

    let mut empty: Vec<i32> = Vec::new();
    assert_eq!(in_place(&mut empty, |_| true), Ok(0));
}

/// Test owned elements.
///
/// Verifies that non-Copy elements are moved by swapping, not cloned.
#[test]
fn test_in_place_owned_elements() {
    let mut buf: Vec<String> = ["keep", "x", "keep too", "y"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let kept = in_place(&mut buf, |s| s.starts_with("keep")).unwrap();
    assert_eq!(kept, 2);
    assert_eq!(buf[0], "keep");
    assert_eq!(buf[1], "keep too");
    assert_eq!(buf.len(), 4, "The slice itself is never shortened");
}

// ============================================================================
// Positional Compaction Tests
// ============================================================================

/// Test in-place take_first.
///
/// Verifies the clamped count and that the buffer is untouched.
#[test]
fn test_in_place_take_first() {
    let mut buf = vec![1, 2, 3, 4];
    assert_eq!(in_place_take_first(&mut buf, 2), Ok(2));
    assert_eq!(in_place_take_first(&mut buf, 10), Ok(4));
    assert_eq!(buf, vec![1, 2, 3, 4]);
}

/// Test in-place skip_first with zero.
///
/// Verifies that skipping nothing returns the full count and changes nothing.
#[test]
fn test_in_place_skip_first_zero() {
    let mut buf = vec![9, 8, 7];
    assert_eq!(in_place_skip_first(&mut buf, 0), Ok(3));
    assert_eq!(buf, vec![9, 8, 7]);
}

/// Test in-place skip_first shifting.
///
/// Verifies that the remainder moves to the front.
#[test]
fn test_in_place_skip_first_shifts() {
    let mut buf = vec![1, 2, 3, 4, 5];
    let kept = in_place_skip_first(&mut buf, 2).unwrap();
    assert_eq!(kept, 3);
    assert_eq!(&buf[..kept], &[3, 4, 5]);
}

/// Test in-place skip_first past the end.
///
/// Verifies that skipping everything returns zero and changes nothing.
#[test]
fn test_in_place_skip_first_everything() {
    let mut buf = vec![1, 2, 3];
    assert_eq!(in_place_skip_first(&mut buf, 3), Ok(0));
    assert_eq!(in_place_skip_first(&mut buf, 99), Ok(0));
    assert_eq!(buf, vec![1, 2, 3]);
}

// ============================================================================
// Distinct Tests
// ============================================================================

/// Test in-place deduplication.
///
/// Verifies first-occurrence order in the prefix and a permuted buffer.
#[test]
fn test_in_place_distinct() {
    let original = vec![3, 1, 3, 2, 1, 3];
    let mut buf = original.clone();
    let kept = in_place_distinct(&mut buf, natural).unwrap();

    assert_eq!(kept, 3);
    assert_eq!(&buf[..kept], &[3, 1, 2]);
    assert_eq!(sorted(buf), sorted(original));
}

/// Test in-place deduplication agrees with the copying variant.
///
/// Verifies both produce the same survivors.
#[test]
fn test_in_place_distinct_matches_distinct() {
    let source = vec![8, 8, 2, 5, 2, 8, 0, 5];
    let copied = distinct(&source, natural);

    let mut buf = source.clone();
    let kept = in_place_distinct(&mut buf, natural).unwrap();
    assert_eq!(&buf[..kept], copied.data());
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test zero-sized element types.
///
/// Verifies that every in-place variant returns an error, not `Ok(0)`.
#[test]
fn test_in_place_zero_sized_rejected() {
    let mut buf = [(), ()];
    let err = Err(FilterError::ZeroSizedElement);

    assert_eq!(in_place(&mut buf, |_| true), err);
    assert_eq!(in_place_not(&mut buf, |_| true), err);
    assert_eq!(in_place_take_first(&mut buf, 1), err);
    assert_eq!(in_place_skip_first(&mut buf, 1), err);
    assert_eq!(in_place_distinct(&mut buf, |_, _| core::cmp::Ordering::Equal), err);
}
