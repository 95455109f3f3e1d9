//! Tests for the prelude module.
//!
//! The prelude is the one-stop import for everyday filtering. These tests
//! check that a glob import is enough to write complete pipelines.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - Prelude exports are accessible
//! 2. **Workflows** - Complete pipelines using only prelude imports

use arrayfilter::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test the free functions and result type.
///
/// Verifies single-operation filters and queries resolve unqualified.
#[test]
fn test_prelude_functions() {
    let source = [3, 1, 4, 1, 5, 9, 2, 6];

    let result: FilterResult<i32> = take_first(&source, 3);
    assert_eq!(result.data(), &[3, 1, 4]);
    assert_eq!(result.status(), FilterStatus::Success);

    assert_eq!(distinct(&source, natural).data(), &[3, 1, 4, 5, 9, 2, 6]);
    assert_eq!(count_where(&source, |x: &i32| *x > 3), 4);
    assert_eq!(find_last(&source, |x: &i32| *x == 1), Some(&1));
}

/// Test the extension traits.
///
/// Verifies slice and Vec methods are in scope.
#[test]
fn test_prelude_traits() {
    let source = [5, 4, 3, 2, 1];
    assert_eq!(source.filter_last(2).data(), &[2, 1]);

    let mut buf = vec![1, 2, 3, 4];
    assert_eq!(buf.retain_where(|x: &i32| x % 2 == 0), Ok(2));
    assert_eq!(buf, vec![2, 4]);
}

// ============================================================================
// Workflow Tests
// ============================================================================

/// Test a builder pipeline and a combinator.
///
/// Verifies builder, chain and union types work with prelude imports.
#[test]
fn test_prelude_workflow() {
    let source: Vec<i32> = (0..10).collect();

    let result = FilterBuilder::begin()
        .filter_where(|x: &i32| x % 3 == 0)
        .reverse()
        .end(&source);
    assert_eq!(result.data(), &[9, 6, 3, 0]);

    let mut low = FilterChain::new();
    low.add_take_first(2).unwrap();
    let mut high = FilterChain::new();
    high.add_where(|x: &i32| *x >= 8).unwrap();

    let mut union = FilterUnion::new();
    union.add(low).unwrap().add(high).unwrap();
    assert_eq!(union.apply(&source, descending).data(), &[9, 8, 1, 0]);
}
