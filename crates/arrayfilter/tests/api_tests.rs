//! Tests for the fluent builder API.
//!
//! The builder records steps and terminates by applying them. These tests
//! cover:
//! - Building and applying pipelines fluently
//! - Aliases (`begin`/`new`, `end`/`apply`)
//! - Extracting the recorded chain with `build`
//! - The handle-level `apply_builder`
//!
//! ## Test Organization
//!
//! 1. **Fluent Pipelines** - Step recording and application
//! 2. **Terminal Operations** - end, apply, build
//! 3. **Handle-Level Entry** - Missing builder semantics

use arrayfilter::prelude::*;

fn digits() -> Vec<i32> {
    (0..10).collect()
}

// ============================================================================
// Fluent Pipeline Tests
// ============================================================================

/// Test the canonical pipeline.
///
/// Verifies where + take_first over 0..10.
#[test]
fn test_builder_where_take() {
    let result = FilterBuilder::begin()
        .filter_where(|x: &i32| x % 2 == 0)
        .take_first(3)
        .end(&digits());

    assert_eq!(result.status(), FilterStatus::Success);
    assert_eq!(result.data(), &[0, 2, 4]);
}

/// Test every step method.
///
/// Verifies a pipeline touching each builder step.
#[test]
fn test_builder_all_steps() {
    let source: Vec<i32> = (0..30).collect();
    let result = FilterBuilder::new()
        .rest() // 1..30
        .init() // 1..29
        .skip_first(1) // 2..29
        .skip_last(1) // 2..28
        .take_nth(2) // 2, 4, ..., 26
        .range(0, 10) // 2, 4, ..., 20
        .slice(1, 10, 2) // 4, 8, 12, 16, 20
        .filter_where_not(|x: &i32| *x == 8)
        .reverse() // 20, 16, 12, 4
        .at_indices(&[3, 0, 3]) // 4, 20, 4
        .distinct(natural) // 4, 20
        .take_last(5)
        .take_first(5)
        .end(&source);

    assert_eq!(result.data(), &[4, 20]);
}

/// Test head and tail in a builder.
///
/// Verifies the shorthands.
#[test]
fn test_builder_head_tail() {
    let source = ['p', 'q', 'r'];
    assert_eq!(FilterBuilder::begin().head().end(&source).data(), &['p']);
    assert_eq!(FilterBuilder::begin().tail().end(&source).data(), &['r']);
}

/// Test a predicate capturing local state.
///
/// Verifies closures borrowed from the caller's scope.
#[test]
fn test_builder_borrowed_context() {
    let banned = vec![2, 3, 5, 7];
    let result = FilterBuilder::begin()
        .filter_where(|x: &i32| !banned.contains(x))
        .end(&digits());
    assert_eq!(result.data(), &[0, 1, 4, 6, 8, 9]);
}

/// Test parameter errors in a builder.
///
/// Verifies they surface at the terminal call with InvalidArgument.
#[test]
fn test_builder_invalid_step() {
    let builder = FilterBuilder::begin().slice(0, 5, 0).take_first(1);
    assert!(builder.deferred_error().is_none(), "Parameters are checked on apply");
    assert_eq!(builder.len(), 2);

    let result = builder.end(&digits());
    assert_eq!(result.status(), FilterStatus::InvalidArgument);
}

// ============================================================================
// Terminal Operation Tests
// ============================================================================

/// Test the `apply` alias.
///
/// Verifies `apply` behaves exactly like `end`.
#[test]
fn test_builder_apply_alias() {
    let by_end = FilterBuilder::begin().take_last(2).end(&digits());
    let by_apply = FilterBuilder::begin().take_last(2).apply(&digits());
    assert_eq!(by_end, by_apply);
}

/// Test extracting the chain.
///
/// Verifies `build` returns a reusable chain with the recorded steps.
#[test]
fn test_builder_build() {
    let chain = FilterBuilder::begin()
        .filter_where(|x: &i32| *x > 5)
        .head()
        .build()
        .unwrap();

    assert_eq!(chain.len(), 2);
    assert_eq!(chain.apply(&digits()).data(), &[6]);
    assert_eq!(chain.apply(&[9, 1]).data(), &[9]);
}

/// Test an empty builder.
///
/// Verifies identity behaviour.
#[test]
fn test_builder_empty() {
    let builder: FilterBuilder<'_, i32> = FilterBuilder::default();
    assert!(builder.is_empty());
    assert_eq!(builder.end(&[1, 2]).data(), &[1, 2]);
}

// ============================================================================
// Handle-Level Entry Tests
// ============================================================================

/// Test a missing builder.
///
/// Verifies the Error status, distinct from InvalidArgument.
#[test]
fn test_apply_builder_missing() {
    let result = apply_builder::<i32>(None, &digits());
    assert_eq!(result.status(), FilterStatus::Error);
    assert_eq!(result.error(), Some(&FilterError::MissingBuilder));
    assert_eq!(result.count(), 0);
}

/// Test a present builder.
///
/// Verifies `apply_builder` forwards to `end`.
#[test]
fn test_apply_builder_present() {
    let builder = FilterBuilder::begin().filter_where(|x: &i32| x % 3 == 0);
    assert_eq!(
        apply_builder(Some(builder), &digits()).data(),
        &[0, 3, 6, 9]
    );
}
