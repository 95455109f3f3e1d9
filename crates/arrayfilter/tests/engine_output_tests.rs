//! Tests for the filter result envelope.
//!
//! `FilterResult` owns the surviving elements of every array-producing
//! operation and reports how the operation ended:
//! - Status taxonomy (Success, Empty and the three failures)
//! - Ownership transfer via `release`, `free` and `into_vec`
//! - Null-object accessors on failed and released results
//! - Human-readable `Display` output
//!
//! ## Test Organization
//!
//! 1. **Construction** - Status derived from contents
//! 2. **Ownership Transfer** - release, free, conversions
//! 3. **Failures** - Error results and status mapping
//! 4. **Display** - Summary and truncated listings

use arrayfilter::prelude::*;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test status of a non-empty result.
///
/// Verifies that surviving elements yield `Success` and matching counts.
#[test]
fn test_result_success_status() {
    let result = take_first(&[1, 2, 3], 2);

    assert_eq!(result.status(), FilterStatus::Success);
    assert!(result.ok(), "Success should be ok");
    assert_eq!(result.count(), 2);
    assert_eq!(result.data(), &[1, 2]);
    assert!(result.error().is_none(), "Success carries no error");
    assert!(result.source_indices().is_none(), "Single ops do not track provenance");
}

/// Test status of an empty but valid result.
///
/// Verifies that zero survivors yield `Empty`, which still counts as ok.
#[test]
fn test_result_empty_status() {
    let result = filter_where(&[1, 3, 5], |x| x % 2 == 0);

    assert_eq!(result.status(), FilterStatus::Empty);
    assert!(result.ok(), "Empty should be ok");
    assert!(result.is_empty());
    assert_eq!(result.count(), 0);
}

/// Test the reported element size.
///
/// Verifies that the element size is the size of the element type.
#[test]
fn test_result_element_size() {
    assert_eq!(take_first(&[1u64, 2], 1).element_size(), 8);
    assert_eq!(take_first(&[1u8, 2], 1).element_size(), 1);
    assert_eq!(take_first(&[[0u16; 3]], 1).element_size(), 6);
}

/// Test iteration over a result.
///
/// Verifies borrowing and consuming iteration yield the data in order.
#[test]
fn test_result_iteration() {
    let result = reverse(&[1, 2, 3]);

    let borrowed: Vec<i32> = result.iter().copied().collect();
    assert_eq!(borrowed, vec![3, 2, 1]);

    let mut sum = 0;
    for value in &result {
        sum += value;
    }
    assert_eq!(sum, 6);

    let owned: Vec<i32> = result.into_iter().collect();
    assert_eq!(owned, vec![3, 2, 1]);
}

// ============================================================================
// Ownership Transfer Tests
// ============================================================================

/// Test releasing the buffer.
///
/// Verifies that `release` returns exactly what `data` showed and leaves the
/// result empty.
#[test]
fn test_release_transfers_buffer() {
    let source = vec![String::from("a"), String::from("b"), String::from("c")];
    let mut result = skip_first(&source, 1);
    let visible: Vec<String> = result.data().to_vec();

    let released = result.release();

    assert_eq!(released, visible, "Released buffer should match data()");
    assert_eq!(released.len(), 2);
    assert!(result.data().is_empty(), "Data should be empty after release");
    assert_eq!(result.count(), 0);
    assert_eq!(result.status(), FilterStatus::Empty);
}

/// Test releasing a tracked result.
///
/// Verifies that provenance is dropped together with the buffer.
#[test]
fn test_release_drops_source_indices() {
    let mut chain = FilterChain::new();
    chain.add_take_last(2).unwrap();
    let mut result = chain.apply_tracked(&[1, 2, 3]);
    assert_eq!(result.source_indices(), Some(&[1, 2][..]));

    let released = result.release();
    assert_eq!(released, vec![2, 3]);
    assert!(result.source_indices().is_none());
}

/// Test freeing twice.
///
/// Verifies that `free` empties the result and a second call is a no-op.
#[test]
fn test_free_is_idempotent() {
    let mut result = take_first(&[1, 2, 3], 3);

    result.free();
    assert!(result.data().is_empty());
    assert_eq!(result.count(), 0);

    result.free();
    assert!(result.data().is_empty());
    assert!(result.ok(), "Freeing does not turn a result into a failure");
}

/// Test conversion into a `Result`.
///
/// Verifies that ok results convert to `Ok` and failures to their error.
#[test]
fn test_into_result() {
    assert_eq!(take_first(&[1, 2], 5).into_result(), Ok(vec![1, 2]));
    assert_eq!(take_first::<i32>(&[], 5).into_result(), Ok(vec![]));
    assert_eq!(
        take_nth(&[1, 2], 0).into_result(),
        Err(FilterError::ZeroStep {
            operation: "take_nth"
        })
    );
}

// ============================================================================
// Failure Tests
// ============================================================================

/// Test accessors on a failed result.
///
/// Verifies the null-object policy: empty data, zero count, recorded error.
#[test]
fn test_failure_is_null_object() {
    let result = at_indices(&[1, 2, 3], &[0, 7]);

    assert_eq!(result.status(), FilterStatus::InvalidArgument);
    assert!(!result.ok());
    assert!(result.data().is_empty());
    assert_eq!(result.count(), 0);
    assert!(result.source_indices().is_none());
    assert_eq!(
        result.error(),
        Some(&FilterError::IndexOutOfBounds { index: 7, len: 3 })
    );
    assert!(result.into_vec().is_empty());
}

/// Test the error to status mapping.
///
/// Verifies each error variant lands on the documented status.
#[test]
fn test_error_status_mapping() {
    assert_eq!(
        FilterError::ZeroSizedElement.status(),
        FilterStatus::InvalidArgument
    );
    assert_eq!(FilterError::MissingChain.status(), FilterStatus::InvalidArgument);
    assert_eq!(
        FilterError::MissingCombinator.status(),
        FilterStatus::InvalidArgument
    );
    assert_eq!(FilterError::MissingBuilder.status(), FilterStatus::Error);
    assert_eq!(
        FilterError::OutOfMemory { requested: 10 }.status(),
        FilterStatus::OutOfMemory
    );
    assert_eq!(
        FilterError::TooFewChains {
            combinator: "union",
            got: 1,
            min: 2
        }
        .status(),
        FilterStatus::InvalidArgument
    );

    assert!(FilterStatus::Success.is_ok());
    assert!(FilterStatus::Empty.is_ok());
    assert!(FilterStatus::Error.is_failure());
    assert!(FilterStatus::OutOfMemory.is_failure());
}

/// Test building a result from an error.
///
/// Verifies that `From<FilterError>` produces a failed result.
#[test]
fn test_result_from_error() {
    let result: FilterResult<u32> = FilterError::MissingChain.into();
    assert_eq!(result.status(), FilterStatus::InvalidArgument);
    assert_eq!(result.error(), Some(&FilterError::MissingChain));
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the summary block.
///
/// Verifies that status, count and element size are printed.
#[test]
fn test_display_summary() {
    let text = format!("{}", take_first(&[7i32, 8, 9], 2));

    assert!(text.contains("Summary:"));
    assert!(text.contains("Status:       success"));
    assert!(text.contains("Count:        2"));
    assert!(text.contains("Element size: 4"));
    assert!(text.contains("       1  8"), "Rows list index and value");
    assert!(!text.contains("Provenance"));
}

/// Test display of a failure.
///
/// Verifies that the error message is shown and no rows are printed.
#[test]
fn test_display_failure() {
    let text = format!("{}", slice(&[1, 2, 3], 0, 3, 0));

    assert!(text.contains("Status:       invalid argument"));
    assert!(text.contains("Error:"));
    assert!(text.contains("slice requires a step of at least 1"));
    assert!(!text.contains("Elements:"));
}

/// Test truncated listings.
///
/// Verifies that long results show the first and last ten rows only.
#[test]
fn test_display_truncates_long_results() {
    let source: Vec<i32> = (0..30).collect();
    let text = format!("{}", take_first(&source, 30));

    assert!(text.contains("       9  9"));
    assert!(text.contains("..."));
    assert!(!text.contains("      15  15"), "Middle rows are elided");
    assert!(text.contains("      29  29"));
}

/// Test display of provenance.
///
/// Verifies that tracked results print the source column.
#[test]
fn test_display_with_provenance() {
    let mut chain = FilterChain::new();
    chain.add_where(|x: &i32| *x > 1).unwrap();
    let text = format!("{}", chain.apply_tracked(&[5, 1, 6]));

    assert!(text.contains("Provenance:   Tracked"));
    assert!(text.contains("Source"));
    assert!(text.contains("       1        2  6"));
}
