//! Single-operation filters and in-place variants.
//!
//! ## Purpose
//!
//! This module exposes every operation as a standalone function over a
//! source slice, plus the in-place variants that compact a mutable buffer.
//!
//! ## Design notes
//!
//! * **Validate, then allocate**: Input is checked before any buffer exists.
//! * **No panics**: Invalid input becomes a failed [`FilterResult`] (or
//!   `Err` for in-place variants), never a panic.
//! * **Exact buffers**: Output is reserved at exactly the surviving count.
//!
//! ## Invariants
//!
//! * Results preserve source order except `reverse`, `at_indices` (caller
//!   order) and `distinct` (first-occurrence order).
//! * In-place variants leave the buffer a permutation of its original contents.

// External dependencies
use core::cmp::Ordering;
use log::{debug, trace};

// Internal dependencies
use crate::algorithms::{in_place as compact, positional, selective};
use crate::engine::output::FilterResult;
use crate::engine::validator::Validator;
use crate::primitives::buffer::gather;
use crate::primitives::errors::FilterError;
use crate::primitives::selection::Selection;

// ============================================================================
// Positional Filters
// ============================================================================

/// The first `min(count, len)` elements.
pub fn take_first<T: Clone>(source: &[T], count: usize) -> FilterResult<T> {
    single(source, "take_first", |s| Ok(positional::take_first(s.len(), count)))
}

/// The last `min(count, len)` elements.
pub fn take_last<T: Clone>(source: &[T], count: usize) -> FilterResult<T> {
    single(source, "take_last", |s| Ok(positional::take_last(s.len(), count)))
}

/// Elements at positions `0, step, 2 * step, ...`. A zero step is invalid.
pub fn take_nth<T: Clone>(source: &[T], step: usize) -> FilterResult<T> {
    single(source, "take_nth", |s| {
        Validator::validate_step(step, "take_nth")?;
        Ok(positional::take_nth(s.len(), step))
    })
}

/// The first element, if any.
pub fn head<T: Clone>(source: &[T]) -> FilterResult<T> {
    single(source, "head", |s| Ok(positional::take_first(s.len(), 1)))
}

/// The last element, if any.
pub fn tail<T: Clone>(source: &[T]) -> FilterResult<T> {
    single(source, "tail", |s| Ok(positional::take_last(s.len(), 1)))
}

/// Everything except the first `count` elements.
pub fn skip_first<T: Clone>(source: &[T], count: usize) -> FilterResult<T> {
    single(source, "skip_first", |s| Ok(positional::skip_first(s.len(), count)))
}

/// Everything except the last `count` elements.
pub fn skip_last<T: Clone>(source: &[T], count: usize) -> FilterResult<T> {
    single(source, "skip_last", |s| Ok(positional::skip_last(s.len(), count)))
}

/// Everything except the last element.
pub fn init<T: Clone>(source: &[T]) -> FilterResult<T> {
    single(source, "init", |s| Ok(positional::skip_last(s.len(), 1)))
}

/// Everything except the first element.
pub fn rest<T: Clone>(source: &[T]) -> FilterResult<T> {
    single(source, "rest", |s| Ok(positional::skip_first(s.len(), 1)))
}

/// Elements in `[start, end)`; bounds past the end are clamped.
pub fn range<T: Clone>(source: &[T], start: usize, end: usize) -> FilterResult<T> {
    single(source, "range", |s| Ok(positional::range(s.len(), start, end)))
}

/// Elements at `start, start + step, ...` below `end`. A zero step is invalid.
pub fn slice<T: Clone>(source: &[T], start: usize, end: usize, step: usize) -> FilterResult<T> {
    single(source, "slice", |s| {
        Validator::validate_step(step, "slice")?;
        Ok(positional::slice(s.len(), start, end, step))
    })
}

/// Elements at the given positions, in the given order.
///
/// Any index past the end fails the whole call with `InvalidArgument`.
pub fn at_indices<T: Clone>(source: &[T], indices: &[usize]) -> FilterResult<T> {
    single(source, "at_indices", |s| {
        Validator::validate_indices(indices, s.len())?;
        positional::at_indices(s.len(), indices)
    })
}

// ============================================================================
// Selective Filters
// ============================================================================

/// Elements satisfying `predicate`.
pub fn filter_where<T, P>(source: &[T], predicate: P) -> FilterResult<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    single(source, "where", |s| selective::filter_where(s, &predicate))
}

/// Elements failing `predicate`.
pub fn filter_where_not<T, P>(source: &[T], predicate: P) -> FilterResult<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    single(source, "where_not", |s| selective::filter_where_not(s, &predicate))
}

/// The first occurrence of every distinct element, in source order.
///
/// `comparator` must be a total order; O(n log n).
pub fn distinct<T, C>(source: &[T], comparator: C) -> FilterResult<T>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering,
{
    single(source, "distinct", |s| selective::distinct(s, &comparator))
}

/// All elements, back to front.
pub fn reverse<T: Clone>(source: &[T]) -> FilterResult<T> {
    single(source, "reverse", |s| Ok(selective::reverse(s.len())))
}

// ============================================================================
// In-Place Variants
// ============================================================================

/// Compact elements satisfying `predicate` to the front of `buf`.
///
/// Returns the number of survivors; the tail holds the rest.
pub fn in_place<T, P>(buf: &mut [T], predicate: P) -> Result<usize, FilterError>
where
    P: Fn(&T) -> bool,
{
    checked_in_place::<T>("in_place")?;
    Ok(logged("in_place", buf.len(), compact::retain(buf, &predicate)))
}

/// Compact elements failing `predicate` to the front of `buf`.
pub fn in_place_not<T, P>(buf: &mut [T], predicate: P) -> Result<usize, FilterError>
where
    P: Fn(&T) -> bool,
{
    checked_in_place::<T>("in_place_not")?;
    Ok(logged("in_place_not", buf.len(), compact::retain_not(buf, &predicate)))
}

/// Keep the first `count` elements; `buf` is not modified.
pub fn in_place_take_first<T>(buf: &mut [T], count: usize) -> Result<usize, FilterError> {
    checked_in_place::<T>("in_place_take_first")?;
    Ok(logged(
        "in_place_take_first",
        buf.len(),
        compact::take_first(buf, count),
    ))
}

/// Shift everything after the first `count` elements to the front.
///
/// A zero count returns the full length; a count covering the whole buffer
/// returns zero. Neither modifies `buf`.
pub fn in_place_skip_first<T>(buf: &mut [T], count: usize) -> Result<usize, FilterError> {
    checked_in_place::<T>("in_place_skip_first")?;
    Ok(logged(
        "in_place_skip_first",
        buf.len(),
        compact::skip_first(buf, count),
    ))
}

/// Compact the first occurrence of every distinct element to the front.
///
/// `comparator` must be a total order.
pub fn in_place_distinct<T, C>(buf: &mut [T], comparator: C) -> Result<usize, FilterError>
where
    C: Fn(&T, &T) -> Ordering,
{
    checked_in_place::<T>("in_place_distinct")?;
    let kept = compact::distinct(buf, &comparator)
        .inspect_err(|err| debug!("in_place_distinct failed: {}", err))?;
    Ok(logged("in_place_distinct", buf.len(), kept))
}

// ============================================================================
// Helpers
// ============================================================================

fn single<T, F>(source: &[T], name: &'static str, select: F) -> FilterResult<T>
where
    T: Clone,
    F: FnOnce(&[T]) -> Result<Selection, FilterError>,
{
    let outcome = Validator::validate_source::<T>()
        .and_then(|()| select(source))
        .and_then(|selection| gather(source, &selection));

    match outcome {
        Ok(data) => {
            trace!("{} kept {} of {} elements", name, data.len(), source.len());
            FilterResult::from_vec(data)
        }
        Err(err) => {
            debug!("{} failed: {}", name, err);
            FilterResult::failure(err)
        }
    }
}

#[inline]
fn checked_in_place<T>(name: &'static str) -> Result<(), FilterError> {
    Validator::validate_source::<T>().inspect_err(|err| debug!("{} failed: {}", name, err))
}

#[inline]
fn logged(name: &'static str, len: usize, kept: usize) -> usize {
    trace!("{} kept {} of {} elements", name, kept, len);
    kept
}
