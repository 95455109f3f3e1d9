//! Filtering methods on slices.
//!
//! ## Purpose
//!
//! This module provides [`ArrayFilterExt`], which makes the common
//! operations available as methods on any `[T]` (and therefore on arrays
//! and `Vec<T>` through deref).
//!
//! ## Design notes
//!
//! * **Thin**: Every method forwards to an engine function or query kernel;
//!   there is no behaviour of its own.
//! * **Short names**: Methods carry a `filter_` prefix where a bare name
//!   would collide with inherent slice methods (`first`, `last`, `len`).

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::algorithms::query;
use crate::engine::chain::FilterChain;
use crate::engine::filters;
use crate::engine::output::FilterResult;

// ============================================================================
// Extension Trait
// ============================================================================

/// Filter operations as slice methods.
///
/// ```
/// use arrayfilter::prelude::*;
///
/// let values = [5, 3, 5, 1, 3];
/// assert_eq!(values.filter_distinct(|a, b| a.cmp(b)).data(), &[5, 3, 1]);
/// assert_eq!(values.count_where(|&x| x > 2), 4);
/// ```
pub trait ArrayFilterExt<T> {
    /// Elements satisfying `predicate`.
    fn filter_where<P>(&self, predicate: P) -> FilterResult<T>
    where
        T: Clone,
        P: Fn(&T) -> bool;

    /// Elements failing `predicate`.
    fn filter_where_not<P>(&self, predicate: P) -> FilterResult<T>
    where
        T: Clone,
        P: Fn(&T) -> bool;

    /// The first `count` elements.
    fn filter_first(&self, count: usize) -> FilterResult<T>
    where
        T: Clone;

    /// The last `count` elements.
    fn filter_last(&self, count: usize) -> FilterResult<T>
    where
        T: Clone;

    /// Elements in `[start, end)`.
    fn filter_range(&self, start: usize, end: usize) -> FilterResult<T>
    where
        T: Clone;

    /// Elements at `start, start + step, ...` below `end`.
    fn filter_slice(&self, start: usize, end: usize, step: usize) -> FilterResult<T>
    where
        T: Clone;

    /// First occurrence of every distinct element.
    fn filter_distinct<C>(&self, comparator: C) -> FilterResult<T>
    where
        T: Clone,
        C: Fn(&T, &T) -> Ordering;

    /// Run a chain over this slice.
    fn filter_chain(&self, chain: &FilterChain<'_, T>) -> FilterResult<T>
    where
        T: Clone;

    /// Number of elements satisfying `predicate`.
    fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool;

    /// True if any element satisfies `predicate`.
    fn any_match<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool;

    /// True if every element satisfies `predicate`.
    fn all_match<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool;

    /// True if no element satisfies `predicate`.
    fn none_match<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool;

    /// The first element satisfying `predicate`.
    fn find_first_where<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool;

    /// The last element satisfying `predicate`.
    fn find_last_where<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool;
}

impl<T> ArrayFilterExt<T> for [T] {
    fn filter_where<P>(&self, predicate: P) -> FilterResult<T>
    where
        T: Clone,
        P: Fn(&T) -> bool,
    {
        filters::filter_where(self, predicate)
    }

    fn filter_where_not<P>(&self, predicate: P) -> FilterResult<T>
    where
        T: Clone,
        P: Fn(&T) -> bool,
    {
        filters::filter_where_not(self, predicate)
    }

    fn filter_first(&self, count: usize) -> FilterResult<T>
    where
        T: Clone,
    {
        filters::take_first(self, count)
    }

    fn filter_last(&self, count: usize) -> FilterResult<T>
    where
        T: Clone,
    {
        filters::take_last(self, count)
    }

    fn filter_range(&self, start: usize, end: usize) -> FilterResult<T>
    where
        T: Clone,
    {
        filters::range(self, start, end)
    }

    fn filter_slice(&self, start: usize, end: usize, step: usize) -> FilterResult<T>
    where
        T: Clone,
    {
        filters::slice(self, start, end, step)
    }

    fn filter_distinct<C>(&self, comparator: C) -> FilterResult<T>
    where
        T: Clone,
        C: Fn(&T, &T) -> Ordering,
    {
        filters::distinct(self, comparator)
    }

    fn filter_chain(&self, chain: &FilterChain<'_, T>) -> FilterResult<T>
    where
        T: Clone,
    {
        chain.apply(self)
    }

    fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        query::count_where(self, predicate)
    }

    fn any_match<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        query::any_match(self, predicate)
    }

    fn all_match<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        query::all_match(self, predicate)
    }

    fn none_match<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        query::none_match(self, predicate)
    }

    fn find_first_where<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        query::find_first(self, predicate)
    }

    fn find_last_where<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        query::find_last(self, predicate)
    }
}
