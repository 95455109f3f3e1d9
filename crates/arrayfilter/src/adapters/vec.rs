//! In-place filtering methods on `Vec`.
//!
//! The in-place engine functions compact survivors to the front of a slice
//! and report how many there are. [`InPlaceFilterExt`] does the same on a
//! `Vec` and then truncates it, so the discarded elements are dropped.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::engine::filters;
use crate::primitives::errors::FilterError;

/// In-place filter operations on an owned vector.
///
/// Every method returns the new length.
pub trait InPlaceFilterExt<T> {
    /// Keep elements satisfying `predicate`.
    fn retain_where<P>(&mut self, predicate: P) -> Result<usize, FilterError>
    where
        P: Fn(&T) -> bool;

    /// Keep elements failing `predicate`.
    fn retain_where_not<P>(&mut self, predicate: P) -> Result<usize, FilterError>
    where
        P: Fn(&T) -> bool;

    /// Keep the first `count` elements.
    fn keep_first(&mut self, count: usize) -> Result<usize, FilterError>;

    /// Drop the first `count` elements.
    fn drop_first(&mut self, count: usize) -> Result<usize, FilterError>;

    /// Keep the first occurrence of every distinct element, in order.
    fn dedup_stable<C>(&mut self, comparator: C) -> Result<usize, FilterError>
    where
        C: Fn(&T, &T) -> Ordering;
}

impl<T> InPlaceFilterExt<T> for Vec<T> {
    fn retain_where<P>(&mut self, predicate: P) -> Result<usize, FilterError>
    where
        P: Fn(&T) -> bool,
    {
        let kept = filters::in_place(self, predicate)?;
        self.truncate(kept);
        Ok(kept)
    }

    fn retain_where_not<P>(&mut self, predicate: P) -> Result<usize, FilterError>
    where
        P: Fn(&T) -> bool,
    {
        let kept = filters::in_place_not(self, predicate)?;
        self.truncate(kept);
        Ok(kept)
    }

    fn keep_first(&mut self, count: usize) -> Result<usize, FilterError> {
        let kept = filters::in_place_take_first(self, count)?;
        self.truncate(kept);
        Ok(kept)
    }

    fn drop_first(&mut self, count: usize) -> Result<usize, FilterError> {
        let kept = filters::in_place_skip_first(self, count)?;
        self.truncate(kept);
        Ok(kept)
    }

    fn dedup_stable<C>(&mut self, comparator: C) -> Result<usize, FilterError>
    where
        C: Fn(&T, &T) -> Ordering,
    {
        let kept = filters::in_place_distinct(self, comparator)?;
        self.truncate(kept);
        Ok(kept)
    }
}
