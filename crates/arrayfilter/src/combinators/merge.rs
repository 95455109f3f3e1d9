//! Shared merge machinery for the set combinators.
//!
//! ## Purpose
//!
//! Each member chain of a combinator contributes a list of source positions.
//! This module orders and deduplicates those contributions by the caller's
//! comparator and answers membership queries against them.
//!
//! ## Design notes
//!
//! * **Positions, not elements**: Contributions are sorted through a
//!   [`Projection`], so elements are never cloned during the merge.
//! * **Binary search membership**: Sorted unique contributions support
//!   O(log m) lookups by comparator.
//!
//! ## Invariants
//!
//! * Every list returned by [`sorted_uniques`] is strictly ascending under
//!   the comparator, and each entry is the earliest equal position in the
//!   contribution's own order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::errors::FilterError;
use crate::primitives::sorting::{collapse_runs, rebase_positions, sort_positions_by};
use crate::primitives::view::Projection;

/// Order `positions` by the elements they refer to and drop equal repeats.
pub fn sorted_uniques<T, C>(
    source: &[T],
    positions: &[usize],
    cmp: &C,
) -> Result<Vec<usize>, FilterError>
where
    C: Fn(&T, &T) -> Ordering + ?Sized,
{
    let view = Projection::new(source, positions);
    let mut ordered = sort_positions_by(&view, cmp)?;
    collapse_runs(&view, &mut ordered, cmp);
    rebase_positions(&mut ordered, positions);
    Ok(ordered)
}

/// Whether `sorted` holds a position whose element equals `source[probe]`.
#[inline]
pub fn contains<T, C>(source: &[T], sorted: &[usize], probe: usize, cmp: &C) -> bool
where
    C: Fn(&T, &T) -> Ordering + ?Sized,
{
    sorted
        .binary_search_by(|&p| cmp(&source[p], &source[probe]))
        .is_ok()
}
