//! Sorting utilities with index mapping.
//!
//! ## Purpose
//!
//! This module sorts view positions by a caller comparator and collapses runs
//! of equal elements. It backs the O(n log n) `distinct` kernel and the set
//! combinators.
//!
//! ## Design notes
//!
//! * **Stability**: Ties are broken by position, so equal elements keep their
//!   input order; the first member of every run is the earliest occurrence.
//! * **No scratch**: The sort is an unstable in-place sort on positions, so
//!   the only allocation is the fallibly reserved position vector.
//! * **Index mapping**: Only positions are sorted, never the elements, so
//!   element types need not be `Clone` or `Copy`.
//!
//! ## Key concepts
//!
//! ### Sort-Collapse-Restore Pattern
//! 1. **Sort**: Positions are ordered by comparing the elements they refer to.
//! 2. **Collapse**: Each run of comparator-equal elements keeps its first position.
//! 3. **Restore**: Sorting the kept positions restores first-occurrence order.
//!
//! ## Invariants
//!
//! * The comparator must be a total order; otherwise runs of "equal"
//!   elements are not contiguous and duplicates can survive.
//! * Returned positions are a subset of the input positions.
//! * Allocation failure surfaces as `OutOfMemory`; sorting itself never allocates.
//!
//! ## Non-goals
//!
//! * This module does not copy elements or validate inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::errors::FilterError;
use crate::primitives::view::View;

// ============================================================================
// Sorting Functions
// ============================================================================

/// Sort the positions `0..view.len()` by the elements they refer to.
///
/// 1. Checks whether the view is already ordered (fast path).
/// 2. Otherwise sorts the position vector in place, breaking ties by position.
pub fn sort_positions_by<T, V, C>(view: &V, cmp: &C) -> Result<Vec<usize>, FilterError>
where
    V: View<T> + ?Sized,
    C: Fn(&T, &T) -> Ordering + ?Sized,
{
    let n = view.len();
    let mut positions = Vec::new();
    positions
        .try_reserve_exact(n)
        .map_err(|e| FilterError::from_reserve(e, n))?;
    positions.extend(0..n);

    let is_sorted = (1..n).all(|i| cmp(view.at(i - 1), view.at(i)) != Ordering::Greater);
    if !is_sorted {
        positions.sort_unstable_by(|&a, &b| cmp(view.at(a), view.at(b)).then(a.cmp(&b)));
    }

    Ok(positions)
}

/// Keep the first position of every run of comparator-equal elements.
///
/// `sorted` must already be ordered by `cmp` (see [`sort_positions_by`]).
pub fn collapse_runs<T, V, C>(view: &V, sorted: &mut Vec<usize>, cmp: &C)
where
    V: View<T> + ?Sized,
    C: Fn(&T, &T) -> Ordering + ?Sized,
{
    // `dedup_by` hands us (later, earlier-kept); keep the earlier one
    sorted.dedup_by(|later, kept| cmp(view.at(*kept), view.at(*later)) == Ordering::Equal);
}

/// Sort, collapse and restore: positions of the first occurrence of every
/// distinct element, in ascending position order.
pub fn first_occurrences<T, V, C>(view: &V, cmp: &C) -> Result<Vec<usize>, FilterError>
where
    V: View<T> + ?Sized,
    C: Fn(&T, &T) -> Ordering + ?Sized,
{
    let mut positions = sort_positions_by(view, cmp)?;
    collapse_runs(view, &mut positions, cmp);
    positions.sort_unstable();
    Ok(positions)
}

/// Rewrite positions relative to a projection as positions into its source.
#[inline]
pub fn rebase_positions(relative: &mut [usize], base: &[usize]) {
    for p in relative.iter_mut() {
        *p = base[*p];
    }
}
