//! Union merge.
//!
//! Contributions are concatenated in chain order before the stable sort, so
//! when several chains (or several positions within one chain) hold equal
//! elements, the representative comes from the earliest chain and the
//! earliest position within it.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::combinators::merge::sorted_uniques;
use crate::primitives::buffer::try_with_capacity;
use crate::primitives::errors::FilterError;

/// Source positions of the set union, ascending by `cmp`.
pub fn union<T, C>(
    source: &[T],
    contributions: &[Vec<usize>],
    cmp: &C,
) -> Result<Vec<usize>, FilterError>
where
    C: Fn(&T, &T) -> Ordering + ?Sized,
{
    let total = contributions.iter().map(Vec::len).sum();
    let mut all = try_with_capacity(total)?;
    for positions in contributions {
        all.extend_from_slice(positions);
    }

    sorted_uniques(source, &all, cmp)
}
