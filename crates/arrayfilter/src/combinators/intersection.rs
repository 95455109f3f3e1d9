//! Intersection merge.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::combinators::merge::{contains, sorted_uniques};
use crate::primitives::errors::FilterError;

/// Source positions of the set intersection, ascending by `cmp`.
///
/// An element survives iff an equal element occurs in every contribution.
/// Representatives come from the first contribution.
pub fn intersection<T, C>(
    source: &[T],
    contributions: &[Vec<usize>],
    cmp: &C,
) -> Result<Vec<usize>, FilterError>
where
    C: Fn(&T, &T) -> Ordering + ?Sized,
{
    let Some((first, rest)) = contributions.split_first() else {
        return Ok(Vec::new());
    };

    let mut kept = sorted_uniques(source, first, cmp)?;
    for positions in rest {
        if kept.is_empty() {
            break;
        }
        let other = sorted_uniques(source, positions, cmp)?;
        kept.retain(|&probe| contains(source, &other, probe, cmp));
    }

    Ok(kept)
}
