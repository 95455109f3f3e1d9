//! Difference merge.

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

/// Source positions of `minuend` minus every subtrahend, ascending by `cmp`.
pub fn difference<T, C>(
    source: &[T],
    minuend: &[usize],
    subtrahends: &[Vec<usize>],
    cmp: &C,
) -> Result<Vec<usize>, FilterError>
where
    C: Fn(&T, &T) -> Ordering + ?Sized,
{
    let mut kept = sorted_uniques(source, minuend, cmp)?;
    for positions in subtrahends {
        if kept.is_empty() {
            break;
        }
        let other = sorted_uniques(source, positions, cmp)?;
        kept.retain(|&probe| !contains(source, &other, probe, cmp));
    }

    Ok(kept)
}
