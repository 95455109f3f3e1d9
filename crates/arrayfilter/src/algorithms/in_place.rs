//! In-place compaction kernels.
//!
//! ## Purpose
//!
//! This module rewrites a caller's buffer so that the survivors of an
//! operation occupy its prefix, and reports how long that prefix is.
//!
//! ## Design notes
//!
//! * **Swaps only**: Survivors are moved forward with `slice::swap`, so no
//!   element is cloned, duplicated or dropped. Discarded elements end up in
//!   the tail in unspecified order.
//! * **Stable**: The relative order of survivors is preserved.
//! * **No validation**: Element-type checks live in the engine wrappers.
//!
//! ## Invariants
//!
//! * The returned count never exceeds `buf.len()`.
//! * The buffer is always a permutation of its original contents.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::errors::FilterError;
use crate::primitives::sorting::first_occurrences;

// ============================================================================
// Predicate Compaction
// ============================================================================

/// Compact elements satisfying `predicate` to the front.
pub fn retain<T, P>(buf: &mut [T], predicate: &P) -> usize
where
    P: Fn(&T) -> bool + ?Sized,
{
    compact_by(buf, |element| predicate(element))
}

/// Compact elements failing `predicate` to the front.
pub fn retain_not<T, P>(buf: &mut [T], predicate: &P) -> usize
where
    P: Fn(&T) -> bool + ?Sized,
{
    compact_by(buf, |element| !predicate(element))
}

fn compact_by<T, F>(buf: &mut [T], keep: F) -> usize
where
    F: Fn(&T) -> bool,
{
    let mut write = 0;
    for read in 0..buf.len() {
        if keep(&buf[read]) {
            if read != write {
                buf.swap(write, read);
            }
            write += 1;
        }
    }
    write
}

// ============================================================================
// Positional Compaction
// ============================================================================

/// Keep the first `count` elements. The buffer is not modified.
#[inline]
pub fn take_first<T>(buf: &mut [T], count: usize) -> usize {
    count.min(buf.len())
}

/// Drop the first `count` elements, shifting the rest to the front.
///
/// A zero count or a count covering the whole buffer leaves it untouched.
pub fn skip_first<T>(buf: &mut [T], count: usize) -> usize {
    let n = buf.len();
    if count == 0 {
        return n;
    }
    if count >= n {
        return 0;
    }
    buf.rotate_left(count);
    n - count
}

// ============================================================================
// Distinct Compaction
// ============================================================================

/// Compact the first occurrence of every distinct element to the front.
///
/// Needs scratch space for positions, so it can fail with `OutOfMemory`.
pub fn distinct<T, C>(buf: &mut [T], comparator: &C) -> Result<usize, FilterError>
where
    C: Fn(&T, &T) -> Ordering + ?Sized,
{
    if buf.len() <= 1 {
        return Ok(buf.len());
    }

    // ascending, so every target slot precedes its source
    let kept = first_occurrences(&*buf, comparator)?;
    for (write, &read) in kept.iter().enumerate() {
        if read != write {
            buf.swap(write, read);
        }
    }
    Ok(kept.len())
}
