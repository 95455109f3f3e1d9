//! Positional selection kernels.
//!
//! ## Purpose
//!
//! This module computes which positions survive the positional operations:
//! take, skip, every-nth, range, slice and explicit index sets. The kernels
//! only need the length of their input, never the elements.
//!
//! ## Design notes
//!
//! * **Clamping**: Counts and bounds larger than the input are clamped, never errors.
//! * **Symbolic**: Results are spans or strides, so no index vector is allocated.
//! * **Validated input**: Steps and index sets are checked by the engine's
//!   `Validator` before a kernel runs; kernels only debug-assert them.
//!
//! ## Invariants
//!
//! * Every returned position is `< n`.
//! * Output order follows input order (index sets follow the caller's order).
//!
//! ## Non-goals
//!
//! * This module does not copy elements or build results.

// Internal dependencies
use crate::primitives::buffer::try_with_capacity;
use crate::primitives::errors::FilterError;
use crate::primitives::selection::Selection;
use crate::primitives::view::clamp_range;

// ============================================================================
// Take
// ============================================================================

/// The first `min(count, n)` positions.
#[inline]
pub fn take_first(n: usize, count: usize) -> Selection {
    span(0, count.min(n))
}

/// The last `min(count, n)` positions.
#[inline]
pub fn take_last(n: usize, count: usize) -> Selection {
    span(n - count.min(n), n)
}

/// Positions `0, step, 2 * step, ...`. `step` must be at least 1.
#[inline]
pub fn take_nth(n: usize, step: usize) -> Selection {
    debug_assert!(step > 0, "take_nth: zero step");
    stride(0, n, step)
}

// ============================================================================
// Skip
// ============================================================================

/// Everything except the first `count` positions.
#[inline]
pub fn skip_first(n: usize, count: usize) -> Selection {
    span(count.min(n), n)
}

/// Everything except the last `count` positions.
#[inline]
pub fn skip_last(n: usize, count: usize) -> Selection {
    span(0, n - count.min(n))
}

// ============================================================================
// Range and Slice
// ============================================================================

/// The half-open range `[start, end)`, clamped to `n`.
#[inline]
pub fn range(n: usize, start: usize, end: usize) -> Selection {
    match clamp_range(start, end, n) {
        Some((start, end)) => Selection::Span(start..end),
        None => Selection::None,
    }
}

/// Positions `start, start + step, ...` while `< end` (clamped to `n`).
/// `step` must be at least 1.
pub fn slice(n: usize, start: usize, end: usize, step: usize) -> Selection {
    debug_assert!(step > 0, "slice: zero step");
    match clamp_range(start, end, n) {
        Some((start, end)) => stride(start, end, step),
        None => Selection::None,
    }
}

// ============================================================================
// Index Sets
// ============================================================================

/// The caller's positions, in the caller's order, duplicates included.
///
/// Every index must be `< n`; only allocation can fail.
pub fn at_indices(n: usize, indices: &[usize]) -> Result<Selection, FilterError> {
    debug_assert!(
        indices.iter().all(|&i| i < n),
        "at_indices: index out of bounds"
    );
    if indices.is_empty() {
        return Ok(Selection::None);
    }

    let mut positions = try_with_capacity(indices.len())?;
    positions.extend_from_slice(indices);
    Ok(Selection::Positions(positions))
}

// ============================================================================
// Helpers
// ============================================================================

#[inline]
fn span(start: usize, end: usize) -> Selection {
    if start >= end {
        Selection::None
    } else {
        Selection::Span(start..end)
    }
}

#[inline]
fn stride(start: usize, end: usize, step: usize) -> Selection {
    if start >= end {
        Selection::None
    } else if step == 1 {
        Selection::Span(start..end)
    } else {
        Selection::Stride { start, end, step }
    }
}
