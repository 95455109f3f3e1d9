//! Position selections produced by filter kernels.
//!
//! A [`Selection`] describes which positions of a view survive an operation,
//! in output order. Contiguous and strided shapes stay symbolic so positional
//! operations never allocate an index vector on their own.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::iter::{Rev, StepBy};
use core::ops::Range;
use core::slice::Iter;

// ============================================================================
// Selection
// ============================================================================

/// Ordered set of surviving view positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Nothing survives.
    None,

    /// The contiguous run `[start, end)`.
    Span(Range<usize>),

    /// `start, start + step, ...` while `< end`.
    Stride {
        /// First selected position.
        start: usize,
        /// Exclusive upper bound.
        end: usize,
        /// Distance between selected positions (at least 1).
        step: usize,
    },

    /// The run `[start, end)` visited back to front.
    Reversed(Range<usize>),

    /// Arbitrary positions (may repeat).
    Positions(Vec<usize>),
}

impl Selection {
    /// Every position of a view of length `n`.
    #[inline]
    pub fn all(n: usize) -> Self {
        if n == 0 {
            Self::None
        } else {
            Self::Span(0..n)
        }
    }

    /// Number of selected positions.
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Span(r) | Self::Reversed(r) => r.len(),
            Self::Stride { start, end, step } => {
                if start >= end {
                    0
                } else {
                    (end - start).div_ceil(*step)
                }
            }
            Self::Positions(p) => p.len(),
        }
    }

    /// Check whether nothing was selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the selected positions in output order.
    pub fn iter(&self) -> SelectionIter<'_> {
        match self {
            Self::None => SelectionIter::Span(0..0),
            Self::Span(r) => SelectionIter::Span(r.clone()),
            Self::Stride { start, end, step } => {
                SelectionIter::Stride((*start..*end).step_by(*step))
            }
            Self::Reversed(r) => SelectionIter::Reversed(r.clone().rev()),
            Self::Positions(p) => SelectionIter::Positions(p.iter()),
        }
    }
}

// ============================================================================
// Iteration
// ============================================================================

/// Iterator over the positions of a [`Selection`].
#[derive(Debug, Clone)]
pub enum SelectionIter<'a> {
    #[doc(hidden)]
    Span(Range<usize>),
    #[doc(hidden)]
    Stride(StepBy<Range<usize>>),
    #[doc(hidden)]
    Reversed(Rev<Range<usize>>),
    #[doc(hidden)]
    Positions(Iter<'a, usize>),
}

impl Iterator for SelectionIter<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        match self {
            Self::Span(it) => it.next(),
            Self::Stride(it) => it.next(),
            Self::Reversed(it) => it.next(),
            Self::Positions(it) => it.next().copied(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Span(it) => it.size_hint(),
            Self::Stride(it) => it.size_hint(),
            Self::Reversed(it) => it.size_hint(),
            Self::Positions(it) => it.size_hint(),
        }
    }
}

impl ExactSizeIterator for SelectionIter<'_> {}
