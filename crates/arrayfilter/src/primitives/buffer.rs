//! Fallible buffer construction for filter outputs.
//!
//! ## Purpose
//!
//! Every output buffer and every index buffer is reserved through this module
//! so that allocation failure surfaces as `FilterError::OutOfMemory` instead
//! of aborting the process.
//!
//! ## Design notes
//!
//! * **Exact sizing**: Output buffers are reserved at exactly the surviving
//!   count; nothing is over-allocated once the selection is known.
//! * **Growable scratch**: Predicate kernels collect positions into a
//!   [`PositionBuffer`], which grows geometrically like `Vec`.
//!
//! ## Invariants
//!
//! * A successful `gather` returns a buffer whose length equals the selection length.
//! * On failure no partially filled buffer escapes.
//!
//! ## Non-goals
//!
//! * Buffer pooling or reuse across calls.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::FilterError;
use crate::primitives::selection::Selection;
use crate::primitives::view::View;

// ============================================================================
// Allocation Helpers
// ============================================================================

/// Allocate an empty vector with room for exactly `n` elements.
#[inline]
pub fn try_with_capacity<T>(n: usize) -> Result<Vec<T>, FilterError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(n)
        .map_err(|e| FilterError::from_reserve(e, n))?;
    Ok(buf)
}

/// Copy the selected elements of `view` into a new, exactly sized buffer.
pub fn gather<T, V>(view: &V, selection: &Selection) -> Result<Vec<T>, FilterError>
where
    T: Clone,
    V: View<T> + ?Sized,
{
    if selection.is_empty() {
        return Ok(Vec::new());
    }

    let mut out = try_with_capacity(selection.len())?;
    out.extend(selection.iter().map(|p| view.at(p).clone()));
    Ok(out)
}

/// Copy the elements of `source` at the given source positions.
pub fn gather_positions<T: Clone>(source: &[T], positions: &[usize]) -> Result<Vec<T>, FilterError> {
    let mut out = try_with_capacity(positions.len())?;
    out.extend(positions.iter().map(|&p| source[p].clone()));
    Ok(out)
}

// ============================================================================
// PositionBuffer - Growable Scratch for Predicate Kernels
// ============================================================================

/// Growable list of positions with fallible growth.
#[derive(Debug, Clone, Default)]
pub struct PositionBuffer(Vec<usize>);

impl PositionBuffer {
    /// Create an empty buffer; nothing is allocated until the first push.
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a position, growing geometrically.
    #[inline]
    pub fn push(&mut self, position: usize) -> Result<(), FilterError> {
        if self.0.len() == self.0.capacity() {
            let additional = self.0.capacity().max(4);
            self.0
                .try_reserve(additional)
                .map_err(|e| FilterError::from_reserve(e, self.0.len() + additional))?;
        }
        self.0.push(position);
        Ok(())
    }

    /// Number of positions collected.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether no positions were collected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert into a selection.
    #[inline]
    pub fn into_selection(self) -> Selection {
        if self.is_empty() {
            Selection::None
        } else {
            Selection::Positions(self.0)
        }
    }
}
