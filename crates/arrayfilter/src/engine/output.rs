//! Output envelope for filter operations.
//!
//! ## Purpose
//!
//! This module defines [`FilterResult`], the owned result of every
//! array-producing operation: the surviving elements, an optional provenance
//! array of source positions, and the outcome status.
//!
//! ## Design notes
//!
//! * **Exclusive ownership**: The result owns its buffer. [`release`] moves it
//!   out; [`free`] drops it early; `Drop` covers everything else.
//! * **Null object**: Accessors on a failed or released result return empty
//!   slices and zero counts, never panic.
//! * **Ergonomics**: Implements `Display`, `IntoIterator` and conversion to
//!   `Result` for use with `?`.
//!
//! ## Key concepts
//!
//! * **Provenance**: `source_indices[i]` is the source position of `data[i]`.
//!   Combinators always record it; chains record it when applied tracked.
//! * **Status**: `Success` and `Empty` are ok; the other statuses are failures.
//!
//! ## Invariants
//!
//! * `count() == data().len()`, and equals `source_indices().len()` when present.
//! * A failing status always pairs with empty data and a recorded error.
//! * A successful status is `Empty` iff the data is empty.
//!
//! ## Non-goals
//!
//! * This module does not compute anything; it only stores outcomes.
//!
//! [`release`]: FilterResult::release
//! [`free`]: FilterResult::free

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use core::mem::{size_of, take};
use core::slice::Iter;

// Internal dependencies
use crate::primitives::errors::{FilterError, FilterStatus};

// ============================================================================
// Result Structure
// ============================================================================

/// Owned output of a filter, chain, combinator or builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult<T> {
    data: Vec<T>,
    source_indices: Option<Vec<usize>>,
    status: FilterStatus,
    error: Option<FilterError>,
}

impl<T> FilterResult<T> {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Wrap surviving elements; the status is `Success` or `Empty`.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            status: ok_status(data.len()),
            data,
            source_indices: None,
            error: None,
        }
    }

    /// Wrap surviving elements together with their source positions.
    ///
    /// `source_indices` must be parallel to `data`.
    pub fn with_source_indices(data: Vec<T>, source_indices: Vec<usize>) -> Self {
        debug_assert_eq!(data.len(), source_indices.len());
        Self {
            status: ok_status(data.len()),
            data,
            source_indices: Some(source_indices),
            error: None,
        }
    }

    /// A failed result carrying `error`.
    pub fn failure(error: FilterError) -> Self {
        Self {
            data: Vec::new(),
            source_indices: None,
            status: error.status(),
            error: Some(error),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The surviving elements, in result order.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Number of surviving elements.
    #[inline]
    pub fn count(&self) -> usize {
        self.data.len()
    }

    /// Check whether no elements are held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True for `Success` and `Empty`.
    #[inline]
    pub fn ok(&self) -> bool {
        self.status.is_ok()
    }

    /// Outcome status.
    #[inline]
    pub fn status(&self) -> FilterStatus {
        self.status
    }

    /// The cause of a failing status.
    #[inline]
    pub fn error(&self) -> Option<&FilterError> {
        self.error.as_ref()
    }

    /// Size in bytes of one element.
    #[inline]
    pub fn element_size(&self) -> usize {
        size_of::<T>()
    }

    /// Source position of every element, when provenance was recorded.
    #[inline]
    pub fn source_indices(&self) -> Option<&[usize]> {
        self.source_indices.as_deref()
    }

    /// Iterate over the surviving elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    // ========================================================================
    // Ownership Transfer
    // ========================================================================

    /// Take ownership of the buffer, leaving this result empty.
    ///
    /// The element count is the length of the returned vector.
    pub fn release(&mut self) -> Vec<T> {
        self.source_indices = None;
        if self.status.is_ok() {
            self.status = FilterStatus::Empty;
        }
        take(&mut self.data)
    }

    /// Drop the buffer now. Calling it again is a no-op.
    pub fn free(&mut self) {
        drop(self.release());
    }

    /// Consume the result, returning its buffer (empty on failure).
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consume the result, turning a failure into `Err`.
    pub fn into_result(self) -> core::result::Result<Vec<T>, FilterError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.data),
        }
    }
}

impl<T> Default for FilterResult<T> {
    fn default() -> Self {
        Self::from_vec(Vec::new())
    }
}

impl<T> From<FilterError> for FilterResult<T> {
    fn from(error: FilterError) -> Self {
        Self::failure(error)
    }
}

impl<T> IntoIterator for FilterResult<T> {
    type Item = T;
    type IntoIter = <Vec<T> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FilterResult<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[inline]
fn ok_status(count: usize) -> FilterStatus {
    if count == 0 {
        FilterStatus::Empty
    } else {
        FilterStatus::Success
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Debug> Display for FilterResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Status:       {}", self.status)?;
        writeln!(f, "  Count:        {}", self.count())?;
        writeln!(f, "  Element size: {}", self.element_size())?;

        if let Some(err) = &self.error {
            writeln!(f, "  Error:        {}", err)?;
        }
        if self.source_indices.is_some() {
            writeln!(f, "  Provenance:   Tracked")?;
        }

        if self.data.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(f, "Elements:")?;

        let has_source = self.source_indices.is_some();
        write!(f, "{:>8}", "Index")?;
        if has_source {
            write!(f, " {:>8}", "Source")?;
        }
        writeln!(f, "  Value")?;
        writeln!(f, "{:-<width$}", "", width = if has_source { 24 } else { 15 })?;

        // Data rows (show first 10 and last 10 if more than 20 elements)
        let n = self.data.len();
        let rows = (0..n).filter(|&i| n <= 20 || i < 10 || i >= n - 10);

        let mut prev_idx = 0;
        for (i, idx) in rows.enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            write!(f, "{:>8}", idx)?;
            if let Some(sources) = &self.source_indices {
                write!(f, " {:>8}", sources[idx])?;
            }
            writeln!(f, "  {:?}", self.data[idx])?;
        }

        Ok(())
    }
}
