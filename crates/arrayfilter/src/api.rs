//! High-level API for array filtering.
//!
//! ## Purpose
//!
//! This module provides the fluent entry point: a [`FilterBuilder`] that
//! records steps and terminates by applying them to a source.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Each step consumes and returns the builder.
//! * **Deferred errors**: A step that fails (allocation failure) is recorded
//!   and every later step becomes a no-op; the error surfaces at the end.
//! * **Reusable output**: `build()` hands back the recorded chain.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`FilterBuilder`] via `FilterBuilder::begin()`.
//! 2. Chain step methods (`.filter_where()`, `.take_first()`, etc.).
//! 3. Terminate with `.end(source)` or keep the chain with `.build()`.
//!
//! ```
//! use arrayfilter::prelude::*;
//!
//! let source: Vec<i32> = (0..10).collect();
//! let result = FilterBuilder::begin()
//!     .filter_where(|x: &i32| x % 2 == 0)
//!     .take_first(3)
//!     .end(&source);
//!
//! assert_eq!(result.status(), FilterStatus::Success);
//! assert_eq!(result.data(), &[0, 2, 4]);
//! ```

// External dependencies
use core::cmp::Ordering;
use log::debug;

// Internal dependencies
use crate::engine::chain::{FilterChain, Operation};
use crate::engine::output::FilterResult;
use crate::functional::{compare, predicate};
use crate::primitives::buffer::try_with_capacity;
use crate::primitives::errors::FilterError;

// ============================================================================
// FilterBuilder
// ============================================================================

/// Fluent builder that records a chain and applies it.
pub struct FilterBuilder<'a, T> {
    chain: FilterChain<'a, T>,

    /// First error raised while recording; later steps are ignored.
    deferred_error: Option<FilterError>,
}

impl<T> Default for FilterBuilder<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for FilterBuilder<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FilterBuilder")
            .field("chain", &self.chain)
            .field("deferred_error", &self.deferred_error)
            .finish()
    }
}

impl<'a, T> FilterBuilder<'a, T> {
    /// Create a builder with no steps.
    pub fn new() -> Self {
        Self {
            chain: FilterChain::new(),
            deferred_error: None,
        }
    }

    /// Start a pipeline. Same as [`new`](Self::new).
    pub fn begin() -> Self {
        Self::new()
    }

    /// The error that disabled this builder, if any.
    pub fn deferred_error(&self) -> Option<&FilterError> {
        self.deferred_error.as_ref()
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Check whether no steps were recorded.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    // ========================================================================
    // Positional Steps
    // ========================================================================

    /// Keep the first `count` elements.
    pub fn take_first(self, count: usize) -> Self {
        self.step(Operation::Take {
            count,
            from_end: false,
        })
    }

    /// Keep the last `count` elements.
    pub fn take_last(self, count: usize) -> Self {
        self.step(Operation::Take {
            count,
            from_end: true,
        })
    }

    /// Drop the first `count` elements.
    pub fn skip_first(self, count: usize) -> Self {
        self.step(Operation::Skip {
            count,
            from_end: false,
        })
    }

    /// Drop the last `count` elements.
    pub fn skip_last(self, count: usize) -> Self {
        self.step(Operation::Skip {
            count,
            from_end: true,
        })
    }

    /// Keep every `step`-th element, starting with the first.
    pub fn take_nth(self, step: usize) -> Self {
        self.step(Operation::TakeNth { step })
    }

    /// Keep only the first element.
    pub fn head(self) -> Self {
        self.take_first(1)
    }

    /// Keep only the last element.
    pub fn tail(self) -> Self {
        self.take_last(1)
    }

    /// Drop the last element.
    pub fn init(self) -> Self {
        self.skip_last(1)
    }

    /// Drop the first element.
    pub fn rest(self) -> Self {
        self.skip_first(1)
    }

    /// Keep `[start, end)`.
    pub fn range(self, start: usize, end: usize) -> Self {
        self.step(Operation::Range { start, end })
    }

    /// Keep `start, start + step, ...` below `end`.
    pub fn slice(self, start: usize, end: usize, step: usize) -> Self {
        self.step(Operation::Slice { start, end, step })
    }

    /// Keep the listed positions, in list order.
    pub fn at_indices(mut self, indices: &[usize]) -> Self {
        if self.deferred_error.is_some() {
            return self;
        }
        match try_with_capacity(indices.len()) {
            Ok(mut owned) => {
                owned.extend_from_slice(indices);
                self.step(Operation::AtIndices(owned))
            }
            Err(err) => {
                self.defer(err);
                self
            }
        }
    }

    // ========================================================================
    // Selective Steps
    // ========================================================================

    /// Keep elements satisfying `predicate`.
    pub fn filter_where<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'a,
    {
        self.step(Operation::Where(predicate::boxed(predicate)))
    }

    /// Keep elements failing `predicate`.
    pub fn filter_where_not<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'a,
    {
        self.step(Operation::WhereNot(predicate::boxed(predicate)))
    }

    /// Keep the first occurrence of every distinct element.
    pub fn distinct<C>(self, comparator: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering + 'a,
    {
        self.step(Operation::Distinct(compare::boxed(comparator)))
    }

    /// Reverse the order.
    pub fn reverse(self) -> Self {
        self.step(Operation::Reverse)
    }

    // ========================================================================
    // Terminal Operations
    // ========================================================================

    /// Apply the recorded steps to `source`.
    pub fn end(self, source: &[T]) -> FilterResult<T>
    where
        T: Clone,
    {
        match self.deferred_error {
            Some(err) => {
                debug!("builder applied with a deferred error: {}", err);
                FilterResult::failure(err)
            }
            None => self.chain.apply(source),
        }
    }

    /// Apply the recorded steps to `source`. Same as [`end`](Self::end).
    pub fn apply(self, source: &[T]) -> FilterResult<T>
    where
        T: Clone,
    {
        self.end(source)
    }

    /// Return the recorded chain for reuse.
    pub fn build(self) -> Result<FilterChain<'a, T>, FilterError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }
        Ok(self.chain)
    }

    // ========================================================================
    // Recording
    // ========================================================================

    fn step(mut self, operation: Operation<'a, T>) -> Self {
        if self.deferred_error.is_some() {
            return self;
        }
        let outcome = self.chain.push(operation).map(|_| ());
        if let Err(err) = outcome {
            self.defer(err);
        }
        self
    }

    fn defer(&mut self, err: FilterError) {
        debug!("builder step failed, ignoring later steps: {}", err);
        self.deferred_error = Some(err);
    }
}

// ============================================================================
// Handle-Level Entry Point
// ============================================================================

/// Apply an optional builder to `source`.
///
/// A missing builder is structural misuse and yields an `Error` status.
pub fn apply_builder<T: Clone>(builder: Option<FilterBuilder<'_, T>>, source: &[T]) -> FilterResult<T> {
    match builder {
        Some(builder) => builder.end(source),
        None => {
            debug!("apply_builder called without a builder");
            FilterResult::failure(FilterError::MissingBuilder)
        }
    }
}
