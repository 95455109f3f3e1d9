//! Filter chains: ordered lists of operations.
//!
//! ## Purpose
//!
//! This module defines [`Operation`], one step of a pipeline, and
//! [`FilterChain`], the owned sequence of steps that the executor runs.
//!
//! ## Design notes
//!
//! * **Closures**: Predicates and comparators are boxed closures, so callers
//!   capture whatever context they need.
//! * **Deferred validation**: Appending never validates parameters; a zero
//!   step or a bad index set is reported when the chain is applied.
//! * **Fallible growth**: Appending reserves with `try_reserve` and fails
//!   only on allocation failure.
//!
//! ## Key concepts
//!
//! * **Shorthands**: `head`, `tail`, `init` and `rest` are stored as
//!   `Take`/`Skip` steps with a count of one.
//!
//! ## Invariants
//!
//! * Operations run in insertion order.
//! * Applying an empty chain is the identity.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use core::fmt::{Debug, Formatter, Result as FmtResult};

// Internal dependencies
use crate::algorithms::{positional, selective};
use crate::engine::executor::{apply_operations, apply_operations_tracked};
use crate::engine::output::FilterResult;
use crate::engine::validator::Validator;
use crate::functional::compare::{self, Comparator};
use crate::functional::predicate::{self, Predicate};
use crate::primitives::buffer::try_with_capacity;
use crate::primitives::errors::FilterError;
use crate::primitives::selection::Selection;
use crate::primitives::view::View;

// ============================================================================
// Operation
// ============================================================================

/// One step of a filter chain.
pub enum Operation<'a, T> {
    /// Keep `count` elements from the front (or the back when `from_end`).
    Take {
        /// Number of elements to keep; clamped to the input length.
        count: usize,
        /// Count from the back instead of the front.
        from_end: bool,
    },

    /// Drop `count` elements from the front (or the back when `from_end`).
    Skip {
        /// Number of elements to drop; clamped to the input length.
        count: usize,
        /// Count from the back instead of the front.
        from_end: bool,
    },

    /// Keep positions `0, step, 2 * step, ...`.
    TakeNth {
        /// Distance between kept positions; must be at least 1.
        step: usize,
    },

    /// Keep the half-open range `[start, end)`.
    Range {
        /// First kept position.
        start: usize,
        /// One past the last kept position; clamped to the input length.
        end: usize,
    },

    /// Keep positions `start, start + step, ...` below `end`.
    Slice {
        /// First kept position.
        start: usize,
        /// Exclusive upper bound; clamped to the input length.
        end: usize,
        /// Distance between kept positions; must be at least 1.
        step: usize,
    },

    /// Keep elements satisfying the predicate.
    Where(Predicate<'a, T>),

    /// Keep elements failing the predicate.
    WhereNot(Predicate<'a, T>),

    /// Keep the first occurrence of every distinct element.
    Distinct(Comparator<'a, T>),

    /// Reverse the order.
    Reverse,

    /// Keep the listed positions, in list order.
    AtIndices(Vec<usize>),
}

impl<T> Operation<'_, T> {
    /// Short name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Take { from_end: false, .. } => "take_first",
            Self::Take { from_end: true, .. } => "take_last",
            Self::Skip { from_end: false, .. } => "skip_first",
            Self::Skip { from_end: true, .. } => "skip_last",
            Self::TakeNth { .. } => "take_nth",
            Self::Range { .. } => "range",
            Self::Slice { .. } => "slice",
            Self::Where(_) => "where",
            Self::WhereNot(_) => "where_not",
            Self::Distinct(_) => "distinct",
            Self::Reverse => "reverse",
            Self::AtIndices(_) => "at_indices",
        }
    }

    /// Compute the positions of `view` that survive this step.
    pub fn select<V>(&self, view: &V) -> Result<Selection, FilterError>
    where
        V: View<T> + ?Sized,
    {
        let n = view.len();
        match self {
            Self::Take { count, from_end: false } => Ok(positional::take_first(n, *count)),
            Self::Take { count, from_end: true } => Ok(positional::take_last(n, *count)),
            Self::Skip { count, from_end: false } => Ok(positional::skip_first(n, *count)),
            Self::Skip { count, from_end: true } => Ok(positional::skip_last(n, *count)),
            Self::TakeNth { step } => {
                Validator::validate_step(*step, "take_nth")?;
                Ok(positional::take_nth(n, *step))
            }
            Self::Range { start, end } => Ok(positional::range(n, *start, *end)),
            Self::Slice { start, end, step } => {
                Validator::validate_step(*step, "slice")?;
                Ok(positional::slice(n, *start, *end, *step))
            }
            Self::Where(pred) => selective::filter_where(view, &**pred),
            Self::WhereNot(pred) => selective::filter_where_not(view, &**pred),
            Self::Distinct(cmp) => selective::distinct(view, &**cmp),
            Self::Reverse => Ok(selective::reverse(n)),
            Self::AtIndices(indices) => {
                Validator::validate_indices(indices, n)?;
                positional::at_indices(n, indices)
            }
        }
    }
}

impl<T> Debug for Operation<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Take { count, from_end } => f
                .debug_struct("Take")
                .field("count", count)
                .field("from_end", from_end)
                .finish(),
            Self::Skip { count, from_end } => f
                .debug_struct("Skip")
                .field("count", count)
                .field("from_end", from_end)
                .finish(),
            Self::TakeNth { step } => f.debug_struct("TakeNth").field("step", step).finish(),
            Self::Range { start, end } => f
                .debug_struct("Range")
                .field("start", start)
                .field("end", end)
                .finish(),
            Self::Slice { start, end, step } => f
                .debug_struct("Slice")
                .field("start", start)
                .field("end", end)
                .field("step", step)
                .finish(),
            Self::Where(_) => f.write_str("Where(<predicate>)"),
            Self::WhereNot(_) => f.write_str("WhereNot(<predicate>)"),
            Self::Distinct(_) => f.write_str("Distinct(<comparator>)"),
            Self::Reverse => f.write_str("Reverse"),
            Self::AtIndices(indices) => f.debug_tuple("AtIndices").field(indices).finish(),
        }
    }
}

// ============================================================================
// FilterChain
// ============================================================================

/// An ordered sequence of operations, applied eagerly to a source.
///
/// ```
/// use arrayfilter::prelude::*;
///
/// let mut chain = FilterChain::new();
/// chain.add_where(|x: &i32| x % 2 == 0)?.add_take_first(3)?;
///
/// let result = chain.apply(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// assert_eq!(result.data(), &[0, 2, 4]);
/// # Ok::<(), FilterError>(())
/// ```
pub struct FilterChain<'a, T> {
    operations: Vec<Operation<'a, T>>,
}

impl<T> Debug for FilterChain<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("FilterChain")
            .field("operations", &self.operations)
            .finish()
    }
}

impl<T> Default for FilterChain<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> FilterChain<'a, T> {
    /// Create an empty chain. Nothing is allocated until the first step.
    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
        }
    }

    // ========================================================================
    // Appending Steps
    // ========================================================================

    /// Append an arbitrary operation.
    pub fn push(&mut self, operation: Operation<'a, T>) -> Result<&mut Self, FilterError> {
        self.operations
            .try_reserve(1)
            .map_err(|e| FilterError::from_reserve(e, self.operations.len() + 1))?;
        self.operations.push(operation);
        Ok(self)
    }

    /// Append `take_first(count)`.
    pub fn add_take_first(&mut self, count: usize) -> Result<&mut Self, FilterError> {
        self.push(Operation::Take {
            count,
            from_end: false,
        })
    }

    /// Append `take_last(count)`.
    pub fn add_take_last(&mut self, count: usize) -> Result<&mut Self, FilterError> {
        self.push(Operation::Take {
            count,
            from_end: true,
        })
    }

    /// Append `skip_first(count)`.
    pub fn add_skip_first(&mut self, count: usize) -> Result<&mut Self, FilterError> {
        self.push(Operation::Skip {
            count,
            from_end: false,
        })
    }

    /// Append `skip_last(count)`.
    pub fn add_skip_last(&mut self, count: usize) -> Result<&mut Self, FilterError> {
        self.push(Operation::Skip {
            count,
            from_end: true,
        })
    }

    /// Append `take_nth(step)`.
    pub fn add_take_nth(&mut self, step: usize) -> Result<&mut Self, FilterError> {
        self.push(Operation::TakeNth { step })
    }

    /// Append a step keeping only the first element.
    pub fn add_head(&mut self) -> Result<&mut Self, FilterError> {
        self.add_take_first(1)
    }

    /// Append a step keeping only the last element.
    pub fn add_tail(&mut self) -> Result<&mut Self, FilterError> {
        self.add_take_last(1)
    }

    /// Append a step dropping the last element.
    pub fn add_init(&mut self) -> Result<&mut Self, FilterError> {
        self.add_skip_last(1)
    }

    /// Append a step dropping the first element.
    pub fn add_rest(&mut self) -> Result<&mut Self, FilterError> {
        self.add_skip_first(1)
    }

    /// Append `range(start, end)`.
    pub fn add_range(&mut self, start: usize, end: usize) -> Result<&mut Self, FilterError> {
        self.push(Operation::Range { start, end })
    }

    /// Append `slice(start, end, step)`.
    pub fn add_slice(
        &mut self,
        start: usize,
        end: usize,
        step: usize,
    ) -> Result<&mut Self, FilterError> {
        self.push(Operation::Slice { start, end, step })
    }

    /// Append a predicate filter.
    pub fn add_where<P>(&mut self, predicate: P) -> Result<&mut Self, FilterError>
    where
        P: Fn(&T) -> bool + 'a,
    {
        self.push(Operation::Where(predicate::boxed(predicate)))
    }

    /// Append a negated predicate filter.
    pub fn add_where_not<P>(&mut self, predicate: P) -> Result<&mut Self, FilterError>
    where
        P: Fn(&T) -> bool + 'a,
    {
        self.push(Operation::WhereNot(predicate::boxed(predicate)))
    }

    /// Append a first-occurrence deduplication.
    ///
    /// `comparator` must be a total order.
    pub fn add_distinct<C>(&mut self, comparator: C) -> Result<&mut Self, FilterError>
    where
        C: Fn(&T, &T) -> Ordering + 'a,
    {
        self.push(Operation::Distinct(compare::boxed(comparator)))
    }

    /// Append a reversal.
    pub fn add_reverse(&mut self) -> Result<&mut Self, FilterError> {
        self.push(Operation::Reverse)
    }

    /// Append an index selection. The indices are copied.
    pub fn add_at_indices(&mut self, indices: &[usize]) -> Result<&mut Self, FilterError> {
        let mut owned = try_with_capacity(indices.len())?;
        owned.extend_from_slice(indices);
        self.push(Operation::AtIndices(owned))
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Number of steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check whether the chain has no steps.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// The steps, in execution order.
    #[inline]
    pub fn operations(&self) -> &[Operation<'a, T>] {
        &self.operations
    }

    /// Remove every step, keeping the allocation.
    pub fn clear(&mut self) {
        self.operations.clear();
    }

    // ========================================================================
    // Application
    // ========================================================================

    /// Run every step over `source` and materialize the survivors.
    pub fn apply(&self, source: &[T]) -> FilterResult<T>
    where
        T: Clone,
    {
        apply_operations(source, &self.operations)
    }

    /// Like [`apply`](Self::apply), also recording each survivor's source position.
    pub fn apply_tracked(&self, source: &[T]) -> FilterResult<T>
    where
        T: Clone,
    {
        apply_operations_tracked(source, &self.operations)
    }
}
