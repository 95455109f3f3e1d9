//! Chain execution engine.
//!
//! ## Purpose
//!
//! This module runs a sequence of operations over a source. It is shared by
//! [`FilterChain`], the set combinators and the builder.
//!
//! ## Design notes
//!
//! * **Position tracking**: Each step sees the previous survivors through a
//!   [`Projection`] and yields positions relative to it, which are rebased to
//!   source positions. Elements are cloned exactly once, at the end.
//! * **Identity fast path**: While no step has removed or reordered anything,
//!   no position vector exists at all.
//! * **Short-circuit**: The first failing step ends execution with its error;
//!   a step that leaves nothing ends execution with an empty result.
//!
//! ## Key concepts
//!
//! ### Execution Pipeline
//! 1. **Validate**: Reject zero-sized element types.
//! 2. **Select**: Each operation computes a selection over the current view.
//! 3. **Rebase**: The selection becomes the new list of source positions.
//! 4. **Materialize**: Survivors are cloned into an exactly sized buffer.
//!
//! ## Invariants
//!
//! * Every surviving position is a valid source index.
//! * A failure never produces a partially populated result.
//!
//! ## Non-goals
//!
//! * This module does not merge multiple chains (see the combinators).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::{debug, trace};

// Internal dependencies
use crate::engine::chain::{FilterChain, Operation};
use crate::engine::output::FilterResult;
use crate::engine::validator::Validator;
use crate::primitives::buffer::{gather_positions, try_with_capacity};
use crate::primitives::errors::FilterError;
use crate::primitives::selection::Selection;
use crate::primitives::view::{Projection, View};

// ============================================================================
// Survivors
// ============================================================================

/// The source positions still alive after some steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Survivors {
    /// Every source element, in source order (no step has changed anything).
    All(usize),

    /// Explicit source positions, in result order.
    Positions(Vec<usize>),
}

impl Survivors {
    /// Number of surviving elements.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::All(n) => *n,
            Self::Positions(p) => p.len(),
        }
    }

    /// Check whether nothing survived.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Spell out the surviving source positions.
    pub fn into_positions(self) -> Result<Vec<usize>, FilterError> {
        match self {
            Self::All(n) => {
                let mut positions = try_with_capacity(n)?;
                positions.extend(0..n);
                Ok(positions)
            }
            Self::Positions(p) => Ok(p),
        }
    }
}

// ============================================================================
// Execution
// ============================================================================

/// Run `operations` over `source`, returning the surviving source positions.
pub fn run<T>(source: &[T], operations: &[Operation<'_, T>]) -> Result<Survivors, FilterError> {
    Validator::validate_source::<T>().inspect_err(|err| debug!("chain rejected: {}", err))?;

    let mut current = Survivors::All(source.len());
    for (step, operation) in operations.iter().enumerate() {
        current = match current {
            Survivors::All(n) => {
                let selection = select_logged(source, step, operation)?;
                if is_identity(&selection, n) {
                    Survivors::All(n)
                } else {
                    Survivors::Positions(collect(selection.iter())?)
                }
            }
            Survivors::Positions(positions) => {
                let view = Projection::new(source, &positions);
                let selection = select_logged(&view, step, operation)?;
                if is_identity(&selection, positions.len()) {
                    Survivors::Positions(positions)
                } else {
                    Survivors::Positions(collect(selection.iter().map(|i| positions[i]))?)
                }
            }
        };

        trace!(
            "step {} ({}) left {} of {} elements",
            step,
            operation.name(),
            current.len(),
            source.len()
        );

        if current.is_empty() && step + 1 < operations.len() {
            debug!(
                "chain stopped after step {} ({}): no elements left, {} steps skipped",
                step,
                operation.name(),
                operations.len() - step - 1
            );
            break;
        }
    }

    Ok(current)
}

/// Apply `operations` and materialize the survivors.
pub fn apply_operations<T: Clone>(source: &[T], operations: &[Operation<'_, T>]) -> FilterResult<T> {
    match run(source, operations).and_then(|survivors| materialize(source, survivors, false)) {
        Ok(result) => result,
        Err(err) => FilterResult::failure(err),
    }
}

/// Apply `operations`, recording each survivor's source position.
pub fn apply_operations_tracked<T: Clone>(
    source: &[T],
    operations: &[Operation<'_, T>],
) -> FilterResult<T> {
    match run(source, operations).and_then(|survivors| materialize(source, survivors, true)) {
        Ok(result) => result,
        Err(err) => FilterResult::failure(err),
    }
}

/// Apply an optional chain handle to `source`.
///
/// A missing chain yields an `InvalidArgument` result.
pub fn apply_chain<T: Clone>(source: &[T], chain: Option<&FilterChain<'_, T>>) -> FilterResult<T> {
    match chain {
        Some(chain) => chain.apply(source),
        None => {
            debug!("apply_chain called without a chain");
            FilterResult::failure(FilterError::MissingChain)
        }
    }
}

/// Clone the survivors into an owned result.
pub fn materialize<T: Clone>(
    source: &[T],
    survivors: Survivors,
    tracked: bool,
) -> Result<FilterResult<T>, FilterError> {
    match survivors {
        Survivors::All(n) => {
            let mut data = try_with_capacity(n)?;
            data.extend_from_slice(source);
            if tracked {
                let indices = Survivors::All(n).into_positions()?;
                return Ok(FilterResult::with_source_indices(data, indices));
            }
            Ok(FilterResult::from_vec(data))
        }
        Survivors::Positions(positions) => {
            let data = gather_positions(source, &positions)?;
            if tracked {
                return Ok(FilterResult::with_source_indices(data, positions));
            }
            Ok(FilterResult::from_vec(data))
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn select_logged<T, V>(
    view: &V,
    step: usize,
    operation: &Operation<'_, T>,
) -> Result<Selection, FilterError>
where
    V: View<T> + ?Sized,
{
    operation
        .select(view)
        .inspect_err(|err| debug!("step {} ({}) failed: {}", step, operation.name(), err))
}

#[inline]
fn is_identity(selection: &Selection, n: usize) -> bool {
    match selection {
        Selection::Span(range) => range.start == 0 && range.end == n,
        Selection::None => n == 0,
        _ => false,
    }
}

fn collect<I>(positions: I) -> Result<Vec<usize>, FilterError>
where
    I: ExactSizeIterator<Item = usize>,
{
    let mut out = try_with_capacity(positions.len())?;
    out.extend(positions);
    Ok(out)
}
