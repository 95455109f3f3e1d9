//! Error and status types for array filter operations.
//!
//! ## Purpose
//!
//! This module defines the status taxonomy carried by every
//! [`FilterResult`](crate::engine::output::FilterResult) and the detailed
//! error conditions behind the failing statuses.
//!
//! ## Design notes
//!
//! * **Two levels**: [`FilterStatus`] is the coarse outcome; [`FilterError`]
//!   carries the context (offending index, requested capacity, ...).
//! * **Recoverable**: Every error describes bad caller input or allocation
//!   failure. None of them abort the process.
//! * **No-std**: Uses `thiserror` without its `std` feature so the derive
//!   targets `core::error::Error`.
//!
//! ## Key concepts
//!
//! 1. **InvalidArgument**: Zero-sized elements, missing handles, zero steps,
//!    out-of-bounds index sets, too few combinator chains.
//! 2. **OutOfMemory**: A fallible reservation failed while building a buffer.
//! 3. **Error**: Structural misuse of a handle (a missing builder).
//! 4. **Empty**: Not a failure. The operation succeeded with zero elements.
//!
//! ## Invariants
//!
//! * `FilterError::status()` never returns `Success` or `Empty`.
//! * Failing statuses always pair with an empty result buffer.
//!
//! ## Non-goals
//!
//! * This module does not perform validation (see the engine's `Validator`).

// External dependencies
use core::fmt::{Display, Formatter, Result};

#[cfg(not(feature = "std"))]
use alloc::collections::TryReserveError;
#[cfg(feature = "std")]
use std::collections::TryReserveError;

// ============================================================================
// Status
// ============================================================================

/// Outcome of an array-producing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterStatus {
    /// The operation produced at least one element.
    Success,

    /// The operation succeeded and legitimately produced zero elements.
    Empty,

    /// Structural misuse of a handle (e.g., applying a missing builder).
    Error,

    /// Bad caller input: zero-sized elements, malformed steps or index sets.
    InvalidArgument,

    /// Allocation failed while building the output buffer.
    OutOfMemory,
}

impl FilterStatus {
    /// Returns true for `Success` and `Empty`.
    #[inline]
    pub fn is_ok(self) -> bool {
        matches!(self, Self::Success | Self::Empty)
    }

    /// Returns true for the three failure states.
    #[inline]
    pub fn is_failure(self) -> bool {
        !self.is_ok()
    }
}

impl Display for FilterStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let label = match self {
            Self::Success => "success",
            Self::Empty => "empty",
            Self::Error => "error",
            Self::InvalidArgument => "invalid argument",
            Self::OutOfMemory => "out of memory",
        };
        f.write_str(label)
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for array filter operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// The element type has size zero; there is nothing to copy or compare by position.
    #[error("Invalid argument: element type is zero-sized")]
    ZeroSizedElement,

    /// A chain handle was required but none was supplied.
    #[error("Invalid argument: no filter chain supplied")]
    MissingChain,

    /// A combinator handle was required but none was supplied.
    #[error("Invalid argument: no combinator supplied")]
    MissingCombinator,

    /// A builder handle was required but none was supplied.
    #[error("Error: no filter builder supplied")]
    MissingBuilder,

    /// A stepping operation was configured with a step of zero.
    #[error("Invalid argument: {operation} requires a step of at least 1")]
    ZeroStep {
        /// Name of the operation (e.g., "slice", "take_nth").
        operation: &'static str,
    },

    /// An index set referenced a position outside the source.
    #[error("Invalid argument: index {index} is out of bounds for {len} elements")]
    IndexOutOfBounds {
        /// The first offending index.
        index: usize,
        /// Number of elements in the filtered input.
        len: usize,
    },

    /// A combinator was applied with fewer chains than it requires.
    #[error("Invalid argument: {combinator} needs at least {min} chains, got {got}")]
    TooFewChains {
        /// Name of the combinator ("union", "intersection", "difference").
        combinator: &'static str,
        /// Number of chains supplied.
        got: usize,
        /// Minimum number of chains.
        min: usize,
    },

    /// A fallible reservation failed.
    #[error("Out of memory: failed to reserve {requested} elements")]
    OutOfMemory {
        /// Number of elements that could not be reserved.
        requested: usize,
    },
}

impl FilterError {
    /// Map the error onto the coarse status taxonomy.
    pub fn status(&self) -> FilterStatus {
        match self {
            Self::MissingBuilder => FilterStatus::Error,
            Self::OutOfMemory { .. } => FilterStatus::OutOfMemory,
            Self::ZeroSizedElement
            | Self::MissingChain
            | Self::MissingCombinator
            | Self::ZeroStep { .. }
            | Self::IndexOutOfBounds { .. }
            | Self::TooFewChains { .. } => FilterStatus::InvalidArgument,
        }
    }

    /// Build an `OutOfMemory` error from a failed reservation.
    #[inline]
    pub fn from_reserve(_err: TryReserveError, requested: usize) -> Self {
        Self::OutOfMemory { requested }
    }
}
