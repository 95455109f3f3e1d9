//! Input validation for filter operations.
//!
//! ## Purpose
//!
//! This module checks caller input before any buffer is allocated: element
//! type, step parameters, index sets and combinator arity.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Cheap first**: Type checks precede anything that walks the input.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not filter, copy or reorder anything.

// External dependencies
use core::mem::size_of;

// Internal dependencies
use crate::primitives::errors::FilterError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for filter inputs and parameters.
///
/// Provides static methods returning `Result<(), FilterError>`.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Source Validation
    // ========================================================================

    /// Reject zero-sized element types.
    ///
    /// A source of `()` or other zero-sized values has no per-element storage
    /// to select from, which mirrors a zero element size.
    #[inline]
    pub fn validate_source<T>() -> Result<(), FilterError> {
        if size_of::<T>() == 0 {
            return Err(FilterError::ZeroSizedElement);
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the step of a stepping operation.
    #[inline]
    pub fn validate_step(step: usize, operation: &'static str) -> Result<(), FilterError> {
        if step == 0 {
            return Err(FilterError::ZeroStep { operation });
        }
        Ok(())
    }

    /// Validate that every index addresses an element of a `len`-element input.
    pub fn validate_indices(indices: &[usize], len: usize) -> Result<(), FilterError> {
        match indices.iter().find(|&&i| i >= len) {
            Some(&index) => Err(FilterError::IndexOutOfBounds { index, len }),
            None => Ok(()),
        }
    }

    /// Validate the number of chains handed to a combinator.
    #[inline]
    pub fn validate_chain_count(
        combinator: &'static str,
        got: usize,
        min: usize,
    ) -> Result<(), FilterError> {
        if got < min {
            return Err(FilterError::TooFewChains {
                combinator,
                got,
                min,
            });
        }
        Ok(())
    }
}
