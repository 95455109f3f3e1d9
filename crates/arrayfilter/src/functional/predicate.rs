//! Predicates for filter operations.
//!
//! ## Purpose
//!
//! This module defines the boxed predicate type stored in chains and a set of
//! ready-made predicates for numeric elements.
//!
//! ## Design notes
//!
//! * **Closures**: A predicate is any `Fn(&T) -> bool`; captured state replaces
//!   an explicit context pointer.
//! * **Generics**: Numeric helpers are generic over `num-traits` bounds.
//!
//! ## Invariants
//!
//! * Predicates are called with shared references only and must not rely on
//!   being called exactly once per element.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(feature = "std")]
use std::boxed::Box;

// External dependencies
use num_traits::{PrimInt, Zero};

/// Boxed predicate stored inside chain operations.
pub type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

/// Box any predicate closure.
#[inline]
pub fn boxed<'a, T, P>(predicate: P) -> Predicate<'a, T>
where
    P: Fn(&T) -> bool + 'a,
{
    Box::new(predicate)
}

// ============================================================================
// Numeric Predicates
// ============================================================================

/// Matches even integers.
#[inline]
pub fn is_even<T: PrimInt>(value: &T) -> bool {
    (*value & T::one()).is_zero()
}

/// Matches odd integers.
#[inline]
pub fn is_odd<T: PrimInt>(value: &T) -> bool {
    !is_even(value)
}

/// Matches zero.
#[inline]
pub fn is_zero<T: Zero>(value: &T) -> bool {
    value.is_zero()
}

/// Matches strictly positive values.
///
/// Compares against zero, so `0.0`, `-0.0` and NaN never match.
#[inline]
pub fn is_positive<T: Zero + PartialOrd>(value: &T) -> bool {
    *value > T::zero()
}

/// Matches strictly negative values.
///
/// Compares against zero, so `0.0`, `-0.0` and NaN never match.
#[inline]
pub fn is_negative<T: Zero + PartialOrd>(value: &T) -> bool {
    *value < T::zero()
}

/// Matches values strictly greater than `bound`.
pub fn greater_than<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |value| *value > bound
}

/// Matches values strictly less than `bound`.
pub fn less_than<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |value| *value < bound
}

/// Matches values in the half-open interval `[low, high)`.
pub fn within<T: PartialOrd>(low: T, high: T) -> impl Fn(&T) -> bool {
    move |value| *value >= low && *value < high
}

/// Matches values equal to `target`.
pub fn equal_to<T: PartialEq>(target: T) -> impl Fn(&T) -> bool {
    move |value| *value == target
}

/// Logical negation of a predicate.
pub fn not<T, P>(predicate: P) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
{
    move |value| !predicate(value)
}
