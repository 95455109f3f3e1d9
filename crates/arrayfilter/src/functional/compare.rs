//! Three-way comparators.
//!
//! A comparator is any `Fn(&T, &T) -> Ordering`. `distinct` and the set
//! combinators sort by it, so it must describe a total order: reflexive,
//! antisymmetric, transitive, and consistent with its own notion of equality.
//! An equality-only comparator (returning `Less` for "not equal") is not
//! enough.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(feature = "std")]
use std::boxed::Box;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

/// Boxed comparator stored inside chain operations.
pub type Comparator<'a, T> = Box<dyn Fn(&T, &T) -> Ordering + 'a>;

/// Box any comparator closure.
#[inline]
pub fn boxed<'a, T, C>(comparator: C) -> Comparator<'a, T>
where
    C: Fn(&T, &T) -> Ordering + 'a,
{
    Box::new(comparator)
}

/// Natural ascending order.
#[inline]
pub fn natural<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Natural descending order.
#[inline]
pub fn descending<T: Ord>(a: &T, b: &T) -> Ordering {
    b.cmp(a)
}

/// Total order over floating-point values.
///
/// Orders `-NaN < -inf < ... < -0.0 < +0.0 < ... < +inf < +NaN`, so NaN
/// payloads are grouped instead of breaking deduplication.
pub fn float_total<F: Float>(a: &F, b: &F) -> Ordering {
    match a.partial_cmp(b) {
        Some(Ordering::Equal) if a.is_zero() => {
            // distinguish the two zeros by sign
            a.is_sign_positive().cmp(&b.is_sign_positive())
        }
        Some(ord) => ord,
        None => nan_rank(*a).cmp(&nan_rank(*b)),
    }
}

// Rank used only when at least one operand is NaN.
#[inline]
fn nan_rank<F: Float>(value: F) -> i8 {
    match (value.is_nan(), value.is_sign_negative()) {
        (true, true) => -2,
        (true, false) => 2,
        (false, true) => -1,
        (false, false) => 1,
    }
}

/// Compare by a derived key.
pub fn by_key<T, K, F>(key: F) -> impl Fn(&T, &T) -> Ordering
where
    K: Ord,
    F: Fn(&T) -> K,
{
    move |a, b| key(a).cmp(&key(b))
}

/// Reverse an existing comparator.
pub fn reversed<T, C>(comparator: C) -> impl Fn(&T, &T) -> Ordering
where
    C: Fn(&T, &T) -> Ordering,
{
    move |a, b| comparator(b, a)
}
