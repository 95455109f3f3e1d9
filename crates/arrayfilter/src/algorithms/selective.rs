//! Element-inspecting selection kernels.
//!
//! ## Purpose
//!
//! This module computes the surviving positions for operations that look at
//! element values: predicate filters and `distinct`. `reverse` lives here too
//! as the one order-changing transform.
//!
//! ## Design notes
//!
//! * **Single pass**: Predicates are evaluated exactly once per element.
//! * **Sort-merge distinct**: O(n log n) via sorted positions, first
//!   occurrences kept, original order restored.
//!
//! ## Invariants
//!
//! * Predicate selections preserve input order.
//! * `distinct` keeps the earliest member of each equal group, in input order.
//!
//! ## Non-goals
//!
//! * This module does not copy elements or build results.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::buffer::PositionBuffer;
use crate::primitives::errors::FilterError;
use crate::primitives::selection::Selection;
use crate::primitives::sorting::first_occurrences;
use crate::primitives::view::View;

/// Positions whose element satisfies `predicate`.
pub fn filter_where<T, V, P>(view: &V, predicate: &P) -> Result<Selection, FilterError>
where
    V: View<T> + ?Sized,
    P: Fn(&T) -> bool + ?Sized,
{
    select_by(view, |element| predicate(element))
}

/// Positions whose element fails `predicate`.
pub fn filter_where_not<T, V, P>(view: &V, predicate: &P) -> Result<Selection, FilterError>
where
    V: View<T> + ?Sized,
    P: Fn(&T) -> bool + ?Sized,
{
    select_by(view, |element| !predicate(element))
}

/// Positions of the first occurrence of every distinct element.
pub fn distinct<T, V, C>(view: &V, comparator: &C) -> Result<Selection, FilterError>
where
    V: View<T> + ?Sized,
    C: Fn(&T, &T) -> Ordering + ?Sized,
{
    if view.len() <= 1 {
        return Ok(Selection::all(view.len()));
    }

    let kept = first_occurrences(view, comparator)?;
    if kept.len() == view.len() {
        // nothing was a duplicate
        return Ok(Selection::all(view.len()));
    }
    Ok(Selection::Positions(kept))
}

/// All positions, back to front.
#[inline]
pub fn reverse(n: usize) -> Selection {
    if n == 0 {
        Selection::None
    } else {
        Selection::Reversed(0..n)
    }
}

fn select_by<T, V, F>(view: &V, keep: F) -> Result<Selection, FilterError>
where
    V: View<T> + ?Sized,
    F: Fn(&T) -> bool,
{
    if view.is_empty() {
        return Ok(Selection::None);
    }

    let n = view.len();
    let mut survivors = PositionBuffer::new();

    for i in 0..n {
        if keep(view.at(i)) {
            survivors.push(i)?;
        }
    }

    // every element survived: keep the selection symbolic
    if survivors.len() == n {
        return Ok(Selection::all(n));
    }
    Ok(survivors.into_selection())
}
