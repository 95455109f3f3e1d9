//! Set combinator handles.
//!
//! ## Purpose
//!
//! This module defines [`FilterUnion`], [`FilterIntersection`] and
//! [`FilterDifference`]: owned lists of chains that are applied to the same
//! source independently and merged by a caller comparator.
//!
//! ## Design notes
//!
//! * **Independent evaluation**: Each member chain runs over the full source.
//! * **Position merge**: Chains yield source positions; the merge works on
//!   positions and elements are cloned once, at the end.
//! * **Provenance**: Every combinator result carries `source_indices`.
//!
//! ## Invariants
//!
//! * Output is ascending under the comparator and duplicate-free.
//! * A failing member chain fails the whole combinator with its error.
//! * The comparator must be a total order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use log::debug;

// Internal dependencies
use crate::combinators::{difference, intersection, union};
use crate::engine::chain::FilterChain;
use crate::engine::executor::run;
use crate::engine::output::FilterResult;
use crate::engine::validator::Validator;
use crate::primitives::buffer::{gather_positions, try_with_capacity};
use crate::primitives::errors::FilterError;

// ============================================================================
// FilterUnion
// ============================================================================

/// Elements produced by any member chain.
///
/// Equal elements from several chains are reported once, taken from the
/// earliest chain.
#[derive(Debug)]
pub struct FilterUnion<'a, T> {
    chains: Vec<FilterChain<'a, T>>,
}

impl<T> Default for FilterUnion<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> FilterUnion<'a, T> {
    /// Create a union with no chains.
    pub fn new() -> Self {
        Self { chains: Vec::new() }
    }

    /// Add a member chain.
    pub fn add(&mut self, chain: FilterChain<'a, T>) -> Result<&mut Self, FilterError> {
        push_chain(&mut self.chains, chain)?;
        Ok(self)
    }

    /// Number of member chains.
    #[inline]
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Check whether there are no member chains.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// The member chains, in insertion order.
    #[inline]
    pub fn chains(&self) -> &[FilterChain<'a, T>] {
        &self.chains
    }

    /// Apply every chain to `source` and merge the outputs.
    ///
    /// Needs at least two chains.
    pub fn apply<C>(&self, source: &[T], comparator: C) -> FilterResult<T>
    where
        T: Clone,
        C: Fn(&T, &T) -> Ordering,
    {
        combine(source, "union", || {
            Validator::validate_chain_count("union", self.chains.len(), 2)?;
            let contributions = evaluate(source, &self.chains)?;
            union::union(source, &contributions, &comparator)
        })
    }
}

// ============================================================================
// FilterIntersection
// ============================================================================

/// Elements produced by every member chain.
///
/// Representatives are taken from the first chain.
#[derive(Debug)]
pub struct FilterIntersection<'a, T> {
    chains: Vec<FilterChain<'a, T>>,
}

impl<T> Default for FilterIntersection<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> FilterIntersection<'a, T> {
    /// Create an intersection with no chains.
    pub fn new() -> Self {
        Self { chains: Vec::new() }
    }

    /// Add a member chain.
    pub fn add(&mut self, chain: FilterChain<'a, T>) -> Result<&mut Self, FilterError> {
        push_chain(&mut self.chains, chain)?;
        Ok(self)
    }

    /// Number of member chains.
    #[inline]
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Check whether there are no member chains.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// The member chains, in insertion order.
    #[inline]
    pub fn chains(&self) -> &[FilterChain<'a, T>] {
        &self.chains
    }

    /// Apply every chain to `source` and keep what all of them produced.
    ///
    /// Needs at least two chains.
    pub fn apply<C>(&self, source: &[T], comparator: C) -> FilterResult<T>
    where
        T: Clone,
        C: Fn(&T, &T) -> Ordering,
    {
        combine(source, "intersection", || {
            Validator::validate_chain_count("intersection", self.chains.len(), 2)?;
            let contributions = evaluate(source, &self.chains)?;
            intersection::intersection(source, &contributions, &comparator)
        })
    }
}

// ============================================================================
// FilterDifference
// ============================================================================

/// Elements of the first chain that no other chain produced.
#[derive(Debug)]
pub struct FilterDifference<'a, T> {
    chains: Vec<FilterChain<'a, T>>,
}

impl<'a, T> FilterDifference<'a, T> {
    /// Create a difference whose minuend is `minuend`.
    pub fn new(minuend: FilterChain<'a, T>) -> Self {
        let mut chains = Vec::new();
        chains.push(minuend);
        Self { chains }
    }

    /// Add a chain whose output is removed from the minuend's.
    pub fn subtract(&mut self, chain: FilterChain<'a, T>) -> Result<&mut Self, FilterError> {
        push_chain(&mut self.chains, chain)?;
        Ok(self)
    }

    /// Total number of chains, minuend included.
    #[inline]
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Always false: a difference owns at least its minuend.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// The minuend chain.
    #[inline]
    pub fn minuend(&self) -> &FilterChain<'a, T> {
        &self.chains[0]
    }

    /// The subtrahend chains, in insertion order.
    #[inline]
    pub fn subtrahends(&self) -> &[FilterChain<'a, T>] {
        &self.chains[1..]
    }

    /// Apply every chain to `source` and subtract.
    ///
    /// Needs at least one subtrahend.
    pub fn apply<C>(&self, source: &[T], comparator: C) -> FilterResult<T>
    where
        T: Clone,
        C: Fn(&T, &T) -> Ordering,
    {
        combine(source, "difference", || {
            Validator::validate_chain_count("difference", self.chains.len(), 2)?;
            let contributions = evaluate(source, &self.chains)?;
            let (minuend, subtrahends) = contributions.split_at(1);
            difference::difference(source, &minuend[0], subtrahends, &comparator)
        })
    }
}

// ============================================================================
// Handle-Level Entry Points
// ============================================================================

/// Apply an optional union handle. A missing handle is `InvalidArgument`.
pub fn apply_union<T, C>(
    source: &[T],
    combinator: Option<&FilterUnion<'_, T>>,
    comparator: C,
) -> FilterResult<T>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering,
{
    match combinator {
        Some(union) => union.apply(source, comparator),
        None => missing("union"),
    }
}

/// Apply an optional intersection handle. A missing handle is `InvalidArgument`.
pub fn apply_intersection<T, C>(
    source: &[T],
    combinator: Option<&FilterIntersection<'_, T>>,
    comparator: C,
) -> FilterResult<T>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering,
{
    match combinator {
        Some(intersection) => intersection.apply(source, comparator),
        None => missing("intersection"),
    }
}

/// Apply an optional difference handle. A missing handle is `InvalidArgument`.
pub fn apply_difference<T, C>(
    source: &[T],
    combinator: Option<&FilterDifference<'_, T>>,
    comparator: C,
) -> FilterResult<T>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering,
{
    match combinator {
        Some(difference) => difference.apply(source, comparator),
        None => missing("difference"),
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn push_chain<'a, T>(
    chains: &mut Vec<FilterChain<'a, T>>,
    chain: FilterChain<'a, T>,
) -> Result<(), FilterError> {
    chains
        .try_reserve(1)
        .map_err(|e| FilterError::from_reserve(e, chains.len() + 1))?;
    chains.push(chain);
    Ok(())
}

// Run every chain over the full source, collecting source positions.
fn evaluate<T>(source: &[T], chains: &[FilterChain<'_, T>]) -> Result<Vec<Vec<usize>>, FilterError> {
    let mut contributions = try_with_capacity(chains.len())?;
    for (i, chain) in chains.iter().enumerate() {
        let survivors = run(source, chain.operations())
            .inspect_err(|err| debug!("member chain {} failed: {}", i, err))?;
        contributions.push(survivors.into_positions()?);
    }
    Ok(contributions)
}

fn combine<T, F>(source: &[T], name: &'static str, merge: F) -> FilterResult<T>
where
    T: Clone,
    F: FnOnce() -> Result<Vec<usize>, FilterError>,
{
    let outcome = Validator::validate_source::<T>()
        .and_then(|()| merge())
        .and_then(|positions| {
            let data = gather_positions(source, &positions)?;
            Ok(FilterResult::with_source_indices(data, positions))
        });

    match outcome {
        Ok(result) => {
            debug!("{} merged {} elements", name, result.count());
            result
        }
        Err(err) => {
            debug!("{} failed: {}", name, err);
            FilterResult::failure(err)
        }
    }
}

fn missing<T>(name: &'static str) -> FilterResult<T> {
    debug!("apply_{} called without a combinator", name);
    FilterResult::failure(FilterError::MissingCombinator)
}
