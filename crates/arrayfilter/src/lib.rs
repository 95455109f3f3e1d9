//! # arrayfilter: composable filters over contiguous slices
//!
//! Eagerly materialized filtering for Rust slices: single operations,
//! ordered chains, set combinators, a fluent builder, in-place compaction
//! and non-allocating queries. Works in `no_std` environments with `alloc`.
//!
//! ## What it does
//!
//! Every array-producing call returns a [`FilterResult`] that owns its
//! buffer and reports a [`FilterStatus`]. Invalid input never panics; it
//! yields a failed result whose [`FilterError`] explains why.
//!
//! ## Quick Start
//!
//! ### Single operations
//!
//! ```rust
//! use arrayfilter::prelude::*;
//!
//! let source = [4, 8, 15, 16, 23, 42];
//!
//! assert_eq!(take_first(&source, 2).data(), &[4, 8]);
//! assert_eq!(slice(&source, 1, 6, 2).data(), &[8, 16, 42]);
//! assert_eq!(filter_where(&source, |x| x % 2 == 1).data(), &[15, 23]);
//!
//! let bad = slice(&source, 0, 6, 0);
//! assert_eq!(bad.status(), FilterStatus::InvalidArgument);
//! assert_eq!(bad.count(), 0);
//! ```
//!
//! ### Chains and the builder
//!
//! ```rust
//! use arrayfilter::prelude::*;
//!
//! let source: Vec<i32> = (0..10).collect();
//!
//! let result = FilterBuilder::begin()
//!     .filter_where(|x: &i32| x % 2 == 0)
//!     .take_first(3)
//!     .end(&source);
//!
//! println!("{}", result);
//! assert_eq!(result.data(), &[0, 2, 4]);
//! ```
//!
//! ```text
//! Summary:
//!   Status:       success
//!   Count:        3
//!   Element size: 4
//!
//! Elements:
//!    Index  Value
//! ---------------
//!        0  0
//!        1  2
//!        2  4
//! ```
//!
//! ### Set combinators
//!
//! ```rust
//! use arrayfilter::prelude::*;
//!
//! let source: Vec<i32> = (0..10).collect();
//!
//! let mut evens = FilterChain::new();
//! evens.add_where(|x: &i32| x % 2 == 0)?;
//! let mut large = FilterChain::new();
//! large.add_where(|x: &i32| *x > 7)?;
//!
//! let mut union = FilterUnion::new();
//! union.add(evens)?.add(large)?;
//!
//! let result = union.apply(&source, natural);
//! assert_eq!(result.data(), &[0, 2, 4, 6, 8, 9]);
//! assert_eq!(result.source_indices(), Some(&[0, 2, 4, 6, 8, 9][..]));
//! # Ok::<(), FilterError>(())
//! ```
//!
//! ### In place
//!
//! ```rust
//! use arrayfilter::prelude::*;
//!
//! let mut values = vec![3, 1, 3, 2, 1];
//! let kept = values.dedup_stable(natural)?;
//! assert_eq!(kept, 3);
//! assert_eq!(values, [3, 1, 2]);
//! # Ok::<(), FilterError>(())
//! ```
//!
//! ## Comparators
//!
//! `distinct` and the combinators sort by the caller's comparator, so it must
//! be a total order. Use [`compare::float_total`] for floating-point data.
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade: `trace` for every executed
//! operation, `debug` for short-circuits and rejected input. Install any
//! logger to see them.
//!
//! ## Feature flags
//!
//! - `std` (default): link against `std`. Without it the crate is `no_std + alloc`.
//! - `dev`: expose every internal layer under `internals`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors, views, selections, sorting, buffers.
mod primitives;

// Layer 2: Functional - predicates and comparators.
mod functional;

// Layer 3: Algorithms - per-operation kernels.
mod algorithms;

// Layer 4: Combinators - set-algebra merges.
mod combinators;

// Layer 5: Engine - results, validation, chains and execution.
mod engine;

// Layer 6: Adapters - slice and vector extension traits.
mod adapters;

// High-level fluent API.
mod api;

// Publicly re-exported types
pub use crate::adapters::slice::ArrayFilterExt;
pub use crate::adapters::vec::InPlaceFilterExt;
pub use crate::algorithms::query::{
    all_match, any_match, count_where, find_first, find_first_index, find_last, find_last_index,
    none_match,
};
pub use crate::api::{apply_builder, FilterBuilder};
pub use crate::engine::chain::{FilterChain, Operation};
pub use crate::engine::combine::{
    apply_difference, apply_intersection, apply_union, FilterDifference, FilterIntersection,
    FilterUnion,
};
pub use crate::engine::executor::apply_chain;
pub use crate::engine::filters::{
    at_indices, distinct, filter_where, filter_where_not, head, in_place, in_place_distinct,
    in_place_not, in_place_skip_first, in_place_take_first, init, range, rest, reverse, skip_first,
    skip_last, slice, tail, take_first, take_last, take_nth,
};
pub use crate::engine::output::FilterResult;
pub use crate::functional::{compare, predicate};
pub use crate::primitives::errors::{FilterError, FilterStatus};

// Standard arrayfilter prelude.
pub mod prelude {
    pub use crate::compare::{by_key, descending, float_total, natural, reversed, Comparator};
    pub use crate::predicate::Predicate;
    pub use crate::{
        all_match, any_match, apply_builder, apply_chain, apply_difference, apply_intersection,
        apply_union, at_indices, count_where, distinct, filter_where, filter_where_not, find_first,
        find_first_index, find_last, find_last_index, head, in_place, in_place_distinct,
        in_place_not, in_place_skip_first, in_place_take_first, init, none_match, range, rest,
        reverse, skip_first, skip_last, slice, tail, take_first, take_last, take_nth,
        ArrayFilterExt, FilterBuilder, FilterChain, FilterDifference, FilterError, FilterIntersection,
        FilterResult, FilterStatus, FilterUnion, InPlaceFilterExt, Operation,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod functional {
        pub use crate::functional::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod combinators {
        pub use crate::combinators::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
