//! Layer 4: Combinators
//!
//! # Purpose
//!
//! This layer implements the set algebra behind `FilterUnion`,
//! `FilterIntersection` and `FilterDifference`. It works purely on the
//! source positions each member chain produced; evaluating the chains and
//! packaging the result belongs to the engine.
//!
//! All merges require a comparator that is a total order over the elements
//! involved. Output is ascending under that comparator and duplicate-free.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Combinators ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Functional
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sorting and membership helpers shared by the merges.
pub mod merge;

/// Set union.
pub mod union;

/// Set intersection.
pub mod intersection;

/// Set difference.
pub mod difference;
