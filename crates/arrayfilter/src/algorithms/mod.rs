//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the per-operation kernels. Positional and selective
//! kernels compute a [`Selection`](crate::primitives::selection::Selection)
//! of surviving positions without copying anything; in-place kernels compact
//! a mutable buffer; query kernels answer questions without allocating.
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
//! Layer 4: Combinators
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Functional
//!   ↓
//! Layer 1: Primitives
//! ```

/// Take, skip, range, slice and index-set kernels.
pub mod positional;

/// Predicate, distinct and reverse kernels.
pub mod selective;

/// In-place compaction.
pub mod in_place;

/// Non-allocating queries.
pub mod query;
