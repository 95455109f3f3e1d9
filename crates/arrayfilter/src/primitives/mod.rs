//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions, data structures, and
//! utility functions used throughout the crate. It has zero internal
//! dependencies within the crate.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Functional
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error and status types.
pub mod errors;

/// Read-only views over a source.
pub mod view;

/// Position selections produced by kernels.
pub mod selection;

/// Sorting with index mapping.
pub mod sorting;

/// Fallible buffer construction.
pub mod buffer;
