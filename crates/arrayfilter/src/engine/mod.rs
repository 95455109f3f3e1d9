//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer turns kernels into complete operations. It validates input,
//! runs chains step by step over source positions, evaluates and merges
//! combinator members, and packages everything into a `FilterResult`.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Combinators
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Functional
//!   ↓
//! Layer 1: Primitives
//! ```

/// Output envelope for filter operations.
pub mod output;

/// Validation utilities.
pub mod validator;

/// Operations and filter chains.
pub mod chain;

/// Chain execution over source positions.
pub mod executor;

/// Single-operation filters and in-place variants.
pub mod filters;

/// Union, intersection and difference handles.
pub mod combine;
