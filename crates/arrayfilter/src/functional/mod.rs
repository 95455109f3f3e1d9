//! Layer 2: Functional
//!
//! # Purpose
//!
//! This layer provides the callable building blocks consumed by filters:
//! - Predicates (`Fn(&T) -> bool`) and their boxed chain form
//! - Three-way comparators (`Fn(&T, &T) -> Ordering`) and their boxed chain form
//!
//! These are reusable building blocks with no filter-specific logic.
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
//! Layer 2: Functional ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Predicates and numeric predicate helpers.
pub mod predicate;

/// Comparators and ordering helpers.
pub mod compare;
