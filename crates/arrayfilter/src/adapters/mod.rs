//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer adapts the engine to the standard containers:
//!
//! - **Slices**: `ArrayFilterExt` adds filters and queries as `[T]` methods
//! - **Vectors**: `InPlaceFilterExt` adds in-place compaction that also truncates
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Combinators
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Functional
//!   ↓
//! Layer 1: Primitives
//! ```

/// Slice extension methods.
pub mod slice;

/// Vector in-place extension methods.
pub mod vec;
