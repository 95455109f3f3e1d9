//! Read-only views over a filter source.
//!
//! Kernels never see the caller's slice directly. They see a [`View`]: either
//! the source itself or a projection of it through the positions that survived
//! earlier chain steps. Positions produced by a kernel are relative to the
//! view it was given.

/// Indexed, read-only access to a sequence of elements.
pub trait View<T> {
    /// Number of elements visible through the view.
    fn len(&self) -> usize;

    /// Element at view position `i`. Panics if `i >= len()`.
    fn at(&self, i: usize) -> &T;

    /// Check whether the view shows no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> View<T> for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn at(&self, i: usize) -> &T {
        &self[i]
    }
}

/// A source seen through a list of surviving source positions.
#[derive(Debug, Clone, Copy)]
pub struct Projection<'a, T> {
    source: &'a [T],
    positions: &'a [usize],
}

impl<'a, T> Projection<'a, T> {
    /// Project `source` through `positions`.
    ///
    /// Every position must be a valid index into `source`.
    #[inline]
    pub fn new(source: &'a [T], positions: &'a [usize]) -> Self {
        debug_assert!(
            positions.iter().all(|&p| p < source.len()),
            "Projection::new: position out of bounds"
        );
        Self { source, positions }
    }
}

impl<T> View<T> for Projection<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    fn at(&self, i: usize) -> &T {
        &self.source[self.positions[i]]
    }
}

/// Clamp a half-open range `[start, end)` to a sequence of length `n`.
///
/// Returns `None` if the clamped range is empty.
#[inline]
pub fn clamp_range(start: usize, end: usize, n: usize) -> Option<(usize, usize)> {
    let end = end.min(n);
    if start >= end {
        return None;
    }
    Some((start, end))
}
