//! Read-only queries over a source.
//!
//! None of these functions allocate. The boolean queries stop at the first
//! element that decides the answer.

/// Number of elements satisfying `predicate`.
pub fn count_where<T, P>(source: &[T], predicate: P) -> usize
where
    P: Fn(&T) -> bool,
{
    source.iter().filter(|&element| predicate(element)).count()
}

/// True if at least one element satisfies `predicate`.
#[inline]
pub fn any_match<T, P>(source: &[T], predicate: P) -> bool
where
    P: Fn(&T) -> bool,
{
    source.iter().any(predicate)
}

/// True if every element satisfies `predicate` (vacuously true when empty).
#[inline]
pub fn all_match<T, P>(source: &[T], predicate: P) -> bool
where
    P: Fn(&T) -> bool,
{
    source.iter().all(predicate)
}

/// True if no element satisfies `predicate`.
#[inline]
pub fn none_match<T, P>(source: &[T], predicate: P) -> bool
where
    P: Fn(&T) -> bool,
{
    !any_match(source, predicate)
}

/// The first element satisfying `predicate`.
pub fn find_first<'a, T, P>(source: &'a [T], predicate: P) -> Option<&'a T>
where
    P: Fn(&T) -> bool,
{
    source.iter().find(|&element| predicate(element))
}

/// The last element satisfying `predicate`.
pub fn find_last<'a, T, P>(source: &'a [T], predicate: P) -> Option<&'a T>
where
    P: Fn(&T) -> bool,
{
    source.iter().rev().find(|&element| predicate(element))
}

/// Position of the first element satisfying `predicate`.
pub fn find_first_index<T, P>(source: &[T], predicate: P) -> Option<usize>
where
    P: Fn(&T) -> bool,
{
    source.iter().position(predicate)
}

/// Position of the last element satisfying `predicate`.
pub fn find_last_index<T, P>(source: &[T], predicate: P) -> Option<usize>
where
    P: Fn(&T) -> bool,
{
    source.iter().rposition(predicate)
}
