//! Sort dispatch.
//!
//! Which engine runs is decided by the [`Sortable`] impl of the range type, so the choice costs
//! nothing at runtime: contiguous ranges get [`heapsort`], linked [`List`](crate::List) ranges get
//! the in-place natural merge sort. Neither engine is stable.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::compare::{Comparator, Natural};

mod heap;
pub(crate) mod merge;

pub use heap::heapsort;

/// A range that knows how to sort itself given a strict less-than predicate.
pub trait Sortable {
    type Item;

    fn sort_by_less<F>(self, is_less: &mut F)
    where
        F: FnMut(&Self::Item, &Self::Item) -> bool;
}

impl<T> Sortable for &mut [T] {
    type Item = T;

    #[inline]
    fn sort_by_less<F>(self, is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        heapsort(self, is_less);
    }
}

impl<T, const N: usize> Sortable for &mut [T; N] {
    type Item = T;

    #[inline]
    fn sort_by_less<F>(self, is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        heapsort(self.as_mut_slice(), is_less);
    }
}

impl<T> Sortable for &mut Vec<T> {
    type Item = T;

    #[inline]
    fn sort_by_less<F>(self, is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        heapsort(self.as_mut_slice(), is_less);
    }
}

/// Sorts `range` into non-decreasing natural order.
#[inline]
pub fn sort<R>(range: R)
where
    R: Sortable,
    R::Item: PartialOrd,
{
    range.sort_by_less(&mut |a, b| Natural.smaller(a, b));
}

/// Sorts `range` with a three-way comparison function.
#[inline]
pub fn sort_by<R, F>(range: R, mut compare: F)
where
    R: Sortable,
    F: FnMut(&R::Item, &R::Item) -> Ordering,
{
    range.sort_by_less(&mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `range` with a [`Comparator`], e.g. [`Lexicographic`](crate::Lexicographic) for strings.
#[inline]
pub fn sort_with<R, C>(range: R, cmp: &C)
where
    R: Sortable,
    C: Comparator<R::Item> + ?Sized,
{
    range.sort_by_less(&mut |a, b| cmp.smaller(a, b));
}
