//! Linear scans over anything that can be traversed front to back.
//!
//! Positions are zero-based indices in traversal order, `None` stands for the end of the range:
//! "not found" for the `find` family and "no element" for the extrema of an empty range.

use crate::compare::{Comparator, Natural};

/// Position of the first element equal to `value`.
#[inline]
pub fn find<'a, T, U, I>(items: I, value: &U) -> Option<usize>
where
    T: PartialEq<U> + 'a,
    U: ?Sized,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().position(|item| item == value)
}

/// Position of the first element that `cmp` considers equal to `value`.
#[inline]
pub fn find_with<'a, T, U, I, C>(items: I, value: &U, cmp: &C) -> Option<usize>
where
    T: 'a,
    U: ?Sized,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T, U> + ?Sized,
{
    items.into_iter().position(|item| cmp.equals(item, value))
}

/// Position of the smallest element, the first one if there are several.
#[inline]
pub fn min_element<'a, T, I>(items: I) -> Option<usize>
where
    T: PartialOrd + 'a,
    I: IntoIterator<Item = &'a T>,
{
    min_element_with(items, &Natural)
}

pub fn min_element_with<'a, T, I, C>(items: I, cmp: &C) -> Option<usize>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    extremum(items, |candidate, best| cmp.smaller(candidate, best))
}

/// Position of the greatest element, the first one if there are several.
#[inline]
pub fn max_element<'a, T, I>(items: I) -> Option<usize>
where
    T: PartialOrd + 'a,
    I: IntoIterator<Item = &'a T>,
{
    max_element_with(items, &Natural)
}

pub fn max_element_with<'a, T, I, C>(items: I, cmp: &C) -> Option<usize>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    extremum(items, |candidate, best| cmp.greater(candidate, best))
}

/// Only a strictly better candidate replaces the current best, so ties keep the earliest.
fn extremum<'a, T, I, F>(items: I, mut better: F) -> Option<usize>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T, &T) -> bool,
{
    let mut iter = items.into_iter().enumerate();
    let (mut best_pos, mut best) = iter.next()?;

    for (pos, item) in iter {
        if better(item, best) {
            best_pos = pos;
            best = item;
        }
    }

    Some(best_pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::compare::{Collated, Lexicographic, Reversed};
    use crate::list::List;

    use std::ffi::CString;
    use std::vec::Vec;

    #[test]
    fn find_first_match() {
        let v = [3, 1, 4, 1, 5];
        assert_eq!(find(&v, &4), Some(2));
        assert_eq!(find(&v, &1), Some(1));
        assert_eq!(find(&v, &9), None);
        assert_eq!(find(&[] as &[i32], &1), None);

        let list = List::from([3, 1, 4, 1, 5]);
        assert_eq!(find(&list, &4), Some(2));
        assert_eq!(list.get(list.position(2)), Some(&4));
    }

    #[test]
    fn find_strings_by_content() {
        let names: Vec<CString> = ["ab", "cd", "ef"]
            .iter()
            .map(|s| CString::new(*s).unwrap())
            .collect();
        let needle = CString::new("cd").unwrap();
        assert_eq!(find_with(&names, needle.as_c_str(), &Lexicographic), Some(1));
        assert_eq!(find_with(&names, "ef", &Lexicographic), Some(2));
        assert_eq!(find_with(&names, "EF", &Lexicographic), None);

        let words = ["Alpha", "beta"];
        let collated = Collated::new(|a: &[u8], b: &[u8]| {
            let fold = |s: &[u8]| s.iter().map(u8::to_ascii_lowercase).collect::<Vec<_>>();
            fold(a).cmp(&fold(b))
        });
        assert_eq!(find_with(&words, "BETA", &collated), Some(1));
    }

    #[test]
    fn extrema() {
        let v = [5, 3, 3, 7];
        assert_eq!(min_element(&v), Some(1));
        assert_eq!(max_element(&v), Some(3));

        let v = [7, 2, 7];
        assert_eq!(max_element(&v), Some(0));
        assert_eq!(min_element_with(&v, &Reversed(Natural)), Some(0));
        assert_eq!(max_element_with(&v, &Reversed(Natural)), Some(1));

        let list = List::from(["pear", "Apple", "fig"]);
        assert_eq!(min_element(&list), Some(1));
        assert_eq!(max_element_with(&list, &Lexicographic), Some(0));
    }

    #[test]
    fn extrema_of_empty_range() {
        let empty: [u8; 0] = [];
        assert_eq!(min_element(&empty), None);
        assert_eq!(max_element(&empty), None);
        assert_eq!(min_element(&List::<u8>::new()), None);
    }
}
