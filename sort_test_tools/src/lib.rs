//! Shared test battery for the sort engines.
//!
//! Every engine is exposed through [`Sort`], a slice-shaped facade, so the same patterns and
//! properties run against the heap sort and the linked-list merge sort alike. Instantiate the whole
//! battery with [`instantiate_sort_tests!`].

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
