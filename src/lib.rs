//! Fixed-capacity, allocation-conscious containers and algorithms for memory-constrained targets.
//!
//! The centerpiece is [`sort`]: one entry point that picks heap sort for random-access ranges and
//! an in-place natural merge sort for singly-linked [`List`] ranges, decided at compile time by
//! the [`Sortable`] impl of the range type. Every algorithm compares elements exclusively through
//! the [`compare`] layer, so string-like elements can be ordered by content or by a pluggable
//! collation instead of by handle identity.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod compare;
pub mod cstring;
pub mod list;
pub mod search;
pub mod sort;

pub use compare::{ByteStr, Collated, Comparator, Lexicographic, Natural, Reversed};
pub use cstring::{Cstring, ErrorFlags};
pub use list::{List, ListError, ListPos, ListRange};
pub use search::{find, find_with, max_element, max_element_with, min_element, min_element_with};
pub use sort::{heapsort, sort, sort_by, sort_with, Sortable};
