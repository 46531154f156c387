//! Singly-linked list.
//!
//! Nodes live in an index arena instead of separate heap blocks: a `Vec` of slots where removed
//! slots are chained together and reused. Links are slot indices, which keeps relinking cheap and
//! lets the merge sort engine rewire the chain without touching element payloads.
//!
//! Positions ([`ListPos`]) behave like forward iterators: they can be advanced with
//! [`List::next`], compared for equality and dereferenced with [`List::get`]. [`List::end`] is the
//! one-past-the-end sentinel and is never dereferenced.

mod iter;

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::mem;

use crate::compare::{self, Comparator, Natural};
use crate::sort::{self, Sortable};

pub use iter::{IntoIter, Iter, IterMut};

/// Errors reported by fallible list operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListError {
    /// The node could not be allocated, either the allocator refused or the list bound is reached.
    OutOfMemory,
    /// The position does not denote an element.
    OutOfRange,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::OutOfMemory => f.write_str("out of memory"),
            ListError::OutOfRange => f.write_str("position out of range"),
        }
    }
}

impl core::error::Error for ListError {}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

struct Node<T> {
    element: T,
    next: Option<NodeId>,
}

enum Slot<T> {
    Occupied(Node<T>),
    Vacant(Option<NodeId>),
}

/// Position of an element inside a [`List`], or the end sentinel.
///
/// Positions stay valid until the element they point to is removed. Using a position of a
/// different list, or of a removed element, is a contract violation and panics or yields an
/// unrelated element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListPos(Option<NodeId>);

impl ListPos {
    #[inline]
    pub fn is_end(&self) -> bool {
        self.0.is_none()
    }
}

/// Singly-linked list with O(1) `push_front`, `push_back` and `pop_front`.
pub struct List<T> {
    slots: Vec<Slot<T>>,
    vacant: Option<NodeId>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    len: usize,
    max_len: usize,
}

impl<T> List<T> {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: None,
            front: None,
            back: None,
            len: 0,
            max_len: usize::MAX,
        }
    }

    /// Creates a list that holds at most `max_len` elements, with node storage allocated up front.
    ///
    /// Insertions beyond `max_len` fail with [`ListError::OutOfMemory`].
    pub fn bounded(max_len: usize) -> Result<Self, ListError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(max_len)
            .map_err(|_| ListError::OutOfMemory)?;

        Ok(Self {
            slots,
            max_len,
            ..Self::new()
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Removes all elements. Node storage is kept for reuse.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.vacant = None;
        self.front = None;
        self.back = None;
        self.len = 0;
    }

    pub fn push_back(&mut self, element: T) -> Result<(), ListError> {
        let id = self.allocate(element)?;

        match self.back {
            Some(back) => self.node_mut(back).next = Some(id),
            None => self.front = Some(id),
        }
        self.back = Some(id);

        Ok(())
    }

    pub fn push_front(&mut self, element: T) -> Result<(), ListError> {
        let id = self.allocate(element)?;

        self.node_mut(id).next = self.front;
        self.front = Some(id);
        if self.back.is_none() {
            self.back = Some(id);
        }

        Ok(())
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let id = self.front?;
        let node = self.release(id);

        self.front = node.next;
        if self.front.is_none() {
            self.back = None;
        }

        Some(node.element)
    }

    pub fn front(&self) -> Option<&T> {
        self.front.map(|id| &self.node(id).element)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        let id = self.front?;
        Some(&mut self.node_mut(id).element)
    }

    pub fn back(&self) -> Option<&T> {
        self.back.map(|id| &self.node(id).element)
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        let id = self.back?;
        Some(&mut self.node_mut(id).element)
    }

    /// Inserts `element` right behind `pos` and returns the position of the new element.
    pub fn insert_after(&mut self, pos: ListPos, element: T) -> Result<ListPos, ListError> {
        let at = pos.0.ok_or(ListError::OutOfRange)?;
        // A removed `pos` has to panic before a slot is taken.
        let next = self.node(at).next;
        let id = self.allocate(element)?;

        self.node_mut(at).next = Some(id);
        self.node_mut(id).next = next;
        if next.is_none() {
            self.back = Some(id);
        }

        Ok(ListPos(Some(id)))
    }

    /// Removes the element at `pos` and returns the position that followed it.
    ///
    /// Erasing [`List::end`] does nothing and returns `end`. Singly-linked nodes don't know their
    /// predecessor, so this walks the list from the front.
    pub fn erase(&mut self, pos: ListPos) -> ListPos {
        let Some(target) = pos.0 else {
            return self.end();
        };

        let mut prev = None;
        let mut cursor = self.front;
        while let Some(id) = cursor {
            if id == target {
                let next = self.unlink(prev, id);
                return ListPos(next);
            }
            prev = Some(id);
            cursor = self.node(id).next;
        }

        self.end()
    }

    /// Removes every element equal to `value` and returns how many were removed.
    pub fn remove<U>(&mut self, value: &U) -> usize
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        self.retain_where(|element| !compare::equals(element, value))
    }

    /// Removes every element that `cmp` considers equal to `value`.
    ///
    /// Use this for string-like elements, e.g. with [`Lexicographic`](crate::Lexicographic).
    pub fn remove_with<U, C>(&mut self, value: &U, cmp: &C) -> usize
    where
        U: ?Sized,
        C: Comparator<T, U>,
    {
        self.retain_where(|element| !cmp.equals(element, value))
    }

    #[inline]
    pub fn begin(&self) -> ListPos {
        ListPos(self.front)
    }

    #[inline]
    pub fn end(&self) -> ListPos {
        ListPos(None)
    }

    /// Advances `pos` by one element. `end` stays `end`.
    #[inline]
    pub fn next(&self, pos: ListPos) -> ListPos {
        ListPos(pos.0.and_then(|id| self.node(id).next))
    }

    pub fn get(&self, pos: ListPos) -> Option<&T> {
        pos.0.map(|id| &self.node(id).element)
    }

    pub fn get_mut(&mut self, pos: ListPos) -> Option<&mut T> {
        let id = pos.0?;
        Some(&mut self.node_mut(id).element)
    }

    /// Position of the element with zero-based `index`, or `end` if there is no such element.
    pub fn position(&self, index: usize) -> ListPos {
        let mut pos = self.begin();
        for _ in 0..index {
            if pos.is_end() {
                break;
            }
            pos = self.next(pos);
        }

        pos
    }

    /// The half-open range `[first, last)` as a sortable unit.
    ///
    /// `last` has to be reachable from `first`, checked in debug builds only.
    pub fn range_mut(&mut self, first: ListPos, last: ListPos) -> ListRange<'_, T> {
        debug_assert!(self.span(first, last).1, "`last` is not reachable from `first`");

        ListRange {
            list: self,
            first,
            last,
        }
    }

    /// Sorts the list in non-decreasing order with the merge sort engine.
    pub fn sort(&mut self)
    where
        T: PartialOrd,
    {
        sort::sort(self);
    }

    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort::sort_by(self, compare);
    }

    pub fn sort_with<C>(&mut self, cmp: &C)
    where
        C: Comparator<T>,
    {
        sort::sort_with(self, cmp);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Iterates the half-open range `[first, last)`.
    ///
    /// `last` has to be reachable from `first`, checked in debug builds only. [`Iter::pos`] tells
    /// where the iterator stands.
    pub fn range(&self, first: ListPos, last: ListPos) -> Iter<'_, T> {
        let (len, reached) = self.span(first, last);
        debug_assert!(reached, "`last` is not reachable from `first`");

        Iter::range(self, first, last, len)
    }

    // --- Search in `[first, last)`, `last` doubles as "not found" ---

    /// Position of the first element in `[first, last)` equal to `value`, or `last`.
    pub fn find<U>(&self, first: ListPos, last: ListPos, value: &U) -> ListPos
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        self.find_where(first, last, |element| compare::equals(element, value))
    }

    /// Position of the first element in `[first, last)` that `cmp` considers equal to `value`.
    pub fn find_with<U, C>(&self, first: ListPos, last: ListPos, value: &U, cmp: &C) -> ListPos
    where
        U: ?Sized,
        C: Comparator<T, U> + ?Sized,
    {
        self.find_where(first, last, |element| cmp.equals(element, value))
    }

    /// Position of the smallest element in `[first, last)`, the earliest of equal ones.
    ///
    /// An empty range yields `last`.
    pub fn min_element(&self, first: ListPos, last: ListPos) -> ListPos
    where
        T: PartialOrd,
    {
        self.min_element_with(first, last, &Natural)
    }

    pub fn min_element_with<C>(&self, first: ListPos, last: ListPos, cmp: &C) -> ListPos
    where
        C: Comparator<T> + ?Sized,
    {
        self.extremum(first, last, |candidate, best| cmp.smaller(candidate, best))
    }

    /// Position of the greatest element in `[first, last)`, the earliest of equal ones.
    ///
    /// An empty range yields `last`.
    pub fn max_element(&self, first: ListPos, last: ListPos) -> ListPos
    where
        T: PartialOrd,
    {
        self.max_element_with(first, last, &Natural)
    }

    pub fn max_element_with<C>(&self, first: ListPos, last: ListPos, cmp: &C) -> ListPos
    where
        C: Comparator<T> + ?Sized,
    {
        self.extremum(first, last, |candidate, best| cmp.greater(candidate, best))
    }

    fn find_where(
        &self,
        first: ListPos,
        last: ListPos,
        mut hit: impl FnMut(&T) -> bool,
    ) -> ListPos {
        let mut iter = self.range(first, last);
        loop {
            let pos = iter.pos();
            match iter.next() {
                Some(element) if hit(element) => return pos,
                Some(_) => {}
                None => return last,
            }
        }
    }

    fn extremum(
        &self,
        first: ListPos,
        last: ListPos,
        mut better: impl FnMut(&T, &T) -> bool,
    ) -> ListPos {
        let mut iter = self.range(first, last);
        let mut best_pos = iter.pos();
        let Some(mut best) = iter.next() else {
            return last;
        };

        loop {
            let pos = iter.pos();
            let Some(element) = iter.next() else {
                break;
            };
            // Only a strictly better element moves the result, ties keep the earliest.
            if better(element, best) {
                best = element;
                best_pos = pos;
            }
        }

        best_pos
    }

    // --- Arena ---

    fn node(&self, id: NodeId) -> &Node<T> {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => panic!("list position refers to a removed element"),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => panic!("list position refers to a removed element"),
        }
    }

    fn allocate(&mut self, element: T) -> Result<NodeId, ListError> {
        if self.len == self.max_len {
            return Err(ListError::OutOfMemory);
        }

        let node = Node {
            element,
            next: None,
        };

        let id = match self.vacant {
            Some(id) => {
                let slot = mem::replace(&mut self.slots[id.0], Slot::Occupied(node));
                if let Slot::Vacant(next_vacant) = slot {
                    self.vacant = next_vacant;
                }
                id
            }
            None => {
                self.slots
                    .try_reserve(1)
                    .map_err(|_| ListError::OutOfMemory)?;
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        };

        self.len += 1;
        Ok(id)
    }

    fn release(&mut self, id: NodeId) -> Node<T> {
        let slot = mem::replace(&mut self.slots[id.0], Slot::Vacant(self.vacant));
        let Slot::Occupied(node) = slot else {
            panic!("list position refers to a removed element");
        };

        self.vacant = Some(id);
        self.len -= 1;

        node
    }

    /// Unlinks `id` whose predecessor is `prev`, frees it and returns its successor.
    fn unlink(&mut self, prev: Option<NodeId>, id: NodeId) -> Option<NodeId> {
        let next = self.release(id).next;

        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.front = next,
        }
        if self.back == Some(id) {
            self.back = prev;
        }

        next
    }

    fn retain_where(&mut self, mut keep: impl FnMut(&T) -> bool) -> usize {
        let len_before = self.len;

        let mut prev = None;
        let mut cursor = self.front;
        while let Some(id) = cursor {
            if keep(&self.node(id).element) {
                prev = Some(id);
                cursor = self.node(id).next;
            } else {
                cursor = self.unlink(prev, id);
            }
        }

        len_before - self.len
    }

    /// Number of elements from `first` up to `last`, and whether `last` was met on the way.
    ///
    /// Without `last` in sight the count runs up to the end of the list.
    fn span(&self, first: ListPos, last: ListPos) -> (usize, bool) {
        let mut pos = first;
        let mut count = 0;
        loop {
            if pos == last {
                return (count, true);
            }
            if pos.is_end() {
                return (count, false);
            }
            pos = self.next(pos);
            count += 1;
        }
    }
}

/// Relinking primitives the merge sort engine needs.
///
/// Kept crate-internal: callers outside the algorithms only ever see whole, consistent chains.
pub(crate) trait Splice {
    type Item;

    fn successor(&self, node: NodeId) -> Option<NodeId>;

    fn link(&mut self, node: NodeId, successor: Option<NodeId>);

    fn payload(&self, node: NodeId) -> &Self::Item;

    /// Exchanges the elements of two nodes, the links stay where they are.
    fn swap_payloads(&mut self, a: NodeId, b: NodeId);

    /// Records `tail` as the last node after a range that ran up to the end got relinked.
    fn relink_back(&mut self, tail: NodeId);
}

impl<T> Splice for List<T> {
    type Item = T;

    #[inline]
    fn successor(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).next
    }

    #[inline]
    fn link(&mut self, node: NodeId, successor: Option<NodeId>) {
        self.node_mut(node).next = successor;
    }

    #[inline]
    fn payload(&self, node: NodeId) -> &T {
        &self.node(node).element
    }

    fn swap_payloads(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }

        let (low, high) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        let (head, tail) = self.slots.split_at_mut(high);
        match (&mut head[low], &mut tail[0]) {
            (Slot::Occupied(x), Slot::Occupied(y)) => mem::swap(&mut x.element, &mut y.element),
            _ => panic!("list position refers to a removed element"),
        }
    }

    #[inline]
    fn relink_back(&mut self, tail: NodeId) {
        self.back = Some(tail);
    }
}

/// Half-open range `[first, last)` of a [`List`], sorted with the merge sort engine.
///
/// The boundary positions keep their identity: `first` still points to the first node of the
/// range afterwards, now holding the smallest element, and the range still ends at `last`.
pub struct ListRange<'a, T> {
    list: &'a mut List<T>,
    first: ListPos,
    last: ListPos,
}

impl<'a, T> ListRange<'a, T> {
    #[inline]
    pub fn first(&self) -> ListPos {
        self.first
    }

    #[inline]
    pub fn last(&self) -> ListPos {
        self.last
    }
}

impl<'a, T> Sortable for ListRange<'a, T> {
    type Item = T;

    #[inline]
    fn sort_by_less<F>(self, is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        if let Some(first) = self.first.0 {
            sort::merge::merge_sort(self.list, first, self.last.0, is_less);
        }
    }
}

impl<'a, T> Sortable for &'a mut List<T> {
    type Item = T;

    #[inline]
    fn sort_by_less<F>(self, is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let (first, last) = (self.begin(), self.end());
        self.range_mut(first, last).sort_by_less(is_less);
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        let mut list = Self {
            max_len: self.max_len,
            ..Self::new()
        };
        list.slots.reserve_exact(self.len);
        list.extend(self.iter().cloned());

        list
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(front)→")?;
        for element in self.iter() {
            write!(f, "{element}→")?;
        }
        f.write_str("(null)")
    }
}

impl<T> Extend<T> for List<T> {
    /// # Panics
    ///
    /// Panics if the list bound is exceeded or a node can't be allocated.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            if let Err(err) = self.push_back(element) {
                panic!("List::extend failed: {err}");
            }
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);

        list
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

// Natural order is the default when a list is compared as a whole.
impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let mut a = self.iter();
        let mut b = other.iter();
        loop {
            match (a.next(), b.next()) {
                (None, None) => return Some(Ordering::Equal),
                (None, Some(_)) => return Some(Ordering::Less),
                (Some(_), None) => return Some(Ordering::Greater),
                (Some(x), Some(y)) => {
                    if Natural.smaller(x, y) {
                        return Some(Ordering::Less);
                    }
                    if Natural.greater(x, y) {
                        return Some(Ordering::Greater);
                    }
                    if !Natural.equals(x, y) {
                        return None;
                    }
                }
            }
        }
    }
}
