use core::iter::FusedIterator;
use core::marker::PhantomData;

use super::{List, ListPos, NodeId, Slot};

/// Front-to-back iterator over shared references, of a whole list or of a range `[first, last)`.
pub struct Iter<'a, T> {
    list: &'a List<T>,
    cursor: Option<NodeId>,
    last: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(list: &'a List<T>) -> Self {
        Self {
            list,
            cursor: list.front,
            last: None,
            remaining: list.len,
        }
    }

    pub(super) fn range(list: &'a List<T>, first: ListPos, last: ListPos, len: usize) -> Self {
        Self {
            list,
            cursor: first.0,
            last: last.0,
            remaining: len,
        }
    }

    /// Position of the element the next call to `next` yields, `last` once exhausted.
    #[inline]
    pub fn pos(&self) -> ListPos {
        ListPos(self.cursor)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.cursor == self.last {
            return None;
        }

        let node = self.list.node(self.cursor?);
        self.cursor = node.next;
        self.remaining -= 1;

        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            cursor: self.cursor,
            last: self.last,
            remaining: self.remaining,
        }
    }
}

/// Front-to-back iterator over mutable references.
pub struct IterMut<'a, T> {
    slots: *mut Slot<T>,
    cursor: Option<NodeId>,
    remaining: usize,
    _marker: PhantomData<&'a mut List<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(list: &'a mut List<T>) -> Self {
        Self {
            slots: list.slots.as_mut_ptr(),
            cursor: list.front,
            remaining: list.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let id = self.cursor?;

        // SAFETY: `id` was read from a live link, so it indexes an occupied slot inside the
        // buffer, which can't move while the list is mutably borrowed for `'a`. The chain is
        // acyclic, every slot is visited at most once and the handed out references are disjoint.
        let slot = unsafe { &mut *self.slots.add(id.0) };
        let Slot::Occupied(node) = slot else {
            unreachable!("linked slot is vacant");
        };

        self.cursor = node.next;
        self.remaining -= 1;

        Some(&mut node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning front-to-back iterator.
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
