//! Linked queue over an index arena.
//!
//! Layout:
//!   slots : Vec<Slot<T>>   arena; a node's `next` is an index into it
//!   head  : Option<usize>  front node, None iff size == 0
//!   tail  : Option<usize>  back node, its `next` is always None
//!   free  : Option<usize>  first vacant slot, vacant slots chain through `next_free`
//!
//! enqueue(x): slot = pop free list or push,  tail.next = slot,  tail = slot
//! dequeue():  x = head.value,  head = head.next,  push head slot on free list

use std::fmt;
use std::iter::FusedIterator;

use tracing::trace;

use crate::Queue;

struct Node<T> {
    value: T,
    next: Option<usize>,
}

enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

fn occupied<T>(slots: &[Slot<T>], index: usize) -> Option<&Node<T>> {
    match slots.get(index) {
        Some(Slot::Occupied(node)) => Some(node),
        _ => None,
    }
}

/// FIFO queue backed by a singly linked chain of nodes.
pub struct LinkedListQueue<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free: Option<usize>,
    size: usize,
}

impl<T> LinkedListQueue<T> {
    /// Create an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free: None,
            size: 0,
        }
    }

    /// Number of queued values.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Check if the queue is empty.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Borrowing iterator, front to back.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            cursor: self.head,
            remaining: self.size,
        }
    }

    /// Arena slots currently allocated, live or vacant.
    #[must_use]
    pub fn allocated_slots(&self) -> usize {
        self.slots.len()
    }

    fn allocate(&mut self, node: Node<T>) -> usize {
        match self
            .free
            .and_then(|index| self.slots.get_mut(index).map(|slot| (index, slot)))
        {
            Some((index, slot)) => {
                if let Slot::Vacant { next_free } = slot {
                    self.free = *next_free;
                }
                *slot = Slot::Occupied(node);
                index
            }
            None => {
                self.free = None;
                self.slots.push(Slot::Occupied(node));
                self.slots.len().saturating_sub(1)
            }
        }
    }
}

impl<T> Queue<T> for LinkedListQueue<T> {
    type Mapped<A> = LinkedListQueue<A>;

    fn enqueue(&mut self, value: T) {
        let index = self.allocate(Node { value, next: None });

        if let Some(Slot::Occupied(tail)) = self.tail.and_then(|i| self.slots.get_mut(i)) {
            tail.next = Some(index);
        }
        self.tail = Some(index);

        if self.head.is_none() {
            self.head = Some(index);
        }

        self.size = self.size.saturating_add(1);
    }

    fn dequeue(&mut self) -> Option<T> {
        let index = self.head?;
        let slot = self.slots.get_mut(index)?;

        match std::mem::replace(
            slot,
            Slot::Vacant {
                next_free: self.free,
            },
        ) {
            Slot::Occupied(node) => {
                self.head = node.next;
                self.free = Some(index);
                self.size = self.size.saturating_sub(1);

                if self.head.is_none() {
                    // Nothing live is left, so the arena can start over.
                    self.tail = None;
                    self.free = None;
                    self.slots.clear();
                }

                Some(node.value)
            }
            vacant @ Slot::Vacant { .. } => {
                *slot = vacant;
                None
            }
        }
    }

    fn peek(&self) -> Option<&T> {
        self.head
            .and_then(|index| occupied(&self.slots, index))
            .map(|node| &node.value)
    }

    fn is_empty(&self) -> bool {
        self.size == 0
    }

    fn size(&self) -> usize {
        self.size
    }

    fn clear(&mut self) {
        let released = self.size;
        self.slots = Vec::new();
        self.head = None;
        self.tail = None;
        self.free = None;
        self.size = 0;
        trace!(released, "Queue cleared");
    }

    fn map<A, F>(&self, transform: F) -> LinkedListQueue<A>
    where
        F: FnMut(&T) -> A,
    {
        let mapped: LinkedListQueue<A> = self.iter().map(transform).collect();
        trace!(len = mapped.size, "Queue mapped");
        mapped
    }

    fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(action);
    }
}

impl<T> Default for LinkedListQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedListQueue<T> {
    fn clone(&self) -> Self {
        Queue::map(self, T::clone)
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedListQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedListQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedListQueue<T> {}

impl<T> Extend<T> for LinkedListQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.slots.reserve(iter.size_hint().0);
        iter.for_each(|value| self.enqueue(value));
    }
}

impl<T> FromIterator<T> for LinkedListQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

/// Borrowing iterator over a [`LinkedListQueue`], front to back.
pub struct Iter<'a, T> {
    slots: &'a [Slot<T>],
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = occupied(self.slots, self.cursor?)?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedListQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator that dequeues until the queue is empty.
pub struct IntoIter<T>(LinkedListQueue<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.size, Some(self.0.size))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedListQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::arithmetic_side_effects)]

    use super::*;

    #[test]
    fn test_enqueue_links_tail_to_new_node() {
        let mut queue = LinkedListQueue::new();
        queue.enqueue('a');
        queue.enqueue('b');

        assert_eq!(queue.head, Some(0));
        assert_eq!(queue.tail, Some(1));
        assert_eq!(occupied(&queue.slots, 0).and_then(|n| n.next), Some(1));
        assert_eq!(occupied(&queue.slots, 1).and_then(|n| n.next), None);
    }

    #[test]
    fn test_dequeue_reuses_vacated_slot() {
        let mut queue = LinkedListQueue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);

        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.free, Some(0));

        queue.enqueue(4);
        assert_eq!(queue.allocated_slots(), 3);
        assert_eq!(queue.tail, Some(0));
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn test_free_list_chains_multiple_slots() {
        let mut queue: LinkedListQueue<i32> = (0..5).collect();
        assert_eq!(queue.dequeue(), Some(0));
        assert_eq!(queue.dequeue(), Some(1));

        queue.enqueue(5);
        queue.enqueue(6);
        queue.enqueue(7);

        assert_eq!(queue.allocated_slots(), 6);
        assert_eq!(
            queue.iter().copied().collect::<Vec<_>>(),
            vec![2, 3, 4, 5, 6, 7]
        );
    }

    #[test]
    fn test_draining_resets_arena() {
        let mut queue: LinkedListQueue<i32> = (0..3).collect();
        while queue.dequeue().is_some() {}

        assert_eq!(queue.allocated_slots(), 0);
        assert_eq!(queue.head, None);
        assert_eq!(queue.tail, None);
        assert_eq!(queue.free, None);
    }

    #[test]
    fn test_iter_reports_exact_len() {
        let queue: LinkedListQueue<i32> = (0..4).collect();
        let mut iter = queue.iter();
        assert_eq!(iter.len(), 4);
        iter.next();
        assert_eq!(iter.len(), 3);
    }

    #[test]
    fn test_debug_renders_as_list() {
        let queue: LinkedListQueue<i32> = [3, 1, 2].into_iter().collect();
        assert_eq!(format!("{queue:?}"), "[3, 1, 2]");
    }

    #[test]
    fn test_equality_ignores_arena_layout() {
        let mut left: LinkedListQueue<i32> = (0..4).collect();
        left.dequeue();
        left.enqueue(4);

        let right: LinkedListQueue<i32> = (1..5).collect();
        assert_eq!(left, right);
        assert_ne!(left.head, right.head);
    }
}
