//! The FIFO queue contract.

/// A first-in-first-out container.
///
/// Absence is always reported through `Option`; no operation fails.
pub trait Queue<T> {
    /// Queue type produced by [`Queue::map`].
    type Mapped<A>: Queue<A>;

    /// Append `value` at the back. O(1).
    fn enqueue(&mut self, value: T);

    /// Remove and return the front value, or `None` when empty. O(1).
    fn dequeue(&mut self) -> Option<T>;

    /// Borrow the front value without removing it.
    fn peek(&self) -> Option<&T>;

    /// `true` iff [`Queue::size`] is zero.
    fn is_empty(&self) -> bool;

    /// Number of queued values, tracked incrementally.
    fn size(&self) -> usize;

    /// Drop every queued value.
    fn clear(&mut self);

    /// Build a new queue holding `transform` applied to every value, front
    /// to back. The source is left untouched.
    fn map<A, F>(&self, transform: F) -> Self::Mapped<A>
    where
        F: FnMut(&T) -> A;

    /// Call `action` once per value, front to back.
    ///
    /// The queue is borrowed for the whole traversal, so `action` cannot
    /// enqueue into or dequeue from it.
    fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T);
}
