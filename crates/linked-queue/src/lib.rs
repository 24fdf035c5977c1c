//! # Linked Queue
//!
//! A generic first-in-first-out queue backed by a singly linked chain of
//! nodes.
//!
//! Nodes live in an index arena owned by the queue, so links are plain
//! `usize` indices: no `unsafe`, no reference counting, and slots freed by
//! [`Queue::dequeue`] are reused by later enqueues.
//!
//! ```rust
//! use linked_queue::{LinkedListQueue, Queue};
//!
//! let mut queue = LinkedListQueue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//!
//! let doubled = queue.map(|v| v * 2);
//! assert_eq!(queue.dequeue(), Some(1));
//! assert_eq!(doubled.peek(), Some(&2));
//! assert_eq!(doubled.size(), 2);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

mod linked;
mod queue;

pub use linked::{IntoIter, Iter, LinkedListQueue};
pub use queue::Queue;
