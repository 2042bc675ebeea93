//! Priority queue facade over [`MinHeap`]
//!
//! [`PriorityQueue`] owns exactly one heap and forwards every call to it,
//! renaming `add` to `offer` so it can be used through the [`Queue`] trait.
//!
//! # Example
//!
//! ```rust
//! use min_heap_queue::priority_queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! assert!(queue.offer(5));
//! assert!(queue.offer(2));
//! assert_eq!(queue.peek(), Some(&2));
//! assert_eq!(queue.poll(), Some(2));
//! assert_eq!(queue.size(), 1);
//! ```

use std::fmt;

use compare::{Compare, Natural};

use crate::min_heap::MinHeap;
use crate::traits::Queue;

/// A queue that always yields its least element first
#[derive(Clone)]
pub struct PriorityQueue<T, C = Natural<T>> {
    heap: MinHeap<T, C>,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty queue using the natural order of `T`
    pub fn new() -> Self {
        Self {
            heap: MinHeap::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: MinHeap::with_capacity(capacity),
        }
    }
}

impl<T, C: Compare<T>> PriorityQueue<T, C> {
    /// Creates an empty queue ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            heap: MinHeap::with_comparator(cmp),
        }
    }

    /// Creates an empty queue ordered by `cmp` with room for `capacity` elements
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            heap: MinHeap::with_capacity_and_comparator(capacity, cmp),
        }
    }

    /// Returns the number of queued elements
    pub fn size(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Queues an element. Always succeeds.
    pub fn offer(&mut self, item: T) -> bool {
        self.heap.add(item);
        true
    }

    /// Removes and returns the least element
    pub fn poll(&mut self) -> Option<T> {
        self.heap.poll()
    }

    /// Returns the least element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Borrows the underlying heap
    pub fn heap(&self) -> &MinHeap<T, C> {
        &self.heap
    }

    /// Consumes the queue, returning the underlying heap
    pub fn into_heap(self) -> MinHeap<T, C> {
        self.heap
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> From<MinHeap<T, C>> for PriorityQueue<T, C> {
    fn from(heap: MinHeap<T, C>) -> Self {
        Self { heap }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .finish()
    }
}

impl<T, C: Compare<T>> Queue<T> for PriorityQueue<T, C> {
    fn size(&self) -> usize {
        PriorityQueue::size(self)
    }

    fn is_empty(&self) -> bool {
        PriorityQueue::is_empty(self)
    }

    fn offer(&mut self, item: T) -> bool {
        PriorityQueue::offer(self, item)
    }

    fn poll(&mut self) -> Option<T> {
        PriorityQueue::poll(self)
    }

    fn peek(&self) -> Option<&T> {
        PriorityQueue::peek(self)
    }
}
