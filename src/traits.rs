//! Common traits and errors for the queue structures
//!
//! - [`Queue`]: the generic queue capability (`offer`/`poll`/`peek`) that
//!   [`PriorityQueue`](crate::priority_queue::PriorityQueue) adapts a heap to
//! - [`HeapError`]: domain errors raised by the implicit-tree index arithmetic

use std::fmt;

/// Error type for heap index arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The root (index 0) has no parent
    RootHasNoParent,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::RootHasNoParent => {
                write!(f, "index 0 is the root and has no parent")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A queue whose removal order is decided by the implementation
///
/// The vocabulary follows the classic queue interface:
/// - `offer` inserts an element and reports whether it was accepted
/// - `poll` removes and returns the head, or `None` if the queue is empty
/// - `peek` returns the head without removing it
///
/// # Example
///
/// ```rust
/// use min_heap_queue::Queue;
/// use min_heap_queue::priority_queue::PriorityQueue;
///
/// fn drain<Q: Queue<u32>>(queue: &mut Q) -> Vec<u32> {
///     let mut out = Vec::with_capacity(queue.size());
///     while let Some(item) = queue.poll() {
///         out.push(item);
///     }
///     out
/// }
///
/// let mut queue = PriorityQueue::new();
/// queue.offer(3);
/// queue.offer(1);
/// queue.offer(2);
/// assert_eq!(drain(&mut queue), vec![1, 2, 3]);
/// ```
pub trait Queue<T> {
    /// Returns the number of elements in the queue
    fn size(&self) -> usize;

    /// Returns true if the queue holds no elements
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Inserts an element, returning `true` if it was accepted
    fn offer(&mut self, item: T) -> bool;

    /// Removes and returns the head of the queue
    fn poll(&mut self) -> Option<T>;

    /// Returns the head of the queue without removing it
    fn peek(&self) -> Option<&T>;
}
