//! Array-backed binary min-heap and priority queue
//!
//! This crate provides a binary min-heap stored as an implicit complete binary
//! tree in a single `Vec`, plus a priority-queue facade over it.
//!
//! # Features
//!
//! - **MinHeap**: O(log n) insert and extract-min, O(1) peek, O(n) bulk build
//! - **Pluggable ordering**: natural order for `T: Ord`, or any
//!   [`compare::Compare`] strategy, closures included
//! - **PriorityQueue**: `offer`/`poll`/`peek` facade implementing [`Queue`]
//!
//! # Example
//!
//! ```rust
//! use min_heap_queue::min_heap::MinHeap;
//! use min_heap_queue::priority_queue::PriorityQueue;
//! use min_heap_queue::Queue;
//!
//! let mut heap = MinHeap::from_vec(vec![9, 5, 7, 1, 3]);
//! heap.add(4);
//! assert_eq!(heap.poll(), Some(1));
//!
//! let mut queue = PriorityQueue::with_comparator(|a: &i32, b: &i32| b.cmp(a));
//! queue.offer(4);
//! queue.offer(7);
//! assert_eq!(Queue::peek(&queue), Some(&7));
//! ```

pub mod min_heap;
pub mod priority_queue;
pub mod traits;
pub mod tree;

// Re-export the main types for convenience
pub use min_heap::MinHeap;
pub use priority_queue::PriorityQueue;
pub use traits::{HeapError, Queue};
