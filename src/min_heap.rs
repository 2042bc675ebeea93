//! Binary min-heap with a pluggable ordering strategy
//!
//! Elements live in a single `Vec` laid out as an implicit complete binary
//! tree (see [`tree`](crate::tree)). There are no node objects and no
//! back-references.
//!
//! The ordering is any [`Compare`] implementation. [`MinHeap::new`] and the
//! other constructors without a comparator use [`Natural`], which is only
//! available for `T: Ord`. A heap over a type with no natural order therefore
//! has to be built with an explicit comparator, and forgetting it is a
//! compile error.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity        |
//! |------------|-------------------|
//! | `add`      | O(log n)          |
//! | `poll`     | O(log n)          |
//! | `peek`     | O(1)              |
//! | `from_vec` | O(n)              |
//!
//! # Example
//!
//! ```rust
//! use min_heap_queue::min_heap::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! heap.add(3);
//! heap.add(1);
//! heap.add(2);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.poll(), Some(1));
//! assert_eq!(heap.poll(), Some(2));
//! assert_eq!(heap.poll(), Some(3));
//! assert_eq!(heap.poll(), None);
//! ```
//!
//! A max-first heap only needs a different comparator:
//!
//! ```rust
//! use compare::{natural, Compare};
//! use min_heap_queue::min_heap::MinHeap;
//!
//! let heap = MinHeap::from_vec_with_comparator(vec![4, 1, 7, 3], natural::<i32>().rev());
//! assert_eq!(heap.into_sorted_vec(), vec![7, 4, 3, 1]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use compare::{natural, Compare, Natural};
use log::{debug, trace};

use crate::tree;

/// A binary min-heap ordered by `C`
///
/// The root is always an element that no other element compares less than.
/// Equal elements come out in no particular order.
#[derive(Clone)]
pub struct MinHeap<T, C = Natural<T>> {
    /// Elements in implicit tree order
    data: Vec<T>,
    cmp: C,
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap using the natural order of `T`
    pub fn new() -> Self {
        Self::with_comparator(natural())
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, natural())
    }

    /// Builds a heap from `data` in O(n)
    pub fn from_vec(data: Vec<T>) -> Self {
        Self::from_vec_with_comparator(data, natural())
    }
}

impl<T, C: Compare<T>> MinHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty heap ordered by `cmp` with room for `capacity` elements
    ///
    /// The capacity is only a hint. The heap still grows past it.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Builds a heap ordered by `cmp` from `data` in O(n)
    ///
    /// `data` is taken as-is and rearranged in place by sifting down every
    /// internal node, from the last one back to the root.
    pub fn from_vec_with_comparator(data: Vec<T>, cmp: C) -> Self {
        let mut heap = Self { data, cmp };
        heap.heapify();
        heap
    }

    /// Returns the number of elements in the heap
    #[doc(alias = "size")]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        debug!(
            "reserving {} more slots (len {}, capacity {})",
            additional,
            self.data.len(),
            self.data.capacity()
        );
        self.data.reserve(additional);
    }

    /// Returns the ordering strategy
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Inserts an element
    ///
    /// The element is appended as the last leaf and sifted up.
    pub fn add(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the minimum element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the minimum element
    pub fn poll(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        result
    }

    /// Returns the backing array in tree order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in arbitrary order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning the backing vector in tree order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements sorted by the heap's ordering
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = self.poll() {
            sorted.push(item);
        }
        sorted
    }

    /// Checks that every parent compares less than or equal to its children
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|index| {
            let parent = tree::parent_of_child(index);
            self.cmp.compare(&self.data[parent], &self.data[index]) != Ordering::Greater
        })
    }

    /// Restores the heap property over the whole array
    fn heapify(&mut self) {
        if let Some(last) = tree::last_internal(self.data.len()) {
            trace!("heapifying {} elements", self.data.len());
            for index in (0..=last).rev() {
                self.sift_down(index);
            }
        }
    }

    /// Move element at index up while it is strictly less than its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = tree::parent_of_child(index);
            if self.cmp.compare(&self.data[parent], &self.data[index]) == Ordering::Greater {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down while it is greater than its smaller child
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = tree::left_child(index);
            if left >= len {
                break;
            }

            // Ties go to the left child
            let right = tree::right_child(index);
            let child = if right < len
                && self.cmp.compare(&self.data[right], &self.data[left]) == Ordering::Less
            {
                right
            } else {
                left
            };

            if self.cmp.compare(&self.data[index], &self.data[child]) != Ordering::Greater {
                break;
            }

            self.data.swap(index, child);
            index = child;
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T, C: Compare<T>> Extend<T> for MinHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for MinHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}
