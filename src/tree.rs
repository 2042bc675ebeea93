//! Index arithmetic for a complete binary tree stored in a flat array
//!
//! With 0-based indices, the node at `i` has its children at `2i + 1` and
//! `2i + 2`, and its parent at `(i - 1) / 2`. The root has no parent.

use crate::traits::HeapError;

/// Returns the parent index of `index`
///
/// # Errors
/// Returns [`HeapError::RootHasNoParent`] for index 0.
///
/// ```rust
/// use min_heap_queue::tree::parent;
/// use min_heap_queue::HeapError;
///
/// assert_eq!(parent(4), Ok(1));
/// assert_eq!(parent(0), Err(HeapError::RootHasNoParent));
/// ```
pub fn parent(index: usize) -> Result<usize, HeapError> {
    if index == 0 {
        return Err(HeapError::RootHasNoParent);
    }
    Ok(parent_of_child(index))
}

/// Parent of a non-root index. Callers guarantee `index > 0`.
#[inline]
pub(crate) fn parent_of_child(index: usize) -> usize {
    debug_assert!(index > 0, "parent of the root requested");
    (index - 1) / 2
}

/// Returns the left child index of `index`
#[inline]
pub fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// Returns the right child index of `index`
#[inline]
pub fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// Returns the last index with at least one child in a tree of `len` nodes
///
/// Trees with fewer than two nodes have no internal node.
pub fn last_internal(len: usize) -> Option<usize> {
    if len < 2 {
        None
    } else {
        Some((len - 2) / 2)
    }
}
