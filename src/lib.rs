//! A minimum-priority queue backed by a binary heap stored in a `Vec`.
//!
//! [`MinHeap::remove_min`] always yields the smallest element under the
//! element type's [`Ord`] implementation. Removing from an empty heap is
//! reported as [`HeapError::EmptyContainer`] rather than a sentinel value.

use core::fmt;
use std::slice;

use tracing::{debug, trace};

mod error;

pub use error::{HeapError, Result};

/// A min-priority queue implemented with a binary heap.
///
/// Elements live in a single dense vector interpreted as a complete binary
/// tree: the element at index `i` has its parent at `(i - 1) / 2` and its
/// children at `2i + 1` and `2i + 2`. Every parent compares less than or
/// equal to its children, so the root is always a minimum.
///
/// It is a logic error for an item to be modified in such a way that the
/// item's ordering relative to any other item, as determined by the [`Ord`]
/// trait, changes while it is in the heap. The behavior resulting from such
/// a logic error is not specified but will not be undefined behavior.
///
/// # Examples
///
/// ```
/// use min_heap::{HeapError, MinHeap};
///
/// let mut heap = MinHeap::new();
///
/// heap.insert(5);
/// heap.insert(3);
/// heap.insert(8);
/// heap.insert(1);
/// heap.insert(2);
///
/// assert_eq!(heap.len(), 5);
/// assert_eq!(heap.peek(), Some(&1));
///
/// let mut out = Vec::new();
/// while !heap.is_empty() {
///     out.push(heap.remove_min()?);
/// }
/// assert_eq!(out, [1, 2, 3, 5, 8]);
///
/// assert_eq!(heap.remove_min(), Err(HeapError::EmptyContainer));
/// # Ok::<(), HeapError>(())
/// ```
///
/// # Time complexity
///
/// | [insert] | [remove\_min] | [peek] | [len] |
/// |----------|---------------|--------|-------|
/// | *O*(log(*n*))~ | *O*(log(*n*)) | *O*(1) | *O*(1) |
///
/// [insert]: MinHeap::insert
/// [remove\_min]: MinHeap::remove_min
/// [peek]: MinHeap::peek
/// [len]: MinHeap::len
#[derive(Clone)]
pub struct MinHeap<T> {
    data: Vec<T>,
}

impl<T: Ord> Default for MinHeap<T> {
    /// Creates an empty `MinHeap<T>`.
    #[inline]
    fn default() -> MinHeap<T> {
        MinHeap::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty `MinHeap`.
    #[must_use]
    pub fn new() -> MinHeap<T> {
        MinHeap { data: vec![] }
    }

    /// Inserts an item into the heap.
    ///
    /// The item is appended at the end of the storage and then moved toward
    /// the root while it is smaller than its parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::new();
    /// heap.insert(3);
    /// heap.insert(5);
    /// heap.insert(1);
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    pub fn insert(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes the smallest item from the heap and returns it.
    ///
    /// The last element is moved into the root slot and sifted down until
    /// neither child is smaller than it.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::EmptyContainer`] if the heap holds no elements.
    /// The heap is left empty and usable.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::{HeapError, MinHeap};
    /// let mut heap = MinHeap::from([3, 1]);
    ///
    /// assert_eq!(heap.remove_min(), Ok(1));
    /// assert_eq!(heap.remove_min(), Ok(3));
    /// assert_eq!(heap.remove_min(), Err(HeapError::EmptyContainer));
    /// ```
    pub fn remove_min(&mut self) -> Result<T> {
        let mut item = match self.data.pop() {
            Some(item) => item,
            None => {
                debug!("remove_min called on an empty heap");
                return Err(HeapError::EmptyContainer);
            }
        };

        if !self.is_empty() {
            core::mem::swap(&mut item, &mut self.data[0]);
            self.sift_down(0);
        }

        Ok(item)
    }

    /// Checks that every parent compares less than or equal to its
    /// children. Does not modify the heap.
    #[must_use]
    pub fn check_integrity(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[(i - 1) / 2] <= self.data[i])
    }

    /// Moves the element at `pos` toward the root while it is smaller than
    /// its parent.
    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.data[pos] >= self.data[parent] {
                break;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
    }

    /// Moves the element at `pos` toward the leaves while a child is
    /// smaller. Ties between the two children go to the left one.
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                return;
            }

            let right = left + 1;
            let child = if right < len && self.data[right] < self.data[left] {
                right
            } else {
                left
            };

            if self.data[pos] <= self.data[child] {
                return;
            }
            self.data.swap(pos, child);
            pos = child;
        }
    }

    /// Restores heap order over arbitrary storage in *O*(*n*).
    fn rebuild(&mut self) {
        trace!(len = self.len(), "heapifying buffer");
        for pos in (0..self.len() / 2).rev() {
            self.sift_down(pos);
        }
    }
}

impl<T> MinHeap<T> {
    /// Returns an iterator visiting all elements in storage order, which is
    /// not sorted.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the smallest item in the heap, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::new();
    /// assert_eq!(heap.peek(), None);
    ///
    /// heap.insert(5);
    /// heap.insert(1);
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the number of elements in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    /// Converts a `Vec<T>` into a `MinHeap<T>`.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    fn from(vec: Vec<T>) -> MinHeap<T> {
        let mut heap = MinHeap { data: vec };
        heap.rebuild();
        heap
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for MinHeap<T> {
    fn from(arr: [T; N]) -> Self {
        MinHeap::from(Vec::from(arr))
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> MinHeap<T> {
        MinHeap::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, T> IntoIterator for &'a MinHeap<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.iter()
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iterator = iter.into_iter();
        self.data.reserve(iterator.size_hint().0);
        iterator.for_each(move |item| self.insert(item));
    }
}
