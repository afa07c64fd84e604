//! Binary min-heap used to feed Kruskal's algorithm edges in weight order.
//!
//! Heap positions are 1-based: the children of position `p` live at `2p` and
//! `2p + 1`. Position `p` is stored at index `p - 1` of the backing vector.

use crate::error::{GraphError, Result};

/// A binary min-heap over a totally ordered element type.
///
/// # Examples
/// ```
/// use spanwise_core::MinPriorityQueue;
///
/// let mut queue: MinPriorityQueue<u32> = [5, 1, 4].into_iter().collect();
/// assert_eq!(queue.extract_min()?, 1);
/// assert_eq!(queue.extract_min()?, 4);
/// assert_eq!(queue.len(), 1);
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct MinPriorityQueue<T> {
    items: Vec<T>,
}

impl<T: Ord> Default for MinPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> MinPriorityQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty queue able to hold `capacity` items without
    /// reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of queued items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the queue is exhausted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the smallest item without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Adds `item` and restores the heap order by sifting it up.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len());
    }

    /// Removes and returns the smallest item.
    ///
    /// The last item takes the vacated root position and sifts down.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyQueue`] when the queue is exhausted.
    pub fn extract_min(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(GraphError::EmptyQueue);
        }
        let min = self.items.swap_remove(0);
        self.sift_down(1);
        Ok(min)
    }

    fn sift_up(&mut self, mut position: usize) {
        while position > 1 {
            let parent = position >> 1;
            if self.items[position - 1] >= self.items[parent - 1] {
                break;
            }
            self.items.swap(position - 1, parent - 1);
            position = parent;
        }
    }

    fn sift_down(&mut self, mut position: usize) {
        let len = self.items.len();
        loop {
            let left = position << 1;
            if left > len {
                break;
            }
            let right = left + 1;
            let child = if right <= len && self.items[right - 1] < self.items[left - 1] {
                right
            } else {
                left
            };
            if self.items[child - 1] >= self.items[position - 1] {
                break;
            }
            self.items.swap(child - 1, position - 1);
            position = child;
        }
    }
}

impl<T: Ord> FromIterator<T> for MinPriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items = iter.into_iter();
        let mut queue = Self::with_capacity(items.size_hint().0);
        for item in items {
            queue.insert(item);
        }
        queue
    }
}
