//! Binary min-heap keyed by a separate priority.

use crate::error::EmptyQueueError;

/// A min-priority queue over `(priority, item)` pairs, stored as an
/// implicit binary heap in a `Vec`.
///
/// Duplicate priorities and duplicate items are both allowed. Entries with
/// equal priority come out in an order decided by the heap layout, not by
/// insertion order. The layout is itself a pure function of the push/pop
/// sequence, so a given sequence always pops in the same order.
#[derive(Debug, Clone)]
pub struct MinQueue<P, T> {
    heap: Vec<(P, T)>,
}

impl<P, T> Default for MinQueue<P, T> {
    fn default() -> Self {
        Self { heap: Vec::new() }
    }
}

impl<P: PartialOrd, T> MinQueue<P, T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue with room for `n` entries.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            heap: Vec::with_capacity(n),
        }
    }

    /// Number of pending entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no entries are pending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The entry [`pop`](Self::pop) would return next.
    pub fn peek(&self) -> Option<(&P, &T)> {
        self.heap.first().map(|(p, t)| (p, t))
    }

    /// Drop every pending entry.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Insert `item` with the given priority. O(log n).
    pub fn push(&mut self, priority: P, item: T) {
        self.heap.push((priority, item));
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the lowest-priority entry. O(log n).
    pub fn pop(&mut self) -> Result<(P, T), EmptyQueueError> {
        if self.heap.is_empty() {
            return Err(EmptyQueueError);
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let top = self.heap.pop().ok_or(EmptyQueueError)?;
        self.sift_down(0);
        Ok(top)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[i].0 < self.heap[parent].0 {
                self.heap.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < len && self.heap[left].0 < self.heap[smallest].0 {
                smallest = left;
            }
            if right < len && self.heap[right].0 < self.heap[smallest].0 {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.heap.swap(i, smallest);
            i = smallest;
        }
    }
}
