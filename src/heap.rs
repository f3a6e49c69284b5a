//! A binary min-heap with first-in-first-out behavior on equal weights.
//!
//! The tree builder pops the two lightest pending nodes over and over.
//! Which node wins a weight tie decides the final tree shape, and the
//! decoder has to arrive at the exact same shape from the same
//! frequencies, so the tie-break is part of the format contract: entries
//! with equal weight come out in insertion order.

/// Min-ordered queue of `(weight, value)` pairs.
///
/// `push` and `pop` are both O(log n). Capacity is unbounded.
pub struct MinHeap<T> {
    entries: Vec<Entry<T>>,
    /// Monotonic insertion counter, the FIFO tie-break key.
    next_seq: u64,
}

struct Entry<T> {
    weight: u64,
    seq: u64,
    value: T,
}

impl<T> Entry<T> {
    fn key(&self) -> (u64, u64) {
        (self.weight, self.seq)
    }
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, weight: u64, value: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { weight, seq, value });
        self.sift_up(self.entries.len() - 1);
    }

    /// Remove and return the value with the lowest weight, breaking
    /// weight ties in favor of the entry inserted earliest.
    pub fn pop(&mut self) -> Option<T> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let entry = self.entries.pop().map(|entry| entry.value);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        entry
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.entries[idx].key() >= self.entries[parent].key() {
                break;
            }
            self.entries.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut smallest = idx;

            if left < len && self.entries[left].key() < self.entries[smallest].key() {
                smallest = left;
            }
            if right < len && self.entries[right].key() < self.entries[smallest].key() {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.entries.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::MinHeap;

    #[test]
    fn pops_ascending() {
        let mut heap = MinHeap::new();
        for weight in [5u64, 1, 4, 2, 3, 9, 0] {
            heap.push(weight, weight);
        }
        let mut popped = Vec::new();
        while let Some(value) = heap.pop() {
            popped.push(value);
        }
        assert_eq!(popped, vec![0, 1, 2, 3, 4, 5, 9]);
    }

    #[test]
    fn equal_weights_pop_in_insertion_order() {
        let mut heap = MinHeap::new();
        for label in ["first", "second", "third", "fourth"] {
            heap.push(7, label);
        }
        assert_eq!(heap.pop(), Some("first"));
        assert_eq!(heap.pop(), Some("second"));
        assert_eq!(heap.pop(), Some("third"));
        assert_eq!(heap.pop(), Some("fourth"));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn tie_break_survives_interleaved_ops() {
        let mut heap = MinHeap::new();
        heap.push(3, "a");
        heap.push(1, "b");
        heap.push(3, "c");
        assert_eq!(heap.pop(), Some("b"));
        heap.push(1, "d");
        heap.push(3, "e");
        assert_eq!(heap.pop(), Some("d"));
        assert_eq!(heap.pop(), Some("a"));
        assert_eq!(heap.pop(), Some("c"));
        assert_eq!(heap.pop(), Some("e"));
        assert!(heap.is_empty());
    }
}
