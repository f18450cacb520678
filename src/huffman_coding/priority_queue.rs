//! Array backed binary min-heap used to order nodes while the tree is built.
//!
//! The heap is 0-indexed: the children of `i` live at `2i + 1` and `2i + 2`. Every insert and
//! extract restores the heap property (no parent is greater than either child) with a single
//! sift-up or sift-down, so both are O(log n).
//!
//! Elements that compare equal come out in whatever order the sifting leaves them. Callers that
//! need a reproducible order must make the ordering total (the tree builder does this).

use std::fmt::{Display, Formatter};

use crate::error::{HuffError, Result};

const INITIAL_CAPACITY: usize = 16;

#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    elements: Vec<T>,
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            elements: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Smallest element, if any, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }
}

impl<T: Ord> MinHeap<T> {
    /// Add an element. The backing Vec grows (doubling) when full, so this never fails.
    pub fn insert(&mut self, value: T) {
        self.elements.push(value);
        self.sift_up(self.elements.len() - 1);
    }

    /// Remove and return the smallest element.
    pub fn extract_min(&mut self) -> Result<T> {
        if self.elements.is_empty() {
            return Err(HuffError::EmptyQueue);
        }
        // Move the last leaf into the root slot, then push it down to where it belongs.
        let result = self.elements.swap_remove(0);
        if !self.elements.is_empty() {
            self.sift_down(0);
        }
        Ok(result)
    }

    fn sift_up(&mut self, mut hole: usize) {
        while hole > 0 {
            let parent = (hole - 1) / 2;
            if self.elements[hole] >= self.elements[parent] {
                break;
            }
            self.elements.swap(hole, parent);
            hole = parent;
        }
    }

    fn sift_down(&mut self, mut hole: usize) {
        let n = self.elements.len();
        loop {
            let left = 2 * hole + 1;
            if left >= n {
                break;
            }
            // find smaller child
            let mut child = left;
            if left + 1 < n && self.elements[left + 1] < self.elements[left] {
                child = left + 1;
            }
            if self.elements[hole] <= self.elements[child] {
                break;
            }
            self.elements.swap(hole, child);
            hole = child;
        }
    }

    #[cfg(test)]
    fn valid_min_heap(&self) -> bool {
        (1..self.elements.len()).all(|i| self.elements[(i - 1) / 2] <= self.elements[i])
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    /// Heapify an existing Vec bottom-up in O(n).
    fn from(source: Vec<T>) -> Self {
        let mut heap = MinHeap { elements: source };
        for i in (0..heap.elements.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints the backing array in storage order, e.g. `[3, 12, 18]`.
impl<T: Display> Display for MinHeap<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, el) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", el)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod test {
    use super::MinHeap;
    use crate::error::HuffError;

    #[test]
    fn empty_heap_test() {
        let mut heap: MinHeap<i32> = MinHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.peek(), None);
        assert!(matches!(heap.extract_min(), Err(HuffError::EmptyQueue)));
        assert_eq!(heap.to_string(), "[]");
    }

    #[test]
    fn extract_in_order_test() {
        let mut heap = MinHeap::new();
        for x in [18, 12, 3, 66, 24, 98] {
            heap.insert(x);
            assert!(heap.valid_min_heap());
        }
        assert_eq!(heap.len(), 6);
        assert_eq!(heap.peek(), Some(&3));
        let mut out = vec![];
        while !heap.is_empty() {
            out.push(heap.extract_min().unwrap());
            assert!(heap.valid_min_heap());
        }
        assert_eq!(out, vec![3, 12, 18, 24, 66, 98]);
        assert!(heap.extract_min().is_err());
    }

    #[test]
    fn grows_past_initial_capacity_test() {
        let mut heap = MinHeap::with_capacity(1);
        (0..100).rev().for_each(|x| heap.insert(x));
        assert_eq!(heap.len(), 100);
        assert!((0..100).all(|x| heap.extract_min().unwrap() == x));
    }

    #[test]
    fn duplicates_test() {
        let mut heap = MinHeap::new();
        [5, 1, 5, 1, 3].into_iter().for_each(|x| heap.insert(x));
        let out: Vec<i32> = (0..5).map(|_| heap.extract_min().unwrap()).collect();
        assert_eq!(out, vec![1, 1, 3, 5, 5]);
    }

    #[test]
    fn from_vec_test() {
        let mut heap = MinHeap::from(vec![9, 4, 7, 1, 8, 2]);
        assert!(heap.valid_min_heap());
        assert_eq!(heap.extract_min().unwrap(), 1);
        assert_eq!(heap.extract_min().unwrap(), 2);
        assert_eq!(heap.len(), 4);
    }

    #[test]
    fn display_test() {
        let mut heap = MinHeap::new();
        heap.insert(12);
        heap.insert(3);
        assert_eq!(heap.to_string(), "[3, 12]");
    }
}
