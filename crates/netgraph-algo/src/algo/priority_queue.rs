// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Addressable min-priority queue.
//!
//! A binary array heap paired with an element -> heap index map. Unlike
//! `std::collections::BinaryHeap` an element is stored at most once and its
//! priority can be lowered or raised in place, which is what label-setting
//! searches need to avoid stale entries.

use fxhash::FxHashMap;
use std::hash::Hash;

/// Min-priority queue without duplicate elements.
///
/// Ties between equal priorities are broken by heap position, which depends
/// only on the sequence of operations performed. Priorities must be totally
/// ordered in practice; NaN priorities leave the heap order unspecified.
///
/// # Example
///
/// ```ignore
/// let mut pq = PriorityQueue::new();
/// pq.set("a", 3);
/// pq.set("b", 1);
/// pq.set("a", 0); // decrease key
/// assert_eq!(pq.pop(), Some(("a", 0)));
/// ```
#[derive(Debug, Clone)]
pub struct PriorityQueue<E, P> {
    /// Heap entries: (element, priority)
    heap: Vec<(E, P)>,
    /// Element -> position in `heap`
    index: FxHashMap<E, usize>,
}

impl<E, P> PriorityQueue<E, P>
where
    E: Copy + Eq + Hash,
    P: Copy + PartialOrd,
{
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
    }

    #[inline]
    pub fn contains(&self, element: &E) -> bool {
        self.index.contains_key(element)
    }

    /// Current priority of `element`, if queued.
    #[inline]
    pub fn priority(&self, element: &E) -> Option<P> {
        self.index.get(element).map(|&i| self.heap[i].1)
    }

    /// Inserts `element` or changes its priority.
    pub fn set(&mut self, element: E, priority: P) {
        match self.index.get(&element) {
            Some(&i) => {
                let old = self.heap[i].1;
                self.heap[i].1 = priority;
                if priority < old {
                    self.sift_up(i);
                } else if priority > old {
                    self.sift_down(i);
                }
            }
            None => {
                let i = self.heap.len();
                self.heap.push((element, priority));
                self.index.insert(element, i);
                self.sift_up(i);
            }
        }
    }

    /// Element with the smallest priority, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<(E, P)> {
        self.heap.first().copied()
    }

    /// Removes and returns the element with the smallest priority.
    pub fn pop(&mut self) -> Option<(E, P)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let top = self.heap.pop()?;
        self.index.remove(&top.0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    /// Removes `element` and returns its priority, if it was queued.
    pub fn remove(&mut self, element: &E) -> Option<P> {
        let i = self.index.remove(element)?;
        let last = self.heap.len() - 1;
        if i != last {
            self.heap.swap(i, last);
            self.index.insert(self.heap[i].0, i);
        }
        let (_, priority) = self.heap.pop()?;
        if i < self.heap.len() {
            self.sift_up(i);
            self.sift_down(i);
        }
        Some(priority)
    }

    /// Iterates over queued (element, priority) pairs in heap order.
    pub fn iter(&self) -> impl Iterator<Item = (E, P)> + '_ {
        self.heap.iter().copied()
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.heap.swap(i, j);
        self.index.insert(self.heap[i].0, i);
        self.index.insert(self.heap[j].0, j);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[i].1 < self.heap[parent].1 {
                self.swap(i, parent);
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
            if left < len && self.heap[left].1 < self.heap[smallest].1 {
                smallest = left;
            }
            if right < len && self.heap[right].1 < self.heap[smallest].1 {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<E, P> Default for PriorityQueue<E, P>
where
    E: Copy + Eq + Hash,
    P: Copy + PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}
