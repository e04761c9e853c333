//! Paired 8-ary heaps over window nodes.
//!
//! ## Purpose
//!
//! This module provides the max-heap/min-heap pair that keeps the lower and
//! upper halves of the window ordered. Both heaps store arena indices of
//! [`Node`]s; every repositioning writes the node's new heap index back into
//! the node, so the ring can locate any resident value in O(1) and sift from
//! it in O(log8 w).
//!
//! ## Design notes
//!
//! * **Arity**: 8-ary heaps; `parent(i) = (i - 1) / 8`,
//!   `first_child(i) = 8i + 1`. Child selection scans only the children
//!   actually present.
//! * **Hole shifting**: Sift-up moves parents down into the hole and writes
//!   the target once at the end, rather than swapping pairwise.
//! * **Capacity**: Each index array is sized to the full window, not half of
//!   it. A NaN-to-finite transition grows one heap past balance before the
//!   root move restores it, and the surplus must fit.
//!
//! ## Invariants
//!
//! * Heap order within each array: a max-heap parent is `>=` its children, a
//!   min-heap parent is `<=` them.
//! * After `rebalance_roots`, `max` root `<=` `min` root whenever both heaps
//!   are non-empty.
//! * `nodes[heap[i]].position == i` for every live entry of either array.
//!
//! ## Non-goals
//!
//! * NaN values never enter a heap; routing them is the engine's job.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::node::{Bucket, Node};

/// Children per heap level.
pub const HEAP_ARITY: usize = 8;

#[inline]
fn parent_of(position: usize) -> usize {
    (position - 1) / HEAP_ARITY
}

#[inline]
fn first_child_of(position: usize) -> usize {
    position * HEAP_ARITY + 1
}

// ============================================================================
// Heap Pair
// ============================================================================

/// Max-heap and min-heap over arena indices.
#[derive(Debug, Clone)]
pub struct HeapPair {
    max: Vec<usize>,
    min: Vec<usize>,
}

impl HeapPair {
    /// Create an empty pair; each side can grow to `window_size` entries
    /// without reallocating.
    pub fn with_capacity(window_size: usize) -> Self {
        Self {
            max: Vec::with_capacity(window_size),
            min: Vec::with_capacity(window_size),
        }
    }

    /// Number of nodes in the lower-half max-heap.
    #[inline]
    pub fn max_len(&self) -> usize {
        self.max.len()
    }

    /// Number of nodes in the upper-half min-heap.
    #[inline]
    pub fn min_len(&self) -> usize {
        self.min.len()
    }

    /// Arena index of the lower median (max-heap root).
    #[inline]
    pub fn max_root(&self) -> usize {
        self.max[0]
    }

    /// Arena index of the upper median (min-heap root).
    #[inline]
    pub fn min_root(&self) -> usize {
        self.min[0]
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Append a node to the max-heap and sift it up.
    pub fn insert_max<T: Float>(&mut self, nodes: &mut [Node<T>], node_idx: usize) {
        let position = self.max.len();
        nodes[node_idx].position = position;
        nodes[node_idx].bucket = Bucket::Max;
        self.max.push(node_idx);
        self.sift_up_max(nodes, position);
    }

    /// Append a node to the min-heap and sift it up.
    pub fn insert_min<T: Float>(&mut self, nodes: &mut [Node<T>], node_idx: usize) {
        let position = self.min.len();
        nodes[node_idx].position = position;
        nodes[node_idx].bucket = Bucket::Min;
        self.min.push(node_idx);
        self.sift_up_min(nodes, position);
    }

    // ========================================================================
    // Sifting
    // ========================================================================

    /// Restore max-heap order upward from `position`.
    pub fn sift_up_max<T: Float>(&mut self, nodes: &mut [Node<T>], mut position: usize) {
        let target = self.max[position];
        while position > 0 {
            let parent = parent_of(position);
            let parent_idx = self.max[parent];
            if nodes[target].value <= nodes[parent_idx].value {
                break;
            }

            nodes[parent_idx].position = position;
            self.max[position] = parent_idx;
            position = parent;
        }

        nodes[target].position = position;
        self.max[position] = target;
    }

    /// Restore min-heap order upward from `position`.
    pub fn sift_up_min<T: Float>(&mut self, nodes: &mut [Node<T>], mut position: usize) {
        let target = self.min[position];
        while position > 0 {
            let parent = parent_of(position);
            let parent_idx = self.min[parent];
            if nodes[target].value >= nodes[parent_idx].value {
                break;
            }

            nodes[parent_idx].position = position;
            self.min[position] = parent_idx;
            position = parent;
        }

        nodes[target].position = position;
        self.min[position] = target;
    }

    /// Restore max-heap order downward from `position`.
    pub fn sift_down_max<T: Float>(&mut self, nodes: &mut [Node<T>], mut position: usize) {
        loop {
            let best = Self::dominant_child(nodes, &self.max, position, |child, node| {
                child > node
            });
            if best == position {
                break;
            }

            self.swap_entries_max(nodes, position, best);
            position = best;
        }
    }

    /// Restore min-heap order downward from `position`.
    pub fn sift_down_min<T: Float>(&mut self, nodes: &mut [Node<T>], mut position: usize) {
        loop {
            let best = Self::dominant_child(nodes, &self.min, position, |child, node| {
                child < node
            });
            if best == position {
                break;
            }

            self.swap_entries_min(nodes, position, best);
            position = best;
        }
    }

    /// Reposition `position` after an in-place value change: up if the new
    /// value dominates the parent, down otherwise.
    pub fn reposition_max<T: Float>(&mut self, nodes: &mut [Node<T>], position: usize) {
        let rises = position > 0
            && nodes[self.max[position]].value > nodes[self.max[parent_of(position)]].value;
        if rises {
            self.sift_up_max(nodes, position);
        } else {
            self.sift_down_max(nodes, position);
        }
    }

    /// Min-heap counterpart of [`HeapPair::reposition_max`].
    pub fn reposition_min<T: Float>(&mut self, nodes: &mut [Node<T>], position: usize) {
        let rises = position > 0
            && nodes[self.min[position]].value < nodes[self.min[parent_of(position)]].value;
        if rises {
            self.sift_up_min(nodes, position);
        } else {
            self.sift_down_min(nodes, position);
        }
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Detach the entry at `position` from the max-heap, repositioning the
    /// swapped-in replacement. Returns the removed arena index.
    pub fn remove_max<T: Float>(&mut self, nodes: &mut [Node<T>], position: usize) -> usize {
        let removed = self.max[position];
        let last = self.max.len() - 1;
        if position != last {
            let moved = self.max[last];
            self.max[position] = moved;
            nodes[moved].position = position;
        }
        self.max.pop();

        if position < self.max.len() {
            self.reposition_max(nodes, position);
        }
        removed
    }

    /// Detach the entry at `position` from the min-heap, repositioning the
    /// swapped-in replacement. Returns the removed arena index.
    pub fn remove_min<T: Float>(&mut self, nodes: &mut [Node<T>], position: usize) -> usize {
        let removed = self.min[position];
        let last = self.min.len() - 1;
        if position != last {
            let moved = self.min[last];
            self.min[position] = moved;
            nodes[moved].position = position;
        }
        self.min.pop();

        if position < self.min.len() {
            self.reposition_min(nodes, position);
        }
        removed
    }

    /// Pop the max-heap root.
    pub fn pop_root_max<T: Float>(&mut self, nodes: &mut [Node<T>]) -> usize {
        self.remove_max(nodes, 0)
    }

    /// Pop the min-heap root.
    pub fn pop_root_min<T: Float>(&mut self, nodes: &mut [Node<T>]) -> usize {
        self.remove_min(nodes, 0)
    }

    // ========================================================================
    // Root Rebalance
    // ========================================================================

    /// Exchange the two roots when the lower median exceeds the upper one,
    /// then sift both replacements down. No-op unless both heaps are
    /// non-empty and the cross-heap order is actually violated.
    pub fn rebalance_roots<T: Float>(&mut self, nodes: &mut [Node<T>]) {
        if self.max.is_empty() || self.min.is_empty() {
            return;
        }

        let max_root = self.max[0];
        let min_root = self.min[0];
        if nodes[max_root].value <= nodes[min_root].value {
            return;
        }

        self.max[0] = min_root;
        nodes[min_root].bucket = Bucket::Max;
        nodes[min_root].position = 0;
        self.min[0] = max_root;
        nodes[max_root].bucket = Bucket::Min;
        nodes[max_root].position = 0;
        self.sift_down_max(nodes, 0);
        self.sift_down_min(nodes, 0);
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Index of the child that dominates `position` under `wins`, or
    /// `position` itself when no present child does.
    fn dominant_child<T: Float>(
        nodes: &[Node<T>],
        heap: &[usize],
        position: usize,
        wins: fn(T, T) -> bool,
    ) -> usize {
        let first = first_child_of(position);
        if first >= heap.len() {
            return position;
        }

        let last = usize::min(first + HEAP_ARITY, heap.len());
        let mut best = position;
        for child in first..last {
            if wins(nodes[heap[child]].value, nodes[heap[best]].value) {
                best = child;
            }
        }
        best
    }

    fn swap_entries_max<T: Float>(&mut self, nodes: &mut [Node<T>], a: usize, b: usize) {
        self.max.swap(a, b);
        nodes[self.max[a]].position = a;
        nodes[self.max[b]].position = b;
    }

    fn swap_entries_min<T: Float>(&mut self, nodes: &mut [Node<T>], a: usize, b: usize) {
        self.min.swap(a, b);
        nodes[self.min[a]].position = a;
        nodes[self.min[b]].position = b;
    }

    // ========================================================================
    // Debug Validation
    // ========================================================================

    /// Assert heap order, position backlinks, and cross-heap root order.
    /// Compiled away in release builds.
    pub fn debug_validate<T: Float>(&self, nodes: &[Node<T>]) {
        if cfg!(debug_assertions) {
            for (i, &idx) in self.max.iter().enumerate() {
                debug_assert_eq!(nodes[idx].position, i);
                debug_assert_eq!(nodes[idx].bucket, Bucket::Max);
                if i > 0 {
                    let parent = self.max[parent_of(i)];
                    debug_assert!(nodes[idx].value <= nodes[parent].value);
                }
            }
            for (i, &idx) in self.min.iter().enumerate() {
                debug_assert_eq!(nodes[idx].position, i);
                debug_assert_eq!(nodes[idx].bucket, Bucket::Min);
                if i > 0 {
                    let parent = self.min[parent_of(i)];
                    debug_assert!(nodes[idx].value >= nodes[parent].value);
                }
            }
            if !self.max.is_empty() && !self.min.is_empty() {
                debug_assert!(nodes[self.max[0]].value <= nodes[self.min[0]].value);
            }
        }
    }
}
