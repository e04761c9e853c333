//! Double-heap engine for arbitrary window sizes.
//!
//! ## Purpose
//!
//! This module provides the window engine used beyond the network
//! threshold. The lower half of the window lives in a max-heap, the upper
//! half in a min-heap, NaNs in a counted side bucket; the FIFO ring decides
//! which node each new input displaces.
//!
//! ## Key concepts
//!
//! * **Filling vs. full**: While the window fills, every input is a fresh
//!   admission (`add_new`). Once full, every input reuses the oldest node in
//!   place (`update_old`) and the engine never leaves steady state.
//! * **Class transitions**: Replacing the oldest value covers four cases.
//!   NaN for NaN leaves the heaps alone; NaN for an ordered value shrinks
//!   the bucket and grows the shorter heap; an ordered value for NaN
//!   detaches the node from its heap, grows the bucket, and moves a root
//!   across if the halves drift apart; ordered for ordered writes in place
//!   and sifts in the direction the value moved.
//! * **Result**: Lower-median root for odd occupancy, root midpoint for
//!   even. `(+inf + -inf) / 2` is NaN by IEEE-754 addition, intentionally.
//!
//! ## Invariants
//!
//! * `|max| + |min| + |nan| ==` window occupancy, with
//!   `|max| - |min|` in `{0, 1}`, after every admission or update.
//! * Every max-heap value `<=` every min-heap value.
//! * Debug builds re-check all of the above after each mutation.
//!
//! ## Non-goals
//!
//! * Input/output validation and engine selection (executor concerns).

// External dependencies
use core::mem::size_of;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::StrideGate;
use crate::primitives::classify::{is_nan, NanPolicy};
use crate::primitives::heap::HeapPair;
use crate::primitives::node::{Bucket, Node, NodeRing};

// ============================================================================
// Heap Window Engine
// ============================================================================

/// Sliding-median engine combining the heap pair, the FIFO ring, and the
/// NaN bucket.
#[derive(Debug, Clone)]
pub struct HeapWindow<T> {
    window_size: usize,
    policy: NanPolicy,
    ring: NodeRing<T>,
    heaps: HeapPair,
    nan_count: usize,
}

impl<T: Float> HeapWindow<T> {
    /// Create an engine for `window_size` elements. The node arena and both
    /// heap index arrays are allocated here, once; the per-element loop
    /// allocates nothing.
    pub fn new(window_size: usize, policy: NanPolicy) -> Self {
        Self {
            window_size,
            policy,
            ring: NodeRing::with_capacity(window_size),
            heaps: HeapPair::with_capacity(window_size),
            nan_count: 0,
        }
    }

    /// True once the window holds `window_size` elements.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.ring.len() == self.window_size
    }

    /// Admit a value while the window is still filling.
    pub fn add_new(&mut self, value: T) {
        let nan = is_nan(value);
        let slot = self.ring.admit(value, nan);
        if nan {
            self.nan_count += 1;
        } else {
            insert_balanced(&mut self.heaps, self.ring.nodes_mut(), slot);
        }
        self.debug_validate();
    }

    /// Replace the oldest window element with `value` (steady state).
    pub fn update_old(&mut self, value: T) {
        let nan = is_nan(value);
        let evicted = self.ring.rotate(value, nan);
        let slot = evicted.slot;

        match (evicted.old_bucket, nan) {
            // NaN replaced by NaN: the bucket population is unchanged.
            (Bucket::Nan, true) => {}

            // NaN replaced by an ordered value: shrink the bucket, grow the
            // shorter heap.
            (Bucket::Nan, false) => {
                self.nan_count -= 1;
                insert_balanced(&mut self.heaps, self.ring.nodes_mut(), slot);
            }

            // Ordered value replaced by NaN: detach the node from its heap
            // and re-level the halves if the removal left them apart.
            (Bucket::Max, true) => {
                let nodes = self.ring.nodes_mut();
                let position = nodes[slot].position;
                self.heaps.remove_max(nodes, position);
                nodes[slot].bucket = Bucket::Nan;
                self.nan_count += 1;
                restore_balance(&mut self.heaps, nodes);
            }
            (Bucket::Min, true) => {
                let nodes = self.ring.nodes_mut();
                let position = nodes[slot].position;
                self.heaps.remove_min(nodes, position);
                nodes[slot].bucket = Bucket::Nan;
                self.nan_count += 1;
                restore_balance(&mut self.heaps, nodes);
            }

            // Ordered value replaced in place: sift toward the root it moved
            // toward. Only an upward move can break cross-heap root order.
            (Bucket::Max, false) => {
                let nodes = self.ring.nodes_mut();
                let position = nodes[slot].position;
                if value > evicted.old_value {
                    self.heaps.sift_up_max(nodes, position);
                    self.heaps.rebalance_roots(nodes);
                } else {
                    self.heaps.sift_down_max(nodes, position);
                }
            }
            (Bucket::Min, false) => {
                let nodes = self.ring.nodes_mut();
                let position = nodes[slot].position;
                if value < evicted.old_value {
                    self.heaps.sift_up_min(nodes, position);
                    self.heaps.rebalance_roots(nodes);
                } else {
                    self.heaps.sift_down_min(nodes, position);
                }
            }
        }

        self.debug_validate();
    }

    /// Median of the current (full) window.
    pub fn result(&self) -> T {
        if self.nan_count > 0 {
            if self.policy == NanPolicy::Poison {
                return T::nan();
            }
            if self.heaps.max_len() == 0 {
                // Exclude policy with nothing but NaNs left.
                return T::nan();
            }
        }

        let nodes = self.ring.nodes();
        let lower = nodes[self.heaps.max_root()].value;
        if self.heaps.max_len() != self.heaps.min_len() {
            lower
        } else {
            (lower + nodes[self.heaps.min_root()].value) / T::from(2.0).unwrap()
        }
    }

    /// Walk `x`, writing one median per strided full window into `y`.
    /// Returns the number of values written.
    ///
    /// `y` must hold exactly one slot per emitted window.
    pub fn run(&mut self, x: &[T], y: &mut [T], stride: usize) -> usize {
        let mut gate = StrideGate::new(stride);
        let mut written = 0;

        for &value in x {
            if self.is_full() {
                self.update_old(value);
                if gate.fire() {
                    y[written] = self.result();
                    written += 1;
                }
            } else {
                self.add_new(value);
                if self.is_full() && gate.fire() {
                    y[written] = self.result();
                    written += 1;
                }
            }
        }

        written
    }

    /// Estimated engine footprint in bytes for a given window size: the
    /// state struct, both heap index arrays, and the node arena. Each index
    /// array is counted at full window length because one heap transiently
    /// holds the surplus during NaN transitions.
    pub fn est_memory(window_size: usize) -> usize {
        size_of::<Self>()
            + 2 * window_size * size_of::<usize>()
            + window_size * size_of::<Node<T>>()
    }

    fn debug_validate(&self) {
        if cfg!(debug_assertions) {
            let nodes = self.ring.nodes();
            self.heaps.debug_validate(nodes);

            debug_assert_eq!(
                self.heaps.max_len() + self.heaps.min_len() + self.nan_count,
                self.ring.len()
            );
            debug_assert!(
                self.heaps.max_len() >= self.heaps.min_len()
                    && self.heaps.max_len() - self.heaps.min_len() <= 1
            );
            debug_assert_eq!(
                nodes.iter().filter(|n| n.bucket == Bucket::Nan).count(),
                self.nan_count
            );

            // Following `next` from the oldest node must visit every node
            // once and end at the newest.
            if !self.ring.is_empty() {
                let mut walk = self.ring.tail();
                for _ in 1..self.ring.len() {
                    walk = nodes[walk].next;
                }
                debug_assert_eq!(walk, self.ring.head());
            }
        }
    }
}

// ============================================================================
// Balance Helpers
// ============================================================================

/// Insert a node into the shorter heap (max on ties), then restore
/// cross-heap root order.
fn insert_balanced<T: Float>(heaps: &mut HeapPair, nodes: &mut [Node<T>], slot: usize) {
    if heaps.max_len() > heaps.min_len() {
        heaps.insert_min(nodes, slot);
    } else {
        heaps.insert_max(nodes, slot);
    }
    heaps.rebalance_roots(nodes);
}

/// After a removal, move one root across if the halves drifted apart, then
/// restore cross-heap root order.
fn restore_balance<T: Float>(heaps: &mut HeapPair, nodes: &mut [Node<T>]) {
    if heaps.max_len() > heaps.min_len() + 1 {
        let root = heaps.pop_root_max(nodes);
        heaps.insert_min(nodes, root);
    } else if heaps.min_len() > heaps.max_len() {
        let root = heaps.pop_root_min(nodes);
        heaps.insert_max(nodes, root);
    } else {
        return;
    }
    heaps.rebalance_roots(nodes);
}
