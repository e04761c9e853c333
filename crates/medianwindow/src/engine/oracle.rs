//! Naive reference median for equivalence testing.
//!
//! A per-window sort-based median with the same policy semantics as the
//! engines. Quadratic and allocation-happy; it exists so the tests can
//! check both engines against an implementation too simple to be wrong.
//! NaNs are stripped before the sort so the comparator only ever sees
//! totally ordered values.

// Feature-gated imports (dev implies std)
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::MedianExecutor;
use crate::primitives::classify::{is_nan, NanPolicy};

/// Median of a single window under `policy`.
pub fn window_median<T: Float>(window: &[T], policy: NanPolicy) -> T {
    if policy == NanPolicy::Poison && window.iter().copied().any(is_nan) {
        return T::nan();
    }

    let mut valid: Vec<T> = window.iter().copied().filter(|&v| !is_nan(v)).collect();
    if valid.is_empty() {
        return T::nan();
    }

    valid.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let middle = valid.len() / 2;
    if valid.len() % 2 == 0 {
        (valid[middle - 1] + valid[middle]) / T::from(2.0).unwrap()
    } else {
        valid[middle]
    }
}

/// Sliding median over `x`, one window at a time.
pub fn sliding_median_oracle<T: Float>(
    x: &[T],
    window_size: usize,
    stride: usize,
    policy: NanPolicy,
) -> Vec<T> {
    let mut out = Vec::with_capacity(MedianExecutor::output_len(x.len(), window_size, stride));

    let mut start = 0;
    while start + window_size <= x.len() {
        out.push(window_median(&x[start..start + window_size], policy));
        start += stride;
    }

    out
}
