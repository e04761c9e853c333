//! Small-window engine backed by median networks.
//!
//! ## Purpose
//!
//! This module provides the window engine for sizes 2 through 8. Each
//! emitted window is copied into a stack buffer and resolved by a fixed
//! compare-exchange kernel; no heap state is carried between positions.
//!
//! ## Design notes
//!
//! * **Dispatch once**: The kernel for the configured `(window size,
//!   policy)` pair is chosen at construction and stored as a plain function
//!   pointer, so the per-element loop carries no branch on either.
//! * **NaN fast paths**: Poison kernels scan for NaN and bail before any
//!   exchange. Exclude kernels keep a NaN-free full window on the fast path
//!   and otherwise compact the valid values into a prefix and run the
//!   matching shorter network.
//! * **Shared epilogue**: Reduced windows of `k` valid values finish with
//!   one rule: mean of the two middle values for even `k`, the middle value
//!   for odd `k`.
//!
//! ## Invariants
//!
//! * NaNs never reach a network; they are masked out (exclude) or poison
//!   the window before the first exchange.
//!
//! ## Non-goals
//!
//! * Window sizes above 8 (served by the heap engine).
//! * Input/output validation (handled by the executor).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{StrideGate, NETWORK_ENGINE_MAX_WINDOW};
use crate::math::network::{
    median_network_2, median_network_3, median_network_4, median_network_5, median_network_6,
    median_network_7, median_network_8, median_network_select,
};
use crate::primitives::classify::{is_nan, NanPolicy};

/// Per-window kernel: consumes the copied window, returns its median.
type WindowKernel<T> = fn(&mut [T]) -> T;

// ============================================================================
// Network Window Engine
// ============================================================================

/// Sliding-median engine for window sizes 2 through 8.
#[derive(Debug, Clone, Copy)]
pub struct NetworkWindow<T> {
    window_size: usize,
    kernel: WindowKernel<T>,
}

impl<T: Float> NetworkWindow<T> {
    /// Create an engine for a validated window size in `[2, 8]`.
    pub fn new(window_size: usize, policy: NanPolicy) -> Self {
        debug_assert!((2..=NETWORK_ENGINE_MAX_WINDOW).contains(&window_size));
        Self {
            window_size,
            kernel: kernel_for(window_size, policy),
        }
    }

    /// Walk `x`, writing one median per strided full window into `y`.
    /// Returns the number of values written.
    ///
    /// `y` must hold exactly one slot per emitted window.
    pub fn run(&self, x: &[T], y: &mut [T], stride: usize) -> usize {
        let w = self.window_size;
        let mut gate = StrideGate::new(stride);
        let mut scratch = [T::zero(); NETWORK_ENGINE_MAX_WINDOW];
        let mut written = 0;

        // `head` is the exclusive end of the current full window.
        for head in w..=x.len() {
            if gate.fire() {
                let window = &mut scratch[..w];
                window.copy_from_slice(&x[head - w..head]);
                y[written] = (self.kernel)(window);
                written += 1;
            }
        }

        written
    }
}

/// Select the kernel for a `(window size, policy)` pair.
fn kernel_for<T: Float>(window_size: usize, policy: NanPolicy) -> WindowKernel<T> {
    match (window_size, policy) {
        (2, NanPolicy::Exclude) => median2,
        (2, NanPolicy::Poison) => median2_poison,
        (3, NanPolicy::Exclude) => median3,
        (3, NanPolicy::Poison) => median3_poison,
        (4, NanPolicy::Exclude) => median4,
        (4, NanPolicy::Poison) => median4_poison,
        (5, NanPolicy::Exclude) => median5,
        (5, NanPolicy::Poison) => median5_poison,
        (6, NanPolicy::Exclude) => median6,
        (6, NanPolicy::Poison) => median6_poison,
        (7, NanPolicy::Exclude) => median7,
        (7, NanPolicy::Poison) => median7_poison,
        (8, NanPolicy::Exclude) => median8,
        (8, NanPolicy::Poison) => median8_poison,
        _ => unreachable!("window size is validated before kernel selection"),
    }
}

// ============================================================================
// Shared Kernel Helpers
// ============================================================================

/// Flag NaN positions in `mask`; returns the NaN count.
#[inline]
fn scan_nans<T: Float>(values: &[T], mask: &mut [bool]) -> usize {
    let mut count = 0;
    for (flag, &v) in mask.iter_mut().zip(values) {
        let nan = is_nan(v);
        *flag = nan;
        count += nan as usize;
    }
    count
}

/// Compact unmasked values into the prefix of `out`; returns the count.
#[inline]
fn compact_valid<T: Float>(values: &[T], mask: &[bool], out: &mut [T]) -> usize {
    let mut filled = 0;
    for (&v, &nan) in values.iter().zip(mask) {
        if !nan {
            out[filled] = v;
            filled += 1;
        }
    }
    filled
}

/// Median of a network-ordered prefix of `k` valid values.
#[inline]
fn reduced_median<T: Float>(valid: &[T]) -> T {
    let middle = valid.len() / 2;
    if valid.len() % 2 == 0 {
        (valid[middle - 1] + valid[middle]) / T::from(2.0).unwrap()
    } else {
        valid[middle]
    }
}

// ============================================================================
// Exclude-Policy Kernels
// ============================================================================

fn median2<T: Float>(values: &mut [T]) -> T {
    let mut mask = [false; 2];
    let nan_count = scan_nans(values, &mut mask);
    if nan_count == 0 {
        median_network_2(values);
        return (values[0] + values[1]) / T::from(2.0).unwrap();
    }
    if nan_count == 2 {
        return T::nan();
    }

    let mut valid = [T::nan(); 2];
    let k = compact_valid(values, &mask, &mut valid);
    reduced_median(&valid[..k])
}

fn median3<T: Float>(values: &mut [T]) -> T {
    let mut mask = [false; 3];
    let nan_count = scan_nans(values, &mut mask);
    if nan_count == 0 {
        median_network_3(values);
        return values[1];
    }
    if nan_count == 3 {
        return T::nan();
    }

    let mut valid = [T::nan(); 3];
    let k = compact_valid(values, &mask, &mut valid);
    median_network_select(&mut valid[..k]);
    reduced_median(&valid[..k])
}

fn median4<T: Float>(values: &mut [T]) -> T {
    let mut mask = [false; 4];
    let nan_count = scan_nans(values, &mut mask);
    if nan_count == 0 {
        median_network_4(values);
        return (values[1] + values[2]) / T::from(2.0).unwrap();
    }
    if nan_count == 4 {
        return T::nan();
    }

    let mut valid = [T::nan(); 4];
    let k = compact_valid(values, &mask, &mut valid);
    median_network_select(&mut valid[..k]);
    reduced_median(&valid[..k])
}

fn median5<T: Float>(values: &mut [T]) -> T {
    let mut mask = [false; 5];
    let nan_count = scan_nans(values, &mut mask);
    if nan_count == 0 {
        median_network_5(values);
        return values[2];
    }
    if nan_count == 5 {
        return T::nan();
    }

    let mut valid = [T::nan(); 5];
    let k = compact_valid(values, &mask, &mut valid);
    median_network_select(&mut valid[..k]);
    reduced_median(&valid[..k])
}

fn median6<T: Float>(values: &mut [T]) -> T {
    let mut mask = [false; 6];
    let nan_count = scan_nans(values, &mut mask);
    if nan_count == 0 {
        median_network_6(values);
        return (values[2] + values[3]) / T::from(2.0).unwrap();
    }
    if nan_count == 6 {
        return T::nan();
    }

    let mut valid = [T::nan(); 6];
    let k = compact_valid(values, &mask, &mut valid);
    median_network_select(&mut valid[..k]);
    reduced_median(&valid[..k])
}

fn median7<T: Float>(values: &mut [T]) -> T {
    let mut mask = [false; 7];
    let nan_count = scan_nans(values, &mut mask);
    if nan_count == 0 {
        median_network_7(values);
        return values[3];
    }
    if nan_count == 7 {
        return T::nan();
    }

    let mut valid = [T::nan(); 7];
    let k = compact_valid(values, &mask, &mut valid);
    median_network_select(&mut valid[..k]);
    reduced_median(&valid[..k])
}

fn median8<T: Float>(values: &mut [T]) -> T {
    let mut mask = [false; 8];
    let nan_count = scan_nans(values, &mut mask);
    if nan_count == 0 {
        median_network_8(values);
        return (values[3] + values[4]) / T::from(2.0).unwrap();
    }
    if nan_count == 8 {
        return T::nan();
    }

    let mut valid = [T::nan(); 8];
    let k = compact_valid(values, &mask, &mut valid);
    median_network_select(&mut valid[..k]);
    reduced_median(&valid[..k])
}

// ============================================================================
// Poison-Policy Kernels
// ============================================================================

fn median2_poison<T: Float>(values: &mut [T]) -> T {
    if values.iter().copied().any(is_nan) {
        return T::nan();
    }
    median_network_2(values);
    (values[0] + values[1]) / T::from(2.0).unwrap()
}

fn median3_poison<T: Float>(values: &mut [T]) -> T {
    if values.iter().copied().any(is_nan) {
        return T::nan();
    }
    median_network_3(values);
    values[1]
}

fn median4_poison<T: Float>(values: &mut [T]) -> T {
    if values.iter().copied().any(is_nan) {
        return T::nan();
    }
    median_network_4(values);
    (values[1] + values[2]) / T::from(2.0).unwrap()
}

fn median5_poison<T: Float>(values: &mut [T]) -> T {
    if values.iter().copied().any(is_nan) {
        return T::nan();
    }
    median_network_5(values);
    values[2]
}

fn median6_poison<T: Float>(values: &mut [T]) -> T {
    if values.iter().copied().any(is_nan) {
        return T::nan();
    }
    median_network_6(values);
    (values[2] + values[3]) / T::from(2.0).unwrap()
}

fn median7_poison<T: Float>(values: &mut [T]) -> T {
    if values.iter().copied().any(is_nan) {
        return T::nan();
    }
    median_network_7(values);
    values[3]
}

fn median8_poison<T: Float>(values: &mut [T]) -> T {
    if values.iter().copied().any(is_nan) {
        return T::nan();
    }
    median_network_8(values);
    (values[3] + values[4]) / T::from(2.0).unwrap()
}
