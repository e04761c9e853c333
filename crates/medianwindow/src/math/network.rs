//! Median networks for inputs of length 2 through 8.
//!
//! ## Purpose
//!
//! This module provides fixed compare-exchange sequences that place the
//! median element(s) of a short slice at known indices without fully sorting
//! it. They are the per-window kernels of the small-window engine.
//!
//! ## Design notes
//!
//! * **Data-oblivious**: Each network is a fixed sequence of
//!   compare-exchange operations; no branch depends on the data beyond the
//!   individual exchanges.
//! * **Guarantees**: For odd `n` the median lands at index `n / 2`; for even
//!   `n` the two middle elements land at indices `n / 2 - 1` and `n / 2`
//!   (the rest of the slice is left partially ordered).
//! * **Operation counts**: n=2 → 1, n=3 → 3, n=4 → 4, n=5 → 7, n=6 → 10,
//!   n=7 → 13, n=8 → 16.
//!
//! ## Invariants
//!
//! * Inputs must be NaN-free. `NaN > x` and `x > NaN` are both false under
//!   IEEE-754, so a NaN silently disables the exchanges it takes part in and
//!   the placement guarantee is void. Callers strip NaNs first.
//! * Infinities are ordinary operands (`+inf` largest, `-inf` smallest).

// External dependencies
use num_traits::Float;

/// Largest input length the networks cover.
pub const MAX_NETWORK_LEN: usize = 8;

/// Exchange `values[a]` and `values[b]` when they are out of order.
#[inline]
fn exchange<T: Float>(values: &mut [T], a: usize, b: usize) {
    if values[a] > values[b] {
        values.swap(a, b);
    }
}

// ============================================================================
// Networks
// ============================================================================

/// Order a pair; both positions are defined afterwards.
#[inline]
pub fn median_network_2<T: Float>(values: &mut [T]) {
    exchange(values, 0, 1);
}

/// Place the median of three at index 1.
#[inline]
pub fn median_network_3<T: Float>(values: &mut [T]) {
    exchange(values, 0, 1);
    exchange(values, 1, 2);
    exchange(values, 0, 1);
}

/// Bracket the median of four at indices 1 and 2.
#[inline]
pub fn median_network_4<T: Float>(values: &mut [T]) {
    exchange(values, 0, 1);
    exchange(values, 2, 3);
    exchange(values, 0, 2);
    exchange(values, 1, 3);
}

/// Place the median of five at index 2.
#[inline]
pub fn median_network_5<T: Float>(values: &mut [T]) {
    exchange(values, 0, 1);
    exchange(values, 2, 3);
    exchange(values, 0, 2);
    exchange(values, 1, 3);
    exchange(values, 2, 4);
    exchange(values, 1, 2);
    exchange(values, 2, 4);
}

/// Bracket the median of six at indices 2 and 3.
#[inline]
pub fn median_network_6<T: Float>(values: &mut [T]) {
    exchange(values, 0, 1);
    exchange(values, 4, 5);
    exchange(values, 0, 5);
    exchange(values, 1, 3);
    exchange(values, 2, 4);
    exchange(values, 0, 2);
    exchange(values, 1, 4);
    exchange(values, 3, 5);
    exchange(values, 1, 2);
    exchange(values, 3, 4);
}

/// Place the median of seven at index 3.
#[inline]
pub fn median_network_7<T: Float>(values: &mut [T]) {
    exchange(values, 0, 6);
    exchange(values, 1, 2);
    exchange(values, 3, 4);
    exchange(values, 0, 2);
    exchange(values, 1, 4);
    exchange(values, 3, 5);
    exchange(values, 0, 1);
    exchange(values, 2, 5);
    exchange(values, 4, 6);
    exchange(values, 1, 3);
    exchange(values, 2, 4);
    exchange(values, 3, 4);
    exchange(values, 2, 3);
}

/// Bracket the median of eight at indices 3 and 4.
#[inline]
pub fn median_network_8<T: Float>(values: &mut [T]) {
    exchange(values, 0, 2);
    exchange(values, 1, 3);
    exchange(values, 4, 6);
    exchange(values, 5, 7);
    exchange(values, 0, 4);
    exchange(values, 1, 5);
    exchange(values, 2, 6);
    exchange(values, 3, 7);
    exchange(values, 0, 1);
    exchange(values, 2, 4);
    exchange(values, 3, 5);
    exchange(values, 6, 7);
    exchange(values, 2, 3);
    exchange(values, 4, 5);
    exchange(values, 1, 4);
    exchange(values, 3, 6);
}

// ============================================================================
// Length Dispatch
// ============================================================================

/// Run the network matching `values.len()`.
///
/// Lengths 0 and 1 need no ordering and are left untouched; lengths above
/// [`MAX_NETWORK_LEN`] are a caller bug.
#[inline]
pub fn median_network_select<T: Float>(values: &mut [T]) {
    match values.len() {
        0 | 1 => {}
        2 => median_network_2(values),
        3 => median_network_3(values),
        4 => median_network_4(values),
        5 => median_network_5(values),
        6 => median_network_6(values),
        7 => median_network_7(values),
        8 => median_network_8(values),
        n => debug_assert!(n <= MAX_NETWORK_LEN, "no network for length {n}"),
    }
}
