//! Tests for the small-window (median network) engine.
//!
//! These tests drive window sizes 2 through 8 through the public API with
//! literal expected outputs, covering:
//! - Plain finite sequences across every network size
//! - NaN handling under both policies, including reduced windows
//! - Infinities as ordered participants and IEEE-754 midpoints
//! - Strided emission on small windows
//!
//! ## Test Organization
//!
//! 1. **Finite Sequences** - Constant and ramp inputs per window size
//! 2. **NaN Policies** - Poison vs. exclude, reduced and empty windows
//! 3. **Infinities** - Ordering and infinite midpoints
//! 4. **Strides** - Emission cadence on small windows

use medianwindow::prelude::*;

const EPSILON: f64 = 1e-9;

/// Output equality: both NaN, identical infinities, or within tolerance.
fn values_match(a: f64, b: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() < EPSILON
}

fn assert_outputs_match(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "Output length should match");
    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            values_match(a, e),
            "Mismatch at index {i}: got {a}, expected {e}"
        );
    }
}

fn run(x: &[f64], window_size: usize, stride: usize, policy: NanPolicy) -> Vec<f64> {
    MedianWindow::new()
        .window_size(window_size)
        .stride(stride)
        .nan_policy(policy)
        .build()
        .unwrap()
        .run(x)
        .unwrap()
}

// ============================================================================
// Finite Sequence Tests
// ============================================================================

/// Test a constant sequence under both policies.
///
/// Verifies that a window of identical values emits that value everywhere.
#[test]
fn test_constant_sequence() {
    let x = [7.0; 10];
    for policy in [Exclude, Poison] {
        let y = run(&x, 5, 1, policy);
        assert_outputs_match(&y, &[7.0; 6]);
    }
}

/// Test an odd-width window over a ramp.
///
/// Verifies the middle element is selected.
#[test]
fn test_ramp_odd_window() {
    let x: Vec<f64> = (1..=10).map(f64::from).collect();
    let y = run(&x, 3, 1, Exclude);
    assert_outputs_match(&y, &[2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
}

/// Test an even-width window over a ramp.
///
/// Verifies the mean of the two middle elements is emitted.
#[test]
fn test_ramp_even_window() {
    let x: Vec<f64> = (1..=10).map(f64::from).collect();
    let y = run(&x, 4, 1, Exclude);
    assert_outputs_match(&y, &[2.5, 3.5, 4.5, 5.5, 6.5, 7.5, 8.5]);
}

/// Test the widest network window over a ramp.
#[test]
fn test_ramp_window_eight() {
    let x: Vec<f64> = (1..=10).map(f64::from).collect();
    let y = run(&x, 8, 1, Exclude);
    assert_outputs_match(&y, &[4.5, 5.5, 6.5]);
}

/// Test every network size on an unsorted window equal to the input.
///
/// Verifies the single-window case for each kernel.
#[test]
fn test_single_window_all_sizes() {
    let x = [5.0, 1.0, 9.0, 3.0, 7.0, 2.0, 8.0, 4.0];
    let expected = [3.0, 5.0, 4.0, 5.0, 4.0, 5.0, 4.5];

    for (window_size, &want) in (2..=8).zip(&expected) {
        let y = run(&x[..window_size], window_size, 1, Exclude);
        assert_outputs_match(&y, &[want]);
    }
}

/// Test that duplicated values resolve like any other ordering.
#[test]
fn test_ties() {
    let x = [2.0, 2.0, 1.0, 2.0, 1.0, 1.0, 2.0];
    let y = run(&x, 5, 1, Exclude);
    // Windows: {2,2,1,2,1} -> 2, {2,1,2,1,1} -> 1, {1,2,1,1,2} -> 1
    assert_outputs_match(&y, &[2.0, 1.0, 1.0]);
}

// ============================================================================
// NaN Policy Tests
// ============================================================================

/// Test an all-NaN input under both policies.
#[test]
fn test_all_nan() {
    let x = [f64::NAN; 10];
    for policy in [Exclude, Poison] {
        let y = run(&x, 5, 1, policy);
        assert_outputs_match(&y, &[f64::NAN; 6]);
    }
}

/// Test a single finite value among NaNs.
///
/// Verifies exclude recovers the value wherever it is in the window and
/// poison rejects every window.
#[test]
fn test_single_finite_among_nans() {
    let nan = f64::NAN;
    let x = [nan, nan, nan, nan, nan, 42.5, nan, nan, nan, nan];

    let y = run(&x, 5, 1, Exclude);
    assert_outputs_match(&y, &[nan, 42.5, 42.5, 42.5, 42.5, 42.5]);

    let y = run(&x, 5, 1, Poison);
    assert_outputs_match(&y, &[nan; 6]);
}

/// Test that poison rejects exactly the windows containing the NaN.
#[test]
fn test_poison_window_extent() {
    let x = [1.0, 2.0, f64::NAN, 4.0, 5.0, 6.0];
    let y = run(&x, 3, 1, Poison);
    assert_outputs_match(&y, &[f64::NAN, f64::NAN, f64::NAN, 5.0]);
}

/// Test the exclude policy across reduced window sizes.
///
/// Verifies the shorter-network path for the same input as the poison test.
#[test]
fn test_exclude_reduced_windows() {
    let x = [1.0, 2.0, f64::NAN, 4.0, 5.0, 6.0];
    let y = run(&x, 3, 1, Exclude);
    // Valid sets: {1,2} -> 1.5, {2,4} -> 3, {4,5} -> 4.5, {4,5,6} -> 5
    assert_outputs_match(&y, &[1.5, 3.0, 4.5, 5.0]);
}

/// Test an even reduced count inside an odd window.
#[test]
fn test_exclude_even_reduction() {
    let x = [1.0, 2.0, 3.0, 4.0, f64::NAN];
    let y = run(&x, 5, 1, Exclude);
    assert_outputs_match(&y, &[2.5]);
}

/// Test a single survivor in a wider window.
#[test]
fn test_exclude_single_survivor() {
    let x = [f64::NAN, 42.5, f64::NAN];
    assert_outputs_match(&run(&x, 3, 1, Exclude), &[42.5]);
    assert_outputs_match(&run(&x, 3, 1, Poison), &[f64::NAN]);
}

// ============================================================================
// Infinity Tests
// ============================================================================

/// Test infinities as ordered participants under exclude.
///
/// Verifies the reduced-window medians around a mixed special-value burst.
#[test]
fn test_infinities_participate() {
    let nan = f64::NAN;
    let inf = f64::INFINITY;
    let x = [nan, nan, nan, inf, 42.5, 50.0, -inf, nan, nan, nan];

    let y = run(&x, 5, 1, Exclude);
    assert_outputs_match(&y, &[inf, 50.0, 46.25, 46.25, 42.5, -inf]);

    let y = run(&x, 5, 1, Poison);
    assert_outputs_match(&y, &[nan; 6]);
}

/// Test the infinite midpoint rule.
///
/// Verifies `(+inf + -inf) / 2` is NaN and `(+inf + finite) / 2` is `+inf`.
#[test]
fn test_infinite_midpoints() {
    let inf = f64::INFINITY;

    let y = run(&[inf, -inf], 2, 1, Exclude);
    assert_outputs_match(&y, &[f64::NAN]);

    let y = run(&[inf, 42.5], 2, 1, Exclude);
    assert_outputs_match(&y, &[inf]);
}

/// Test an all-negative-infinity window.
#[test]
fn test_all_negative_infinity() {
    let x = [f64::NEG_INFINITY; 3];
    for policy in [Exclude, Poison] {
        let y = run(&x, 3, 1, policy);
        assert_outputs_match(&y, &[f64::NEG_INFINITY]);
    }
}

// ============================================================================
// Stride Tests
// ============================================================================

/// Test strided emission on a small window.
///
/// Verifies the first full window emits and subsequent emissions hop by the
/// stride.
#[test]
fn test_stride_on_small_window() {
    let x: Vec<f64> = (1..=10).map(f64::from).collect();
    let y = run(&x, 4, 2, Exclude);
    assert_outputs_match(&y, &[2.5, 4.5, 6.5, 8.5]);
}

/// Test a stride larger than the number of extra windows.
#[test]
fn test_stride_single_emission() {
    let x: Vec<f64> = (1..=7).map(f64::from).collect();
    let y = run(&x, 5, 10, Exclude);
    assert_outputs_match(&y, &[3.0]);
}
