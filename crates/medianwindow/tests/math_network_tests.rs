#![cfg(feature = "dev")]
//! Tests for the median networks.
//!
//! These tests verify the placement guarantees of every network against a
//! sorted copy of the same input:
//! - Odd lengths put the median at the middle index
//! - Even lengths bracket the median at the two middle indices
//! - Ties, monotone inputs, and infinities behave like any other ordering
//!
//! ## Test Organization
//!
//! 1. **Placement Sweeps** - Random and tie-heavy inputs per length
//! 2. **Fixed Patterns** - Sorted, reversed, constant, infinite inputs
//! 3. **Length Dispatch** - `median_network_select` routing

use medianwindow::internals::math::network::{
    median_network_2, median_network_3, median_network_4, median_network_5, median_network_6,
    median_network_7, median_network_8, median_network_select,
};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 0xC0FFEE;
const EPSILON: f64 = 1e-9;

const NETWORKS: [(usize, fn(&mut [f64])); 7] = [
    (2, median_network_2),
    (3, median_network_3),
    (4, median_network_4),
    (5, median_network_5),
    (6, median_network_6),
    (7, median_network_7),
    (8, median_network_8),
];

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    sorted
}

/// Assert the network's placement guarantee for one input.
///
/// Odd lengths must put the exact middle order statistic at `n / 2`; even
/// lengths must make the two middle slots average to the true median.
fn assert_places_median(network: fn(&mut [f64]), values: &[f64]) {
    let sorted = sorted_copy(values);
    let mut network_ordered = values.to_vec();
    network(&mut network_ordered);

    let n = values.len();
    let middle = n / 2;
    if n % 2 == 1 {
        assert_eq!(
            network_ordered[middle], sorted[middle],
            "median of {values:?} should be at index {middle}"
        );
    } else {
        let got = (network_ordered[middle - 1] + network_ordered[middle]) / 2.0;
        let want = (sorted[middle - 1] + sorted[middle]) / 2.0;
        let matches = if got.is_nan() || want.is_nan() {
            got.is_nan() && want.is_nan()
        } else if got.is_infinite() || want.is_infinite() {
            got == want
        } else {
            (got - want).abs() < EPSILON
        };
        assert!(matches, "median of {values:?}: got {got}, expected {want}");
    }
}

// ============================================================================
// Placement Sweep Tests
// ============================================================================

/// Test each network on random real inputs.
#[test]
fn test_networks_on_random_inputs() {
    let mut rng = StdRng::seed_from_u64(SEED);

    for (n, network) in NETWORKS {
        for _ in 0..2000 {
            let values: Vec<f64> = (0..n).map(|_| rng.gen_range(-100.0..100.0)).collect();
            assert_places_median(network, &values);
        }
    }
}

/// Test each network on tie-heavy inputs.
///
/// Small digit alphabets force many equal comparisons.
#[test]
fn test_networks_on_ties() {
    let mut rng = StdRng::seed_from_u64(SEED);

    for (n, network) in NETWORKS {
        for _ in 0..2000 {
            let values: Vec<f64> = (0..n).map(|_| f64::from(rng.gen_range(0..3))).collect();
            assert_places_median(network, &values);
        }
    }
}

/// Test each network on inputs containing infinities.
#[test]
fn test_networks_with_infinities() {
    let mut rng = StdRng::seed_from_u64(SEED);

    for (n, network) in NETWORKS {
        for _ in 0..2000 {
            let values: Vec<f64> = (0..n)
                .map(|_| match rng.gen_range(0..4) {
                    0 => f64::INFINITY,
                    1 => f64::NEG_INFINITY,
                    _ => rng.gen_range(-100.0..100.0),
                })
                .collect();
            assert_places_median(network, &values);
        }
    }
}

// ============================================================================
// Fixed Pattern Tests
// ============================================================================

/// Test each network on already-sorted and reversed inputs.
#[test]
fn test_networks_on_monotone_inputs() {
    for (n, network) in NETWORKS {
        let ascending: Vec<f64> = (0..n).map(|i| i as f64).collect();
        assert_places_median(network, &ascending);

        let descending: Vec<f64> = (0..n).rev().map(|i| i as f64).collect();
        assert_places_median(network, &descending);
    }
}

/// Test each network on a constant input.
#[test]
fn test_networks_on_constant_input() {
    for (n, network) in NETWORKS {
        let values = vec![4.25; n];
        assert_places_median(network, &values);
    }
}

/// Test the pair network leaves both positions ordered.
#[test]
fn test_pair_network_orders_both_positions() {
    let mut values = [9.0, 2.0];
    median_network_2(&mut values);
    assert_eq!(values, [2.0, 9.0]);

    let mut values = [2.0, 9.0];
    median_network_2(&mut values);
    assert_eq!(values, [2.0, 9.0]);
}

// ============================================================================
// Length Dispatch Tests
// ============================================================================

/// Test that `median_network_select` routes by slice length.
#[test]
fn test_select_matches_direct_networks() {
    let mut rng = StdRng::seed_from_u64(SEED);

    for (n, network) in NETWORKS {
        let values: Vec<f64> = (0..n).map(|_| rng.gen_range(-100.0..100.0)).collect();

        let mut via_select = values.clone();
        median_network_select(&mut via_select);

        let mut direct = values.clone();
        network(&mut direct);

        assert_eq!(via_select, direct, "select should match the n={n} network");
    }
}

/// Test that trivial lengths are left untouched.
#[test]
fn test_select_trivial_lengths() {
    let mut empty: [f64; 0] = [];
    median_network_select(&mut empty);

    let mut single = [42.5];
    median_network_select(&mut single);
    assert_eq!(single, [42.5]);
}
