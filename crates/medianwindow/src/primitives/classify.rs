//! Value classification for sliding-median inputs.
//!
//! This module provides the predicates that route IEEE-754 special values
//! before they reach any comparison-based machinery: NaNs must never enter a
//! heap or a compare-exchange network (both `NaN < x` and `NaN > x` are
//! false, which silently breaks ordering), while infinities are ordered
//! participants and flow through unchanged.

// External dependencies
use num_traits::Float;

// ============================================================================
// Value Classes
// ============================================================================

/// Class of a single input value.
///
/// Every value belongs to exactly one class. Only [`ValueClass::Nan`] is
/// excluded from medians under [`NanPolicy::Exclude`]; infinities order
/// normally (`+inf` above every finite value, `-inf` below).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueClass {
    /// Quiet or signaling NaN (not distinguished).
    Nan,

    /// Positive infinity.
    PosInf,

    /// Negative infinity.
    NegInf,

    /// Any other value, including zeros and subnormals.
    Finite,
}

/// Classify a value into exactly one [`ValueClass`]. Never panics.
#[inline]
pub fn classify<T: Float>(v: T) -> ValueClass {
    if is_nan(v) {
        ValueClass::Nan
    } else if v.is_infinite() {
        if v > T::zero() {
            ValueClass::PosInf
        } else {
            ValueClass::NegInf
        }
    } else {
        ValueClass::Finite
    }
}

/// IEEE-754 NaN test: true iff `v != v`.
#[inline]
pub fn is_nan<T: Float>(v: T) -> bool {
    v != v
}

/// True iff `v` is `+inf` or `-inf`.
#[inline]
pub fn is_inf<T: Float>(v: T) -> bool {
    v.is_infinite()
}

// ============================================================================
// NaN Policy
// ============================================================================

/// Treatment of NaN values inside a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NanPolicy {
    /// Any NaN inside the window forces the emitted median to NaN.
    Poison,

    /// NaNs are dropped from the window; the median is taken over the
    /// remaining values (NaN when none remain).
    #[default]
    Exclude,
}
