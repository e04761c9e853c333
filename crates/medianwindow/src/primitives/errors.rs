//! Error types for sliding-median operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! or running a sliding-median computation: parameter bounds, input shape,
//! and output capacity.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., actual vs.
//!   expected lengths).
//! * **No partial output**: Every error is raised before the first write to
//!   the output buffer.
//! * **No-std**: Implements `Display` from `core`; `std::error::Error` only
//!   under the `std` feature.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sliding-median operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MedianError {
    /// The input sequence is empty.
    EmptyInput,

    /// No window size was configured on the builder.
    MissingWindowSize,

    /// Window size must be at least 2.
    InvalidWindowSize(usize),

    /// Output stride must be at least 1.
    InvalidStride(usize),

    /// The input sequence is shorter than one full window.
    TooFewPoints {
        /// Number of input values provided.
        got: usize,
        /// Minimum required (the window size).
        min: usize,
    },

    /// The output buffer does not hold exactly one slot per emitted window.
    OutputLengthMismatch {
        /// Length of the output buffer provided.
        got: usize,
        /// Required length for the given input, window, and stride.
        expected: usize,
    },

    /// The network engine was forced for a window size it cannot serve.
    WindowTooLargeForNetwork {
        /// The window size provided.
        got: usize,
        /// Largest window the compare-exchange networks cover.
        max: usize,
    },

    /// Parameter was set multiple times on the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for MedianError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input sequence is empty"),
            Self::MissingWindowSize => {
                write!(f, "No window size configured (call window_size)")
            }
            Self::InvalidWindowSize(w) => {
                write!(f, "Invalid window size: {w} (must be at least 2)")
            }
            Self::InvalidStride(s) => {
                write!(f, "Invalid stride: {s} (must be at least 1)")
            }
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::OutputLengthMismatch { got, expected } => {
                write!(
                    f,
                    "Output length mismatch: buffer holds {got}, expected {expected}"
                )
            }
            Self::WindowTooLargeForNetwork { got, max } => {
                write!(
                    f,
                    "Window size {got} exceeds the network engine maximum of {max}"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for MedianError {}
