//! Input validation for sliding-median configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions for window parameters and
//! input/output buffers. All checks run before the first element is
//! processed, so a failure never leaves partial output behind.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Side-effect free**: Validation never mutates its arguments.
//!
//! ## Non-goals
//!
//! * This module does not correct invalid inputs or pick defaults.
//! * This module does not compute medians.

// Internal dependencies
use crate::engine::executor::NETWORK_ENGINE_MAX_WINDOW;
use crate::primitives::errors::MedianError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sliding-median parameters and buffers.
///
/// All methods return `Result<(), MedianError>` and fail fast upon the
/// first violation.
pub struct Validator;

impl Validator {
    /// Validate the window size (at least 2).
    pub fn validate_window_size(window_size: usize) -> Result<(), MedianError> {
        if window_size < 2 {
            return Err(MedianError::InvalidWindowSize(window_size));
        }
        Ok(())
    }

    /// Validate the output stride (at least 1).
    pub fn validate_stride(stride: usize) -> Result<(), MedianError> {
        if stride == 0 {
            return Err(MedianError::InvalidStride(stride));
        }
        Ok(())
    }

    /// Validate that the network engine can serve `window_size`.
    pub fn validate_network_window(window_size: usize) -> Result<(), MedianError> {
        if window_size > NETWORK_ENGINE_MAX_WINDOW {
            return Err(MedianError::WindowTooLargeForNetwork {
                got: window_size,
                max: NETWORK_ENGINE_MAX_WINDOW,
            });
        }
        Ok(())
    }

    /// Validate the input sequence against the window size.
    pub fn validate_input<T>(x: &[T], window_size: usize) -> Result<(), MedianError> {
        if x.is_empty() {
            return Err(MedianError::EmptyInput);
        }

        if x.len() < window_size {
            return Err(MedianError::TooFewPoints {
                got: x.len(),
                min: window_size,
            });
        }

        Ok(())
    }

    /// Validate that the output buffer holds exactly one slot per emitted
    /// window.
    pub fn validate_output_len(got: usize, expected: usize) -> Result<(), MedianError> {
        if got != expected {
            return Err(MedianError::OutputLengthMismatch { got, expected });
        }
        Ok(())
    }

    /// Validate that no parameter was set multiple times on the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), MedianError> {
        if let Some(parameter) = duplicate_param {
            return Err(MedianError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
