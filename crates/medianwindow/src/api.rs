//! High-level API for sliding-median computation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder for configuring the window geometry, NaN policy, and
//! engine selection, and a built model that runs over input sequences.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults (stride 1,
//!   exclude policy, automatic engine selection).
//! * **Validated**: Parameters are validated once, when `build()` is
//!   called; runs only re-check the data-dependent preconditions.
//! * **Reusable**: A built [`SlidingMedian`] holds configuration only and
//!   can be run over any number of input sequences, for any `Float` type.
//!
//! ## Key concepts
//!
//! * **Configuration flow**: `MedianWindow::new()`, chained setters, then
//!   `build()`.
//! * **Run modes**: [`SlidingMedian::run`] allocates the output;
//!   [`SlidingMedian::run_into`] fills a caller-provided buffer sized to
//!   exactly one slot per emitted window.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::MedianExecutor;
use crate::engine::large::HeapWindow;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::executor::EngineKind;
pub use crate::primitives::classify::{classify, is_inf, is_nan, NanPolicy, ValueClass};
pub use crate::primitives::errors::MedianError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a sliding-median computation.
///
/// # Example
///
/// ```rust
/// use medianwindow::prelude::*;
///
/// let x = vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
///
/// let model = MedianWindow::new()
///     .window_size(3)
///     .build()?;
///
/// let y = model.run(&x)?;
/// assert_eq!(y, vec![3.0, 1.0, 4.0, 5.0, 5.0, 6.0]);
/// # Result::<(), MedianError>::Ok(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MedianWindow {
    /// Window size (required, at least 2).
    pub window_size: Option<usize>,

    /// Output stride (default 1).
    pub stride: Option<usize>,

    /// NaN treatment (default [`NanPolicy::Exclude`]).
    pub nan_policy: Option<NanPolicy>,

    /// Engine selection (default [`EngineKind::Auto`]).
    pub engine: Option<EngineKind>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl MedianWindow {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            window_size: None,
            stride: None,
            nan_policy: None,
            engine: None,
            duplicate_param: None,
        }
    }

    /// Set the window size (number of elements per median).
    pub fn window_size(mut self, window_size: usize) -> Self {
        if self.window_size.is_some() {
            self.duplicate_param = Some("window_size");
        }
        self.window_size = Some(window_size);
        self
    }

    /// Set the output stride (windows between consecutive emissions).
    pub fn stride(mut self, stride: usize) -> Self {
        if self.stride.is_some() {
            self.duplicate_param = Some("stride");
        }
        self.stride = Some(stride);
        self
    }

    /// Set the NaN policy.
    pub fn nan_policy(mut self, policy: NanPolicy) -> Self {
        if self.nan_policy.is_some() {
            self.duplicate_param = Some("nan_policy");
        }
        self.nan_policy = Some(policy);
        self
    }

    /// Set the engine selection. [`EngineKind::Network`] is only valid for
    /// window sizes up to [`NETWORK_ENGINE_MAX_WINDOW`].
    pub fn engine(mut self, engine: EngineKind) -> Self {
        if self.engine.is_some() {
            self.duplicate_param = Some("engine");
        }
        self.engine = Some(engine);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<SlidingMedian, MedianError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let window_size = self.window_size.ok_or(MedianError::MissingWindowSize)?;
        Validator::validate_window_size(window_size)?;

        let stride = self.stride.unwrap_or(1);
        Validator::validate_stride(stride)?;

        let engine = self.engine.unwrap_or_default();
        if engine == EngineKind::Network {
            Validator::validate_network_window(window_size)?;
        }

        Ok(SlidingMedian {
            window_size,
            stride,
            nan_policy: self.nan_policy.unwrap_or_default(),
            engine,
        })
    }
}

// ============================================================================
// Built Model
// ============================================================================

/// A validated sliding-median configuration, ready to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidingMedian {
    window_size: usize,
    stride: usize,
    nan_policy: NanPolicy,
    engine: EngineKind,
}

impl SlidingMedian {
    /// The configured window size.
    #[inline]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// The configured output stride.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The configured NaN policy.
    #[inline]
    pub fn nan_policy(&self) -> NanPolicy {
        self.nan_policy
    }

    /// Number of medians a run over `input_len` values emits (zero when no
    /// full window fits).
    #[inline]
    pub fn output_len(&self, input_len: usize) -> usize {
        MedianExecutor::output_len(input_len, self.window_size, self.stride)
    }

    /// Run over `x`, returning a freshly allocated output.
    pub fn run<T: Float>(&self, x: &[T]) -> Result<Vec<T>, MedianError> {
        Validator::validate_input(x, self.window_size)?;

        let mut y = vec![T::zero(); self.output_len(x.len())];
        self.run_into(x, &mut y)?;
        Ok(y)
    }

    /// Run over `x` into a preallocated `y`, which must hold exactly
    /// [`SlidingMedian::output_len`] slots. Returns the number of medians
    /// written; on error `y` is untouched.
    pub fn run_into<T: Float>(&self, x: &[T], y: &mut [T]) -> Result<usize, MedianError> {
        MedianExecutor::run(x, y, self.window_size, self.stride, self.nan_policy, self.engine)
    }

    /// Estimated heap-engine footprint in bytes for this window size, for
    /// element type `T`.
    pub fn est_memory<T: Float>(&self) -> usize {
        HeapWindow::<T>::est_memory(self.window_size)
    }
}
