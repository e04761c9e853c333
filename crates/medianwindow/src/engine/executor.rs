//! Execution engine for sliding-median operations.
//!
//! ## Purpose
//!
//! This module provides the executor that validates a request, selects the
//! window engine, and drives it over the input. It owns the two pieces both
//! engines share: the engine-selection threshold and the stride countdown
//! that decides which full windows emit.
//!
//! ## Design notes
//!
//! * **Selection**: Windows up to [`NETWORK_ENGINE_MAX_WINDOW`] run on the
//!   compare-exchange networks; everything larger runs on the double-heap
//!   engine. The threshold is a compile-time constant and forced selections
//!   bypass it.
//! * **Cadence**: Emission is a countdown, not a modulo: the first full
//!   window always emits and reloads the countdown with `stride - 1`, so
//!   output `k` covers the window ending at `window_size - 1 + k * stride`.
//! * **No partial writes**: All validation happens before the first element
//!   is processed.
//!
//! ## Non-goals
//!
//! * This module does not compute medians itself.
//! * This module does not allocate the output (callers size it via
//!   [`MedianExecutor::output_len`]).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::large::HeapWindow;
use crate::engine::small::NetworkWindow;
use crate::engine::validator::Validator;
use crate::primitives::classify::NanPolicy;
use crate::primitives::errors::MedianError;

/// Largest window size served by the network engine.
pub const NETWORK_ENGINE_MAX_WINDOW: usize = 8;

// ============================================================================
// Engine Selection
// ============================================================================

/// Which window engine a run should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineKind {
    /// Select by window size: networks up to
    /// [`NETWORK_ENGINE_MAX_WINDOW`], heaps beyond.
    #[default]
    Auto,

    /// Force the double-heap engine (valid for any window size).
    Heap,

    /// Force the network engine (window size must be at most
    /// [`NETWORK_ENGINE_MAX_WINDOW`]).
    Network,
}

// ============================================================================
// Stride Gate
// ============================================================================

/// Countdown deciding which full windows emit a median.
///
/// Fires on the first full window, then once every `stride` windows.
#[derive(Debug, Clone)]
pub struct StrideGate {
    stride: usize,
    countdown: usize,
}

impl StrideGate {
    /// Create a gate that fires immediately, then every `stride` windows.
    pub fn new(stride: usize) -> Self {
        Self {
            stride,
            countdown: 0,
        }
    }

    /// Advance one full-window step; true when this window emits.
    #[inline]
    pub fn fire(&mut self) -> bool {
        if self.countdown == 0 {
            self.countdown = self.stride - 1;
            return true;
        }

        self.countdown -= 1;
        false
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Unified entry point that validates, selects an engine, and runs it.
pub struct MedianExecutor;

impl MedianExecutor {
    /// Number of medians emitted for `input_len` values: one per full
    /// window reached by the stride, zero when no window fits.
    pub fn output_len(input_len: usize, window_size: usize, stride: usize) -> usize {
        if input_len < window_size {
            return 0;
        }
        (input_len - window_size) / stride + 1
    }

    /// Run a sliding median over `x` into `y`. Returns the number of
    /// medians written (always exactly `y.len()` on success).
    pub fn run<T: Float>(
        x: &[T],
        y: &mut [T],
        window_size: usize,
        stride: usize,
        policy: NanPolicy,
        engine: EngineKind,
    ) -> Result<usize, MedianError> {
        Validator::validate_window_size(window_size)?;
        Validator::validate_stride(stride)?;
        Validator::validate_input(x, window_size)?;

        let expected = Self::output_len(x.len(), window_size, stride);
        Validator::validate_output_len(y.len(), expected)?;

        let use_network = match engine {
            EngineKind::Auto => window_size <= NETWORK_ENGINE_MAX_WINDOW,
            EngineKind::Network => {
                Validator::validate_network_window(window_size)?;
                true
            }
            EngineKind::Heap => false,
        };

        let written = if use_network {
            NetworkWindow::new(window_size, policy).run(x, y, stride)
        } else {
            HeapWindow::new(window_size, policy).run(x, y, stride)
        };

        debug_assert_eq!(written, expected);
        Ok(written)
    }
}
