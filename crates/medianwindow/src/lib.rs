//! # medianwindow — Streaming Sliding-Window Medians for Rust
//!
//! Computes the running median of a real-valued sequence under a sliding
//! window of fixed size, with an independent output stride, tolerating
//! IEEE-754 special values under two documented policies.
//!
//! ## How it works
//!
//! Two engines share one set of semantics:
//!
//! * For windows of 2 to 8 elements, each emitted window runs through a
//!   fixed **median network**, a branch-light compare-exchange sequence
//!   that places the median at a known index without fully sorting.
//! * For larger windows, a **double heap** keeps the lower half in a
//!   max-heap and the upper half in a min-heap, linked to a FIFO ring of
//!   window nodes so each new value replaces the oldest one in place, in
//!   O(log w) with no steady-state allocation.
//!
//! NaNs either poison their window ([`prelude::Poison`]) or are excluded
//! from it ([`prelude::Exclude`], the default). Infinities always order
//! normally, and even-count medians use IEEE-754 arithmetic, so a window
//! whose middle values are `-inf` and `+inf` has median NaN.
//!
//! ## Quick Start
//!
//! ```rust
//! use medianwindow::prelude::*;
//!
//! let x = vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
//!
//! let model = MedianWindow::new()
//!     .window_size(3)     // three elements per median
//!     .build()?;
//!
//! let y = model.run(&x)?;
//! assert_eq!(y, vec![3.0, 1.0, 4.0, 5.0, 5.0, 6.0]);
//! # Result::<(), MedianError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use medianwindow::prelude::*;
//!
//! let x = vec![1.0, f64::NAN, 3.0, 4.0, 5.0, 6.0];
//!
//! let model = MedianWindow::new()
//!     .window_size(2)     // two elements per median
//!     .stride(1)          // emit every window
//!     .nan_policy(Poison) // any NaN poisons its window
//!     .engine(Auto)       // pick the engine by window size
//!     .build()?;
//!
//! let y = model.run(&x)?;
//! assert!(y[0].is_nan() && y[1].is_nan());
//! assert_eq!(&y[2..], &[3.5, 4.5, 5.5]);
//! # Result::<(), MedianError>::Ok(())
//! ```
//!
//! ### Preallocated output
//!
//! ```rust
//! use medianwindow::prelude::*;
//!
//! let x = vec![7.0; 20];
//! let model = MedianWindow::new().window_size(10).stride(3).build()?;
//!
//! let mut y = vec![0.0; model.output_len(x.len())];
//! let written = model.run_into(&x, &mut y)?;
//! assert_eq!(written, 4);
//! assert_eq!(y, vec![7.0; 4]);
//! # Result::<(), MedianError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Configuration and runs return `Result<_, MedianError>`; the `?` operator
//! is idiomatic. Numerical edge cases (all-NaN windows, infinite
//! midpoints) are not errors; they emit NaN as documented.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! medianwindow = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - value classes, errors, nodes, heaps.
mod primitives;

// Layer 2: Math - median networks.
mod math;

// Layer 3: Engine - window engines, validation, execution.
mod engine;

// High-level fluent API for sliding medians.
mod api;

// Standard sliding-median prelude.
pub mod prelude {
    pub use crate::api::{
        classify, is_inf, is_nan, EngineKind,
        EngineKind::{Auto, Heap, Network},
        MedianError, MedianWindow, NanPolicy,
        NanPolicy::{Exclude, Poison},
        SlidingMedian, ValueClass,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
