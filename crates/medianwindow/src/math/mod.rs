//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions with no state: the
//! compare-exchange networks that place medians for small inputs.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Median networks for lengths 2 through 8.
pub mod network;
