//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer holds the two window engines and the orchestration around
//! them: validation, engine selection, and the strided emission loop.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Dispatcher, stride cadence, and the unified run entry point.
pub mod executor;

/// Double-heap engine for arbitrary window sizes.
pub mod large;

/// Median-network engine for window sizes 2 through 8.
pub mod small;

/// Validation utilities.
pub mod validator;

/// Sort-based reference median (test oracle).
#[cfg(feature = "dev")]
pub mod oracle;
