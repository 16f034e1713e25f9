//! Core value and error types.
//!
//! This module provides:
//! - `complex`: Immutable `Complex<T>` value type used by the spectral kernels
//! - `dual`: Dual number re-exports for automatic differentiation (when `num-dual-mode` feature is enabled)
//! - `error`: Structured error types for solver, interpolation and transform operations
//!
//! # Re-exports
//!
//! - [`Complex`] from `complex`
//! - [`SolverError`], [`InterpolationError`], [`TransformError`] from `error`

pub mod complex;
#[cfg(feature = "num-dual-mode")]
pub mod dual;
pub mod error;

pub use complex::Complex;
pub use error::{InterpolationError, SolverError, TransformError};
