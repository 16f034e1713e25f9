//! # numerics_core: Interpolation and Spectral Kernels
//!
//! numerics_core provides three numerical kernels over sampled scalar functions:
//! - Equidistant cubic spline interpolation (`math::interpolators::CubicSpline`)
//! - Newton-form polynomial interpolation with incremental extension
//!   (`math::interpolators::NewtonPolynomial`)
//! - Recursive radix-2 inverse Fourier transform (`math::spectral::ifft`)
//!
//! supported by a tridiagonal solver (`math::solvers`), an immutable complex
//! value type (`types::Complex`) and structured error types (`types::error`).
//!
//! ## Dependencies
//!
//! - num-traits: Traits for generic numerical computation
//! - num-dual: Dual number types and automatic differentiation (optional)
//! - thiserror: Error enums
//! - tracing: Structured diagnostics; no subscriber is installed here
//! - approx: Tolerance comparison for `Complex`
//!
//! ## Usage Examples
//!
//! ```rust
//! use numerics_core::math::interpolators::{CubicSpline, Interpolator, NewtonPolynomial};
//! use numerics_core::math::spectral::ifft;
//! use numerics_core::types::Complex;
//!
//! // Spline through equidistant samples, clamped outside [0, 3]
//! let spline = CubicSpline::new(0.0, 3.0, 3, &[0.0, 1.0, 0.0, 1.0]).unwrap();
//! assert_eq!(spline.evaluate(1.0).unwrap(), 1.0);
//! assert_eq!(spline.evaluate(-5.0).unwrap(), 0.0);
//!
//! // Newton polynomial for y = x² + 1
//! let mut poly = NewtonPolynomial::new(&[0.0, 1.0, 2.0], &[1.0, 2.0, 5.0]).unwrap();
//! poly.add_sampling_point(3.0, 10.0).unwrap();
//! assert_eq!(poly.evaluate(4.0).unwrap(), 17.0);
//!
//! // Unnormalised inverse transform
//! let out = ifft(&[Complex::<f64>::new(1.0, 0.0); 4]).unwrap();
//! assert!((out[0].re - 4.0).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `num-dual-mode` (default): Dual number re-exports and AD tests
//! - `serde`: Serialisation for errors, `Complex` and configuration types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
