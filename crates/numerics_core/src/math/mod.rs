//! Numerical kernels.
//!
//! - `solvers`: Tridiagonal linear solver and its configuration
//! - `interpolators`: Cubic spline and Newton polynomial interpolation
//! - `spectral`: Radix-2 inverse (and forward) Fourier transforms

pub mod interpolators;
pub mod solvers;
pub mod spectral;
