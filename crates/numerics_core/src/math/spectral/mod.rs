//! Spectral kernels over complex sequences.
//!
//! ## Available Transforms
//!
//! - [`ifft`]: Unnormalised radix-2 inverse transform, twiddle `e^{+2πi/n}`
//! - [`fft`]: Matching forward transform, twiddle `e^{-2πi/n}`
//! - [`ifft_normalized`]: `ifft` scaled by `1/n`, the exact inverse of [`fft`]
//!
//! All transforms require a non-zero power-of-two length and return a fresh
//! sequence of the same length.
//!
//! ## Example
//!
//! ```
//! use numerics_core::math::spectral::ifft;
//! use numerics_core::types::Complex;
//!
//! let ones = vec![Complex::<f64>::new(1.0, 0.0); 4];
//! let out = ifft(&ones).unwrap();
//!
//! assert!((out[0].re - 4.0).abs() < 1e-12);
//! assert!(out[1..].iter().all(|c| c.norm() < 1e-12));
//! ```

mod fft;

pub use fft::{fft, ifft, ifft_normalized, power};
