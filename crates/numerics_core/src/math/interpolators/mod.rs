//! Interpolation methods for numerical computation.
//!
//! ## Available Interpolators
//!
//! - [`CubicSpline`]: Equidistant cubic Hermite spline; knot derivatives from a
//!   tridiagonal system, clamped outside the sample interval
//! - [`BoundaryConditions`]: prescribed end derivatives of a cubic spline
//! - [`NewtonPolynomial`]: Newton-form interpolating polynomial with O(n)
//!   incremental extension by further sampling points
//!
//! ## Core Trait
//!
//! Both implement the [`Interpolator`] trait:
//! - `init(a, b, n, ys)`: (Re)build from `n + 1` equidistant samples on `[a, b]`
//! - `evaluate(z) -> Result<T, InterpolationError>`: Value of the interpolant
//! - `domain() -> Option<(T, T)>`: Knot range, `None` before initialisation
//!
//! ## AD Compatibility
//!
//! All interpolators are generic over `T: num_traits::Float`, enabling use with:
//! - `f64`: Standard floating-point computation
//! - `Dual64`: Automatic differentiation via num-dual
//!
//! ## Example
//!
//! ```
//! use numerics_core::math::interpolators::{CubicSpline, Interpolator, NewtonPolynomial};
//!
//! let ys: [f64; 4] = [1.0, 2.0, 5.0, 10.0];
//!
//! let spline = CubicSpline::new(0.0, 3.0, 3, &ys).unwrap();
//! let newton = NewtonPolynomial::equidistant(0.0, 3.0, 3, &ys).unwrap();
//!
//! // Both reproduce the samples at the knots
//! assert!((spline.evaluate(2.0).unwrap() - 5.0).abs() < 1e-12);
//! assert!((newton.evaluate(2.0).unwrap() - 5.0).abs() < 1e-12);
//!
//! // Only the spline clamps outside [a, b]
//! assert_eq!(spline.evaluate(4.0).unwrap(), 10.0);
//! assert!((newton.evaluate(4.0).unwrap() - 17.0).abs() < 1e-12);
//! ```

mod boundary;
mod cubic_spline;
mod newton;
mod traits;

// Re-export public types at module level
pub use boundary::BoundaryConditions;
pub use cubic_spline::CubicSpline;
pub use newton::NewtonPolynomial;
pub use traits::Interpolator;
