//! Dual number type integration for automatic differentiation.
//!
//! All kernels are generic over `T: Float`, so evaluating a spline or a
//! Newton polynomial at a dual-valued point yields the value together with
//! its derivative with respect to the evaluation point.
//!
//! ## Usage
//!
//! ```ignore
//! use numerics_core::math::interpolators::{CubicSpline, Interpolator};
//! use numerics_core::types::dual::DualNumber;
//!
//! let ys: Vec<DualNumber> = [0.0, 1.0, 0.0, 1.0].iter().map(|&y| DualNumber::from(y)).collect();
//! let spline = CubicSpline::new(DualNumber::from(0.0), DualNumber::from(3.0), 3, &ys).unwrap();
//!
//! let z = DualNumber::from(1.5).derivative();
//! let result = spline.evaluate(z).unwrap();
//! let value = result.re;     // s(1.5)
//! let slope = result.eps;    // s'(1.5)
//! ```

/// Type alias for num-dual's Dual64 (f64-based dual numbers).
///
/// - `re`: Real part (function value)
/// - `eps`: Dual part (derivative)
#[cfg(feature = "num-dual-mode")]
pub type DualNumber = num_dual::Dual64;
