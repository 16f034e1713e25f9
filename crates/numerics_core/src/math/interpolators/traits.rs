//! Shared capability of the 1D interpolation kernels.

use crate::types::InterpolationError;
use num_traits::Float;

/// One-dimensional interpolant built from equidistant samples.
///
/// Implemented by [`CubicSpline`](super::CubicSpline) and
/// [`NewtonPolynomial`](super::NewtonPolynomial). Both start out empty
/// (`Default`), are filled by [`init`](Interpolator::init), and are then
/// queried through [`evaluate`](Interpolator::evaluate).
///
/// # Example
///
/// ```
/// use numerics_core::math::interpolators::{CubicSpline, Interpolator, NewtonPolynomial};
///
/// fn sample<I: Interpolator<f64>>(interp: &mut I) -> f64 {
///     interp.init(0.0, 2.0, 2, &[1.0, 2.0, 5.0]).unwrap();
///     interp.evaluate(1.0).unwrap()
/// }
///
/// assert_eq!(sample(&mut CubicSpline::default()), 2.0);
/// assert_eq!(sample(&mut NewtonPolynomial::default()), 2.0);
/// ```
pub trait Interpolator<T: Float> {
    /// (Re)initialise from `n + 1` samples `ys` at `a + i*(b-a)/n`.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InvalidArgument)` - `n < 1`, `ys.len() != n + 1`,
    ///   or a non-finite / empty interval
    fn init(&mut self, a: T, b: T, n: usize, ys: &[T]) -> Result<(), InterpolationError>;

    /// Evaluate the interpolant at `z`.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::NotInitialized)` - Called before `init`
    fn evaluate(&self, z: T) -> Result<T, InterpolationError>;

    /// Range spanned by the knots, or `None` before initialisation.
    fn domain(&self) -> Option<(T, T)>;

    /// Returns true once the interpolant holds samples.
    fn is_initialized(&self) -> bool {
        self.domain().is_some()
    }
}

/// Check the arguments of an equidistant `init` call.
pub(crate) fn validate_equidistant<T: Float>(
    a: T,
    b: T,
    n: usize,
    ys: &[T],
) -> Result<(), InterpolationError> {
    if n < 1 {
        return Err(InterpolationError::InvalidArgument(
            "number of intervals n must be at least 1".to_string(),
        ));
    }
    if ys.len() != n + 1 {
        return Err(InterpolationError::InvalidArgument(format!(
            "expected n + 1 = {} sample values, got {}",
            n + 1,
            ys.len()
        )));
    }
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(InterpolationError::InvalidArgument(format!(
            "interval bounds must be finite with a < b: got [{}, {}]",
            a.to_f64().unwrap_or(f64::NAN),
            b.to_f64().unwrap_or(f64::NAN)
        )));
    }
    Ok(())
}
