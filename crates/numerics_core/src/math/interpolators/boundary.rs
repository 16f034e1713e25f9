//! Boundary conditions of the cubic spline.

use num_traits::Float;

/// Boundary derivatives `(y'(a), y'(b))` of a cubic spline.
///
/// # Example
///
/// ```
/// use numerics_core::math::interpolators::BoundaryConditions;
///
/// let natural: BoundaryConditions<f64> = BoundaryConditions::default();
/// assert_eq!((natural.start, natural.end), (0.0, 0.0));
///
/// let clamped = BoundaryConditions::clamped(1.0, -1.0);
/// assert_eq!(clamped.end, -1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryConditions<T: Float> {
    /// First derivative at the left end of the interval
    pub start: T,
    /// First derivative at the right end of the interval
    pub end: T,
}

impl<T: Float> Default for BoundaryConditions<T> {
    fn default() -> Self {
        Self {
            start: T::zero(),
            end: T::zero(),
        }
    }
}

impl<T: Float> BoundaryConditions<T> {
    /// Prescribe both boundary derivatives.
    #[inline]
    pub fn clamped(start: T, end: T) -> Self {
        Self { start, end }
    }
}
