//! Solver configuration.

use num_traits::Float;

/// Configuration for the direct tridiagonal solver.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for the tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use numerics_core::math::solvers::SolverConfig;
///
/// // Default: only an exactly zero pivot is treated as singular
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.pivot_tolerance, 0.0);
///
/// // Custom configuration
/// let custom = SolverConfig { pivot_tolerance: 1e-12 };
/// assert!(custom.pivot_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<T: Float> {
    /// Pivot magnitude at or below which the system is declared singular.
    ///
    /// Non-finite pivots are always rejected, whatever this value is.
    pub pivot_tolerance: T,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `pivot_tolerance`: 0
    fn default() -> Self {
        Self {
            pivot_tolerance: T::zero(),
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with the given pivot tolerance.
    ///
    /// # Panics
    ///
    /// Panics if `pivot_tolerance` is negative or NaN.
    ///
    /// # Example
    ///
    /// ```
    /// use numerics_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-14);
    /// assert_eq!(config.pivot_tolerance, 1e-14);
    /// ```
    pub fn new(pivot_tolerance: T) -> Self {
        assert!(
            pivot_tolerance >= T::zero(),
            "pivot_tolerance must be non-negative"
        );
        Self { pivot_tolerance }
    }

    /// Reject pivots no larger than machine epsilon.
    pub fn strict() -> Self {
        Self {
            pivot_tolerance: T::epsilon(),
        }
    }

    /// Returns true if `pivot` is unusable for elimination.
    #[inline]
    pub(crate) fn is_singular_pivot(&self, pivot: T) -> bool {
        !pivot.is_finite() || pivot.abs() <= self.pivot_tolerance
    }
}
