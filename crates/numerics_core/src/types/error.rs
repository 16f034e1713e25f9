//! Error types for structured error handling.
//!
//! This module provides:
//! - `SolverError`: Errors from the tridiagonal linear solver
//! - `InterpolationError`: Errors from spline and Newton interpolation
//! - `TransformError`: Errors from the radix-2 Fourier transforms

use thiserror::Error;

/// Linear solver errors.
///
/// # Variants
/// - `InvalidArgument`: Empty system or band lengths that do not fit together
/// - `SingularSystem`: A zero (or non-finite) pivot was met during elimination
///
/// # Examples
/// ```
/// use numerics_core::types::SolverError;
///
/// let err = SolverError::SingularSystem { row: 2, pivot: 0.0 };
/// assert!(format!("{}", err).contains("row 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Malformed system dimensions.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Zero pivot encountered during forward elimination.
    #[error("Singular system: pivot {pivot} at row {row}")]
    SingularSystem {
        /// Row index at which elimination broke down
        row: usize,
        /// Offending pivot value
        pivot: f64,
    },
}

/// Interpolation errors.
///
/// Shared by [`CubicSpline`](crate::math::interpolators::CubicSpline) and
/// [`NewtonPolynomial`](crate::math::interpolators::NewtonPolynomial).
///
/// # Variants
/// - `InvalidArgument`: Malformed sample data (`n < 1`, mismatched lengths, ...)
/// - `NotInitialized`: Operation called before `init`
/// - `DuplicateKnot`: Sampling point already present in the knot set
/// - `Solver`: Failure propagated from the derivative system solve
///
/// # Examples
/// ```
/// use numerics_core::types::InterpolationError;
///
/// let err = InterpolationError::NotInitialized;
/// assert_eq!(format!("{}", err), "Interpolant used before initialisation");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Invalid input data or parameters.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Evaluation or mutation requested on an uninitialised interpolant.
    #[error("Interpolant used before initialisation")]
    NotInitialized,

    /// The knot is already part of the sample set.
    #[error("Knot {x} is already a sampling point")]
    DuplicateKnot {
        /// The rejected knot position
        x: f64,
    },

    /// Derivative system could not be solved.
    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Fourier transform errors.
///
/// # Examples
/// ```
/// use numerics_core::types::TransformError;
///
/// let err = TransformError::InvalidLength { len: 6 };
/// assert!(format!("{}", err).contains("power of two"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransformError {
    /// Sequence length is zero or not a power of two.
    #[error("Sequence length {len} is not a non-zero power of two")]
    InvalidLength {
        /// The rejected length
        len: usize,
    },
}
