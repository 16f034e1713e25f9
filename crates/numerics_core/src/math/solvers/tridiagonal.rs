//! Direct solver for tridiagonal linear systems (Thomas algorithm).

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Tridiagonal matrix stored as three bands.
///
/// Row `i` of the system reads
/// `lower[i-1]*x[i-1] + diag[i]*x[i] + upper[i]*x[i+1] = rhs[i]`,
/// with out-of-range terms dropped in the first and last rows.
///
/// # Example
///
/// ```
/// use numerics_core::math::solvers::TridiagonalSystem;
///
/// let system = TridiagonalSystem::<f64>::new(vec![1.0, 1.0], vec![4.0, 4.0, 4.0], vec![1.0, 1.0]).unwrap();
/// let x = system.solve(&[5.0, 6.0, 5.0]).unwrap();
///
/// for (xi, expected) in x.iter().zip([1.0, 1.0, 1.0]) {
///     assert!((xi - expected).abs() < 1e-12);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalSystem<T: Float> {
    lower: Vec<T>,
    diag: Vec<T>,
    upper: Vec<T>,
}

impl<T: Float> TridiagonalSystem<T> {
    /// Build a system from its bands.
    ///
    /// # Returns
    ///
    /// * `Err(SolverError::InvalidArgument)` - Empty diagonal, or an off-diagonal
    ///   band whose length is not `diag.len() - 1`
    pub fn new(lower: Vec<T>, diag: Vec<T>, upper: Vec<T>) -> Result<Self, SolverError> {
        validate_bands(lower.len(), diag.len(), upper.len())?;
        Ok(Self { lower, diag, upper })
    }

    /// Build an `m x m` system with constant bands.
    pub fn constant(m: usize, lower: T, diag: T, upper: T) -> Result<Self, SolverError> {
        if m == 0 {
            return Err(SolverError::InvalidArgument(
                "system dimension must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            lower: vec![lower; m - 1],
            diag: vec![diag; m],
            upper: vec![upper; m - 1],
        })
    }

    /// Number of unknowns.
    #[inline]
    pub fn dim(&self) -> usize {
        self.diag.len()
    }

    /// Sub-diagonal band (length `dim - 1`).
    #[inline]
    pub fn lower(&self) -> &[T] {
        &self.lower
    }

    /// Main diagonal (length `dim`).
    #[inline]
    pub fn diag(&self) -> &[T] {
        &self.diag
    }

    /// Super-diagonal band (length `dim - 1`).
    #[inline]
    pub fn upper(&self) -> &[T] {
        &self.upper
    }

    /// Returns true if `|diag[i]| >= |lower[i-1]| + |upper[i]|` for every row.
    pub fn is_diagonally_dominant(&self) -> bool {
        let m = self.dim();
        (0..m).all(|i| {
            let left = if i > 0 { self.lower[i - 1].abs() } else { T::zero() };
            let right = if i + 1 < m { self.upper[i].abs() } else { T::zero() };
            self.diag[i].abs() >= left + right
        })
    }

    /// Matrix-vector product `A * x`.
    ///
    /// # Returns
    ///
    /// * `Err(SolverError::InvalidArgument)` - `x.len() != dim`
    pub fn mul_vec(&self, x: &[T]) -> Result<Vec<T>, SolverError> {
        let m = self.dim();
        if x.len() != m {
            return Err(SolverError::InvalidArgument(format!(
                "vector length {} does not match system dimension {}",
                x.len(),
                m
            )));
        }

        Ok((0..m)
            .map(|i| {
                let mut acc = self.diag[i] * x[i];
                if i > 0 {
                    acc = acc + self.lower[i - 1] * x[i - 1];
                }
                if i + 1 < m {
                    acc = acc + self.upper[i] * x[i + 1];
                }
                acc
            })
            .collect())
    }

    /// Solve `A * x = rhs` with the default configuration.
    pub fn solve(&self, rhs: &[T]) -> Result<Vec<T>, SolverError> {
        self.solve_with_config(rhs, &SolverConfig::default())
    }

    /// Solve `A * x = rhs`.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Solution vector of length `dim`
    /// * `Err(SolverError::InvalidArgument)` - `rhs.len() != dim`
    /// * `Err(SolverError::SingularSystem)` - Zero pivot during elimination
    pub fn solve_with_config(
        &self,
        rhs: &[T],
        config: &SolverConfig<T>,
    ) -> Result<Vec<T>, SolverError> {
        solve_tridiagonal_with_config(&self.lower, &self.diag, &self.upper, rhs, config)
    }
}

fn validate_bands(lower: usize, diag: usize, upper: usize) -> Result<(), SolverError> {
    if diag == 0 {
        return Err(SolverError::InvalidArgument(
            "system dimension must be at least 1".to_string(),
        ));
    }
    if lower != diag - 1 || upper != diag - 1 {
        return Err(SolverError::InvalidArgument(format!(
            "off-diagonal bands must have length {}: got lower={} and upper={}",
            diag - 1,
            lower,
            upper
        )));
    }
    Ok(())
}

/// Solve a tridiagonal system with the default configuration.
///
/// See [`solve_tridiagonal_with_config`].
pub fn solve_tridiagonal<T: Float>(
    lower: &[T],
    diag: &[T],
    upper: &[T],
    rhs: &[T],
) -> Result<Vec<T>, SolverError> {
    solve_tridiagonal_with_config(lower, diag, upper, rhs, &SolverConfig::default())
}

/// Solve a tridiagonal system by forward elimination and back substitution.
///
/// The forward sweep removes the sub-diagonal row by row, producing a
/// modified super-diagonal and right-hand side; back substitution then
/// recovers `x` from the last row upwards. O(m) time, no pivoting, so the
/// matrix is expected to be diagonally dominant. Every `m >= 1` runs through
/// the same sweep; `m = 1` reduces to `rhs[0] / diag[0]`.
///
/// # Arguments
///
/// * `lower` - Sub-diagonal, length `m - 1`
/// * `diag` - Main diagonal, length `m`
/// * `upper` - Super-diagonal, length `m - 1`
/// * `rhs` - Right-hand side, length `m`
/// * `config` - Pivot tolerance
///
/// # Returns
///
/// * `Ok(x)` - Solution vector of length `m`
/// * `Err(SolverError::InvalidArgument)` - `m = 0` or mismatched band lengths
/// * `Err(SolverError::SingularSystem)` - Zero pivot during elimination
///
/// # Example
///
/// ```
/// use numerics_core::math::solvers::solve_tridiagonal;
///
/// let x = solve_tridiagonal(&[], &[2.0], &[], &[3.0]).unwrap();
/// assert_eq!(x, vec![1.5]);
/// ```
pub fn solve_tridiagonal_with_config<T: Float>(
    lower: &[T],
    diag: &[T],
    upper: &[T],
    rhs: &[T],
    config: &SolverConfig<T>,
) -> Result<Vec<T>, SolverError> {
    validate_bands(lower.len(), diag.len(), upper.len())?;
    let m = diag.len();
    if rhs.len() != m {
        return Err(SolverError::InvalidArgument(format!(
            "rhs must have length {}: got {}",
            m,
            rhs.len()
        )));
    }

    // Forward sweep: c holds the normalised super-diagonal, x the modified rhs
    let mut c: Vec<T> = Vec::with_capacity(m);
    let mut x: Vec<T> = Vec::with_capacity(m);

    for i in 0..m {
        let (pivot, carried) = if i == 0 {
            (diag[0], rhs[0])
        } else {
            (
                diag[i] - lower[i - 1] * c[i - 1],
                rhs[i] - lower[i - 1] * x[i - 1],
            )
        };

        if config.is_singular_pivot(pivot) {
            let pivot = pivot.to_f64().unwrap_or(f64::NAN);
            tracing::warn!(row = i, pivot, dim = m, "singular tridiagonal system");
            return Err(SolverError::SingularSystem { row: i, pivot });
        }

        c.push(if i + 1 < m { upper[i] / pivot } else { T::zero() });
        x.push(carried / pivot);
    }

    // Back substitution
    for i in (0..m - 1).rev() {
        x[i] = x[i] - c[i] * x[i + 1];
    }

    tracing::trace!(dim = m, "tridiagonal system solved");
    Ok(x)
}
