//! Cubic spline interpolation on equidistant knots.

use super::traits::validate_equidistant;
use super::Interpolator;
use super::BoundaryConditions;
use crate::math::solvers::{SolverConfig, TridiagonalSystem};
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise cubic Hermite spline with first-derivative continuity.
///
/// Knots are `x[i] = a + i*h` with `h = (b-a)/n`. The derivatives
/// `yprime[0]` and `yprime[n]` are boundary conditions (zero unless set via
/// [`set_boundary_conditions`](CubicSpline::set_boundary_conditions)); the
/// interior derivatives solve
///
/// ```text
/// yprime[i-1] + 4*yprime[i] + yprime[i+1] = (3/h) * (y[i+1] - y[i-1]),  i = 1..n-1
/// ```
///
/// which makes the second derivative continuous at interior knots as well.
/// Outside `[a, b]` the spline is clamped to the boundary values.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `Dual64`)
///
/// # Example
///
/// ```
/// use numerics_core::math::interpolators::{CubicSpline, Interpolator};
///
/// let spline = CubicSpline::new(0.0, 3.0, 3, &[0.0, 1.0, 0.0, 1.0]).unwrap();
///
/// assert_eq!(spline.evaluate(1.0).unwrap(), 1.0);
/// assert_eq!(spline.evaluate(2.0).unwrap(), 0.0);
/// assert_eq!(spline.evaluate(-5.0).unwrap(), 0.0); // clamped
/// assert_eq!(spline.evaluate(10.0).unwrap(), 1.0); // clamped
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline<T: Float> {
    /// Left interval bound x[0]
    a: T,
    /// Right interval bound x[n]
    b: T,
    /// Number of intervals
    n: usize,
    /// Knot spacing
    h: T,
    /// Sample values at the knots
    y: Vec<T>,
    /// First derivatives at the knots
    yprime: Vec<T>,
    /// Settings for the derivative system solve
    config: SolverConfig<T>,
}

impl<T: Float> Default for CubicSpline<T> {
    /// An empty spline; every query fails until [`Interpolator::init`] is called.
    fn default() -> Self {
        Self::with_solver_config(SolverConfig::default())
    }
}

impl<T: Float> CubicSpline<T> {
    /// Construct a spline through `n + 1` equidistant samples on `[a, b]`
    /// with zero boundary derivatives.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InvalidArgument)` - `n < 1`, `ys.len() != n + 1`
    ///   or an empty interval
    ///
    /// # Example
    ///
    /// ```
    /// use numerics_core::math::interpolators::CubicSpline;
    ///
    /// assert!(CubicSpline::new(0.0, 1.0, 1, &[0.0, 1.0]).is_ok());
    /// assert!(CubicSpline::new(0.0, 1.0, 0, &[0.0]).is_err());
    /// assert!(CubicSpline::new(0.0, 1.0, 2, &[0.0, 1.0]).is_err());
    /// ```
    pub fn new(a: T, b: T, n: usize, ys: &[T]) -> Result<Self, InterpolationError> {
        let mut spline = Self::default();
        spline.init(a, b, n, ys)?;
        Ok(spline)
    }

    /// Construct a spline with prescribed boundary derivatives.
    pub fn with_boundary_conditions(
        a: T,
        b: T,
        n: usize,
        ys: &[T],
        boundary: BoundaryConditions<T>,
    ) -> Result<Self, InterpolationError> {
        let mut spline = Self::default();
        spline.init(a, b, n, ys)?;
        spline.set_boundary_conditions(boundary.start, boundary.end)?;
        Ok(spline)
    }

    /// An empty spline that solves its derivative system with `config`.
    pub fn with_solver_config(config: SolverConfig<T>) -> Self {
        Self {
            a: T::zero(),
            b: T::zero(),
            n: 0,
            h: T::zero(),
            y: Vec::new(),
            yprime: Vec::new(),
            config,
        }
    }

    /// Overwrite the boundary derivatives `yprime[0]` and `yprime[n]` and
    /// recompute the interior derivatives.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::NotInitialized)` - Called before `init`
    /// * `Err(InterpolationError::Solver)` - Derivative system is singular
    pub fn set_boundary_conditions(&mut self, d0: T, dn: T) -> Result<(), InterpolationError> {
        if self.y.is_empty() {
            return Err(InterpolationError::NotInitialized);
        }
        self.yprime[0] = d0;
        self.yprime[self.n] = dn;
        self.compute_derivatives()
    }

    /// Current boundary derivatives.
    pub fn boundary_conditions(&self) -> Option<BoundaryConditions<T>> {
        if self.yprime.is_empty() {
            return None;
        }
        Some(BoundaryConditions::clamped(self.yprime[0], self.yprime[self.n]))
    }

    /// Solve the tridiagonal system for `yprime[1..n-1]`.
    ///
    /// The boundary derivatives already sit in `yprime[0]` and `yprime[n]`
    /// and are moved to the right-hand side. Nothing to do for `n = 1`.
    fn compute_derivatives(&mut self) -> Result<(), InterpolationError> {
        let n = self.n;
        if n < 2 {
            return Ok(());
        }

        let m = n - 1;
        let one = T::one();
        let four = T::from(4.0).unwrap();
        let three_over_h = T::from(3.0).unwrap() / self.h;

        let mut rhs: Vec<T> = (1..n)
            .map(|i| three_over_h * (self.y[i + 1] - self.y[i - 1]))
            .collect();
        rhs[0] = rhs[0] - self.yprime[0];
        rhs[m - 1] = rhs[m - 1] - self.yprime[n];

        let system = TridiagonalSystem::constant(m, one, four, one)?;
        let interior = system.solve_with_config(&rhs, &self.config)?;
        self.yprime[1..n].copy_from_slice(&interior);

        tracing::debug!(n, dim = m, "spline derivatives recomputed");
        Ok(())
    }

    /// Segment index `i` with `x[i] <= z < x[i+1]` and local parameter `t`.
    ///
    /// The index is clamped to `[0, n-1]`, so `z = b` maps to `(n-1, 1)`.
    #[inline]
    fn locate(&self, z: T) -> (usize, T) {
        let s = (z - self.a) / self.h;
        let i = s.floor().to_usize().unwrap_or(0).min(self.n - 1);
        let xi = self.a + T::from(i).unwrap() * self.h;
        (i, (z - xi) / self.h)
    }

    /// Value of segment `i` at local parameter `t`.
    fn segment_value(&self, i: usize, t: T) -> T {
        let one = T::one();
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();

        let t2 = t * t;
        let t3 = t2 * t;

        let h0 = two * t3 - three * t2 + one;
        let h1 = three * t2 - two * t3;
        let h2 = t3 - two * t2 + t;
        let h3 = t3 - t2;

        self.y[i] * h0
            + self.y[i + 1] * h1
            + self.h * self.yprime[i] * h2
            + self.h * self.yprime[i + 1] * h3
    }

    /// First derivative of segment `i` at local parameter `t`.
    fn segment_slope(&self, i: usize, t: T) -> T {
        let one = T::one();
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();
        let four = T::from(4.0).unwrap();
        let six = T::from(6.0).unwrap();

        let t2 = t * t;

        let dh0 = six * t2 - six * t;
        let dh1 = six * t - six * t2;
        let dh2 = three * t2 - four * t + one;
        let dh3 = three * t2 - two * t;

        (self.y[i] * dh0 + self.y[i + 1] * dh1) / self.h
            + self.yprime[i] * dh2
            + self.yprime[i + 1] * dh3
    }

    /// First derivative of the spline at `z`.
    ///
    /// Zero outside `[a, b]`, where the spline is constant.
    ///
    /// # Example
    ///
    /// ```
    /// use numerics_core::math::interpolators::CubicSpline;
    ///
    /// let mut spline = CubicSpline::<f64>::new(0.0, 4.0, 4, &[0.0, 1.0, 4.0, 9.0, 16.0]).unwrap();
    /// spline.set_boundary_conditions(0.0, 8.0).unwrap();
    ///
    /// // y = x^2 is reproduced exactly, so s'(x) = 2x
    /// assert!((spline.derivative_at(1.5).unwrap() - 3.0).abs() < 1e-12);
    /// ```
    pub fn derivative_at(&self, z: T) -> Result<T, InterpolationError> {
        if self.y.is_empty() {
            return Err(InterpolationError::NotInitialized);
        }
        if z < self.a || z > self.b {
            return Ok(T::zero());
        }
        let (i, t) = self.locate(z);
        Ok(self.segment_slope(i, t))
    }

    /// Returns the knot derivatives `yprime[0..=n]`.
    #[inline]
    pub fn derivatives(&self) -> &[T] {
        &self.yprime
    }

    /// Returns the sample values `y[0..=n]`.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.y
    }

    /// Knot positions `a + i*h` for `i = 0..=n`.
    pub fn knots(&self) -> Vec<T> {
        if self.y.is_empty() {
            return Vec::new();
        }
        (0..self.n)
            .map(|i| self.a + T::from(i).unwrap() * self.h)
            .chain(std::iter::once(self.b))
            .collect()
    }

    /// Number of intervals `n` (zero before initialisation).
    #[inline]
    pub fn intervals(&self) -> usize {
        self.n
    }

    /// Knot spacing `h`.
    #[inline]
    pub fn step(&self) -> T {
        self.h
    }
}

impl<T: Float> Interpolator<T> for CubicSpline<T> {
    /// Store the samples, reset both boundary derivatives to zero and solve
    /// for the interior derivatives.
    fn init(&mut self, a: T, b: T, n: usize, ys: &[T]) -> Result<(), InterpolationError> {
        validate_equidistant(a, b, n, ys)?;

        self.a = a;
        self.b = b;
        self.n = n;
        self.h = (b - a) / T::from(n).unwrap();
        self.y = ys.to_vec();
        self.yprime = vec![T::zero(); n + 1];

        tracing::debug!(n, h = self.h.to_f64().unwrap_or(f64::NAN), "cubic spline initialised");

        if let Err(err) = self.compute_derivatives() {
            *self = Self::with_solver_config(self.config);
            return Err(err);
        }
        Ok(())
    }

    /// Evaluate the cubic Hermite piece containing `z`.
    ///
    /// # Formula
    ///
    /// ```text
    /// t  = (z - x[i]) / h
    /// s  = y[i]*H0(t) + y[i+1]*H1(t) + h*yprime[i]*H2(t) + h*yprime[i+1]*H3(t)
    /// H0 = 2t³ - 3t² + 1    H1 = -2t³ + 3t²
    /// H2 = t³ - 2t² + t     H3 = t³ - t²
    /// ```
    ///
    /// Returns `y[0]` for `z <= a` and `y[n]` for `z >= b`.
    fn evaluate(&self, z: T) -> Result<T, InterpolationError> {
        if self.y.is_empty() {
            return Err(InterpolationError::NotInitialized);
        }
        if z <= self.a {
            return Ok(self.y[0]);
        }
        if z >= self.b {
            return Ok(self.y[self.n]);
        }

        let (i, t) = self.locate(z);
        Ok(self.segment_value(i, t))
    }

    #[inline]
    fn domain(&self) -> Option<(T, T)> {
        if self.y.is_empty() {
            None
        } else {
            Some((self.a, self.b))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SolverError;
    use approx::assert_relative_eq;

    fn sampled<F: Fn(f64) -> f64>(a: f64, b: f64, n: usize, f: F) -> Vec<f64> {
        let h = (b - a) / n as f64;
        (0..=n).map(|i| f(a + i as f64 * h)).collect()
    }

    /// Second derivative of segment `i` at local parameter `t`.
    fn segment_curvature(spline: &CubicSpline<f64>, i: usize, t: f64) -> f64 {
        let h = spline.step();
        let y = spline.values();
        let d = spline.derivatives();
        (y[i] * (12.0 * t - 6.0) + y[i + 1] * (6.0 - 12.0 * t)) / (h * h)
            + (d[i] * (6.0 * t - 4.0) + d[i + 1] * (6.0 * t - 2.0)) / h
    }

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_new_single_interval() {
        let spline = CubicSpline::new(0.0, 2.0, 1, &[1.0, 3.0]).unwrap();
        assert_eq!(spline.intervals(), 1);
        assert_eq!(spline.step(), 2.0);
        assert_eq!(spline.derivatives(), &[0.0, 0.0]);
    }

    #[test]
    fn test_new_zero_intervals_is_invalid() {
        let result = CubicSpline::new(0.0, 1.0, 0, &[1.0]);
        assert!(matches!(result, Err(InterpolationError::InvalidArgument(_))));
    }

    #[test]
    fn test_new_length_mismatch_is_invalid() {
        let result = CubicSpline::new(0.0, 1.0, 3, &[1.0, 2.0]);
        assert!(matches!(result, Err(InterpolationError::InvalidArgument(_))));
    }

    #[test]
    fn test_default_is_uninitialised() {
        let spline: CubicSpline<f64> = CubicSpline::default();
        assert!(!spline.is_initialized());
        assert_eq!(spline.domain(), None);
        assert_eq!(spline.evaluate(0.5), Err(InterpolationError::NotInitialized));
        assert_eq!(spline.derivative_at(0.5), Err(InterpolationError::NotInitialized));
        assert!(spline.knots().is_empty());
        assert!(spline.boundary_conditions().is_none());
    }

    #[test]
    fn test_set_boundary_conditions_before_init_fails() {
        let mut spline: CubicSpline<f64> = CubicSpline::default();
        assert_eq!(
            spline.set_boundary_conditions(1.0, 1.0),
            Err(InterpolationError::NotInitialized)
        );
    }

    #[test]
    fn test_knots_are_equidistant() {
        let spline = CubicSpline::new(1.0, 2.0, 4, &[0.0; 5]).unwrap();
        assert_eq!(spline.knots(), vec![1.0, 1.25, 1.5, 1.75, 2.0]);
        assert_eq!(spline.domain(), Some((1.0, 2.0)));
    }

    #[test]
    fn test_init_copies_samples() {
        let mut ys = vec![0.0, 1.0, 0.0];
        let spline = CubicSpline::new(0.0, 2.0, 2, &ys).unwrap();
        ys[1] = 100.0;
        assert_eq!(spline.values(), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_reinit_resets_boundary_conditions() {
        let mut spline = CubicSpline::new(0.0, 2.0, 2, &[0.0, 1.0, 0.0]).unwrap();
        spline.set_boundary_conditions(5.0, -5.0).unwrap();
        spline.init(0.0, 2.0, 2, &[0.0, 1.0, 0.0]).unwrap();
        assert_eq!(spline.boundary_conditions(), Some(BoundaryConditions::default()));
    }

    #[test]
    fn test_singular_config_leaves_spline_empty() {
        // A pivot tolerance above every pivot makes the derivative solve fail
        let mut spline = CubicSpline::with_solver_config(SolverConfig::new(10.0));
        let result = spline.init(0.0, 3.0, 3, &[0.0, 1.0, 0.0, 1.0]);
        assert!(matches!(
            result,
            Err(InterpolationError::Solver(SolverError::SingularSystem { row: 0, .. }))
        ));
        assert!(!spline.is_initialized());
    }

    // ========================================
    // Derivative System Tests
    // ========================================

    #[test]
    fn test_two_intervals_single_interior_derivative() {
        // yprime[1] = ((3/h)(y2 - y0) - yprime[0] - yprime[2]) / 4
        let mut spline = CubicSpline::new(0.0, 2.0, 2, &[0.0, 5.0, 2.0]).unwrap();
        assert_relative_eq!(spline.derivatives()[1], 1.5, epsilon = 1e-14);

        spline.set_boundary_conditions(1.0, 3.0).unwrap();
        assert_relative_eq!(spline.derivatives()[1], 0.5, epsilon = 1e-14);
    }

    #[test]
    fn test_three_intervals_two_interior_derivatives() {
        // System [4 1; 1 4] d = [3(y2-y0) - d0, 3(y3-y1) - d3] with h = 1
        let mut spline = CubicSpline::new(0.0, 3.0, 3, &[0.0, 1.0, 4.0, 9.0]).unwrap();
        spline.set_boundary_conditions(1.0, 2.0).unwrap();

        let r0 = 3.0 * 4.0 - 1.0;
        let r1 = 3.0 * 8.0 - 2.0;
        let d1 = (4.0 * r0 - r1) / 15.0;
        let d2 = (4.0 * r1 - r0) / 15.0;

        let d = spline.derivatives();
        assert_relative_eq!(d[0], 1.0);
        assert_relative_eq!(d[1], d1, epsilon = 1e-12);
        assert_relative_eq!(d[2], d2, epsilon = 1e-12);
        assert_relative_eq!(d[3], 2.0);
    }

    #[test]
    fn test_exact_boundaries_reproduce_quadratic() {
        let ys = sampled(0.0, 4.0, 4, |x| x * x);
        let boundary = BoundaryConditions::clamped(0.0, 8.0);
        let spline = CubicSpline::with_boundary_conditions(0.0, 4.0, 4, &ys, boundary).unwrap();

        for (i, d) in spline.derivatives().iter().enumerate() {
            assert_relative_eq!(*d, 2.0 * i as f64, epsilon = 1e-12);
        }
        assert_relative_eq!(spline.evaluate(1.5).unwrap(), 2.25, epsilon = 1e-12);
        assert_relative_eq!(spline.evaluate(3.3).unwrap(), 3.3 * 3.3, epsilon = 1e-12);
    }

    #[test]
    fn test_exact_boundaries_reproduce_cubic() {
        let f = |x: f64| x * x * x - 2.0 * x + 1.0;
        let df = |x: f64| 3.0 * x * x - 2.0;
        let (a, b, n) = (-1.0, 2.0, 6);
        let ys = sampled(a, b, n, f);
        let mut spline = CubicSpline::new(a, b, n, &ys).unwrap();
        spline.set_boundary_conditions(df(a), df(b)).unwrap();

        for k in 0..=30 {
            let z = a + (b - a) * k as f64 / 30.0;
            assert_relative_eq!(spline.evaluate(z).unwrap(), f(z), epsilon = 1e-10);
            assert_relative_eq!(spline.derivative_at(z).unwrap(), df(z), epsilon = 1e-9);
        }
    }

    // ========================================
    // Evaluation Tests
    // ========================================

    #[test]
    fn test_evaluate_alternating_samples() {
        let spline = CubicSpline::new(0.0, 3.0, 3, &[0.0, 1.0, 0.0, 1.0]).unwrap();

        assert_eq!(spline.evaluate(1.0).unwrap(), 1.0);
        assert_eq!(spline.evaluate(2.0).unwrap(), 0.0);
        assert_eq!(spline.evaluate(-5.0).unwrap(), 0.0);
        assert_eq!(spline.evaluate(10.0).unwrap(), 1.0);

        // All derivatives vanish here, so midpoints are H1(1/2) blends
        assert_eq!(spline.derivatives(), &[0.0, 0.0, 0.0, 0.0]);
        assert_relative_eq!(spline.evaluate(0.5).unwrap(), 0.5, epsilon = 1e-14);
        assert_relative_eq!(spline.evaluate(1.5).unwrap(), 0.5, epsilon = 1e-14);
    }

    #[test]
    fn test_evaluate_hermite_basis_is_cubic() {
        // Single interval, y = [0, 1], zero end slopes: s(t) = 3t² - 2t³
        let spline = CubicSpline::new(0.0, 1.0, 1, &[0.0, 1.0]).unwrap();
        for &t in &[0.1, 0.25, 0.5, 0.8] {
            let expected = 3.0 * t * t - 2.0 * t * t * t;
            assert_relative_eq!(spline.evaluate(t).unwrap(), expected, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_evaluate_at_knots() {
        let ys = [2.0, -1.0, 0.5, 3.0, 3.0, -2.0];
        let spline = CubicSpline::new(-1.0, 1.5, 5, &ys).unwrap();
        for (x, y) in spline.knots().iter().zip(ys.iter()) {
            assert_relative_eq!(spline.evaluate(*x).unwrap(), *y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_evaluate_clamps_outside_domain() {
        let spline = CubicSpline::new(1.0, 2.0, 2, &[4.0, 5.0, 6.0]).unwrap();
        assert_eq!(spline.evaluate(f64::NEG_INFINITY).unwrap(), 4.0);
        assert_eq!(spline.evaluate(0.999).unwrap(), 4.0);
        assert_eq!(spline.evaluate(2.001).unwrap(), 6.0);
        assert_eq!(spline.evaluate(f64::INFINITY).unwrap(), 6.0);
    }

    #[test]
    fn test_derivative_outside_domain_is_zero() {
        let spline = CubicSpline::new(0.0, 1.0, 1, &[0.0, 1.0]).unwrap();
        assert_eq!(spline.derivative_at(-1.0).unwrap(), 0.0);
        assert_eq!(spline.derivative_at(2.0).unwrap(), 0.0);
    }

    // ========================================
    // Continuity Tests
    // ========================================

    #[test]
    fn test_c1_continuity_at_interior_knots() {
        let ys = sampled(0.0, 5.0, 10, |x| (x * 1.3).sin() + 0.2 * x);
        let mut spline = CubicSpline::new(0.0, 5.0, 10, &ys).unwrap();
        spline.set_boundary_conditions(0.7, -0.4).unwrap();

        for i in 1..spline.intervals() {
            let left = spline.segment_slope(i - 1, 1.0);
            let right = spline.segment_slope(i, 0.0);
            let stored = spline.derivatives()[i];
            assert_relative_eq!(left, stored, epsilon = 1e-10);
            assert_relative_eq!(right, stored, epsilon = 1e-10);
        }
        assert_relative_eq!(spline.segment_slope(0, 0.0), 0.7, epsilon = 1e-12);
        assert_relative_eq!(spline.segment_slope(9, 1.0), -0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_c2_continuity_at_interior_knots() {
        let ys = sampled(0.0, 3.0, 6, |x| (-x).exp() * 4.0);
        let spline = CubicSpline::new(0.0, 3.0, 6, &ys).unwrap();

        for i in 1..spline.intervals() {
            let left = segment_curvature(&spline, i - 1, 1.0);
            let right = segment_curvature(&spline, i, 0.0);
            assert_relative_eq!(left, right, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_with_f32() {
        let spline = CubicSpline::new(0.0_f32, 3.0, 3, &[0.0, 1.0, 4.0, 9.0]).unwrap();
        let y = spline.evaluate(1.5_f32).unwrap();
        assert!(y.is_finite());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn test_spline_interpolates_samples(
                ys in prop::collection::vec(-100.0..100.0f64, 2..40),
                a in -10.0..10.0f64,
                width in 0.1..20.0f64,
                d0 in -5.0..5.0f64,
                dn in -5.0..5.0f64,
            ) {
                let n = ys.len() - 1;
                let b = a + width;
                let mut spline = CubicSpline::new(a, b, n, &ys).unwrap();
                spline.set_boundary_conditions(d0, dn).unwrap();

                for (x, y) in spline.knots().iter().zip(ys.iter()) {
                    let value = spline.evaluate(*x).unwrap();
                    prop_assert!((value - y).abs() < 1e-9 * (1.0 + y.abs()), "s({}) = {} != {}", x, value, y);
                }
            }
        }
    }
}
