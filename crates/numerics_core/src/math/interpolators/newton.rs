//! Newton-form interpolating polynomial with incremental extension.

use super::traits::validate_equidistant;
use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Interpolating polynomial in Newton form.
///
/// `p(z) = a[0] + a[1](z-x[0]) + a[2](z-x[0])(z-x[1]) + ...`
///
/// Besides the coefficients `a`, the polynomial keeps the last diagonal of
/// the divided-difference triangle,
/// `f[k] = [x[n-k], ..., x[n]]f` for `k = 0..=n`, which is all that is
/// needed to append a further sampling point in O(n).
///
/// Knots may be arbitrary but must be pairwise distinct; this is not
/// checked by [`init_with_knots`](NewtonPolynomial::init_with_knots).
///
/// # Example
///
/// ```
/// use numerics_core::math::interpolators::{Interpolator, NewtonPolynomial};
///
/// // y = x² + 1
/// let mut p = NewtonPolynomial::new(&[0.0, 1.0, 2.0], &[1.0, 2.0, 5.0]).unwrap();
/// assert_eq!(p.coefficients(), &[1.0, 1.0, 1.0]);
/// assert_eq!(p.evaluate(3.0).unwrap(), 10.0);
///
/// p.add_sampling_point(3.0, 10.0).unwrap();
/// assert_eq!(p.coefficients(), &[1.0, 1.0, 1.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonPolynomial<T: Float> {
    /// Knots x[0..=n]
    x: Vec<T>,
    /// Newton coefficients a[0..=n]
    a: Vec<T>,
    /// Last diagonal of the divided-difference triangle
    f: Vec<T>,
}

impl<T: Float> Default for NewtonPolynomial<T> {
    /// The empty polynomial; evaluation fails until it is initialised.
    fn default() -> Self {
        Self {
            x: Vec::new(),
            a: Vec::new(),
            f: Vec::new(),
        }
    }
}

impl<T: Float> NewtonPolynomial<T> {
    /// Construct the polynomial through `(xs[i], ys[i])`.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InvalidArgument)` - Empty or mismatched slices
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        let mut poly = Self::default();
        poly.init_with_knots(xs, ys)?;
        Ok(poly)
    }

    /// Construct the polynomial through `n + 1` equidistant samples on `[a, b]`.
    pub fn equidistant(a: T, b: T, n: usize, ys: &[T]) -> Result<Self, InterpolationError> {
        let mut poly = Self::default();
        poly.init(a, b, n, ys)?;
        Ok(poly)
    }

    /// (Re)initialise with arbitrary, pairwise distinct knots.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InvalidArgument)` - Empty or mismatched slices;
    ///   the polynomial is left unchanged
    pub fn init_with_knots(&mut self, xs: &[T], ys: &[T]) -> Result<(), InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidArgument(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.is_empty() {
            return Err(InterpolationError::InvalidArgument(
                "at least one sampling point is required".to_string(),
            ));
        }

        self.x = xs.to_vec();
        self.compute_coefficients(ys);
        tracing::debug!(points = xs.len(), "newton polynomial initialised");
        Ok(())
    }

    /// Fill `a` and `f` from the sample values by column-wise reduction of
    /// the divided-difference triangle in a single working array.
    ///
    /// After column `j`, `a[i]` holds `[x[i-j], ..., x[i]]f` for `i >= j`,
    /// so `a[j]` is final and `a[n]` is the next diagonal entry.
    fn compute_coefficients(&mut self, ys: &[T]) {
        let n = ys.len() - 1;
        let mut a = ys.to_vec();
        let mut f = Vec::with_capacity(n + 1);
        f.push(a[n]);

        for j in 1..=n {
            // Descending so a[i-1] still holds column j-1
            for i in (j..=n).rev() {
                a[i] = (a[i] - a[i - 1]) / (self.x[i] - self.x[i - j]);
            }
            f.push(a[n]);
        }

        self.a = a;
        self.f = f;
    }

    /// Append the sampling point `(x_new, y_new)` without rebuilding the
    /// divided-difference triangle.
    ///
    /// The new diagonal follows from the old one and the new point alone:
    ///
    /// ```text
    /// d[0]   = y_new
    /// d[k+1] = (d[k] - f[k]) / (x_new - x[n-k]),   k = 0..=n
    /// ```
    ///
    /// and the new top coefficient is `d[n+1]`. O(n) per call.
    ///
    /// On an empty polynomial the point becomes the only sample.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::DuplicateKnot)` - `x_new` is already a knot;
    ///   the polynomial is left unchanged
    /// * `Err(InterpolationError::InvalidArgument)` - `x_new` is not finite
    pub fn add_sampling_point(&mut self, x_new: T, y_new: T) -> Result<(), InterpolationError> {
        if !x_new.is_finite() {
            return Err(InterpolationError::InvalidArgument(format!(
                "sampling point must be finite: got {}",
                x_new.to_f64().unwrap_or(f64::NAN)
            )));
        }
        if self.x.iter().any(|&xi| xi == x_new) {
            return Err(InterpolationError::DuplicateKnot {
                x: x_new.to_f64().unwrap_or(f64::NAN),
            });
        }

        if self.x.is_empty() {
            self.x.push(x_new);
            self.a.push(y_new);
            self.f.push(y_new);
            return Ok(());
        }

        let n = self.x.len() - 1;
        let mut d = y_new;
        for k in 0..=n {
            let previous = self.f[k];
            self.f[k] = d;
            d = (d - previous) / (x_new - self.x[n - k]);
        }
        self.f.push(d);
        self.a.push(d);
        self.x.push(x_new);

        tracing::trace!(points = self.x.len(), "sampling point appended");
        Ok(())
    }

    /// Returns the Newton coefficients `a[0..=n]`.
    #[inline]
    pub fn coefficients(&self) -> &[T] {
        &self.a
    }

    /// Returns the last diagonal of the divided-difference triangle,
    /// `[x[n]]f, [x[n-1], x[n]]f, ..., [x[0], ..., x[n]]f`.
    #[inline]
    pub fn divided_differences(&self) -> &[T] {
        &self.f
    }

    /// Returns the knots in insertion order.
    #[inline]
    pub fn knots(&self) -> &[T] {
        &self.x
    }

    /// Number of sampling points.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns true if the polynomial holds no sampling points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Formal degree `n` (number of points minus one), `None` when empty.
    #[inline]
    pub fn degree(&self) -> Option<usize> {
        self.x.len().checked_sub(1)
    }
}

impl<T: Float> Interpolator<T> for NewtonPolynomial<T> {
    /// Knots `x[i] = a + i*(b-a)/n`, then the general construction.
    fn init(&mut self, a: T, b: T, n: usize, ys: &[T]) -> Result<(), InterpolationError> {
        validate_equidistant(a, b, n, ys)?;

        let h = (b - a) / T::from(n).unwrap();
        let xs: Vec<T> = (0..=n).map(|i| a + T::from(i).unwrap() * h).collect();
        self.init_with_knots(&xs, ys)
    }

    /// Nested multiplication from the highest coefficient down:
    ///
    /// ```text
    /// p = a[n];  p = a[i] + (z - x[i]) * p,  i = n-1..0
    /// ```
    ///
    /// The polynomial is defined everywhere, so `z` outside the knot range
    /// extrapolates.
    fn evaluate(&self, z: T) -> Result<T, InterpolationError> {
        let (last, rest) = self
            .a
            .split_last()
            .ok_or(InterpolationError::NotInitialized)?;

        Ok(rest
            .iter()
            .zip(self.x.iter())
            .rev()
            .fold(*last, |acc, (&ai, &xi)| ai + (z - xi) * acc))
    }

    fn domain(&self) -> Option<(T, T)> {
        let first = *self.x.first()?;
        Some(self.x.iter().fold((first, first), |(lo, hi), &xi| {
            (lo.min(xi), hi.max(xi))
        }))
    }
}
