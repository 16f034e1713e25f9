//! Immutable complex value type for the spectral kernels.
//!
//! `Complex<T>` is a plain `Copy` pair `(re, im)`; every operation returns a
//! new value. Addition, subtraction, multiplication and negation go through
//! the standard operator traits, so `a + b`, `a - b`, `a * b` and
//! `a.add(b)` style calls both work.

use approx::AbsDiffEq;
use num_traits::Float;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Complex number with real part `re` and imaginary part `im`.
///
/// # Examples
/// ```
/// use numerics_core::types::Complex;
///
/// let a = Complex::new(1.0_f64, 2.0);
/// let b = Complex::new(3.0_f64, -1.0);
///
/// assert_eq!(a + b, Complex::new(4.0, 1.0));
/// assert_eq!(a * b, Complex::new(5.0, 5.0));
/// assert_eq!(Complex::<f64>::i().pow(2), Complex::new(-1.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex<T: Float> {
    /// Real part
    pub re: T,
    /// Imaginary part
    pub im: T,
}

impl<T: Float> Complex<T> {
    /// Create a complex number from its real and imaginary parts.
    #[inline]
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    /// `0 + 0i`
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// `1 + 0i`
    #[inline]
    pub fn one() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// The imaginary unit `0 + 1i`.
    #[inline]
    pub fn i() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Real number embedded in the complex plane.
    #[inline]
    pub fn from_real(re: T) -> Self {
        Self::new(re, T::zero())
    }

    /// Build `r * e^{i*theta}`.
    #[inline]
    pub fn from_polar(r: T, theta: T) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    /// Complex conjugate `re - im*i`.
    #[inline]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Modulus `|z|`.
    #[inline]
    pub fn norm(self) -> T {
        self.re.hypot(self.im)
    }

    /// Multiply both parts by a real factor.
    #[inline]
    pub fn scale(self, factor: T) -> Self {
        Self::new(self.re * factor, self.im * factor)
    }

    /// Integer power `z^k` for `k >= 0`, with `z^0 = 1 + 0i`.
    ///
    /// Computed by binary exponentiation; the result equals `k`-fold
    /// repeated multiplication up to rounding.
    pub fn pow(self, k: u32) -> Self {
        let mut result = Self::one();
        let mut base = self;
        let mut exp = k;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base;
            }
            exp >>= 1;
            if exp > 0 {
                base = base * base;
            }
        }
        result
    }
}

impl<T: Float> Add for Complex<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<T: Float> Sub for Complex<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<T: Float> Mul for Complex<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl<T: Float> Neg for Complex<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl<T: Float> From<T> for Complex<T> {
    fn from(re: T) -> Self {
        Self::from_real(re)
    }
}

impl<T: Float + fmt::Display> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < T::zero() {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

impl<T> AbsDiffEq for Complex<T>
where
    T: Float + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.re.abs_diff_eq(&other.re, epsilon) && self.im.abs_diff_eq(&other.im, epsilon)
    }
}
