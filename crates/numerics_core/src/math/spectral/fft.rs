//! Recursive radix-2 decimation-in-time Fourier transforms.

use crate::types::{Complex, TransformError};
use num_traits::Float;
use std::f64::consts::PI;

/// Direction of a transform, i.e. the sign of the twiddle exponent.
#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    fn sign<T: Float>(self) -> T {
        match self {
            Direction::Forward => -T::one(),
            Direction::Inverse => T::one(),
        }
    }
}

fn check_length(len: usize) -> Result<(), TransformError> {
    if len == 0 || !len.is_power_of_two() {
        return Err(TransformError::InvalidLength { len });
    }
    Ok(())
}

/// Split by index parity, transform both halves, and combine:
///
/// ```text
/// out[j]     = E[j] + ω^j · O[j]
/// out[m + j] = E[j] - ω^j · O[j],   ω = e^{±2πi/len},  j = 0..m-1
/// ```
///
/// Recursion depth is `log2(len)`.
fn radix2<T: Float>(seq: &[Complex<T>], direction: Direction) -> Vec<Complex<T>> {
    let len = seq.len();
    if len == 1 {
        return vec![seq[0]];
    }

    let m = len / 2;
    let even: Vec<Complex<T>> = seq.iter().step_by(2).copied().collect();
    let odd: Vec<Complex<T>> = seq.iter().skip(1).step_by(2).copied().collect();

    let even = radix2(&even, direction);
    let odd = radix2(&odd, direction);

    let angle = direction.sign::<T>() * T::from(2.0 * PI).unwrap() / T::from(len).unwrap();
    let omega = Complex::from_polar(T::one(), angle);

    let mut out = vec![Complex::zero(); len];
    for (j, (&e, &o)) in even.iter().zip(odd.iter()).enumerate() {
        let twiddled = omega.pow(j as u32) * o;
        out[j] = e + twiddled;
        out[m + j] = e - twiddled;
    }
    out
}

/// Inverse discrete Fourier transform, without `1/n` normalisation.
///
/// `out[k] = Σ_j c[j] · e^{+2πi·jk/n}`
///
/// # Returns
///
/// * `Ok(v)` - Transformed sequence of the same length
/// * `Err(TransformError::InvalidLength)` - Length is zero or not a power of two
///
/// # Example
///
/// ```
/// use numerics_core::math::spectral::ifft;
/// use numerics_core::types::Complex;
///
/// let v = Complex::new(0.5, -2.0);
/// assert_eq!(ifft(&[v]).unwrap(), vec![v]);
/// assert!(ifft(&[v, v, v]).is_err());
/// ```
pub fn ifft<T: Float>(seq: &[Complex<T>]) -> Result<Vec<Complex<T>>, TransformError> {
    check_length(seq.len())?;
    tracing::trace!(len = seq.len(), "inverse fft");
    Ok(radix2(seq, Direction::Inverse))
}

/// Forward discrete Fourier transform.
///
/// `out[k] = Σ_j c[j] · e^{-2πi·jk/n}`
///
/// # Returns
///
/// * `Err(TransformError::InvalidLength)` - Length is zero or not a power of two
pub fn fft<T: Float>(seq: &[Complex<T>]) -> Result<Vec<Complex<T>>, TransformError> {
    check_length(seq.len())?;
    tracing::trace!(len = seq.len(), "forward fft");
    Ok(radix2(seq, Direction::Forward))
}

/// Inverse transform scaled by `1/n`, so that `ifft_normalized(fft(c)) == c`.
///
/// # Example
///
/// ```
/// use numerics_core::math::spectral::{fft, ifft_normalized};
/// use numerics_core::types::Complex;
///
/// let c: Vec<Complex<f64>> = (0..8).map(|k| Complex::new(k as f64, 1.0)).collect();
/// let back = ifft_normalized(&fft(&c).unwrap()).unwrap();
///
/// for (a, b) in back.iter().zip(c.iter()) {
///     assert!((*a - *b).norm() < 1e-12);
/// }
/// ```
pub fn ifft_normalized<T: Float>(seq: &[Complex<T>]) -> Result<Vec<Complex<T>>, TransformError> {
    let scale = T::one() / T::from(seq.len()).unwrap_or_else(T::one);
    Ok(ifft(seq)?.into_iter().map(|c| c.scale(scale)).collect())
}

/// Integer power `base^exponent` of a real number, with `power(a, 0) = 1`.
///
/// Binary exponentiation; agrees with repeated multiplication up to rounding.
///
/// # Example
///
/// ```
/// use numerics_core::math::spectral::power;
///
/// assert_eq!(power(2.0, 10), 1024.0);
/// assert_eq!(power(-3.0, 3), -27.0);
/// assert_eq!(power(0.0, 0), 1.0);
/// ```
pub fn power<T: Float>(base: T, exponent: u32) -> T {
    let mut result = T::one();
    let mut base = base;
    let mut exp = exponent;
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
