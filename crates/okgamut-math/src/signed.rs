//! Sign-preserving fractional powers.
//!
//! `powf` with a fractional exponent is NaN for negative bases. Out-of-gamut
//! colors legitimately produce negative linear and LMS values, so the
//! conversion chains apply powers to the magnitude and restore the sign:
//!
//! ```text
//! signed_pow(x, p) = sign(x) * |x|^p
//! ```

use okgamut_core::Real;

/// Returns `sign(x) * |x|^p`.
///
/// # Example
///
/// ```rust
/// use okgamut_math::signed_pow;
///
/// assert_eq!(signed_pow(-4.0_f64, 0.5), -2.0);
/// assert_eq!(signed_pow(4.0_f64, 0.5), 2.0);
/// ```
#[inline]
pub fn signed_pow<T: Real>(x: T, p: T) -> T {
    with_sign_of(x.abs().powf(p), x)
}

/// Returns the real cube root, keeping the sign of `x`.
///
/// Uses the dedicated `cbrt` rather than `powf(1/3)` for accuracy.
///
/// # Example
///
/// ```rust
/// use okgamut_math::signed_cbrt;
///
/// assert_eq!(signed_cbrt(-8.0_f64), -2.0);
/// assert_eq!(signed_cbrt(27.0_f32), 3.0);
/// ```
#[inline]
pub fn signed_cbrt<T: Real>(x: T) -> T {
    with_sign_of(x.abs().cbrt(), x)
}

/// Returns `magnitude` negated when `sign_source` is negative.
///
/// Zero and NaN sources keep `magnitude` as is.
#[inline]
pub fn with_sign_of<T: Real>(magnitude: T, sign_source: T) -> T {
    if sign_source < T::zero() {
        -magnitude
    } else {
        magnitude
    }
}
