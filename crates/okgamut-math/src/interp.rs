//! Scalar interpolation and angle helpers.
//!
//! # Usage
//!
//! ```rust
//! use okgamut_math::{lerp, normalize_degrees};
//!
//! assert_eq!(lerp(0.0_f64, 10.0, 0.5), 5.0);
//! assert_eq!(normalize_degrees(-90.0_f64), 270.0);
//! ```

use okgamut_core::Real;

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Formula
///
/// `a * (1 - t) + b * t`
///
/// Both endpoints are reproduced exactly, which `a + (b - a) * t` does not
/// guarantee at `t = 1`.
///
/// # Example
///
/// ```rust
/// use okgamut_math::lerp;
///
/// assert_eq!(lerp(0.1_f64, 0.7, 0.0), 0.1);
/// assert_eq!(lerp(0.1_f64, 0.7, 1.0), 0.7);
/// ```
#[inline]
pub fn lerp<T: Real>(a: T, b: T, t: T) -> T {
    a * (T::one() - t) + b * t
}

/// Wraps an angle in degrees into [0, 360).
///
/// Computed as `((x % 360) + 360) % 360`, so negative inputs wrap forward.
#[inline]
pub fn normalize_degrees<T: Real>(degrees: T) -> T {
    let full = T::cast_f64(360.0);
    ((degrees % full) + full) % full
}

/// Converts degrees to radians.
#[inline]
pub fn deg_to_rad<T: Real>(degrees: T) -> T {
    degrees * T::PI() / T::cast_f64(180.0)
}

/// Converts radians to degrees.
#[inline]
pub fn rad_to_deg<T: Real>(radians: T) -> T {
    radians * T::cast_f64(180.0) / T::PI()
}
