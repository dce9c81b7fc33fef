//! Floating point precision abstraction.
//!
//! The conversion pipeline is written once and instantiated for `f64` (the
//! canonical precision, matching the CSS Color 4 reference values) and `f32`.
//!
//! [`Real`] extends [`num_traits::Float`] with the few conversions the
//! pipeline needs: widening constants stored as `f64` literals, bringing
//! 8-bit device channels in, and quantizing back to integers.

use num_traits::{Float, FloatConst};
use std::fmt;

/// Floating point type usable by the okgamut pipeline.
///
/// Implemented for `f32` and `f64`.
///
/// # Example
///
/// ```rust
/// use okgamut_core::Real;
///
/// fn half<T: Real>(v: T) -> T {
///     v * T::cast_f64(0.5)
/// }
///
/// assert_eq!(half(3.0_f64), 1.5);
/// assert_eq!(half(3.0_f32), 1.5);
/// ```
pub trait Real:
    Float + FloatConst + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Human-readable precision name (`"f32"` or `"f64"`).
    const PRECISION: &'static str;

    /// Converts an `f64` literal, rounding to nearest for narrower types.
    fn cast_f64(v: f64) -> Self;

    /// Converts a device channel value.
    fn cast_i32(v: i32) -> Self;

    /// Rounds half away from zero and converts to `i32`.
    ///
    /// Uses `as` semantics: out-of-range values saturate and NaN becomes 0.
    fn round_to_i32(self) -> i32;

    /// Widens to `f64`.
    fn to_f64_lossless(self) -> f64;
}

impl Real for f64 {
    const PRECISION: &'static str = "f64";

    #[inline]
    fn cast_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn cast_i32(v: i32) -> Self {
        v as f64
    }

    #[inline]
    fn round_to_i32(self) -> i32 {
        f64::round(self) as i32
    }

    #[inline]
    fn to_f64_lossless(self) -> f64 {
        self
    }
}

impl Real for f32 {
    const PRECISION: &'static str = "f32";

    #[inline]
    fn cast_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn cast_i32(v: i32) -> Self {
        v as f32
    }

    #[inline]
    fn round_to_i32(self) -> i32 {
        f32::round(self) as i32
    }

    #[inline]
    fn to_f64_lossless(self) -> f64 {
        self as f64
    }
}
