//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve (approximately gamma 2.2) for the rest.
//!
//! # Range
//!
//! - Input/Output: any real. Values outside [0, 1] are sign-extended: the
//!   curve is applied to `|v|` and the sign restored, never clamped.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999, extended to negative values as in CSS Color 4.

use okgamut_core::Real;
use okgamut_math::{Vec3, with_sign_of};

/// Encoded threshold of the linear segment.
pub const ENCODED_KNEE: f64 = 0.04045;

/// Linear threshold of the linear segment.
pub const LINEAR_KNEE: f64 = 0.0031308;

const SLOPE: f64 = 12.92;
const OFFSET: f64 = 0.055;
const SCALE: f64 = 1.055;
const GAMMA: f64 = 2.4;

/// sRGB EOTF: Decodes sRGB encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if |V| <= 0.04045:
///     L = V / 12.92
/// else:
///     L = sign(V) * ((|V| + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use okgamut_transfer::srgb::eotf;
///
/// let linear = eotf(0.5_f64);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn eotf<T: Real>(v: T) -> T {
    let abs = v.abs();
    if abs <= T::cast_f64(ENCODED_KNEE) {
        v / T::cast_f64(SLOPE)
    } else {
        let l = ((abs + T::cast_f64(OFFSET)) / T::cast_f64(SCALE)).powf(T::cast_f64(GAMMA));
        with_sign_of(l, v)
    }
}

/// sRGB OETF: Encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// if |L| <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = sign(L) * (1.055 * |L|^(1/2.4) - 0.055)
/// ```
///
/// # Example
///
/// ```rust
/// use okgamut_transfer::srgb::oetf;
///
/// let encoded = oetf(0.214_f64);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn oetf<T: Real>(l: T) -> T {
    let abs = l.abs();
    if abs <= T::cast_f64(LINEAR_KNEE) {
        l * T::cast_f64(SLOPE)
    } else {
        let v = T::cast_f64(SCALE) * abs.powf(T::one() / T::cast_f64(GAMMA)) - T::cast_f64(OFFSET);
        with_sign_of(v, l)
    }
}

/// Applies sRGB EOTF to an RGB triplet.
#[inline]
pub fn eotf_rgb<T: Real>(rgb: Vec3<T>) -> Vec3<T> {
    rgb.map(eotf)
}

/// Applies sRGB OETF to an RGB triplet.
#[inline]
pub fn oetf_rgb<T: Real>(rgb: Vec3<T>) -> Vec3<T> {
    rgb.map(oetf)
}
