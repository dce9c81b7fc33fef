//! Color manipulations in Oklab/Oklch.
//!
//! All results go back to the device through the CSS4 mapping engine, so
//! they are always valid 0-255 colors even when the manipulation leaves the
//! gamut (extrapolated interpolation, lightening a saturated color).
//!
//! # Example
//!
//! ```rust
//! use okgamut_color::{darken, interpolate, lighten};
//! use okgamut_core::{Rgb, Srgb, Triplet};
//!
//! let red: Rgb = Triplet::new(255, 0, 0);
//! let blue: Rgb = Triplet::new(0, 0, 255);
//!
//! let mid = interpolate::<Srgb, f64>(red, blue, 0.5);
//! assert!(mid.validate_byte_range().is_ok());
//!
//! let darker = darken::<Srgb, f64>(red, 0.2);
//! let lighter = lighten::<Srgb, f64>(red, 0.2);
//! assert!(darker[0] < 255);
//! assert!(lighter[1] > 0);
//! ```

use okgamut_core::{Oklab, Real, Triplet};
use okgamut_math::lerp;

use crate::convert::{device_to_oklab, device_to_oklch, oklab_to_device, oklch_to_device};
use crate::gamut::Gamut;

/// Linear interpolation between two Oklab colors.
///
/// `x * (1 - t) + y * t` per component, so `t = 0` and `t = 1` return the
/// inputs exactly. `t` is not clamped.
#[inline]
pub fn lerp_oklab<T: Real>(x: Triplet<Oklab, T>, y: Triplet<Oklab, T>, t: T) -> Triplet<Oklab, T> {
    Triplet::new(
        lerp(x.l(), y.l(), t),
        lerp(x.a(), y.a(), t),
        lerp(x.b(), y.b(), t),
    )
}

/// Interpolates two device colors in Oklab.
///
/// `t` outside [0, 1] extrapolates; the mapping engine keeps the result in
/// gamut.
pub fn interpolate<G: Gamut, T: Real>(
    c1: Triplet<G, i32>,
    c2: Triplet<G, i32>,
    t: T,
) -> Triplet<G, i32> {
    let lab = lerp_oklab(device_to_oklab::<G, T>(c1), device_to_oklab::<G, T>(c2), t);
    oklab_to_device::<G, T>(lab)
}

/// Darkens a device color by scaling its Oklch lightness by `1 - amount`.
///
/// `amount = 0` leaves the color unchanged, `amount = 1` gives black.
pub fn darken<G: Gamut, T: Real>(color: Triplet<G, i32>, amount: T) -> Triplet<G, i32> {
    let lch = device_to_oklch::<G, T>(color);
    oklch_to_device::<G, T>(lch.with_lightness(lch.l * (T::one() - amount)))
}

/// Lightens a device color by moving its Oklch lightness towards 1.
///
/// `L' = min(1, L + (1 - L) * amount)`; `amount = 1` gives white.
pub fn lighten<G: Gamut, T: Real>(color: Triplet<G, i32>, amount: T) -> Triplet<G, i32> {
    let lch = device_to_oklch::<G, T>(color);
    let l = (lch.l + (T::one() - lch.l) * amount).min(T::one());
    oklch_to_device::<G, T>(lch.with_lightness(l))
}

#[cfg(test)]
mod tests {
    use super::*;
    use okgamut_core::{DisplayP3, Rgb, Srgb};

    const RED: Rgb = Triplet::new(255, 0, 0);
    const BLUE: Rgb = Triplet::new(0, 0, 255);

    #[test]
    fn test_lerp_oklab_endpoints() {
        let x = device_to_oklab::<Srgb, f64>(RED);
        let y = device_to_oklab::<Srgb, f64>(BLUE);
        assert_eq!(lerp_oklab(x, y, 0.0), x);
        assert_eq!(lerp_oklab(x, y, 1.0), y);
    }

    #[test]
    fn test_interpolate_endpoints() {
        assert_eq!(interpolate::<Srgb, f64>(RED, BLUE, 0.0), RED);
        assert_eq!(interpolate::<Srgb, f64>(RED, BLUE, 1.0), BLUE);
    }

    #[test]
    fn test_interpolate_stays_in_range() {
        for t in [-1.0, -0.5, 0.25, 0.5, 0.75, 1.5, 2.0] {
            let c = interpolate::<Srgb, f64>(RED, BLUE, t);
            assert!(c.validate_byte_range().is_ok(), "t = {t}: {c}");
        }
    }

    #[test]
    fn test_darken() {
        assert_eq!(darken::<Srgb, f64>(RED, 0.0), RED);
        assert_eq!(darken::<Srgb, f64>(RED, 1.0).to_array(), [0, 0, 0]);
        let gray: Rgb = Triplet::new(128, 128, 128);
        let darker = darken::<Srgb, f64>(gray, 0.5);
        assert!(darker[0] < 128);
        assert_eq!(darker[0], darker[1]);
        assert_eq!(darker[1], darker[2]);
    }

    #[test]
    fn test_lighten() {
        let p3: Triplet<DisplayP3, i32> = Triplet::new(10, 200, 30);
        assert_eq!(lighten::<DisplayP3, f64>(p3, 0.0), p3);
        assert_eq!(lighten::<Srgb, f64>(BLUE, 1.0).to_array(), [255, 255, 255]);
        let lighter = lighten::<Srgb, f64>(Triplet::new(100, 100, 100), 0.3);
        assert!(lighter[0] > 100);
    }
}
