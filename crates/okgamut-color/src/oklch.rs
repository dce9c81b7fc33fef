//! Oklab <-> Oklch.
//!
//! Hue is only meaningful when chroma is non-negligible. Colors whose a and
//! b components are both within [`ACHROMATIC_EPSILON`] of zero get
//! [`Hue::Undefined`] and a chroma of exactly 0, so `atan2` noise never
//! turns into a hue angle.

use okgamut_core::{Hue, Oklab, Oklch, Real, Triplet};
use okgamut_math::{deg_to_rad, normalize_degrees, rad_to_deg};

/// Threshold on |a| and |b| below which a color is treated as achromatic.
pub const ACHROMATIC_EPSILON: f64 = 0.0002;

/// Oklab -> Oklch.
///
/// # Example
///
/// ```rust
/// use okgamut_color::oklab_to_oklch;
/// use okgamut_core::{Hue, Oklab, Triplet};
///
/// let gray: Triplet<Oklab, f64> = Triplet::new(0.6, 0.0, 0.0);
/// let lch = oklab_to_oklch(gray);
/// assert_eq!(lch.c, 0.0);
/// assert_eq!(lch.h, Hue::Undefined);
/// ```
#[inline]
pub fn oklab_to_oklch<T: Real>(lab: Triplet<Oklab, T>) -> Oklch<T> {
    let (l, a, b) = (lab.l(), lab.a(), lab.b());
    let eps = T::cast_f64(ACHROMATIC_EPSILON);

    if a.abs() < eps && b.abs() < eps {
        return Oklch::new(l, T::zero(), Hue::Undefined);
    }

    let c = a.hypot(b);
    let h = normalize_degrees(rad_to_deg(b.atan2(a)));
    Oklch::new(l, c, Hue::Degrees(h))
}

/// Oklch -> Oklab.
///
/// An undefined hue yields `a = b = 0` whatever the chroma. Defined hues are
/// normalized into [0, 360) first.
#[inline]
pub fn oklch_to_oklab<T: Real>(lch: Oklch<T>) -> Triplet<Oklab, T> {
    match lch.h {
        Hue::Undefined => Triplet::new(lch.l, T::zero(), T::zero()),
        Hue::Degrees(h) => {
            let (sin, cos) = deg_to_rad(normalize_degrees(h)).sin_cos();
            Triplet::new(lch.l, lch.c * cos, lch.c * sin)
        }
    }
}
