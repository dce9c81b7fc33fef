//! Cylindrical Oklab (Oklch) value types.
//!
//! Hue is meaningless for achromatic colors. Instead of storing an arbitrary
//! angle (or a NaN that would leak into later arithmetic), [`Hue::Undefined`]
//! marks that state explicitly. The conversions themselves live in
//! `okgamut-color`.

use crate::real::Real;
use std::fmt;

/// Hue angle of an Oklch color.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Hue<T> {
    /// The color is achromatic; there is no hue.
    Undefined,
    /// Hue angle in degrees.
    Degrees(T),
}

impl<T: Real> Hue<T> {
    /// Returns the angle in degrees, or `None` for an achromatic color.
    #[inline]
    pub fn degrees(self) -> Option<T> {
        match self {
            Hue::Undefined => None,
            Hue::Degrees(h) => Some(h),
        }
    }

    /// Returns true if the hue is undefined.
    #[inline]
    pub fn is_undefined(self) -> bool {
        matches!(self, Hue::Undefined)
    }
}

impl<T: Real> From<Option<T>> for Hue<T> {
    fn from(h: Option<T>) -> Self {
        h.map_or(Hue::Undefined, Hue::Degrees)
    }
}

impl<T: fmt::Display> fmt::Display for Hue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hue::Undefined => f.write_str("none"),
            Hue::Degrees(h) => match f.precision() {
                Some(p) => write!(f, "{h:.p$}"),
                None => write!(f, "{h}"),
            },
        }
    }
}

/// A color in Oklch: lightness, chroma, hue.
///
/// # Example
///
/// ```rust
/// use okgamut_core::{Hue, Oklch};
///
/// let gray = Oklch::new(0.5, 0.0, Hue::Undefined);
/// assert!(gray.h.is_undefined());
///
/// let red = Oklch::new(0.628, 0.258, Hue::Degrees(29.23));
/// let less_red = red.with_chroma(0.1);
/// assert_eq!(less_red.h, red.h);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oklch<T> {
    /// Lightness (0 = black, 1 = white, not clamped).
    pub l: T,
    /// Chroma (>= 0).
    pub c: T,
    /// Hue.
    pub h: Hue<T>,
}

impl<T: Real> Oklch<T> {
    /// Creates a new Oklch color.
    #[inline]
    pub const fn new(l: T, c: T, h: Hue<T>) -> Self {
        Self { l, c, h }
    }

    /// Same lightness and hue, different chroma.
    #[inline]
    pub fn with_chroma(self, c: T) -> Self {
        Self { c, ..self }
    }

    /// Same chroma and hue, different lightness.
    #[inline]
    pub fn with_lightness(self, l: T) -> Self {
        Self { l, ..self }
    }
}

impl<T: fmt::Display> fmt::Display for Oklch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "Oklch({:.p$}, {:.p$}, {:.p$})", self.l, self.c, self.h),
            None => write!(f, "Oklch({}, {}, {})", self.l, self.c, self.h),
        }
    }
}
