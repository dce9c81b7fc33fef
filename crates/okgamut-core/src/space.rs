//! Color space marker types.
//!
//! Each color space is a zero-sized type implementing [`Space`]. Markers are
//! used as the phantom parameter of [`Triplet`](crate::Triplet), so values
//! from different spaces cannot be mixed without an explicit conversion.
//!
//! # Spaces
//!
//! | Marker | Encoding | Gamut membership |
//! |--------|----------|------------------|
//! | [`Srgb`] | sRGB transfer, 0-255 device integers | device cube |
//! | [`DisplayP3`] | sRGB transfer, 0-255 device integers | device cube |
//! | [`LinearSrgb`] | linear light, Rec.709 primaries | unit cube |
//! | [`LinearP3`] | linear light, P3 primaries | unit cube |
//! | [`Lms`] | cone response pivot space | unbounded |
//! | [`Oklab`] | perceptual L, a, b | unbounded |

use std::fmt;

/// Trait for color space marker types.
///
/// # Implementing Custom Spaces
///
/// ```
/// use okgamut_core::Space;
///
/// #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
/// pub struct LinearRec2020;
///
/// impl Space for LinearRec2020 {
///     const NAME: &'static str = "Linear Rec.2020";
///     const IS_LINEAR: bool = true;
/// }
/// ```
pub trait Space: Copy + Clone + Default + PartialEq + Send + Sync + fmt::Debug + 'static {
    /// Human-readable name of the space, used for display and logging.
    const NAME: &'static str;

    /// Whether values in this space are linear light.
    ///
    /// `false` for gamma-encoded device spaces and for perceptual spaces.
    const IS_LINEAR: bool;
}

macro_rules! space_marker {
    ($(#[$meta:meta])* $name:ident, $display:literal, $linear:literal) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Space for $name {
            const NAME: &'static str = $display;
            const IS_LINEAR: bool = $linear;
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str($display)
            }
        }
    };
}

space_marker!(
    /// sRGB device encoding: Rec.709 primaries, D65, sRGB transfer curve.
    Srgb,
    "sRGB",
    false
);

space_marker!(
    /// Display P3 device encoding: P3 primaries, D65, sRGB transfer curve.
    DisplayP3,
    "Display P3",
    false
);

space_marker!(
    /// Linear-light sRGB.
    LinearSrgb,
    "Linear sRGB",
    true
);

space_marker!(
    /// Linear-light Display P3.
    LinearP3,
    "Linear P3",
    true
);

space_marker!(
    /// LMS cone response, the pivot between linear RGB and Oklab.
    ///
    /// Values may be negative for out-of-gamut inputs.
    Lms,
    "LMS",
    true
);

space_marker!(
    /// Oklab perceptual space (L = lightness, a = green-red, b = blue-yellow).
    Oklab,
    "Oklab",
    false
);
