//! Device gamuts.
//!
//! A [`Gamut`] is a gamma-encoded RGB device space together with the
//! linear-light space it decodes to. Everything the conversion chains and
//! the mapping engine need from a gamut is derived from two matrices:
//!
//! - linear RGB -> LMS ([`Gamut::TO_LMS`])
//! - LMS -> linear RGB ([`Gamut::FROM_LMS`])
//!
//! Both supported gamuts share the sRGB transfer curve.
//!
//! # Adding a Gamut
//!
//! ```rust
//! use okgamut_color::Gamut;
//! use okgamut_core::{Space, Triplet};
//!
//! #[derive(Copy, Clone, Debug, Default, PartialEq)]
//! struct MyDevice;
//! impl Space for MyDevice {
//!     const NAME: &'static str = "My device";
//!     const IS_LINEAR: bool = false;
//! }
//!
//! #[derive(Copy, Clone, Debug, Default, PartialEq)]
//! struct MyLinear;
//! impl Space for MyLinear {
//!     const NAME: &'static str = "My linear";
//!     const IS_LINEAR: bool = true;
//! }
//!
//! impl Gamut for MyDevice {
//!     type Linear = MyLinear;
//!     const TO_LMS: [[f64; 3]; 3] = okgamut_color::matrices::LINEAR_SRGB_TO_LMS;
//!     const FROM_LMS: [[f64; 3]; 3] = okgamut_color::matrices::LMS_TO_LINEAR_SRGB;
//! }
//!
//! let lab = okgamut_color::device_to_oklab::<MyDevice, f64>(Triplet::new(255, 255, 255));
//! assert!((lab.l() - 1.0).abs() < 1e-6);
//! ```

use std::fmt;
use std::str::FromStr;

use okgamut_core::{DisplayP3, Error, LinearP3, LinearSrgb, Lms, Oklab, Real, Space, Srgb, Triplet};
use okgamut_math::{Mat3, Vec3};
use okgamut_transfer::srgb;

use crate::matrices;
use crate::oklab::{lms_to_oklab, oklab_to_lms};

/// Maximum 8-bit device channel value.
const DEVICE_MAX: f64 = 255.0;

/// An RGB device gamut, implemented on its device space marker.
///
/// Only the two matrices are required; the conversions are provided.
pub trait Gamut: Space {
    /// Linear-light companion space.
    type Linear: Space;

    /// Linear RGB -> LMS matrix.
    const TO_LMS: [[f64; 3]; 3];

    /// LMS -> linear RGB matrix.
    const FROM_LMS: [[f64; 3]; 3];

    /// Decodes 0-255 device channels to linear light: `eotf(v / 255)`.
    ///
    /// Channels outside 0-255 are accepted and decode outside [0, 1].
    #[inline]
    fn to_linear<T: Real>(device: Triplet<Self, i32>) -> Triplet<Self::Linear, T> {
        let [r, g, b] = device.to_array();
        let encoded = Vec3::new(T::cast_i32(r), T::cast_i32(g), T::cast_i32(b))
            .div_scalar(T::cast_f64(DEVICE_MAX));
        Triplet::from_array(srgb::eotf_rgb(encoded).to_array())
    }

    /// Encodes linear light to device channels: `round(oetf(v) * 255)`.
    ///
    /// Rounds half away from zero. No clamping: out-of-gamut input yields
    /// channels outside 0-255. NaN channels quantize to 0.
    #[inline]
    fn from_linear<T: Real>(linear: Triplet<Self::Linear, T>) -> Triplet<Self, i32> {
        let encoded = srgb::oetf_rgb(Vec3::from_array(linear.to_array()))
            .mul_scalar(T::cast_f64(DEVICE_MAX));
        Triplet::new(
            encoded.x.round_to_i32(),
            encoded.y.round_to_i32(),
            encoded.z.round_to_i32(),
        )
    }

    /// True iff every linear channel lies in [0, 1].
    #[inline]
    fn in_gamut<T: Real>(linear: Triplet<Self::Linear, T>) -> bool {
        Vec3::from_array(linear.to_array()).in_range(T::zero(), T::one())
    }

    /// Clamps every linear channel to [0, 1] independently.
    #[inline]
    fn clip<T: Real>(linear: Triplet<Self::Linear, T>) -> Triplet<Self::Linear, T> {
        Triplet::from_array(Vec3::from_array(linear.to_array()).clamp01().to_array())
    }

    /// Linear RGB -> LMS.
    #[inline]
    fn linear_to_lms<T: Real>(linear: Triplet<Self::Linear, T>) -> Triplet<Lms, T> {
        let lms = Mat3::<T>::from_f64_rows(Self::TO_LMS) * Vec3::from_array(linear.to_array());
        Triplet::from_array(lms.to_array())
    }

    /// LMS -> linear RGB.
    #[inline]
    fn lms_to_linear<T: Real>(lms: Triplet<Lms, T>) -> Triplet<Self::Linear, T> {
        let linear = Mat3::<T>::from_f64_rows(Self::FROM_LMS) * Vec3::from_array(lms.to_array());
        Triplet::from_array(linear.to_array())
    }

    /// Linear RGB -> Oklab.
    #[inline]
    fn linear_to_oklab<T: Real>(linear: Triplet<Self::Linear, T>) -> Triplet<Oklab, T> {
        lms_to_oklab(Self::linear_to_lms(linear))
    }

    /// Oklab -> linear RGB, without any gamut handling.
    #[inline]
    fn oklab_to_linear<T: Real>(lab: Triplet<Oklab, T>) -> Triplet<Self::Linear, T> {
        Self::lms_to_linear(oklab_to_lms(lab))
    }
}

impl Gamut for Srgb {
    type Linear = LinearSrgb;
    const TO_LMS: [[f64; 3]; 3] = matrices::LINEAR_SRGB_TO_LMS;
    const FROM_LMS: [[f64; 3]; 3] = matrices::LMS_TO_LINEAR_SRGB;
}

impl Gamut for DisplayP3 {
    type Linear = LinearP3;
    const TO_LMS: [[f64; 3]; 3] = matrices::LINEAR_P3_TO_LMS;
    const FROM_LMS: [[f64; 3]; 3] = matrices::LMS_TO_LINEAR_P3;
}

/// Runtime gamut selector, for choosing a [`Gamut`] from user input.
///
/// ```rust
/// use okgamut_color::GamutId;
///
/// let id: GamutId = "display-p3".parse().unwrap();
/// assert_eq!(id, GamutId::DisplayP3);
/// assert_eq!(id.to_string(), "p3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamutId {
    /// sRGB.
    #[default]
    Srgb,
    /// Display P3.
    DisplayP3,
}

impl GamutId {
    /// All supported gamuts.
    pub const ALL: [GamutId; 2] = [GamutId::Srgb, GamutId::DisplayP3];

    /// Short name accepted by [`FromStr`].
    pub fn short_name(self) -> &'static str {
        match self {
            GamutId::Srgb => "srgb",
            GamutId::DisplayP3 => "p3",
        }
    }

    /// Descriptive name of the device space.
    pub fn display_name(self) -> &'static str {
        match self {
            GamutId::Srgb => Srgb::NAME,
            GamutId::DisplayP3 => DisplayP3::NAME,
        }
    }
}

impl fmt::Display for GamutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for GamutId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "srgb" | "rgb" => Ok(GamutId::Srgb),
            "p3" | "display-p3" | "displayp3" | "display_p3" => Ok(GamutId::DisplayP3),
            _ => Err(Error::UnknownGamut(s.to_string())),
        }
    }
}
