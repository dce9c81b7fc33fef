//! # okgamut-transfer
//!
//! Transfer functions (OETF/EOTF) between gamma-encoded device values and
//! linear light.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//!
//! # Supported Transfer Functions
//!
//! | Module | Encodings | Range |
//! |--------|-----------|-------|
//! | [`srgb`] | sRGB | any real, sign-extended |
//! | [`display_p3`] | Display P3 (same curve as sRGB) | any real, sign-extended |
//!
//! Out-of-gamut colors produce linear values below 0 and above 1 while they
//! travel through the conversion chains. The curves here mirror themselves
//! around zero and continue past 1 instead of clamping, so such values
//! survive a decode/encode round trip.
//!
//! # Usage
//!
//! ```rust
//! use okgamut_transfer::srgb;
//!
//! let linear = srgb::eotf(0.5_f64);
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 0.5).abs() < 1e-12);
//!
//! // Negative values keep their sign
//! assert!(srgb::eotf(-0.5_f64) < 0.0);
//! ```
//!
//! # Used By
//!
//! - `okgamut-color` - device <-> linear step of the conversion chains

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

/// Display P3 transfer functions.
///
/// Display P3 reuses the sRGB curve unchanged; only the primaries differ.
pub mod display_p3 {
    pub use crate::srgb::{eotf, eotf_rgb, oetf, oetf_rgb};
}
