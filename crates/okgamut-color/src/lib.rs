//! # okgamut-color
//!
//! Oklab/Oklch conversions and gamut mapping for gamma-encoded RGB devices.
//!
//! - **Conversion chains** - device <-> linear <-> LMS <-> Oklab <-> Oklch
//! - **Gamut mapping** - CSS Color 4 chroma-reduction bisection
//! - **Gamut-to-gamut** - sRGB <-> Display P3 through Oklab
//! - **Manipulations** - interpolate, darken, lighten
//! - **Batch** - rayon-parallel slice conversion
//!
//! # Architecture
//!
//! ```text
//!                  okgamut-color
//!                        |
//!          +-------------+-------------+
//!          |                           |
//!  okgamut-transfer               okgamut-math
//!          |                           |
//!          +-------------+-------------+
//!                        |
//!                  okgamut-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use okgamut_color::prelude::*;
//!
//! // Saturated P3 red does not fit in sRGB
//! let red: P3 = Triplet::new(255, 0, 0);
//! let lab = device_to_oklab::<DisplayP3, f64>(red);
//!
//! // Unmapped: channels fall outside 0-255
//! let raw = oklab_to_device_unmapped::<Srgb, f64>(lab);
//! assert_eq!(raw.to_array(), [279, -58, -38]);
//!
//! // Mapped: closest displayable color at the same lightness and hue
//! let mapped = oklab_to_device::<Srgb, f64>(lab);
//! assert_eq!(mapped.to_array(), [255, 11, 12]);
//! ```
//!
//! # Precision
//!
//! Every function is generic over [`Real`](okgamut_core::Real). `f64` is the
//! reference precision; `f32` runs the same code and reproduces the same
//! device-level results for the reference colors.
//!
//! # Dependencies
//!
//! - [`okgamut-core`] - Precision trait, space markers, triplets
//! - [`okgamut-math`] - Vec3, Mat3, sign-preserving powers
//! - [`okgamut-transfer`] - sRGB transfer curve
//!
//! # Used By
//!
//! - `okgamut-cli` - command line front end
//! - `okgamut-bench` - benchmarks

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod convert;
mod gamut;
mod manipulate;
mod mapping;
mod oklab;
mod oklch;
pub mod batch;
pub mod matrices;

pub use convert::{
    convert, convert_with, device_to_oklab, device_to_oklch, oklab_to_device,
    oklab_to_device_unmapped, oklab_to_device_with, oklch_to_device, p3_to_srgb,
    p3_to_srgb_unmapped, srgb_to_p3,
};
pub use gamut::{Gamut, GamutId};
pub use manipulate::{darken, interpolate, lerp_oklab, lighten};
pub use mapping::{EPSILON, JND, MappingMode, css4, map_to_gamut_linear};
pub use oklab::{delta_e, lms_to_oklab, oklab_to_lms};
pub use oklch::{ACHROMATIC_EPSILON, oklab_to_oklch, oklch_to_oklab};

// Re-export sub-crates for convenience
pub use okgamut_math as math;
pub use okgamut_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        Gamut, GamutId, MappingMode, darken, delta_e, device_to_oklab, device_to_oklch,
        interpolate, lighten, oklab_to_device, oklab_to_device_unmapped, oklab_to_device_with,
        oklab_to_oklch, oklch_to_device, oklch_to_oklab,
    };

    pub use okgamut_core::prelude::*;
}
