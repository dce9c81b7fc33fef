//! # okgamut-core
//!
//! Core types shared by every okgamut crate.
//!
//! - [`Real`] - floating point precision used by the pipeline (`f64` or `f32`)
//! - [`Space`] - zero-sized color space markers ([`Srgb`], [`DisplayP3`], [`Oklab`], ...)
//! - [`Triplet`] - three channels tagged with their color space at compile time
//! - [`Oklch`] and [`Hue`] - cylindrical Oklab with an explicit "no hue" state
//! - [`Error`] - failures at the parsing edges (gamut names, triplet strings)
//!
//! ## Design Philosophy
//!
//! A linear-sRGB triplet and an Oklab triplet are both "three floats", but they
//! must never be mixed. The space marker is a phantom type parameter, so the
//! compiler rejects such mistakes without any runtime tag:
//!
//! ```compile_fail
//! use okgamut_core::{LinearSrgb, Oklab, Triplet};
//!
//! let lab: Triplet<Oklab, f64> = Triplet::new(0.5, 0.0, 0.0);
//! let linear: Triplet<LinearSrgb, f64> = lab; // mismatched types
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! okgamut-core (this crate)
//!    ^
//!    +-- okgamut-math (Vec3, Mat3, signed powers)
//!    +-- okgamut-transfer (sRGB EOTF/OETF)
//!    +-- okgamut-color (conversion chains, gamut mapping)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize/deserialize [`Triplet`], [`Hue`] and [`Oklch`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod lch;
pub mod real;
pub mod space;
pub mod triplet;

pub use error::{Error, Result};
pub use lch::{Hue, Oklch};
pub use real::Real;
pub use space::*;
pub use triplet::{P3, Rgb, Triplet};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::lch::{Hue, Oklch};
    pub use crate::real::Real;
    pub use crate::space::{DisplayP3, LinearP3, LinearSrgb, Lms, Oklab, Space, Srgb};
    pub use crate::triplet::{P3, Rgb, Triplet};
}
