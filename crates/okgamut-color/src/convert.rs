//! Device <-> Oklab entry points.
//!
//! # Chains
//!
//! ```text
//! device --/255, EOTF--> linear --TO_LMS--> LMS --cbrt, M2--> Oklab
//! Oklab --M2^-1, cube--> LMS --FROM_LMS--> linear --[mapping]--> OETF, *255, round --> device
//! ```
//!
//! Every function here is total: device channels outside 0-255 and
//! non-finite Oklab values are processed per IEEE-754 rather than rejected.
//!
//! # Example
//!
//! ```rust
//! use okgamut_color::{device_to_oklab, oklab_to_device, p3_to_srgb, p3_to_srgb_unmapped};
//! use okgamut_core::{DisplayP3, P3, Triplet};
//!
//! let red: P3 = Triplet::new(255, 0, 0);
//! assert_eq!(p3_to_srgb_unmapped(red).to_array(), [279, -58, -38]);
//! assert_eq!(p3_to_srgb(red).to_array(), [255, 11, 12]);
//!
//! let lab = device_to_oklab::<DisplayP3, f64>(red);
//! assert_eq!(oklab_to_device::<DisplayP3, f64>(lab), red);
//! ```

use okgamut_core::{DisplayP3, Oklab, Oklch, P3, Real, Rgb, Srgb, Triplet};

use crate::gamut::Gamut;
use crate::mapping::MappingMode;
use crate::oklch::{oklab_to_oklch, oklch_to_oklab};

/// Device color of gamut `G` -> Oklab.
#[inline]
pub fn device_to_oklab<G: Gamut, T: Real>(device: Triplet<G, i32>) -> Triplet<Oklab, T> {
    G::linear_to_oklab(G::to_linear::<T>(device))
}

/// Oklab -> device color of gamut `G`, gamut mapped with the CSS4 engine.
///
/// The output channels are always in 0-255.
#[inline]
pub fn oklab_to_device<G: Gamut, T: Real>(lab: Triplet<Oklab, T>) -> Triplet<G, i32> {
    oklab_to_device_with::<G, T>(lab, MappingMode::Css4)
}

/// Oklab -> device color of gamut `G` with an explicit mapping mode.
#[inline]
pub fn oklab_to_device_with<G: Gamut, T: Real>(
    lab: Triplet<Oklab, T>,
    mode: MappingMode,
) -> Triplet<G, i32> {
    G::from_linear(mode.apply::<G, T>(lab))
}

/// Oklab -> device color of gamut `G` with no gamut handling.
///
/// Out-of-gamut colors produce channels outside 0-255.
#[inline]
pub fn oklab_to_device_unmapped<G: Gamut, T: Real>(lab: Triplet<Oklab, T>) -> Triplet<G, i32> {
    oklab_to_device_with::<G, T>(lab, MappingMode::Unmapped)
}

/// Device color of gamut `G` -> Oklch.
#[inline]
pub fn device_to_oklch<G: Gamut, T: Real>(device: Triplet<G, i32>) -> Oklch<T> {
    oklab_to_oklch(device_to_oklab::<G, T>(device))
}

/// Oklch -> device color of gamut `G`, CSS4 mapped.
#[inline]
pub fn oklch_to_device<G: Gamut, T: Real>(lch: Oklch<T>) -> Triplet<G, i32> {
    oklab_to_device::<G, T>(oklch_to_oklab(lch))
}

/// Converts a device color from gamut `Src` to gamut `Dst` through Oklab.
///
/// Uses `mode` to bring the color into `Dst`.
#[inline]
pub fn convert_with<Src: Gamut, Dst: Gamut, T: Real>(
    device: Triplet<Src, i32>,
    mode: MappingMode,
) -> Triplet<Dst, i32> {
    oklab_to_device_with::<Dst, T>(device_to_oklab::<Src, T>(device), mode)
}

/// Converts a device color from gamut `Src` to gamut `Dst`, CSS4 mapped.
#[inline]
pub fn convert<Src: Gamut, Dst: Gamut, T: Real>(device: Triplet<Src, i32>) -> Triplet<Dst, i32> {
    convert_with::<Src, Dst, T>(device, MappingMode::Css4)
}

/// sRGB -> Display P3 (`f64`).
///
/// sRGB fits inside P3, so the mapping never has to reduce chroma.
#[inline]
pub fn srgb_to_p3(rgb: Rgb) -> P3 {
    convert::<Srgb, DisplayP3, f64>(rgb)
}

/// Display P3 -> sRGB (`f64`), CSS4 mapped.
#[inline]
pub fn p3_to_srgb(p3: P3) -> Rgb {
    convert::<DisplayP3, Srgb, f64>(p3)
}

/// Display P3 -> sRGB (`f64`) with no gamut handling.
#[inline]
pub fn p3_to_srgb_unmapped(p3: P3) -> Rgb {
    convert_with::<DisplayP3, Srgb, f64>(p3, MappingMode::Unmapped)
}
