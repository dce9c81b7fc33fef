//! Parallel conversion of color slices.
//!
//! Every element is converted independently, so the work fans out over the
//! global rayon pool with no coordination. Output order matches input order.
//!
//! ```rust
//! use okgamut_color::batch;
//! use okgamut_core::{Srgb, Triplet};
//!
//! let colors = vec![Triplet::<Srgb, i32>::new(255, 0, 0); 4];
//! let labs = batch::device_to_oklab_par::<Srgb, f64>(&colors);
//! let back = batch::oklab_to_device_par::<Srgb, f64>(&labs);
//! assert_eq!(back, colors);
//! ```

use okgamut_core::{Oklab, Real, Triplet};
use rayon::prelude::*;
use tracing::debug;

use crate::convert::{convert_with, device_to_oklab, oklab_to_device_with};
use crate::gamut::Gamut;
use crate::mapping::MappingMode;

/// Converts device colors of gamut `G` to Oklab in parallel.
pub fn device_to_oklab_par<G: Gamut, T: Real>(
    colors: &[Triplet<G, i32>],
) -> Vec<Triplet<Oklab, T>> {
    debug!(gamut = G::NAME, count = colors.len(), "device -> Oklab batch");
    colors.par_iter().map(|&c| device_to_oklab::<G, T>(c)).collect()
}

/// Converts Oklab colors to gamut `G` in parallel, CSS4 mapped.
pub fn oklab_to_device_par<G: Gamut, T: Real>(labs: &[Triplet<Oklab, T>]) -> Vec<Triplet<G, i32>> {
    oklab_to_device_with_par::<G, T>(labs, MappingMode::Css4)
}

/// Converts Oklab colors to gamut `G` in parallel with an explicit mode.
pub fn oklab_to_device_with_par<G: Gamut, T: Real>(
    labs: &[Triplet<Oklab, T>],
    mode: MappingMode,
) -> Vec<Triplet<G, i32>> {
    debug!(gamut = G::NAME, count = labs.len(), %mode, "Oklab -> device batch");
    labs.par_iter()
        .map(|&lab| oklab_to_device_with::<G, T>(lab, mode))
        .collect()
}

/// Converts device colors from gamut `Src` to gamut `Dst` in parallel.
pub fn convert_par<Src: Gamut, Dst: Gamut, T: Real>(
    colors: &[Triplet<Src, i32>],
    mode: MappingMode,
) -> Vec<Triplet<Dst, i32>> {
    debug!(from = Src::NAME, to = Dst::NAME, count = colors.len(), %mode, "gamut conversion batch");
    colors
        .par_iter()
        .map(|&c| convert_with::<Src, Dst, T>(c, mode))
        .collect()
}
