//! Gamut mapping.
//!
//! Implements the CSS Color 4 gamut mapping algorithm: keep lightness and
//! hue, and reduce chroma by bisection until the color either fits the
//! gamut or clips to something indistinguishable from it.
//!
//! # Algorithm
//!
//! ```text
//! L >= 1                         -> white
//! L <= 0                         -> black
//! in gamut                       -> unchanged
//! deltaE(clip(x), x) < JND       -> clip(x)
//! otherwise bisect chroma in [0, C]:
//!     candidate in gamut (while still tracking gamut) -> raise min
//!     deltaE(clip(candidate), candidate) < JND         -> raise min, stop tracking gamut
//!     otherwise                                        -> lower max
//! ```
//!
//! The bisection tracks two acceptance criteria. It starts by requiring
//! strict gamut membership and, the first time a clipped candidate is
//! within [`JND`] of its unclipped self, switches permanently to the
//! perceptual criterion. The switch never reverts.
//!
//! The search only ever lowers chroma, but an accepted clip can land
//! slightly above the input chroma (by less than [`JND`]). Infinite chroma starts the
//! search from the largest finite value, so the loop always ends after about
//! `log2(max / EPSILON)` steps.
//!
//! # Modes
//!
//! [`MappingMode`] selects between the engine, a plain clip, and no mapping
//! at all (for inspecting raw out-of-gamut values).

use std::fmt;
use std::str::FromStr;

use okgamut_core::{Error, Oklab, Real, Triplet};
use tracing::{debug, trace};

use crate::gamut::Gamut;
use crate::oklab::delta_e;
use crate::oklch::{oklab_to_oklch, oklch_to_oklab};

/// Just noticeable difference in Oklab units.
pub const JND: f64 = 0.02;

/// Chroma convergence tolerance of the bisection.
pub const EPSILON: f64 = 0.0001;

/// How out-of-gamut Oklab colors are brought to device values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MappingMode {
    /// CSS Color 4 chroma reduction.
    #[default]
    Css4,
    /// Per-channel clamp of the linear values.
    Clip,
    /// No mapping; device channels may fall outside 0-255.
    Unmapped,
}

impl MappingMode {
    /// All modes, in CLI listing order.
    pub const ALL: [MappingMode; 3] = [MappingMode::Css4, MappingMode::Clip, MappingMode::Unmapped];

    /// Name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            MappingMode::Css4 => "css4",
            MappingMode::Clip => "clip",
            MappingMode::Unmapped => "none",
        }
    }

    /// Maps an Oklab color to linear values of gamut `G` using this mode.
    pub fn apply<G: Gamut, T: Real>(self, lab: Triplet<Oklab, T>) -> Triplet<G::Linear, T> {
        match self {
            MappingMode::Css4 => map_to_gamut_linear::<G, T>(lab),
            MappingMode::Clip => G::clip(G::oklab_to_linear(lab)),
            MappingMode::Unmapped => G::oklab_to_linear(lab),
        }
    }
}

impl fmt::Display for MappingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MappingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "css4" | "css" => Ok(MappingMode::Css4),
            "clip" => Ok(MappingMode::Clip),
            "none" | "unmapped" => Ok(MappingMode::Unmapped),
            _ => Err(Error::UnknownMappingMode(s.to_string())),
        }
    }
}

/// Maps an Oklab color into gamut `G`, returning linear values.
///
/// The result is always within [0, 1] per channel (NaN input aside). See the
/// module docs for the algorithm.
///
/// # Example
///
/// ```rust
/// use okgamut_color::{Gamut, map_to_gamut_linear};
/// use okgamut_core::{Oklab, Srgb, Triplet};
///
/// // Saturated P3 green is outside sRGB
/// let lab: Triplet<Oklab, f64> = Triplet::new(0.8488, -0.3042, 0.2080);
/// assert!(!Srgb::in_gamut(Srgb::oklab_to_linear(lab)));
/// let linear = map_to_gamut_linear::<Srgb, f64>(lab);
/// assert!(Srgb::in_gamut(linear));
/// ```
pub fn map_to_gamut_linear<G: Gamut, T: Real>(lab: Triplet<Oklab, T>) -> Triplet<G::Linear, T> {
    let lch = oklab_to_oklch(lab);

    if lch.l >= T::one() {
        return Triplet::splat(T::one());
    }
    if lch.l <= T::zero() {
        return Triplet::splat(T::zero());
    }

    let linear = G::oklab_to_linear(lab);
    if G::in_gamut(linear) {
        return linear;
    }

    let jnd = T::cast_f64(JND);
    let eps = T::cast_f64(EPSILON);

    let mut clipped = G::clip(linear);
    if delta_e(G::linear_to_oklab(clipped), lab) < jnd {
        trace!(gamut = G::NAME, "clip within JND, no search");
        return clipped;
    }

    // Infinite chroma searches from the largest finite value instead
    let mut min = T::zero();
    let mut max = if lch.c.is_infinite() { T::max_value() } else { lch.c };
    let mut min_in_gamut = true;
    let mut iterations = 0u32;

    while max - min > eps {
        iterations += 1;
        let chroma = (min + max) / T::cast_f64(2.0);
        let candidate_lab = oklch_to_oklab(lch.with_chroma(chroma));
        let candidate = G::oklab_to_linear(candidate_lab);

        if min_in_gamut && G::in_gamut(candidate) {
            min = chroma;
            trace!(iterations, chroma = chroma.to_f64_lossless(), "candidate in gamut");
            continue;
        }

        clipped = G::clip(candidate);
        let e = delta_e(G::linear_to_oklab(clipped), candidate_lab);
        trace!(
            iterations,
            chroma = chroma.to_f64_lossless(),
            delta_e = e.to_f64_lossless(),
            min_in_gamut,
            "candidate clipped"
        );

        if e < jnd {
            if jnd - e < eps {
                break;
            }
            min_in_gamut = false;
            min = chroma;
        } else {
            max = chroma;
        }
    }

    debug!(
        gamut = G::NAME,
        precision = T::PRECISION,
        iterations,
        chroma_in = lch.c.to_f64_lossless(),
        chroma_out = min.to_f64_lossless(),
        "gamut mapped"
    );

    G::clip(clipped)
}

/// Maps an Oklab color into gamut `G` and encodes it to device values.
///
/// The output channels are always in 0-255.
#[inline]
pub fn css4<G: Gamut, T: Real>(lab: Triplet<Oklab, T>) -> Triplet<G, i32> {
    G::from_linear(map_to_gamut_linear::<G, T>(lab))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use okgamut_core::{DisplayP3, Hue, Oklch, Srgb};

    fn lab(l: f64, a: f64, b: f64) -> Triplet<Oklab, f64> {
        Triplet::new(l, a, b)
    }

    #[test]
    fn test_lightness_bounds() {
        for (a, b) in [(0.0, 0.0), (0.4, -0.4), (-1.0, 2.0)] {
            assert_eq!(css4::<Srgb, f64>(lab(1.0, a, b)).to_array(), [255; 3]);
            assert_eq!(css4::<Srgb, f64>(lab(1.7, a, b)).to_array(), [255; 3]);
            assert_eq!(css4::<DisplayP3, f64>(lab(0.0, a, b)).to_array(), [0; 3]);
            assert_eq!(css4::<DisplayP3, f64>(lab(-0.3, a, b)).to_array(), [0; 3]);
        }
    }

    #[test]
    fn test_in_gamut_passthrough() {
        let x = lab(0.6, 0.05, -0.02);
        let linear = map_to_gamut_linear::<Srgb, f64>(x);
        assert_eq!(linear, Srgb::oklab_to_linear(x));
    }

    #[test]
    fn test_result_is_in_gamut() {
        for i in 0..36 {
            let h = (i as f64 * 10.0).to_radians();
            for &l in &[0.1, 0.3, 0.5, 0.7, 0.9, 0.99] {
                let x = lab(l, 0.4 * h.cos(), 0.4 * h.sin());
                let linear = map_to_gamut_linear::<Srgb, f64>(x);
                assert!(Srgb::in_gamut(linear), "{x} -> {linear}");
            }
        }
    }

    #[test]
    fn test_chroma_exceeds_input_by_less_than_jnd() {
        for i in 0..24 {
            let h = (i as f64 * 15.0).to_radians();
            let x = lab(0.65, 0.35 * h.cos(), 0.35 * h.sin());
            let mapped = Srgb::linear_to_oklab(map_to_gamut_linear::<Srgb, f64>(x));
            let c_in = oklab_to_oklch(x).c;
            let c_out = oklab_to_oklch(mapped).c;
            assert!(c_out <= c_in + JND, "chroma {c_in} -> {c_out}");
        }
    }

    #[test]
    fn test_early_clip_can_add_chroma() {
        // Clipping within JND is accepted even when it moves outwards
        let x = oklch_to_oklab(Oklch::new(0.97, 0.24, Hue::Degrees(106.0)));
        let mapped = DisplayP3::linear_to_oklab(map_to_gamut_linear::<DisplayP3, f64>(x));
        let c_out = oklab_to_oklch(mapped).c;
        assert!(c_out > 0.24);
        assert_relative_eq!(c_out, 0.24265, epsilon = 1e-5);
    }

    #[test]
    fn test_extreme_chroma_terminates() {
        let reference = css4::<Srgb, f64>(lab(0.5, 1.0, 0.0));
        assert_eq!(reference.to_array(), [187, 0, 94]);
        for a in [1e10, 1e200, f64::MAX, f64::INFINITY] {
            assert_eq!(css4::<Srgb, f64>(lab(0.5, a, 0.0)), reference, "a = {a}");
        }

        let x: Triplet<Oklab, f32> = Triplet::new(0.5, f32::INFINITY, f32::INFINITY);
        assert!(css4::<DisplayP3, f32>(x).validate_byte_range().is_ok());
        assert!(css4::<Srgb, f64>(lab(0.5, f64::NEG_INFINITY, 0.0)).validate_byte_range().is_ok());
    }

    #[test]
    fn test_mode_names() {
        for mode in MappingMode::ALL {
            assert_eq!(mode.to_string().parse::<MappingMode>().unwrap(), mode);
        }
        assert_eq!("unmapped".parse::<MappingMode>().unwrap(), MappingMode::Unmapped);
        assert_eq!("CSS4".parse::<MappingMode>().unwrap(), MappingMode::Css4);
        assert_eq!(
            "perceptual".parse::<MappingMode>(),
            Err(Error::UnknownMappingMode("perceptual".into()))
        );
        assert_eq!(MappingMode::default(), MappingMode::Css4);
    }

    #[test]
    fn test_mode_apply() {
        let x = lab(0.7, 0.3, 0.0);
        let raw = MappingMode::Unmapped.apply::<Srgb, f64>(x);
        assert!(!Srgb::in_gamut(raw));
        assert_eq!(MappingMode::Clip.apply::<Srgb, f64>(x), Srgb::clip(raw));
        assert!(Srgb::in_gamut(MappingMode::Css4.apply::<Srgb, f64>(x)));
    }

    mod proptests {
        use super::*;
        use crate::convert::{device_to_oklab, oklab_to_device};
        use proptest::prelude::*;

        fn oklab() -> impl Strategy<Value = Triplet<Oklab, f64>> {
            (0.01_f64..0.99, -0.5_f64..0.5, -0.5_f64..0.5)
                .prop_map(|(l, a, b)| Triplet::new(l, a, b))
        }

        fn device<G: Gamut>() -> impl Strategy<Value = Triplet<G, i32>> {
            (0..=255_i32, 0..=255_i32, 0..=255_i32).prop_map(|(r, g, b)| Triplet::new(r, g, b))
        }

        proptest! {
            #[test]
            fn mapped_is_in_gamut(x in oklab()) {
                prop_assert!(Srgb::in_gamut(map_to_gamut_linear::<Srgb, f64>(x)));
                prop_assert!(DisplayP3::in_gamut(map_to_gamut_linear::<DisplayP3, f64>(x)));
            }

            #[test]
            fn chroma_exceeds_input_by_less_than_jnd(x in oklab()) {
                let c_in = oklab_to_oklch(x).c;
                let srgb = Srgb::linear_to_oklab(map_to_gamut_linear::<Srgb, f64>(x));
                let p3 = DisplayP3::linear_to_oklab(map_to_gamut_linear::<DisplayP3, f64>(x));
                prop_assert!(oklab_to_oklch(srgb).c <= c_in + JND);
                prop_assert!(oklab_to_oklch(p3).c <= c_in + JND);
            }

            #[test]
            fn in_gamut_srgb_is_unchanged(c in device::<Srgb>()) {
                prop_assert_eq!(oklab_to_device::<Srgb, f64>(device_to_oklab::<Srgb, f64>(c)), c);
                prop_assert_eq!(oklab_to_device::<Srgb, f32>(device_to_oklab::<Srgb, f32>(c)), c);
            }

            #[test]
            fn in_gamut_p3_is_unchanged(c in device::<DisplayP3>()) {
                let lab64 = device_to_oklab::<DisplayP3, f64>(c);
                let lab32 = device_to_oklab::<DisplayP3, f32>(c);
                prop_assert_eq!(oklab_to_device::<DisplayP3, f64>(lab64), c);
                prop_assert_eq!(oklab_to_device::<DisplayP3, f32>(lab32), c);
            }
        }
    }
}
