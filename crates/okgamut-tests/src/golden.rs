//! Golden device values for the Display P3 -> sRGB reference colors.
//!
//! The tables pin the full chain (EOTF, LMS, Oklab, mapping, OETF,
//! rounding) for the eight corners of the P3 cube. Both precisions must
//! reproduce them exactly.
//!
//! ```bash
//! cargo test --package okgamut-tests golden
//! ```

use okgamut_color::{Gamut, device_to_oklab, oklab_to_device, oklab_to_device_unmapped};
use okgamut_core::{DisplayP3, P3, Real, Rgb, Srgb, Triplet};

/// P3 corner, sRGB with no mapping, sRGB after CSS4 mapping.
const P3_TO_SRGB: [([i32; 3], [i32; 3], [i32; 3]); 8] = [
    ([0, 0, 0], [0, 0, 0], [0, 0, 0]),
    ([255, 0, 0], [279, -58, -38], [255, 11, 12]),
    ([0, 255, 0], [-130, 260, -79], [0, 251, 41]),
    ([0, 0, 255], [0, 0, 266], [0, 0, 255]),
    ([255, 255, 0], [255, 255, -88], [254, 255, 0]),
    ([255, 0, 255], [279, -58, 264], [255, 43, 251]),
    ([0, 255, 255], [-130, 260, 257], [0, 254, 251]),
    ([255, 255, 255], [255, 255, 255], [255, 255, 255]),
];

fn p3_to_srgb<T: Real>(p3: P3) -> (Rgb, Rgb) {
    let lab = device_to_oklab::<DisplayP3, T>(p3);
    (
        oklab_to_device_unmapped::<Srgb, T>(lab),
        oklab_to_device::<Srgb, T>(lab),
    )
}

fn check_table<T: Real>() {
    for (p3, unmapped, mapped) in P3_TO_SRGB {
        let (raw, css) = p3_to_srgb::<T>(Triplet::from_array(p3));
        assert_eq!(raw.to_array(), unmapped, "{} unmapped {p3:?}", T::PRECISION);
        assert_eq!(css.to_array(), mapped, "{} mapped {p3:?}", T::PRECISION);
    }
}

#[test]
fn test_golden_p3_to_srgb_f64() {
    check_table::<f64>();
}

#[test]
fn test_golden_p3_to_srgb_f32() {
    check_table::<f32>();
}

#[test]
fn test_golden_unmapped_is_out_of_gamut() {
    // The six chromatic corners all leave sRGB
    for (p3, unmapped, _) in P3_TO_SRGB.iter().skip(1).take(6) {
        let raw: Rgb = Triplet::from_array(*unmapped);
        assert!(raw.validate_byte_range().is_err(), "{p3:?} -> {raw}");
        let lab = device_to_oklab::<DisplayP3, f64>(Triplet::from_array(*p3));
        assert!(!Srgb::in_gamut(Srgb::oklab_to_linear(lab)));
    }
}

#[test]
fn test_golden_p3_roundtrip() {
    let colors = [
        [0, 0, 0],
        [255, 0, 0],
        [0, 255, 0],
        [0, 0, 255],
        [255, 255, 255],
        [128, 128, 128],
    ];
    for rgb in colors {
        let p3: P3 = Triplet::from_array(rgb);
        let back64 = oklab_to_device::<DisplayP3, f64>(device_to_oklab::<DisplayP3, f64>(p3));
        let back32 = oklab_to_device::<DisplayP3, f32>(device_to_oklab::<DisplayP3, f32>(p3));
        assert_eq!(back64, p3);
        assert_eq!(back32, p3);
    }
}
