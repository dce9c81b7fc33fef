//! Oklab transform constants.
//!
//! Stored as `f64` and narrowed once per precision with
//! [`Mat3::from_f64_rows`](okgamut_math::Mat3::from_f64_rows). The values are
//! the CSS Color 4 ones and must stay bit-exact: the golden test vectors
//! depend on every digit.
//!
//! The gamut-specific pairs map between a linear RGB space and LMS cone
//! response. The shared pair maps between cube-rooted LMS (LMS') and Oklab.

#![allow(clippy::excessive_precision)]

/// Linear sRGB -> LMS.
pub const LINEAR_SRGB_TO_LMS: [[f64; 3]; 3] = [
    [0.4122214694707629, 0.5363325372617349, 0.0514459932675022],
    [0.2119034958178251, 0.6806995506452345, 0.1073969535369406],
    [0.0883024591900564, 0.2817188391361215, 0.6299787016738222],
];

/// LMS -> linear sRGB.
pub const LMS_TO_LINEAR_SRGB: [[f64; 3]; 3] = [
    [4.0767416360759601, -3.3077115392580625, 0.2309699031821046],
    [-1.2684379732850317, 2.6097573492876882, -0.3413193760026572],
    [-0.0041960761386754, -0.7034186179359361, 1.7076146940746113],
];

/// Linear Display P3 -> LMS.
pub const LINEAR_P3_TO_LMS: [[f64; 3]; 3] = [
    [0.4813798527499544, 0.4621183710113182, 0.0565017762387275],
    [0.2288319418112447, 0.6532168193835679, 0.1179512388051878],
    [0.0839457523229932, 0.2241652709775665, 0.6918889766994405],
];

/// LMS -> linear Display P3.
pub const LMS_TO_LINEAR_P3: [[f64; 3]; 3] = [
    [3.1277689713618742, -2.2571357625916386, 0.1293667912297653],
    [-1.0910090184377974, 2.4133317103069212, -0.3223226918691247],
    [-0.0260108019385704, -0.5080413317041669, 1.5340521336427371],
];

/// LMS' (cube-rooted LMS) -> Oklab. Shared by every gamut.
pub const LMS_PRIME_TO_OKLAB: [[f64; 3]; 3] = [
    [0.2104542683093140, 0.7936177747023054, -0.0040720430116193],
    [1.9779985324311684, -2.4285922420485799, 0.4505937096174110],
    [0.0259040424655478, 0.7827717124575296, -0.8086757549230774],
];

/// Oklab -> LMS'. Inverse of [`LMS_PRIME_TO_OKLAB`].
pub const OKLAB_TO_LMS_PRIME: [[f64; 3]; 3] = [
    [1.0, 0.3963377773761749, 0.2158037573099136],
    [1.0, -0.1055613458156586, -0.0638541728258133],
    [1.0, -0.0894841775298119, -1.2914855480194092],
];

#[cfg(test)]
mod tests {
    use super::*;
    use okgamut_math::Mat3;

    fn assert_inverse_pair(forward: [[f64; 3]; 3], inverse: [[f64; 3]; 3], tolerance: f64) {
        let product = Mat3::<f64>::from_rows(forward) * Mat3::from_rows(inverse);
        assert!(
            product.approx_eq(&Mat3::identity(), tolerance),
            "not an inverse pair: {product:?}"
        );
    }

    #[test]
    fn test_inverse_pairs() {
        assert_inverse_pair(LINEAR_SRGB_TO_LMS, LMS_TO_LINEAR_SRGB, 1e-9);
        assert_inverse_pair(LINEAR_P3_TO_LMS, LMS_TO_LINEAR_P3, 1e-9);
        assert_inverse_pair(LMS_PRIME_TO_OKLAB, OKLAB_TO_LMS_PRIME, 1e-7);
    }

    #[test]
    fn test_white_maps_to_unit_lms() {
        // D65 white is (1, 1, 1) in LMS for both gamuts
        for m in [LINEAR_SRGB_TO_LMS, LINEAR_P3_TO_LMS] {
            for row in m {
                assert!((row.iter().sum::<f64>() - 1.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_computed_inverse_matches() {
        let inv = Mat3::<f64>::from_rows(LINEAR_SRGB_TO_LMS).inverse().unwrap();
        assert!(inv.approx_eq(&Mat3::from_rows(LMS_TO_LINEAR_SRGB), 1e-6));
    }
}
