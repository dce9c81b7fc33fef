//! LMS <-> Oklab and perceptual distance.
//!
//! ```text
//! LMS --signed cbrt--> LMS' --M2--> Oklab
//! Oklab --M2^-1--> LMS' --cube--> LMS
//! ```
//!
//! The LMS' <-> Oklab matrices are shared by every gamut; the gamut-specific
//! part of the chain lives in [`Gamut`](crate::Gamut).

use okgamut_core::{Lms, Oklab, Real, Triplet};
use okgamut_math::{Mat3, Vec3};

use crate::matrices::{LMS_PRIME_TO_OKLAB, OKLAB_TO_LMS_PRIME};

/// LMS -> Oklab.
///
/// Negative LMS components (from out-of-gamut colors) keep their sign
/// through the cube root.
#[inline]
pub fn lms_to_oklab<T: Real>(lms: Triplet<Lms, T>) -> Triplet<Oklab, T> {
    let lms_prime = Vec3::from_array(lms.to_array()).signed_cbrt();
    let lab = Mat3::<T>::from_f64_rows(LMS_PRIME_TO_OKLAB) * lms_prime;
    Triplet::from_array(lab.to_array())
}

/// Oklab -> LMS.
#[inline]
pub fn oklab_to_lms<T: Real>(lab: Triplet<Oklab, T>) -> Triplet<Lms, T> {
    let lms_prime = Mat3::<T>::from_f64_rows(OKLAB_TO_LMS_PRIME) * Vec3::from_array(lab.to_array());
    Triplet::from_array(lms_prime.cube().to_array())
}

/// Euclidean distance between two Oklab colors.
///
/// `sqrt(dL^2 + da^2 + db^2)`, with no weighting of the a/b axes.
///
/// # Example
///
/// ```rust
/// use okgamut_color::delta_e;
/// use okgamut_core::{Oklab, Triplet};
///
/// let x: Triplet<Oklab, f64> = Triplet::new(0.5, 0.0, 0.0);
/// let y: Triplet<Oklab, f64> = Triplet::new(0.5, 0.03, 0.04);
/// assert!((delta_e(x, y) - 0.05).abs() < 1e-12);
/// ```
#[inline]
pub fn delta_e<T: Real>(x: Triplet<Oklab, T>, y: Triplet<Oklab, T>) -> T {
    Vec3::from_array(x.to_array()).distance(Vec3::from_array(y.to_array()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_lms_is_white() {
        let lab = lms_to_oklab(Triplet::<Lms, f64>::splat(1.0));
        assert_relative_eq!(lab.l(), 1.0, epsilon = 1e-7);
        assert!(lab.a().abs() < 1e-7);
        assert!(lab.b().abs() < 1e-7);
    }

    #[test]
    fn test_negative_lms_survives() {
        let lms: Triplet<Lms, f64> = Triplet::new(-0.02, 0.3, 0.9);
        let lab = lms_to_oklab(lms);
        assert!(lab.l().is_finite() && lab.a().is_finite() && lab.b().is_finite());
        let back = oklab_to_lms(lab);
        for i in 0..3 {
            assert_relative_eq!(back[i], lms[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_delta_e() {
        let x: Triplet<Oklab, f32> = Triplet::new(0.7, 0.1, -0.1);
        assert_eq!(delta_e(x, x), 0.0);
        let y: Triplet<Oklab, f32> = Triplet::new(0.7, 0.1, -0.1 + 0.02);
        assert_relative_eq!(delta_e(x, y), 0.02, epsilon = 1e-6);
        assert_eq!(delta_e(x, y), delta_e(y, x));
    }
}
