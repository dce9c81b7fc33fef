//! 3x3 matrix type for color transformations.
//!
//! [`Mat3`] carries the linear RGB -> LMS, LMS' -> Oklab and inverse
//! transforms.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! Each row is accumulated left to right: `(m0*x + m1*y) + m2*z`.

use crate::Vec3;
use okgamut_core::Real;
use std::ops::{Index, Mul};

/// A 3x3 matrix for color transformations.
///
/// # Example
///
/// ```rust
/// use okgamut_math::{Mat3, Vec3};
///
/// let identity = Mat3::<f64>::identity();
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(identity * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3<T> {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[T; 3]; 3],
}

impl<T: Real> Mat3<T> {
    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[T; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from `f64` rows, rounding each element to `T`.
    ///
    /// Transform constants are kept as `f64` literals and narrowed once per
    /// precision, rounding to nearest.
    #[inline]
    pub fn from_f64_rows(rows: [[f64; 3]; 3]) -> Self {
        Self::from_rows(rows.map(|row| row.map(T::cast_f64)))
    }

    /// Identity matrix.
    #[inline]
    pub fn identity() -> Self {
        let (o, z) = (T::one(), T::zero());
        Self::from_rows([[o, z, z], [z, o, z], [z, z, o]])
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> T {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the matrix is singular. The color pipeline never
    /// inverts at runtime (the inverse pairs are fixed constants); this is
    /// used to check those pairs.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < T::cast_f64(1e-10) {
            return None;
        }

        let m = &self.m;
        let inv_det = T::one() / det;

        // Cofactor matrix, transposed and scaled by 1/det
        Some(Self::from_rows([
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
            ],
        ]))
    }

    /// Transforms a Vec3 by this matrix.
    ///
    /// Equivalent to `matrix * vector`.
    #[inline]
    pub fn transform(&self, v: Vec3<T>) -> Vec3<T> {
        let row = |r: &[T; 3]| r[0] * v.x + r[1] * v.y + r[2] * v.z;
        Vec3::new(row(&self.m[0]), row(&self.m[1]), row(&self.m[2]))
    }

    /// Multiplies two matrices.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let cell = |i: usize, j: usize| {
            self.m[i][0] * other.m[0][j]
                + self.m[i][1] * other.m[1][j]
                + self.m[i][2] * other.m[2][j]
        };
        Self::from_rows([0, 1, 2].map(|i| [0, 1, 2].map(|j| cell(i, j))))
    }

    /// Returns true if every element is within `tolerance` of `other`.
    pub fn approx_eq(&self, other: &Self, tolerance: T) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (*a - *b).abs() <= tolerance)
    }
}

// Mat3 * Vec3
impl<T: Real> Mul<Vec3<T>> for Mat3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn mul(self, rhs: Vec3<T>) -> Vec3<T> {
        self.transform(rhs)
    }
}

// Mat3 * Mat3
impl<T: Real> Mul for Mat3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl<T> Index<usize> for Mat3<T> {
    type Output = [T; 3];

    #[inline]
    fn index(&self, i: usize) -> &[T; 3] {
        &self.m[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat3_identity() {
        let v = Vec3::new(1.0_f64, 2.0, 3.0);
        assert_eq!(Mat3::identity() * v, v);
    }

    #[test]
    fn test_mat3_determinant() {
        let m = Mat3::<f64>::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        assert!((m.determinant() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_mat3_inverse() {
        let m = Mat3::<f64>::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        let inv = m.inverse().unwrap();
        assert!((m * inv).approx_eq(&Mat3::identity(), 1e-12));
    }

    #[test]
    fn test_mat3_singular() {
        let m = Mat3::<f32>::from_rows([
            [1.0, 2.0, 3.0],
            [2.0, 4.0, 6.0], // Row 2 = 2 * Row 1
            [1.0, 1.0, 1.0],
        ]);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_from_f64_rows_narrows() {
        let rows = [[0.4122214694707629, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let m = Mat3::<f32>::from_f64_rows(rows);
        assert_eq!(m[0][0], 0.4122214694707629_f64 as f32);
        assert_eq!(Mat3::<f64>::from_f64_rows(rows).m, rows);
    }

    #[test]
    fn test_transform_accumulates_left_to_right() {
        let m = Mat3::<f64>::from_rows([[0.1, 0.2, 0.3], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        let v = Vec3::new(0.7, 0.11, 0.13);
        assert_eq!((m * v).x, 0.1 * 0.7 + 0.2 * 0.11 + 0.3 * 0.13);
    }
}
