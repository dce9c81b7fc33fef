//! 3D vector type for color triplets.
//!
//! [`Vec3`] is the untagged working type of the conversion chains. Tagged
//! values ([`Triplet`](okgamut_core::Triplet)) are unwrapped into a `Vec3`,
//! transformed, and wrapped again in their destination space.
//!
//! # Usage
//!
//! ```rust
//! use okgamut_math::Vec3;
//!
//! let rgb = Vec3::new(255.0_f64, 128.0, 0.0);
//! let unit = rgb.div_scalar(255.0);
//! let clamped = (unit * 2.0).clamp01();
//! ```

use okgamut_core::Real;
use std::ops::{Index, Mul, Sub};

use crate::signed::{signed_cbrt, signed_pow};

/// A 3D vector of [`Real`] components.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z` or index `[0]`, `[1]`, `[2]`.
/// For RGB: x=R, y=G, z=B. For Oklab: x=L, y=a, z=b.
///
/// # Example
///
/// ```rust
/// use okgamut_math::Vec3;
///
/// let lab = Vec3::new(0.5_f64, 0.1, -0.1);
/// assert_eq!(lab[0], 0.5);
/// assert!((lab.length() - 0.5196).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3<T> {
    /// X component (R for RGB, L for Oklab)
    pub x: T,
    /// Y component (G for RGB, a for Oklab)
    pub y: T,
    /// Z component (B for RGB, b for Oklab)
    pub z: T,
}

impl<T: Real> Vec3<T> {
    /// Creates a new vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    ///
    /// ```rust
    /// use okgamut_math::Vec3;
    ///
    /// let gray = Vec3::splat(0.5_f32);
    /// assert_eq!(gray, Vec3::new(0.5, 0.5, 0.5));
    /// ```
    #[inline]
    pub fn splat(v: T) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub fn from_array(a: [T; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Applies `f` to every component.
    #[inline]
    pub fn map<F: Fn(T) -> T>(self, f: F) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> T {
        self.dot(self).sqrt()
    }

    /// Euclidean distance to another vector.
    #[inline]
    pub fn distance(self, other: Self) -> T {
        (self - other).length()
    }

    /// Multiplies every component by a scalar.
    #[inline]
    pub fn mul_scalar(self, s: T) -> Self {
        self.map(|v| v * s)
    }

    /// Divides every component by a scalar.
    #[inline]
    pub fn div_scalar(self, s: T) -> Self {
        self.map(|v| v / s)
    }

    /// Component-wise `sign(v) * |v|^p`.
    #[inline]
    pub fn signed_pow(self, p: T) -> Self {
        self.map(|v| signed_pow(v, p))
    }

    /// Component-wise sign-preserving cube root.
    #[inline]
    pub fn signed_cbrt(self) -> Self {
        self.map(signed_cbrt)
    }

    /// Component-wise cube. The sign follows from the odd power.
    #[inline]
    pub fn cube(self) -> Self {
        self.map(|v| v * v * v)
    }

    /// Clamps each component to [min, max].
    ///
    /// NaN components pass through unchanged.
    #[inline]
    pub fn clamp(self, min: T, max: T) -> Self {
        self.map(|v| {
            if v < min {
                min
            } else if v > max {
                max
            } else {
                v
            }
        })
    }

    /// Clamps each component to [0, 1].
    #[inline]
    pub fn clamp01(self) -> Self {
        self.clamp(T::zero(), T::one())
    }

    /// Returns true if every component lies in [min, max].
    ///
    /// NaN components are never in range.
    #[inline]
    pub fn in_range(self, min: T, max: T) -> bool {
        [self.x, self.y, self.z]
            .iter()
            .all(|&v| v >= min && v <= max)
    }
}

// Indexing
impl<T> Index<usize> for Vec3<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

// Vec3 - Vec3
impl<T: Real> Sub for Vec3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Vec3 * T
impl<T: Real> Mul<T> for Vec3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        self.mul_scalar(rhs)
    }
}
