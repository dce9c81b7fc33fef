//! Three-channel values tagged with their color space.
//!
//! [`Triplet<S, T>`] is a `[T; 3]` plus a zero-sized `S: Space` marker.
//! Device colors use `T = i32`, everything else uses a [`Real`](crate::Real).
//!
//! ```
//! use okgamut_core::prelude::*;
//!
//! let red: Rgb = Triplet::new(255, 0, 0);
//! let lab: Triplet<Oklab, f64> = Triplet::new(0.628, 0.225, 0.126);
//! assert_eq!(red[0], 255);
//! assert_eq!(lab.to_array()[1], 0.225);
//! ```

use crate::error::{Error, Result};
use crate::space::{DisplayP3, Oklab, Space, Srgb};
use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;
use std::str::FromStr;

/// sRGB device color (conceptually 0-255 per channel).
pub type Rgb = Triplet<Srgb, i32>;

/// Display P3 device color (conceptually 0-255 per channel).
pub type P3 = Triplet<DisplayP3, i32>;

/// Three channel values in color space `S`.
///
/// The channel order is space-specific: R, G, B for device and linear
/// spaces, L, M, S for [`Lms`](crate::Lms), L, a, b for [`Oklab`](crate::Oklab).
#[repr(C)]
#[derive(Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        transparent,
        bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct Triplet<S: Space, T> {
    values: [T; 3],
    #[cfg_attr(feature = "serde", serde(skip))]
    _space: PhantomData<S>,
}

impl<S: Space, T: Copy> Triplet<S, T> {
    /// Creates a triplet from its three channels.
    #[inline]
    pub const fn new(c0: T, c1: T, c2: T) -> Self {
        Self::from_array([c0, c1, c2])
    }

    /// Creates a triplet with all channels set to `v`.
    #[inline]
    pub const fn splat(v: T) -> Self {
        Self::from_array([v, v, v])
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(values: [T; 3]) -> Self {
        Self {
            values,
            _space: PhantomData,
        }
    }

    /// Converts to an array.
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        self.values
    }

    /// Applies `f` to every channel, staying in the same space.
    #[inline]
    pub fn map<F: Fn(T) -> T>(self, f: F) -> Self {
        let [c0, c1, c2] = self.values;
        Self::new(f(c0), f(c1), f(c2))
    }

    /// Returns true if `pred` holds for all three channels.
    #[inline]
    pub fn all<F: Fn(T) -> bool>(self, pred: F) -> bool {
        self.values.iter().all(|&v| pred(v))
    }
}

impl<S: Space> Triplet<S, i32> {
    /// Checks that every channel lies in the 8-bit device range 0..=255.
    ///
    /// The conversion pipeline itself accepts any integer; callers that take
    /// user input (the CLI) use this to reject out-of-range channels.
    pub fn validate_byte_range(&self) -> Result<()> {
        for &value in &self.values {
            if !(0..=255).contains(&value) {
                return Err(Error::ChannelOutOfRange {
                    space: S::NAME,
                    value,
                });
            }
        }
        Ok(())
    }
}

impl<T: Copy> Triplet<Oklab, T> {
    /// Perceived lightness.
    #[inline]
    pub fn l(&self) -> T {
        self.values[0]
    }

    /// Green-red axis.
    #[inline]
    pub fn a(&self) -> T {
        self.values[1]
    }

    /// Blue-yellow axis.
    #[inline]
    pub fn b(&self) -> T {
        self.values[2]
    }
}

impl<S: Space, T> Index<usize> for Triplet<S, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.values[i]
    }
}

impl<S: Space, T: Copy> From<[T; 3]> for Triplet<S, T> {
    #[inline]
    fn from(values: [T; 3]) -> Self {
        Self::from_array(values)
    }
}

impl<S: Space, T: Copy> From<Triplet<S, T>> for [T; 3] {
    #[inline]
    fn from(t: Triplet<S, T>) -> Self {
        t.to_array()
    }
}

impl<S: Space, T: fmt::Debug> fmt::Debug for Triplet<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(&format!("Triplet<{}>", S::NAME))
            .field(&self.values[0])
            .field(&self.values[1])
            .field(&self.values[2])
            .finish()
    }
}

impl<S: Space, T: fmt::Display> fmt::Display for Triplet<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c0, c1, c2] = &self.values;
        if let Some(p) = f.precision() {
            write!(f, "{}({:.p$}, {:.p$}, {:.p$})", S::NAME, c0, c1, c2, p = p)
        } else {
            write!(f, "{}({}, {}, {})", S::NAME, c0, c1, c2)
        }
    }
}

/// Parses device triplets written as `"r g b"`, `"r,g,b"` or `"r, g, b"`.
///
/// No range check is applied; see [`Triplet::validate_byte_range`].
impl<S: Space> FromStr for Triplet<S, i32> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        if parts.len() != 3 {
            return Err(Error::InvalidTriplet {
                input: s.to_string(),
                reason: format!("expected 3 channels, found {}", parts.len()),
            });
        }

        let mut values = [0i32; 3];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|e| Error::InvalidTriplet {
                input: s.to_string(),
                reason: format!("'{part}': {e}"),
            })?;
        }
        Ok(Self::from_array(values))
    }
}
