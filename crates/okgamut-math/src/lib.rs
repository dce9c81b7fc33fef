//! # okgamut-math
//!
//! Math primitives for the okgamut conversion chains:
//!
//! - [`Mat3`] - 3x3 matrices for linear RGB / LMS / Oklab transforms
//! - [`Vec3`] - 3-vectors with elementwise scalar arithmetic
//! - [`signed_pow`], [`signed_cbrt`] - fractional powers that keep the sign
//! - [`lerp`], [`normalize_degrees`] - scalar helpers
//!
//! Everything is generic over [`Real`](okgamut_core::Real), so the same code
//! serves the `f64` and `f32` pipelines.
//!
//! # Design
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use okgamut_math::{Mat3, Vec3};
//!
//! let to_lms = Mat3::<f64>::from_f64_rows([
//!     [0.4122214694707629, 0.5363325372617349, 0.0514459932675022],
//!     [0.2119034958178251, 0.6806995506452345, 0.1073969535369406],
//!     [0.0883024591900564, 0.2817188391361215, 0.6299787016738222],
//! ]);
//!
//! let lms = to_lms * Vec3::new(1.0, 0.0, 0.0);
//! let lms_prime = lms.signed_cbrt();
//! ```
//!
//! # Used By
//!
//! - `okgamut-transfer` - sign handling in the transfer curves
//! - `okgamut-color` - conversion chains and distance

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod interp;
mod mat3;
mod signed;
mod vec3;

pub use interp::*;
pub use mat3::*;
pub use signed::*;
pub use vec3::*;
