//! Error types for okgamut.
//!
//! The conversion and gamut-mapping functions are total over IEEE-754
//! values and never fail. Errors only arise at the edges where text is
//! turned into typed values: gamut names, mapping mode names and device
//! triplets typed by a user.
//!
//! # Usage
//!
//! ```rust
//! use okgamut_core::{Error, Rgb};
//!
//! let parsed: Result<Rgb, Error> = "255 0".parse();
//! assert!(parsed.is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while interpreting user-facing input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Gamut name not recognized.
    #[error("unknown gamut '{0}' (expected one of: srgb, p3)")]
    UnknownGamut(String),

    /// Mapping mode name not recognized.
    #[error("unknown mapping mode '{0}' (expected one of: css4, clip, none)")]
    UnknownMappingMode(String),

    /// Triplet string could not be parsed.
    #[error("invalid triplet '{input}': {reason}")]
    InvalidTriplet {
        /// The offending input.
        input: String,
        /// Why parsing failed.
        reason: String,
    },

    /// Device channel outside 0..=255.
    #[error("{space} channel value {value} is outside 0..=255")]
    ChannelOutOfRange {
        /// Name of the device space.
        space: &'static str,
        /// The offending channel value.
        value: i32,
    },
}
