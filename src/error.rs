//! Errors raised by the codecs.
//!
//! Only `Utf16` decoding and the strict `Utf8` mode can fail. The permissive
//! `Utf8` codec and the hex codec never return an error: malformed input is
//! processed on a best-effort basis instead.

use thiserror::Error;

/// The error type for all fallible conversions in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A surrogate unit was not followed by a low surrogate.
    #[error("invalid UTF-16 sequence: first unit is {first:#06x}, second unit is {second:#06x}")]
    InvalidSurrogate {
        /// The surrogate that expected a partner.
        first: u16,
        /// The unit found in its place.
        second: u16,
    },

    /// Two surrogates combined into a value above `U+10FFFF`.
    ///
    /// Happens when a low surrogate is followed by another low surrogate.
    #[error("UTF-16 units {first:#06x} {second:#06x} do not form a valid code point")]
    CodePointOutOfRange {
        /// The leading unit of the pair.
        first: u16,
        /// The trailing unit of the pair.
        second: u16,
    },

    /// A surrogate half without its partner, found where a scalar value was required.
    #[error("lone surrogate {unit:#06x} at unit index {index}")]
    LoneSurrogate {
        /// Position of the unit in the input.
        index: usize,
        /// The offending unit.
        unit: u16,
    },

    /// The byte sequence is not well-formed UTF-8.
    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
