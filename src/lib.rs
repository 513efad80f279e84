#![deny(unsafe_op_in_unsafe_fn)]
#![deny(missing_docs, missing_debug_implementations)]
//! Hex, UTF-8 and UTF-16 conversions over a UTF-16 based string model.
//!
//! Three stateless codecs are provided, each as a module of free functions:
//!
//! * [`hex`] converts between byte sequences and `0x`-prefixed lowercase hex strings.
//! * [`utf8`] converts between text and UTF-8 bytes. It also offers
//!   `string_to_hex_string` / `hex_string_to_string`, which compose with [`hex`].
//! * [`utf16`] converts between text and UTF-16 code units.
//!
//! All functions are pure, so they can be called from any thread without synchronization.
//!
//! # Text model
//!
//! Text is handled as a sequence of UTF-16 code units, the [`WideStr`] type (and
//! its owned form [`WideString`]). Unlike `str`, a `WideStr` can hold unpaired
//! surrogates. The permissive UTF-8 codec encodes such surrogates as three-byte
//! sequences and decodes them back, so text that is not strictly valid Unicode
//! still round-trips.
//!
//! Every function that takes text accepts anything implementing [`CodeUnits`],
//! which includes `str`, `String`, `[u16]` and `WideStr`:
//!
//! ```
//! use utf_helpers::{utf16, utf8};
//!
//! let bytes = utf8::encode("a\u{1F337}");
//! assert_eq!(vec![0x61, 0xF0, 0x9F, 0x8C, 0xB7], bytes);
//! assert_eq!(utf8::decode(&bytes), "a\u{1F337}");
//!
//! assert_eq!("0x61f09f8cb7", utf8::string_to_hex_string("a\u{1F337}"));
//! assert_eq!(vec![0x61, 0xD83C, 0xDF37], utf16::encode("a\u{1F337}"));
//! ```
//!
//! # Malformed input
//!
//! The hex codec and the default UTF-8 codec never fail; malformed input gives
//! well-defined but meaningless output. [`utf16::decode`] fails on a surrogate
//! that is not followed by a low surrogate. For validated UTF-8, use the
//! `*_strict` functions or a [`CodecConfig`] in [`Utf8Mode::Strict`].

pub(crate) mod surrogate;

pub(crate) mod wide_str_ty;

pub(crate) mod wide_string;

pub mod config;

pub mod error;

pub mod hex;

pub mod utf8;

pub mod utf16;

pub use config::{CodecConfig, Utf8Mode};

pub use error::{Error, Result};

pub use wide_str_ty::{CodePoints, CodeUnits, WideStr};

pub use wide_string::WideString;
