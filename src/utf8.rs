//! Conversions between text and UTF-8 byte sequences.
//!
//! The default (permissive) codec trusts its input. Unpaired surrogates are
//! encoded as three-byte sequences, and decoding never fails: continuation
//! bytes are not checked, overlong forms are accepted and a sequence cut off
//! by the end of the input is completed with zero bits. Because decoding yields
//! a [`WideString`], every unit sequence survives an encode/decode round trip,
//! lone surrogates included.
//!
//! The `*_strict` functions validate instead and fail on malformed input.

use crate::{
    config::Utf8Mode,
    error::Result,
    hex,
    surrogate,
    wide_str_ty::{CodeUnits, WideStr},
    wide_string::WideString,
};
use smallvec::{smallvec, SmallVec};
use tracing::{debug, trace};

const MAX_BYTE_COUNT: usize = 4;

const TAG_CONT: u8 = 0b1000_0000;
const TAG_TWO_B: u8 = 0b1100_0000;
const TAG_THREE_B: u8 = 0b1110_0000;
const TAG_FOUR_B: u8 = 0b1111_0000;
const END_ONE_B: u32 = 0x80;
const END_TWO_B: u32 = 0x800;
const END_THREE_B: u32 = 0x10000;

const CONT_VALUE_MASK: u8 = 0b0011_1111;

type ByteBuf = SmallVec<[u8; MAX_BYTE_COUNT]>;

fn len(code_point: u32) -> usize {
    if code_point < END_ONE_B {
        1
    } else if code_point < END_TWO_B {
        2
    } else if code_point < END_THREE_B {
        3
    } else {
        4
    }
}

fn encode_code_point(code_point: u32) -> ByteBuf {
    match len(code_point) {
        1 => smallvec![code_point as u8],
        2 => smallvec![
            (code_point >> 6 & 0x1F) as u8 | TAG_TWO_B,
            (code_point & 0x3F) as u8 | TAG_CONT,
        ],
        3 => smallvec![
            (code_point >> 12 & 0x0F) as u8 | TAG_THREE_B,
            (code_point >> 6 & 0x3F) as u8 | TAG_CONT,
            (code_point & 0x3F) as u8 | TAG_CONT,
        ],
        _ => smallvec![
            (code_point >> 18 & 0x07) as u8 | TAG_FOUR_B,
            (code_point >> 12 & 0x3F) as u8 | TAG_CONT,
            (code_point >> 6 & 0x3F) as u8 | TAG_CONT,
            (code_point & 0x3F) as u8 | TAG_CONT,
        ],
    }
}

/// Encodes text as UTF-8.
///
/// The text is read as UTF-16 code units. A high surrogate directly followed
/// by a low surrogate becomes one four-byte sequence; every other unit,
/// including an unpaired surrogate, is encoded on its own.
///
/// ```
/// assert_eq!(vec![0xF0, 0x9F, 0x8C, 0xB7], utf_helpers::utf8::encode("\u{1F337}"));
/// assert_eq!(vec![0xED, 0xA0, 0x80], utf_helpers::utf8::encode(&[0xD800u16][..]));
/// ```
pub fn encode<T: CodeUnits + ?Sized>(text: &T) -> Vec<u8> {
    let units = text.code_units();
    let text = WideStr::from_units(&units);
    let mut bytes = Vec::with_capacity(length_of(text));
    for code_point in text.code_points() {
        bytes.extend_from_slice(&encode_code_point(code_point));
    }
    bytes
}

/// Encodes text as UTF-8, failing with [`Error::LoneSurrogate`](crate::Error::LoneSurrogate)
/// if the text holds an unpaired surrogate.
pub fn encode_strict<T: CodeUnits + ?Sized>(text: &T) -> Result<Vec<u8>> {
    let units = text.code_units();
    if let Err(e) = WideStr::from_units(&units).try_to_string() {
        debug!(error = %e, "refusing to encode text as strict UTF-8");
        return Err(e);
    }
    Ok(encode(&*units))
}

/// Encodes text as UTF-8 using the given mode.
pub fn encode_with<T: CodeUnits + ?Sized>(text: &T, mode: Utf8Mode) -> Result<Vec<u8>> {
    match mode {
        Utf8Mode::Permissive => Ok(encode(text)),
        Utf8Mode::Strict => encode_strict(text),
    }
}

/// Decodes a UTF-8 byte sequence.
///
/// The length of each sequence is taken from the high bits of its first byte
/// alone, and the low six bits of the following bytes are appended whatever
/// their tag. Four-byte sequences produce a surrogate pair. First bytes in
/// `0x80..=0xBF` are skipped.
///
/// ```
/// let text = utf_helpers::utf8::decode(&[0x61, 0xF0, 0x9F, 0x8C, 0xB7]);
/// assert_eq!(text, "a\u{1F337}");
/// ```
pub fn decode(bytes: &[u8]) -> WideString {
    let mut text = WideString::with_capacity(bytes.len());
    let mut i = 0;
    let next = |i: &mut usize| -> u16 {
        let byte = match bytes.get(*i) {
            Some(byte) => *byte,
            None => {
                trace!(offset = *i, "UTF-8 sequence runs past end of input");
                0
            }
        };
        *i += 1;
        (byte & CONT_VALUE_MASK) as u16
    };
    while i < bytes.len() {
        let t = bytes[i];
        i += 1;
        match t {
            0x00..=0x7F => text.push_unit(t as u16),
            0xC0..=0xDF => {
                let unit = ((t & 0x1F) as u16) << 6 | next(&mut i);
                text.push_unit(unit);
            }
            0xE0..=0xEF => {
                let unit = ((t & 0x0F) as u16) << 12 | next(&mut i) << 6 | next(&mut i);
                text.push_unit(unit);
            }
            0xF0..=0xFF => {
                let value = (((t & 0x07) as i32) << 18
                    | (next(&mut i) as i32) << 12
                    | (next(&mut i) as i32) << 6
                    | next(&mut i) as i32)
                    - surrogate::SUPPLEMENTARY_START as i32;
                // Wrapping casts: overlong input yields units below 0xD800.
                text.push_unit((surrogate::HIGH_SURROGATE_START as i32 + (value >> 10)) as u16);
                text.push_unit((surrogate::LOW_SURROGATE_START as i32 + (value & 0x3FF)) as u16);
            }
            _ => {
                trace!(offset = i - 1, byte = t, "skipping stray UTF-8 continuation byte");
            }
        }
    }
    text
}

/// Decodes a UTF-8 byte sequence, failing with [`Error::InvalidUtf8`](crate::Error::InvalidUtf8)
/// if it is not well-formed.
pub fn decode_strict(bytes: &[u8]) -> Result<WideString> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Ok(WideString::from(s)),
        Err(e) => {
            debug!(valid_up_to = e.valid_up_to(), "rejecting malformed UTF-8");
            Err(e.into())
        }
    }
}

/// Decodes a UTF-8 byte sequence using the given mode.
pub fn decode_with(bytes: &[u8], mode: Utf8Mode) -> Result<WideString> {
    match mode {
        Utf8Mode::Permissive => Ok(decode(bytes)),
        Utf8Mode::Strict => decode_strict(bytes),
    }
}

/// Returns the number of bytes [`encode`] produces for this text.
pub fn length_in_bytes<T: CodeUnits + ?Sized>(text: &T) -> usize {
    length_of(WideStr::from_units(&text.code_units()))
}

fn length_of(text: &WideStr) -> usize {
    text.code_points().map(len).sum()
}

/// Encodes text as UTF-8 and formats the bytes as a `0x`-prefixed hex string.
pub fn string_to_hex_string<T: CodeUnits + ?Sized>(text: &T) -> String {
    hex::from_bytes(encode(text))
}

/// Parses a hex string into bytes and decodes them as UTF-8.
pub fn hex_string_to_string(hex_string: &str) -> WideString {
    decode(&hex::to_bytes(hex_string))
}
