//! Conversions between text and UTF-16 code-unit sequences.
//!
//! Both directions go through code points: encoding splits supplementary code
//! points into surrogate pairs, decoding joins surrogate pairs back and rejects
//! a surrogate that is not followed by a low surrogate.

use crate::{
    error::{Error, Result},
    surrogate,
    wide_str_ty::{CodeUnits, WideStr},
    wide_string::WideString,
};
use tracing::debug;

/// Encodes text as UTF-16 code units.
///
/// ```
/// assert_eq!(vec![0x61, 0xD83C, 0xDF37], utf_helpers::utf16::encode("a\u{1F337}"));
/// ```
pub fn encode<T: CodeUnits + ?Sized>(text: &T) -> Vec<u16> {
    let units = text.code_units();
    let text = WideStr::from_units(&units);
    let mut encoded = Vec::with_capacity(length_of(text));
    for code_point in text.code_points() {
        encoded.extend_from_slice(&surrogate::encode_code_point(code_point));
    }
    encoded
}

/// Decodes a sequence of UTF-16 code units.
///
/// A surrogate (high or low) must be followed by a low surrogate, otherwise
/// [`Error::InvalidSurrogate`] is returned. The final unit is not checked when
/// it has no successor left to pair with, so a trailing lone surrogate is kept.
///
/// ```
/// use utf_helpers::{utf16, Error};
///
/// assert_eq!(utf16::decode(&[0xD83C, 0xDF37]).unwrap(), "\u{1F337}");
/// assert_eq!(
///     Err(Error::InvalidSurrogate { first: 0xD800, second: 0x41 }),
///     utf16::decode(&[0xD800, 0x41]),
/// );
/// ```
pub fn decode(units: &[u16]) -> Result<WideString> {
    let mut text = WideString::with_capacity(units.len());
    let mut rest = units;
    loop {
        match *rest {
            [] => break,
            [last] => {
                text.push_code_point(last as u32);
                break;
            }
            [first, second, ref tail @ ..] if surrogate::is_surrogate(first) => {
                if !surrogate::is_low_surrogate(second) {
                    debug!(first, second, "surrogate not followed by a low surrogate");
                    return Err(Error::InvalidSurrogate { first, second });
                }
                let code_point = (first - surrogate::HIGH_SURROGATE_START) as u32 * 0x400
                    + (second - surrogate::LOW_SURROGATE_START) as u32
                    + surrogate::SUPPLEMENTARY_START;
                if code_point > surrogate::MAX_CODE_POINT {
                    debug!(first, second, code_point, "surrogate pair out of range");
                    return Err(Error::CodePointOutOfRange { first, second });
                }
                text.push_code_point(code_point);
                rest = tail;
            }
            [unit, ref tail @ ..] => {
                text.push_code_point(unit as u32);
                rest = tail;
            }
        }
    }
    Ok(text)
}

/// Returns the number of code units [`encode`] produces for this text.
pub fn length_in_bytes<T: CodeUnits + ?Sized>(text: &T) -> usize {
    length_of(WideStr::from_units(&text.code_units()))
}

fn length_of(text: &WideStr) -> usize {
    text.code_points().map(surrogate::utf16_len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(vec![0x61, 0x62, 0x63], encode("abc"));
        assert_eq!(vec![0xD83C, 0xDF37], encode("\u{1F337}"));
        assert_eq!(Vec::<u16>::new(), encode(""));
        assert_eq!(0, length_in_bytes(""));
    }

    #[test]
    fn test_encode_keeps_lone_surrogates() {
        let units = [0xDF37u16, 0x61, 0xD83C];
        assert_eq!(units.to_vec(), encode(&units[..]));
        assert_eq!(3, length_in_bytes(&units[..]));
    }

    #[test]
    fn test_decode_pairs() {
        let text = decode(&[0x61, 0xD83C, 0xDF37, 0x62]).unwrap_or_default();
        assert_eq!(text, "a\u{1F337}b");
        assert_eq!(3, text.code_points().count());
    }

    #[test]
    fn test_decode_invalid_surrogate() {
        assert_eq!(
            Err(Error::InvalidSurrogate {
                first: 0xD800,
                second: 0x0041
            }),
            decode(&[0xD800, 0x0041])
        );
        // a low surrogate is checked as well
        assert_eq!(
            Err(Error::InvalidSurrogate {
                first: 0xDC00,
                second: 0x0041
            }),
            decode(&[0x61, 0xDC00, 0x0041])
        );
    }

    #[test]
    fn test_decode_low_low_is_out_of_range() {
        assert_eq!(
            Err(Error::CodePointOutOfRange {
                first: 0xDC00,
                second: 0xDC00
            }),
            decode(&[0xDC00, 0xDC00])
        );
    }

    #[test]
    fn test_decode_trailing_unit_is_unchecked() {
        assert_eq!(Ok(vec![0xD800]), decode(&[0xD800]).map(WideString::into_units));
        assert_eq!(
            Ok(vec![0x61, 0xD83C]),
            decode(&[0x61, 0xD83C]).map(WideString::into_units)
        );
        // a pair that consumed the second-to-last unit leaves the last one unchecked too
        assert_eq!(
            Ok(vec![0xD83C, 0xDF37, 0xDC00]),
            decode(&[0xD83C, 0xDF37, 0xDC00]).map(WideString::into_units)
        );
        assert_eq!(Ok(WideString::new()), decode(&[]));
    }
}
