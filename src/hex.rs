//! Conversions between byte sequences and `0x`-prefixed hexadecimal strings.
//!
//! Output is always lowercase, two digits per byte, with a `0x` prefix.
//! Input may omit the prefix and is never rejected: see [`to_array`] for how
//! malformed digit groups are handled.

use tracing::trace;

const HEX_PREFIX: &str = "0x";
const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Formats a byte sequence as a `0x`-prefixed lowercase hex string.
///
/// ```
/// assert_eq!("0x00ff10", utf_helpers::hex::from_bytes([0x00u8, 0xff, 0x10]));
/// assert_eq!("0x", utf_helpers::hex::from_bytes(Vec::<u8>::new()));
/// ```
pub fn from_bytes<B: AsRef<[u8]>>(bytes: B) -> String {
    let bytes = bytes.as_ref();
    let mut hex = String::with_capacity(HEX_PREFIX.len() + bytes.len() * 2);
    hex.push_str(HEX_PREFIX);
    for byte in bytes.iter().copied() {
        hex.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        hex.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
    }
    hex
}

/// Parses a hex string into one value per group of two code units.
///
/// An optional leading `0x` is stripped first. The rest is read as UTF-16 code
/// units and cut into groups of at most two; a line terminator (`\n`, `\r`,
/// U+2028, U+2029) is dropped and ends the current group. Each group is then
/// parsed on its own: leading whitespace is skipped, a `+`/`-` sign and a `0x`
/// prefix are accepted, and the longest run of hex digits is taken. A group
/// without any digit yields `None`.
///
/// A run of odd length ends in a group holding a single digit, which is parsed
/// as that digit's value, so `"1"` gives `[Some(1)]` and not `[Some(0x10)]`.
pub fn to_array(hex: &str) -> Vec<Option<i16>> {
    let digits = hex.strip_prefix(HEX_PREFIX).unwrap_or(hex);
    let units = digits.encode_utf16().collect::<Vec<u16>>();
    let mut values = Vec::with_capacity((units.len() + 1) / 2);
    for run in units.split(|unit| is_line_terminator(*unit)) {
        if run.len() % 2 == 1 {
            trace!(
                unit = run[run.len() - 1],
                "odd-length hex run, final digit parsed on its own"
            );
        }
        values.extend(run.chunks(2).map(parse_group));
    }
    values
}

/// Parses a hex string into bytes.
///
/// Same grouping as [`to_array`]. Groups without a digit become `0` and
/// negative groups wrap around modulo 256.
pub fn to_bytes(hex: &str) -> Vec<u8> {
    to_array(hex)
        .into_iter()
        .map(|value| value.unwrap_or(0) as u8)
        .collect()
}

const PLUS: u16 = b'+' as u16;
const MINUS: u16 = b'-' as u16;
const ZERO: u16 = b'0' as u16;
const LOWER_X: u16 = b'x' as u16;
const UPPER_X: u16 = b'X' as u16;

fn is_line_terminator(unit: u16) -> bool {
    matches!(unit, 0x000A | 0x000D | 0x2028 | 0x2029)
}

// ECMAScript StrWhiteSpaceChar: WhiteSpace (Zs included) and LineTerminator.
fn is_white_space(unit: u16) -> bool {
    matches!(
        unit,
        0x0009 | 0x000B | 0x000C | 0x0020 | 0x00A0 | 0x1680 | 0x2000..=0x200A | 0x202F
            | 0x205F | 0x3000 | 0xFEFF
    ) || is_line_terminator(unit)
}

fn hex_digit(unit: u16) -> Option<i16> {
    char::from_u32(unit as u32)?.to_digit(16).map(|d| d as i16)
}

fn parse_group(group: &[u16]) -> Option<i16> {
    let start = group.iter().take_while(|unit| is_white_space(**unit)).count();
    let (negative, unsigned) = match &group[start..] {
        [MINUS, rest @ ..] => (true, rest),
        [PLUS, rest @ ..] => (false, rest),
        rest => (false, rest),
    };
    let digits = match unsigned {
        [ZERO, LOWER_X | UPPER_X, rest @ ..] => rest,
        rest => rest,
    };
    let mut value = None;
    for digit in digits.iter().map_while(|unit| hex_digit(*unit)) {
        value = Some(value.unwrap_or(0) * 16 + digit);
    }
    value.map(|v| if negative { -v } else { v })
}

#[cfg(test)]
mod tests {
    use super::{from_bytes, to_array, to_bytes};

    #[test]
    fn test_from_bytes() {
        assert_eq!("0x", from_bytes(Vec::<u8>::new()));
        assert_eq!("0xaa", from_bytes([0xaau8]));
        assert_eq!("0x0090", from_bytes(&[0x00u8, 0x90][..]));
        assert_eq!("0x0a0b0c", from_bytes(vec![10u8, 11, 12]));
    }

    #[test]
    fn test_to_bytes_prefix_is_optional() {
        assert_eq!(Vec::<u8>::new(), to_bytes(""));
        assert_eq!(Vec::<u8>::new(), to_bytes("0x"));
        assert_eq!(vec![0xaa], to_bytes("aa"));
        assert_eq!(vec![0xaa], to_bytes("0xaa"));
        assert_eq!(vec![0xab, 0xcd], to_bytes("ABCD"));
    }

    #[test]
    fn test_odd_length_tail_is_a_single_digit() {
        assert_eq!(vec![1], to_bytes("1"));
        assert_eq!(vec![15], to_bytes("0xf"));
        assert_eq!(vec![0x00, 0x09], to_bytes("0x009"));
        assert_eq!(vec![0x00, 0x90], to_bytes("0x0090"));
        assert_eq!(vec![0x10], to_bytes("10"));
    }

    #[test]
    fn test_malformed_groups_propagate() {
        assert_eq!(vec![None, Some(0x12)], to_array("zz12"));
        assert_eq!(vec![Some(1)], to_array("1z"));
        assert_eq!(vec![Some(1)], to_array(" 1"));
        assert_eq!(vec![Some(-1)], to_array("-1"));
        assert_eq!(vec![None, Some(0x12)], to_array("0x0x12"));

        assert_eq!(vec![0, 0x12], to_bytes("zz12"));
        assert_eq!(vec![0xff], to_bytes("-1"));
    }

    #[test]
    fn test_groups_are_utf16_units() {
        // the flower is split into its two surrogates, neither is a digit
        assert_eq!(vec![Some(0x0a), None], to_array("a\u{1F337}"));
        assert_eq!(vec![Some(0x0a), None, None], to_array("a\u{1F337}\u{1F337}"));
        assert_eq!(vec![0x0a, 0x00], to_bytes("0xa\u{1F337}"));
    }

    #[test]
    fn test_line_terminators_end_a_group() {
        assert_eq!(vec![Some(0xab), Some(0xcd)], to_array("ab\ncd"));
        assert_eq!(vec![Some(0xab), Some(0x0c), Some(0x0d)], to_array("abc\r\nd"));
        assert_eq!(vec![Some(0x01), Some(0x02)], to_array("1\u{2028}2\u{2029}"));
        assert_eq!(Vec::<Option<i16>>::new(), to_array("\n"));
    }

    #[test]
    fn test_leading_white_space_set() {
        assert_eq!(vec![Some(1)], to_array("\u{FEFF}1"));
        assert_eq!(vec![Some(1)], to_array("\u{3000}1"));
        assert_eq!(vec![Some(1)], to_array("\t1"));
        // U+0085 is not ECMAScript white space
        assert_eq!(vec![None], to_array("\u{85}1"));
    }
}
