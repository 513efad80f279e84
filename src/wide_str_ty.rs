use crate::{
    error::{Error, Result},
    surrogate,
    wide_string::WideString,
};
use std::{borrow::Cow, fmt, hash, mem};

/// A primitive UTF-16 based string type.
/// It is usally seen in its borrowed form, `&WideStr`.
///
/// Any sequence of `u16` is a valid `WideStr`; unpaired surrogates are kept as they are.
#[repr(transparent)]
pub struct WideStr(pub(crate) [u16]);

impl PartialEq for WideStr {
    #[inline]
    fn eq(&self, other: &WideStr) -> bool {
        self.0 == other.0
    }
}

impl PartialEq<str> for WideStr {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.code_points().eq(other.chars().map(u32::from))
    }
}

impl PartialEq<&str> for WideStr {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl Eq for WideStr {}

impl hash::Hash for WideStr {
    #[inline]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        for unit in self.0.iter().copied() {
            state.write_u16(unit);
        }
        state.write_u8(0xff)
    }
}

impl fmt::Display for WideStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in char::decode_utf16(self.0.iter().copied()) {
            write!(f, "{}", ch.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

impl fmt::Debug for WideStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"")?;
        for code_point in self.code_points() {
            match char::from_u32(code_point) {
                Some(ch) => write!(f, "{}", ch.escape_debug())?,
                None => write!(f, "\\u{{{:x}}}", code_point)?,
            }
        }
        write!(f, "\"")
    }
}

impl WideStr {
    /// Views a slice of UTF-16 code units as a `WideStr`.
    pub fn from_units(units: &[u16]) -> &WideStr {
        unsafe { mem::transmute(units) }
    }

    /// Returns the underlying code units.
    pub fn as_units(&self) -> &[u16] {
        &self.0
    }

    /// Returns the length in code units.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if this string has no code units.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the code points of this string.
    ///
    /// A high surrogate directly followed by a low surrogate yields the combined
    /// supplementary code point. Any other unit, including an unpaired surrogate,
    /// yields its own value.
    pub fn code_points(&self) -> CodePoints<'_> {
        CodePoints { data: &self.0 }
    }

    /// Converts to a `String`, failing on the first unpaired surrogate.
    pub fn try_to_string(&self) -> Result<String> {
        let mut string = String::with_capacity(self.len());
        let mut index = 0;
        for code_point in self.code_points() {
            match char::from_u32(code_point) {
                Some(ch) => string.push(ch),
                None => {
                    return Err(Error::LoneSurrogate {
                        index,
                        unit: code_point as u16,
                    })
                }
            }
            index += surrogate::utf16_len(code_point);
        }
        Ok(string)
    }

    /// Converts to a `String`, replacing unpaired surrogates with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        self.to_string()
    }
}

impl std::borrow::ToOwned for WideStr {
    type Owned = WideString;

    #[inline]
    fn to_owned(&self) -> WideString {
        WideString::from_units(self.0.to_owned())
    }
}

/// An iterator over the code points of a `WideStr`.
#[derive(Clone, Copy)]
pub struct CodePoints<'str> {
    data: &'str [u16],
}

impl<'str> Iterator for CodePoints<'str> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        match *self.data {
            [] => None,
            [high, low, ref rest @ ..]
                if surrogate::is_high_surrogate(high) && surrogate::is_low_surrogate(low) =>
            {
                self.data = rest;
                Some(surrogate::combine(high, low))
            }
            [unit, ref rest @ ..] => {
                self.data = rest;
                Some(unit as u32)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.data.len();
        ((len + 1) / 2, Some(len))
    }
}

impl fmt::Debug for CodePoints<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CodePoints(")?;
        f.debug_list().entries(*self).finish()?;
        write!(f, ")")
    }
}

/// Types that can present their contents as UTF-16 code units.
///
/// Every codec operation that takes text is generic over this trait, so both
/// `&str` and `&WideStr` can be passed directly.
pub trait CodeUnits {
    /// Returns the UTF-16 code units of this text.
    fn code_units(&self) -> Cow<'_, [u16]>;
}

impl CodeUnits for str {
    fn code_units(&self) -> Cow<'_, [u16]> {
        Cow::Owned(self.encode_utf16().collect())
    }
}

impl CodeUnits for String {
    fn code_units(&self) -> Cow<'_, [u16]> {
        self.as_str().code_units()
    }
}

impl CodeUnits for [u16] {
    fn code_units(&self) -> Cow<'_, [u16]> {
        Cow::Borrowed(self)
    }
}

impl CodeUnits for Vec<u16> {
    fn code_units(&self) -> Cow<'_, [u16]> {
        Cow::Borrowed(self)
    }
}

impl CodeUnits for WideStr {
    fn code_units(&self) -> Cow<'_, [u16]> {
        Cow::Borrowed(&self.0)
    }
}

impl CodeUnits for WideString {
    fn code_units(&self) -> Cow<'_, [u16]> {
        Cow::Borrowed(self.as_units())
    }
}

#[cfg(test)]
mod tests {
    use super::{CodeUnits, WideStr};
    use crate::Error;

    #[test]
    fn test_code_points_pairs_and_lone_units() {
        let s = WideStr::from_units(&[0x61, 0xD83C, 0xDF37, 0xDC00, 0xD800]);
        let points = s.code_points().collect::<Vec<_>>();
        assert_eq!(vec![0x61, 0x1F337, 0xDC00, 0xD800], points);
    }

    #[test]
    fn test_try_to_string() {
        let flower = WideStr::from_units(&[0xD83C, 0xDF37, 0x61]);
        assert_eq!(Ok("\u{1F337}a".to_string()), flower.try_to_string());

        let lone = WideStr::from_units(&[0xD83C, 0xDF37, 0xDF37]);
        assert_eq!(
            Err(Error::LoneSurrogate {
                index: 2,
                unit: 0xDF37
            }),
            lone.try_to_string()
        );
    }

    #[test]
    fn test_display_and_debug() {
        let s = WideStr::from_units(&[0x61, 0xD800, 0x0A]);
        assert_eq!("a\u{FFFD}\n", s.to_string_lossy());
        assert_eq!("\"a\\u{d800}\\n\"", format!("{:?}", s));
    }

    #[test]
    fn test_eq_str() {
        let s = WideStr::from_units(&[0xD83C, 0xDF37]);
        assert!(*s == *"\u{1F337}");
        assert!(*s != *"\u{1F338}");
        assert_eq!(&[0xD83C, 0xDF37][..], &*"\u{1F337}".code_units());
    }
}
