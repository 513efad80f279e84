use crate::{surrogate, wide_str_ty::WideStr};
use std::{borrow, fmt, hash, ops};

/// A growable UTF-16 based string type.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct WideString(Vec<u16>);

impl hash::Hash for WideString {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl PartialEq<WideStr> for WideString {
    #[inline]
    fn eq(&self, other: &WideStr) -> bool {
        **self == *other
    }
}

impl PartialEq<str> for WideString {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        **self == *other
    }
}

impl PartialEq<&str> for WideString {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        **self == **other
    }
}

impl fmt::Display for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &**self)
    }
}

impl fmt::Debug for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &**self)
    }
}

impl ops::Deref for WideString {
    type Target = WideStr;

    fn deref(&self) -> &Self::Target {
        WideStr::from_units(&self.0[..])
    }
}

impl borrow::Borrow<WideStr> for WideString {
    fn borrow(&self) -> &WideStr {
        self
    }
}

impl AsRef<WideStr> for WideString {
    fn as_ref(&self) -> &WideStr {
        self
    }
}

impl WideString {
    /// Creates a new empty `WideString`.
    pub const fn new() -> Self {
        WideString(Vec::new())
    }

    /// Creates a new empty `WideString` with room for `capacity` code units.
    pub fn with_capacity(capacity: usize) -> Self {
        WideString(Vec::with_capacity(capacity))
    }

    /// Wraps a vector of code units. No validation is performed.
    pub fn from_units(units: Vec<u16>) -> Self {
        WideString(units)
    }

    /// Returns the underlying vector of code units.
    pub fn into_units(self) -> Vec<u16> {
        self.0
    }

    /// Append a single code unit.
    pub fn push_unit(&mut self, unit: u16) {
        self.0.push(unit);
    }

    /// Append a code point, as a surrogate pair if it lies above the BMP.
    ///
    /// Values below `0x10000` are stored as one unit, even if they are surrogates.
    pub fn push_code_point(&mut self, code_point: u32) {
        self.0.extend_from_slice(&surrogate::encode_code_point(code_point));
    }

    /// Append the given `str` to the end of the `WideString`.
    pub fn push_str(&mut self, s: &str) {
        self.0.extend(s.encode_utf16());
    }

    /// Append the given `WideStr` to the end of the `WideString`.
    pub fn push_wide_str(&mut self, s: &WideStr) {
        self.0.extend_from_slice(&s.0);
    }
}

impl From<&str> for WideString {
    fn from(s: &str) -> Self {
        WideString(s.encode_utf16().collect())
    }
}

impl From<String> for WideString {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&WideStr> for WideString {
    fn from(s: &WideStr) -> Self {
        borrow::ToOwned::to_owned(s)
    }
}

impl Extend<u16> for WideString {
    fn extend<T: IntoIterator<Item = u16>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl FromIterator<u16> for WideString {
    fn from_iter<T: IntoIterator<Item = u16>>(iter: T) -> Self {
        WideString(iter.into_iter().collect())
    }
}

impl<'rhs> ops::AddAssign<&'rhs WideStr> for WideString {
    fn add_assign(&mut self, rhs: &'rhs WideStr) {
        self.push_wide_str(rhs);
    }
}
