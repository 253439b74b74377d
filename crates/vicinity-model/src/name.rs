// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Bounded, single-line city names.

use thiserror::Error;

/// Why a string was refused as a `CityName`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CityNameError {
    /// The name has no characters at all.
    #[error("city name is empty")]
    Empty,
    /// The name exceeds `CityName::MAX_BYTES` bytes of UTF-8.
    #[error("city name is {len} bytes long, the limit is {limit} bytes", limit = CityName::MAX_BYTES)]
    TooLong { len: usize },
    /// The name contains a line break or NUL.
    #[error("city name contains forbidden character {ch:?}")]
    ForbiddenCharacter { ch: char },
}

/// The name of a city: non-empty, at most 255 bytes, and confined to one line.
///
/// Internal and trailing spaces are kept verbatim. Names read from raw bytes
/// (`from_utf8_lossy`) are measured before decoding, so a name holding
/// replacement characters may exceed `MAX_BYTES` once decoded.
///
/// # Examples
///
/// ```rust
/// # use vicinity_model::name::CityName;
///
/// let name = CityName::new("Santa Rita do Sapucai").unwrap();
/// assert_eq!(name.as_str(), "Santa Rita do Sapucai");
/// assert!(CityName::new("two\nlines").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CityName(String);

impl CityName {
    /// The largest accepted name, in bytes.
    pub const MAX_BYTES: usize = 255;

    /// Validates `name` and wraps it.
    pub fn new<S>(name: S) -> Result<Self, CityNameError>
    where
        S: Into<String>,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(CityNameError::Empty);
        }
        if name.len() > Self::MAX_BYTES {
            return Err(CityNameError::TooLong { len: name.len() });
        }
        if let Some(ch) = name.chars().find(|c| matches!(c, '\n' | '\r' | '\0')) {
            return Err(CityNameError::ForbiddenCharacter { ch });
        }
        Ok(Self(name))
    }

    /// Validates raw `bytes` and decodes them, replacing invalid UTF-8
    /// sequences with `U+FFFD`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use vicinity_model::name::CityName;
    ///
    /// let latin1 = CityName::from_utf8_lossy(b"S\xe3o Paulo").unwrap();
    /// assert_eq!(latin1.as_str(), "S\u{FFFD}o Paulo");
    /// ```
    pub fn from_utf8_lossy(bytes: &[u8]) -> Result<Self, CityNameError> {
        if bytes.is_empty() {
            return Err(CityNameError::Empty);
        }
        if bytes.len() > Self::MAX_BYTES {
            return Err(CityNameError::TooLong { len: bytes.len() });
        }
        if let Some(&b) = bytes.iter().find(|&&b| matches!(b, b'\n' | b'\r' | b'\0')) {
            return Err(CityNameError::ForbiddenCharacter { ch: char::from(b) });
        }
        Ok(Self(String::from_utf8_lossy(bytes).into_owned()))
    }

    /// Returns the name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the length of the name in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the name has no bytes. Never the case for a validated name.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the name and returns the owned string.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for CityName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CityName({:?})", self.0)
    }
}

impl std::fmt::Display for CityName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for CityName {
    type Error = CityNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for CityName {
    type Error = CityNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CityName> for String {
    fn from(name: CityName) -> Self {
        name.0
    }
}
