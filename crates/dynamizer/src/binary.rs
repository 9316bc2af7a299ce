//! [`Binary`], the in-process form of the `B` / `BS` wire types.
//!
//! A thin owner of a byte sequence whose equality, ordering and hashing are
//! those of the bytes, so it can sit in sets and be compared against raw
//! `&[u8]` directly. The wire form is standard padded base64.

use std::borrow::Borrow;

use base64::Engine;
use thiserror::Error;

/// Error type for fallible [`Binary`] construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BinaryError {
    #[error("{0} input is not a byte sequence")]
    UnsupportedSource(&'static str),
    #[error("integer {0} is outside the single-byte range")]
    OutOfRange(i64),
}

/// Which non-byte inputs [`Binary::try_from_source`] coerces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BinaryMode {
    /// Only byte sequences are accepted.
    #[default]
    Strict,
    /// Compatibility with the older calling convention: an integer in
    /// `0..=255` becomes a one-byte sequence holding that value, and text is
    /// taken verbatim as its UTF-8 bytes.
    Legacy,
}

/// Untyped input to [`Binary::try_from_source`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinarySource {
    Bytes(Vec<u8>),
    Integer(i64),
    Text(String),
}

impl BinarySource {
    fn kind(&self) -> &'static str {
        match self {
            BinarySource::Bytes(_) => "byte",
            BinarySource::Integer(_) => "integer",
            BinarySource::Text(_) => "text",
        }
    }
}

impl From<Vec<u8>> for BinarySource {
    fn from(bytes: Vec<u8>) -> Self {
        BinarySource::Bytes(bytes)
    }
}

impl From<&[u8]> for BinarySource {
    fn from(bytes: &[u8]) -> Self {
        BinarySource::Bytes(bytes.to_vec())
    }
}

impl From<i64> for BinarySource {
    fn from(n: i64) -> Self {
        BinarySource::Integer(n)
    }
}

impl From<String> for BinarySource {
    fn from(s: String) -> Self {
        BinarySource::Text(s)
    }
}

impl From<&str> for BinarySource {
    fn from(s: &str) -> Self {
        BinarySource::Text(s.to_owned())
    }
}

/// An opaque byte sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Binary(Vec<u8>);

impl Binary {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Builds a `Binary` from untyped input under the given coercion mode.
    ///
    /// ```
    /// use dynamizer::{Binary, BinaryError, BinaryMode};
    ///
    /// assert_eq!(Binary::try_from_source(b"\x01".as_slice(), BinaryMode::Strict).unwrap(), [1u8]);
    /// assert_eq!(
    ///     Binary::try_from_source("\u{1}", BinaryMode::Strict),
    ///     Err(BinaryError::UnsupportedSource("text"))
    /// );
    /// assert_eq!(Binary::try_from_source(7i64, BinaryMode::Legacy).unwrap(), [7u8]);
    /// ```
    pub fn try_from_source(
        source: impl Into<BinarySource>,
        mode: BinaryMode,
    ) -> Result<Self, BinaryError> {
        match (source.into(), mode) {
            (BinarySource::Bytes(bytes), _) => Ok(Self(bytes)),
            (BinarySource::Integer(n), BinaryMode::Legacy) => u8::try_from(n)
                .map(|byte| Self(vec![byte]))
                .map_err(|_| BinaryError::OutOfRange(n)),
            (BinarySource::Text(s), BinaryMode::Legacy) => Ok(Self(s.into_bytes())),
            (source, BinaryMode::Strict) => Err(BinaryError::UnsupportedSource(source.kind())),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Standard padded base64 text (the wire form).
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.0)
    }

    pub fn from_base64(text: &str) -> Result<Self, base64::DecodeError> {
        base64::engine::general_purpose::STANDARD
            .decode(text)
            .map(Self)
    }
}

impl AsRef<[u8]> for Binary {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Borrow<[u8]> for Binary {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Binary {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Binary {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Binary {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Binary {
    fn from(bytes: &[u8; N]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Binary> for Vec<u8> {
    fn from(binary: Binary) -> Self {
        binary.0
    }
}

// ---- comparisons against raw bytes, both directions ----

impl PartialEq<[u8]> for Binary {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

impl PartialEq<&[u8]> for Binary {
    fn eq(&self, other: &&[u8]) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Vec<u8>> for Binary {
    fn eq(&self, other: &Vec<u8>) -> bool {
        &self.0 == other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for Binary {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.0 == other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for Binary {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Binary> for [u8] {
    fn eq(&self, other: &Binary) -> bool {
        self == other.0
    }
}

impl PartialEq<Binary> for &[u8] {
    fn eq(&self, other: &Binary) -> bool {
        *self == other.0
    }
}

impl PartialEq<Binary> for Vec<u8> {
    fn eq(&self, other: &Binary) -> bool {
        *self == other.0
    }
}

impl<const N: usize> PartialEq<Binary> for [u8; N] {
    fn eq(&self, other: &Binary) -> bool {
        *self == other.0[..]
    }
}

impl<const N: usize> PartialEq<Binary> for &[u8; N] {
    fn eq(&self, other: &Binary) -> bool {
        **self == other.0[..]
    }
}
