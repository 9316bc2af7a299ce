//! Error types for encoding and decoding.

use dynamizer_decimal::ContextError;
use thiserror::Error;

use crate::wire::WireTag;

/// Errors that can occur while encoding a native value.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EncodeError {
    /// The number cannot be stored without rounding, or exceeds the store's
    /// exponent range. Supply an exact decimal, or use the lossy policy.
    #[error("invalid numeric for `{value}`: {signal}")]
    NumericPrecision { value: String, signal: ContextError },
    /// The value has no wire representation.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),
    #[error("attribute `{name}`: {source}")]
    Attribute {
        name: String,
        source: Box<EncodeError>,
    },
}

/// Errors that can occur while decoding a wire value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown wire tag `{0}`")]
    UnknownTag(String),
    /// The JSON shape is not a single-tag wire object.
    #[error("invalid wire value: {0}")]
    InvalidShape(String),
    #[error("invalid number `{text}`: {reason}")]
    InvalidNumber { text: String, reason: String },
    #[error("invalid base64 `{0}`")]
    InvalidBase64(String),
    #[error("empty `{0}` set")]
    EmptySet(WireTag),
    #[error("attribute `{name}`: {source}")]
    Attribute {
        name: String,
        source: Box<DecodeError>,
    },
}

impl EncodeError {
    pub(crate) fn in_attribute(self, name: &str) -> Self {
        EncodeError::Attribute {
            name: name.to_owned(),
            source: Box::new(self),
        }
    }
}

impl DecodeError {
    pub(crate) fn in_attribute(self, name: &str) -> Self {
        DecodeError::Attribute {
            name: name.to_owned(),
            source: Box::new(self),
        }
    }

    pub(crate) fn invalid_number(text: &str, reason: impl ToString) -> Self {
        DecodeError::InvalidNumber {
            text: text.to_owned(),
            reason: reason.to_string(),
        }
    }
}
