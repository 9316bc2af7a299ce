//! Typed wire values: single-key objects such as `{"S":"foo"}` or
//! `{"NS":["1","2"]}`.
//!
//! Every payload is text. Numbers travel as decimal strings, binary as
//! base64, and sets as unordered arrays of strings.

use std::collections::BTreeSet;
use std::fmt;

use serde_json::{Map, Value};

use crate::error::DecodeError;

/// The type code of a wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WireTag {
    String,
    Number,
    Binary,
    StringSet,
    NumberSet,
    BinarySet,
}

impl WireTag {
    pub const ALL: [WireTag; 6] = [
        WireTag::String,
        WireTag::Number,
        WireTag::Binary,
        WireTag::StringSet,
        WireTag::NumberSet,
        WireTag::BinarySet,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WireTag::String => "S",
            WireTag::Number => "N",
            WireTag::Binary => "B",
            WireTag::StringSet => "SS",
            WireTag::NumberSet => "NS",
            WireTag::BinarySet => "BS",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }

    pub fn is_set(self) -> bool {
        matches!(
            self,
            WireTag::StringSet | WireTag::NumberSet | WireTag::BinarySet
        )
    }
}

impl fmt::Display for WireTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tagged wire value.
///
/// Set payloads keep whatever order they were built or received in; use
/// [`WireValue::is_equivalent`] to compare them as sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireValue {
    String(String),
    Number(String),
    Binary(String),
    StringSet(Vec<String>),
    NumberSet(Vec<String>),
    BinarySet(Vec<String>),
}

impl WireValue {
    pub fn tag(&self) -> WireTag {
        match self {
            WireValue::String(_) => WireTag::String,
            WireValue::Number(_) => WireTag::Number,
            WireValue::Binary(_) => WireTag::Binary,
            WireValue::StringSet(_) => WireTag::StringSet,
            WireValue::NumberSet(_) => WireTag::NumberSet,
            WireValue::BinarySet(_) => WireTag::BinarySet,
        }
    }

    /// Wire equality: same tag and same payload, set payloads compared as sets.
    pub fn is_equivalent(&self, other: &WireValue) -> bool {
        fn as_set(items: &[String]) -> BTreeSet<&str> {
            items.iter().map(String::as_str).collect()
        }
        match (self, other) {
            (WireValue::StringSet(a), WireValue::StringSet(b))
            | (WireValue::NumberSet(a), WireValue::NumberSet(b))
            | (WireValue::BinarySet(a), WireValue::BinarySet(b)) => as_set(a) == as_set(b),
            _ => self == other,
        }
    }

    pub fn to_json(&self) -> Value {
        let payload = match self {
            WireValue::String(s) | WireValue::Number(s) | WireValue::Binary(s) => {
                Value::String(s.clone())
            }
            WireValue::StringSet(items)
            | WireValue::NumberSet(items)
            | WireValue::BinarySet(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
        };
        let mut obj = Map::with_capacity(1);
        obj.insert(self.tag().as_str().to_owned(), payload);
        Value::Object(obj)
    }

    /// Reads `{"<tag>": <payload>}`. Scalar tags need a string payload, set
    /// tags an array of strings.
    pub fn from_json(value: &Value) -> Result<Self, DecodeError> {
        let obj = value
            .as_object()
            .ok_or_else(|| DecodeError::InvalidShape(format!("expected an object, got {value}")))?;
        let mut entries = obj.iter();
        let (key, payload) = match (entries.next(), entries.next()) {
            (Some(entry), None) => entry,
            _ => {
                return Err(DecodeError::InvalidShape(format!(
                    "expected exactly one tag, got {}",
                    obj.len()
                )))
            }
        };
        let tag = WireTag::from_tag(key).ok_or_else(|| DecodeError::UnknownTag(key.clone()))?;

        if tag.is_set() {
            let items = read_string_array(tag, payload)?;
            return Ok(match tag {
                WireTag::StringSet => WireValue::StringSet(items),
                WireTag::NumberSet => WireValue::NumberSet(items),
                _ => WireValue::BinarySet(items),
            });
        }
        let text = payload
            .as_str()
            .ok_or_else(|| DecodeError::InvalidShape(format!("`{tag}` payload must be a string")))?
            .to_owned();
        Ok(match tag {
            WireTag::String => WireValue::String(text),
            WireTag::Number => WireValue::Number(text),
            _ => WireValue::Binary(text),
        })
    }
}

fn read_string_array(tag: WireTag, payload: &Value) -> Result<Vec<String>, DecodeError> {
    let shape = || DecodeError::InvalidShape(format!("`{tag}` payload must be an array of strings"));
    payload
        .as_array()
        .ok_or_else(shape)?
        .iter()
        .map(|item| item.as_str().map(str::to_owned).ok_or_else(shape))
        .collect()
}

impl From<&WireValue> for Value {
    fn from(value: &WireValue) -> Self {
        value.to_json()
    }
}

impl From<WireValue> for Value {
    fn from(value: WireValue) -> Self {
        value.to_json()
    }
}

impl TryFrom<&Value> for WireValue {
    type Error = DecodeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        WireValue::from_json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tags_roundtrip_through_text() {
        for tag in WireTag::ALL {
            assert_eq!(WireTag::from_tag(tag.as_str()), Some(tag));
        }
        assert_eq!(WireTag::from_tag("BOOL"), None);
        assert_eq!(WireTag::from_tag("s"), None);
    }

    #[test]
    fn set_equivalence_ignores_order() {
        let a = WireValue::StringSet(vec!["foo".into(), "bar".into()]);
        let b = WireValue::StringSet(vec!["bar".into(), "foo".into()]);
        assert_ne!(a, b);
        assert!(a.is_equivalent(&b));
        assert!(!a.is_equivalent(&WireValue::NumberSet(vec!["foo".into(), "bar".into()])));
    }

    #[test]
    fn json_shape() {
        assert_eq!(WireValue::Number("54".into()).to_json(), json!({"N": "54"}));
        assert_eq!(
            Value::from(WireValue::BinarySet(vec!["AQ==".into()])),
            json!({"BS": ["AQ=="]})
        );
    }
}
