//! Native values as plain JSON.
//!
//! Strings and numbers map to themselves, arrays to sets, and binary to
//! `data:application/octet-stream;base64,...` strings. JSON numbers keep
//! their source text, so `0.1` reads as the exact decimal `0.1`.

use dynamizer_decimal::Decimal;
use serde_json::{Map, Value};

use crate::binary::Binary;
use crate::dynamizer::{Item, WireItem};
use crate::error::{DecodeError, EncodeError};
use crate::value::{NativeValue, Number};
use crate::wire::WireValue;

/// Prefix of a binary value rendered as a JSON string.
pub const BINARY_URI_PREFIX: &str = "data:application/octet-stream;base64,";

/// How JSON numbers are read into [`Number`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberForm {
    /// The exact decimal written in the document.
    #[default]
    Decimal,
    /// The nearest `f64`.
    Float,
}

pub fn native_from_json(value: &Value, numbers: NumberForm) -> Result<NativeValue, EncodeError> {
    match value {
        Value::String(s) => match s.strip_prefix(BINARY_URI_PREFIX) {
            Some(payload) => Binary::from_base64(payload)
                .map(NativeValue::Binary)
                .map_err(|e| EncodeError::UnsupportedType(format!("binary data URI: {e}"))),
            None => Ok(NativeValue::String(s.clone())),
        },
        Value::Number(n) => number_from_json(n, numbers).map(NativeValue::Number),
        Value::Array(items) => NativeValue::try_set(
            items
                .iter()
                .map(|item| native_from_json(item, numbers))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Bool(_) => Err(EncodeError::UnsupportedType("boolean".to_owned())),
        Value::Null => Err(EncodeError::UnsupportedType("null".to_owned())),
        Value::Object(_) => Err(EncodeError::UnsupportedType("object".to_owned())),
    }
}

fn number_from_json(n: &serde_json::Number, numbers: NumberForm) -> Result<Number, EncodeError> {
    let text = n.to_string();
    match numbers {
        NumberForm::Decimal => text
            .parse::<Decimal>()
            .map(Number::Decimal)
            .map_err(|e| EncodeError::UnsupportedType(format!("number {text}: {e}"))),
        NumberForm::Float => text
            .parse::<f64>()
            .map(Number::Float)
            .map_err(|e| EncodeError::UnsupportedType(format!("number {text}: {e}"))),
    }
}

/// Renders a native value as JSON.
///
/// Fails for non-finite floats, and for text starting with
/// [`BINARY_URI_PREFIX`], which would read back as binary.
pub fn native_to_json(value: &NativeValue) -> Result<Value, EncodeError> {
    Ok(match value {
        NativeValue::String(s) => string_to_json(s)?,
        NativeValue::Number(n) => number_to_json(n)?,
        NativeValue::Binary(b) => binary_to_json(b),
        NativeValue::StringSet(set) => set
            .iter()
            .map(|s| string_to_json(s))
            .collect::<Result<Value, _>>()?,
        NativeValue::NumberSet(set) => set
            .iter()
            .map(number_to_json)
            .collect::<Result<Value, _>>()?,
        NativeValue::BinarySet(set) => set.iter().map(binary_to_json).collect(),
    })
}

fn string_to_json(s: &str) -> Result<Value, EncodeError> {
    if s.starts_with(BINARY_URI_PREFIX) {
        return Err(EncodeError::UnsupportedType(format!(
            "text `{s}` is indistinguishable from binary in JSON"
        )));
    }
    Ok(Value::String(s.to_owned()))
}

fn number_to_json(n: &Number) -> Result<Value, EncodeError> {
    match n {
        Number::Decimal(d) => {
            let text = d.to_string();
            Ok(match serde_json::from_str::<serde_json::Number>(&text) {
                Ok(number) => Value::Number(number),
                Err(_) => Value::String(text),
            })
        }
        Number::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .ok_or_else(|| EncodeError::UnsupportedType(format!("non-finite number {f}"))),
    }
}

fn binary_to_json(b: &Binary) -> Value {
    Value::String(format!("{BINARY_URI_PREFIX}{}", b.to_base64()))
}

/// Reads a JSON object of attributes.
pub fn item_from_json(value: &Value, numbers: NumberForm) -> Result<Item, EncodeError> {
    let obj = value
        .as_object()
        .ok_or_else(|| EncodeError::UnsupportedType("item must be a JSON object".to_owned()))?;
    obj.iter()
        .map(|(name, v)| {
            native_from_json(v, numbers)
                .map(|native| (name.clone(), native))
                .map_err(|e| e.in_attribute(name))
        })
        .collect()
}

pub fn item_to_json(item: &Item) -> Result<Value, EncodeError> {
    let mut obj = Map::with_capacity(item.len());
    for (name, value) in item {
        let json = native_to_json(value).map_err(|e| e.in_attribute(name))?;
        obj.insert(name.clone(), json);
    }
    Ok(Value::Object(obj))
}

pub fn wire_item_to_json(item: &WireItem) -> Value {
    Value::Object(
        item.iter()
            .map(|(name, wire)| (name.clone(), wire.to_json()))
            .collect(),
    )
}

pub fn wire_item_from_json(value: &Value) -> Result<WireItem, DecodeError> {
    let obj = value
        .as_object()
        .ok_or_else(|| DecodeError::InvalidShape(format!("expected an item object, got {value}")))?;
    obj.iter()
        .map(|(name, v)| {
            WireValue::from_json(v)
                .map(|wire| (name.clone(), wire))
                .map_err(|e| e.in_attribute(name))
        })
        .collect()
}
