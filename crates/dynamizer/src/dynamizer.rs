//! [`Dynamizer`]: encode native values to wire values and back.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde_json::Value;

use crate::binary::Binary;
use crate::error::{DecodeError, EncodeError};
use crate::policy::{Lossy, NumericPolicy, Strict};
use crate::value::{NativeValue, Number};
use crate::wire::{WireTag, WireValue};

/// Attribute map of native values.
pub type Item = BTreeMap<String, NativeValue>;

/// Attribute map of wire values.
pub type WireItem = BTreeMap<String, WireValue>;

/// Stateless marshaller, parameterised by its numeric policy.
///
/// ```
/// use dynamizer::{Binary, Dynamizer, NativeValue, WireValue};
///
/// let dynamizer = Dynamizer::new();
/// assert_eq!(
///     dynamizer.encode(&NativeValue::from("foo")).unwrap(),
///     WireValue::String("foo".into())
/// );
/// assert_eq!(
///     dynamizer.encode(&Binary::from([1u8]).into()).unwrap(),
///     WireValue::Binary("AQ==".into())
/// );
/// assert!(dynamizer.encode(&NativeValue::from(1.1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dynamizer<P = Strict> {
    policy: P,
}

/// A [`Dynamizer`] with the [`Lossy`] numeric policy.
pub type LossyDynamizer = Dynamizer<Lossy>;

impl Dynamizer<Strict> {
    pub fn new() -> Self {
        Self { policy: Strict }
    }
}

impl Dynamizer<Lossy> {
    pub fn lossy() -> Self {
        Self { policy: Lossy }
    }
}

impl<P: NumericPolicy> Dynamizer<P> {
    pub fn with_policy(policy: P) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    // ----------------------------------------------------------------
    // Encoding

    pub fn encode(&self, value: &NativeValue) -> Result<WireValue, EncodeError> {
        let wire = match value {
            NativeValue::String(s) => WireValue::String(s.clone()),
            NativeValue::Number(n) => WireValue::Number(self.policy.encode_number(n)?),
            NativeValue::Binary(b) => WireValue::Binary(b.to_base64()),
            NativeValue::StringSet(set) => {
                ensure_non_empty(set.len(), WireTag::StringSet)?;
                WireValue::StringSet(set.iter().cloned().collect())
            }
            NativeValue::NumberSet(set) => {
                ensure_non_empty(set.len(), WireTag::NumberSet)?;
                WireValue::NumberSet(self.encode_numbers(set)?)
            }
            NativeValue::BinarySet(set) => {
                ensure_non_empty(set.len(), WireTag::BinarySet)?;
                WireValue::BinarySet(set.iter().map(Binary::to_base64).collect())
            }
        };
        tracing::trace!(tag = %wire.tag(), "encoded attribute value");
        Ok(wire)
    }

    /// Renders every element in numeric order, dropping repeated texts:
    /// under the lossy policy `Float(0.1)` and `Decimal(0.1)` are distinct
    /// members that both render as `0.1`.
    fn encode_numbers(&self, set: &BTreeSet<Number>) -> Result<Vec<String>, EncodeError> {
        let mut seen = HashSet::with_capacity(set.len());
        let mut out = Vec::with_capacity(set.len());
        for n in set {
            let text = self.policy.encode_number(n)?;
            if seen.insert(text.clone()) {
                out.push(text);
            }
        }
        Ok(out)
    }

    pub fn encode_item(&self, item: &Item) -> Result<WireItem, EncodeError> {
        item.iter()
            .map(|(name, value)| {
                self.encode(value)
                    .map(|wire| (name.clone(), wire))
                    .map_err(|e| e.in_attribute(name))
            })
            .collect()
    }

    /// Encodes straight to the JSON wire object (`{"N":"54"}`).
    pub fn encode_json(&self, value: &NativeValue) -> Result<Value, EncodeError> {
        self.encode(value).map(Value::from)
    }

    // ----------------------------------------------------------------
    // Decoding

    pub fn decode(&self, value: &WireValue) -> Result<NativeValue, DecodeError> {
        let native = match value {
            WireValue::String(s) => NativeValue::String(s.clone()),
            WireValue::Number(text) => NativeValue::Number(self.policy.decode_number(text)?),
            WireValue::Binary(text) => NativeValue::Binary(decode_base64(text)?),
            WireValue::StringSet(items) => {
                ensure_non_empty_wire(items, WireTag::StringSet)?;
                NativeValue::StringSet(items.iter().cloned().collect())
            }
            WireValue::NumberSet(items) => {
                ensure_non_empty_wire(items, WireTag::NumberSet)?;
                NativeValue::NumberSet(
                    items
                        .iter()
                        .map(|text| self.policy.decode_number(text))
                        .collect::<Result<_, _>>()?,
                )
            }
            WireValue::BinarySet(items) => {
                ensure_non_empty_wire(items, WireTag::BinarySet)?;
                NativeValue::BinarySet(
                    items
                        .iter()
                        .map(|text| decode_base64(text))
                        .collect::<Result<_, _>>()?,
                )
            }
        };
        tracing::trace!(tag = %value.tag(), "decoded attribute value");
        Ok(native)
    }

    pub fn decode_item(&self, item: &WireItem) -> Result<Item, DecodeError> {
        item.iter()
            .map(|(name, wire)| {
                self.decode(wire)
                    .map(|value| (name.clone(), value))
                    .map_err(|e| e.in_attribute(name))
            })
            .collect()
    }

    /// Decodes a JSON wire object as received from the transport.
    pub fn decode_json(&self, value: &Value) -> Result<NativeValue, DecodeError> {
        self.decode(&WireValue::from_json(value)?)
    }
}

fn ensure_non_empty(len: usize, tag: WireTag) -> Result<(), EncodeError> {
    if len == 0 {
        return Err(EncodeError::UnsupportedType(format!(
            "empty set has no `{tag}` representation"
        )));
    }
    Ok(())
}

fn ensure_non_empty_wire(items: &[String], tag: WireTag) -> Result<(), DecodeError> {
    if items.is_empty() {
        return Err(DecodeError::EmptySet(tag));
    }
    Ok(())
}

fn decode_base64(text: &str) -> Result<Binary, DecodeError> {
    Binary::from_base64(text).map_err(|_| DecodeError::InvalidBase64(text.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynamizer_decimal::Decimal;

    #[test]
    fn mixed_number_set_is_numerically_ordered() {
        let set = NativeValue::number_set([
            Number::from(Decimal::from(2u8)),
            Number::from(2.0),
            Number::from(1.5),
        ]);
        let wire = Dynamizer::new().encode(&set).unwrap();
        assert_eq!(wire, WireValue::NumberSet(vec!["1.5".into(), "2".into()]));
    }

    #[test]
    fn lossy_set_collapses_equal_texts() {
        let set = NativeValue::number_set([
            Number::from("0.1".parse::<Decimal>().unwrap()),
            Number::from(0.1),
            Number::from(0.25),
        ]);
        let NativeValue::NumberSet(members) = &set else {
            panic!("expected number set");
        };
        assert_eq!(members.len(), 3);
        let wire = Dynamizer::lossy().encode(&set).unwrap();
        assert_eq!(wire, WireValue::NumberSet(vec!["0.1".into(), "0.25".into()]));
    }

    #[test]
    fn policy_is_injected() {
        let strict = Dynamizer::with_policy(Strict);
        let lossy = Dynamizer::with_policy(Lossy);
        assert_eq!(strict, Dynamizer::new());
        assert_eq!(lossy, LossyDynamizer::default());
        assert_eq!(*lossy.policy(), Lossy);
    }

    #[test]
    fn dynamizer_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<Dynamizer>();
        assert_send_sync::<LossyDynamizer>();
    }
}
