//! Native values: what application code hands to and gets back from the
//! [`Dynamizer`](crate::Dynamizer).

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use dynamizer_decimal::Decimal;

use crate::binary::Binary;
use crate::error::EncodeError;

/// A native number: an exact decimal, or a binary floating-point value.
///
/// Integers convert into [`Number::Decimal`]. Equality, ordering and hashing
/// are by numeric value across both variants, so `Decimal(2)` and
/// `Float(2.0)` are the same set member and sets iterate in numeric order.
/// A float compares by its exact binary value: `Float(0.1)` is not
/// `Decimal(0.1)`. Zero is unsigned; infinities sort at the ends, and NaN
/// beyond them by sign.
#[derive(Debug, Clone)]
pub enum Number {
    Decimal(Decimal),
    Float(f64),
}

/// Position of a [`Number`] on the extended number line.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum NumericKey<'a> {
    NegativeNan,
    NegativeInfinity,
    Finite(Cow<'a, Decimal>),
    PositiveInfinity,
    PositiveNan,
}

impl Number {
    /// Nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Decimal(d) => d.to_f64(),
            Number::Float(f) => *f,
        }
    }

    pub fn as_decimal(&self) -> Option<&Decimal> {
        match self {
            Number::Decimal(d) => Some(d),
            Number::Float(_) => None,
        }
    }

    fn key(&self) -> NumericKey<'_> {
        match self {
            Number::Decimal(d) => NumericKey::Finite(Cow::Borrowed(d)),
            Number::Float(f) => match Decimal::from_f64(*f) {
                Some(exact) => NumericKey::Finite(Cow::Owned(exact)),
                None if f.is_nan() && f.is_sign_negative() => NumericKey::NegativeNan,
                None if f.is_nan() => NumericKey::PositiveNan,
                None if *f < 0.0 => NumericKey::NegativeInfinity,
                None => NumericKey::PositiveInfinity,
            },
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Decimal(a), Number::Decimal(b)) => a == b,
            _ => self.key() == other.key(),
        }
    }
}

impl Eq for Number {}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Number::Decimal(a), Number::Decimal(b)) => a.cmp(b),
            _ => self.key().cmp(&other.key()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Decimal(d) => fmt::Display::fmt(d, f),
            Number::Float(x) => fmt::Display::fmt(x, f),
        }
    }
}

impl From<Decimal> for Number {
    fn from(d: Decimal) -> Self {
        Number::Decimal(d)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

impl From<f32> for Number {
    fn from(f: f32) -> Self {
        Number::Float(f64::from(f))
    }
}

macro_rules! number_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Number {
            fn from(n: $t) -> Self {
                Number::Decimal(Decimal::from(n))
            }
        }

        impl From<$t> for NativeValue {
            fn from(n: $t) -> Self {
                NativeValue::Number(Number::from(n))
            }
        }
    )*};
}

number_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// The kind of a [`NativeValue`], used to check set homogeneity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeKind {
    String,
    Number,
    Binary,
    StringSet,
    NumberSet,
    BinarySet,
}

impl NativeKind {
    pub fn is_set(self) -> bool {
        matches!(
            self,
            NativeKind::StringSet | NativeKind::NumberSet | NativeKind::BinarySet
        )
    }
}

impl fmt::Display for NativeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NativeKind::String => "string",
            NativeKind::Number => "number",
            NativeKind::Binary => "binary",
            NativeKind::StringSet => "string set",
            NativeKind::NumberSet => "number set",
            NativeKind::BinarySet => "binary set",
        })
    }
}

/// A value the marshaller can encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeValue {
    String(String),
    Number(Number),
    Binary(Binary),
    StringSet(BTreeSet<String>),
    NumberSet(BTreeSet<Number>),
    BinarySet(BTreeSet<Binary>),
}

impl NativeValue {
    pub fn kind(&self) -> NativeKind {
        match self {
            NativeValue::String(_) => NativeKind::String,
            NativeValue::Number(_) => NativeKind::Number,
            NativeValue::Binary(_) => NativeKind::Binary,
            NativeValue::StringSet(_) => NativeKind::StringSet,
            NativeValue::NumberSet(_) => NativeKind::NumberSet,
            NativeValue::BinarySet(_) => NativeKind::BinarySet,
        }
    }

    pub fn string_set<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        NativeValue::StringSet(items.into_iter().map(Into::into).collect())
    }

    pub fn number_set<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Number>,
    {
        NativeValue::NumberSet(items.into_iter().map(Into::into).collect())
    }

    pub fn binary_set<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Binary>,
    {
        NativeValue::BinarySet(items.into_iter().map(Into::into).collect())
    }

    /// Builds a set from loosely typed elements.
    ///
    /// All elements must be scalars of one kind; an empty input, a nested set
    /// or mixed kinds have no wire representation.
    pub fn try_set<I>(items: I) -> Result<Self, EncodeError>
    where
        I: IntoIterator<Item = NativeValue>,
    {
        let mut items = items.into_iter().peekable();
        let kind = match items.peek() {
            Some(first) => first.kind(),
            None => {
                return Err(EncodeError::UnsupportedType(
                    "empty set has no element type".to_owned(),
                ))
            }
        };
        if kind.is_set() {
            return Err(EncodeError::UnsupportedType(format!(
                "set of {kind} elements"
            )));
        }
        let mismatch = |other: NativeKind| {
            EncodeError::UnsupportedType(format!("set mixes {kind} and {other} elements"))
        };
        match kind {
            NativeKind::String => items
                .map(|item| match item {
                    NativeValue::String(s) => Ok(s),
                    other => Err(mismatch(other.kind())),
                })
                .collect::<Result<_, _>>()
                .map(NativeValue::StringSet),
            NativeKind::Number => items
                .map(|item| match item {
                    NativeValue::Number(n) => Ok(n),
                    other => Err(mismatch(other.kind())),
                })
                .collect::<Result<_, _>>()
                .map(NativeValue::NumberSet),
            _ => items
                .map(|item| match item {
                    NativeValue::Binary(b) => Ok(b),
                    other => Err(mismatch(other.kind())),
                })
                .collect::<Result<_, _>>()
                .map(NativeValue::BinarySet),
        }
    }
}

impl From<String> for NativeValue {
    fn from(s: String) -> Self {
        NativeValue::String(s)
    }
}

impl From<&str> for NativeValue {
    fn from(s: &str) -> Self {
        NativeValue::String(s.to_owned())
    }
}

impl From<Number> for NativeValue {
    fn from(n: Number) -> Self {
        NativeValue::Number(n)
    }
}

impl From<Decimal> for NativeValue {
    fn from(d: Decimal) -> Self {
        NativeValue::Number(Number::Decimal(d))
    }
}

impl From<f64> for NativeValue {
    fn from(f: f64) -> Self {
        NativeValue::Number(Number::Float(f))
    }
}

impl From<Binary> for NativeValue {
    fn from(b: Binary) -> Self {
        NativeValue::Binary(b)
    }
}

impl From<BTreeSet<String>> for NativeValue {
    fn from(set: BTreeSet<String>) -> Self {
        NativeValue::StringSet(set)
    }
}

impl From<BTreeSet<Number>> for NativeValue {
    fn from(set: BTreeSet<Number>) -> Self {
        NativeValue::NumberSet(set)
    }
}

impl From<BTreeSet<Binary>> for NativeValue {
    fn from(set: BTreeSet<Binary>) -> Self {
        NativeValue::BinarySet(set)
    }
}
