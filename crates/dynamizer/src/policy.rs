//! Numeric policies: how `N` / `NS` payloads are produced and read back.
//!
//! [`Strict`] keeps numbers exact end to end and refuses floats that would
//! be rounded; [`Lossy`] renders floats directly and decodes to `f64`.

use dynamizer_decimal::{Decimal, NumberContext};

use crate::error::{DecodeError, EncodeError};
use crate::value::Number;

/// Floats at or above this magnitude are written in exponent form.
const FLOAT_EXP_UPPER: f64 = 1e16;
/// Non-zero floats below this magnitude are written in exponent form.
const FLOAT_EXP_LOWER: f64 = 1e-4;

/// Conversion between [`Number`] and wire decimal text.
pub trait NumericPolicy {
    fn encode_number(&self, number: &Number) -> Result<String, EncodeError>;
    fn decode_number(&self, text: &str) -> Result<Number, DecodeError>;
}

/// Exact decimals only. Floats are accepted when their exact binary value
/// fits the store's number context (`1.25`), and rejected otherwise (`1.1`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Strict;

/// Floats are rendered as their shortest round-tripping text and numbers
/// decode to `f64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lossy;

impl NumericPolicy for Strict {
    fn encode_number(&self, number: &Number) -> Result<String, EncodeError> {
        match number {
            Number::Decimal(d) => encode_decimal(d),
            Number::Float(f) => {
                let exact = Decimal::from_f64(*f).ok_or_else(|| non_finite(*f))?;
                NumberContext::STORE
                    .check(&exact)
                    .map_err(|signal| EncodeError::NumericPrecision {
                        value: f.to_string(),
                        signal,
                    })?;
                Ok(exact.to_string())
            }
        }
    }

    fn decode_number(&self, text: &str) -> Result<Number, DecodeError> {
        let d = parse_decimal(text)?;
        NumberContext::STORE
            .check(&d)
            .map_err(|e| DecodeError::invalid_number(text, e))?;
        Ok(Number::Decimal(d))
    }
}

impl NumericPolicy for Lossy {
    fn encode_number(&self, number: &Number) -> Result<String, EncodeError> {
        match number {
            Number::Decimal(d) => encode_decimal(d),
            Number::Float(f) if f.is_finite() => Ok(format_float(*f)),
            Number::Float(f) => Err(non_finite(*f)),
        }
    }

    fn decode_number(&self, text: &str) -> Result<Number, DecodeError> {
        let value = parse_decimal(text)?.to_f64();
        if !value.is_finite() {
            return Err(DecodeError::invalid_number(text, "outside the f64 range"));
        }
        Ok(Number::Float(value))
    }
}

fn encode_decimal(d: &Decimal) -> Result<String, EncodeError> {
    let text = d.to_string();
    match NumberContext::STORE.check(d) {
        Ok(()) => Ok(text),
        Err(signal) => Err(EncodeError::NumericPrecision {
            value: text,
            signal,
        }),
    }
}

// Parsing through `Decimal` keeps `inf` / `NaN` spellings, which `f64::from_str`
// would accept, out of the lossy path too.
fn parse_decimal(text: &str) -> Result<Decimal, DecodeError> {
    text.parse::<Decimal>()
        .map_err(|e| DecodeError::invalid_number(text, e))
}

fn non_finite(f: f64) -> EncodeError {
    EncodeError::UnsupportedType(format!("non-finite number {f}"))
}

fn format_float(f: f64) -> String {
    let magnitude = f.abs();
    if magnitude != 0.0 && !(FLOAT_EXP_LOWER..FLOAT_EXP_UPPER).contains(&magnitude) {
        format!("{f:e}")
    } else if f == 0.0 {
        "0".to_owned()
    } else {
        f.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_text_uses_exponent_only_at_the_extremes() {
        assert_eq!(format_float(1.1), "1.1");
        assert_eq!(format_float(54.0), "54");
        assert_eq!(format_float(-0.0), "0");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(0.00001), "1e-5");
        assert_eq!(format_float(1e16), "1e16");
        assert_eq!(format_float(-2.5e20), "-2.5e20");
        assert_eq!(format_float(1234567.5), "1234567.5");
    }

    #[test]
    fn strict_decode_enforces_store_limits() {
        assert!(Strict.decode_number("1E+126").is_ok());
        assert!(matches!(
            Strict.decode_number("1E+127"),
            Err(DecodeError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn lossy_decode_rejects_float_spellings() {
        for text in ["inf", "NaN", "infinity", "1e999"] {
            assert!(Lossy.decode_number(text).is_err(), "text={text}");
        }
    }
}
