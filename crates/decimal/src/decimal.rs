//! [`Decimal`]: exact base-10 number with an arbitrary-length coefficient.

use std::cmp::Ordering;
use std::fmt;
use std::iter;
use std::str::FromStr;

use crate::error::DecimalError;

/// Integers whose adjusted exponent is below this are printed without an
/// exponent (38 digits, the widest number the store accepts).
const PLAIN_INTEGER_DIGITS: i64 = 38;

/// Fractions whose adjusted exponent is at least this are printed in plain
/// positional notation.
const PLAIN_FRACTION_MIN_ADJUSTED: i64 = -6;

/// An exact decimal number: `(-1)^negative * coefficient * 10^exponent`.
///
/// Values are always normalised: the coefficient has no leading or trailing
/// zeros, and zero is unsigned with exponent 0. Derived equality and hashing
/// are therefore numeric equality (`1.0 == 1.00 == 1`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Decimal {
    negative: bool,
    /// Coefficient digits (each `0..=9`), most significant first. Empty for zero.
    digits: Vec<u8>,
    exponent: i32,
}

impl Decimal {
    pub const ZERO: Decimal = Decimal {
        negative: false,
        digits: Vec::new(),
        exponent: 0,
    };

    /// Builds a normalised value. Callers guarantee that `exponent` plus the
    /// number of trailing zeros fits in an `i32`.
    pub(crate) fn trimmed(negative: bool, mut digits: Vec<u8>, exponent: i32) -> Self {
        let lead = digits.iter().take_while(|&&d| d == 0).count();
        digits.drain(..lead);
        if digits.is_empty() {
            return Self::ZERO;
        }
        let trail = digits.iter().rev().take_while(|&&d| d == 0).count();
        digits.truncate(digits.len() - trail);
        Self {
            negative,
            digits,
            exponent: exponent.saturating_add(trail as i32),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// `true` for values strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Number of significant digits (1 for zero).
    pub fn precision(&self) -> usize {
        self.digits.len().max(1)
    }

    /// Exponent of the least significant coefficient digit.
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Exponent of the most significant digit, i.e. the `x` in `d.ddd × 10^x`.
    pub fn adjusted_exponent(&self) -> i64 {
        if self.is_zero() {
            return 0;
        }
        i64::from(self.exponent) + self.digits.len() as i64 - 1
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            ..self.clone()
        }
    }

    /// Nearest `f64` (round-half-even, saturating to infinity).
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        let mut text = String::with_capacity(self.digits.len() + 16);
        if self.negative {
            text.push('-');
        }
        text.extend(self.digits.iter().map(|&d| char::from(b'0' + d)));
        text.push('e');
        text.push_str(&self.exponent.to_string());
        text.parse().unwrap_or(f64::NAN)
    }

    fn coefficient_text(&self) -> String {
        self.digits.iter().map(|&d| char::from(b'0' + d)).collect()
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.adjusted_exponent()
            .cmp(&other.adjusted_exponent())
            // Without trailing zeros, lexicographic digit order is numeric order.
            .then_with(|| self.digits.cmp(&other.digits))
    }

    fn signum(&self) -> i8 {
        match (self.is_zero(), self.negative) {
            (true, _) => 0,
            (false, true) => -1,
            (false, false) => 1,
        }
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    /// Parses `[+-]? (digits [. digits?] | . digits) ((e|E) [+-]? digits)?`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DecimalError::Empty);
        }
        let invalid = || DecimalError::Invalid(s.to_owned());
        let out_of_range = || DecimalError::ExponentRange(s.to_owned());
        let bytes = s.as_bytes();

        let mut i = 0;
        let negative = match bytes[0] {
            b'-' => {
                i += 1;
                true
            }
            b'+' => {
                i += 1;
                false
            }
            _ => false,
        };

        let mut digits = Vec::with_capacity(bytes.len());
        let mut frac_len: i64 = 0;
        let mut seen_point = false;
        while i < bytes.len() {
            match bytes[i] {
                b @ b'0'..=b'9' => {
                    digits.push(b - b'0');
                    if seen_point {
                        frac_len += 1;
                    }
                }
                b'.' if !seen_point => seen_point = true,
                _ => break,
            }
            i += 1;
        }
        if digits.is_empty() {
            return Err(invalid());
        }

        let mut exponent: i64 = 0;
        if i < bytes.len() {
            if !matches!(bytes[i], b'e' | b'E') {
                return Err(invalid());
            }
            let text = &s[i + 1..];
            let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
            if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            exponent = text.parse().map_err(|_| out_of_range())?;
        }

        let exponent = exponent.checked_sub(frac_len).ok_or_else(out_of_range)?;
        let fits = |e: i64| i32::try_from(e).is_ok();
        if !fits(exponent) || !fits(exponent + digits.len() as i64) {
            return Err(out_of_range());
        }
        Ok(Self::trimmed(negative, digits, exponent as i32))
    }
}

impl fmt::Display for Decimal {
    /// Renders the exact value: plain notation for integers of up to 38 digits
    /// and for fractions down to `1e-6`, scientific notation otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let coefficient = self.coefficient_text();
        let exponent = i64::from(self.exponent);
        let adjusted = self.adjusted_exponent();

        let mut out = String::with_capacity(coefficient.len() + 8);
        if self.negative {
            out.push('-');
        }
        if exponent >= 0 && adjusted < PLAIN_INTEGER_DIGITS {
            out.push_str(&coefficient);
            out.extend(iter::repeat('0').take(exponent as usize));
        } else if exponent < 0 && adjusted >= PLAIN_FRACTION_MIN_ADJUSTED {
            let point = coefficient.len() as i64 + exponent;
            if point > 0 {
                let (int, frac) = coefficient.split_at(point as usize);
                out.push_str(int);
                out.push('.');
                out.push_str(frac);
            } else {
                out.push_str("0.");
                out.extend(iter::repeat('0').take((-point) as usize));
                out.push_str(&coefficient);
            }
        } else {
            let (first, rest) = coefficient.split_at(1);
            out.push_str(first);
            if !rest.is_empty() {
                out.push('.');
                out.push_str(rest);
            }
            out.push('E');
            if adjusted >= 0 {
                out.push('+');
            }
            out.push_str(&adjusted.to_string());
        }
        f.write_str(&out)
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.signum().cmp(&other.signum()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        let magnitude = self.cmp_magnitude(other);
        if self.negative {
            magnitude.reverse()
        } else {
            magnitude
        }
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn integer_digits(magnitude: u128) -> Vec<u8> {
    magnitude.to_string().bytes().map(|b| b - b'0').collect()
}

macro_rules! from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Decimal {
            fn from(n: $t) -> Self {
                Self::trimmed(n < 0, integer_digits(n.unsigned_abs() as u128), 0)
            }
        }
    )*};
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Decimal {
            fn from(n: $t) -> Self {
                Self::trimmed(false, integer_digits(n as u128), 0)
            }
        }
    )*};
}

from_signed!(i8, i16, i32, i64, i128, isize);
from_unsigned!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn normalises_on_parse() {
        let d = dec("001.2500");
        assert_eq!(d.digits, vec![1, 2, 5]);
        assert_eq!(d.exponent, -2);
        assert!(!d.is_negative());
    }

    #[test]
    fn zero_is_unsigned() {
        assert_eq!(dec("-0.000"), Decimal::ZERO);
        assert_eq!(dec("0e99"), Decimal::ZERO);
        assert!(!dec("-0").is_negative());
        assert_eq!(Decimal::default(), Decimal::ZERO);
    }

    #[test]
    fn adjusted_exponent_and_precision() {
        let d = dec("123.45");
        assert_eq!(d.precision(), 5);
        assert_eq!(d.adjusted_exponent(), 2);
        assert_eq!(dec("0.00012").adjusted_exponent(), -4);
        assert_eq!(Decimal::ZERO.precision(), 1);
    }

    #[test]
    fn trailing_integer_zeros_move_to_exponent() {
        let d = Decimal::from(12_000u32);
        assert_eq!(d.digits, vec![1, 2]);
        assert_eq!(d.exponent, 3);
        assert_eq!(d.to_string(), "12000");
    }

    #[test]
    fn extreme_integers() {
        assert_eq!(Decimal::from(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(Decimal::from(u64::MAX).to_string(), "18446744073709551615");
        // 39 digits: past the plain-integer width.
        assert_eq!(
            Decimal::from(i128::MIN).to_string(),
            "-1.70141183460469231731687303715884105728E+38"
        );
    }
}
