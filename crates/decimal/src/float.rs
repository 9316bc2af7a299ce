//! Exact `f64` → [`Decimal`] conversion.
//!
//! A finite double is `mantissa × 2^e`. For `e < 0` that equals
//! `mantissa × 5^-e × 10^e`, so the exact decimal expansion only needs
//! multiplication of a big integer by small factors.

use crate::decimal::Decimal;

/// Limb base for the scratch big integer (9 decimal digits per limb).
const LIMB_BASE: u64 = 1_000_000_000;
const LIMB_DIGITS: usize = 9;

const MANTISSA_BITS: u32 = 52;
const EXPONENT_BIAS: i32 = 1075;

/// Little-endian base-10^9 unsigned integer.
struct Limbs(Vec<u32>);

impl Limbs {
    fn from_u64(mut n: u64) -> Self {
        let mut limbs = Vec::with_capacity(4);
        while n > 0 {
            limbs.push((n % LIMB_BASE) as u32);
            n /= LIMB_BASE;
        }
        Self(limbs)
    }

    fn mul_small(&mut self, factor: u32) {
        let mut carry: u64 = 0;
        for limb in &mut self.0 {
            let cur = u64::from(*limb) * u64::from(factor) + carry;
            *limb = (cur % LIMB_BASE) as u32;
            carry = cur / LIMB_BASE;
        }
        while carry > 0 {
            self.0.push((carry % LIMB_BASE) as u32);
            carry /= LIMB_BASE;
        }
    }

    /// Multiplies by `base^power`, batching as many factors per pass as fit in a `u32`.
    fn mul_pow(&mut self, base: u32, mut power: u32) {
        let mut batch = base;
        let mut batch_power = 1;
        while let Some(next) = batch.checked_mul(base) {
            batch = next;
            batch_power += 1;
        }
        while power >= batch_power {
            self.mul_small(batch);
            power -= batch_power;
        }
        if power > 0 {
            self.mul_small(base.pow(power));
        }
    }

    /// Decimal digits, most significant first.
    fn into_digits(self) -> Vec<u8> {
        let mut text = String::with_capacity(self.0.len() * LIMB_DIGITS);
        let mut limbs = self.0.iter().rev();
        if let Some(top) = limbs.next() {
            text.push_str(&top.to_string());
        }
        for limb in limbs {
            text.push_str(&format!("{limb:0width$}", width = LIMB_DIGITS));
        }
        text.bytes().map(|b| b - b'0').collect()
    }
}

impl Decimal {
    /// The exact decimal value of a finite `f64`; `None` for NaN and infinities.
    ///
    /// The result can carry many more digits than the shortest text that
    /// reads back as the same double: `from_f64(1.1)` is
    /// `1.100000000000000088817841970012523233890533447265625`.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        if value == 0.0 {
            return Some(Self::ZERO);
        }
        let bits = value.to_bits();
        let negative = bits >> 63 == 1;
        let biased = ((bits >> MANTISSA_BITS) & 0x7ff) as i32;
        let fraction = bits & ((1u64 << MANTISSA_BITS) - 1);
        let (mantissa, exp2) = if biased == 0 {
            (fraction, 1 - EXPONENT_BIAS)
        } else {
            (fraction | (1u64 << MANTISSA_BITS), biased - EXPONENT_BIAS)
        };

        let mut limbs = Limbs::from_u64(mantissa);
        let exponent = if exp2 >= 0 {
            limbs.mul_pow(2, exp2 as u32);
            0
        } else {
            limbs.mul_pow(5, exp2.unsigned_abs());
            exp2
        };
        Some(Self::trimmed(negative, limbs.into_digits(), exponent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limbs_multiply_across_boundaries() {
        let mut limbs = Limbs::from_u64(999_999_999);
        limbs.mul_small(1_000);
        assert_eq!(limbs.into_digits(), vec![9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0]);
    }

    #[test]
    fn mul_pow_matches_integer_power() {
        let mut limbs = Limbs::from_u64(3);
        limbs.mul_pow(5, 20);
        let expected = (3u128 * 5u128.pow(20)).to_string();
        let digits: String = limbs
            .into_digits()
            .into_iter()
            .map(|d| char::from(b'0' + d))
            .collect();
        assert_eq!(digits, expected);
    }

    #[test]
    fn dyadic_fractions_are_short() {
        assert_eq!(Decimal::from_f64(1.25).unwrap().to_string(), "1.25");
        assert_eq!(Decimal::from_f64(-0.5).unwrap().to_string(), "-0.5");
        assert_eq!(Decimal::from_f64(1024.0).unwrap().to_string(), "1024");
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(Decimal::from_f64(-0.0), Some(Decimal::ZERO));
    }

    #[test]
    fn non_finite_has_no_decimal() {
        assert_eq!(Decimal::from_f64(f64::NAN), None);
        assert_eq!(Decimal::from_f64(f64::INFINITY), None);
        assert_eq!(Decimal::from_f64(f64::NEG_INFINITY), None);
    }
}
