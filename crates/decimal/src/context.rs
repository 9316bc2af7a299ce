//! Numeric limits of the remote store.

use crate::decimal::Decimal;
use crate::error::ContextError;

/// Precision and exponent limits a number must satisfy to be stored exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberContext {
    /// Maximum number of significant digits.
    pub precision: usize,
    /// Largest allowed adjusted exponent (`x` in `d.ddd × 10^x`).
    pub max_adjusted_exponent: i64,
    /// Smallest allowed exponent of the least significant digit.
    pub min_exponent: i64,
}

impl NumberContext {
    /// The store's number context: 38 digits, `Emax = 126`, `Emin = -128`
    /// with subnormals down to `Emin - precision + 1`.
    pub const STORE: NumberContext = NumberContext {
        precision: 38,
        max_adjusted_exponent: 126,
        min_exponent: -165,
    };

    /// Checks that `value` is representable without rounding.
    pub fn check(&self, value: &Decimal) -> Result<(), ContextError> {
        if value.is_zero() {
            return Ok(());
        }
        let digits = value.precision();
        if digits > self.precision {
            return Err(ContextError::Inexact {
                digits,
                precision: self.precision,
            });
        }
        let adjusted = value.adjusted_exponent();
        if adjusted > self.max_adjusted_exponent {
            return Err(ContextError::Overflow {
                adjusted,
                max: self.max_adjusted_exponent,
            });
        }
        let exponent = i64::from(value.exponent());
        if exponent < self.min_exponent {
            return Err(ContextError::Underflow {
                exponent,
                min: self.min_exponent,
            });
        }
        Ok(())
    }
}

impl Default for NumberContext {
    fn default() -> Self {
        Self::STORE
    }
}
