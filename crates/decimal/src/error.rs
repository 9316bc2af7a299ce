use thiserror::Error;

/// Error type for parsing decimal text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecimalError {
    #[error("empty decimal literal")]
    Empty,
    #[error("invalid decimal literal `{0}`")]
    Invalid(String),
    #[error("exponent out of range in `{0}`")]
    ExponentRange(String),
}

/// A number context limit that a value violates.
///
/// Variant names follow the decimal-arithmetic signals they correspond to.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error("Inexact: {digits} significant digits exceed precision {precision}")]
    Inexact { digits: usize, precision: usize },
    #[error("Overflow: adjusted exponent {adjusted} exceeds {max}")]
    Overflow { adjusted: i64, max: i64 },
    #[error("Underflow: exponent {exponent} is below {min}")]
    Underflow { exponent: i64, min: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(DecimalError::Empty.to_string(), "empty decimal literal");
        assert_eq!(
            DecimalError::Invalid("1x".into()).to_string(),
            "invalid decimal literal `1x`"
        );
        assert_eq!(
            ContextError::Inexact {
                digits: 52,
                precision: 38
            }
            .to_string(),
            "Inexact: 52 significant digits exceed precision 38"
        );
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ContextError::Overflow {
            adjusted: 127,
            max: 126,
        });
        assert_eq!(err.to_string(), "Overflow: adjusted exponent 127 exceeds 126");
    }
}
