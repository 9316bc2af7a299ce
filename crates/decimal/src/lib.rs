//! Exact decimal numbers for the typed attribute-value wire format.
//!
//! Numbers travel as decimal text (`{"N":"1.25"}`), so the in-process
//! representation has to hold any such text without rounding. [`Decimal`]
//! keeps an arbitrary-length coefficient and a base-10 exponent, renders
//! back to the same text it was parsed from (modulo normalisation), and can
//! take the exact expansion of any finite `f64`.
//!
//! [`NumberContext`] carries the store's limits on significant digits and
//! exponent range.
//!
//! # Example
//!
//! ```
//! use dynamizer_decimal::{Decimal, NumberContext};
//!
//! let n: Decimal = "1.250".parse().unwrap();
//! assert_eq!(n.to_string(), "1.25");
//! assert!(NumberContext::STORE.check(&n).is_ok());
//!
//! let exact = Decimal::from_f64(1.1).unwrap();
//! assert!(NumberContext::STORE.check(&exact).is_err());
//! ```

mod context;
mod decimal;
mod error;
mod float;

pub use context::NumberContext;
pub use decimal::Decimal;
pub use error::{ContextError, DecimalError};
