//! Marshalling between native values and a key-value store's
//! typed attribute-value wire format.
//!
//! Every wire value carries a type tag (`S`, `N`, `B`, `SS`, `NS`, `BS`) and a
//! text payload. [`Dynamizer`] maps [`NativeValue`]s to [`WireValue`]s and
//! back; its numeric policy decides what happens to binary floating-point
//! input:
//!
//! - [`Strict`] (the default) refuses floats whose exact value does not fit
//!   the store's 38 significant digits, so `1.1` is an error while `1.25` is
//!   fine.
//! - [`Lossy`] writes floats as their shortest text and decodes numbers to
//!   `f64`.
//!
//! ```
//! use dynamizer::{Dynamizer, LossyDynamizer, NativeValue, Number, WireValue};
//!
//! let strict = Dynamizer::new();
//! let wire = strict.encode(&NativeValue::number_set([1, 2, 3])).unwrap();
//! assert_eq!(wire, WireValue::NumberSet(vec!["1".into(), "2".into(), "3".into()]));
//! assert_eq!(strict.decode(&wire).unwrap(), NativeValue::number_set([1, 2, 3]));
//!
//! let lossy = LossyDynamizer::default();
//! let wire = lossy.encode(&NativeValue::from(1.1)).unwrap();
//! assert_eq!(wire, WireValue::Number("1.1".into()));
//! assert_eq!(lossy.decode(&wire).unwrap(), NativeValue::Number(Number::Float(1.1)));
//! ```

pub mod binary;
pub mod cli;
pub mod dynamizer;
pub mod error;
pub mod json;
pub mod policy;
pub mod value;
pub mod wire;

pub use binary::{Binary, BinaryError, BinaryMode, BinarySource};
pub use dynamizer::{Dynamizer, Item, LossyDynamizer, WireItem};
pub use error::{DecodeError, EncodeError};
pub use policy::{Lossy, NumericPolicy, Strict};
pub use value::{NativeKind, NativeValue, Number};
pub use wire::{WireTag, WireValue};

pub use dynamizer_decimal::{ContextError, Decimal, DecimalError, NumberContext};
