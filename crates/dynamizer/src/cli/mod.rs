//! Command-line tools for converting between native JSON and wire JSON.
//!
//! Provides the core logic used by the binary entry points:
//! - `dynamize`: native JSON to wire JSON
//! - `undynamize`: wire JSON to native JSON
//!
//! Both read one document from stdin and write pretty-printed JSON.

use serde_json::Value;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::dynamizer::Dynamizer;
use crate::error::{DecodeError, EncodeError};
use crate::json::{
    item_from_json, item_to_json, native_from_json, native_to_json, wire_item_from_json,
    wire_item_to_json, NumberForm,
};
use crate::policy::NumericPolicy;
use crate::wire::WireValue;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("unknown option: {0}")]
    UnknownOption(String),
}

// ── Options ───────────────────────────────────────────────────────────────

/// Flags shared by both tools.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// `--lossy`: use the lossy numeric policy.
    pub lossy: bool,
    /// `--item`: the document is an object of attributes.
    pub item: bool,
}

impl CliOptions {
    /// Parses flags, skipping the program name.
    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        for arg in args.into_iter().skip(1) {
            match arg.as_ref() {
                "--lossy" => options.lossy = true,
                "--item" => options.item = true,
                other => return Err(CliError::UnknownOption(other.to_owned())),
            }
        }
        Ok(options)
    }

    fn numbers(self) -> NumberForm {
        if self.lossy {
            NumberForm::Float
        } else {
            NumberForm::Decimal
        }
    }
}

// ── dynamize ──────────────────────────────────────────────────────────────

/// Encodes a native JSON document to wire JSON.
pub fn dynamize(input: &str, options: CliOptions) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(input)?;
    let wire = if options.lossy {
        dynamize_with(Dynamizer::lossy(), &doc, options)?
    } else {
        dynamize_with(Dynamizer::new(), &doc, options)?
    };
    Ok(serde_json::to_string_pretty(&wire)?)
}

fn dynamize_with<P: NumericPolicy>(
    dynamizer: Dynamizer<P>,
    doc: &Value,
    options: CliOptions,
) -> Result<Value, CliError> {
    if options.item {
        let item = item_from_json(doc, options.numbers())?;
        Ok(wire_item_to_json(&dynamizer.encode_item(&item)?))
    } else {
        let native = native_from_json(doc, options.numbers())?;
        Ok(dynamizer.encode_json(&native)?)
    }
}

// ── undynamize ────────────────────────────────────────────────────────────

/// Decodes a wire JSON document to native JSON.
pub fn undynamize(input: &str, options: CliOptions) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(input)?;
    let native = if options.lossy {
        undynamize_with(Dynamizer::lossy(), &doc, options)?
    } else {
        undynamize_with(Dynamizer::new(), &doc, options)?
    };
    Ok(serde_json::to_string_pretty(&native)?)
}

fn undynamize_with<P: NumericPolicy>(
    dynamizer: Dynamizer<P>,
    doc: &Value,
    options: CliOptions,
) -> Result<Value, CliError> {
    if options.item {
        let item = dynamizer.decode_item(&wire_item_from_json(doc)?)?;
        Ok(item_to_json(&item)?)
    } else {
        let native = dynamizer.decode(&WireValue::from_json(doc)?)?;
        Ok(native_to_json(&native)?)
    }
}

// ── Logging ───────────────────────────────────────────────────────────────

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`.
///
/// Does nothing if a global subscriber is already set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
