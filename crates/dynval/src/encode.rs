//! Encode dispatch through the registered converter list, plus the any-typed
//! converter that re-encodes through the default path without re-entering
//! itself.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::Result;
use crate::options::CodecOptions;
use crate::value::DynamicValue;

/// The declared type an encode call was dispatched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredType {
    /// The most general "any" type.
    Any,
    /// The value's concrete runtime shape.
    Concrete,
}

/// A registered encoder for some declared type.
///
/// Converters are stateless; one shared handle may serve concurrent calls.
pub trait Converter: Send + Sync {
    /// Stable identity, used when a filtered converter list is built.
    fn name(&self) -> &'static str;

    /// Whether this converter claims values declared as `declared`.
    fn handles(&self, declared: DeclaredType) -> bool;

    fn write(
        &self,
        out: &mut Vec<u8>,
        value: &DynamicValue,
        options: &CodecOptions,
    ) -> Result<()>;
}

/// Converter for the "any" declared type.
///
/// A composite value produced by this converter would dispatch straight back
/// into it on encode, so `write` builds a filtered copy of the options
/// without this converter and re-dispatches on the value's concrete shape.
/// The options the caller passed in are never modified.
pub struct DynamicConverter;

impl Converter for DynamicConverter {
    fn name(&self) -> &'static str {
        "dynamic"
    }

    fn handles(&self, declared: DeclaredType) -> bool {
        matches!(declared, DeclaredType::Any)
    }

    fn write(
        &self,
        out: &mut Vec<u8>,
        value: &DynamicValue,
        options: &CodecOptions,
    ) -> Result<()> {
        let mut filtered = options.clone();
        filtered.converters.retain(|c| c.name() != self.name());
        encode_value(out, value, DeclaredType::Concrete, &filtered)
    }
}

/// First registered converter claiming `declared` wins; otherwise the value
/// goes to the default JSON encoder.
pub(crate) fn encode_value(
    out: &mut Vec<u8>,
    value: &DynamicValue,
    declared: DeclaredType,
    options: &CodecOptions,
) -> Result<()> {
    for converter in &options.converters {
        if converter.handles(declared) {
            return converter.write(out, value, options);
        }
    }
    write_default(out, value, options)
}

fn write_default(out: &mut Vec<u8>, value: &DynamicValue, options: &CodecOptions) -> Result<()> {
    if options.pretty {
        let indent = b" ".repeat(options.indent);
        let formatter = PrettyFormatter::with_indent(&indent);
        let mut ser = serde_json::Serializer::with_formatter(&mut *out, formatter);
        value.serialize(&mut ser)?;
    } else {
        let mut ser = serde_json::Serializer::new(&mut *out);
        value.serialize(&mut ser)?;
    }
    Ok(())
}

pub(crate) fn encode_to_vec(value: &DynamicValue, options: &CodecOptions) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    encode_value(&mut out, value, DeclaredType::Any, options)?;
    Ok(out)
}
