#![doc = include_str!("../README.md")]

pub mod encode;
pub mod error;
pub mod normalize;
pub mod options;
pub mod value;

mod de;
mod ser;

pub use crate::encode::{Converter, DeclaredType, DynamicConverter};
pub use crate::error::{Error, Result};
pub use crate::options::CodecOptions;
pub use crate::value::{DynamicValue, Map};

use std::io::{Read, Write};

/// Decode a JSON document into its normalized dynamic form.
///
/// Malformed input surfaces as [`Error::Json`]; normalization itself cannot
/// fail.
pub fn decode_from_str(s: &str) -> Result<DynamicValue> {
    let value = serde_json::from_str(s)?;
    Ok(value)
}

pub fn decode_from_reader<R: Read>(mut reader: R) -> Result<DynamicValue> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    decode_from_str(&s)
}

/// Encode `value` through the converter list in `options`, falling back to
/// the default JSON encoder.
pub fn encode_to_string(value: &DynamicValue, options: &CodecOptions) -> Result<String> {
    let out = crate::encode::encode_to_vec(value, options)?;
    String::from_utf8(out).map_err(|e| Error::Message(e.to_string()))
}

pub fn encode_to_writer<W: Write>(
    mut writer: W,
    value: &DynamicValue,
    options: &CodecOptions,
) -> Result<()> {
    let s = encode_to_string(value, options)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}
