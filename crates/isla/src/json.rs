//! One-way converters from ISLA values to `serde_json::Value`.
//!
//! Useful for debugging and for handing decoded trees to JSON-speaking
//! tooling. Binary leaves (and map keys that are not UTF-8) are rendered as
//! `data:application/octet-stream;base64,…` strings, so no byte content is
//! lost in the conversion.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::Value;

use crate::value::{BinValue, TextValue};

const BIN_URI_PREFIX: &str = "data:application/octet-stream;base64,";

/// Converts a text value: leaves to strings, `None` to `null`.
pub fn text_to_json(value: &TextValue) -> Value {
    match value {
        TextValue::Str(s) => Value::String(s.clone()),
        TextValue::List(items) => Value::Array(items.iter().map(text_to_json).collect()),
        TextValue::Map(entries) => Value::Object(
            entries
                .iter()
                .map(|(k, v)| (k.clone(), text_to_json(v)))
                .collect(),
        ),
        TextValue::None => Value::Null,
    }
}

/// Converts a binary value: leaves become data-URI strings; UTF-8 map keys
/// stay verbatim, other keys get the same data-URI treatment.
pub fn bin_to_json(value: &BinValue) -> Value {
    match value {
        BinValue::Bin(bytes) => Value::String(bytes_to_uri(bytes)),
        BinValue::List(items) => Value::Array(items.iter().map(bin_to_json).collect()),
        BinValue::Map(entries) => Value::Object(
            entries
                .iter()
                .map(|(k, v)| {
                    let key = match std::str::from_utf8(k) {
                        Ok(s) => s.to_owned(),
                        Err(_) => bytes_to_uri(k),
                    };
                    (key, bin_to_json(v))
                })
                .collect(),
        ),
    }
}

fn bytes_to_uri(bytes: &[u8]) -> String {
    format!("{BIN_URI_PREFIX}{}", BASE64.encode(bytes))
}
