//! The ISLA text format: UTF-8, line-oriented, tab-indented.
//!
//! A document is the header line `ISLA1` followed by one line per entry.
//! Nesting is expressed by leading tabs, `;` lines are comments, `-` lines
//! are list items, `KEY=VALUE` and `KEY:` lines are map entries, and lone
//! `"` lines delimit multi-line string values.

pub mod decoder;
pub mod encoder;
pub mod error;

pub use decoder::TextDecoder;
pub use encoder::TextEncoder;
pub use error::TextError;

use crate::value::TextValue;

/// Decodes an ISLA text document.
pub fn decode(input: &str) -> Result<TextValue, TextError> {
    TextDecoder::new(input).decode()
}

/// Decodes an ISLA text document from an already-split line sequence.
pub fn decode_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<TextValue, TextError> {
    TextDecoder::from_lines(lines).decode()
}

/// Encodes a value (top tag must be list or map) into an ISLA text document.
pub fn encode(value: &TextValue) -> Result<String, TextError> {
    TextEncoder::new().encode(value)
}
