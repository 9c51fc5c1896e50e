//! Encoder and decoder for the **ISLA** serialization format.
//!
//! ISLA comes in two variants sharing one data model:
//!
//! - a human-readable **text** form — UTF-8, tab-indented, comment-bearing
//!   (`;` lines), with multi-line string values and an escape grammar for
//!   awkward map keys;
//! - a compact **binary** form — length-tagged values with a 4-bit type /
//!   28-bit count header word, fully bounds-checked on decode.
//!
//! Leaves are plain strings in text and plain bytes in binary; typed
//! interpretation (numbers, dates, …) is left to callers. The two variants
//! therefore use separate value types, [`TextValue`] and [`BinValue`], so
//! map keys always match the leaf type.
//!
//! # Quick start
//!
//! ```
//! let doc = "ISLA1\nname=Alice\nscores:\n\t-95\n\t-87";
//! let value = isla::decode_text(doc).unwrap();
//! assert_eq!(value["name"], "Alice");
//! assert_eq!(value["scores"][1], "87");
//!
//! let text = isla::encode_text(&value).unwrap();
//! assert_eq!(isla::decode_text(&text).unwrap(), value);
//! ```
//!
//! Binary works the same way over bytes:
//!
//! ```
//! use isla::BinValue;
//!
//! let v = BinValue::map([(
//!     b"grid".to_vec(),
//!     BinValue::list([
//!         BinValue::list([b"\x01".as_slice(), b"\x02", b"\x03"]),
//!         BinValue::list([b"\x04".as_slice(), b"\x05", b"\x06"]),
//!     ]),
//! )]);
//! let bytes = isla::encode_binary(&v).unwrap();
//! let back = isla::decode_binary(&bytes).unwrap();
//! assert_eq!(back["grid"][1][2], *b"\x06");
//! ```
//!
//! # Modules
//!
//! - [`value`] — [`TextValue`] / [`BinValue`] trees and their accessors
//! - [`text`] — text decoder/encoder ([`decode_text`], [`encode_text`])
//! - [`binary`] — binary decoder/encoder ([`decode_binary`], [`encode_binary`])
//! - [`json`] — one-way export of either tree to `serde_json::Value`
//!
//! Decoding never panics on untrusted input: every failure is a typed
//! error ([`TextError`], [`BinError`]) carrying enough context to locate
//! the fault, and no partial value is returned.

pub mod binary;
pub mod json;
pub mod text;
pub mod value;

pub use binary::{
    decode as decode_binary, decode_with_consumed as decode_binary_with_consumed,
    encode as encode_binary, BinDecoder, BinEncoder, BinError,
};
pub use text::{
    decode as decode_text, decode_lines as decode_text_lines, encode as encode_text, TextDecoder,
    TextEncoder, TextError,
};
pub use value::{
    BinEntries, BinIndex, BinKey, BinValue, Kind, TextEntries, TextIndex, TextKey, TextValue,
    ValueError,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_binary_share_structure() {
        let text = decode_text("ISLA1\nuser:\n\tname=Alice\n\t-ish\\:=maybe").unwrap();
        assert_eq!(text["user"]["name"], "Alice");
        assert_eq!(text["user"]["-ish:"], "maybe");

        let bin = BinValue::map([(
            b"user".to_vec(),
            BinValue::map([(b"name".to_vec(), BinValue::leaf(*b"Alice"))]),
        )]);
        let bytes = encode_binary(&bin).unwrap();
        assert_eq!(decode_binary(&bytes).unwrap()["user"]["name"], *b"Alice");
    }

    #[test]
    fn text_roundtrip_through_binary_leaves() {
        // The two formats are independent; moving data between them is a
        // caller concern, but the value shapes line up one-to-one.
        let text = decode_text("ISLA1\n-a\n-b").unwrap();
        let bin = BinValue::list(
            text.list_or_empty()
                .iter()
                .map(|v| BinValue::leaf(v.leaf_or_empty().as_bytes().to_vec()))
                .collect::<Vec<_>>(),
        );
        let bytes = encode_binary(&bin).unwrap();
        assert_eq!(decode_binary(&bytes).unwrap()[1], *b"b");
    }
}
