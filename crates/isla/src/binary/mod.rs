//! The ISLA binary format: length-tagged, little-endian, bounds-checked.
//!
//! A payload is the 8-byte file header (`ISLAb` + 3-byte big-endian version
//! `0x000001`) followed by one value. Every value starts with a 4-byte
//! little-endian word: the top 4 bits are the type tag (0 = leaf, 1 = list,
//! 2 = map), the low 28 bits are a byte length (leaf) or entry count
//! (list/map). Map entries carry an untagged 4-byte little-endian key
//! length before the key bytes. There is no padding, checksum or end
//! marker.

pub mod decoder;
pub mod encoder;
pub mod error;

pub use decoder::BinDecoder;
pub use encoder::BinEncoder;
pub use error::BinError;

use crate::value::BinValue;

/// File magic preceding every binary payload.
pub(crate) const MAGIC: &[u8; 5] = b"ISLAb";
/// Format version, big-endian, appended to the magic.
pub(crate) const VERSION: [u8; 3] = [0x00, 0x00, 0x01];

pub(crate) const TAG_LEAF: u8 = 0;
pub(crate) const TAG_LIST: u8 = 1;
pub(crate) const TAG_MAP: u8 = 2;

/// Low 28 bits of a value header word: the count/length field.
pub(crate) const COUNT_MASK: u32 = 0x0FFF_FFFF;
/// Largest leaf length or collection count the header word can carry.
pub const MAX_COUNT: usize = COUNT_MASK as usize;

/// Decodes an ISLA binary payload. Trailing bytes after the top value are
/// ignored; use [`decode_with_consumed`] to detect them.
pub fn decode(input: &[u8]) -> Result<BinValue, BinError> {
    BinDecoder::new().decode(input)
}

/// Decodes an ISLA binary payload and also returns how many input bytes the
/// header and top value consumed.
pub fn decode_with_consumed(input: &[u8]) -> Result<(BinValue, usize), BinError> {
    BinDecoder::new().decode_with_consumed(input)
}

/// Encodes any value (a bare leaf at the top is legal in binary) into an
/// ISLA binary payload.
pub fn encode(value: &BinValue) -> Result<Vec<u8>, BinError> {
    BinEncoder::new().encode(value)
}
