//! `BinDecoder` — parses an ISLA binary payload into a [`BinValue`].

use std::collections::BTreeMap;

use isla_buffers::Reader;

use super::error::BinError;
use super::{COUNT_MASK, MAGIC, TAG_LEAF, TAG_LIST, TAG_MAP, VERSION};
use crate::value::BinValue;

/// Stateless binary decoder.
///
/// Every read is bounds-checked before touching the input, so a truncated
/// or hostile payload fails with a typed error instead of panicking, and no
/// partial value is ever returned.
#[derive(Default)]
pub struct BinDecoder;

impl BinDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes the header and top value. Trailing bytes are ignored.
    pub fn decode(&self, input: &[u8]) -> Result<BinValue, BinError> {
        self.decode_with_consumed(input).map(|(value, _)| value)
    }

    /// Decodes the header and top value, returning the consumed byte count
    /// so callers can detect (and reject, if they wish) trailing bytes.
    pub fn decode_with_consumed(&self, input: &[u8]) -> Result<(BinValue, usize), BinError> {
        let mut reader = Reader::new(input);
        let header = reader.try_buf(MAGIC.len() + VERSION.len()).map_err(|_| {
            BinError::BadHeader {
                header: input.to_vec(),
            }
        })?;
        if &header[..MAGIC.len()] != MAGIC || header[MAGIC.len()..] != VERSION {
            return Err(BinError::BadHeader {
                header: header.to_vec(),
            });
        }
        let value = self.read_any(&mut reader)?;
        Ok((value, reader.pos()))
    }

    fn read_any(&self, reader: &mut Reader) -> Result<BinValue, BinError> {
        let word = read_u32_le(reader, "value header")?;
        let tag = (word >> 28) as u8;
        let count = (word & COUNT_MASK) as usize;
        match tag {
            TAG_LEAF => {
                let payload = read_bytes(reader, count, "leaf payload")?;
                Ok(BinValue::Bin(payload.to_vec()))
            }
            TAG_LIST => {
                // Each element needs at least a 4-byte header, which bounds
                // the pre-allocation for hostile counts.
                let mut items = Vec::with_capacity(count.min(reader.remaining() / 4));
                for _ in 0..count {
                    items.push(self.read_any(reader)?);
                }
                Ok(BinValue::List(items))
            }
            TAG_MAP => {
                let mut entries = BTreeMap::new();
                for _ in 0..count {
                    let key_len = read_u32_le(reader, "map key length")? as usize;
                    let key = read_bytes(reader, key_len, "map key")?.to_vec();
                    let value = self.read_any(reader)?;
                    // Duplicate keys: last write wins.
                    entries.insert(key, value);
                }
                Ok(BinValue::Map(entries))
            }
            _ => Err(BinError::InvalidType { tag }),
        }
    }
}

fn read_u32_le(reader: &mut Reader, what: &'static str) -> Result<u32, BinError> {
    reader.try_u32_le().map_err(|_| BinError::DecodeOutOfBounds {
        what,
        needed: 4,
        remaining: reader.remaining(),
    })
}

fn read_bytes<'a>(
    reader: &mut Reader<'a>,
    size: usize,
    what: &'static str,
) -> Result<&'a [u8], BinError> {
    reader.try_buf(size).map_err(|_| BinError::DecodeOutOfBounds {
        what,
        needed: size,
        remaining: reader.remaining(),
    })
}
