//! Error types for the binary codec.

use thiserror::Error;

use super::MAX_COUNT;

/// Errors that can occur while decoding or encoding the ISLA binary format.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BinError {
    /// The input did not start with `ISLAb` + version 1. Carries the bytes
    /// that were present (up to the 8-byte header length).
    #[error("bad header: expected \"ISLAb\" + version 1, found {header:02X?}")]
    BadHeader { header: Vec<u8> },

    /// A value header carried a type tag other than leaf, list or map.
    #[error("invalid value type tag {tag}")]
    InvalidType { tag: u8 },

    /// The input ended before a read completed. `what` names the read that
    /// failed.
    #[error("unexpected end of input reading {what}: needed {needed} bytes, {remaining} remain")]
    DecodeOutOfBounds {
        what: &'static str,
        needed: usize,
        remaining: usize,
    },

    /// A leaf payload, collection count or map key exceeded what the wire
    /// format can carry (28 bits for value headers, 32 bits for key
    /// lengths).
    #[error("{what} of length {len} exceeds the encodable maximum {max}")]
    EncodeTooLong {
        what: &'static str,
        len: usize,
        max: usize,
    },
}

impl BinError {
    pub(crate) fn too_long(what: &'static str, len: usize) -> Self {
        BinError::EncodeTooLong {
            what,
            len,
            max: MAX_COUNT,
        }
    }
}
