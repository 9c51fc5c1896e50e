//! Reader error type.

use thiserror::Error;

/// Error returned by the bounds-checked [`Reader`](crate::Reader) methods.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    #[error("unexpected end of buffer")]
    EndOfBuffer,
}
