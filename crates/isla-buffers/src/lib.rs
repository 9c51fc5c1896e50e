//! Byte-buffer plumbing for the ISLA binary codec.
//!
//! Two small building blocks:
//!
//! - [`Writer`] — an auto-growing byte buffer with a write cursor. Codecs
//!   write header words and payloads into it and call [`Writer::flush`] to
//!   take the finished bytes.
//! - [`Reader`] — a cursor over a borrowed byte slice whose reads are all
//!   bounds-checked and return [`BufferError::EndOfBuffer`] instead of
//!   panicking, so truncated input can never abort a decode.
//!
//! ISLA's wire format uses little-endian 32-bit words for value headers and
//! map key lengths, so that is the only multi-byte integer width provided.
//!
//! # Example
//!
//! ```
//! use isla_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.u32_le(0x1000_0002);
//! writer.buf(b"hi");
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.try_u32_le(), Ok(0x1000_0002));
//! assert_eq!(reader.try_buf(2), Ok(&b"hi"[..]));
//! ```

mod error;
mod reader;
mod writer;

pub use error::BufferError;
pub use reader::Reader;
pub use writer::Writer;
