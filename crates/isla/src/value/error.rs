//! Accessor error type.

use thiserror::Error;

use super::Kind;

/// Errors raised by the fallible value accessors.
///
/// These are recoverable by construction: the `get_*` and `parse*` families
/// swallow them into caller-supplied fallbacks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Asked a value for a payload it does not carry.
    #[error("expected {requested}, found {actual}")]
    TypeMismatch { requested: Kind, actual: Kind },

    /// List position past the end.
    #[error("list index {index} out of range, length is {length}")]
    ListIndexOutOfRange { index: usize, length: usize },

    /// Map lookup for an absent key. Binary keys are rendered as uppercase
    /// hex pairs, the same form the `Display` impl uses.
    #[error("map key not found: {key}")]
    MapKeyNotFound { key: String },
}
