//! Error types for the text codec.

use thiserror::Error;

/// Errors that can occur while decoding or encoding the ISLA text format.
///
/// Decoder variants carry the 1-based line number where the fault was
/// detected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    /// The first line was not exactly `ISLA1` (an empty input lands here
    /// too). Carries the offending line.
    #[error("bad header: expected \"ISLA1\", found {header:?}")]
    BadHeader { header: String },

    /// A line was indented deeper than the scope it belongs to.
    #[error("line {line}: indented deeper than the current scope, level {level}")]
    NestingTooDeep { level: usize, line: usize },

    /// A content line inside a list scope did not start with `-`.
    #[error("line {line}: expected a list item starting with '-'")]
    ExpectedListItem { line: usize },

    /// A `:` scope opener was followed by trailing text on the same line.
    #[error("line {line}: unexpected text after ':': {trailing:?}")]
    UnexpectedAfterColon { line: usize, trailing: String },

    /// A content line inside a map scope had no un-escaped `=` or `:`.
    #[error("line {line}: map entry has no un-escaped '=' or ':'")]
    MissingKeyValueSeparator { line: usize },

    /// A multi-line value was opened but no lone `"` line closed it.
    #[error("multi-line value opened at line {line} is never closed")]
    UnterminatedMultiLineValue { line: usize },

    /// A `:` opener promised a nested scope but the input ended first.
    ///
    /// Retained from the reference failure taxonomy; this implementation
    /// decodes an opened-but-empty scope to the `None` sentinel at EOF as
    /// well as at dedent, so current decode paths never produce it.
    #[error("line {line}: scope opened but the input ended before any content")]
    ExpectedScopeBeforeEof { line: usize },

    /// The encoder was handed a top-level value the format cannot carry.
    #[error("value not encodable: {reason}")]
    NotEncodable { reason: &'static str },
}
