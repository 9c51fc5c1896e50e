//! `TextDecoder` — parses ISLA text lines into a [`TextValue`].
//!
//! The decoder works on a pre-split line slice with a single forward
//! cursor. Scopes are parsed recursively: a scope consumes content lines at
//! exactly its nesting level and stops (without consuming) at the first
//! shallower line, so a multi-level dedent unwinds naturally as each
//! enclosing scope re-classifies the same line. The first content line of a
//! scope fixes its shape: `-` means list, anything else means map; a scope
//! that closes before any content line decodes to the `None` sentinel.

use std::collections::BTreeMap;

use super::error::TextError;
use crate::value::TextValue;

/// The exact first line of every ISLA text document.
pub(crate) const HEADER: &str = "ISLA1";

/// Streaming-free text decoder over a borrowed line sequence.
pub struct TextDecoder<'a> {
    lines: Vec<&'a str>,
    /// Index of the next unconsumed line (0-based; errors report 1-based).
    pos: usize,
}

enum Scope {
    List(Vec<TextValue>),
    Map(BTreeMap<String, TextValue>),
}

fn close_scope(shape: Option<Scope>) -> TextValue {
    match shape {
        Some(Scope::List(items)) => TextValue::List(items),
        Some(Scope::Map(entries)) => TextValue::Map(entries),
        None => TextValue::None,
    }
}

fn count_tabs(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b'\t').count()
}

/// Splits a map content line into `(key, op, tail)` at the first un-escaped
/// `=` or `:`, applying the key escape rules: `\=` `\:` `\-` yield the bare
/// character, any other backslash passes through un-consumed (so scanning
/// resumes at the following character), and a trailing backslash is kept.
/// Returns `None` when the line has no un-escaped separator.
fn split_entry(content: &str) -> Option<(String, u8, &str)> {
    let bytes = content.as_bytes();
    let mut key = String::new();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => match bytes.get(i + 1).copied() {
                Some(next @ (b'=' | b':' | b'-')) => {
                    key.push(next as char);
                    i += 2;
                }
                _ => {
                    key.push('\\');
                    i += 1;
                }
            },
            op @ (b'=' | b':') => return Some((key, op, &content[i + 1..])),
            _ => {
                // The separators are ASCII, so a bytewise scan cannot split
                // a multi-byte character.
                let start = i;
                while i < bytes.len() && !matches!(bytes[i], b'\\' | b'=' | b':') {
                    i += 1;
                }
                key.push_str(&content[start..i]);
            }
        }
    }
    None
}

impl<'a> TextDecoder<'a> {
    /// Creates a decoder over a full document, splitting it on LF.
    pub fn new(input: &'a str) -> Self {
        Self::from_lines(input.split('\n'))
    }

    /// Creates a decoder over an already-split line sequence.
    pub fn from_lines(lines: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            lines: lines.into_iter().collect(),
            pos: 0,
        }
    }

    /// Decodes the document into a value.
    pub fn decode(&mut self) -> Result<TextValue, TextError> {
        let header = self.lines.first().copied().unwrap_or("");
        if header != HEADER {
            return Err(TextError::BadHeader {
                header: header.to_owned(),
            });
        }
        self.pos = 1;
        self.parse_scope(0)
    }

    fn parse_scope(&mut self, level: usize) -> Result<TextValue, TextError> {
        let mut shape: Option<Scope> = None;
        loop {
            let Some(&raw) = self.lines.get(self.pos) else {
                return Ok(close_scope(shape));
            };
            let line = self.pos + 1;
            let tabs = count_tabs(raw);
            let content = &raw[tabs..];
            if content.trim().is_empty() {
                self.pos += 1;
                continue;
            }
            if tabs <= level && content.starts_with(';') {
                self.pos += 1;
                continue;
            }
            if tabs > level {
                return Err(TextError::NestingTooDeep { level, line });
            }
            if tabs < level {
                // Dedent: the shallower line stays for the enclosing scopes.
                return Ok(close_scope(shape));
            }
            self.pos += 1;
            let scope = shape.get_or_insert_with(|| {
                if content.starts_with('-') {
                    Scope::List(Vec::new())
                } else {
                    Scope::Map(BTreeMap::new())
                }
            });
            match scope {
                Scope::List(items) => {
                    let rest = match content.strip_prefix('-') {
                        Some(rest) => rest,
                        None => return Err(TextError::ExpectedListItem { line }),
                    };
                    let element = match rest {
                        ":" => self.parse_scope(level + 1)?,
                        "\"" => TextValue::Str(self.read_multiline(line)?),
                        "\\:" => TextValue::leaf(":"),
                        "\\\"" => TextValue::leaf("\""),
                        _ => TextValue::leaf(rest),
                    };
                    items.push(element);
                }
                Scope::Map(entries) => {
                    let Some((key, op, tail)) = split_entry(content) else {
                        return Err(TextError::MissingKeyValueSeparator { line });
                    };
                    let value = if op == b'=' {
                        match tail {
                            "\"" => TextValue::Str(self.read_multiline(line)?),
                            "\\\"" => TextValue::leaf("\""),
                            _ => TextValue::leaf(tail),
                        }
                    } else {
                        if !tail.is_empty() {
                            return Err(TextError::UnexpectedAfterColon {
                                line,
                                trailing: tail.to_owned(),
                            });
                        }
                        self.parse_scope(level + 1)?
                    };
                    // Duplicate keys: last write wins.
                    entries.insert(key, value);
                }
            }
        }
    }

    /// Accumulates raw lines until a lone `"` closes the value. The body
    /// has no indentation rules; lines are taken verbatim, and a line equal
    /// to `\"` contributes a literal `"`.
    fn read_multiline(&mut self, opened_at: usize) -> Result<String, TextError> {
        let mut parts: Vec<&str> = Vec::new();
        loop {
            let Some(&raw) = self.lines.get(self.pos) else {
                return Err(TextError::UnterminatedMultiLineValue { line: opened_at });
            };
            self.pos += 1;
            match raw {
                "\"" => return Ok(parts.join("\n")),
                "\\\"" => parts.push("\""),
                _ => parts.push(raw),
            }
        }
    }
}
