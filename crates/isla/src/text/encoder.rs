//! `TextEncoder` — serializes a [`TextValue`] into ISLA text lines.

use std::collections::BTreeMap;

use super::decoder::HEADER;
use super::error::TextError;
use crate::value::TextValue;

/// Text encoder writing into a reusable `String` buffer.
///
/// The top-level value must be a list or a map; the header line plus one
/// line per entry follow, nested scopes indented by one tab per level. Map
/// entries are emitted in key order, so output is reproducible.
pub struct TextEncoder {
    out: String,
}

impl Default for TextEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEncoder {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    /// Encodes a value into a full document (no trailing LF).
    pub fn encode(&mut self, value: &TextValue) -> Result<String, TextError> {
        self.out.clear();
        self.out.push_str(HEADER);
        match value {
            TextValue::List(items) => self.write_list(items, 0),
            TextValue::Map(entries) => self.write_map(entries, 0),
            TextValue::Str(_) => {
                return Err(TextError::NotEncodable {
                    reason: "leaf at top",
                })
            }
            TextValue::None => {
                return Err(TextError::NotEncodable {
                    reason: "none at top",
                })
            }
        }
        Ok(std::mem::take(&mut self.out))
    }

    /// Starts a fresh line at the given indentation level.
    fn line(&mut self, level: usize) {
        self.out.push('\n');
        for _ in 0..level {
            self.out.push('\t');
        }
    }

    fn write_list(&mut self, items: &[TextValue], level: usize) {
        for item in items {
            self.line(level);
            self.out.push('-');
            match item {
                TextValue::Str(s) if s.contains('\n') => {
                    self.out.push('"');
                    self.write_multiline_body(s);
                }
                TextValue::Str(s) => match s.as_str() {
                    // Bare `:` and `"` would read as scope/multi-line
                    // openers.
                    ":" => self.out.push_str("\\:"),
                    "\"" => self.out.push_str("\\\""),
                    _ => self.out.push_str(s),
                },
                TextValue::List(children) => {
                    self.out.push(':');
                    self.write_list(children, level + 1);
                }
                TextValue::Map(children) => {
                    self.out.push(':');
                    self.write_map(children, level + 1);
                }
                TextValue::None => self.out.push(':'),
            }
        }
    }

    fn write_map(&mut self, entries: &BTreeMap<String, TextValue>, level: usize) {
        for (key, value) in entries {
            self.line(level);
            push_escaped_key(&mut self.out, key);
            match value {
                TextValue::Str(s) if s.contains('\n') => {
                    self.out.push_str("=\"");
                    self.write_multiline_body(s);
                }
                TextValue::Str(s) => {
                    self.out.push('=');
                    if s == "\"" {
                        self.out.push_str("\\\"");
                    } else {
                        self.out.push_str(s);
                    }
                }
                TextValue::List(children) => {
                    self.out.push(':');
                    self.write_list(children, level + 1);
                }
                TextValue::Map(children) => {
                    self.out.push(':');
                    self.write_map(children, level + 1);
                }
                TextValue::None => self.out.push(':'),
            }
        }
    }

    /// Emits the body of a multi-line value verbatim (no indentation) and
    /// the closing lone `"`. A body line equal to `"` is escaped to `\"`.
    fn write_multiline_body(&mut self, s: &str) {
        for line in s.split('\n') {
            self.out.push('\n');
            if line == "\"" {
                self.out.push_str("\\\"");
            } else {
                self.out.push_str(line);
            }
        }
        self.out.push_str("\n\"");
    }
}

/// Escapes a map key for emission: a leading `-` becomes `\-`, every `=`
/// becomes `\=` and every `:` becomes `\:`; all other characters pass
/// through verbatim.
fn push_escaped_key(out: &mut String, key: &str) {
    for (i, c) in key.chars().enumerate() {
        match c {
            '-' if i == 0 => out.push_str("\\-"),
            '=' => out.push_str("\\="),
            ':' => out.push_str("\\:"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: &TextValue) -> Result<String, TextError> {
        TextEncoder::new().encode(value)
    }

    #[test]
    fn top_level_must_be_a_scope() {
        assert_eq!(
            encode(&TextValue::leaf("x")),
            Err(TextError::NotEncodable {
                reason: "leaf at top",
            })
        );
        assert_eq!(
            encode(&TextValue::None),
            Err(TextError::NotEncodable {
                reason: "none at top",
            })
        );
    }

    #[test]
    fn flat_map_sorted_keys() {
        let v = TextValue::map([("b", "2"), ("a", "1")]);
        assert_eq!(encode(&v).unwrap(), "ISLA1\na=1\nb=2");
    }

    #[test]
    fn list_escapes() {
        let v = TextValue::list([";)", ":3", ":", "\""]);
        assert_eq!(encode(&v).unwrap(), "ISLA1\n-;)\n-:3\n-\\:\n-\\\"");
    }

    #[test]
    fn odd_keys_are_escaped() {
        let v = TextValue::map([
            ("-5 - 3", "negative five minus three"),
            ("=", "equals"),
            (":)", "smiley"),
        ]);
        let doc = encode(&v).unwrap();
        assert!(doc.contains("\n\\-5 - 3=negative five minus three"));
        assert!(doc.contains("\n\\==equals"));
        assert!(doc.contains("\n\\:)=smiley"));
    }

    #[test]
    fn nested_scopes_indent_with_tabs() {
        let v = TextValue::map([(
            "outer",
            TextValue::map([("inner", TextValue::list(["x"]))]),
        )]);
        assert_eq!(encode(&v).unwrap(), "ISLA1\nouter:\n\tinner:\n\t\t-x");
    }

    #[test]
    fn multiline_value_in_map() {
        let v = TextValue::map([("k", "a\nb")]);
        assert_eq!(encode(&v).unwrap(), "ISLA1\nk=\"\na\nb\n\"");
    }

    #[test]
    fn multiline_body_escapes_lone_quote() {
        let v = TextValue::map([("k", "a\n\"\nb")]);
        assert_eq!(encode(&v).unwrap(), "ISLA1\nk=\"\na\n\\\"\nb\n\"");
    }

    #[test]
    fn multiline_value_in_list() {
        let v = TextValue::list(["a\nb"]);
        assert_eq!(encode(&v).unwrap(), "ISLA1\n-\"\na\nb\n\"");
    }

    #[test]
    fn quote_leaf_in_map() {
        let v = TextValue::map([("k", "\"")]);
        assert_eq!(encode(&v).unwrap(), "ISLA1\nk=\\\"");
    }

    #[test]
    fn none_children_emit_bare_openers() {
        let v = TextValue::map([("a", TextValue::None), ("b", TextValue::leaf("1"))]);
        assert_eq!(encode(&v).unwrap(), "ISLA1\na:\nb=1");
        let v = TextValue::list([TextValue::None]);
        assert_eq!(encode(&v).unwrap(), "ISLA1\n-:");
    }

    #[test]
    fn empty_collections_emit_bare_openers() {
        let v = TextValue::map([("z", TextValue::List(Vec::new()))]);
        assert_eq!(encode(&v).unwrap(), "ISLA1\nz:");
    }
}
