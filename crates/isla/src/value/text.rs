//! [`TextValue`] — the value type of the text format.

use std::collections::BTreeMap;
use std::fmt;

use super::sealed::Sealed;
use super::{Kind, ValueError};

/// A value decoded from or encoded into the ISLA text format.
///
/// Leaves are UTF-8 strings; map keys are strings. `None` is the sentinel
/// for a scope that was declared but contains no entries — distinct from an
/// empty list and an empty map.
///
/// # Example
///
/// ```
/// use isla::TextValue;
///
/// let v = TextValue::map([
///     ("name", TextValue::leaf("Alice")),
///     ("tags", TextValue::list(["a", "b"])),
/// ]);
/// assert_eq!(v["name"], "Alice");
/// assert_eq!(v["tags"][1], "b");
/// assert_eq!(v.get_leaf("missing", "fallback"), "fallback");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextValue {
    /// A string leaf.
    Str(String),
    /// An ordered sequence of values.
    List(Vec<TextValue>),
    /// A keyed collection; keys are unique, iteration is sorted.
    Map(BTreeMap<String, TextValue>),
    /// A declared-but-empty scope.
    None,
}

static NONE: TextValue = TextValue::None;

impl TextValue {
    /// Builds a leaf from anything string-like.
    pub fn leaf(s: impl Into<String>) -> Self {
        TextValue::Str(s.into())
    }

    /// Builds a list from an iterator of values (or anything convertible).
    pub fn list<T: Into<TextValue>>(items: impl IntoIterator<Item = T>) -> Self {
        TextValue::List(items.into_iter().map(Into::into).collect())
    }

    /// Builds a map from key-value pairs. Duplicate keys keep the last value.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<TextValue>,
    {
        TextValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// The tag of this value.
    pub fn kind(&self) -> Kind {
        match self {
            TextValue::Str(_) => Kind::Leaf,
            TextValue::List(_) => Kind::List,
            TextValue::Map(_) => Kind::Map,
            TextValue::None => Kind::None,
        }
    }

    /// The leaf payload, or `TypeMismatch`.
    pub fn as_leaf(&self) -> Result<&str, ValueError> {
        match self {
            TextValue::Str(s) => Ok(s),
            other => Err(ValueError::TypeMismatch {
                requested: Kind::Leaf,
                actual: other.kind(),
            }),
        }
    }

    /// The list elements, or `TypeMismatch`.
    pub fn as_list(&self) -> Result<&[TextValue], ValueError> {
        match self {
            TextValue::List(items) => Ok(items),
            other => Err(ValueError::TypeMismatch {
                requested: Kind::List,
                actual: other.kind(),
            }),
        }
    }

    /// The map entries, or `TypeMismatch`.
    pub fn as_map(&self) -> Result<&BTreeMap<String, TextValue>, ValueError> {
        match self {
            TextValue::Map(entries) => Ok(entries),
            other => Err(ValueError::TypeMismatch {
                requested: Kind::Map,
                actual: other.kind(),
            }),
        }
    }

    /// The leaf payload, or `""` for any other tag.
    pub fn leaf_or_empty(&self) -> &str {
        self.as_leaf().unwrap_or("")
    }

    /// The list elements, or an empty slice for any other tag.
    pub fn list_or_empty(&self) -> &[TextValue] {
        self.as_list().unwrap_or(&[])
    }

    /// The map entries, or an empty map for any other tag.
    pub fn map_or_empty(&self) -> &BTreeMap<String, TextValue> {
        static EMPTY: BTreeMap<String, TextValue> = BTreeMap::new();
        self.as_map().unwrap_or(&EMPTY)
    }

    /// Looks up a list position or map key, with a typed error on failure.
    pub fn index<I: TextIndex>(&self, idx: I) -> Result<&TextValue, ValueError> {
        idx.index_into(self)
    }

    /// Whether the map contains `key`; `TypeMismatch` if this is not a map.
    pub fn contains(&self, key: &str) -> Result<bool, ValueError> {
        self.as_map().map(|entries| entries.contains_key(key))
    }

    /// Looks up a list position or map key; `None` on any failure.
    pub fn get<I: TextIndex>(&self, idx: I) -> Option<&TextValue> {
        idx.index_into(self).ok()
    }

    /// Mutable lookup; `None` on any failure.
    pub fn get_mut<I: TextIndex>(&mut self, idx: I) -> Option<&mut TextValue> {
        idx.index_into_mut(self)
    }

    /// Looks up a list position or map key, falling back on any failure.
    pub fn get_or<'a, I: TextIndex>(&'a self, idx: I, fallback: &'a TextValue) -> &'a TextValue {
        self.get(idx).unwrap_or(fallback)
    }

    /// Leaf payload at `idx`, or `fallback` when absent or not a leaf.
    pub fn get_leaf<'a, I: TextIndex>(&'a self, idx: I, fallback: &'a str) -> &'a str {
        self.get(idx)
            .and_then(|v| v.as_leaf().ok())
            .unwrap_or(fallback)
    }

    /// List elements at `idx`, or `fallback` when absent or not a list.
    pub fn get_list<'a, I: TextIndex>(
        &'a self,
        idx: I,
        fallback: &'a [TextValue],
    ) -> &'a [TextValue] {
        self.get(idx)
            .and_then(|v| v.as_list().ok())
            .unwrap_or(fallback)
    }

    /// Map entries at `idx`, or `fallback` when absent or not a map.
    pub fn get_map<'a, I: TextIndex>(
        &'a self,
        idx: I,
        fallback: &'a BTreeMap<String, TextValue>,
    ) -> &'a BTreeMap<String, TextValue> {
        self.get(idx)
            .and_then(|v| v.as_map().ok())
            .unwrap_or(fallback)
    }

    /// Applies `f` to the value at `idx`, or returns `fallback` when absent.
    pub fn parse<I, T>(&self, idx: I, f: impl FnOnce(&TextValue) -> T, fallback: T) -> T
    where
        I: TextIndex,
    {
        match self.get(idx) {
            Some(v) => f(v),
            None => fallback,
        }
    }

    /// Applies `f` to the leaf payload at `idx`, or returns `fallback` when
    /// absent or type-mismatched.
    pub fn parse_leaf<I, T>(&self, idx: I, f: impl FnOnce(&str) -> T, fallback: T) -> T
    where
        I: TextIndex,
    {
        match self.get(idx).and_then(|v| v.as_leaf().ok()) {
            Some(s) => f(s),
            None => fallback,
        }
    }

    /// Applies `f` to the list elements at `idx`, or returns `fallback`.
    pub fn parse_list<I, T>(&self, idx: I, f: impl FnOnce(&[TextValue]) -> T, fallback: T) -> T
    where
        I: TextIndex,
    {
        match self.get(idx).and_then(|v| v.as_list().ok()) {
            Some(items) => f(items),
            None => fallback,
        }
    }

    /// Applies `f` to the map entries at `idx`, or returns `fallback`.
    pub fn parse_map<I, T>(
        &self,
        idx: I,
        f: impl FnOnce(&BTreeMap<String, TextValue>) -> T,
        fallback: T,
    ) -> T
    where
        I: TextIndex,
    {
        match self.get(idx).and_then(|v| v.as_map().ok()) {
            Some(entries) => f(entries),
            None => fallback,
        }
    }

    /// Iterates `(position, value)` pairs of a list or `(key, value)` pairs
    /// of a map. Any other tag yields nothing.
    pub fn entries(&self) -> TextEntries<'_> {
        TextEntries(match self {
            TextValue::List(items) => EntriesInner::List(items.iter().enumerate()),
            TextValue::Map(entries) => EntriesInner::Map(entries.iter()),
            _ => EntriesInner::Empty,
        })
    }
}

/// One step of [`TextValue::entries`]: a list position or a map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey<'a> {
    Index(usize),
    Key(&'a str),
}

/// Iterator returned by [`TextValue::entries`].
pub struct TextEntries<'a>(EntriesInner<'a>);

enum EntriesInner<'a> {
    List(std::iter::Enumerate<std::slice::Iter<'a, TextValue>>),
    Map(std::collections::btree_map::Iter<'a, String, TextValue>),
    Empty,
}

impl<'a> Iterator for TextEntries<'a> {
    type Item = (TextKey<'a>, &'a TextValue);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.0 {
            EntriesInner::List(iter) => iter.next().map(|(i, v)| (TextKey::Index(i), v)),
            EntriesInner::Map(iter) => iter.next().map(|(k, v)| (TextKey::Key(k), v)),
            EntriesInner::Empty => None,
        }
    }
}

/// Types usable to navigate a [`TextValue`]: list positions (`usize`) and
/// map keys (`&str`, `String`). Modeled on `serde_json::value::Index`.
pub trait TextIndex: Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, v: &'v TextValue) -> Result<&'v TextValue, ValueError>;
    #[doc(hidden)]
    fn index_into_mut<'v>(&self, v: &'v mut TextValue) -> Option<&'v mut TextValue>;
    #[doc(hidden)]
    fn index_or_insert<'v>(&self, v: &'v mut TextValue) -> &'v mut TextValue;
}

impl TextIndex for usize {
    fn index_into<'v>(&self, v: &'v TextValue) -> Result<&'v TextValue, ValueError> {
        let items = v.as_list()?;
        items.get(*self).ok_or(ValueError::ListIndexOutOfRange {
            index: *self,
            length: items.len(),
        })
    }

    fn index_into_mut<'v>(&self, v: &'v mut TextValue) -> Option<&'v mut TextValue> {
        match v {
            TextValue::List(items) => items.get_mut(*self),
            _ => None,
        }
    }

    fn index_or_insert<'v>(&self, v: &'v mut TextValue) -> &'v mut TextValue {
        match v {
            TextValue::List(items) => {
                let length = items.len();
                items.get_mut(*self).unwrap_or_else(|| {
                    panic!("list index {self} out of range, length is {length}")
                })
            }
            other => panic!("cannot index a {} with a list position", other.kind()),
        }
    }
}

impl TextIndex for str {
    fn index_into<'v>(&self, v: &'v TextValue) -> Result<&'v TextValue, ValueError> {
        v.as_map()?.get(self).ok_or_else(|| ValueError::MapKeyNotFound {
            key: self.to_owned(),
        })
    }

    fn index_into_mut<'v>(&self, v: &'v mut TextValue) -> Option<&'v mut TextValue> {
        match v {
            TextValue::Map(entries) => entries.get_mut(self),
            _ => None,
        }
    }

    fn index_or_insert<'v>(&self, v: &'v mut TextValue) -> &'v mut TextValue {
        // Assigning into a declared-but-empty scope turns it into a map.
        if let TextValue::None = v {
            *v = TextValue::Map(BTreeMap::new());
        }
        match v {
            TextValue::Map(entries) => entries.entry(self.to_owned()).or_insert(TextValue::None),
            other => panic!("cannot index a {} with a map key", other.kind()),
        }
    }
}

impl TextIndex for String {
    fn index_into<'v>(&self, v: &'v TextValue) -> Result<&'v TextValue, ValueError> {
        self.as_str().index_into(v)
    }

    fn index_into_mut<'v>(&self, v: &'v mut TextValue) -> Option<&'v mut TextValue> {
        self.as_str().index_into_mut(v)
    }

    fn index_or_insert<'v>(&self, v: &'v mut TextValue) -> &'v mut TextValue {
        self.as_str().index_or_insert(v)
    }
}

impl<T: TextIndex + ?Sized> TextIndex for &T {
    fn index_into<'v>(&self, v: &'v TextValue) -> Result<&'v TextValue, ValueError> {
        (**self).index_into(v)
    }

    fn index_into_mut<'v>(&self, v: &'v mut TextValue) -> Option<&'v mut TextValue> {
        (**self).index_into_mut(v)
    }

    fn index_or_insert<'v>(&self, v: &'v mut TextValue) -> &'v mut TextValue {
        (**self).index_or_insert(v)
    }
}

impl<I: TextIndex> std::ops::Index<I> for TextValue {
    type Output = TextValue;

    /// Ergonomic navigation; any miss yields the `None` sentinel rather
    /// than panicking, so lookups chain (`v["a"][0]["b"]`).
    fn index(&self, idx: I) -> &TextValue {
        idx.index_into(self).unwrap_or(&NONE)
    }
}

impl<I: TextIndex> std::ops::IndexMut<I> for TextValue {
    /// Index-assignment. Inserts missing map keys (turning a `None` value
    /// into a map first); panics on an out-of-range list position or a
    /// tag/index mismatch, like `serde_json::Value` does.
    fn index_mut(&mut self, idx: I) -> &mut TextValue {
        idx.index_or_insert(self)
    }
}

impl fmt::Display for TextValue {
    /// Debug rendering: leaves verbatim, lists as `[a, b, c]`, maps as
    /// `[k: v, k: v]`, the sentinel as `none`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextValue::Str(s) => f.write_str(s),
            TextValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            TextValue::Map(entries) => {
                f.write_str("[")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("]")
            }
            TextValue::None => f.write_str("none"),
        }
    }
}

impl From<&str> for TextValue {
    fn from(s: &str) -> Self {
        TextValue::Str(s.to_owned())
    }
}

impl From<String> for TextValue {
    fn from(s: String) -> Self {
        TextValue::Str(s)
    }
}

impl From<Vec<TextValue>> for TextValue {
    fn from(items: Vec<TextValue>) -> Self {
        TextValue::List(items)
    }
}

impl From<BTreeMap<String, TextValue>> for TextValue {
    fn from(entries: BTreeMap<String, TextValue>) -> Self {
        TextValue::Map(entries)
    }
}

impl FromIterator<TextValue> for TextValue {
    fn from_iter<I: IntoIterator<Item = TextValue>>(iter: I) -> Self {
        TextValue::List(iter.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<TextValue>> FromIterator<(K, V)> for TextValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        TextValue::map(iter)
    }
}

// Payload comparisons: a leaf equals its string, never any other tag.

impl PartialEq<str> for TextValue {
    fn eq(&self, other: &str) -> bool {
        matches!(self, TextValue::Str(s) if s == other)
    }
}

impl PartialEq<&str> for TextValue {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for TextValue {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<TextValue> for str {
    fn eq(&self, other: &TextValue) -> bool {
        other == self
    }
}

impl PartialEq<TextValue> for &str {
    fn eq(&self, other: &TextValue) -> bool {
        other == *self
    }
}

impl PartialEq<TextValue> for String {
    fn eq(&self, other: &TextValue) -> bool {
        other == self.as_str()
    }
}

impl PartialEq<Vec<TextValue>> for TextValue {
    fn eq(&self, other: &Vec<TextValue>) -> bool {
        matches!(self, TextValue::List(items) if items == other)
    }
}

impl PartialEq<BTreeMap<String, TextValue>> for TextValue {
    fn eq(&self, other: &BTreeMap<String, TextValue>) -> bool {
        matches!(self, TextValue::Map(entries) if entries == other)
    }
}
