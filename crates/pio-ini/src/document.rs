//! Ordered document, section, and value types

use serde::Serialize;
use std::fmt;

use crate::error::Result;

/// Result of a fallible [`Value::try_map`].
type MapResult<T, E> = std::result::Result<T, E>;

/// A configuration value as written in the source.
///
/// Serializes as a plain string or an array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Single-line value
    Scalar(String),
    /// Multi-line value, one element per non-blank continuation line
    List(Vec<String>),
}

impl Value {
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::Scalar(value.into())
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            Self::Scalar(_) => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Apply `f` to the scalar, or to every list element in order.
    pub fn try_map<E>(
        &self,
        mut f: impl FnMut(&str) -> MapResult<String, E>,
    ) -> MapResult<Self, E> {
        match self {
            Self::Scalar(s) => Ok(Self::Scalar(f(s)?)),
            Self::List(items) => items
                .iter()
                .map(|item| f(item))
                .collect::<MapResult<Vec<_>, E>>()
                .map(Self::List),
        }
    }
}

/// Lists render one element per line.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => f.write_str(s),
            Self::List(items) => f.write_str(&items.join("\n")),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::scalar(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Scalar(s)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// A named, ordered group of key/value entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<(String, Value)>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Builder-style insert, mostly useful in tests.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set `key` to `value`.
    ///
    /// An existing key keeps its position and the old value is returned; a
    /// new key is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Section {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// One parsed configuration source.
///
/// Section names are unique and keep their file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    /// Parse INI text.
    ///
    /// Grammar:
    /// - `[name]` starts a section
    /// - `key = value` adds an entry to the current section
    /// - lines indented deeper than their key continue it and turn the value
    ///   into a [`Value::List`]; blank lines are skipped
    /// - lines starting with `#` or `;` are comments, as is anything after a
    ///   whitespace-preceded `#` or `;`
    pub fn parse(source: &str) -> Result<Self> {
        crate::parser::parse(source)
    }

    /// Build a document from already-constructed sections.
    ///
    /// Later sections with a repeated name are merged into the first one
    /// so that section names stay unique.
    pub fn from_sections(sections: impl IntoIterator<Item = Section>) -> Self {
        let mut doc = Self::default();
        for section in sections {
            match doc.sections.iter_mut().find(|s| s.name == section.name) {
                Some(existing) => {
                    for (key, value) in section {
                        existing.insert(key, value);
                    }
                }
                None => doc.sections.push(section),
            }
        }
        doc
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub(crate) fn push_section(&mut self, section: Section) {
        self.sections.push(section);
    }
}

impl IntoIterator for Document {
    type Item = Section;
    type IntoIter = std::vec::IntoIter<Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.into_iter()
    }
}
