//! Folding of the root document and its `extra_configs` into one structure
//!
//! Sections keep first-seen order across the fold sequence. Within a section
//! a repeated key overwrites the value in place and a new key is appended.
//! Only the root's `extra_configs` is followed; a secondary document's own
//! `extra_configs` is merged as an ordinary key.

use pio_ini::{Document, Section, Value};

use super::source::DocumentSource;
use super::values::multi_values;
use crate::Result;

/// Reserved section carrying loader directives.
pub const PLATFORMIO_SECTION: &str = "platformio";

/// Directive listing secondary documents, in fold order.
pub const EXTRA_CONFIGS_OPTION: &str = "extra_configs";

/// Outcome of folding one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FoldStats {
    /// Sections appended to the global order
    pub new_sections: usize,
    /// Keys appended to an existing section
    pub new_keys: usize,
    /// Keys whose value was replaced in place
    pub overridden: usize,
}

/// The ordered result of merging every document of a project.
///
/// Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedConfig {
    sections: Vec<Section>,
}

impl MergedConfig {
    /// Merge `root` and every document its `extra_configs` resolves to.
    pub fn build(root: Document, source: &dyn DocumentSource) -> Result<Self> {
        let mut merged = Self::default();
        merged.fold(root);

        let extra_configs = merged
            .get(PLATFORMIO_SECTION, EXTRA_CONFIGS_OPTION)
            .map(multi_values)
            .unwrap_or_default();

        for path in extra_configs {
            let docs = source.resolve(&path)?;
            tracing::debug!(%path, documents = docs.len(), "Resolved extra config");
            for doc in docs {
                merged.fold(doc);
            }
        }

        Ok(merged)
    }

    /// Fold documents in order without following any `extra_configs`.
    pub fn from_documents(docs: impl IntoIterator<Item = Document>) -> Self {
        let mut merged = Self::default();
        for doc in docs {
            merged.fold(doc);
        }
        merged
    }

    fn fold(&mut self, doc: Document) -> FoldStats {
        let mut stats = FoldStats::default();

        for section in doc {
            match self.sections.iter_mut().find(|s| s.name() == section.name()) {
                Some(existing) => {
                    for (key, value) in section {
                        if existing.insert(key, value).is_some() {
                            stats.overridden += 1;
                        } else {
                            stats.new_keys += 1;
                        }
                    }
                }
                None => {
                    stats.new_sections += 1;
                    self.sections.push(section);
                }
            }
        }

        tracing::debug!(
            new_sections = stats.new_sections,
            new_keys = stats.new_keys,
            overridden = stats.overridden,
            "Folded configuration document"
        );
        stats
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name() == name)
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&Value> {
        self.section(section)?.get(key)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(Section::name)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}
