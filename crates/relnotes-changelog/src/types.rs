//! Changelog types

use serde::{Deserialize, Serialize};

pub use relnotes_core::config::EntryCase;

/// A section in a changelog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section title
    pub title: String,
    /// Normalized commit lines filed under this section
    pub entries: Vec<String>,
}

impl Section {
    /// Create a new section
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Add an entry to the section
    pub fn add_entry(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// Check if section is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered sections produced by one classification run.
///
/// Iteration order is the order sections were added, which the renderer
/// relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionMap {
    sections: Vec<Section>,
}

impl SectionMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty section and return its index
    pub fn push_section(&mut self, title: impl Into<String>) -> usize {
        self.sections.push(Section::new(title));
        self.sections.len() - 1
    }

    /// Add an entry to the section at `index`
    pub(crate) fn add_entry(&mut self, index: usize, entry: String) {
        self.sections[index].add_entry(entry);
    }

    /// Entries of the section with the given title
    pub fn get(&self, title: &str) -> Option<&[String]> {
        self.sections
            .iter()
            .find(|s| s.title == title)
            .map(|s| s.entries.as_slice())
    }

    /// Iterate over sections in order, including empty ones
    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    /// Section titles in order
    pub fn titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.title.as_str()).collect()
    }

    /// Number of sections, including empty ones
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True when no section holds any entry
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(Section::is_empty)
    }

    /// Total number of entries across sections
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }
}

impl<'a> IntoIterator for &'a SectionMap {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
