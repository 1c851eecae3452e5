//! Prefix-based line classification

mod normalize;

pub use normalize::{capitalize, collapse_blank_lines, normalize_entry, LogLines};

use relnotes_core::config::validation::{require_sections, validate_sections};
use relnotes_core::config::{ChangelogConfig, DEFAULT_CATCH_ALL};
use relnotes_core::{ChangelogError, Result};
use tracing::{debug, instrument, trace};

use crate::types::{EntryCase, SectionMap};

/// Settings for one classification run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Prefixes in priority order
    pub prefixes: Vec<String>,
    /// Title of the catch-all section; unmatched lines are dropped when unset
    pub catch_all: Option<String>,
    /// Casing applied to entries
    pub entry_case: EntryCase,
    /// When the catch-all title names a prefix section, file unmatched lines
    /// under that section instead of rejecting the configuration
    pub merge_catch_all: bool,
}

impl ClassifierConfig {
    /// Every unmatched line goes to an "Other" section and entries keep
    /// their casing. An `other` prefix shares that section.
    pub fn grouped(prefixes: Vec<String>) -> Self {
        Self {
            prefixes,
            catch_all: Some(DEFAULT_CATCH_ALL.to_string()),
            entry_case: EntryCase::Preserve,
            merge_catch_all: true,
        }
    }

    /// Unmatched lines go to `catch_all` when given, otherwise they are
    /// dropped. Entries are capitalized.
    pub fn sectioned(prefixes: Vec<String>, catch_all: Option<String>) -> Self {
        Self {
            prefixes,
            catch_all,
            entry_case: EntryCase::Capitalize,
            merge_catch_all: false,
        }
    }

    /// Build from the `[changelog]` table of a config file
    pub fn from_config(config: &ChangelogConfig) -> Self {
        Self {
            prefixes: config.prefixes.clone(),
            catch_all: config.catch_all.clone(),
            entry_case: config.entry_case.unwrap_or_default(),
            merge_catch_all: false,
        }
    }

    /// Override the entry casing when one is given
    pub fn with_entry_case(mut self, entry_case: Option<EntryCase>) -> Self {
        if let Some(case) = entry_case {
            self.entry_case = case;
        }
        self
    }
}

#[derive(Debug, Clone)]
struct PrefixRule {
    folded: String,
    char_len: usize,
    title: String,
}

/// Files commit lines into sections by their leading keyword
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<PrefixRule>,
    /// Title of a catch-all section placed after the prefix sections
    catch_all: Option<String>,
    /// Section receiving unmatched lines
    catch_all_index: Option<usize>,
    entry_case: EntryCase,
}

impl Classifier {
    /// Create a classifier, rejecting configurations with duplicate
    /// prefixes or no section at all.
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        let shared = if config.merge_catch_all {
            config.catch_all.as_deref().and_then(|title| {
                let folded = title.to_lowercase();
                config
                    .prefixes
                    .iter()
                    .position(|prefix| prefix.to_lowercase() == folded)
            })
        } else {
            None
        };
        let separate_catch_all = match shared {
            Some(_) => None,
            None => config.catch_all.as_deref(),
        };

        validate_sections(&config.prefixes, separate_catch_all)?;
        require_sections(&config.prefixes, config.catch_all.as_deref())?;

        let rules: Vec<PrefixRule> = config
            .prefixes
            .iter()
            .map(|prefix| PrefixRule {
                folded: prefix.to_lowercase(),
                char_len: prefix.chars().count(),
                title: capitalize(prefix),
            })
            .collect();

        let catch_all_index = shared.or_else(|| separate_catch_all.map(|_| rules.len()));
        if let Some(index) = shared {
            debug!(section = %rules[index].title, "catch-all shares a prefix section");
        }

        Ok(Self {
            rules,
            catch_all: separate_catch_all.map(capitalize),
            catch_all_index,
            entry_case: config.entry_case,
        })
    }

    /// Empty map with every configured section in output order
    pub fn empty_sections(&self) -> SectionMap {
        let mut sections = SectionMap::new();
        for rule in &self.rules {
            sections.push_section(rule.title.clone());
        }
        if let Some(title) = &self.catch_all {
            sections.push_section(title.clone());
        }
        sections
    }

    /// Classify raw log text into sections.
    ///
    /// Fails with [`ChangelogError::EmptyInput`] when the text holds nothing
    /// but whitespace.
    #[instrument(skip(self, raw), fields(input_len = raw.len(), prefixes = self.rules.len()))]
    pub fn classify(&self, raw: &str) -> Result<SectionMap> {
        let text = collapse_blank_lines(raw);
        if text.trim().is_empty() {
            return Err(ChangelogError::EmptyInput.into());
        }

        let mut sections = self.empty_sections();
        let mut dropped = 0usize;

        for line in LogLines::new(&text) {
            match self.match_prefix(line) {
                Some((index, rest)) => {
                    trace!(section = %self.rules[index].title, "prefix matched");
                    sections.add_entry(index, normalize_entry(rest, self.entry_case));
                }
                None => match self.catch_all_index {
                    Some(index) => sections.add_entry(index, normalize_entry(line, self.entry_case)),
                    None => dropped += 1,
                },
            }
        }

        debug!(
            entries = sections.entry_count(),
            dropped, "log lines classified"
        );
        Ok(sections)
    }

    /// First rule whose prefix starts `line`, with the prefix cut off
    fn match_prefix<'l>(&self, line: &'l str) -> Option<(usize, &'l str)> {
        let folded = line.to_lowercase();
        self.rules
            .iter()
            .position(|rule| folded.starts_with(&rule.folded))
            .map(|index| (index, normalize::skip_chars(line, self.rules[index].char_len)))
    }
}
