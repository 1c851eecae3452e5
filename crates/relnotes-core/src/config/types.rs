//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for relnotes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog configuration
    pub changelog: ChangelogConfig,
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Commit prefixes, one section per prefix in this order
    pub prefixes: Vec<String>,

    /// Title of the section collecting lines no prefix matched
    pub catch_all: Option<String>,

    /// Entry casing; each command has its own default when unset
    pub entry_case: Option<EntryCase>,

    /// Directory receiving `{version}.txt` files
    pub dir: PathBuf,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            prefixes: Vec::new(),
            catch_all: None,
            entry_case: None,
            dir: PathBuf::from("."),
        }
    }
}

/// How entry text is cased after trimming.
///
/// Section titles are always capitalized; this only affects entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryCase {
    /// Keep the entry as written
    #[default]
    Preserve,
    /// Uppercase the first letter and lowercase the rest
    Capitalize,
}

impl ChangelogConfig {
    /// Whether any section at all is configured
    pub fn has_sections(&self) -> bool {
        !self.prefixes.is_empty() || self.catch_all.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_changelog_config() {
        let config = ChangelogConfig::default();
        assert!(config.prefixes.is_empty());
        assert!(config.catch_all.is_none());
        assert!(config.entry_case.is_none());
        assert_eq!(config.dir, PathBuf::from("."));
        assert!(!config.has_sections());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[changelog]\nprefixes = [\"fixed\"]\n").unwrap();
        assert_eq!(config.changelog.prefixes, vec!["fixed"]);
        assert_eq!(config.changelog.dir, PathBuf::from("."));
        assert!(config.changelog.has_sections());
    }

    #[test]
    fn test_entry_case_from_toml() {
        let config: Config = toml::from_str("[changelog]\nentry_case = \"capitalize\"\n").unwrap();
        assert_eq!(config.changelog.entry_case, Some(EntryCase::Capitalize));
    }
}
