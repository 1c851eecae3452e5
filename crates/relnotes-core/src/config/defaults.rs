//! Default configuration values

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "relnotes.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "relnotes.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".relnotes.yaml";

/// Section title used by the grouped variant for unmatched lines
pub const DEFAULT_CATCH_ALL: &str = "Other";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        DEFAULT_CONFIG_TOML,
        ALT_CONFIG_FILE,
        ".relnotes.toml",
    ]
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# relnotes configuration

changelog:
  # Lines starting with one of these words (any case) get their own section
  prefixes:
    - fixed
    - added
  # Section for every other line; remove to drop unmatched lines
  catch_all: other
  # preserve or capitalize
  entry_case: capitalize
  dir: changelogs
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, EntryCase};

    #[test]
    fn test_template_parses() {
        let config: Config = serde_yaml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.changelog.prefixes, vec!["fixed", "added"]);
        assert_eq!(config.changelog.catch_all.as_deref(), Some("other"));
        assert_eq!(config.changelog.entry_case, Some(EntryCase::Capitalize));
    }
}
