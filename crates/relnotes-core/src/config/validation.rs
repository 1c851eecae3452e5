//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    validate_sections(
        &config.changelog.prefixes,
        config.changelog.catch_all.as_deref(),
    )
}

/// Validate a prefix list and optional catch-all title.
///
/// Prefixes are compared case-insensitively, so `Fixed` and `fixed` name the
/// same section and are rejected as duplicates. The catch-all title may not
/// fold onto a prefix section either.
pub fn validate_sections(prefixes: &[String], catch_all: Option<&str>) -> Result<()> {
    let mut seen: Vec<String> = Vec::with_capacity(prefixes.len());

    for (i, prefix) in prefixes.iter().enumerate() {
        if prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("changelog.prefixes[{}]", i),
                message: "prefix cannot be empty".to_string(),
            }
            .into());
        }

        if prefix.trim() != prefix {
            return Err(ConfigError::InvalidValue {
                field: format!("changelog.prefixes[{}]", i),
                message: "prefix cannot start or end with whitespace".to_string(),
            }
            .into());
        }

        let folded = prefix.to_lowercase();
        if seen.contains(&folded) {
            return Err(ConfigError::DuplicatePrefix(prefix.clone()).into());
        }
        seen.push(folded);
    }

    if let Some(title) = catch_all {
        if title.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "changelog.catch_all".to_string(),
                message: "section title cannot be empty".to_string(),
            }
            .into());
        }

        if seen.contains(&title.to_lowercase()) {
            return Err(ConfigError::InvalidValue {
                field: "changelog.catch_all".to_string(),
                message: format!("'{}' is already a prefix section", title),
            }
            .into());
        }
    }

    Ok(())
}

/// Fail unless there is at least one section to file lines under
pub fn require_sections(prefixes: &[String], catch_all: Option<&str>) -> Result<()> {
    if prefixes.is_empty() && catch_all.is_none() {
        return Err(ConfigError::NoSections.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RelnotesError;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_duplicate_prefix_ignores_case() {
        let err = validate_sections(&strings(&["fixed", "Fixed"]), None).unwrap_err();
        assert!(matches!(
            err,
            RelnotesError::Config(ConfigError::DuplicatePrefix(ref p)) if p == "Fixed"
        ));
    }

    #[test]
    fn test_empty_prefix_rejected() {
        assert!(validate_sections(&strings(&["fixed", "  "]), None).is_err());
    }

    #[test]
    fn test_padded_prefix_rejected() {
        assert!(validate_sections(&strings(&[" fixed"]), None).is_err());
    }

    #[test]
    fn test_catch_all_collides_with_prefix() {
        let mut config = Config::default();
        config.changelog.prefixes = strings(&["fixed", "other"]);
        config.changelog.catch_all = Some("Other".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_valid_sections() {
        assert!(validate_sections(&strings(&["fixed", "added"]), Some("other")).is_ok());
    }

    #[test]
    fn test_require_sections() {
        assert!(matches!(
            require_sections(&[], None),
            Err(RelnotesError::Config(ConfigError::NoSections))
        ));
        assert!(require_sections(&[], Some("other")).is_ok());
        assert!(require_sections(&strings(&["fixed"]), None).is_ok());
    }
}
