//! Configuration validation

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Placeholders understood by the title template
pub const TITLE_PLACEHOLDERS: [&str; 3] = ["{day}", "{month}", "{year}"];

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{[A-Za-z_]+\}").expect("valid placeholder regex"))
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_git(config)?;
    validate_changelog(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_git(config: &Config) -> Result<()> {
    if config.git.remote.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "git.remote".to_string(),
            message: "remote cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if config.changelog.file_name.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file_name".to_string(),
            message: "file name cannot be empty".to_string(),
        }
        .into());
    }

    if config.changelog.title.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.title".to_string(),
            message: "title template cannot be empty".to_string(),
        }
        .into());
    }

    // Unknown or missing placeholders are legal, only suspicious.
    let unknown = unknown_placeholders(&config.changelog.title);
    if !unknown.is_empty() {
        warn!(title = %config.changelog.title, ?unknown, "title contains unknown placeholders");
    }
    if !TITLE_PLACEHOLDERS
        .iter()
        .any(|p| config.changelog.title.contains(p))
    {
        warn!(
            title = %config.changelog.title,
            "title has no date placeholder, all commits will share one section"
        );
    }

    Ok(())
}

/// Placeholders in `title` that the title formatter will leave untouched
pub fn unknown_placeholders(title: &str) -> Vec<String> {
    placeholder_pattern()
        .find_iter(title)
        .map(|m| m.as_str())
        .filter(|p| !TITLE_PLACEHOLDERS.contains(p))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_empty_remote() {
        let mut config = Config::default();
        config.git.remote = " ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_file_name() {
        let mut config = Config::default();
        config.changelog.file_name = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_title() {
        let mut config = Config::default();
        config.changelog.title = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_title_without_placeholder_is_allowed() {
        let mut config = Config::default();
        config.changelog.title = "Changes".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_unknown_placeholders() {
        assert!(unknown_placeholders("Timeline: {day}-{month}-{year}").is_empty());
        assert_eq!(
            unknown_placeholders("{weekday} {day} {hour}"),
            vec!["{weekday}".to_string(), "{hour}".to_string()]
        );
    }
}
