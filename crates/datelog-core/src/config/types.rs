//! Configuration types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ConfigError;

use super::defaults::{DEFAULT_FILE_NAME, DEFAULT_REMOTE, DEFAULT_TITLE};

/// Main configuration for Datelog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Git query configuration
    pub git: GitConfig,

    /// Changelog output configuration
    pub changelog: ChangelogConfig,
}

impl Config {
    /// Layer command-line overrides on top of this configuration
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(remote) = overrides.remote_name {
            self.git.remote = remote;
        }
        if let Some(op) = overrides.range_operator {
            self.git.range_operator = op;
        }
        if let Some(include_body) = overrides.include_body {
            self.git.include_body = include_body;
        }
        if let Some(url) = overrides.repo_url {
            self.changelog.repo_url = Some(url);
        }
        if let Some(file_name) = overrides.file_name {
            self.changelog.file_name = file_name;
        }
        if let Some(path) = overrides.changelog_path {
            self.changelog.path = Some(path);
        }
        if let Some(title) = overrides.title {
            self.changelog.title = title;
        }
        if let Some(reverse) = overrides.reverse {
            self.changelog.reverse = reverse;
        }
        self
    }
}

/// Git query configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Remote whose URL is used for commit links
    pub remote: String,

    /// How the two references are joined in the log query
    pub range_operator: RangeOperator,

    /// Include full commit bodies instead of subjects only
    pub include_body: bool,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            remote: DEFAULT_REMOTE.to_string(),
            range_operator: RangeOperator::default(),
            include_body: false,
        }
    }
}

/// Changelog output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file name
    pub file_name: String,

    /// Directory the changelog is written to (default: working directory)
    pub path: Option<PathBuf>,

    /// Section title template, see [`DEFAULT_TITLE`]
    pub title: String,

    /// Reverse the commit order before grouping
    pub reverse: bool,

    /// Repository web URL used for commit links (default: remote URL)
    pub repo_url: Option<String>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
            path: None,
            title: DEFAULT_TITLE.to_string(),
            reverse: false,
            repo_url: None,
        }
    }
}

impl ChangelogConfig {
    /// Full path of the changelog file, relative paths resolved against `cwd`
    pub fn output_path(&self, cwd: &Path) -> PathBuf {
        match &self.path {
            Some(dir) => cwd.join(dir).join(&self.file_name),
            None => cwd.join(&self.file_name),
        }
    }
}

/// Syntax used to join the two references of a log query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeOperator {
    /// `from...to`, commits reachable from either side but not both
    #[serde(rename = "...")]
    ThreeDot,
    /// `from..to`, commits reachable from `to` but not from `from`
    #[default]
    #[serde(rename = "..")]
    TwoDot,
    /// `from to` as two separate revisions
    #[serde(rename = "space")]
    Space,
}

impl RangeOperator {
    /// The textual form accepted on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThreeDot => "...",
            Self::TwoDot => "..",
            Self::Space => "space",
        }
    }

    /// Revision arguments for a log query between `from` and `to`
    pub fn revision_args(&self, from: &str, to: &str) -> Vec<String> {
        match self {
            Self::ThreeDot => vec![format!("{}...{}", from, to)],
            Self::TwoDot => vec![format!("{}..{}", from, to)],
            Self::Space => vec![from.to_string(), to.to_string()],
        }
    }
}

impl fmt::Display for RangeOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeOperator {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "..." => Ok(Self::ThreeDot),
            ".." => Ok(Self::TwoDot),
            "space" | " " => Ok(Self::Space),
            _ => Err(ConfigError::InvalidValue {
                field: "git.range_operator".to_string(),
                message: format!("'{}' must be one of: ..., .., space", s),
            }),
        }
    }
}

/// Values supplied on the command line; `None` keeps the layered value
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub repo_url: Option<String>,
    pub file_name: Option<String>,
    pub changelog_path: Option<PathBuf>,
    pub reverse: Option<bool>,
    pub title: Option<String>,
    pub remote_name: Option<String>,
    pub range_operator: Option<RangeOperator>,
    pub include_body: Option<bool>,
}
