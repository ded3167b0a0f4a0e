//! Error types for Datelog

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using DatelogError
pub type Result<T> = std::result::Result<T, DatelogError>;

/// Main error type for Datelog operations
#[derive(Debug, Error)]
pub enum DatelogError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
///
/// Every variant here is a precondition failure: the run cannot start
/// producing output without a repository, a remote URL and a commit log.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not a git repository
    #[error("Not a git repository or no git binary found: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// Remote not found
    #[error("Failed to get the repository URL: remote '{0}' not found")]
    RemoteNotFound(String),

    /// Remote exists but has no URL configured
    #[error("Failed to get the repository URL: remote '{0}' has no URL")]
    RemoteUrlMissing(String),

    /// The git binary could not be started
    #[error("Failed to run git: {0}")]
    BinaryUnavailable(String),

    /// The log query exited with a failure status
    #[error("Failed to get the git log for {range}: {stderr}")]
    LogFailed { range: String, stderr: String },

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Failed to write changelog
    #[error("Failed to write changelog to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output directory does not exist
    #[error("Changelog directory not found at {0}")]
    DirectoryNotFound(PathBuf),
}

impl DatelogError {
    /// Whether this error means the run could not start at all
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Git(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_errors_are_preconditions() {
        let err: DatelogError = GitError::RemoteNotFound("origin".to_string()).into();
        assert!(err.is_precondition());
        assert_eq!(
            err.to_string(),
            "Failed to get the repository URL: remote 'origin' not found"
        );
    }

    #[test]
    fn test_changelog_errors_are_not_preconditions() {
        let err: DatelogError =
            ChangelogError::DirectoryNotFound(PathBuf::from("/missing")).into();
        assert!(!err.is_precondition());
        assert!(err.to_string().contains("/missing"));
    }

    #[test]
    fn test_log_failed_message() {
        let err = GitError::LogFailed {
            range: "v1..HEAD".to_string(),
            stderr: "unknown revision".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to get the git log for v1..HEAD: unknown revision"
        );
    }
}
